mod vpn;

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;
use actix_web::{web, HttpResponse, ResponseError};

use crate::errors::ServiceError;

/// Allows any origin on every response the app produces, 404s included.
pub fn cors() -> DefaultHeaders {
    DefaultHeaders::new().add((header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"))
}

pub async fn not_found() -> HttpResponse {
    ServiceError::NotFound.error_response()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    let query_config = web::QueryConfig::default().error_handler(|e, _rq| {
        log::debug!("query: {}", e);

        ServiceError::BadRequest {
            message: e.to_string(),
        }
        .into()
    });

    cfg.app_data(query_config).configure(vpn::config);
}
