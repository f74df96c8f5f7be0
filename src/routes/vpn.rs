mod constants;
mod metrics;
mod types;

use actix_web::http::{header, Method};
use actix_web::{web, HttpResponse, ResponseError};
use chrono::Local;

use crate::auth::{authorize, key_matches};
use crate::config::Config;
use crate::errors::ServiceError;

use self::constants::*;
use self::types::*;

async fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS))
        .insert_header((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS))
        .finish()
}

async fn read_body(payload: web::Payload) -> Result<web::Bytes, ServiceError> {
    match payload.to_bytes_limited(MAX_BODY_SIZE).await {
        Ok(Ok(body)) => Ok(body),
        Ok(Err(e)) => {
            log::debug!("payload: {}", e);

            Err(ServiceError::BadRequest {
                message: e.to_string(),
            })
        }
        Err(_) => Err(ServiceError::PayloadTooLarge),
    }
}

fn parse_action_request(body: &[u8]) -> Result<ActionRequest, ServiceError> {
    // no body behaves like an empty object
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ActionRequest::default());
    }

    serde_json::from_slice(body).map_err(|e| {
        log::debug!("json: {}", e);

        ServiceError::BadRequest {
            message: e.to_string(),
        }
    })
}

async fn dispatch_action(
    payload: web::Payload,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let request = parse_action_request(&read_body(payload).await?)?;
    let key = request.key();

    let action = request.action().and_then(Action::parse).ok_or_else(|| {
        log::debug!("unknown action: {:?}", request.action);

        ServiceError::UnknownAction
    })?;

    match action {
        Action::ValidateKey => {
            let valid = key_matches(key, &config);

            log::debug!("key validation: valid={}", valid);

            Ok(HttpResponse::Ok().json(KeyValidation {
                valid,
                message: if valid { KEY_ACTIVATED } else { KEY_REJECTED },
            }))
        }
        Action::Connect => {
            if !key_matches(key, &config) {
                log::warn!("connect refused: bad activation key");

                return Err(ServiceError::ConnectRefused);
            }

            log::info!("connected to {}", config.proxy_ip);

            Ok(HttpResponse::Ok().json(Connected {
                success: true,
                proxy_ip: config.proxy_ip.clone(),
                connected_at: metrics::isoformat(Local::now().naive_local()),
                message: format!("{} {}", CONNECTED_PREFIX, config.proxy_ip),
            }))
        }
        // nothing is tracked between requests, so there is nothing to tear down
        Action::Disconnect => {
            log::info!("disconnected");

            Ok(HttpResponse::Ok().json(Disconnected {
                success: true,
                message: DISCONNECTED,
            }))
        }
    }
}

async fn connection_status(
    query: web::Query<KeyQuery>,
    config: web::Data<Config>,
) -> Result<HttpResponse, ServiceError> {
    let key = query.into_inner().key.unwrap_or_default();

    authorize(&key, &config)?;

    let metrics = metrics::sample(&mut rand::thread_rng(), Local::now().naive_local());

    Ok(HttpResponse::Ok().json(ConnectionStatus {
        proxy_ip: config.proxy_ip.clone(),
        status: STATUS_CONNECTED,
        metrics,
    }))
}

async fn method_not_allowed() -> HttpResponse {
    ServiceError::MethodNotAllowed.error_response()
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::method(Method::OPTIONS).to(preflight))
            .route(web::post().to(dispatch_action))
            .route(web::get().to(connection_status))
            .default_service(web::route().to(method_not_allowed)),
    );
}
