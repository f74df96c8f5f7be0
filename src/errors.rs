use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};

use derive_more::Display;
use serde::Serialize;

pub const KEY_REQUIRED: &str = "Требуется валидный ключ активации";

#[derive(Serialize)]
struct JsonError<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    success: Option<bool>,
    error: &'a str,
}

#[derive(Debug, Display, PartialEq)]
pub enum ServiceError {
    #[display(fmt = "BadRequest: {}", message)]
    BadRequest { message: String },
    #[display(fmt = "NotFound")]
    NotFound,
    #[display(fmt = "InvalidKey")]
    InvalidKey,
    // connect reports the failure with an explicit success flag
    #[display(fmt = "ConnectRefused")]
    ConnectRefused,
    #[display(fmt = "MethodNotAllowed")]
    MethodNotAllowed,
    #[display(fmt = "UnknownAction")]
    UnknownAction,
    #[display(fmt = "PayloadTooLarge")]
    PayloadTooLarge,
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest { .. } | ServiceError::UnknownAction => StatusCode::BAD_REQUEST,
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::InvalidKey | ServiceError::ConnectRefused => StatusCode::FORBIDDEN,
            ServiceError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ServiceError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let (success, error) = match self {
            ServiceError::BadRequest { message } => (None, message.as_str()),
            ServiceError::NotFound => (None, "Not found"),
            ServiceError::InvalidKey => (None, KEY_REQUIRED),
            ServiceError::ConnectRefused => (Some(false), KEY_REQUIRED),
            ServiceError::MethodNotAllowed => (None, "Method not allowed"),
            ServiceError::UnknownAction => (None, "Unknown action"),
            ServiceError::PayloadTooLarge => (None, "Payload too large"),
        };

        HttpResponse::build(self.status_code()).json(JsonError { success, error })
    }
}
