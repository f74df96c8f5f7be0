use constant_time_eq::constant_time_eq;

use crate::config::Config;
use crate::errors::ServiceError;

pub fn key_matches(candidate: &str, config: &Config) -> bool {
    constant_time_eq(candidate.as_bytes(), config.activation_key.as_bytes())
}

pub fn authorize(candidate: &str, config: &Config) -> Result<(), ServiceError> {
    if !key_matches(candidate, config) {
        log::warn!("rejected activation key");

        return Err(ServiceError::InvalidKey);
    }

    Ok(())
}
