use serde::{Deserialize, Serialize};
use serde_json::Value;

// fields stay loosely typed: a key of the wrong JSON type is a wrong key,
// not a malformed request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActionRequest {
    pub action: Option<Value>,
    pub key: Option<Value>,
}

impl ActionRequest {
    pub fn action(&self) -> Option<&str> {
        self.action.as_ref().and_then(Value::as_str)
    }

    pub fn key(&self) -> &str {
        self.key.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct KeyQuery {
    pub key: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub enum Action {
    ValidateKey,
    Connect,
    Disconnect,
}

impl Action {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "validate_key" => Some(Action::ValidateKey),
            "connect" => Some(Action::Connect),
            "disconnect" => Some(Action::Disconnect),
            _ => None,
        }
    }
}

#[derive(Serialize)]
pub struct KeyValidation {
    pub valid: bool,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct Connected {
    pub success: bool,
    pub proxy_ip: String,
    pub connected_at: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct Disconnected {
    pub success: bool,
    pub message: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConnectionMetrics {
    pub download_speed: f64,
    pub upload_speed: f64,
    pub latency: u32,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ConnectionStatus {
    pub proxy_ip: String,
    pub status: &'static str,
    pub metrics: ConnectionMetrics,
}
