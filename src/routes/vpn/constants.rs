use std::ops::RangeInclusive;

pub const KEY_ACTIVATED: &str = "Ключ активирован";
pub const KEY_REJECTED: &str = "Неверный ключ активации";
pub const DISCONNECTED: &str = "Отключено от Proxy";
pub const CONNECTED_PREFIX: &str = "Подключено к Proxy";

pub const STATUS_CONNECTED: &str = "connected";

pub const DOWNLOAD_SPEED: RangeInclusive<f64> = 80.0..=180.0;
pub const UPLOAD_SPEED: RangeInclusive<f64> = 40.0..=90.0;
pub const LATENCY: RangeInclusive<u32> = 8..=25;

pub const MAX_BODY_SIZE: usize = 4096;

pub const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";
