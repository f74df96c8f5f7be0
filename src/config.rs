use std::net::IpAddr;

use derive_more::Display;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
pub const PROXY_IP: &str = "152.53.253.78";
pub const VALID_KEY: &str = "davidik228";

#[derive(Debug, Display, PartialEq)]
pub enum ConfigError {
    #[display(fmt = "PROXY_IP is not an ip address: {}", _0)]
    BadProxyIp(String),
    #[display(fmt = "ACTIVATION_KEY must not be empty")]
    EmptyActivationKey,
}

impl std::error::Error for ConfigError {}

/// Settings shared by every request. Built once at startup, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_address: String,
    pub proxy_ip: String,
    pub activation_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: DEFAULT_BIND_ADDRESS.into(),
            proxy_ip: PROXY_IP.into(),
            activation_key: VALID_KEY.into(),
        }
    }
}

impl Config {
    /// Reads overrides from the process environment. Call after `dotenv`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let proxy_ip = lookup("PROXY_IP").unwrap_or(defaults.proxy_ip);
        if proxy_ip.parse::<IpAddr>().is_err() {
            return Err(ConfigError::BadProxyIp(proxy_ip));
        }

        let activation_key = lookup("ACTIVATION_KEY").unwrap_or(defaults.activation_key);
        if activation_key.is_empty() {
            return Err(ConfigError::EmptyActivationKey);
        }

        Ok(Self {
            bind_address: lookup("BIND_ADDRESS").unwrap_or(defaults.bind_address),
            proxy_ip,
            activation_key,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_in(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        move |name| vars.get(name).cloned()
    }

    #[test]
    fn empty_environment_gives_defaults() {
        let config = Config::from_lookup(lookup_in(&[])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.proxy_ip, "152.53.253.78");
        assert_eq!(config.activation_key, "davidik228");
        assert_eq!(config.bind_address, "0.0.0.0:8000");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_in(&[
            ("BIND_ADDRESS", "127.0.0.1:9000"),
            ("PROXY_IP", "10.0.0.1"),
            ("ACTIVATION_KEY", "secret"),
        ]))
        .unwrap();

        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.proxy_ip, "10.0.0.1");
        assert_eq!(config.activation_key, "secret");
    }

    #[test]
    fn ipv6_proxy_ip_is_accepted() {
        let config = Config::from_lookup(lookup_in(&[("PROXY_IP", "::1")])).unwrap();

        assert_eq!(config.proxy_ip, "::1");
    }

    #[test]
    fn bad_proxy_ip_is_rejected() {
        let err = Config::from_lookup(lookup_in(&[("PROXY_IP", "not-an-ip")])).unwrap_err();

        assert_eq!(err, ConfigError::BadProxyIp("not-an-ip".into()));
        assert_eq!(err.to_string(), "PROXY_IP is not an ip address: not-an-ip");
    }

    #[test]
    fn empty_key_is_rejected() {
        let err = Config::from_lookup(lookup_in(&[("ACTIVATION_KEY", "")])).unwrap_err();

        assert_eq!(err, ConfigError::EmptyActivationKey);
    }
}
