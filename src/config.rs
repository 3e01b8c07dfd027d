use std::env;
use tracing::warn;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8090;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Reads `HOST` and `PORT`, falling back to the loopback stub address.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PORT value '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        Self { host, port }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_to_loopback_8090() {
        let config = Config::from_lookup(lookup_from(&[]));
        assert_eq!(config, Config::default());
        assert_eq!(config.bind_addr(), "127.0.0.1:8090");
    }

    #[test]
    fn reads_host_and_port() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "0.0.0.0"), ("PORT", "9000")]));
        assert_eq!(config.bind_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn bad_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("PORT", "eighty")]));
        assert_eq!(config.port, 8090);
    }

    #[test]
    fn blank_host_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("HOST", "  ")]));
        assert_eq!(config.host, "127.0.0.1");
    }
}
