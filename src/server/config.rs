use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Bind address of the HTTP service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8000,
        }
    }
}

impl ServerConfig {
    /// `LOCUSTGEN_BIND` and `LOCUSTGEN_PORT`; unparsable values fall back to defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind = lookup("LOCUSTGEN_BIND")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.bind);

        let port = lookup("LOCUSTGEN_PORT")
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.port);

        Self { bind, port }
    }

    /// Apply command line overrides on top of the environment
    pub fn with_overrides(mut self, bind: Option<IpAddr>, port: Option<u16>) -> Self {
        if let Some(bind) = bind {
            self.bind = bind;
        }
        if let Some(port) = port {
            self.port = port;
        }
        self
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_lookup(|_| None);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_env_and_overrides() {
        let config = ServerConfig::from_lookup(|key| match key {
            "LOCUSTGEN_BIND" => Some("0.0.0.0".to_string()),
            "LOCUSTGEN_PORT" => Some("not-a-port".to_string()),
            _ => None,
        });
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8000");

        let config = config.with_overrides(None, Some(9090));
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:9090");
    }
}
