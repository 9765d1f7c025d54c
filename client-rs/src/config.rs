//! Client configuration

/// Default service hostname
pub const DEFAULT_HOSTNAME: &str = "localhost";

/// Default service port
pub const DEFAULT_PORT: u16 = 80;

/// Connection settings for a Thunderpush server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Hostname of the service
    pub hostname: String,
    /// Port of the service
    pub port: u16,
    /// Public API key
    pub key: String,
    /// Secret API key
    pub secret: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            hostname: DEFAULT_HOSTNAME.to_string(),
            port: DEFAULT_PORT,
            key: String::new(),
            secret: String::new(),
        }
    }
}

impl ClientConfig {
    /// Creates a config for the default host and port
    pub fn new(key: &str, secret: &str) -> Self {
        Self {
            key: key.to_string(),
            secret: secret.to_string(),
            ..Default::default()
        }
    }

    /// Sets the hostname
    pub fn hostname(mut self, hostname: &str) -> Self {
        self.hostname = hostname.to_string();
        self
    }

    /// Sets the port
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Returns the base URL of the service
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.hostname, self.port)
    }
}
