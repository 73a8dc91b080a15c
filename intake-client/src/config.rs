//! Client configuration

/// Client configuration for reaching the submission endpoint
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Endpoint base URL (e.g., "http://localhost:8080")
    pub base_url: String,

    /// Request timeout in seconds
    ///
    /// Covers the whole submission including attachment upload.
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an intake client from this configuration
    pub fn build_client(&self) -> super::IntakeClient {
        super::IntakeClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}
