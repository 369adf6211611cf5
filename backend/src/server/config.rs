//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::path::PathBuf;

use prometheus::Registry;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) output_dir: PathBuf,
    pub(crate) metrics_namespace: String,
    pub(crate) metrics_subsystem: String,
    pub(crate) registry: Registry,
}

impl ServerConfig {
    /// Construct a configuration with default metric naming and a fresh
    /// registry.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            bind_addr,
            output_dir: output_dir.into(),
            metrics_namespace: "docforge".to_owned(),
            metrics_subsystem: "pdf_service".to_owned(),
            registry: Registry::new(),
        }
    }

    /// Override the namespace and subsystem prefixes of exported metrics.
    #[must_use]
    pub fn with_metrics_naming(
        mut self,
        namespace: impl Into<String>,
        subsystem: impl Into<String>,
    ) -> Self {
        self.metrics_namespace = namespace.into();
        self.metrics_subsystem = subsystem.into();
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }

    /// Return the registry collectors are registered against.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn any_addr() -> SocketAddr {
        "127.0.0.1:0".parse().expect("socket address")
    }

    #[test]
    fn defaults_use_the_service_metric_naming() {
        let config = ServerConfig::new(any_addr(), "out");
        assert_eq!(config.metrics_namespace, "docforge");
        assert_eq!(config.metrics_subsystem, "pdf_service");
    }

    #[test]
    fn metric_naming_can_be_overridden() {
        let config =
            ServerConfig::new(any_addr(), "out").with_metrics_naming("my_group", "string_service");
        assert_eq!(config.metrics_namespace, "my_group");
        assert_eq!(config.metrics_subsystem, "string_service");
    }
}
