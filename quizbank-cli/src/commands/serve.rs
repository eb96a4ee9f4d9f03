//! HTTP server command
//!
//! Builds a fresh in-memory store, injects it into the service and runs
//! the API until Ctrl+C/SIGTERM.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use quizbank_core::{InMemoryStore, QuestionService};
use quizbank_server::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to
    #[arg(long, env = "QUIZBANK_HOST", default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, short = 'p', env = "QUIZBANK_PORT", default_value_t = 8080)]
    pub port: u16,

    /// Request timeout in seconds
    #[arg(long, env = "QUIZBANK_TIMEOUT", default_value_t = 30)]
    pub timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long, env = "QUIZBANK_CORS_PERMISSIVE")]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
            request_timeout: Duration::from_secs(self.timeout),
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = args.server_config();
    tracing::info!("Starting quizbank server on {}", config.bind_addr);

    let service = QuestionService::new(Arc::new(InMemoryStore::new()));

    // Blocks until shutdown
    run_server(service, config).await.context("Server error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_server_config() {
        let args = ServeArgs::try_parse_from(["serve"]).unwrap();
        let config = args.server_config();
        let defaults = ServerConfig::default();

        assert_eq!(config.bind_addr, defaults.bind_addr);
        assert_eq!(config.request_timeout, defaults.request_timeout);
        assert!(!config.cors_permissive);
    }

    #[test]
    fn flags_override_defaults() {
        let args = ServeArgs::try_parse_from([
            "serve",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--timeout",
            "5",
            "--cors-permissive",
        ])
        .unwrap();
        let config = args.server_config();

        assert_eq!(config.bind_addr, SocketAddr::from(([127, 0, 0, 1], 9000)));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert!(config.cors_permissive);
    }
}
