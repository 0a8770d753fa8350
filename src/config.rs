//! Process configuration, from command-line flags or the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "moviehub")]
#[command(about = "In-memory movie catalogue served over HTTP")]
pub struct ServerConfig {
    /// Interface to bind.
    #[arg(long, env = "MOVIEHUB_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,
    /// TCP port; 0 picks a free one.
    #[arg(long, env = "MOVIEHUB_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
    /// tracing filter directive, e.g. `info` or `moviehub=debug`.
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_filter: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            log_filter: "info".to_string(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
