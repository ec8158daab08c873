//! Service settings loaded via OrthoConfig.
//!
//! Values are layered from command-line flags, `BLOGLIST_*` environment
//! variables and an optional configuration file.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
const DEFAULT_PORT: u16 = 3003;

/// Runtime settings for the blog-list server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "BLOGLIST")]
pub struct BloglistSettings {
    /// Address to bind; defaults to all interfaces.
    pub host: Option<IpAddr>,
    /// Port to bind; defaults to 3003.
    pub port: Option<u16>,
    /// Mount `POST /api/testing/reset`. Never enable in production.
    #[ortho_config(default = false)]
    pub testing_endpoints: bool,
    /// Expire login contexts this many seconds after issue.
    pub session_ttl_secs: Option<u64>,
}

impl BloglistSettings {
    /// Socket address the server binds to.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(
            self.host.unwrap_or(DEFAULT_HOST),
            self.port.unwrap_or(DEFAULT_PORT),
        )
    }
}
