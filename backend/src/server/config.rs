//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::sync::Arc;

use bloglist::config::BloglistSettings;
use bloglist::domain::{FixedLifetime, NeverExpires, SessionExpiryPolicy};

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) testing_endpoints: bool,
    pub(crate) session_expiry: Arc<dyn SessionExpiryPolicy>,
}

impl ServerConfig {
    /// Construct a configuration that serves on `bind_addr` with sessions
    /// that never expire and the reset endpoint unmounted.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            testing_endpoints: false,
            session_expiry: Arc::new(NeverExpires),
        }
    }

    /// Derive the server configuration from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &BloglistSettings) -> Self {
        let config =
            Self::new(settings.bind_addr()).with_testing_endpoints(settings.testing_endpoints);
        match settings.session_ttl_secs {
            Some(secs) => config.with_session_expiry(Arc::new(FixedLifetime::from_secs(secs))),
            None => config,
        }
    }

    /// Mount `POST /api/testing/reset`.
    #[must_use]
    pub fn with_testing_endpoints(mut self, enabled: bool) -> Self {
        self.testing_endpoints = enabled;
        self
    }

    /// Replace the session expiry policy.
    #[must_use]
    pub fn with_session_expiry(mut self, expiry: Arc<dyn SessionExpiryPolicy>) -> Self {
        self.session_expiry = expiry;
        self
    }

    /// Return the socket address the server will bind to.
    #[cfg_attr(
        not(any(test, doctest)),
        expect(dead_code, reason = "Exercised by bootstrap tests")
    )]
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
