//! Driving port behind the test-only reset endpoint.

use async_trait::async_trait;

use crate::domain::Error;

/// Administrative port wiping all accounts, blogs and sessions.
///
/// Only mounted when testing endpoints are enabled in configuration.
#[async_trait]
pub trait TestingReset: Send + Sync {
    /// Clear every store.
    async fn reset(&self) -> Result<(), Error>;
}
