//! Common interface for the two registration data sources

use async_trait::async_trait;

use dossier_core::RegistrationRecord;

/// A source of ownership/registration data for an IP's network block.
///
/// Implementations absorb their own failures: a lookup that cannot
/// produce data returns an empty record (all fields absent), never an
/// error. The reconciler's two inputs both arrive through this seam.
#[async_trait]
pub trait RegistrationSource: Send + Sync {
    /// Short source identifier for logging
    fn id(&self) -> &'static str;

    /// Extract whatever registration fields this source can supply
    async fn lookup(&self, ip: &str) -> RegistrationRecord;
}
