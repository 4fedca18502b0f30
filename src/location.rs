//! Location resolution for the forecast screen
//!
//! Mediates host permission and single-fix coordinate acquisition behind
//! the [`LocationProvider`] seam, so a platform backend can be swapped in
//! without touching the pipeline.

use crate::config::LocationConfig;
use crate::error::ClimaError;
use crate::models::Position;
use crate::Result;
use async_trait::async_trait;
use tracing::{debug, info};

/// Outcome of a foreground location permission request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Host capability for permission and position acquisition
#[async_trait]
pub trait LocationProvider: Send + Sync {
    /// Request foreground location permission. May suspend for an
    /// unbounded time while the host shows a permission prompt.
    async fn request_permission(&self) -> Result<Permission>;

    /// Acquire a single current position sample (no continuous tracking).
    /// Only called after permission was granted.
    async fn current_position(&self) -> Result<Position>;
}

/// Provider backed by coordinates the host granted through configuration
///
/// A missing `[location]` config section models a refused permission.
#[derive(Debug, Clone)]
pub struct ConfiguredLocationProvider {
    fix: Option<Position>,
}

impl ConfiguredLocationProvider {
    /// Create a provider from the optional `[location]` config section
    pub fn new(location: Option<&LocationConfig>) -> Self {
        Self {
            fix: location.map(|l| Position::new(l.latitude, l.longitude)),
        }
    }
}

#[async_trait]
impl LocationProvider for ConfiguredLocationProvider {
    async fn request_permission(&self) -> Result<Permission> {
        Ok(if self.fix.is_some() {
            Permission::Granted
        } else {
            Permission::Denied
        })
    }

    async fn current_position(&self) -> Result<Position> {
        self.fix
            .ok_or_else(|| ClimaError::position_unavailable("no position fix available"))
    }
}

/// Service resolving a single position fix per app start
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve the current position: permission first, then one fix.
    ///
    /// Denial stops the pipeline with [`ClimaError::PermissionDenied`];
    /// no retry is attempted and no fetch happens afterwards. Previous
    /// fixes are never cached; every app start re-resolves.
    pub async fn resolve<P: LocationProvider>(provider: &P) -> Result<Position> {
        debug!("Requesting foreground location permission");

        match provider.request_permission().await? {
            Permission::Denied => {
                info!("Location permission denied by the host");
                Err(ClimaError::PermissionDenied)
            }
            Permission::Granted => {
                debug!("Permission granted, acquiring position sample");
                let position = provider.current_position().await?;
                info!("Resolved position: {}", position.format_coordinates());
                Ok(position)
            }
        }
    }

    /// Cancellation is not exposed to the user; kept as a no-op so the
    /// interface can grow one later.
    pub fn cancel() {}
}
