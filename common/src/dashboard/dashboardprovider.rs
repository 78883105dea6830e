// SPDX-License-Identifier: MIT

use env_dashboard_model::DashboardData;

/// Errors of a [`DashboardProvider`].
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("malformed dashboard data: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type DashboardProviderPointer = Box<dyn DashboardProvider>;

/// Provides the values shown on the dashboard, apart from the clock.
pub trait DashboardProvider {
    /// Fetches the dashboard data.
    fn dashboard(&self) -> Result<DashboardData, ProviderError>;
}
