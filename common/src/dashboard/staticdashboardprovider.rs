// SPDX-License-Identifier: MIT

use env_dashboard_model::DashboardData;

use crate::dashboard::{DashboardProvider, ProviderError};

/// Serves the fixed values compiled into the binary.
#[derive(Clone, Debug, Default)]
pub struct StaticDashboardProvider {
    data: DashboardData,
}

impl StaticDashboardProvider {
    pub fn new() -> Result<Self, ProviderError> {
        let json_data = std::include_str!("./dashboard.json");
        let data = serde_json::from_str::<DashboardData>(json_data)?;

        log::debug!(
            "Loaded dashboard data with {} history points",
            data.history.len()
        );

        Ok(Self { data })
    }
}

impl DashboardProvider for StaticDashboardProvider {
    fn dashboard(&self) -> Result<DashboardData, ProviderError> {
        Ok(self.data.clone())
    }
}
