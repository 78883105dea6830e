// SPDX-License-Identifier: MIT

mod dashboardprovider;
mod staticdashboardprovider;

pub use dashboardprovider::DashboardProvider;
pub use dashboardprovider::DashboardProviderPointer;
pub use dashboardprovider::ProviderError;

pub use staticdashboardprovider::StaticDashboardProvider;
