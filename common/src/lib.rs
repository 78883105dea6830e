//! Data sources and the clock driver of the environmental dashboard.

pub mod clock;
pub mod dashboard;
pub mod ticker;

pub use clock::{Clock, ManualClock, SystemClock};
pub use ticker::{ClockDriver, ManualTimer, PeriodicTimer};
