//! The two tool operations. Each one always produces display text; upstream
//! failures become a stage-specific message rather than an error.

pub mod alerts;
pub mod forecast;

pub use alerts::{get_alerts, AlertsFailure};
pub use forecast::{get_forecast, ForecastFailure};
