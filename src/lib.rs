//! indicator-charts: World Bank indicator series reshaped into chart descriptors.
//!
//! The pipeline resolves a country selection, queries four fixed indicators,
//! flattens the API records and emits one plotly-shaped descriptor per chart.
//! Legend order is shared across charts so colors stay consistent.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, IndicatorDashboard};
#[cfg(feature = "http-transport")]
pub use api::build_figures;
pub use error::{DashboardError, DashboardResult};
