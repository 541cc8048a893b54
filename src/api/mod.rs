//! Dashboard facade: configuration, transport, fetching and JSON output.

mod dashboard;
mod dashboard_config;
mod fetcher;
mod json_contract;
mod transport;

#[cfg(feature = "http-transport")]
pub use dashboard::build_figures;
pub use dashboard::{DashboardRun, IndicatorDashboard, figures_from_datasets};
pub use dashboard_config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DashboardConfig};
pub use fetcher::{IndicatorDataset, fetch_all, fetch_indicator, records_from_body};
pub use json_contract::{
    FIGURES_JSON_SCHEMA_V1, FiguresJsonContractV1, figures_from_json_compat_str,
    figures_to_json_contract_v1_pretty, figures_to_json_pretty,
};
#[cfg(feature = "http-transport")]
pub use transport::HttpTransport;
pub use transport::Transport;
