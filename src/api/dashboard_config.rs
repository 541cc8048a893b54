use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_PER_PAGE, ReferenceYears};
use crate::error::{DashboardError, DashboardResult};

pub const DEFAULT_BASE_URL: &str = "http://api.worldbank.org/v2";
pub const DEFAULT_TIMEOUT_MS: u64 = 12_000;

/// Dashboard bootstrap configuration.
///
/// Serializable so host applications can persist it; every field has a
/// default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub reference_years: ReferenceYears,
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: default_base_url(),
            reference_years: ReferenceYears::default(),
            per_page: default_per_page(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Points requests at another API root, e.g. a local mirror.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    #[must_use]
    pub fn with_reference_years(mut self, years: ReferenceYears) -> Self {
        self.reference_years = years;
        self
    }

    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page;
        self
    }

    #[must_use]
    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.base_url.trim().is_empty() {
            return Err(DashboardError::InvalidConfig(
                "base url must not be empty".to_owned(),
            ));
        }
        if self.per_page == 0 {
            return Err(DashboardError::InvalidConfig(
                "per_page must be > 0".to_owned(),
            ));
        }
        if self.timeout_ms == 0 {
            return Err(DashboardError::InvalidConfig(
                "timeout_ms must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            DashboardError::InvalidConfig(format!("failed to parse dashboard config: {e}"))
        })?;
        config.validate()?;
        Ok(config)
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_owned()
}

fn default_per_page() -> u32 {
    DEFAULT_PER_PAGE
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}
