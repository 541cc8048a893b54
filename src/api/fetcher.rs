use serde_json::Value;
use tracing::{debug, warn};

use crate::core::{FlatRecord, Indicator, IndicatorQuery, RawIndicatorRecord, flatten_records};
use crate::error::{DashboardError, DashboardResult};

use super::transport::Transport;

/// Fetch result of one indicator.
///
/// A failed fetch is kept as a typed `Err` so later stages can render an
/// empty chart instead of aborting.
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorDataset {
    pub indicator: Indicator,
    pub outcome: DashboardResult<Vec<FlatRecord>>,
}

impl IndicatorDataset {
    #[must_use]
    pub fn loaded(indicator: Indicator, records: Vec<FlatRecord>) -> Self {
        Self {
            indicator,
            outcome: Ok(records),
        }
    }

    #[must_use]
    pub fn unavailable(indicator: Indicator, error: DashboardError) -> Self {
        Self {
            indicator,
            outcome: Err(error),
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Flat records, or an empty slice when the fetch failed.
    #[must_use]
    pub fn records(&self) -> &[FlatRecord] {
        self.outcome.as_deref().unwrap_or(&[])
    }

    #[must_use]
    pub fn error(&self) -> Option<&DashboardError> {
        self.outcome.as_ref().err()
    }
}

/// Extracts the record array from an API body shaped `[metadata, records]`.
///
/// A `null` records element is the API's answer for "no rows" and yields an
/// empty list.
pub fn records_from_body(
    indicator: Indicator,
    body: &str,
) -> DashboardResult<Vec<RawIndicatorRecord>> {
    let malformed = |message: String| DashboardError::MalformedResponse {
        indicator: indicator.code().to_owned(),
        message,
    };

    let value: Value =
        serde_json::from_str(body).map_err(|e| malformed(format!("invalid json: {e}")))?;
    let Value::Array(mut parts) = value else {
        return Err(malformed("top-level value is not an array".to_owned()));
    };
    if parts.len() < 2 {
        return Err(malformed(format!(
            "expected [metadata, records], got {} element(s)",
            parts.len()
        )));
    }
    match parts.swap_remove(1) {
        Value::Null => Ok(Vec::new()),
        records => serde_json::from_value(records)
            .map_err(|e| malformed(format!("invalid records: {e}"))),
    }
}

/// Fetches and flattens one indicator. Never fails; errors end up in the
/// returned dataset.
pub fn fetch_indicator<T: Transport>(
    transport: &T,
    query: &IndicatorQuery,
    base_url: &str,
) -> IndicatorDataset {
    let url = query.url(base_url);
    let outcome = transport
        .get(&url)
        .and_then(|body| records_from_body(query.indicator, &body))
        .map(|raw| flatten_records(&raw));

    match outcome {
        Ok(records) => {
            debug!(
                indicator = query.indicator.code(),
                records = records.len(),
                "fetched indicator"
            );
            IndicatorDataset::loaded(query.indicator, records)
        }
        Err(err) => {
            warn!(
                indicator = query.indicator.code(),
                error = %err,
                "could not load indicator data"
            );
            IndicatorDataset::unavailable(query.indicator, err)
        }
    }
}

/// Fetches every query, preserving query order in the result.
#[cfg(not(feature = "parallel-fetch"))]
pub fn fetch_all<T: Transport>(
    transport: &T,
    queries: &[IndicatorQuery],
    base_url: &str,
) -> Vec<IndicatorDataset> {
    queries
        .iter()
        .map(|query| fetch_indicator(transport, query, base_url))
        .collect()
}

/// Fetches every query concurrently, preserving query order in the result.
#[cfg(feature = "parallel-fetch")]
pub fn fetch_all<T: Transport>(
    transport: &T,
    queries: &[IndicatorQuery],
    base_url: &str,
) -> Vec<IndicatorDataset> {
    use rayon::prelude::*;

    queries
        .par_iter()
        .map(|query| fetch_indicator(transport, query, base_url))
        .collect()
}
