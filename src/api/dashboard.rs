use tracing::{debug, info, warn};

use crate::core::{
    CountryOrder, CountrySelection, FlatRecord, Indicator, IndicatorQuery, ReferenceYears,
    build_queries, reshape_indicators, resolve_selection,
};
use crate::error::DashboardResult;
use crate::render::{ChartDescriptor, assemble_charts};

use super::dashboard_config::DashboardConfig;
use super::fetcher::{IndicatorDataset, fetch_all};
use super::transport::Transport;

/// Everything one pipeline run produced, for hosts that want more than the
/// chart list.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardRun {
    pub selection: CountrySelection,
    pub datasets: Vec<IndicatorDataset>,
    pub country_order: CountryOrder,
    pub figures: Vec<ChartDescriptor>,
}

impl DashboardRun {
    /// Indicators whose fetch failed.
    pub fn unavailable_indicators(&self) -> impl Iterator<Item = Indicator> + '_ {
        self.datasets
            .iter()
            .filter(|dataset| !dataset.is_available())
            .map(|dataset| dataset.indicator)
    }
}

/// Main facade: selection in, four chart descriptors out.
pub struct IndicatorDashboard<T: Transport> {
    transport: T,
    config: DashboardConfig,
}

impl<T: Transport> IndicatorDashboard<T> {
    pub fn new(transport: T, config: DashboardConfig) -> DashboardResult<Self> {
        config.validate()?;
        Ok(Self { transport, config })
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Queries for `selection`, falling back to the default countries when empty.
    #[must_use]
    pub fn queries(&self, selection: &CountrySelection) -> Vec<IndicatorQuery> {
        let resolved = resolve_selection(selection);
        build_queries(&resolved, self.config.reference_years, self.config.per_page)
    }

    /// Runs the whole pipeline and keeps intermediate results.
    pub fn run(&self, selection: &CountrySelection) -> DashboardRun {
        let selection = resolve_selection(selection);
        let queries = build_queries(&selection, self.config.reference_years, self.config.per_page);
        info!(
            countries = selection.len(),
            indicators = queries.len(),
            "building indicator charts"
        );

        let datasets = fetch_all(&self.transport, &queries, &self.config.base_url);
        let (country_order, figures) =
            figures_with_order(&datasets, self.config.reference_years);

        let run = DashboardRun {
            selection,
            datasets,
            country_order,
            figures,
        };
        let failed = run.unavailable_indicators().count();
        if failed > 0 {
            warn!(failed, "some indicator charts have no data");
        }
        run
    }

    /// Returns the four chart descriptors for `selection`. Never fails: an
    /// indicator that could not be fetched becomes a chart of empty series.
    pub fn build_figures(&self, selection: &CountrySelection) -> Vec<ChartDescriptor> {
        self.run(selection).figures
    }
}

#[cfg(feature = "http-transport")]
impl IndicatorDashboard<super::transport::HttpTransport> {
    /// Dashboard backed by the blocking HTTP transport.
    pub fn with_http(config: DashboardConfig) -> DashboardResult<Self> {
        let transport = super::transport::HttpTransport::from_config(&config)?;
        Self::new(transport, config)
    }
}

/// Builds descriptors from already fetched datasets.
///
/// Datasets are matched to charts by indicator, so their order does not
/// matter; a missing or failed indicator produces empty series.
#[must_use]
pub fn figures_from_datasets(
    datasets: &[IndicatorDataset],
    years: ReferenceYears,
) -> Vec<ChartDescriptor> {
    figures_with_order(datasets, years).1
}

fn figures_with_order(
    datasets: &[IndicatorDataset],
    years: ReferenceYears,
) -> (CountryOrder, Vec<ChartDescriptor>) {
    let slices: Vec<&[FlatRecord]> = Indicator::ALL
        .into_iter()
        .map(|indicator| {
            datasets
                .iter()
                .find(|dataset| dataset.indicator == indicator)
                .map_or(&[][..], IndicatorDataset::records)
        })
        .collect();

    let reshaped = reshape_indicators(&slices, years);
    let figures = assemble_charts(&reshaped, years);
    debug!(
        charts = figures.len(),
        countries = reshaped.country_order.len(),
        "assembled chart descriptors"
    );
    (reshaped.country_order, figures)
}

/// One-call entry point against the public World Bank API with default
/// configuration.
///
/// Always returns four descriptors; if the HTTP client cannot be created every
/// chart is empty.
#[cfg(feature = "http-transport")]
#[must_use]
pub fn build_figures(selection: &CountrySelection) -> Vec<ChartDescriptor> {
    let config = DashboardConfig::default();
    match IndicatorDashboard::with_http(config.clone()) {
        Ok(dashboard) => dashboard.build_figures(selection),
        Err(err) => {
            warn!(error = %err, "http transport unavailable, returning empty charts");
            let datasets: Vec<IndicatorDataset> = Indicator::ALL
                .into_iter()
                .map(|indicator| IndicatorDataset::unavailable(indicator, err.clone()))
                .collect();
            figures_from_datasets(&datasets, config.reference_years)
        }
    }
}
