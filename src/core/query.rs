use serde::{Deserialize, Serialize};

use super::indicator::Indicator;
use super::types::{CountrySelection, ReferenceYears};

pub const DEFAULT_PER_PAGE: u32 = 1000;

/// One API request for one indicator across every selected country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorQuery {
    pub indicator: Indicator,
    /// Lowercase ISO-3 codes joined by `;`, e.g. `can;bra`.
    pub country_filter: String,
    /// `from:to` year window.
    pub date_range: String,
    pub per_page: u32,
}

impl IndicatorQuery {
    /// Full request URL below `base_url` (e.g. `http://api.worldbank.org/v2`).
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}/countries/{}/indicators/{}?date={}&per_page={}&format=json",
            base_url.trim_end_matches('/'),
            self.country_filter,
            self.indicator.code(),
            self.date_range,
            self.per_page,
        )
    }
}

/// API country filter: lowercase codes in selection order joined by `;`.
#[must_use]
pub fn country_filter(selection: &CountrySelection) -> String {
    selection
        .codes()
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join(";")
}

/// Builds one query per indicator, in chart order.
#[must_use]
pub fn build_queries(
    selection: &CountrySelection,
    years: ReferenceYears,
    per_page: u32,
) -> Vec<IndicatorQuery> {
    let country_filter = country_filter(selection);
    let date_range = years.date_window();
    Indicator::ALL
        .into_iter()
        .map(|indicator| IndicatorQuery {
            indicator,
            country_filter: country_filter.clone(),
            date_range: date_range.clone(),
            per_page,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_matches_api_layout() {
        let selection =
            CountrySelection::from_pairs([("United States", "USA"), ("Brazil", "BRA")])
                .expect("selection");
        let queries = build_queries(&selection, ReferenceYears::default(), DEFAULT_PER_PAGE);

        assert_eq!(
            queries[0].url("http://api.worldbank.org/v2/"),
            "http://api.worldbank.org/v2/countries/usa;bra/indicators/SE.PRM.UNER.FE\
             ?date=2000:2020&per_page=1000&format=json"
        );
    }
}
