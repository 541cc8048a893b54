use tracing::debug;

use super::types::CountrySelection;

/// Countries charted when the caller supplies none, in legend-input order.
pub const DEFAULT_COUNTRIES: [(&str, &str); 10] = [
    ("Canada", "CAN"),
    ("United States", "USA"),
    ("Brazil", "BRA"),
    ("France", "FRA"),
    ("India", "IND"),
    ("Italy", "ITA"),
    ("Germany", "DEU"),
    ("United Kingdom", "GBR"),
    ("China", "CHN"),
    ("Japan", "JPN"),
];

/// Builds the built-in ten-country selection.
#[must_use]
pub fn default_selection() -> CountrySelection {
    let mut selection = CountrySelection::new();
    for (name, code) in DEFAULT_COUNTRIES {
        // Codes in the table are distinct, insert cannot clash.
        let _ = selection.insert(name, code);
    }
    selection
}

/// Returns the caller's selection, or the default one when it is empty.
///
/// Code format is not validated; unknown codes simply produce sparse API
/// results downstream.
#[must_use]
pub fn resolve_selection(requested: &CountrySelection) -> CountrySelection {
    if requested.is_empty() {
        debug!(
            default_len = DEFAULT_COUNTRIES.len(),
            "empty country selection, using defaults"
        );
        return default_selection();
    }
    requested.clone()
}
