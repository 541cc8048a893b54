use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

const MIN_REFERENCE_YEAR: u16 = 1960;
const MAX_REFERENCE_YEAR: u16 = 2100;

/// Ordered mapping of country display name to ISO-3 code.
///
/// Insertion order is preserved and codes are unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "IndexMap<String, String>",
    into = "IndexMap<String, String>"
)]
pub struct CountrySelection {
    entries: IndexMap<String, String>,
}

impl TryFrom<IndexMap<String, String>> for CountrySelection {
    type Error = DashboardError;

    fn try_from(entries: IndexMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_pairs(entries)
    }
}

impl From<CountrySelection> for IndexMap<String, String> {
    fn from(selection: CountrySelection) -> Self {
        selection.entries
    }
}

impl CountrySelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a selection from `(name, code)` pairs, rejecting duplicate codes.
    pub fn from_pairs<I, N, C>(pairs: I) -> DashboardResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<String>,
    {
        let mut selection = Self::new();
        for (name, code) in pairs {
            selection.insert(name, code)?;
        }
        Ok(selection)
    }

    /// Adds or replaces a country. A code already used by another name is rejected.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        code: impl Into<String>,
    ) -> DashboardResult<()> {
        let name = name.into();
        let code = code.into();
        let clash = self
            .entries
            .iter()
            .any(|(existing_name, existing_code)| {
                existing_name != &name && existing_code.eq_ignore_ascii_case(&code)
            });
        if clash {
            return Err(DashboardError::InvalidData(format!(
                "country code `{code}` is already selected"
            )));
        }
        self.entries.insert(name, code);
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn code(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.values().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, code)| (name.as_str(), code.as_str()))
    }
}

/// One indicator observation after the nested descriptors were reduced to labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlatRecord {
    pub country: String,
    pub date: String,
    pub value: Option<f64>,
    pub indicator: String,
}

impl FlatRecord {
    #[must_use]
    pub fn new(
        country: impl Into<String>,
        date: impl Into<String>,
        value: Option<f64>,
        indicator: impl Into<String>,
    ) -> Self {
        Self {
            country: country.into(),
            date: date.into(),
            value,
            indicator: indicator.into(),
        }
    }
}

/// The two calendar years compared by every chart.
///
/// The same pair drives the API date window and the row filter so the fetched
/// range always contains the filtered years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ReferenceYearsRepr", into = "ReferenceYearsRepr")]
pub struct ReferenceYears {
    baseline: u16,
    latest: u16,
}

#[derive(Serialize, Deserialize)]
struct ReferenceYearsRepr {
    baseline: u16,
    latest: u16,
}

impl TryFrom<ReferenceYearsRepr> for ReferenceYears {
    type Error = DashboardError;

    fn try_from(value: ReferenceYearsRepr) -> Result<Self, Self::Error> {
        Self::new(value.baseline, value.latest)
    }
}

impl From<ReferenceYears> for ReferenceYearsRepr {
    fn from(value: ReferenceYears) -> Self {
        Self {
            baseline: value.baseline,
            latest: value.latest,
        }
    }
}

impl Default for ReferenceYears {
    fn default() -> Self {
        Self {
            baseline: 2000,
            latest: 2020,
        }
    }
}

impl ReferenceYears {
    pub fn new(baseline: u16, latest: u16) -> DashboardResult<Self> {
        let in_range = |year: u16| (MIN_REFERENCE_YEAR..=MAX_REFERENCE_YEAR).contains(&year);
        if !in_range(baseline) || !in_range(latest) {
            return Err(DashboardError::InvalidConfig(format!(
                "reference years must be within {MIN_REFERENCE_YEAR}..={MAX_REFERENCE_YEAR}: \
                 baseline={baseline}, latest={latest}"
            )));
        }
        if baseline >= latest {
            return Err(DashboardError::InvalidConfig(format!(
                "baseline year must precede latest year: baseline={baseline}, latest={latest}"
            )));
        }
        Ok(Self { baseline, latest })
    }

    #[must_use]
    pub fn baseline(self) -> u16 {
        self.baseline
    }

    #[must_use]
    pub fn latest(self) -> u16 {
        self.latest
    }

    #[must_use]
    pub fn years(self) -> [u16; 2] {
        [self.baseline, self.latest]
    }

    /// Exact string match against a record date such as `"2020"`.
    #[must_use]
    pub fn matches(self, date: &str) -> bool {
        self.years().iter().any(|year| date == year.to_string())
    }

    /// API `date` parameter covering both years, e.g. `2000:2020`.
    #[must_use]
    pub fn date_window(self) -> String {
        format!("{}:{}", self.baseline, self.latest)
    }
}
