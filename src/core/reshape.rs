use std::cmp::Ordering;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::types::{FlatRecord, ReferenceYears};

/// One (date, value) sample of a country series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: String,
    pub value: Option<f64>,
}

/// Reference-year samples of one country for one indicator, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct CountrySeries {
    pub country: String,
    pub points: SmallVec<[SeriesPoint; 2]>,
}

impl CountrySeries {
    #[must_use]
    pub fn empty(country: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            points: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[must_use]
    pub fn dates(&self) -> Vec<String> {
        self.points.iter().map(|p| p.date.clone()).collect()
    }

    #[must_use]
    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }
}

/// Canonical legend order shared by all charts.
///
/// Derived once from the first indicator; later charts follow it even when
/// their own values would sort differently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryOrder(Vec<String>);

impl CountryOrder {
    /// Distinct countries of already sorted rows, first occurrence wins.
    #[must_use]
    pub fn from_sorted_rows(rows: &[&FlatRecord]) -> Self {
        let mut seen: IndexMap<&str, ()> = IndexMap::with_capacity(rows.len());
        for row in rows {
            seen.entry(row.country.as_str()).or_insert(());
        }
        Self(seen.into_keys().map(str::to_owned).collect())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Descending by value, nulls last. Equal keys compare `Equal`, so a stable
/// sort keeps response order for ties.
fn value_descending(a: &FlatRecord, b: &FlatRecord) -> Ordering {
    match (a.value, b.value) {
        (Some(a), Some(b)) => OrderedFloat(b).cmp(&OrderedFloat(a)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Rows of one indicator restricted to the reference years and sorted by
/// value, descending.
#[derive(Debug, Clone)]
pub struct ReferenceRows<'a> {
    rows: Vec<&'a FlatRecord>,
}

impl<'a> ReferenceRows<'a> {
    #[must_use]
    pub fn select(records: &'a [FlatRecord], years: ReferenceYears) -> Self {
        let mut rows: Vec<&FlatRecord> = records
            .iter()
            .filter(|record| years.matches(&record.date))
            .collect();
        rows.sort_by(|a, b| value_descending(a, b));
        debug!(
            total = records.len(),
            kept = rows.len(),
            "selected reference-year rows"
        );
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[&'a FlatRecord] {
        &self.rows
    }

    #[must_use]
    pub fn country_order(&self) -> CountryOrder {
        CountryOrder::from_sorted_rows(&self.rows)
    }

    /// One series per country of `order`, in that order.
    ///
    /// Countries without rows get an empty series so every chart carries the
    /// same legend entries.
    #[must_use]
    pub fn series_for(&self, order: &CountryOrder) -> Vec<CountrySeries> {
        let mut by_country: IndexMap<&str, SmallVec<[SeriesPoint; 2]>> = IndexMap::new();
        for row in &self.rows {
            by_country
                .entry(row.country.as_str())
                .or_default()
                .push(SeriesPoint {
                    date: row.date.clone(),
                    value: row.value,
                });
        }

        order
            .iter()
            .map(|country| {
                let mut points = by_country.swap_remove(country).unwrap_or_default();
                points.sort_by(|a, b| a.date.cmp(&b.date));
                CountrySeries {
                    country: country.to_owned(),
                    points,
                }
            })
            .collect()
    }
}

/// Reshaped series of every indicator plus the shared legend order.
#[derive(Debug, Clone, PartialEq)]
pub struct ReshapedIndicators {
    pub country_order: CountryOrder,
    pub series: Vec<Vec<CountrySeries>>,
}

/// Reshapes indicator datasets given in chart order.
///
/// The first dataset fixes the [`CountryOrder`]; it must therefore be fully
/// fetched and flattened before this runs.
#[must_use]
pub fn reshape_indicators(
    datasets: &[&[FlatRecord]],
    years: ReferenceYears,
) -> ReshapedIndicators {
    let selections: Vec<ReferenceRows<'_>> = datasets
        .iter()
        .map(|records| ReferenceRows::select(records, years))
        .collect();

    let country_order = selections
        .first()
        .map(ReferenceRows::country_order)
        .unwrap_or_default();
    debug!(countries = country_order.len(), "derived country order");

    let series = selections
        .iter()
        .map(|rows| rows.series_for(&country_order))
        .collect();

    ReshapedIndicators {
        country_order,
        series,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(country: &str, date: &str, value: Option<f64>) -> FlatRecord {
        FlatRecord::new(country, date, value, "Test indicator")
    }

    #[test]
    fn nulls_sort_after_values() {
        let records = vec![
            record("A", "2000", None),
            record("B", "2000", Some(1.0)),
            record("C", "2020", Some(3.0)),
        ];
        let rows = ReferenceRows::select(&records, ReferenceYears::default());
        let countries: Vec<&str> = rows.rows().iter().map(|r| r.country.as_str()).collect();
        assert_eq!(countries, vec!["C", "B", "A"]);
    }

    #[test]
    fn series_points_are_ordered_by_date() {
        let records = vec![record("A", "2020", Some(9.0)), record("A", "2000", Some(1.0))];
        let rows = ReferenceRows::select(&records, ReferenceYears::default());
        let series = rows.series_for(&rows.country_order());
        assert_eq!(series[0].dates(), vec!["2000", "2020"]);
        assert_eq!(series[0].values(), vec![Some(1.0), Some(9.0)]);
    }
}
