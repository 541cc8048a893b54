use serde::{Deserialize, Serialize};

use super::types::FlatRecord;

/// `country` / `indicator` field of an API record.
///
/// The API sends `{"id": "...", "value": "..."}`; records that were already
/// flattened carry the bare label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Descriptor {
    Nested {
        #[serde(default)]
        id: String,
        value: String,
    },
    Label(String),
}

impl Descriptor {
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Nested { value, .. } => value,
            Self::Label(label) => label,
        }
    }
}

/// One observation as returned by the API, nested descriptors intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawIndicatorRecord {
    pub indicator: Descriptor,
    pub country: Descriptor,
    #[serde(default, rename = "countryiso3code")]
    pub country_iso3_code: Option<String>,
    pub date: String,
    pub value: Option<f64>,
}

impl From<FlatRecord> for RawIndicatorRecord {
    fn from(record: FlatRecord) -> Self {
        Self {
            indicator: Descriptor::Label(record.indicator),
            country: Descriptor::Label(record.country),
            country_iso3_code: None,
            date: record.date,
            value: record.value,
        }
    }
}

/// Reduces the nested descriptors of one record to their labels.
#[must_use]
pub fn flatten_record(raw: &RawIndicatorRecord) -> FlatRecord {
    FlatRecord {
        country: raw.country.label().to_owned(),
        date: raw.date.clone(),
        value: raw.value,
        indicator: raw.indicator.label().to_owned(),
    }
}

/// Flattens a whole indicator response. Null values are kept.
#[must_use]
pub fn flatten_records(raw: &[RawIndicatorRecord]) -> Vec<FlatRecord> {
    raw.iter().map(flatten_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_label_descriptors_deserialize() {
        let nested: Descriptor =
            serde_json::from_str(r#"{"id":"CA","value":"Canada"}"#).expect("nested");
        let label: Descriptor = serde_json::from_str(r#""Canada""#).expect("label");

        assert_eq!(nested.label(), "Canada");
        assert_eq!(label.label(), "Canada");
    }
}
