#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use indicator_charts::api::Transport;
use indicator_charts::core::Indicator;
use indicator_charts::error::{DashboardError, DashboardResult};
use serde_json::json;

/// `(country name, iso3, date, value)`
pub type Row<'a> = (&'a str, &'a str, &'a str, Option<f64>);

/// Canned World Bank style body: `[metadata, records]`.
pub fn api_body(indicator: Indicator, rows: &[Row<'_>]) -> String {
    let records: Vec<_> = rows
        .iter()
        .map(|(country, iso3, date, value)| {
            json!({
                "indicator": { "id": indicator.code(), "value": format!("label {}", indicator.code()) },
                "country": { "id": &iso3[..2], "value": country },
                "countryiso3code": iso3,
                "date": date,
                "value": value,
                "unit": "",
                "obs_status": "",
                "decimal": 1
            })
        })
        .collect();
    json!([
        { "page": 1, "pages": 1, "per_page": 1000, "total": records.len() },
        records
    ])
    .to_string()
}

/// Transport answering by indicator code found in the request URL.
#[derive(Default)]
pub struct MockTransport {
    responses: HashMap<Indicator, DashboardResult<String>>,
    requested: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, indicator: Indicator, rows: &[Row<'_>]) -> Self {
        self.responses.insert(indicator, Ok(api_body(indicator, rows)));
        self
    }

    pub fn with_body(mut self, indicator: Indicator, body: &str) -> Self {
        self.responses.insert(indicator, Ok(body.to_owned()));
        self
    }

    pub fn with_failure(mut self, indicator: Indicator) -> Self {
        self.responses.insert(
            indicator,
            Err(DashboardError::Transport {
                url: format!("mock://{}", indicator.code()),
                message: "connection refused".to_owned(),
            }),
        );
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requested.lock().expect("requested lock").clone()
    }
}

impl Transport for MockTransport {
    fn get(&self, url: &str) -> DashboardResult<String> {
        self.requested
            .lock()
            .expect("requested lock")
            .push(url.to_owned());
        let indicator = Indicator::ALL
            .into_iter()
            .find(|indicator| url.contains(&format!("/indicators/{}?", indicator.code())))
            .ok_or_else(|| DashboardError::Transport {
                url: url.to_owned(),
                message: "unknown indicator".to_owned(),
            })?;
        self.responses
            .get(&indicator)
            .cloned()
            .unwrap_or_else(|| {
                Err(DashboardError::Transport {
                    url: url.to_owned(),
                    message: "no fixture".to_owned(),
                })
            })
    }
}

pub fn canada_brazil_rows(a: f64, b: f64, c: f64, d: f64) -> Vec<Row<'static>> {
    vec![
        ("Canada", "CAN", "2020", Some(c)),
        ("Brazil", "BRA", "2020", Some(d)),
        ("Canada", "CAN", "2000", Some(a)),
        ("Brazil", "BRA", "2000", Some(b)),
    ]
}
