use criterion::{Criterion, criterion_group, criterion_main};
use indicator_charts::api::{
    IndicatorDataset, figures_from_datasets, figures_to_json_pretty, records_from_body,
};
use indicator_charts::core::{FlatRecord, Indicator, ReferenceYears, reshape_indicators};
use serde_json::json;
use std::hint::black_box;

fn generated_records(countries: usize, seed: u64) -> Vec<FlatRecord> {
    let mut out = Vec::with_capacity(countries * 26);
    for c in 0..countries {
        for year in 1995..2021 {
            let raw = (c as u64 * 31 + year as u64 * 7 + seed) % 1_000;
            let value = if raw % 17 == 0 {
                None
            } else {
                Some(raw as f64 / 10.0)
            };
            out.push(FlatRecord::new(
                format!("Country {c}"),
                year.to_string(),
                value,
                "generated",
            ));
        }
    }
    out
}

fn bench_reshape_four_indicators_200_countries(c: &mut Criterion) {
    let datasets: Vec<Vec<FlatRecord>> = (0..4).map(|i| generated_records(200, i)).collect();
    let slices: Vec<&[FlatRecord]> = datasets.iter().map(Vec::as_slice).collect();
    let years = ReferenceYears::default();

    c.bench_function("reshape_four_indicators_200_countries", |b| {
        b.iter(|| {
            let _ = reshape_indicators(black_box(&slices), black_box(years));
        })
    });
}

fn bench_parse_api_body_5k(c: &mut Criterion) {
    let records: Vec<_> = (0..5_000)
        .map(|i| {
            json!({
                "indicator": { "id": "SL.TLF.TOTL.FE.ZS", "value": "Labor force, female" },
                "country": { "id": "XX", "value": format!("Country {}", i / 25) },
                "countryiso3code": "XXX",
                "date": (1995 + i % 25).to_string(),
                "value": (i % 100) as f64,
            })
        })
        .collect();
    let body = json!([{ "page": 1, "pages": 1, "total": records.len() }, records]).to_string();

    c.bench_function("parse_api_body_5k", |b| {
        b.iter(|| {
            let _ = records_from_body(Indicator::FemaleLaborForceShare, black_box(&body))
                .expect("generated body should parse");
        })
    });
}

fn bench_figures_json_200_countries(c: &mut Criterion) {
    let datasets: Vec<IndicatorDataset> = Indicator::ALL
        .into_iter()
        .zip(0u64..)
        .map(|(indicator, seed)| {
            IndicatorDataset::loaded(indicator, generated_records(200, seed))
        })
        .collect();
    let figures = figures_from_datasets(&datasets, ReferenceYears::default());

    c.bench_function("figures_json_200_countries", |b| {
        b.iter(|| {
            let _ = figures_to_json_pretty(black_box(&figures)).expect("figures json");
        })
    });
}

criterion_group!(
    benches,
    bench_reshape_four_indicators_200_countries,
    bench_parse_api_body_5k,
    bench_figures_json_200_countries
);
criterion_main!(benches);
