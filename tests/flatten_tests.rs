use indicator_charts::api::records_from_body;
use indicator_charts::core::{
    Descriptor, FlatRecord, Indicator, RawIndicatorRecord, flatten_record, flatten_records,
};

const LITERACY_BODY: &str = r#"[
  {"page":1,"pages":1,"per_page":1000,"total":2,"sourceid":"2","lastupdated":"2024-06-28"},
  [
    {
      "indicator":{"id":"SE.ADT.LITR.FE.ZS","value":"Literacy rate, adult female (% of females ages 15 and above)"},
      "country":{"id":"BR","value":"Brazil"},
      "countryiso3code":"BRA",
      "date":"2020",
      "value":94.1,
      "unit":"",
      "obs_status":"",
      "decimal":1
    },
    {
      "indicator":{"id":"SE.ADT.LITR.FE.ZS","value":"Literacy rate, adult female (% of females ages 15 and above)"},
      "country":{"id":"IN","value":"India"},
      "countryiso3code":"IND",
      "date":"2020",
      "value":null,
      "unit":"",
      "obs_status":"",
      "decimal":1
    }
  ]
]"#;

#[test]
fn flattens_nested_descriptors_to_labels() {
    let raw = records_from_body(Indicator::AdultFemaleLiteracy, LITERACY_BODY).expect("records");
    let flat = flatten_records(&raw);

    assert_eq!(
        flat[0],
        FlatRecord::new(
            "Brazil",
            "2020",
            Some(94.1),
            "Literacy rate, adult female (% of females ages 15 and above)",
        )
    );
    assert_eq!(raw[0].country_iso3_code.as_deref(), Some("BRA"));
}

#[test]
fn null_values_are_preserved() {
    let raw = records_from_body(Indicator::AdultFemaleLiteracy, LITERACY_BODY).expect("records");
    let flat = flatten_records(&raw);

    assert_eq!(flat.len(), 2);
    assert_eq!(flat[1].country, "India");
    assert_eq!(flat[1].value, None);
}

#[test]
fn flattening_is_idempotent_on_flat_shape() {
    let raw = records_from_body(Indicator::AdultFemaleLiteracy, LITERACY_BODY).expect("records");

    for record in &raw {
        let once = flatten_record(record);
        let twice = flatten_record(&RawIndicatorRecord::from(once.clone()));
        assert_eq!(once, twice);
    }
}

#[test]
fn already_flat_json_records_deserialize() {
    let body = r#"[{},[{"indicator":"Labor force","country":"Japan","date":"2000","value":41.0}]]"#;

    let raw = records_from_body(Indicator::FemaleLaborForceShare, body).expect("records");

    assert_eq!(raw[0].country, Descriptor::Label("Japan".to_owned()));
    assert_eq!(
        flatten_record(&raw[0]),
        FlatRecord::new("Japan", "2000", Some(41.0), "Labor force")
    );
}

#[test]
fn rejects_bodies_without_records_element() {
    assert!(records_from_body(Indicator::FemaleLaborForceShare, "[]").is_err());
    assert!(records_from_body(Indicator::FemaleLaborForceShare, "[{}]").is_err());
    assert!(records_from_body(Indicator::FemaleLaborForceShare, "{}").is_err());
    assert!(records_from_body(Indicator::FemaleLaborForceShare, "<html>").is_err());
    assert!(records_from_body(Indicator::FemaleLaborForceShare, r#"[{}, {"a": 1}]"#).is_err());
}
