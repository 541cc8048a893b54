use indicator_charts::core::{
    CountrySelection, DEFAULT_PER_PAGE, Indicator, ReferenceYears, build_queries,
};
use proptest::prelude::*;

fn selection_strategy() -> impl Strategy<Value = CountrySelection> {
    proptest::collection::btree_set("[A-Z]{3}", 1..12).prop_map(|codes| {
        CountrySelection::from_pairs(
            codes
                .into_iter()
                .enumerate()
                .map(|(idx, code)| (format!("Country {idx}"), code)),
        )
        .expect("distinct codes")
    })
}

proptest! {
    #[test]
    fn every_query_carries_every_code_and_its_indicator(selection in selection_strategy()) {
        let queries = build_queries(&selection, ReferenceYears::default(), DEFAULT_PER_PAGE);
        prop_assert_eq!(queries.len(), 4);

        for (query, indicator) in queries.iter().zip(Indicator::ALL) {
            prop_assert_eq!(query.indicator, indicator);
            let url = query.url("http://api.worldbank.org/v2");
            let indicator_segment = format!("/indicators/{}?", indicator.code());
            prop_assert!(url.contains(&indicator_segment));

            let filter: Vec<&str> = query.country_filter.split(';').collect();
            prop_assert_eq!(filter.len(), selection.len());
            for code in selection.codes() {
                prop_assert!(filter.iter().any(|c| c.eq_ignore_ascii_case(code)));
            }
        }
    }

    #[test]
    fn date_window_always_spans_reference_years(baseline in 1960u16..2050, span in 1u16..50) {
        let years = ReferenceYears::new(baseline, baseline + span).expect("years");
        let selection = CountrySelection::from_pairs([("Canada", "CAN")]).expect("selection");

        for query in build_queries(&selection, years, DEFAULT_PER_PAGE) {
            prop_assert_eq!(query.date_range.clone(), format!("{}:{}", baseline, baseline + span));
        }
    }
}
