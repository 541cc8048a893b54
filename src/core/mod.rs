pub mod flatten;
pub mod indicator;
pub mod query;
pub mod reshape;
pub mod selection;
pub mod types;

pub use flatten::{Descriptor, RawIndicatorRecord, flatten_record, flatten_records};
pub use indicator::Indicator;
pub use query::{DEFAULT_PER_PAGE, IndicatorQuery, build_queries, country_filter};
pub use reshape::{
    CountryOrder, CountrySeries, ReferenceRows, ReshapedIndicators, SeriesPoint,
    reshape_indicators,
};
pub use selection::{DEFAULT_COUNTRIES, default_selection, resolve_selection};
pub use types::{CountrySelection, FlatRecord, ReferenceYears};
