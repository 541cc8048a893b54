use crate::core::{CountrySeries, Indicator, ReferenceYears, ReshapedIndicators};

use super::descriptor::{
    AxisLayout, ChartDescriptor, ChartLayout, RenderMode, SeriesDescriptor, TextPosition,
};

/// Fixed layout of the chart fed by `indicator`.
///
/// Titles and axis options are consumed verbatim by existing dashboards.
#[must_use]
pub fn chart_layout(indicator: Indicator, years: ReferenceYears) -> ChartLayout {
    match indicator {
        Indicator::OutOfSchoolPrimaryFemale => ChartLayout {
            title: format!(
                "Children out of school, primary, female <br> per Person {} to {}",
                years.baseline(),
                years.latest()
            ),
            xaxis: AxisLayout::titled("Year").with_fixed_ticks(1990, 25),
            yaxis: AxisLayout::titled("Million"),
        },
        Indicator::AdultFemaleLiteracy => ChartLayout {
            title: "Literacy rate, adult female (% of females ages 15 and above)".to_owned(),
            xaxis: AxisLayout::titled("Country"),
            yaxis: AxisLayout::titled("Percent"),
        },
        Indicator::SecondaryProgressionFemale => ChartLayout {
            title: "Progression to secondary school,<br> female (%)".to_owned(),
            xaxis: AxisLayout::titled("Year").with_fixed_ticks(1990, 25),
            yaxis: AxisLayout::titled("Percent"),
        },
        Indicator::FemaleLaborForceShare => ChartLayout {
            title: "Labor force, female <br>(% of total labor force)".to_owned(),
            xaxis: AxisLayout::titled("Year").with_range(0, 100).with_dtick(10),
            yaxis: AxisLayout::titled("percent").with_range(0, 100).with_dtick(10),
        },
    }
}

#[must_use]
pub fn render_mode(indicator: Indicator) -> RenderMode {
    match indicator {
        Indicator::FemaleLaborForceShare => RenderMode::LinesMarkers,
        _ => RenderMode::Lines,
    }
}

/// Per-point label such as `Canada 2020: 47.3`.
#[must_use]
pub fn point_label(country: &str, date: &str, value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{country} {date}: {value:.1}"),
        None => format!("{country} {date}: n/a"),
    }
}

/// Converts one reshaped country series into a chart trace.
#[must_use]
pub fn series_descriptor(indicator: Indicator, series: &CountrySeries) -> SeriesDescriptor {
    let descriptor = SeriesDescriptor::new(series.country.as_str(), render_mode(indicator))
        .with_points(series.dates(), series.values());
    if indicator != Indicator::FemaleLaborForceShare {
        return descriptor;
    }
    let labels = series
        .points
        .iter()
        .map(|point| point_label(&series.country, &point.date, point.value))
        .collect();
    descriptor.with_text(labels, TextPosition::Top)
}

/// Pairs every indicator's series with its layout, in chart order.
///
/// Indicators missing from `reshaped.series` still yield a descriptor with
/// one empty series per country of the shared order.
#[must_use]
pub fn assemble_charts(
    reshaped: &ReshapedIndicators,
    years: ReferenceYears,
) -> Vec<ChartDescriptor> {
    Indicator::ALL
        .into_iter()
        .map(|indicator| {
            let series = match reshaped.series.get(indicator.position()) {
                Some(series) => series
                    .iter()
                    .map(|s| series_descriptor(indicator, s))
                    .collect(),
                None => reshaped
                    .country_order
                    .iter()
                    .map(|country| series_descriptor(indicator, &CountrySeries::empty(country)))
                    .collect(),
            };
            ChartDescriptor {
                series,
                layout: chart_layout(indicator, years),
            }
        })
        .collect()
}
