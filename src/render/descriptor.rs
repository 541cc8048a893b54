use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Trace type understood by plotly-style consumers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderMode {
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextPosition {
    Top,
}

/// One named line of a chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesDescriptor {
    #[serde(rename = "type", default)]
    pub kind: SeriesKind,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub mode: RenderMode,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub textposition: Option<TextPosition>,
}

impl SeriesDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>, mode: RenderMode) -> Self {
        Self {
            kind: SeriesKind::Scatter,
            x: Vec::new(),
            y: Vec::new(),
            mode,
            name: name.into(),
            text: None,
            textposition: None,
        }
    }

    #[must_use]
    pub fn with_points(mut self, x: Vec<String>, y: Vec<Option<f64>>) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: Vec<String>, position: TextPosition) -> Self {
        self.text = Some(text);
        self.textposition = Some(position);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty() && self.y.is_empty()
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.x.len() != self.y.len() {
            return Err(DashboardError::InvalidData(format!(
                "series `{}` has {} x values but {} y values",
                self.name,
                self.x.len(),
                self.y.len()
            )));
        }
        match &self.text {
            Some(text) if text.len() != self.x.len() => Err(DashboardError::InvalidData(format!(
                "series `{}` has {} labels for {} points",
                self.name,
                text.len(),
                self.x.len()
            ))),
            _ => Ok(()),
        }
    }
}

/// Axis options; unset fields are omitted from the JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisLayout {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autotick: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick0: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtick: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<[i32; 2]>,
}

impl AxisLayout {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            autotick: None,
            tick0: None,
            dtick: None,
            range: None,
        }
    }

    /// Disables automatic ticks and places them every `dtick` from `tick0`.
    #[must_use]
    pub fn with_fixed_ticks(mut self, tick0: i32, dtick: i32) -> Self {
        self.autotick = Some(false);
        self.tick0 = Some(tick0);
        self.dtick = Some(dtick);
        self
    }

    #[must_use]
    pub fn with_range(mut self, min: i32, max: i32) -> Self {
        self.range = Some([min, max]);
        self
    }

    #[must_use]
    pub fn with_dtick(mut self, dtick: i32) -> Self {
        self.dtick = Some(dtick);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub title: String,
    pub xaxis: AxisLayout,
    pub yaxis: AxisLayout,
}

/// Series plus layout of one chart, in plotly figure shape (`data`, `layout`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDescriptor {
    #[serde(rename = "data")]
    pub series: Vec<SeriesDescriptor>,
    pub layout: ChartLayout,
}

impl ChartDescriptor {
    #[must_use]
    pub fn new(layout: ChartLayout) -> Self {
        Self {
            series: Vec::new(),
            layout,
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: SeriesDescriptor) -> Self {
        self.series.push(series);
        self
    }

    pub fn series_names(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(|s| s.name.as_str())
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for series in &self.series {
            series.validate()?;
        }
        Ok(())
    }
}
