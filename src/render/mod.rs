//! Chart descriptors handed to the rendering layer.
//!
//! Nothing here draws; descriptors are plain data in plotly figure shape so
//! any backend can consume them.

mod descriptor;
mod layouts;

pub use descriptor::{
    AxisLayout, ChartDescriptor, ChartLayout, RenderMode, SeriesDescriptor, SeriesKind,
    TextPosition,
};
pub use layouts::{assemble_charts, chart_layout, point_label, render_mode, series_descriptor};
