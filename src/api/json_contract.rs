use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::render::ChartDescriptor;

pub const FIGURES_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiguresJsonContractV1 {
    pub schema_version: u32,
    pub figures: Vec<ChartDescriptor>,
}

/// Plain figure array, the shape plotly front-ends read directly.
pub fn figures_to_json_pretty(figures: &[ChartDescriptor]) -> DashboardResult<String> {
    serde_json::to_string_pretty(figures)
        .map_err(|e| DashboardError::InvalidData(format!("failed to serialize figures: {e}")))
}

pub fn figures_to_json_contract_v1_pretty(figures: &[ChartDescriptor]) -> DashboardResult<String> {
    let payload = FiguresJsonContractV1 {
        schema_version: FIGURES_JSON_SCHEMA_V1,
        figures: figures.to_vec(),
    };
    serde_json::to_string_pretty(&payload).map_err(|e| {
        DashboardError::InvalidData(format!("failed to serialize figures contract v1: {e}"))
    })
}

/// Accepts either a bare figure array or a versioned contract envelope.
pub fn figures_from_json_compat_str(input: &str) -> DashboardResult<Vec<ChartDescriptor>> {
    if let Ok(figures) = serde_json::from_str::<Vec<ChartDescriptor>>(input) {
        return Ok(figures);
    }
    let payload: FiguresJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        DashboardError::InvalidData(format!("failed to parse figures json payload: {e}"))
    })?;
    if payload.schema_version != FIGURES_JSON_SCHEMA_V1 {
        return Err(DashboardError::InvalidData(format!(
            "unsupported figures schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.figures)
}
