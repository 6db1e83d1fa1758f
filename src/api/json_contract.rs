use serde::{Deserialize, Serialize};

use crate::core::ChartData;
use crate::error::{ChartError, ChartResult};

pub const CHART_DATA_JSON_SCHEMA_V1: u32 = 1;

/// Versioned wrapper so hosts can persist or hand over chart payloads without
/// inventing their own framing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDataJsonContractV1 {
    pub schema_version: u32,
    pub data: ChartData,
}

impl ChartData {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartDataJsonContractV1 {
            schema_version: CHART_DATA_JSON_SCHEMA_V1,
            data: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart data contract v1: {e}"))
        })
    }

    /// Parses either a bare `ChartData` payload or the versioned contract.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(data) = serde_json::from_str::<ChartData>(input) {
            return Ok(data);
        }
        let payload: ChartDataJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidData(format!("failed to parse chart data json payload: {e}"))
        })?;
        if payload.schema_version != CHART_DATA_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported chart data schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.data)
    }
}
