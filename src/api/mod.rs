mod json_contract;
mod scales;

pub use json_contract::{CHART_DATA_JSON_SCHEMA_V1, ChartDataJsonContractV1};
pub use scales::ChartScales;
