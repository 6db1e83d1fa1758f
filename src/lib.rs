//! chart-helpers-rs: presentational scale and path helpers for chart hosts.
//!
//! Three independent utilities a charting front end leans on: an axis-domain
//! engine that derives min/max/spread and formatted Y-axis tick labels from a
//! reactive chart-data reference, a rounded-rectangle path builder over an
//! abstract 2D surface, and a CSS custom-property color reader.

pub mod api;
pub mod core;
pub mod error;
pub mod reactive;
pub mod render;
pub mod style;
pub mod telemetry;

pub use api::ChartScales;
pub use crate::core::{AxisLabelVisibility, ChartData, DataSet, SeriesKind};
pub use error::{ChartError, ChartResult};
pub use reactive::{Computed, Signal};
