use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Axis-aligned rectangle in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectBounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl RectBounds {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        for (field, value) in [
            ("x", self.x),
            ("y", self.y),
            ("width", self.width),
            ("height", self.height),
        ] {
            if !value.is_finite() {
                return Err(ChartError::InvalidGeometry(format!(
                    "rectangle `{field}` must be finite"
                )));
            }
        }
        Ok(())
    }
}

/// Per-corner radii for a rounded rectangle path.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub tl: f64,
    pub tr: f64,
    pub br: f64,
    pub bl: f64,
}

impl CornerRadii {
    #[must_use]
    pub const fn new(tl: f64, tr: f64, br: f64, bl: f64) -> Self {
        Self { tl, tr, br, bl }
    }

    #[must_use]
    pub const fn uniform(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Non-finite corners fall back to square corners.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let or_zero = |radius: f64| if radius.is_finite() { radius } else { 0.0 };
        Self {
            tl: or_zero(self.tl),
            tr: or_zero(self.tr),
            br: or_zero(self.br),
            bl: or_zero(self.bl),
        }
    }
}

impl From<f64> for CornerRadii {
    fn from(radius: f64) -> Self {
        Self::uniform(radius)
    }
}
