use crate::error::ChartResult;
use crate::render::{CornerRadii, PathSurface, RectBounds};

/// Appends a rounded-rectangle path to `surface` without painting it.
///
/// Corner curves are quadratic with the control point pinned at the exact
/// corner, walked clockwise from the top-right corner; each edge stops short
/// by the next corner's radius. A zero radius degenerates the curve to the
/// corner point itself.
pub fn trace_round_rect<S: PathSurface + ?Sized>(
    surface: &mut S,
    bounds: RectBounds,
    radii: CornerRadii,
) {
    let RectBounds {
        x,
        y,
        width,
        height,
    } = bounds;
    let radii = radii.sanitized();

    surface.begin_path();
    surface.move_to(x + radii.tl, y);
    surface.line_to(x + width - radii.tr, y);
    surface.quadratic_curve_to(x + width, y, x + width, y + radii.tr);
    surface.line_to(x + width, y + height - radii.br);
    surface.quadratic_curve_to(x + width, y + height, x + width - radii.br, y + height);
    surface.line_to(x + radii.bl, y + height);
    surface.quadratic_curve_to(x, y + height, x, y + height - radii.bl);
    surface.line_to(x, y + radii.tl);
    surface.quadratic_curve_to(x, y, x + radii.tl, y);
    surface.close_path();
}

/// Builds a rounded-rectangle path and paints it, fill before stroke.
///
/// `stroke` falls back to `true` only when the caller passes `None`; an
/// explicit `Some(false)` suppresses the stroke.
pub fn draw_round_rect<S: PathSurface + ?Sized>(
    surface: &mut S,
    bounds: RectBounds,
    radii: impl Into<CornerRadii>,
    fill: bool,
    stroke: Option<bool>,
) -> ChartResult<()> {
    bounds.validate()?;
    trace_round_rect(surface, bounds, radii.into());

    if fill {
        surface.fill()?;
    }
    if stroke.unwrap_or(true) {
        surface.stroke()?;
    }
    Ok(())
}
