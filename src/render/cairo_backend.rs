use cairo::Context;

use crate::error::{ChartError, ChartResult};
use crate::render::PathSurface;

/// Cairo contexts speak the path-surface contract directly.
///
/// Cairo has no quadratic segment, so quadratic curves are raised to the
/// equivalent cubic before hitting `curve_to`.
impl PathSurface for Context {
    fn begin_path(&mut self) {
        Context::new_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        Context::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        Context::line_to(self, x, y);
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        let (start_x, start_y) = Context::current_point(self).unwrap_or((cx, cy));
        let control1_x = start_x + 2.0 / 3.0 * (cx - start_x);
        let control1_y = start_y + 2.0 / 3.0 * (cy - start_y);
        let control2_x = x + 2.0 / 3.0 * (cx - x);
        let control2_y = y + 2.0 / 3.0 * (cy - y);
        Context::curve_to(self, control1_x, control1_y, control2_x, control2_y, x, y);
    }

    fn close_path(&mut self) {
        Context::close_path(self);
    }

    fn fill(&mut self) -> ChartResult<()> {
        Context::fill(self).map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn stroke(&mut self) -> ChartResult<()> {
        Context::stroke(self).map_err(|err| map_backend_error("failed to stroke path", err))
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
