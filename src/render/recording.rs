use crate::error::ChartResult;
use crate::render::PathSurface;

/// One recorded surface call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticCurveTo { cx: f64, cy: f64, x: f64, y: f64 },
    ClosePath,
    Fill,
    Stroke,
}

/// Call-recording surface used by tests and headless hosts.
///
/// Captures the exact call sequence a real backend would receive, which is
/// the only observable effect path-drawing code has.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<PathCommand>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fill_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::Fill))
            .count()
    }

    #[must_use]
    pub fn stroke_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|command| matches!(command, PathCommand::Stroke))
            .count()
    }
}

impl PathSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(PathCommand::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(PathCommand::LineTo { x, y });
    }

    fn quadratic_curve_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.commands.push(PathCommand::QuadraticCurveTo { cx, cy, x, y });
    }

    fn close_path(&mut self) {
        self.commands.push(PathCommand::ClosePath);
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.commands.push(PathCommand::Fill);
        Ok(())
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.commands.push(PathCommand::Stroke);
        Ok(())
    }
}
