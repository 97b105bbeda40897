use crate::error::ChartResult;
use crate::render::{DrawCommand, RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a real drawing backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_command_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
    pub last_ellipse_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_command_count = frame.commands.len();
        self.last_line_count = frame.lines().count();
        self.last_text_count = frame.texts().count();
        self.last_ellipse_count = frame
            .commands
            .iter()
            .filter(|command| {
                matches!(
                    command,
                    DrawCommand::FillEllipse(_) | DrawCommand::StrokeEllipse(_)
                )
            })
            .count();
        Ok(())
    }
}
