use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{EllipsePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, TextPrimitive};

/// One drawing operation. Backends execute commands in frame order, so later
/// commands paint over earlier ones.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text(TextPrimitive),
    FillRect(RectPrimitive),
    Line(LinePrimitive),
    Polyline(PolylinePrimitive),
    FillEllipse(EllipsePrimitive),
    StrokeEllipse(EllipsePrimitive),
}

impl DrawCommand {
    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Text(text) => text.validate(),
            Self::FillRect(rect) => rect.validate(),
            Self::Line(line) => line.validate(),
            Self::Polyline(polyline) => polyline.validate(),
            Self::FillEllipse(ellipse) | Self::StrokeEllipse(ellipse) => ellipse.validate(),
        }
    }
}

/// Backend-agnostic, ordered scene for one chart draw pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub commands: Vec<DrawCommand>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Validates every command. Zero-sized viewports are allowed: a minimized
    /// surface still produces a (clamped) frame.
    pub fn validate(&self) -> ChartResult<()> {
        for command in &self.commands {
            command.validate()?;
        }
        Ok(())
    }

    pub fn lines(&self) -> impl Iterator<Item = &LinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextPrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn polylines(&self) -> impl Iterator<Item = &PolylinePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Polyline(polyline) => Some(polyline),
            _ => None,
        })
    }

    pub fn filled_ellipses(&self) -> impl Iterator<Item = &EllipsePrimitive> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::FillEllipse(ellipse) => Some(ellipse),
            _ => None,
        })
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
