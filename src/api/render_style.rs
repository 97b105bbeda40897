use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Style contract for the current render frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderStyle {
    pub title_color: Color,
    pub title_font_size_px: f64,
    /// Vertical center of the title, measured from the surface top.
    pub title_center_y_px: f64,
    pub plot_background_color: Color,
    pub series_line_color: Color,
    pub series_line_width: f64,
    pub point_fill_color: Color,
    pub point_outline_color: Color,
    pub point_outline_width: f64,
    pub axis_line_color: Color,
    pub axis_line_width: f64,
    pub tick_length_px: f64,
    /// Gap between the plot edge and tick labels.
    pub tick_label_offset_px: f64,
    pub tick_label_color: Color,
    pub tick_label_font_size_px: f64,
    pub axis_title_color: Color,
    pub axis_title_font_size_px: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            title_color: Color::BLUE,
            title_font_size_px: 20.0,
            title_center_y_px: 20.0,
            plot_background_color: Color::WHITE,
            series_line_color: Color::GREEN,
            series_line_width: 1.0,
            point_fill_color: Color::LIME,
            point_outline_color: Color::BLACK,
            point_outline_width: 1.0,
            axis_line_color: Color::BLACK,
            axis_line_width: 1.0,
            tick_length_px: 10.0,
            tick_label_offset_px: 10.0,
            tick_label_color: Color::BLACK,
            tick_label_font_size_px: 8.0,
            axis_title_color: Color::GREEN,
            axis_title_font_size_px: 14.0,
        }
    }
}

impl RenderStyle {
    pub fn validate(self) -> ChartResult<()> {
        for color in [
            self.title_color,
            self.plot_background_color,
            self.series_line_color,
            self.point_fill_color,
            self.point_outline_color,
            self.axis_line_color,
            self.tick_label_color,
            self.axis_title_color,
        ] {
            color.validate()?;
        }

        for (name, value) in [
            ("title_font_size_px", self.title_font_size_px),
            ("series_line_width", self.series_line_width),
            ("point_outline_width", self.point_outline_width),
            ("axis_line_width", self.axis_line_width),
            ("tick_label_font_size_px", self.tick_label_font_size_px),
            ("axis_title_font_size_px", self.axis_title_font_size_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and > 0"
                )));
            }
        }

        for (name, value) in [
            ("title_center_y_px", self.title_center_y_px),
            ("tick_length_px", self.tick_length_px),
            ("tick_label_offset_px", self.tick_label_offset_px),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "render style `{name}` must be finite and >= 0"
                )));
            }
        }

        Ok(())
    }
}
