use tracing::{debug, trace};

use crate::core::{AffineTransform, PixelRect, ScreenCache, Viewport};
use crate::error::ChartResult;
use crate::render::{
    DrawCommand, EllipsePrimitive, LinePrimitive, PolylinePrimitive, RectPrimitive, RenderFrame,
    Renderer, TextHAlign, TextPrimitive, TextVAlign,
};

use super::{ChartEngine, LayoutResult, RenderPass};

impl<R: Renderer> ChartEngine<R> {
    /// Materializes the ordered draw commands and screen projection for one
    /// surface size without touching engine state.
    ///
    /// Commands are emitted back to front: title, plot background, series
    /// line, markers, Y axis, X axis, then axis titles.
    pub fn build_render_pass(&self, viewport: Viewport) -> ChartResult<RenderPass> {
        let mut frame = RenderFrame::new(viewport);

        self.push_title(&mut frame, viewport);

        let plot = self.layout.compute(viewport);
        frame.push(DrawCommand::FillRect(RectPrimitive::new(
            plot.plot.left,
            plot.plot.top,
            plot.plot.width,
            plot.plot.height,
            self.style.plot_background_color,
        )));

        let transform = AffineTransform::from_world_to_rect(self.config.world, plot.plot);
        self.push_series_line(&mut frame, transform);

        // Projected after the line so the cache mirrors what was drawn.
        let screen_cache = ScreenCache::project(transform, &self.samples);
        self.push_markers(&mut frame, &screen_cache);

        self.push_y_axis(&mut frame, transform, plot.plot);
        self.push_x_axis(&mut frame, transform, plot.plot);
        self.push_axis_titles(&mut frame, viewport, plot.plot);

        trace!(
            left = plot.plot.left,
            top = plot.plot.top,
            width = plot.plot.width,
            height = plot.plot.height,
            samples = self.samples.len(),
            commands = frame.commands.len(),
            "built render pass"
        );

        Ok(RenderPass {
            frame,
            layout: LayoutResult {
                plot,
                transform,
                screen_cache,
            },
        })
    }

    fn push_title(&self, frame: &mut RenderFrame, viewport: Viewport) {
        if self.config.title.is_empty() {
            return;
        }
        frame.push(DrawCommand::Text(TextPrimitive::new(
            self.config.title.as_str(),
            f64::from(viewport.width) / 2.0,
            self.style.title_center_y_px,
            self.style.title_font_size_px,
            self.style.title_color,
            TextHAlign::Center,
        )));
    }

    /// Draws the series as one polyline per run of drawable points.
    ///
    /// A sample far outside the world rectangle can project to infinity; the
    /// line breaks there instead of failing the whole frame.
    fn push_series_line(&self, frame: &mut RenderFrame, transform: AffineTransform) {
        if self.samples.len() < 2 {
            return;
        }
        let points = transform.apply_batch(&self.samples);
        for run in points.split(|point| !point.is_finite()) {
            if run.len() < 2 {
                continue;
            }
            frame.push(DrawCommand::Polyline(PolylinePrimitive::new(
                run.to_vec(),
                self.style.series_line_width,
                self.style.series_line_color,
            )));
        }
    }

    fn push_markers(&self, frame: &mut RenderFrame, screen_cache: &ScreenCache) {
        let style = self.style;
        let radius = self.config.point_radius;
        let skipped = screen_cache.len() - screen_cache.drawable_points().count();
        if skipped > 0 {
            debug!(skipped, "samples project outside the drawable range");
        }
        for point in screen_cache.drawable_points() {
            frame.push(DrawCommand::FillEllipse(EllipsePrimitive::circle(
                point,
                radius,
                style.point_outline_width,
                style.point_fill_color,
            )));
            frame.push(DrawCommand::StrokeEllipse(EllipsePrimitive::circle(
                point,
                radius,
                style.point_outline_width,
                style.point_outline_color,
            )));
        }
    }

    fn push_y_axis(&self, frame: &mut RenderFrame, transform: AffineTransform, plot: PixelRect) {
        let style = self.style;
        let world = self.config.world;

        frame.push(DrawCommand::Line(LinePrimitive::between(
            transform.apply_xy(world.x_min, world.y_min),
            transform.apply_xy(world.x_min, world.y_max),
            style.axis_line_width,
            style.axis_line_color,
        )));

        let label_x = plot.left - style.tick_label_offset_px;
        for tick in self.y_ticks.ticks() {
            let mark = transform.apply_xy(world.x_min, tick.position);
            if style.tick_length_px > 0.0 {
                frame.push(DrawCommand::Line(LinePrimitive::new(
                    mark.x,
                    mark.y,
                    mark.x + style.tick_length_px,
                    mark.y,
                    style.axis_line_width,
                    style.axis_line_color,
                )));
            }
            if tick.label.is_empty() {
                continue;
            }
            frame.push(DrawCommand::Text(TextPrimitive::new(
                tick.label,
                label_x,
                mark.y,
                style.tick_label_font_size_px,
                style.tick_label_color,
                TextHAlign::Right,
            )));
        }
    }

    fn push_x_axis(&self, frame: &mut RenderFrame, transform: AffineTransform, plot: PixelRect) {
        let style = self.style;
        let world = self.config.world;

        frame.push(DrawCommand::Line(LinePrimitive::between(
            transform.apply_xy(world.x_min, world.y_min),
            transform.apply_xy(world.x_max, world.y_min),
            style.axis_line_width,
            style.axis_line_color,
        )));

        let label_y = plot.bottom() + style.tick_label_offset_px;
        for tick in self.x_ticks.ticks() {
            let mark = transform.apply_xy(tick.position, world.y_min);
            if style.tick_length_px > 0.0 {
                frame.push(DrawCommand::Line(LinePrimitive::new(
                    mark.x,
                    mark.y,
                    mark.x,
                    mark.y - style.tick_length_px,
                    style.axis_line_width,
                    style.axis_line_color,
                )));
            }
            if tick.label.is_empty() {
                continue;
            }
            // Rotate around the origin first, then move the rotated label
            // under its tick.
            let placement = AffineTransform::rotation_degrees(90.0)
                .then(AffineTransform::translation(mark.x, label_y));
            frame.push(DrawCommand::Text(
                TextPrimitive::new(
                    tick.label,
                    0.0,
                    0.0,
                    style.tick_label_font_size_px,
                    style.tick_label_color,
                    TextHAlign::Left,
                )
                .at_origin_with(placement),
            ));
        }
    }

    fn push_axis_titles(&self, frame: &mut RenderFrame, viewport: Viewport, plot: PixelRect) {
        let style = self.style;

        if !self.config.y_axis_title.is_empty() {
            let placement = AffineTransform::rotation_degrees(-90.0)
                .then(AffineTransform::translation(0.0, plot.center_y()));
            frame.push(DrawCommand::Text(
                TextPrimitive::new(
                    self.config.y_axis_title.as_str(),
                    0.0,
                    0.0,
                    style.axis_title_font_size_px,
                    style.axis_title_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Top)
                .at_origin_with(placement),
            ));
        }

        if !self.config.x_axis_title.is_empty() {
            frame.push(DrawCommand::Text(
                TextPrimitive::new(
                    self.config.x_axis_title.as_str(),
                    plot.center_x(),
                    f64::from(viewport.height),
                    style.axis_title_font_size_px,
                    style.axis_title_color,
                    TextHAlign::Center,
                )
                .with_v_align(TextVAlign::Bottom),
            ));
        }
    }
}
