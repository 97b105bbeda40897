use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::ChartEngine;
use crate::core::Viewport;
use crate::interaction::TooltipUpdate;
use crate::render::CairoRenderer;

/// Hosts a `ChartEngine` inside a GTK `DrawingArea`.
///
/// Every draw callback re-runs the full render pass for the current allocation,
/// and pointer motion drives the widget tooltip from the committed cache.
pub struct GtkChartAdapter {
    drawing_area: gtk::DrawingArea,
    engine: Rc<RefCell<ChartEngine<CairoRenderer>>>,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(engine: ChartEngine<CairoRenderer>) -> Self {
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_hexpand(true);
        drawing_area.set_vexpand(true);
        drawing_area.set_has_tooltip(true);

        let engine = Rc::new(RefCell::new(engine));

        let draw_engine = Rc::clone(&engine);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let viewport = Viewport::new(width.max(0) as u32, height.max(0) as u32);
            if let Err(err) = draw_engine
                .borrow_mut()
                .render_on_cairo_context(context, viewport)
            {
                warn!(error = %err, "chart render failed");
            }
        });
        drawing_area.connect_resize(|area, _width, _height| area.queue_draw());

        let motion = gtk::EventControllerMotion::new();
        let motion_engine = Rc::clone(&engine);
        let motion_area = drawing_area.clone();
        motion.connect_motion(move |_controller, x, y| {
            let update = motion_engine.borrow_mut().pointer_move(x, y);
            apply_tooltip_update(&motion_area, update);
        });
        let leave_engine = Rc::clone(&engine);
        let leave_area = drawing_area.clone();
        motion.connect_leave(move |_controller| {
            let update = leave_engine.borrow_mut().pointer_leave();
            apply_tooltip_update(&leave_area, update);
        });
        drawing_area.add_controller(motion);

        Self {
            drawing_area,
            engine,
        }
    }

    #[must_use]
    pub fn drawing_area(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn engine(&self) -> Rc<RefCell<ChartEngine<CairoRenderer>>> {
        Rc::clone(&self.engine)
    }
}

fn apply_tooltip_update(area: &gtk::DrawingArea, update: TooltipUpdate) {
    if let TooltipUpdate::Changed(text) = update {
        if text.is_empty() {
            area.set_tooltip_text(None);
        } else {
            area.set_tooltip_text(Some(&text));
        }
    }
}
