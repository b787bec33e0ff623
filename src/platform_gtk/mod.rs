//! GTK4 adapter: embeds a [`WheelEngine`] into `DrawingArea` widgets.

use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk4::prelude::*;
use tracing::warn;

use crate::api::WheelEngine;
use crate::core::Viewport;
use crate::error::WheelResult;
use crate::render::CairoRenderer;

pub type SharedEngine = Rc<RefCell<WheelEngine<CairoRenderer>>>;

/// Hosts the wheel and radar drawing areas over one shared engine.
///
/// The wheel area carries a click gesture that maps widget coordinates into
/// the engine's logical viewport; both areas redraw through the engine's
/// cairo-context render paths. Draw failures are logged and swallowed so a
/// transient backend hiccup never reaches the user.
pub struct GtkWheelAdapter {
    engine: SharedEngine,
    wheel_area: gtk::DrawingArea,
    radar_area: gtk::DrawingArea,
}

impl GtkWheelAdapter {
    #[must_use]
    pub fn new(engine: WheelEngine<CairoRenderer>) -> Self {
        let viewport = engine.viewport();
        let engine: SharedEngine = Rc::new(RefCell::new(engine));

        let wheel_area = build_area(viewport);
        let radar_area = build_area(viewport);

        {
            let engine = Rc::clone(&engine);
            wheel_area.set_draw_func(move |_, context, width, height| {
                let scale = viewport_scale(viewport, width, height);
                if scale <= 0.0 {
                    return;
                }
                context.save().ok();
                context.scale(scale, scale);
                if let Err(err) = engine.borrow_mut().render_on_cairo_context(context) {
                    warn!(%err, "wheel draw failed");
                }
                context.restore().ok();
            });
        }

        {
            let engine = Rc::clone(&engine);
            radar_area.set_draw_func(move |_, context, width, height| {
                let scale = viewport_scale(viewport, width, height);
                if scale <= 0.0 {
                    return;
                }
                context.save().ok();
                context.scale(scale, scale);
                if let Err(err) = engine.borrow_mut().render_radar_on_cairo_context(context) {
                    warn!(%err, "radar draw failed");
                }
                context.restore().ok();
            });
        }

        let click = gtk::GestureClick::new();
        {
            let engine = Rc::clone(&engine);
            let wheel_area = wheel_area.clone();
            let radar_area = radar_area.clone();
            click.connect_pressed(move |_, _, x, y| {
                let scale = viewport_scale(
                    viewport,
                    wheel_area.allocated_width(),
                    wheel_area.allocated_height(),
                );
                if scale <= 0.0 {
                    return;
                }
                if engine.borrow_mut().pointer_click(x / scale, y / scale) {
                    wheel_area.queue_draw();
                    radar_area.queue_draw();
                }
            });
        }
        wheel_area.add_controller(click);

        Self {
            engine,
            wheel_area,
            radar_area,
        }
    }

    #[must_use]
    pub fn engine(&self) -> SharedEngine {
        Rc::clone(&self.engine)
    }

    #[must_use]
    pub fn wheel_area(&self) -> &gtk::DrawingArea {
        &self.wheel_area
    }

    #[must_use]
    pub fn radar_area(&self) -> &gtk::DrawingArea {
        &self.radar_area
    }

    /// Mutates the engine and queues redraws of both areas.
    pub fn update_engine(
        &self,
        update: impl FnOnce(&mut WheelEngine<CairoRenderer>) -> WheelResult<()>,
    ) -> WheelResult<()> {
        update(&mut self.engine.borrow_mut())?;
        self.wheel_area.queue_draw();
        self.radar_area.queue_draw();
        Ok(())
    }
}

fn build_area(viewport: Viewport) -> gtk::DrawingArea {
    let area = gtk::DrawingArea::new();
    area.set_content_width(viewport.width as i32);
    area.set_content_height(viewport.height as i32);
    area
}

/// Uniform widget→logical scale; keeps the wheel circular under resize.
fn viewport_scale(viewport: Viewport, width: i32, height: i32) -> f64 {
    if viewport.width == 0 || viewport.height == 0 {
        return 0.0;
    }
    let sx = f64::from(width.max(0)) / f64::from(viewport.width);
    let sy = f64::from(height.max(0)) / f64::from(viewport.height);
    sx.min(sy)
}
