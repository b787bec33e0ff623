use serde::Serialize;
use tracing::debug;

use crate::core::{Area, Level, LevelVector, Viewport, WheelGeometry};
use crate::error::WheelResult;
use crate::interaction::resolve_click;
use crate::render::{RenderFrame, Renderer};
use crate::summary::Summary;

use super::validation::{validate_config, validate_style};
use super::{WheelEngineConfig, WheelStyle, build_radar_frame, build_wheel_frame};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

/// Main orchestration facade consumed by host applications.
///
/// `WheelEngine` owns the widget state: the level vector, the selection
/// marker, and the results-visibility flag. All state flows one way:
/// pointer click → hit resolution → state update → frame rebuild.
pub struct WheelEngine<R: Renderer> {
    renderer: R,
    config: WheelEngineConfig,
    geometry: WheelGeometry,
    style: WheelStyle,
    levels: LevelVector,
    selection: Option<Area>,
    results_visible: bool,
}

/// Serializable snapshot of engine state for host-side persistence or
/// diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSnapshot {
    pub viewport: Viewport,
    pub levels: [Level; crate::core::AREA_COUNT],
    pub selection: Option<Area>,
    pub results_visible: bool,
    pub summary: Summary,
}

impl<R: Renderer> WheelEngine<R> {
    pub fn new(renderer: R, config: WheelEngineConfig) -> WheelResult<Self> {
        validate_config(config)?;
        let geometry = WheelGeometry::fit_viewport(config.viewport, config.wheel_margin_px)?;
        let style = WheelStyle::default();
        validate_style(style)?;

        Ok(Self {
            renderer,
            config,
            geometry,
            style,
            levels: LevelVector::new(),
            selection: None,
            results_visible: false,
        })
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn geometry(&self) -> WheelGeometry {
        self.geometry
    }

    #[must_use]
    pub fn style(&self) -> WheelStyle {
        self.style
    }

    pub fn set_style(&mut self, style: WheelStyle) -> WheelResult<()> {
        validate_style(style)?;
        self.style = style;
        Ok(())
    }

    #[must_use]
    pub fn levels(&self) -> &LevelVector {
        &self.levels
    }

    #[must_use]
    pub fn selection(&self) -> Option<Area> {
        self.selection
    }

    #[must_use]
    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    /// Applies a pointer click in surface coordinates.
    ///
    /// Returns whether the click landed inside the wheel. Out-of-circle
    /// clicks leave all state untouched.
    pub fn pointer_click(&mut self, x: f64, y: f64) -> bool {
        match resolve_click(self.geometry, x, y) {
            Some(hit) => {
                debug!(
                    area = hit.area.label(),
                    level = hit.level.get(),
                    "wheel click"
                );
                self.selection = Some(hit.area);
                self.levels.set(hit.area, hit.level);
                true
            }
            None => false,
        }
    }

    /// Programmatic counterpart of a click on one segment.
    pub fn set_level(&mut self, area: Area, level: Level) {
        self.levels.set(area, level);
    }

    pub fn set_levels(&mut self, values: [i32; crate::core::AREA_COUNT]) -> WheelResult<()> {
        self.levels = LevelVector::from_values(values)?;
        Ok(())
    }

    pub fn show_results(&mut self) {
        debug!("show results");
        self.results_visible = true;
    }

    /// Restores the defaults: all levels 1, no selection, results hidden.
    pub fn reset(&mut self) {
        debug!("reset");
        self.levels = LevelVector::new();
        self.selection = None;
        self.results_visible = false;
    }

    /// Derives the results view (rows, radar data, suggestions) from the
    /// current levels.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_levels(&self.levels)
    }

    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            viewport: self.config.viewport,
            levels: self.levels.as_array(),
            selection: self.selection,
            results_visible: self.results_visible,
            summary: self.summary(),
        }
    }

    pub fn snapshot_json(&self) -> WheelResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|err| crate::error::WheelError::InvalidData(format!("snapshot json: {err}")))
    }

    pub fn build_wheel_frame(&self) -> WheelResult<RenderFrame> {
        let frame = build_wheel_frame(
            self.config.viewport,
            self.geometry,
            &self.levels,
            self.selection,
            &self.style,
        )?;
        debug!(
            wedges = frame.wedges.len(),
            texts = frame.texts.len(),
            "wheel frame built"
        );
        Ok(frame)
    }

    /// Builds the radar scene for the current levels. Pure and always
    /// allowed; hosts typically call it only while results are visible.
    pub fn build_radar_frame(&self) -> WheelResult<RenderFrame> {
        let summary = self.summary();
        let frame = build_radar_frame(
            self.config.viewport,
            &summary.radar,
            self.config.radar_margin_px,
            &self.style,
        )?;
        debug!(
            circles = frame.circles.len(),
            lines = frame.lines.len(),
            "radar frame built"
        );
        Ok(frame)
    }

    pub fn render(&mut self) -> WheelResult<()> {
        let frame = self.build_wheel_frame()?;
        self.renderer.render(&frame)
    }

    pub fn render_radar(&mut self) -> WheelResult<()> {
        let frame = self.build_radar_frame()?;
        self.renderer.render(&frame)
    }

    /// Renders the wheel into an external cairo context.
    ///
    /// This path is used by GTK draw callbacks while keeping the renderer
    /// implementation decoupled from GTK-specific APIs.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> WheelResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_wheel_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    /// Renders the radar into an external cairo context.
    #[cfg(feature = "cairo-backend")]
    pub fn render_radar_on_cairo_context(&mut self, context: &cairo::Context) -> WheelResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_radar_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
