//! The world-space overlay pass: grid, axes, crosshairs, arrows, arc fans.
//!
//! Every method resolves world coordinates through the camera and submits
//! screen-space primitives in a deterministic order, so an overlay frame
//! digests identically wherever it is produced.

use easel_math::rect::Rect;
use easel_math::vec2::Vec2;
use easel_math::{consts, cos, floor_to_multiple, from_int, sin, Fixed};
use easel_render::camera::Camera;
use easel_render::primitive::PrimitiveSink;
use easel_render::style::{Color, Stroke, Style};
use easel_render::RenderError;

use crate::config::DebugConfig;

/// Number of segments a joint-limit arc fan is tessellated into.
///
/// Fixed rather than configurable: a constant segment count keeps fan
/// geometry identical across machines and spares the digest from quality
/// settings.
pub const ARC_SEGMENTS: u32 = 16;

// ---------------------------------------------------------------------------
// DebugDraw
// ---------------------------------------------------------------------------

/// Stateless drawing pass for the world-space debug overlay.
///
/// Borrows a config and a camera for the duration of one frame. The pass
/// holds no other state; calling the same methods against the same camera
/// and config always emits the same primitive stream.
pub struct DebugDraw<'a> {
    pub config: &'a DebugConfig,
    pub camera: &'a Camera,
}

impl<'a> DebugDraw<'a> {
    /// Overlay pass drawing `config` as seen through `camera`.
    pub fn new(config: &'a DebugConfig, camera: &'a Camera) -> DebugDraw<'a> {
        DebugDraw { config, camera }
    }

    /// Draw the full overlay: grid, axes, origin crosshair, in that order,
    /// each gated by its toggle.
    ///
    /// The origin crosshair spans half a grid cell in each direction.
    pub fn render_overlay<S: PrimitiveSink>(&self, sink: &mut S) -> Result<(), RenderError> {
        if self.config.show_grid {
            self.grid(sink)?;
        }
        if self.config.show_axes {
            self.axes(sink);
        }
        if self.config.show_origin {
            self.crosshair(
                sink,
                Vec2::ZERO,
                self.config.grid_spacing / consts::TWO,
                self.config.colors.origin,
            );
        }
        Ok(())
    }

    /// Draw the world-space grid across the current view.
    ///
    /// Lines sit on multiples of the configured spacing, so the grid stays
    /// anchored in world space while the camera moves. Every n-th line per
    /// axis, counted from the first visible line, uses the major style.
    pub fn grid<S: PrimitiveSink>(&self, sink: &mut S) -> Result<(), RenderError> {
        let spacing = self.config.grid_spacing;
        if spacing <= consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "grid_spacing",
                requirement: "strictly positive",
                value: spacing.to_string(),
            });
        }
        let interval = self.config.major_line_interval;
        if interval == 0 {
            return Err(RenderError::InvalidConfiguration {
                field: "major_line_interval",
                requirement: "at least 1",
                value: interval.to_string(),
            });
        }

        let view = self.camera.view_bounds();
        let minor = Stroke::solid(self.config.colors.grid, self.config.line_width);
        let major = Stroke::solid(self.config.colors.grid_major, self.config.line_width);

        // Vertical lines, swept along x. Snapping can land one step below
        // the view edge; advance until inside before emitting.
        let mut x = floor_to_multiple(view.min.x, spacing);
        while x < view.min.x {
            x += spacing;
        }
        let mut index = 0u32;
        while x <= view.max.x {
            let stroke = if index % interval == 0 { major } else { minor };
            sink.line(
                self.camera.world_to_screen(Vec2::new(x, view.min.y)),
                self.camera.world_to_screen(Vec2::new(x, view.max.y)),
                stroke,
            );
            x += spacing;
            index += 1;
        }

        // Horizontal lines, swept along y with a fresh major-line index.
        let mut y = floor_to_multiple(view.min.y, spacing);
        while y < view.min.y {
            y += spacing;
        }
        let mut index = 0u32;
        while y <= view.max.y {
            let stroke = if index % interval == 0 { major } else { minor };
            sink.line(
                self.camera.world_to_screen(Vec2::new(view.min.x, y)),
                self.camera.world_to_screen(Vec2::new(view.max.x, y)),
                stroke,
            );
            y += spacing;
            index += 1;
        }
        Ok(())
    }

    /// Draw the +x and +y world axes as arrows from the origin.
    pub fn axes<S: PrimitiveSink>(&self, sink: &mut S) {
        let length = self.config.axis_length;
        self.arrow(
            sink,
            Vec2::ZERO,
            Vec2::new(length, consts::ZERO),
            self.config.colors.axis_x,
            None,
        );
        self.arrow(
            sink,
            Vec2::ZERO,
            Vec2::new(consts::ZERO, length),
            self.config.colors.axis_y,
            None,
        );
    }

    /// Draw an arrow from `start` to `end` in world space.
    ///
    /// `head_size` is in world units; `None` derives it from the configured
    /// axis length. Coincident endpoints draw the shaft alone, and a head
    /// size of zero or less skips the head.
    pub fn arrow<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        start: Vec2,
        end: Vec2,
        color: Color,
        head_size: Option<Fixed>,
    ) {
        let head_size = head_size.unwrap_or_else(|| self.config.axis_length / from_int(8));
        emit_arrow(
            self.camera,
            sink,
            start,
            end,
            color,
            head_size,
            self.config.line_width,
        );
    }

    /// Draw a crosshair spanning `size` world units out from `center` along
    /// both axes.
    pub fn crosshair<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        center: Vec2,
        size: Fixed,
        color: Color,
    ) {
        let stroke = Stroke::solid(color, self.config.line_width);
        let dx = Vec2::new(size, consts::ZERO);
        let dy = Vec2::new(consts::ZERO, size);
        sink.line(
            self.camera.world_to_screen(center - dx),
            self.camera.world_to_screen(center + dx),
            stroke,
        );
        sink.line(
            self.camera.world_to_screen(center - dy),
            self.camera.world_to_screen(center + dy),
            stroke,
        );
    }

    /// Draw a fan covering the angular range `[min_angle, max_angle]` at
    /// `radius` around `center`.
    ///
    /// The range is tessellated into [`ARC_SEGMENTS`] segments sampled
    /// inclusively of both endpoints, so the fan polygon always carries
    /// `ARC_SEGMENTS + 2` vertices: the center plus each perimeter sample.
    pub fn arc_fan<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        center: Vec2,
        min_angle: Fixed,
        max_angle: Fixed,
        radius: Fixed,
        style: Style,
    ) -> Result<(), RenderError> {
        emit_arc_fan(self.camera, sink, center, min_angle, max_angle, radius, style)
    }
}

// ---------------------------------------------------------------------------
// Shared geometry
// ---------------------------------------------------------------------------

/// Arrow from `start` to `end`: a shaft line plus two head lines.
///
/// Coincident endpoints leave the head off rather than normalizing a
/// zero-length direction.
pub(crate) fn emit_arrow<S: PrimitiveSink>(
    camera: &Camera,
    sink: &mut S,
    start: Vec2,
    end: Vec2,
    color: Color,
    head_size: Fixed,
    line_width: Fixed,
) {
    let stroke = Stroke::solid(color, line_width);
    let screen_start = camera.world_to_screen(start);
    let screen_end = camera.world_to_screen(end);
    sink.line(screen_start, screen_end, stroke);

    let Some(direction) = (end - start).normalized() else {
        tracing::trace!(?start, "arrow endpoints coincide, drawing shaft only");
        return;
    };
    if head_size <= consts::ZERO {
        return;
    }
    let base = end - direction * head_size;
    let offset = direction.perp() * (head_size / consts::TWO);
    sink.line(screen_end, camera.world_to_screen(base + offset), stroke);
    sink.line(screen_end, camera.world_to_screen(base - offset), stroke);
}

/// Fan polygon spanning `[min_angle, max_angle]` at `radius` around
/// `center`, culled by its axis-aligned bounds.
pub(crate) fn emit_arc_fan<S: PrimitiveSink>(
    camera: &Camera,
    sink: &mut S,
    center: Vec2,
    min_angle: Fixed,
    max_angle: Fixed,
    radius: Fixed,
    style: Style,
) -> Result<(), RenderError> {
    if radius <= consts::ZERO {
        return Err(RenderError::InvalidConfiguration {
            field: "radius",
            requirement: "strictly positive",
            value: radius.to_string(),
        });
    }
    let bounds = Rect::from_center_half_extents(center, Vec2::splat(radius));
    if !camera.is_visible(bounds) {
        return Ok(());
    }

    let sweep = max_angle - min_angle;
    let segments = from_int(i64::from(ARC_SEGMENTS));
    let mut vertices = Vec::with_capacity(ARC_SEGMENTS as usize + 2);
    vertices.push(camera.world_to_screen(center));
    for i in 0..=ARC_SEGMENTS {
        // The last sample divides out the factor it multiplied in, landing
        // exactly on max_angle.
        let angle = min_angle + sweep * from_int(i64::from(i)) / segments;
        let rim = center + Vec2::new(cos(angle), sin(angle)) * radius;
        vertices.push(camera.world_to_screen(rim));
    }
    sink.polygon(vertices, style);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
