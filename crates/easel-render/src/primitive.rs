//! The primitive command surface between the deterministic core and a
//! rendering backend.
//!
//! Everything the workspace draws reduces to a stream of
//! [`PrimitiveCommand`]s delivered through a [`PrimitiveSink`]. Commands are
//! fully resolved to screen space before submission; a backend translates
//! them 1:1 into its own draw calls and never consults simulation state.

use easel_math::rect::Rect;
use easel_math::vec2::Vec2;
use easel_math::Fixed;
use serde::{Deserialize, Serialize};

use crate::style::{Color, Stroke, Style};

// ---------------------------------------------------------------------------
// TextureRef
// ---------------------------------------------------------------------------

/// Opaque handle to a backend texture.
///
/// The core never dereferences the handle; asset loading, residency, and
/// lifetime are entirely the backend's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TextureRef(pub u32);

// ---------------------------------------------------------------------------
// PrimitiveCommand
// ---------------------------------------------------------------------------

/// One backend draw call, fully resolved to screen space.
///
/// This enum is the entire outbound contract of the render core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PrimitiveCommand {
    /// Straight line segment.
    Line { start: Vec2, end: Vec2, stroke: Stroke },
    /// Circle with a screen-space radius.
    Circle {
        center: Vec2,
        radius: Fixed,
        style: Style,
    },
    /// Axis-aligned rectangle.
    Rect { bounds: Rect, style: Style },
    /// Closed polygon. Vertices are in submission order; the backend closes
    /// the loop from the last vertex back to the first.
    Polygon { vertices: Vec<Vec2>, style: Style },
    /// Axis-aligned ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect, style: Style },
    /// The `source` region of `texture` mapped onto the screen-space `dest`
    /// rectangle, modulated by `tint`.
    TextureRegion {
        texture: TextureRef,
        source: Rect,
        dest: Rect,
        tint: Color,
    },
}

// ---------------------------------------------------------------------------
// PrimitiveSink
// ---------------------------------------------------------------------------

/// Receiver for resolved primitive draw calls.
///
/// Sinks are infallible: everything that reaches a sink has already been
/// validated and transformed, so implementations only dispatch or record.
pub trait PrimitiveSink {
    /// Straight line segment from `start` to `end`.
    fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke);
    /// Circle at `center` with screen-space `radius`.
    fn circle(&mut self, center: Vec2, radius: Fixed, style: Style);
    /// Axis-aligned rectangle.
    fn rect(&mut self, bounds: Rect, style: Style);
    /// Closed polygon through `vertices`.
    fn polygon(&mut self, vertices: Vec<Vec2>, style: Style);
    /// Axis-aligned ellipse inscribed in `bounds`.
    fn ellipse(&mut self, bounds: Rect, style: Style);
    /// The `source` region of `texture` mapped onto `dest`.
    fn texture_region(&mut self, texture: TextureRef, source: Rect, dest: Rect, tint: Color);
}

// Forwarding impl so sinks can be passed by mutable reference through
// generic drawing helpers without re-borrow gymnastics.
impl<S: PrimitiveSink + ?Sized> PrimitiveSink for &mut S {
    fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        (**self).line(start, end, stroke);
    }

    fn circle(&mut self, center: Vec2, radius: Fixed, style: Style) {
        (**self).circle(center, radius, style);
    }

    fn rect(&mut self, bounds: Rect, style: Style) {
        (**self).rect(bounds, style);
    }

    fn polygon(&mut self, vertices: Vec<Vec2>, style: Style) {
        (**self).polygon(vertices, style);
    }

    fn ellipse(&mut self, bounds: Rect, style: Style) {
        (**self).ellipse(bounds, style);
    }

    fn texture_region(&mut self, texture: TextureRef, source: Rect, dest: Rect, tint: Color) {
        (**self).texture_region(texture, source, dest, tint);
    }
}

// ---------------------------------------------------------------------------
// FrameRecorder
// ---------------------------------------------------------------------------

/// Reference sink that records every command into a `Vec`.
///
/// Used for digest computation, golden tests, and headless runs without a
/// backend. Command order is exactly submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRecorder {
    commands: Vec<PrimitiveCommand>,
}

impl FrameRecorder {
    /// Empty recorder.
    pub fn new() -> FrameRecorder {
        FrameRecorder::default()
    }

    /// Commands recorded so far, in submission order.
    pub fn commands(&self) -> &[PrimitiveCommand] {
        &self.commands
    }

    /// Number of recorded commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Drop all recorded commands, keeping the allocation for the next
    /// frame.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Consume the recorder, yielding the command stream.
    pub fn into_commands(self) -> Vec<PrimitiveCommand> {
        self.commands
    }

    /// BLAKE3 hex digest of the recorded stream.
    ///
    /// See [`crate::digest::frame_digest`] for the encoding contract.
    pub fn digest(&self) -> String {
        crate::digest::frame_digest(&self.commands)
    }
}

impl PrimitiveSink for FrameRecorder {
    fn line(&mut self, start: Vec2, end: Vec2, stroke: Stroke) {
        self.commands
            .push(PrimitiveCommand::Line { start, end, stroke });
    }

    fn circle(&mut self, center: Vec2, radius: Fixed, style: Style) {
        self.commands.push(PrimitiveCommand::Circle {
            center,
            radius,
            style,
        });
    }

    fn rect(&mut self, bounds: Rect, style: Style) {
        self.commands.push(PrimitiveCommand::Rect { bounds, style });
    }

    fn polygon(&mut self, vertices: Vec<Vec2>, style: Style) {
        self.commands
            .push(PrimitiveCommand::Polygon { vertices, style });
    }

    fn ellipse(&mut self, bounds: Rect, style: Style) {
        self.commands.push(PrimitiveCommand::Ellipse { bounds, style });
    }

    fn texture_region(&mut self, texture: TextureRef, source: Rect, dest: Rect, tint: Color) {
        self.commands.push(PrimitiveCommand::TextureRegion {
            texture,
            source,
            dest,
            tint,
        });
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
