//! Easel render core -- deterministic 2D rendering abstraction.
//!
//! This crate sits between a fixed-point simulation and an arbitrary
//! rendering backend. Everything above the
//! [`PrimitiveSink`](primitive::PrimitiveSink) boundary is pure integer
//! arithmetic: the camera transform, the sprite animation resolver, and the
//! frame digest behave bit-identically across platforms and runs, which is
//! what makes replay and lockstep verification possible. Backends receive
//! fully resolved screen-space primitives and never see simulation state.
//!
//! # Quick Start
//!
//! ```
//! use easel_math::prelude::*;
//! use easel_render::prelude::*;
//!
//! # fn main() -> Result<(), RenderError> {
//! // An identity camera over an 800x600 target puts the world origin at
//! // the viewport center.
//! let camera = Camera::new(
//!     CameraState::default(),
//!     Viewport { width: 800, height: 600 },
//! )?;
//! assert_eq!(
//!     camera.world_to_screen(Vec2::ZERO),
//!     Vec2::new(from_int(400), from_int(300)),
//! );
//!
//! // Record a frame and fingerprint it.
//! let mut frame = FrameRecorder::new();
//! frame.circle(
//!     camera.world_to_screen(Vec2::ZERO),
//!     camera.scale_to_screen(from_int(10)),
//!     Style::fill(Color::WHITE),
//! );
//! assert_eq!(frame.digest().len(), 64);
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod animation;
pub mod camera;
pub mod digest;
pub mod primitive;
pub mod style;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors produced by the render core.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// A configuration value violated its documented bound. Raised before
    /// any arithmetic runs; invalid values are rejected, never clamped.
    #[error("invalid configuration: {field} must be {requirement} (got {value})")]
    InvalidConfiguration {
        field: &'static str,
        requirement: &'static str,
        value: String,
    },

    /// A frame was requested from an animation with no frames.
    #[error("animation has no frames")]
    EmptyAnimation,

    /// Geometry below the primitive's minimum, with no defined recovery.
    #[error("degenerate geometry: {what}")]
    DegenerateGeometry { what: &'static str },
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::animation::{draw_sprite, AnimationFrame, SpriteAnimation};
    pub use crate::camera::{Camera, CameraState, Follow, Viewport};
    pub use crate::digest::frame_digest;
    pub use crate::primitive::{FrameRecorder, PrimitiveCommand, PrimitiveSink, TextureRef};
    pub use crate::style::{Color, DashPattern, Stroke, Style};
    pub use crate::RenderError;
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
