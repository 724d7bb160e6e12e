//! easel-debug -- Procedural debug overlays on the easel rendering core.
//!
//! Expands semantic debugging intents (a world grid, axis arrows, collider
//! outlines, contact markers, joint limits) into [`easel_render`] primitive
//! commands. Everything here is stateless and deterministic: the same
//! config, camera, and physics snapshot produce the same command stream,
//! byte for byte, on every platform, so overlay frames can be digested and
//! compared across machines.
//!
//! # Quick Start
//!
//! ```
//! use easel_debug::prelude::*;
//! use easel_render::prelude::*;
//!
//! # fn main() -> Result<(), RenderError> {
//! let camera = Camera::new(
//!     CameraState::default(),
//!     Viewport { width: 800, height: 600 },
//! )?;
//! let config = DebugConfig::default();
//!
//! let mut frame = FrameRecorder::new();
//! DebugDraw::new(&config, &camera).render_overlay(&mut frame)?;
//! assert!(!frame.is_empty());
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod draw;
pub mod physics;

pub use easel_render::RenderError;

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::config::{
        DebugColors, DebugColorsPatch, DebugConfig, DebugConfigPatch, PhysicsDebugColors,
        PhysicsDebugColorsPatch, PhysicsDebugConfig, PhysicsDebugConfigPatch,
    };
    pub use crate::draw::{DebugDraw, ARC_SEGMENTS};
    pub use crate::physics::{
        BodyHandle, BodyInfo, BodyKind, ColliderInfo, ColliderShape, ContactPoint, JointInfo,
        JointLimits, PhysicsAdapter, PhysicsDebugDraw,
    };
    pub use crate::RenderError;
}
