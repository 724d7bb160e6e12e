//! Stateless sprite-animation frame resolution.
//!
//! An animation never stores playback state. Callers keep a single clock
//! value and resolve the visible frame from scratch whenever they need it,
//! which makes animations trivially replayable: restore the clock, get the
//! same frame.

use easel_math::rect::Rect;
use easel_math::{consts, wrap, Fixed};
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::primitive::{PrimitiveSink, TextureRef};
use crate::style::Color;
use crate::RenderError;

// ---------------------------------------------------------------------------
// Definition records
// ---------------------------------------------------------------------------

/// One frame of a sprite animation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationFrame {
    /// Texture the frame samples from.
    pub texture: TextureRef,
    /// Region of the texture, in texel coordinates.
    pub source: Rect,
    /// How long the frame is shown, in time units before playback speed is
    /// applied. Non-negative; zero-duration frames are skipped over.
    pub duration: Fixed,
}

/// A sprite animation definition: frames plus playback parameters.
///
/// Pure data; safe to share between entities and threads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAnimation {
    pub frames: Vec<AnimationFrame>,
    /// Whether playback wraps around or holds the last frame.
    pub looping: bool,
    /// Time multiplier; 2 plays twice as fast. Strictly positive.
    pub playback_speed: Fixed,
}

impl SpriteAnimation {
    /// Non-looping animation at unit playback speed.
    pub fn new(frames: Vec<AnimationFrame>) -> SpriteAnimation {
        SpriteAnimation {
            frames,
            looping: false,
            playback_speed: consts::ONE,
        }
    }

    /// Resolve the frame visible at `current_time`.
    pub fn resolve(&self, current_time: Fixed) -> Result<&AnimationFrame, RenderError> {
        let index = self.resolve_index(current_time)?;
        Ok(&self.frames[index])
    }

    /// Resolve the index of the frame visible at `current_time`.
    ///
    /// Each frame owns the half-open interval `[acc, acc + duration/speed)`
    /// of the scaled timeline, so a clock sitting exactly on a boundary
    /// resolves to the *next* frame. Looping animations wrap the clock with
    /// a floor-division modulo (negative clocks land in the last period);
    /// non-looping animations clamp any clock at or past the total duration
    /// to the last frame.
    ///
    /// # Errors
    ///
    /// `EmptyAnimation` when there are no frames; `InvalidConfiguration`
    /// when `playback_speed <= 0` or any frame duration is negative.
    pub fn resolve_index(&self, current_time: Fixed) -> Result<usize, RenderError> {
        if self.frames.is_empty() {
            return Err(RenderError::EmptyAnimation);
        }
        if self.playback_speed <= consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "playback_speed",
                requirement: "strictly positive",
                value: self.playback_speed.to_string(),
            });
        }

        let mut total = consts::ZERO;
        for frame in &self.frames {
            if frame.duration < consts::ZERO {
                return Err(RenderError::InvalidConfiguration {
                    field: "frame.duration",
                    requirement: "non-negative",
                    value: frame.duration.to_string(),
                });
            }
            total += frame.duration / self.playback_speed;
        }
        if total == consts::ZERO {
            return Ok(0);
        }

        let t = if self.looping {
            wrap(current_time, total)
        } else if current_time >= total {
            return Ok(self.frames.len() - 1);
        } else {
            // Negative clocks need no special case: the walk below puts
            // them on frame 0.
            current_time
        };

        // The walk accumulates the same division terms that formed `total`,
        // so the final accumulator equals `total` exactly and the loop
        // always terminates on a frame.
        let mut acc = consts::ZERO;
        for (index, frame) in self.frames.iter().enumerate() {
            acc += frame.duration / self.playback_speed;
            if t < acc {
                return Ok(index);
            }
        }
        Ok(self.frames.len() - 1)
    }
}

// ---------------------------------------------------------------------------
// Sprite drawing
// ---------------------------------------------------------------------------

/// Resolve and draw one sprite: pick the animation frame for
/// `current_time`, cull against the camera, and emit a single
/// texture-region command with `dest` mapped to screen space.
///
/// Returns `Ok(true)` when a command was emitted and `Ok(false)` when the
/// sprite was culled, so callers can keep culling statistics. With camera
/// rotation the emitted dest rect is the axis-aligned bounding box of the
/// rotated corners, since texture-region destinations are axis-aligned by
/// contract.
pub fn draw_sprite<S: PrimitiveSink>(
    camera: &Camera,
    sink: &mut S,
    animation: &SpriteAnimation,
    current_time: Fixed,
    dest: Rect,
    tint: Color,
) -> Result<bool, RenderError> {
    let frame = animation.resolve(current_time)?;
    if !camera.is_visible(dest) {
        tracing::trace!(?dest, "sprite culled");
        return Ok(false);
    }

    let [a, b, c, d] = dest.corners();
    let a = camera.world_to_screen(a);
    let b = camera.world_to_screen(b);
    let c = camera.world_to_screen(c);
    let d = camera.world_to_screen(d);
    let screen_dest = Rect {
        min: a.min(b).min(c).min(d),
        max: a.max(b).max(c).max(d),
    };

    sink.texture_region(frame.texture, frame.source, screen_dest, tint);
    Ok(true)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
