//! Deterministic camera transform between world and screen space.
//!
//! The forward transform is translate, zoom, rotate, then shift to the
//! viewport center; the inverse applies the exact algebraic inverse of each
//! step in reverse order. Both directions are pure fixed-point, so a round
//! trip is exact up to the rounding of the trig approximation, and exact to
//! the bit when the camera is unrotated at unit zoom.

use easel_math::rect::Rect;
use easel_math::rotation::Rotation;
use easel_math::vec2::Vec2;
use easel_math::{consts, from_int, Fixed};
use serde::{Deserialize, Serialize};

use crate::RenderError;

// ---------------------------------------------------------------------------
// State records
// ---------------------------------------------------------------------------

/// Integer pixel dimensions of the render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    /// Center of the viewport in fixed-point screen coordinates.
    pub fn center(self) -> Vec2 {
        Vec2::new(
            from_int(i64::from(self.width)) / consts::TWO,
            from_int(i64::from(self.height)) / consts::TWO,
        )
    }
}

/// Follow behavior toward a world-space target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    /// World position the camera converges toward.
    pub target: Vec2,
    /// Convergence rate per time unit. Strictly positive.
    pub speed: Fixed,
    /// Camera-relative rect inside which the target causes no movement.
    pub dead_zone: Option<Rect>,
}

/// Complete serializable camera state.
///
/// The state is replaced wholesale through [`Camera::set_state`] rather than
/// mutated field-by-field, so a replay can restore a camera from a single
/// record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CameraState {
    /// World position at the center of the view.
    pub position: Vec2,
    /// Zoom factor from world units to screen units. Strictly positive.
    pub zoom: Fixed,
    /// View rotation in radians, counter-clockwise, stored unnormalized.
    pub rotation: Fixed,
    /// Optional world-space rect the view is confined to.
    pub bounds: Option<Rect>,
    /// Optional follow behavior, advanced by [`Camera::update_follow`].
    pub follow: Option<Follow>,
}

impl Default for CameraState {
    /// Identity camera: world origin, unit zoom, no rotation, unconfined.
    fn default() -> Self {
        CameraState {
            position: Vec2::ZERO,
            zoom: consts::ONE,
            rotation: consts::ZERO,
            bounds: None,
            follow: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Camera
// ---------------------------------------------------------------------------

/// World-to-screen transform over validated state.
///
/// The cos/sin pair for the current rotation is cached at construction, so
/// the per-point hot path never re-evaluates the trig polynomials.
#[derive(Debug, Clone)]
pub struct Camera {
    state: CameraState,
    viewport: Viewport,
    /// Cached `Rotation::from_radians(state.rotation)`.
    rotation: Rotation,
}

impl Camera {
    /// Build a camera over the given state and render target.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` when `zoom <= 0` or a follow target carries a
    /// non-positive speed. Invalid state never reaches a division.
    pub fn new(state: CameraState, viewport: Viewport) -> Result<Camera, RenderError> {
        validate_state(&state)?;
        let rotation = Rotation::from_radians(state.rotation);
        Ok(Camera {
            state,
            viewport,
            rotation,
        })
    }

    /// Current state snapshot.
    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Current render-target dimensions.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Replace the entire state after validating it.
    ///
    /// On failure the previous state stays in effect untouched.
    pub fn set_state(&mut self, state: CameraState) -> Result<(), RenderError> {
        validate_state(&state)?;
        self.rotation = Rotation::from_radians(state.rotation);
        self.state = state;
        Ok(())
    }

    /// Resize the render target.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Transform a world position into screen coordinates.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let scaled = (world - self.state.position) * self.state.zoom;
        let rotated = if self.state.rotation == consts::ZERO {
            scaled
        } else {
            self.rotation.apply(scaled)
        };
        rotated + self.viewport.center()
    }

    /// Transform a screen position back into world coordinates.
    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        let centered = screen - self.viewport.center();
        let unrotated = if self.state.rotation == consts::ZERO {
            centered
        } else {
            self.rotation.inverse().apply(centered)
        };
        unrotated / self.state.zoom + self.state.position
    }

    /// Scale a world-space length into screen units.
    pub fn scale_to_screen(&self, length: Fixed) -> Fixed {
        length * self.state.zoom
    }

    /// World-space axis-aligned bounds of everything the viewport can see.
    ///
    /// With rotation this is the AABB of the rotated view quad, so the
    /// bounds are conservative: culling against them can never reject a
    /// visible shape.
    pub fn view_bounds(&self) -> Rect {
        let w = from_int(i64::from(self.viewport.width));
        let h = from_int(i64::from(self.viewport.height));
        let a = self.screen_to_world(Vec2::ZERO);
        let b = self.screen_to_world(Vec2::new(w, consts::ZERO));
        let c = self.screen_to_world(Vec2::new(w, h));
        let d = self.screen_to_world(Vec2::new(consts::ZERO, h));
        Rect {
            min: a.min(b).min(c).min(d),
            max: a.max(b).max(c).max(d),
        }
    }

    /// Whether a world-space rect overlaps the view, edges included.
    pub fn is_visible(&self, rect: Rect) -> bool {
        self.view_bounds().intersects(rect)
    }

    /// Advance the follow behavior by `dt` time units.
    ///
    /// Without a follow target this is a no-op. With one, the camera moves
    /// by `(target - position) * min(speed * dt, 1)`, a step that converges
    /// without overshooting, unless the target sits inside the
    /// camera-relative dead zone. Afterwards the position is clamped so the
    /// view stays inside `bounds` on each axis independently; when the view
    /// is wider or taller than the bounds, the camera centers on the bounds
    /// instead.
    pub fn update_follow(&mut self, dt: Fixed) -> Result<(), RenderError> {
        if dt < consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "dt",
                requirement: "non-negative",
                value: dt.to_string(),
            });
        }
        let follow = match self.state.follow {
            Some(follow) => follow,
            None => return Ok(()),
        };
        if let Some(zone) = follow.dead_zone {
            if zone.translated(self.state.position).contains(follow.target) {
                return Ok(());
            }
        }
        let step = (follow.speed * dt).min(consts::ONE);
        self.state.position += (follow.target - self.state.position) * step;
        self.clamp_to_bounds();
        Ok(())
    }

    /// Shift the position so `view_bounds()` stays inside `state.bounds`.
    fn clamp_to_bounds(&mut self) {
        let bounds = match self.state.bounds {
            Some(bounds) => bounds,
            None => return,
        };
        let view = self.view_bounds();
        let mut shift = Vec2::ZERO;
        if view.width() >= bounds.width() {
            shift.x = bounds.center().x - view.center().x;
        } else if view.min.x < bounds.min.x {
            shift.x = bounds.min.x - view.min.x;
        } else if view.max.x > bounds.max.x {
            shift.x = bounds.max.x - view.max.x;
        }
        if view.height() >= bounds.height() {
            shift.y = bounds.center().y - view.center().y;
        } else if view.min.y < bounds.min.y {
            shift.y = bounds.min.y - view.min.y;
        } else if view.max.y > bounds.max.y {
            shift.y = bounds.max.y - view.max.y;
        }
        self.state.position += shift;
    }
}

fn validate_state(state: &CameraState) -> Result<(), RenderError> {
    if state.zoom <= consts::ZERO {
        return Err(RenderError::InvalidConfiguration {
            field: "zoom",
            requirement: "strictly positive",
            value: state.zoom.to_string(),
        });
    }
    if let Some(follow) = &state.follow {
        if follow.speed <= consts::ZERO {
            return Err(RenderError::InvalidConfiguration {
                field: "follow.speed",
                requirement: "strictly positive",
                value: follow.speed.to_string(),
            });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
