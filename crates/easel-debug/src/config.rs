//! Overlay configuration, patching, and validation.
//!
//! Configs are plain serde values validated as a whole. Runtime tweaks
//! arrive as patch values with every field optional; a patch merges onto an
//! existing config and the merged result is re-validated before it replaces
//! anything, so a bad patch can never leave a half-updated config behind.

use easel_math::{consts, from_int, Fixed};
use easel_render::style::Color;
use easel_render::RenderError;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Overlay config
// ---------------------------------------------------------------------------

/// Colors for the world-space debug overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugColors {
    /// Minor grid lines: #3C3C46.
    pub grid: Color,
    /// Major grid lines: #64646E.
    pub grid_major: Color,
    /// The +x axis arrow: #E04B4B.
    pub axis_x: Color,
    /// The +y axis arrow: #4BE04B.
    pub axis_y: Color,
    /// The origin crosshair: #FFFFFF.
    pub origin: Color,
}

impl Default for DebugColors {
    fn default() -> DebugColors {
        DebugColors {
            grid: Color::rgb(60, 60, 70),
            grid_major: Color::rgb(100, 100, 110),
            axis_x: Color::rgb(224, 75, 75),
            axis_y: Color::rgb(75, 224, 75),
            origin: Color::WHITE,
        }
    }
}

/// Configuration for the world-space debug overlay.
///
/// Construct via `Default` and adjust fields, or deserialize from config
/// data. [`validate`](DebugConfig::validate) checks the numeric ranges; the
/// drawing pass re-checks the fields it consumes so a hand-built invalid
/// config fails at the call site instead of drawing garbage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Draw the world-space grid.
    pub show_grid: bool,
    /// Draw the +x/+y axis arrows at the origin.
    pub show_axes: bool,
    /// Draw the origin crosshair.
    pub show_origin: bool,
    /// World units between adjacent grid lines. Strictly positive.
    pub grid_spacing: Fixed,
    /// Every n-th grid line per axis uses the major style. At least 1.
    pub major_line_interval: u32,
    /// World-space length of each axis arrow. Strictly positive.
    pub axis_length: Fixed,
    /// Screen-space stroke width for every overlay line. Strictly positive.
    pub line_width: Fixed,
    pub colors: DebugColors,
}

impl Default for DebugConfig {
    fn default() -> DebugConfig {
        DebugConfig {
            show_grid: true,
            show_axes: true,
            show_origin: true,
            grid_spacing: consts::ONE,
            major_line_interval: 5,
            axis_length: from_int(5),
            line_width: consts::ONE,
            colors: DebugColors::default(),
        }
    }
}

impl DebugConfig {
    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), RenderError> {
        require_positive("grid_spacing", self.grid_spacing)?;
        if self.major_line_interval == 0 {
            return Err(RenderError::InvalidConfiguration {
                field: "major_line_interval",
                requirement: "at least 1",
                value: self.major_line_interval.to_string(),
            });
        }
        require_positive("axis_length", self.axis_length)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }

    /// Merged copy of `self` with `patch` applied, validated as a whole.
    ///
    /// `self` is untouched either way, so a failed patch leaves the caller
    /// on its current config.
    pub fn apply_patch(&self, patch: &DebugConfigPatch) -> Result<DebugConfig, RenderError> {
        let mut next = *self;
        if let Some(show_grid) = patch.show_grid {
            next.show_grid = show_grid;
        }
        if let Some(show_axes) = patch.show_axes {
            next.show_axes = show_axes;
        }
        if let Some(show_origin) = patch.show_origin {
            next.show_origin = show_origin;
        }
        if let Some(grid_spacing) = patch.grid_spacing {
            next.grid_spacing = grid_spacing;
        }
        if let Some(major_line_interval) = patch.major_line_interval {
            next.major_line_interval = major_line_interval;
        }
        if let Some(axis_length) = patch.axis_length {
            next.axis_length = axis_length;
        }
        if let Some(line_width) = patch.line_width {
            next.line_width = line_width;
        }
        if let Some(colors) = patch.colors {
            if let Some(grid) = colors.grid {
                next.colors.grid = grid;
            }
            if let Some(grid_major) = colors.grid_major {
                next.colors.grid_major = grid_major;
            }
            if let Some(axis_x) = colors.axis_x {
                next.colors.axis_x = axis_x;
            }
            if let Some(axis_y) = colors.axis_y {
                next.colors.axis_y = axis_y;
            }
            if let Some(origin) = colors.origin {
                next.colors.origin = origin;
            }
        }
        next.validate()?;
        Ok(next)
    }
}

/// Partial update for [`DebugColors`]; absent fields keep their values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugColorsPatch {
    pub grid: Option<Color>,
    pub grid_major: Option<Color>,
    pub axis_x: Option<Color>,
    pub axis_y: Option<Color>,
    pub origin: Option<Color>,
}

/// Partial update for [`DebugConfig`].
///
/// Deserializes from sparse data, a console command or a hot-reload file,
/// where only the mentioned fields change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfigPatch {
    pub show_grid: Option<bool>,
    pub show_axes: Option<bool>,
    pub show_origin: Option<bool>,
    pub grid_spacing: Option<Fixed>,
    pub major_line_interval: Option<u32>,
    pub axis_length: Option<Fixed>,
    pub line_width: Option<Fixed>,
    pub colors: Option<DebugColorsPatch>,
}

// ---------------------------------------------------------------------------
// Physics overlay config
// ---------------------------------------------------------------------------

/// Colors for the physics overlay, keyed by what they annotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsDebugColors {
    /// Static body colliders: #808080.
    pub static_body: Color,
    /// Kinematic body colliders: #50A0F0.
    pub kinematic_body: Color,
    /// Dynamic body colliders: #50DC64.
    pub dynamic_body: Color,
    /// Colliders of any sleeping body, whatever its kind: #5A5A78.
    pub sleeping_body: Color,
    /// Contact point markers: #FF8C00.
    pub contact: Color,
    /// Contact normal impulse arrows: #FFDC00.
    pub contact_normal: Color,
    /// Impulse arrows: #E63CE6.
    pub impulse: Color,
    /// Velocity arrows: #00C8DC.
    pub velocity: Color,
    /// Force arrows: #F06428.
    pub force: Color,
    /// Acceleration arrows: #B478FF.
    pub acceleration: Color,
    /// Joint anchor lines: #C8C83C.
    pub joint: Color,
    /// Joint limit arc fill: #C8C83C at alpha 90.
    pub joint_limits: Color,
}

impl Default for PhysicsDebugColors {
    fn default() -> PhysicsDebugColors {
        PhysicsDebugColors {
            static_body: Color::rgb(128, 128, 128),
            kinematic_body: Color::rgb(80, 160, 240),
            dynamic_body: Color::rgb(80, 220, 100),
            sleeping_body: Color::rgb(90, 90, 120),
            contact: Color::rgb(255, 140, 0),
            contact_normal: Color::rgb(255, 220, 0),
            impulse: Color::rgb(230, 60, 230),
            velocity: Color::rgb(0, 200, 220),
            force: Color::rgb(240, 100, 40),
            acceleration: Color::rgb(180, 120, 255),
            joint: Color::rgb(200, 200, 60),
            joint_limits: Color::rgba(200, 200, 60, 90),
        }
    }
}

/// Configuration for the physics overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhysicsDebugConfig {
    /// Draw collider outlines.
    pub show_colliders: bool,
    /// Draw contact markers and normal impulse arrows.
    pub show_contacts: bool,
    /// Draw joint anchor lines and limit arcs.
    pub show_joints: bool,
    /// Draw a velocity arrow per body.
    pub show_velocities: bool,
    /// Fill collider shapes instead of outlining them.
    pub filled: bool,
    /// World units of arrow per unit of velocity. Strictly positive.
    pub velocity_scale: Fixed,
    /// World units of arrow per unit of impulse. Strictly positive.
    pub impulse_scale: Fixed,
    /// World units of arrow per unit of force. Strictly positive.
    pub force_scale: Fixed,
    /// World units of arrow per unit of acceleration. Strictly positive.
    pub acceleration_scale: Fixed,
    /// World-space radius of contact markers. Strictly positive.
    pub contact_radius: Fixed,
    /// Screen-space stroke width for every physics line. Strictly positive.
    pub line_width: Fixed,
    pub colors: PhysicsDebugColors,
}

impl Default for PhysicsDebugConfig {
    fn default() -> PhysicsDebugConfig {
        PhysicsDebugConfig {
            show_colliders: true,
            show_contacts: true,
            show_joints: true,
            show_velocities: false,
            filled: false,
            velocity_scale: consts::ONE,
            impulse_scale: consts::ONE,
            force_scale: consts::ONE,
            acceleration_scale: consts::ONE,
            contact_radius: consts::ONE / from_int(8),
            line_width: consts::ONE,
            colors: PhysicsDebugColors::default(),
        }
    }
}

impl PhysicsDebugConfig {
    /// Check every numeric field against its documented range.
    pub fn validate(&self) -> Result<(), RenderError> {
        require_positive("velocity_scale", self.velocity_scale)?;
        require_positive("impulse_scale", self.impulse_scale)?;
        require_positive("force_scale", self.force_scale)?;
        require_positive("acceleration_scale", self.acceleration_scale)?;
        require_positive("contact_radius", self.contact_radius)?;
        require_positive("line_width", self.line_width)?;
        Ok(())
    }

    /// Merged copy of `self` with `patch` applied, validated as a whole.
    pub fn apply_patch(
        &self,
        patch: &PhysicsDebugConfigPatch,
    ) -> Result<PhysicsDebugConfig, RenderError> {
        let mut next = *self;
        if let Some(show_colliders) = patch.show_colliders {
            next.show_colliders = show_colliders;
        }
        if let Some(show_contacts) = patch.show_contacts {
            next.show_contacts = show_contacts;
        }
        if let Some(show_joints) = patch.show_joints {
            next.show_joints = show_joints;
        }
        if let Some(show_velocities) = patch.show_velocities {
            next.show_velocities = show_velocities;
        }
        if let Some(filled) = patch.filled {
            next.filled = filled;
        }
        if let Some(velocity_scale) = patch.velocity_scale {
            next.velocity_scale = velocity_scale;
        }
        if let Some(impulse_scale) = patch.impulse_scale {
            next.impulse_scale = impulse_scale;
        }
        if let Some(force_scale) = patch.force_scale {
            next.force_scale = force_scale;
        }
        if let Some(acceleration_scale) = patch.acceleration_scale {
            next.acceleration_scale = acceleration_scale;
        }
        if let Some(contact_radius) = patch.contact_radius {
            next.contact_radius = contact_radius;
        }
        if let Some(line_width) = patch.line_width {
            next.line_width = line_width;
        }
        if let Some(colors) = patch.colors {
            if let Some(static_body) = colors.static_body {
                next.colors.static_body = static_body;
            }
            if let Some(kinematic_body) = colors.kinematic_body {
                next.colors.kinematic_body = kinematic_body;
            }
            if let Some(dynamic_body) = colors.dynamic_body {
                next.colors.dynamic_body = dynamic_body;
            }
            if let Some(sleeping_body) = colors.sleeping_body {
                next.colors.sleeping_body = sleeping_body;
            }
            if let Some(contact) = colors.contact {
                next.colors.contact = contact;
            }
            if let Some(contact_normal) = colors.contact_normal {
                next.colors.contact_normal = contact_normal;
            }
            if let Some(impulse) = colors.impulse {
                next.colors.impulse = impulse;
            }
            if let Some(velocity) = colors.velocity {
                next.colors.velocity = velocity;
            }
            if let Some(force) = colors.force {
                next.colors.force = force;
            }
            if let Some(acceleration) = colors.acceleration {
                next.colors.acceleration = acceleration;
            }
            if let Some(joint) = colors.joint {
                next.colors.joint = joint;
            }
            if let Some(joint_limits) = colors.joint_limits {
                next.colors.joint_limits = joint_limits;
            }
        }
        next.validate()?;
        Ok(next)
    }
}

/// Partial update for [`PhysicsDebugColors`]; absent fields keep their
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsDebugColorsPatch {
    pub static_body: Option<Color>,
    pub kinematic_body: Option<Color>,
    pub dynamic_body: Option<Color>,
    pub sleeping_body: Option<Color>,
    pub contact: Option<Color>,
    pub contact_normal: Option<Color>,
    pub impulse: Option<Color>,
    pub velocity: Option<Color>,
    pub force: Option<Color>,
    pub acceleration: Option<Color>,
    pub joint: Option<Color>,
    pub joint_limits: Option<Color>,
}

/// Partial update for [`PhysicsDebugConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsDebugConfigPatch {
    pub show_colliders: Option<bool>,
    pub show_contacts: Option<bool>,
    pub show_joints: Option<bool>,
    pub show_velocities: Option<bool>,
    pub filled: Option<bool>,
    pub velocity_scale: Option<Fixed>,
    pub impulse_scale: Option<Fixed>,
    pub force_scale: Option<Fixed>,
    pub acceleration_scale: Option<Fixed>,
    pub contact_radius: Option<Fixed>,
    pub line_width: Option<Fixed>,
    pub colors: Option<PhysicsDebugColorsPatch>,
}

fn require_positive(field: &'static str, value: Fixed) -> Result<(), RenderError> {
    if value <= consts::ZERO {
        return Err(RenderError::InvalidConfiguration {
            field,
            requirement: "strictly positive",
            value: value.to_string(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
