//! Physics overlay: the adapter contract and the walker that expands a
//! physics snapshot into primitives.
//!
//! The walker never touches a physics engine directly. An engine-side
//! [`PhysicsAdapter`] exposes bodies, colliders, joints, and contacts as
//! plain values; the walker imposes its own deterministic traversal order on
//! bodies so that two adapters exposing the same state emit byte-identical
//! command streams.

use easel_math::rect::Rect;
use easel_math::rotation::Rotation;
use easel_math::vec2::Vec2;
use easel_math::{from_int, Fixed};
use easel_render::camera::Camera;
use easel_render::primitive::PrimitiveSink;
use easel_render::style::{Color, Stroke, Style};
use easel_render::RenderError;
use serde::{Deserialize, Serialize};

use crate::config::PhysicsDebugConfig;
use crate::draw::{emit_arc_fan, emit_arrow};

// ---------------------------------------------------------------------------
// Adapter data model
// ---------------------------------------------------------------------------

/// Engine-assigned identifier for a physics body.
///
/// Handles order the walk: bodies are always visited in ascending handle
/// order, which keeps the emitted stream digest-stable whatever the
/// adapter's internal iteration order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct BodyHandle(pub u64);

/// How a body participates in simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyKind {
    /// Immovable.
    Static,
    /// Moved by the application, not by forces.
    Kinematic,
    /// Fully simulated.
    Dynamic,
}

/// Pose and motion of one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyInfo {
    /// World-space position of the body origin.
    pub position: Vec2,
    /// Body rotation in radians.
    pub rotation: Fixed,
    /// Linear velocity in world units per second.
    pub velocity: Vec2,
    pub kind: BodyKind,
    /// Whether the body is awake. Sleeping bodies draw in the sleeping
    /// color whatever their kind.
    pub awake: bool,
}

/// Shape of one collider, in collider-local coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColliderShape {
    Circle {
        radius: Fixed,
    },
    Box {
        half_extents: Vec2,
    },
    /// Convex polygon with at least 3 vertices.
    Polygon {
        vertices: Vec<Vec2>,
    },
    /// Line segment, for edge colliders.
    Edge {
        start: Vec2,
        end: Vec2,
    },
}

/// One collider attached to a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColliderInfo {
    pub shape: ColliderShape,
    /// Offset from the body origin, in body-local coordinates.
    pub offset: Vec2,
    /// Rotation relative to the body, in radians.
    pub rotation: Fixed,
}

/// Angular limits of a joint, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointLimits {
    pub min: Fixed,
    pub max: Fixed,
}

/// One joint between two anchor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JointInfo {
    /// World-space anchor on the first body.
    pub anchor_a: Vec2,
    /// World-space anchor on the second body.
    pub anchor_b: Vec2,
    /// Angular limits, drawn as an arc fan at `anchor_a` when present.
    pub limits: Option<JointLimits>,
}

/// One contact point reported by the narrow phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactPoint {
    /// World-space contact position.
    pub position: Vec2,
    /// Unit contact normal.
    pub normal: Vec2,
    /// Impulse applied along the normal.
    pub normal_impulse: Fixed,
    /// Impulse applied along the tangent.
    pub tangent_impulse: Fixed,
    /// Penetration depth, negative when separated.
    pub separation: Fixed,
}

/// Read-only view of a physics engine for overlay rendering.
///
/// The walker sorts and deduplicates body handles itself. `joints` and
/// `contacts` are emitted in the order returned, so adapters must report
/// them in a stable order for frame digests to be comparable across runs.
pub trait PhysicsAdapter {
    /// Handles of every live body. Order and duplicates are tolerated.
    fn body_handles(&self) -> Vec<BodyHandle>;
    /// Pose and motion for `handle`, or `None` for a stale handle.
    fn body_info(&self, handle: BodyHandle) -> Option<BodyInfo>;
    /// Colliders attached to `handle`, in the engine's stable order.
    fn colliders(&self, handle: BodyHandle) -> Vec<ColliderInfo>;
    /// Every joint, in the engine's stable order.
    fn joints(&self) -> Vec<JointInfo>;
    /// Contact points from the last step, in the engine's stable order.
    fn contacts(&self) -> Vec<ContactPoint>;
}

// ---------------------------------------------------------------------------
// PhysicsDebugDraw
// ---------------------------------------------------------------------------

/// Stateless drawing pass for the physics overlay.
pub struct PhysicsDebugDraw<'a> {
    pub config: &'a PhysicsDebugConfig,
    pub camera: &'a Camera,
}

impl<'a> PhysicsDebugDraw<'a> {
    /// Physics pass drawing `config` as seen through `camera`.
    pub fn new(config: &'a PhysicsDebugConfig, camera: &'a Camera) -> PhysicsDebugDraw<'a> {
        PhysicsDebugDraw { config, camera }
    }

    /// Walk the adapter and draw every enabled overlay element.
    ///
    /// Emission order is fixed: per body in ascending handle order its
    /// colliders then its velocity arrow, then all contacts, then all
    /// joints. Offscreen colliders, contacts, and limit fans are culled
    /// against the camera's view bounds.
    pub fn render<S, A>(&self, sink: &mut S, adapter: &A) -> Result<(), RenderError>
    where
        S: PrimitiveSink,
        A: PhysicsAdapter,
    {
        if self.config.show_colliders || self.config.show_velocities {
            let mut handles = adapter.body_handles();
            handles.sort_unstable();
            handles.dedup();
            for handle in handles {
                let Some(body) = adapter.body_info(handle) else {
                    tracing::debug!(?handle, "skipping stale body handle");
                    continue;
                };
                if self.config.show_colliders {
                    for collider in adapter.colliders(handle) {
                        self.collider(sink, &body, &collider)?;
                    }
                }
                if self.config.show_velocities {
                    self.velocity(sink, body.position, body.velocity);
                }
            }
        }

        if self.config.show_contacts {
            for contact in adapter.contacts() {
                self.contact(sink, &contact);
            }
        }

        if self.config.show_joints {
            for joint in adapter.joints() {
                self.joint(sink, &joint)?;
            }
        }
        Ok(())
    }

    /// Draw a velocity vector anchored at `position`.
    pub fn velocity<S: PrimitiveSink>(&self, sink: &mut S, position: Vec2, velocity: Vec2) {
        self.vector(
            sink,
            position,
            velocity,
            self.config.velocity_scale,
            self.config.colors.velocity,
        );
    }

    /// Draw an impulse vector anchored at `position`.
    pub fn impulse<S: PrimitiveSink>(&self, sink: &mut S, position: Vec2, impulse: Vec2) {
        self.vector(
            sink,
            position,
            impulse,
            self.config.impulse_scale,
            self.config.colors.impulse,
        );
    }

    /// Draw a force vector anchored at `position`.
    pub fn force<S: PrimitiveSink>(&self, sink: &mut S, position: Vec2, force: Vec2) {
        self.vector(
            sink,
            position,
            force,
            self.config.force_scale,
            self.config.colors.force,
        );
    }

    /// Draw an acceleration vector anchored at `position`.
    pub fn acceleration<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        position: Vec2,
        acceleration: Vec2,
    ) {
        self.vector(
            sink,
            position,
            acceleration,
            self.config.acceleration_scale,
            self.config.colors.acceleration,
        );
    }

    // Every vector overlay is one arrow with its tip at
    // position + vector * scale; only the scale and color differ.
    fn vector<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        position: Vec2,
        vector: Vec2,
        scale: Fixed,
        color: Color,
    ) {
        emit_arrow(
            self.camera,
            sink,
            position,
            position + vector * scale,
            color,
            self.config.contact_radius,
            self.config.line_width,
        );
    }

    fn collider<S: PrimitiveSink>(
        &self,
        sink: &mut S,
        body: &BodyInfo,
        collider: &ColliderInfo,
    ) -> Result<(), RenderError> {
        let body_rotation = Rotation::from_radians(body.rotation);
        let origin = body.position + body_rotation.apply(collider.offset);
        let rotation = Rotation::from_radians(body.rotation + collider.rotation);
        let color = self.body_color(body);
        let style = self.shape_style(color);

        match &collider.shape {
            ColliderShape::Circle { radius } => {
                let bounds = Rect::from_center_half_extents(origin, Vec2::splat(*radius));
                if !self.camera.is_visible(bounds) {
                    return Ok(());
                }
                sink.circle(
                    self.camera.world_to_screen(origin),
                    self.camera.scale_to_screen(*radius),
                    style,
                );
            }
            ColliderShape::Box { half_extents } => {
                let he = *half_extents;
                let corners = [
                    origin + rotation.apply(Vec2::new(-he.x, -he.y)),
                    origin + rotation.apply(Vec2::new(he.x, -he.y)),
                    origin + rotation.apply(Vec2::new(he.x, he.y)),
                    origin + rotation.apply(Vec2::new(-he.x, he.y)),
                ];
                self.world_polygon(sink, &corners, style);
            }
            ColliderShape::Polygon { vertices } => {
                if vertices.len() < 3 {
                    return Err(RenderError::DegenerateGeometry {
                        what: "physics polygon with fewer than 3 vertices",
                    });
                }
                let world: Vec<Vec2> = vertices
                    .iter()
                    .map(|&v| origin + rotation.apply(v))
                    .collect();
                self.world_polygon(sink, &world, style);
            }
            ColliderShape::Edge { start, end } => {
                let a = origin + rotation.apply(*start);
                let b = origin + rotation.apply(*end);
                if !self.camera.is_visible(Rect::from_min_max(a, b)) {
                    return Ok(());
                }
                sink.line(
                    self.camera.world_to_screen(a),
                    self.camera.world_to_screen(b),
                    Stroke::solid(color, self.config.line_width),
                );
            }
        }
        Ok(())
    }

    /// Cull a world-space polygon by its bounds, then submit it transformed.
    /// Callers guarantee at least one vertex.
    fn world_polygon<S: PrimitiveSink>(&self, sink: &mut S, world: &[Vec2], style: Style) {
        let mut min = world[0];
        let mut max = world[0];
        for &p in &world[1..] {
            min = min.min(p);
            max = max.max(p);
        }
        if !self.camera.is_visible(Rect { min, max }) {
            return;
        }
        let vertices: Vec<Vec2> = world
            .iter()
            .map(|&p| self.camera.world_to_screen(p))
            .collect();
        sink.polygon(vertices, style);
    }

    fn contact<S: PrimitiveSink>(&self, sink: &mut S, contact: &ContactPoint) {
        let radius = self.config.contact_radius;
        let bounds = Rect::from_center_half_extents(contact.position, Vec2::splat(radius));
        if !self.camera.is_visible(bounds) {
            return;
        }
        sink.circle(
            self.camera.world_to_screen(contact.position),
            self.camera.scale_to_screen(radius),
            Style::fill(self.config.colors.contact),
        );
        // A zero normal impulse degenerates the arrow to its shaft, which
        // emit_arrow already handles.
        let tip =
            contact.position + contact.normal * (contact.normal_impulse * self.config.impulse_scale);
        emit_arrow(
            self.camera,
            sink,
            contact.position,
            tip,
            self.config.colors.contact_normal,
            radius,
            self.config.line_width,
        );
    }

    fn joint<S: PrimitiveSink>(&self, sink: &mut S, joint: &JointInfo) -> Result<(), RenderError> {
        sink.line(
            self.camera.world_to_screen(joint.anchor_a),
            self.camera.world_to_screen(joint.anchor_b),
            Stroke::solid(self.config.colors.joint, self.config.line_width),
        );
        if let Some(limits) = joint.limits {
            emit_arc_fan(
                self.camera,
                sink,
                joint.anchor_a,
                limits.min,
                limits.max,
                self.config.contact_radius * from_int(4),
                Style::fill_and_stroke(
                    self.config.colors.joint_limits,
                    self.config.colors.joint,
                    self.config.line_width,
                ),
            )?;
        }
        Ok(())
    }

    fn body_color(&self, body: &BodyInfo) -> Color {
        if !body.awake {
            return self.config.colors.sleeping_body;
        }
        match body.kind {
            BodyKind::Static => self.config.colors.static_body,
            BodyKind::Kinematic => self.config.colors.kinematic_body,
            BodyKind::Dynamic => self.config.colors.dynamic_body,
        }
    }

    fn shape_style(&self, color: Color) -> Style {
        if self.config.filled {
            Style::fill(color)
        } else {
            Style::stroke(color, self.config.line_width)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use easel_math::consts;
    use easel_render::camera::{CameraState, Viewport};
    use easel_render::primitive::{FrameRecorder, PrimitiveCommand};

    fn identity_camera() -> Camera {
        Camera::new(
            CameraState::default(),
            Viewport {
                width: 800,
                height: 600,
            },
        )
        .unwrap()
    }

    fn resting_body(x: i64, y: i64, kind: BodyKind) -> BodyInfo {
        BodyInfo {
            position: Vec2::new(from_int(x), from_int(y)),
            rotation: consts::ZERO,
            velocity: Vec2::ZERO,
            kind,
            awake: true,
        }
    }

    #[test]
    fn sleeping_color_overrides_kind() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let draw = PhysicsDebugDraw::new(&config, &camera);

        let mut body = resting_body(0, 0, BodyKind::Dynamic);
        assert_eq!(draw.body_color(&body), config.colors.dynamic_body);
        body.awake = false;
        assert_eq!(draw.body_color(&body), config.colors.sleeping_body);

        body.kind = BodyKind::Static;
        assert_eq!(draw.body_color(&body), config.colors.sleeping_body);
        body.awake = true;
        assert_eq!(draw.body_color(&body), config.colors.static_body);
    }

    #[test]
    fn filled_toggle_switches_between_fill_and_outline() {
        let camera = identity_camera();
        let mut config = PhysicsDebugConfig::default();
        let outline = PhysicsDebugDraw::new(&config, &camera).shape_style(Color::RED);
        assert_eq!(outline.fill, None);
        assert!(outline.stroke.is_some());

        config.filled = true;
        let filled = PhysicsDebugDraw::new(&config, &camera).shape_style(Color::RED);
        assert_eq!(filled.fill, Some(Color::RED));
        assert_eq!(filled.stroke, None);
    }

    #[test]
    fn collider_offset_is_applied_in_body_space() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        // Unrotated body at (10, -4) with a circle offset by (2, 3).
        let body = resting_body(10, -4, BodyKind::Dynamic);
        let collider = ColliderInfo {
            shape: ColliderShape::Circle { radius: consts::ONE },
            offset: Vec2::new(from_int(2), from_int(3)),
            rotation: consts::ZERO,
        };
        PhysicsDebugDraw::new(&config, &camera)
            .collider(&mut frame, &body, &collider)
            .unwrap();

        assert_eq!(frame.len(), 1);
        let PrimitiveCommand::Circle { center, radius, .. } = frame.commands()[0].clone() else {
            panic!("expected circle");
        };
        assert_eq!(center, Vec2::new(from_int(412), from_int(299)));
        assert_eq!(radius, consts::ONE);
    }

    #[test]
    fn rotated_body_carries_its_collider_offset() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        // Quarter turn: offset (2, 0) lands near (0, 2) relative to the body.
        let mut body = resting_body(10, 0, BodyKind::Dynamic);
        body.rotation = consts::FRAC_PI_2;
        let collider = ColliderInfo {
            shape: ColliderShape::Circle { radius: consts::ONE },
            offset: Vec2::new(from_int(2), consts::ZERO),
            rotation: consts::ZERO,
        };
        PhysicsDebugDraw::new(&config, &camera)
            .collider(&mut frame, &body, &collider)
            .unwrap();

        let PrimitiveCommand::Circle { center, .. } = frame.commands()[0].clone() else {
            panic!("expected circle");
        };
        assert!((center.x.to_num::<f64>() - 410.0).abs() < 1e-2);
        assert!((center.y.to_num::<f64>() - 302.0).abs() < 1e-2);
    }

    #[test]
    fn box_collider_emits_four_corners_counter_clockwise() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        let body = resting_body(0, 0, BodyKind::Static);
        let collider = ColliderInfo {
            shape: ColliderShape::Box {
                half_extents: Vec2::new(from_int(2), consts::ONE),
            },
            offset: Vec2::ZERO,
            rotation: consts::ZERO,
        };
        PhysicsDebugDraw::new(&config, &camera)
            .collider(&mut frame, &body, &collider)
            .unwrap();

        let PrimitiveCommand::Polygon { vertices, .. } = frame.commands()[0].clone() else {
            panic!("expected box polygon");
        };
        assert_eq!(
            vertices,
            vec![
                Vec2::new(from_int(398), from_int(299)),
                Vec2::new(from_int(402), from_int(299)),
                Vec2::new(from_int(402), from_int(301)),
                Vec2::new(from_int(398), from_int(301)),
            ]
        );
    }

    #[test]
    fn degenerate_polygon_collider_is_an_error() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        let body = resting_body(0, 0, BodyKind::Dynamic);
        let collider = ColliderInfo {
            shape: ColliderShape::Polygon {
                vertices: vec![Vec2::ZERO, Vec2::splat(consts::ONE)],
            },
            offset: Vec2::ZERO,
            rotation: consts::ZERO,
        };
        let result = PhysicsDebugDraw::new(&config, &camera).collider(&mut frame, &body, &collider);
        assert!(matches!(result, Err(RenderError::DegenerateGeometry { .. })));
        assert!(frame.is_empty());
    }

    #[test]
    fn edge_collider_draws_a_line() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        let body = resting_body(0, 0, BodyKind::Static);
        let collider = ColliderInfo {
            shape: ColliderShape::Edge {
                start: Vec2::new(from_int(-5), consts::ZERO),
                end: Vec2::new(from_int(5), consts::ZERO),
            },
            offset: Vec2::ZERO,
            rotation: consts::ZERO,
        };
        PhysicsDebugDraw::new(&config, &camera)
            .collider(&mut frame, &body, &collider)
            .unwrap();

        assert_eq!(frame.len(), 1);
        let PrimitiveCommand::Line { start, end, stroke } = frame.commands()[0].clone() else {
            panic!("expected edge line");
        };
        assert_eq!(start, Vec2::new(from_int(395), from_int(300)));
        assert_eq!(end, Vec2::new(from_int(405), from_int(300)));
        assert_eq!(stroke.color, config.colors.static_body);
    }

    #[test]
    fn offscreen_collider_is_culled() {
        let camera = identity_camera();
        let config = PhysicsDebugConfig::default();
        let mut frame = FrameRecorder::new();

        let body = resting_body(100_000, 0, BodyKind::Dynamic);
        let collider = ColliderInfo {
            shape: ColliderShape::Circle { radius: consts::ONE },
            offset: Vec2::ZERO,
            rotation: consts::ZERO,
        };
        PhysicsDebugDraw::new(&config, &camera)
            .collider(&mut frame, &body, &collider)
            .unwrap();
        assert!(frame.is_empty());
    }
}
