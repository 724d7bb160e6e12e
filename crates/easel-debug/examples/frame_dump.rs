//! Render one debug overlay frame headlessly and dump it as JSON.
//!
//! Run with:
//!   cargo run --example frame_dump -p easel-debug
//!
//! Prints the recorded primitive stream and its digest. Run it on two
//! machines and diff the output: every line should match.

use easel_debug::prelude::*;
use easel_math::prelude::*;
use easel_render::prelude::*;

// ---------------------------------------------------------------------------
// A tiny scripted physics scene
// ---------------------------------------------------------------------------

struct DemoWorld;

impl PhysicsAdapter for DemoWorld {
    fn body_handles(&self) -> Vec<BodyHandle> {
        vec![BodyHandle(1), BodyHandle(2)]
    }

    fn body_info(&self, handle: BodyHandle) -> Option<BodyInfo> {
        match handle {
            BodyHandle(1) => Some(BodyInfo {
                position: Vec2::new(consts::ZERO, from_int(-3)),
                rotation: consts::ZERO,
                velocity: Vec2::ZERO,
                kind: BodyKind::Static,
                awake: true,
            }),
            BodyHandle(2) => Some(BodyInfo {
                position: Vec2::new(consts::ZERO, from_int(-1)),
                rotation: consts::ZERO,
                velocity: Vec2::new(consts::TWO, consts::ZERO),
                kind: BodyKind::Dynamic,
                awake: true,
            }),
            _ => None,
        }
    }

    fn colliders(&self, handle: BodyHandle) -> Vec<ColliderInfo> {
        match handle {
            BodyHandle(1) => vec![ColliderInfo {
                shape: ColliderShape::Box {
                    half_extents: Vec2::new(from_int(8), consts::ONE),
                },
                offset: Vec2::ZERO,
                rotation: consts::ZERO,
            }],
            BodyHandle(2) => vec![ColliderInfo {
                shape: ColliderShape::Circle { radius: consts::ONE },
                offset: Vec2::ZERO,
                rotation: consts::ZERO,
            }],
            _ => Vec::new(),
        }
    }

    fn joints(&self) -> Vec<JointInfo> {
        Vec::new()
    }

    fn contacts(&self) -> Vec<ContactPoint> {
        vec![ContactPoint {
            position: Vec2::new(consts::ZERO, from_int(-2)),
            normal: Vec2::new(consts::ZERO, consts::ONE),
            normal_impulse: consts::HALF,
            tangent_impulse: consts::ZERO,
            separation: consts::ZERO,
        }]
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let camera = Camera::new(
        CameraState {
            position: Vec2::new(consts::ZERO, from_int(-1)),
            ..CameraState::default()
        },
        Viewport {
            width: 640,
            height: 360,
        },
    )?;

    // Tweak the stock overlay the way a console command would: as a sparse
    // JSON patch merged onto the defaults.
    let patch: DebugConfigPatch = serde_json::from_str(r#"{ "major_line_interval": 4 }"#)?;
    let config = DebugConfig::default().apply_patch(&patch)?;
    let physics_config = PhysicsDebugConfig::default();

    let mut frame = FrameRecorder::new();
    DebugDraw::new(&config, &camera).render_overlay(&mut frame)?;
    let overlay_commands = frame.len();
    PhysicsDebugDraw::new(&physics_config, &camera).render(&mut frame, &DemoWorld)?;

    println!("overlay commands: {overlay_commands}");
    println!("physics commands: {}", frame.len() - overlay_commands);
    println!("frame digest:     {}", frame.digest());
    println!("{}", serde_json::to_string_pretty(frame.commands())?);
    Ok(())
}
