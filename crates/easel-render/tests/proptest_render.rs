//! Property tests for the render core.
//!
//! These tests use `proptest` to verify the camera round trip, resolver
//! totality, and digest sensitivity under random fixed-point inputs.

use easel_math::prelude::*;
use easel_render::prelude::*;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn fixed_in(range: i64) -> impl Strategy<Value = Fixed> {
    let bound = range << 16;
    (-bound..=bound).prop_map(Fixed::from_bits)
}

fn fixed_positive(range: i64) -> impl Strategy<Value = Fixed> {
    let bound = range << 16;
    (1..=bound).prop_map(Fixed::from_bits)
}

/// Zooms in `[1/8, 8]`, keeping both transform directions well-conditioned.
fn zoom_strategy() -> impl Strategy<Value = Fixed> {
    ((1i64 << 13)..=(8i64 << 16)).prop_map(Fixed::from_bits)
}

fn viewport_strategy() -> impl Strategy<Value = Viewport> {
    (64u32..=4096, 64u32..=4096).prop_map(|(width, height)| Viewport { width, height })
}

/// Animations with 1..12 frames of duration `[0, 5]` and positive speed.
fn animation_strategy() -> impl Strategy<Value = SpriteAnimation> {
    (
        prop::collection::vec((0i64..=(5 << 16)).prop_map(Fixed::from_bits), 1..12),
        proptest::bool::ANY,
        fixed_positive(4),
    )
        .prop_map(|(durations, looping, playback_speed)| SpriteAnimation {
            frames: durations
                .into_iter()
                .map(|duration| AnimationFrame {
                    texture: TextureRef(0),
                    source: Rect::from_min_max(Vec2::ZERO, Vec2::splat(consts::ONE)),
                    duration,
                })
                .collect(),
            looping,
            playback_speed,
        })
}

fn scaled_total(animation: &SpriteAnimation) -> Fixed {
    animation
        .frames
        .iter()
        .fold(consts::ZERO, |acc, frame| {
            acc + frame.duration / animation.playback_speed
        })
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10_000))]

    /// The unrotated, unit-zoom path is exact to the bit: every step is an
    /// addition, a subtraction, or a multiplication by one.
    #[test]
    fn unrotated_unit_zoom_round_trip_is_exact(
        px in fixed_in(10_000), py in fixed_in(10_000),
        wx in fixed_in(10_000), wy in fixed_in(10_000),
        viewport in viewport_strategy(),
    ) {
        let state = CameraState {
            position: Vec2::new(px, py),
            ..Default::default()
        };
        let camera = Camera::new(state, viewport).unwrap();
        let world = Vec2::new(wx, wy);
        prop_assert_eq!(camera.screen_to_world(camera.world_to_screen(world)), world);
    }

    #[test]
    fn camera_round_trip_is_close(
        px in fixed_in(200), py in fixed_in(200),
        zoom in zoom_strategy(),
        rotation in fixed_in(10),
        wx in fixed_in(200), wy in fixed_in(200),
        viewport in viewport_strategy(),
    ) {
        let state = CameraState {
            position: Vec2::new(px, py),
            zoom,
            rotation,
            bounds: None,
            follow: None,
        };
        let camera = Camera::new(state, viewport).unwrap();
        let world = Vec2::new(wx, wy);
        let back = camera.screen_to_world(camera.world_to_screen(world));
        prop_assert!((back.x - wx).abs() <= consts::HALF);
        prop_assert!((back.y - wy).abs() <= consts::HALF);
    }

    /// Every valid animation resolves to an in-range index at any clock.
    #[test]
    fn resolver_is_total_for_valid_animations(
        animation in animation_strategy(),
        time in fixed_in(100),
    ) {
        let index = animation.resolve_index(time);
        prop_assert!(index.is_ok());
        prop_assert!(index.unwrap() < animation.frames.len());
    }

    /// Looping resolution is exactly periodic in the scaled total duration.
    #[test]
    fn looping_resolution_is_periodic(
        animation in animation_strategy(),
        time in fixed_in(50),
    ) {
        let mut animation = animation;
        animation.looping = true;
        let total = scaled_total(&animation);
        prop_assume!(total > consts::ZERO);
        prop_assert_eq!(
            animation.resolve_index(time).unwrap(),
            animation.resolve_index(time + total).unwrap()
        );
    }

    /// A one-ULP nudge of any coordinate always changes the digest.
    #[test]
    fn digest_detects_single_ulp_nudges(
        x in fixed_in(1_000), y in fixed_in(1_000),
        nudge in prop_oneof![Just(1i64), Just(-1i64)],
    ) {
        let command = |sx: Fixed| PrimitiveCommand::Line {
            start: Vec2::new(sx, y),
            end: Vec2::new(y, x),
            stroke: Stroke::solid(Color::WHITE, consts::ONE),
        };
        let base = vec![command(x)];
        let nudged = vec![command(Fixed::from_bits(x.to_bits() + nudge))];
        prop_assert_ne!(frame_digest(&base), frame_digest(&nudged));
    }

    /// Two recorders fed the same calls fingerprint identically.
    #[test]
    fn independently_recorded_frames_agree(
        cx in fixed_in(500), cy in fixed_in(500),
        radius in fixed_positive(100),
    ) {
        let record = || {
            let mut recorder = FrameRecorder::new();
            recorder.circle(Vec2::new(cx, cy), radius, Style::fill(Color::RED));
            recorder.line(
                Vec2::ZERO,
                Vec2::new(cx, cy),
                Stroke::solid(Color::BLACK, consts::ONE),
            );
            recorder.digest()
        };
        prop_assert_eq!(record(), record());
    }

    /// `draw_sprite` emits exactly when the camera can see the dest rect.
    #[test]
    fn draw_sprite_emits_iff_visible(
        dx in fixed_in(2_000), dy in fixed_in(2_000),
        half in fixed_positive(50),
        time in fixed_in(20),
    ) {
        let camera = Camera::new(
            CameraState::default(),
            Viewport { width: 800, height: 600 },
        )
        .unwrap();
        let mut animation = SpriteAnimation::new(vec![
            AnimationFrame {
                texture: TextureRef(2),
                source: Rect::from_min_max(Vec2::ZERO, Vec2::splat(from_int(8))),
                duration: consts::ONE,
            },
            AnimationFrame {
                texture: TextureRef(2),
                source: Rect::from_min_max(Vec2::ZERO, Vec2::splat(from_int(8))),
                duration: consts::ONE,
            },
        ]);
        animation.looping = true;

        let dest = Rect::from_center_half_extents(Vec2::new(dx, dy), Vec2::splat(half));
        let mut recorder = FrameRecorder::new();
        let drawn =
            draw_sprite(&camera, &mut recorder, &animation, time, dest, Color::WHITE).unwrap();

        prop_assert_eq!(drawn, camera.is_visible(dest));
        prop_assert_eq!(recorder.len(), usize::from(drawn));
    }
}
