//! easel-math -- Deterministic fixed-point math for replay-safe rendering.
//!
//! Every quantity in the rendering pipeline is an `I48F16` fixed-point number
//! (48 integer bits, 16 fractional bits). Addition and subtraction are exact;
//! multiplication and division drop excess fractional bits deterministically.
//! Because no float ever enters a positional computation, identical inputs
//! produce bit-identical geometry on every platform, which is what makes
//! frame digests comparable across backends.
//!
//! Trigonometry and square roots are implemented here in pure fixed-point
//! arithmetic rather than delegated to `libm`, so their results are part of
//! the same determinism guarantee.
//!
//! # Quick Start
//!
//! ```
//! use easel_math::prelude::*;
//!
//! let p = Vec2::new(Fixed::from_num(3), Fixed::from_num(4));
//! assert_eq!(p.length(), Fixed::from_num(5));
//!
//! let quarter_turn = Rotation::from_radians(consts::FRAC_PI_2);
//! let q = quarter_turn.apply(Vec2::new(consts::ONE, consts::ZERO));
//! assert!(q.y > Fixed::from_num(0.99));
//! ```

#![deny(unsafe_code)]

pub mod rect;
pub mod rotation;
pub mod vec2;

/// The fixed-point scalar used throughout: 48 integer bits, 16 fractional.
pub type Fixed = fixed::types::I48F16;

/// A [`Fixed`] from an integer, usable in `const` context.
///
/// Magnitudes must fit the 48-bit integer range; larger values overflow the
/// shift.
pub const fn from_int(int: i64) -> Fixed {
    Fixed::from_bits(int << 16)
}

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Named constants for the [`Fixed`] scalar.
///
/// Built from raw bit patterns so they are usable in `const` context and
/// identical on every platform.
pub mod consts {
    use super::Fixed;

    /// 0.
    pub const ZERO: Fixed = Fixed::from_bits(0);
    /// 1.
    pub const ONE: Fixed = Fixed::from_bits(1 << 16);
    /// 0.5.
    pub const HALF: Fixed = Fixed::from_bits(1 << 15);
    /// 2.
    pub const TWO: Fixed = Fixed::from_bits(2 << 16);
    /// The closest representable value to pi.
    pub const PI: Fixed = Fixed::from_bits(205_887);
    /// Exactly `2 * PI`. Angle wrapping relies on this doubling being exact.
    pub const TAU: Fixed = Fixed::from_bits(411_774);
    /// The closest representable value to pi / 2.
    pub const FRAC_PI_2: Fixed = Fixed::from_bits(102_944);
}

// ---------------------------------------------------------------------------
// Trigonometry
// ---------------------------------------------------------------------------

/// Sine of an angle in radians, computed entirely in fixed-point.
///
/// The angle is wrapped into `(-PI, PI]`, folded into the first quadrant
/// pair, and evaluated as an odd Taylor polynomial through the `x^7` term.
/// Absolute error stays below `2e-4` over the whole input range, and the
/// result is bit-identical on every platform.
pub fn sin(angle: Fixed) -> Fixed {
    let x = reduce(angle);
    // sin(PI - x) == sin(x) folds the outer quadrants inward.
    let x = if x > consts::FRAC_PI_2 {
        consts::PI - x
    } else if x < -consts::FRAC_PI_2 {
        -consts::PI - x
    } else {
        x
    };
    sin_poly(x)
}

/// Cosine of an angle in radians, computed entirely in fixed-point.
///
/// Same reduction scheme and error bound as [`sin`].
pub fn cos(angle: Fixed) -> Fixed {
    let x = reduce(angle).abs();
    // cos(x) == -cos(PI - x) beyond the first quadrant.
    if x > consts::FRAC_PI_2 {
        -cos_poly(consts::PI - x)
    } else {
        cos_poly(x)
    }
}

/// Wrap an angle into `(-PI, PI]`.
fn reduce(angle: Fixed) -> Fixed {
    let wrapped = wrap(angle, consts::TAU);
    if wrapped > consts::PI {
        wrapped - consts::TAU
    } else {
        wrapped
    }
}

/// Taylor sine on `[-PI/2, PI/2]`, Horner form:
/// `x (1 - x2/6 (1 - x2/20 (1 - x2/42)))`.
fn sin_poly(x: Fixed) -> Fixed {
    let x2 = x * x;
    let mut t = consts::ONE - x2 / from_int(42);
    t = consts::ONE - (x2 / from_int(20)) * t;
    t = consts::ONE - (x2 / from_int(6)) * t;
    x * t
}

/// Taylor cosine on `[0, PI/2]`, Horner form:
/// `1 - x2/2 (1 - x2/12 (1 - x2/30 (1 - x2/56)))`.
fn cos_poly(x: Fixed) -> Fixed {
    let x2 = x * x;
    let mut t = consts::ONE - x2 / from_int(56);
    t = consts::ONE - (x2 / from_int(30)) * t;
    t = consts::ONE - (x2 / from_int(12)) * t;
    consts::ONE - (x2 / from_int(2)) * t
}

// ---------------------------------------------------------------------------
// Square root
// ---------------------------------------------------------------------------

/// Square root in fixed-point, exact for perfect squares and monotone.
///
/// Computed as an integer Newton iteration over the raw bits, so the result
/// is deterministic everywhere. Returns [`consts::ZERO`] for negative input;
/// callers that care about the sign check it themselves.
pub fn sqrt(value: Fixed) -> Fixed {
    if value <= consts::ZERO {
        return consts::ZERO;
    }
    // (r / 2^16)^2 == v / 2^16  <=>  r == isqrt(bits << 16).
    let shifted = (value.to_bits() as u128) << 16;
    Fixed::from_bits(isqrt(shifted) as i64)
}

/// Floor of the integer square root, by Newton's method.
pub(crate) fn isqrt(n: u128) -> u128 {
    if n < 2 {
        return n;
    }
    // Start from a power of two at least sqrt(n); the iteration then
    // decreases monotonically to the floor.
    let bit_length = 128 - n.leading_zeros();
    let mut x = 1u128 << ((bit_length + 1) / 2);
    loop {
        let next = (x + n / x) / 2;
        if next >= x {
            return x;
        }
        x = next;
    }
}

// ---------------------------------------------------------------------------
// Scalar helpers
// ---------------------------------------------------------------------------

/// Largest multiple of `step` at or below `value`, i.e.
/// `floor(value / step) * step` in fixed arithmetic.
///
/// `step` must be positive. Grid snapping uses this to place the first
/// candidate line at or below the view edge.
pub fn floor_to_multiple(value: Fixed, step: Fixed) -> Fixed {
    (value / step).floor() * step
}

/// Floor-division modulo: the unique `r` in `[0, period)` with
/// `value - r` an integer multiple of `period`.
///
/// Unlike the `%` operator the result is never negative, which is what makes
/// looping animation time well-defined for negative timestamps. `period`
/// must be positive. Exact: remainders lose no bits.
pub fn wrap(value: Fixed, period: Fixed) -> Fixed {
    let r = value % period;
    if r < consts::ZERO {
        r + period
    } else {
        r
    }
}

// ---------------------------------------------------------------------------
// Prelude
// ---------------------------------------------------------------------------

/// Convenience re-exports for common usage.
pub mod prelude {
    pub use crate::consts;
    pub use crate::rect::Rect;
    pub use crate::rotation::Rotation;
    pub use crate::vec2::Vec2;
    pub use crate::{cos, floor_to_multiple, from_int, sin, sqrt, wrap, Fixed};
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
