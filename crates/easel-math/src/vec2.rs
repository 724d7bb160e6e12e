//! 2D vectors over the fixed-point scalar.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::rotation::Rotation;
use crate::{consts, isqrt, Fixed};

/// A 2D vector (or point) with fixed-point components.
///
/// A plain value type: every operation returns a new vector, and arithmetic
/// follows the scalar's semantics (exact add/sub, deterministic truncating
/// mul/div). Plain multiplications like [`dot`](Vec2::dot) and
/// [`length_squared`](Vec2::length_squared) stay exact for component
/// magnitudes up to about `8e6`; [`length`](Vec2::length) works at full
/// precision for any representable vector.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Vec2 {
    /// Horizontal component.
    pub x: Fixed,
    /// Vertical component.
    pub y: Fixed,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Vec2 = Vec2 {
        x: consts::ZERO,
        y: consts::ZERO,
    };

    /// Construct from components.
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Both components set to `v`.
    pub const fn splat(v: Fixed) -> Self {
        Self { x: v, y: v }
    }

    /// Dot product.
    pub fn dot(self, other: Vec2) -> Fixed {
        self.x * other.x + self.y * other.y
    }

    /// The counter-clockwise perpendicular `(-y, x)`.
    pub fn perp(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Squared Euclidean length.
    pub fn length_squared(self) -> Fixed {
        self.dot(self)
    }

    /// Euclidean length.
    ///
    /// Computed from the raw component bits at full precision, so it neither
    /// overflows nor loses range for any representable vector; results beyond
    /// the scalar's range saturate to [`Fixed::MAX`].
    pub fn length(self) -> Fixed {
        let x = self.x.to_bits() as i128;
        let y = self.y.to_bits() as i128;
        let sum = (x * x) as u128 + (y * y) as u128;
        let root = isqrt(sum);
        if root > i64::MAX as u128 {
            Fixed::MAX
        } else {
            Fixed::from_bits(root as i64)
        }
    }

    /// Distance to another point.
    pub fn distance(self, other: Vec2) -> Fixed {
        (self - other).length()
    }

    /// Unit vector in the same direction, or `None` for the zero vector.
    ///
    /// The `None` case is how callers detect degenerate directions
    /// (zero-length arrows, zero contact normals) without ever dividing by
    /// zero.
    pub fn normalized(self) -> Option<Vec2> {
        let len = self.length();
        if len == consts::ZERO {
            None
        } else {
            Some(Vec2::new(self.x / len, self.y / len))
        }
    }

    /// Linear interpolation: `self` at `t = 0`, `other` at `t = 1`.
    pub fn lerp(self, other: Vec2, t: Fixed) -> Vec2 {
        self + (other - self) * t
    }

    /// This vector rotated about the origin.
    pub fn rotated(self, rotation: Rotation) -> Vec2 {
        rotation.apply(self)
    }

    /// Component-wise minimum.
    pub fn min(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Component-wise maximum.
    pub fn max(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x.max(other.x), self.y.max(other.y))
    }
}

// ---------------------------------------------------------------------------
// Operators
// ---------------------------------------------------------------------------

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl Mul<Fixed> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: Fixed) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl MulAssign<Fixed> for Vec2 {
    fn mul_assign(&mut self, rhs: Fixed) {
        *self = *self * rhs;
    }
}

impl Div<Fixed> for Vec2 {
    type Output = Vec2;

    fn div(self, rhs: Fixed) -> Vec2 {
        Vec2::new(self.x / rhs, self.y / rhs)
    }
}

impl DivAssign<Fixed> for Vec2 {
    fn div_assign(&mut self, rhs: Fixed) {
        *self = *self / rhs;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::from_int;

    fn v(x: f64, y: f64) -> Vec2 {
        Vec2::new(Fixed::from_num(x), Fixed::from_num(y))
    }

    #[test]
    fn operators_behave_componentwise() {
        let a = v(1.5, -2.0);
        let b = v(0.5, 3.0);
        assert_eq!(a + b, v(2.0, 1.0));
        assert_eq!(a - b, v(1.0, -5.0));
        assert_eq!(-a, v(-1.5, 2.0));
        assert_eq!(a * from_int(2), v(3.0, -4.0));
        assert_eq!(a / from_int(2), v(0.75, -1.0));

        let mut c = a;
        c += b;
        assert_eq!(c, v(2.0, 1.0));
        c -= b;
        assert_eq!(c, a);
        c *= from_int(4);
        assert_eq!(c, v(6.0, -8.0));
        c /= from_int(4);
        assert_eq!(c, a);
    }

    #[test]
    fn dot_and_perp_are_orthogonal() {
        let a = v(3.25, -1.5);
        assert_eq!(a.dot(a.perp()), consts::ZERO);
        assert_eq!(v(1.0, 0.0).perp(), v(0.0, 1.0));
        assert_eq!(v(0.0, 1.0).perp(), v(-1.0, 0.0));
    }

    #[test]
    fn length_is_exact_for_pythagorean_triples() {
        assert_eq!(v(3.0, 4.0).length(), from_int(5));
        assert_eq!(v(-5.0, 12.0).length(), from_int(13));
        assert_eq!(v(8.0, -15.0).length(), from_int(17));
        assert_eq!(Vec2::ZERO.length(), consts::ZERO);
    }

    #[test]
    fn length_does_not_overflow_for_extreme_vectors() {
        let extreme = Vec2::splat(Fixed::MAX);
        assert_eq!(extreme.length(), Fixed::MAX);

        let big = Vec2::new(Fixed::from_num(1u64 << 40), consts::ZERO);
        assert_eq!(big.length(), Fixed::from_num(1u64 << 40));
    }

    #[test]
    fn normalized_zero_is_none() {
        assert_eq!(Vec2::ZERO.normalized(), None);
    }

    #[test]
    fn normalized_has_unit_length() {
        for vector in [v(3.0, 4.0), v(-7.5, 0.25), v(0.0, -2.0), v(1e5, -1e5)] {
            let unit = vector.normalized().unwrap();
            let len = unit.length().to_num::<f64>();
            assert!((len - 1.0).abs() < 1e-3, "|{unit:?}| = {len}");
        }
    }

    #[test]
    fn lerp_endpoints_and_midpoint() {
        let a = v(0.0, 10.0);
        let b = v(4.0, -10.0);
        assert_eq!(a.lerp(b, consts::ZERO), a);
        assert_eq!(a.lerp(b, consts::ONE), b);
        assert_eq!(a.lerp(b, consts::HALF), v(2.0, 0.0));
    }

    #[test]
    fn distance_is_symmetric() {
        let a = v(1.0, 2.0);
        let b = v(4.0, 6.0);
        assert_eq!(a.distance(b), from_int(5));
        assert_eq!(b.distance(a), from_int(5));
    }

    #[test]
    fn min_max_componentwise() {
        let a = v(1.0, 5.0);
        let b = v(3.0, -2.0);
        assert_eq!(a.min(b), v(1.0, -2.0));
        assert_eq!(a.max(b), v(3.0, 5.0));
    }

    #[test]
    fn serde_round_trip() {
        let original = v(-12.625, 7.25);
        let json = serde_json::to_string(&original).unwrap();
        let back: Vec2 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, original);
    }
}
