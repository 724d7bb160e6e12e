//! Precomputed 2D rotation.
//!
//! A [`Rotation`] stores the cosine and sine of an angle so that repeated
//! [`Rotation::apply`] calls cost two multiplies per axis and never re-run
//! the trig polynomials. Build one per camera update, apply it per point.

use crate::vec2::Vec2;
use crate::{consts, Fixed};

/// Cached cosine/sine pair for rotating points about the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rotation {
    /// Cosine of the angle.
    pub cos: Fixed,
    /// Sine of the angle.
    pub sin: Fixed,
}

impl Rotation {
    /// The zero-angle rotation. Applying it returns the input bit-for-bit.
    pub const IDENTITY: Rotation = Rotation {
        cos: consts::ONE,
        sin: consts::ZERO,
    };

    /// Rotation by `angle` radians, counter-clockwise.
    pub fn from_radians(angle: Fixed) -> Rotation {
        Rotation {
            cos: crate::cos(angle),
            sin: crate::sin(angle),
        }
    }

    /// Rotation by the negated angle. Composing with the original undoes it
    /// up to the precision of the cached trig values.
    pub fn inverse(self) -> Rotation {
        Rotation {
            cos: self.cos,
            sin: -self.sin,
        }
    }

    /// Rotation by the sum of the two angles.
    pub fn compose(self, other: Rotation) -> Rotation {
        Rotation {
            cos: self.cos * other.cos - self.sin * other.sin,
            sin: self.sin * other.cos + self.cos * other.sin,
        }
    }

    /// Rotate `v` about the origin.
    pub fn apply(self, v: Vec2) -> Vec2 {
        Vec2::new(
            v.x * self.cos - v.y * self.sin,
            v.x * self.sin + v.y * self.cos,
        )
    }
}

impl Default for Rotation {
    /// Defaults to [`Rotation::IDENTITY`].
    fn default() -> Self {
        Rotation::IDENTITY
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
