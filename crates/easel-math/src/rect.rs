//! Axis-aligned rectangles with fixed-point corners.

use crate::vec2::Vec2;
use crate::{consts, Fixed};

/// An axis-aligned rectangle stored as two corners.
///
/// Invariant: `min.x <= max.x` and `min.y <= max.y`. The constructors
/// normalize swapped corners rather than erroring, so a `Rect` built through
/// them always satisfies the invariant.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rect {
    /// Corner with the smallest coordinates.
    pub min: Vec2,
    /// Corner with the largest coordinates.
    pub max: Vec2,
}

impl Rect {
    /// Rectangle spanning two corners, given in any order.
    pub fn from_min_max(a: Vec2, b: Vec2) -> Rect {
        Rect {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Rectangle centered on `center` reaching `half_extents` out on each
    /// axis. Negative extents are normalized.
    pub fn from_center_half_extents(center: Vec2, half_extents: Vec2) -> Rect {
        Rect::from_min_max(center - half_extents, center + half_extents)
    }

    /// Bounding box of a set of points. `None` when the iterator is empty.
    pub fn from_points<I: IntoIterator<Item = Vec2>>(points: I) -> Option<Rect> {
        let mut iter = points.into_iter();
        let first = iter.next()?;
        let mut min = first;
        let mut max = first;
        for p in iter {
            min = min.min(p);
            max = max.max(p);
        }
        Some(Rect { min, max })
    }

    /// Center point.
    pub fn center(self) -> Vec2 {
        (self.min + self.max) / consts::TWO
    }

    /// Extent along each axis.
    pub fn size(self) -> Vec2 {
        self.max - self.min
    }

    /// Extent along x.
    pub fn width(self) -> Fixed {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(self) -> Fixed {
        self.max.y - self.min.y
    }

    /// Whether `point` lies inside, edges included.
    pub fn contains(self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Whether two rectangles overlap, edges included.
    ///
    /// The closed-interval test makes visibility culling conservative: a
    /// shape exactly on the view edge still counts as visible.
    pub fn intersects(self, other: Rect) -> bool {
        self.min.x <= other.max.x
            && other.min.x <= self.max.x
            && self.min.y <= other.max.y
            && other.min.y <= self.max.y
    }

    /// This rectangle shifted by `offset`.
    pub fn translated(self, offset: Vec2) -> Rect {
        Rect {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// This rectangle grown by `margin` on every side. Negative margins
    /// shrink and may produce an empty (inverted) rectangle.
    pub fn expanded(self, margin: Fixed) -> Rect {
        Rect {
            min: self.min - Vec2::splat(margin),
            max: self.max + Vec2::splat(margin),
        }
    }

    /// The four corners, counter-clockwise from `min`.
    pub fn corners(self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
