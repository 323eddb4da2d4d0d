//! Planar coordinates and the toroidal field agents roam over.
//!
//! The field is larger than the viewport ([`FIELD_SCALE`] times each side) so
//! agents can slip off-screen for a while before wrapping back in.  All
//! coordinates are `f64`.

use crate::{CoreError, CoreResult, RandomSource};

/// Ratio of field size to viewport size along each axis.
pub const FIELD_SCALE: f64 = 1.2;

// ── Point ─────────────────────────────────────────────────────────────────────

/// A position in field coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line offset from `self` to `other` (no wrap-around shortcut).
    #[inline]
    pub fn delta_to(self, other: Point) -> (f64, f64) {
        (other.x - self.x, other.y - self.y)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(self, other: Point) -> f64 {
        let (dx, dy) = self.delta_to(other);
        dx.hypot(dy)
    }

    /// Bearing from `self` to `other` in radians, `atan2(dy, dx)`.
    #[inline]
    pub fn bearing_to(self, other: Point) -> f64 {
        let (dx, dy) = self.delta_to(other);
        dy.atan2(dx)
    }

    /// Move `distance` units along `heading`.
    #[inline]
    pub fn advanced(self, heading: f64, distance: f64) -> Point {
        Point::new(
            self.x + heading.cos() * distance,
            self.y + heading.sin() * distance,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Field ─────────────────────────────────────────────────────────────────────

/// The toroidal plane `[0, width) × [0, height)`.
///
/// A `Field` can only be constructed with finite, strictly positive sides, so
/// every `wrap` is well defined.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Field {
    width:  f64,
    height: f64,
}

impl Field {
    /// Build a field with explicit dimensions.
    pub fn new(width: f64, height: f64) -> CoreResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(CoreError::InvalidField { width, height });
        }
        Ok(Self { width, height })
    }

    /// Build the field for a viewport: each side scaled by [`FIELD_SCALE`].
    pub fn from_viewport(viewport_width: f64, viewport_height: f64) -> CoreResult<Self> {
        if !(viewport_width.is_finite() && viewport_height.is_finite())
            || viewport_width <= 0.0
            || viewport_height <= 0.0
        {
            return Err(CoreError::InvalidViewport {
                width:  viewport_width,
                height: viewport_height,
            });
        }
        Self::new(viewport_width * FIELD_SCALE, viewport_height * FIELD_SCALE)
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn center(&self) -> Point {
        Point::new(self.width * 0.5, self.height * 0.5)
    }

    /// `true` if `p` lies inside `[0, width) × [0, height)`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        (0.0..self.width).contains(&p.x) && (0.0..self.height).contains(&p.y)
    }

    /// `true` if `p` is within `margin` units of any edge.
    #[inline]
    pub fn near_edge(&self, p: Point, margin: f64) -> bool {
        p.x < margin || p.x > self.width - margin || p.y < margin || p.y > self.height - margin
    }

    /// Wrap `p` onto the torus.  Works for any finite overshoot, including
    /// several field widths in one step.
    #[inline]
    pub fn wrap(&self, p: Point) -> Point {
        Point::new(wrap_coord(p.x, self.width), wrap_coord(p.y, self.height))
    }

    /// Uniformly random point in the field.
    pub fn random_point<R: RandomSource + ?Sized>(&self, rng: &mut R) -> Point {
        // `unit() * width` can round up to `width` itself.
        self.wrap(Point::new(rng.unit() * self.width, rng.unit() * self.height))
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

/// `((value mod extent) + extent) mod extent`, the double-modulo wrap.
///
/// The inner remainder lands in `(-extent, extent)`; shifting by `extent` and
/// taking the remainder again gives `[0, extent)`.
#[inline]
pub fn wrap_coord(value: f64, extent: f64) -> f64 {
    ((value % extent) + extent) % extent
}
