//! Geometry primitives
//!
//! Plain value types used by the rotation sampler: an integer pixel
//! [`Coordinate`] and a [`PolarVector`] (magnitude and direction in radians).
//! Directions follow image coordinates, so with `y` growing downward a
//! positive change in direction turns clockwise on screen.

use std::f64::consts::PI;

/// Integer Cartesian coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    x: i32,
    y: i32,
}

impl Coordinate {
    /// Create a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The x-coordinate.
    #[inline]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// The y-coordinate.
    #[inline]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Offset `(dx, dy)` from `origin` to this coordinate.
    #[inline]
    pub fn offset_from(&self, origin: Coordinate) -> (f64, f64) {
        (
            f64::from(self.x - origin.x),
            f64::from(self.y - origin.y),
        )
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Vector in polar form
///
/// The magnitude is never negative: a negative magnitude passed to
/// [`PolarVector::new`] is folded into the direction.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarVector {
    magnitude: f64,
    direction: f64,
}

impl PolarVector {
    /// Create a vector from magnitude and direction (radians).
    pub fn new(magnitude: f64, direction: f64) -> Self {
        if magnitude < 0.0 {
            Self {
                magnitude: -magnitude,
                direction: direction + PI,
            }
        } else {
            Self {
                magnitude,
                direction,
            }
        }
    }

    /// Convert a Cartesian offset to polar form.
    pub fn from_offset(dx: f64, dy: f64) -> Self {
        Self {
            magnitude: dx.hypot(dy),
            direction: dy.atan2(dx),
        }
    }

    /// Length of the vector.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// Direction in radians.
    #[inline]
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// The same vector turned back by `radians`.
    ///
    /// This is the inverse of rotating by `radians`: sampling a source at
    /// `v.rotated(a)` for every destination offset `v` rotates the
    /// destination by `a`.
    #[inline]
    pub fn rotated(&self, radians: f64) -> Self {
        Self {
            magnitude: self.magnitude,
            direction: self.direction - radians,
        }
    }

    /// The same direction with the magnitude multiplied by `factor`.
    #[inline]
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(self.magnitude * factor, self.direction)
    }

    /// Convert back to a Cartesian offset `(dx, dy)`.
    #[inline]
    pub fn to_offset(&self) -> (f64, f64) {
        let (sin, cos) = self.direction.sin_cos();
        (self.magnitude * cos, self.magnitude * sin)
    }
}
