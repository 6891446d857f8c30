//! Strongly-typed primitives for stroke recognition.
//!
//! - Points are plain `glam::DVec2` values
//! - Angles carry their unit in the type
//! - A [`NormalizedPath`] can only be produced by the normalizer (or by
//!   validated reconstruction), so raw strokes never reach a template store

use std::fmt;
use std::ops::{Add, Deref, Div, Mul, Neg, Sub};
use std::sync::Arc;

use glam::DVec2;

use crate::config::RecognizerConfig;
use crate::defaults;
use crate::errors::PathError;
use crate::geometry::centroid;

/// A 2D point with real-valued coordinates.
pub type Point = DVec2;

/// Build a [`Point`].
#[inline]
pub fn pt(x: f64, y: f64) -> Point {
    DVec2::new(x, y)
}

/// An angle in radians.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Radians(pub f64);

impl Radians {
    pub const ZERO: Radians = Radians(0.0);

    #[inline]
    pub fn from_degrees(degrees: f64) -> Radians {
        Radians(degrees.to_radians())
    }

    #[inline]
    pub fn to_degrees(self) -> f64 {
        self.0.to_degrees()
    }

    /// Get the raw value
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn abs(self) -> Radians {
        Radians(self.0.abs())
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl Add for Radians {
    type Output = Radians;
    fn add(self, rhs: Radians) -> Radians {
        Radians(self.0 + rhs.0)
    }
}

impl Sub for Radians {
    type Output = Radians;
    fn sub(self, rhs: Radians) -> Radians {
        Radians(self.0 - rhs.0)
    }
}

impl Mul<f64> for Radians {
    type Output = Radians;
    fn mul(self, rhs: f64) -> Radians {
        Radians(self.0 * rhs)
    }
}

impl Div<f64> for Radians {
    type Output = Radians;
    fn div(self, rhs: f64) -> Radians {
        Radians(self.0 / rhs)
    }
}

impl Neg for Radians {
    type Output = Radians;
    fn neg(self) -> Radians {
        Radians(-self.0)
    }
}

impl fmt::Display for Radians {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}rad", self.0)
    }
}

/// A path in canonical form: resampled to a fixed count, rotated to its
/// indicative angle, scaled into the reference square and centered on the
/// origin.
///
/// The points are shared, so cloning a normalized path (and therefore a
/// template or a template store) never copies coordinates. The square size
/// the path was scaled into travels with it, since distances between paths
/// scaled into different squares do not compare.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedPath {
    points: Arc<[Point]>,
    square_size: f64,
}

impl NormalizedPath {
    /// Only the normalizer builds these from scratch.
    pub(crate) fn from_vec(points: Vec<Point>, square_size: f64) -> Self {
        Self {
            points: points.into(),
            square_size,
        }
    }

    /// Rebuild a normalized path from points that were normalized earlier
    /// under `config` (for example, template data a host persisted).
    ///
    /// The points are checked for count, finiteness and a centroid at the
    /// origin, but are not renormalized.
    pub fn from_normalized(
        points: Vec<Point>,
        config: &RecognizerConfig,
    ) -> Result<Self, PathError> {
        if points.len() != config.sample_count {
            return Err(PathError::WrongSampleCount {
                expected: config.sample_count,
                found: points.len(),
            });
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(PathError::NonFinite { index });
        }
        let offset = centroid(&points);
        if offset.length() > config.square_size * defaults::CENTROID_TOLERANCE {
            return Err(PathError::NotCentered {
                x: offset.x,
                y: offset.y,
            });
        }
        Ok(Self::from_vec(points, config.square_size))
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Side of the square these points were scaled into.
    pub fn square_size(&self) -> f64 {
        self.square_size
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Deref for NormalizedPath {
    type Target = [Point];

    fn deref(&self) -> &[Point] {
        &self.points
    }
}
