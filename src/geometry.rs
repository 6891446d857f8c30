//! Geometry on point paths: arc length, resampling and the affine steps of
//! normalization.
//!
//! Every function takes a slice and returns a fresh `Vec`; nothing here
//! mutates its input.

use glam::DVec2;

use crate::defaults;
use crate::errors::PathError;
use crate::types::{Point, Radians};

/// Check that a raw path can be resampled: at least two finite points and a
/// finite, non-zero length.
pub fn validate_path(points: &[Point]) -> Result<(), PathError> {
    if points.len() < 2 {
        return Err(PathError::TooFewPoints {
            count: points.len(),
        });
    }
    if let Some(index) = points.iter().position(|p| !p.is_finite()) {
        return Err(PathError::NonFinite { index });
    }
    let length = path_length(points);
    if !length.is_finite() {
        return Err(PathError::Overflow);
    }
    if length <= 0.0 {
        return Err(PathError::ZeroLength);
    }
    Ok(())
}

/// Sum of the distances between consecutive points.
pub fn path_length(points: &[Point]) -> f64 {
    points.windows(2).map(|w| w[0].distance(w[1])).sum()
}

/// Mean of all points. An empty path has its centroid at the origin.
pub fn centroid(points: &[Point]) -> Point {
    if points.is_empty() {
        return DVec2::ZERO;
    }
    let sum: DVec2 = points.iter().copied().sum();
    sum / points.len() as f64
}

/// Width and height of the axis-aligned bounding box.
pub fn bounding_size(points: &[Point]) -> DVec2 {
    let Some(&first) = points.first() else {
        return DVec2::ZERO;
    };
    let (min, max) = points
        .iter()
        .fold((first, first), |(min, max), &p| (min.min(p), max.max(p)));
    max - min
}

/// Resample a path to `n` points evenly spaced along its arc length.
///
/// The first output point is the first input point. Interpolated points
/// become the start of the next step, so a long segment can yield several
/// samples. If rounding leaves the walk short, the last input point fills
/// the remaining slots.
pub fn resample(points: &[Point], n: usize) -> Result<Vec<Point>, PathError> {
    validate_path(points)?;

    let interval = path_length(points) / (n.max(2) - 1) as f64;
    let mut resampled = Vec::with_capacity(n);
    resampled.push(points[0]);

    let mut accumulated = 0.0;
    let mut previous = points[0];
    let mut i = 1;
    while i < points.len() && resampled.len() < n {
        let current = points[i];
        let segment = previous.distance(current);
        if segment > 0.0 && accumulated + segment >= interval {
            let t = (interval - accumulated) / segment;
            let q = previous.lerp(current, t);
            resampled.push(q);
            previous = q;
            accumulated = 0.0;
        } else {
            accumulated += segment;
            previous = current;
            i += 1;
        }
    }

    if let Some(&last) = points.last() {
        while resampled.len() < n {
            resampled.push(last);
        }
    }
    resampled.truncate(n);
    Ok(resampled)
}

/// Angle of the vector from the first point to the centroid.
///
/// Rotating by the negation of this angle puts the first point on the
/// horizontal through the centroid, which removes the drawing orientation.
pub fn indicative_angle(points: &[Point]) -> Radians {
    let Some(&first) = points.first() else {
        return Radians::ZERO;
    };
    let v = centroid(points) - first;
    Radians(v.y.atan2(v.x))
}

/// Rotate counter-clockwise about the path's own centroid.
pub fn rotate_by(points: &[Point], theta: Radians) -> Vec<Point> {
    let c = centroid(points);
    let rotation = DVec2::from_angle(theta.raw());
    points
        .iter()
        .map(|&p| c + rotation.rotate(p - c))
        .collect()
}

/// Scale x and y independently so the bounding box becomes `size` by `size`.
///
/// The scale is about the origin; callers translate afterwards. An axis
/// with (almost) no extent relative to the other is left as is, so a
/// perfectly straight stroke keeps its shape instead of blowing up.
pub fn scale_to(points: &[Point], size: f64) -> Vec<Point> {
    let extent = bounding_size(points);
    let widest = extent.max_element();
    let factor = |e: f64| {
        if e > widest * defaults::FLAT_AXIS_RATIO && e > 0.0 {
            size / e
        } else {
            1.0
        }
    };
    let scale = DVec2::new(factor(extent.x), factor(extent.y));
    points.iter().map(|&p| p * scale).collect()
}

/// Translate so the centroid lands on `target`.
pub fn translate_to(points: &[Point], target: Point) -> Vec<Point> {
    let offset = target - centroid(points);
    points.iter().map(|&p| p + offset).collect()
}
