//! The normalization pipeline: resample, rotate to the indicative angle,
//! scale into the reference square, center on the origin.

use glam::DVec2;

use crate::config::RecognizerConfig;
use crate::errors::PathError;
use crate::geometry::{indicative_angle, resample, rotate_by, scale_to, translate_to};
use crate::types::{NormalizedPath, Point};

/// Turns raw strokes into [`NormalizedPath`]s.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Normalizer {
    sample_count: usize,
    square_size: f64,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(&RecognizerConfig::default())
    }
}

impl Normalizer {
    pub fn new(config: &RecognizerConfig) -> Self {
        Self {
            sample_count: config.sample_count,
            square_size: config.square_size,
        }
    }

    pub fn sample_count(&self) -> usize {
        self.sample_count
    }

    pub fn square_size(&self) -> f64 {
        self.square_size
    }

    /// Normalize a raw stroke.
    ///
    /// Rotation comes before scaling: the bounding box, and therefore the
    /// non-uniform scale, depends on orientation.
    pub fn normalize(&self, raw: &[Point]) -> Result<NormalizedPath, PathError> {
        let points = resample(raw, self.sample_count)?;
        let points = rotate_by(&points, -indicative_angle(&points));
        let points = scale_to(&points, self.square_size);
        let points = translate_to(&points, DVec2::ZERO);
        // Finite input can still overflow in the centroid or the scale.
        if !points.iter().all(|p| p.is_finite()) {
            return Err(PathError::Overflow);
        }
        Ok(NormalizedPath::from_vec(points, self.square_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{bounding_size, centroid};
    use crate::types::pt;

    fn circle(center: Point, radius: f64, steps: usize) -> Vec<Point> {
        (0..=steps)
            .map(|i| {
                let a = i as f64 / steps as f64 * std::f64::consts::TAU;
                center + DVec2::from_angle(a) * radius
            })
            .collect()
    }

    #[test]
    fn normalized_path_is_canonical() {
        let normalizer = Normalizer::default();
        let path = normalizer
            .normalize(&[pt(10.0, 10.0), pt(90.0, 30.0), pt(40.0, 80.0)])
            .unwrap();
        assert_eq!(path.len(), 64);
        assert!(centroid(&path).length() < 1e-9);
        let size = bounding_size(&path);
        assert!((size.x - 250.0).abs() < 1e-9);
        assert!((size.y - 250.0).abs() < 1e-9);
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let normalizer = Normalizer::default();
        let once = normalizer.normalize(&circle(pt(300.0, 300.0), 100.0, 100)).unwrap();
        let twice = normalizer.normalize(&once).unwrap();
        for (a, b) in once.iter().zip(twice.iter()) {
            assert!(a.distance(*b) < 0.05, "{a} vs {b}");
        }
    }

    #[test]
    fn custom_sample_count() {
        let config = RecognizerConfig::default().with_sample_count(16).with_square_size(1.0);
        let normalizer = Normalizer::new(&config);
        let path = normalizer.normalize(&[pt(0.0, 0.0), pt(5.0, 5.0), pt(10.0, 0.0)]).unwrap();
        assert_eq!(path.len(), 16);
        assert!((bounding_size(&path).x - 1.0).abs() < 1e-9);
    }

    #[test]
    fn single_point_is_degenerate() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize(&[pt(3.0, 4.0)]),
            Err(PathError::TooFewPoints { count: 1 })
        );
    }

    #[test]
    fn huge_coordinates_overflow() {
        let normalizer = Normalizer::default();
        assert_eq!(
            normalizer.normalize(&[pt(-1e308, 0.0), pt(1e308, 0.0)]),
            Err(PathError::Overflow)
        );
        // Length 1, but the centroid sum overflows.
        assert_eq!(
            normalizer.normalize(&[pt(1e308, 0.0), pt(1e308, 1.0)]),
            Err(PathError::Overflow)
        );
    }

    #[test]
    fn normalized_path_records_square_size() {
        let config = RecognizerConfig::default().with_square_size(100.0);
        let path = Normalizer::new(&config)
            .normalize(&[pt(0.0, 0.0), pt(5.0, 5.0), pt(10.0, 0.0)])
            .unwrap();
        assert_eq!(path.square_size(), 100.0);
    }
}
