//! Recognizer configuration.

use crate::defaults;
use crate::errors::ConfigError;
use crate::types::Radians;

/// Settings shared by a [`TemplateStore`](crate::TemplateStore) and the
/// [`Matcher`](crate::Matcher) that searches it.
///
/// Both sides must agree on `sample_count` and `square_size`. The matcher
/// reports a template that disagrees on either as incompatible.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecognizerConfig {
    /// Number of points every path is resampled to.
    /// Default: 64
    pub sample_count: usize,

    /// Side of the square paths are scaled into. Also the reference length
    /// for turning a distance into a score.
    /// Default: 250.0
    pub square_size: f64,

    /// Rotation search covers `[-angle_range, +angle_range]`.
    /// Default: 45°
    pub angle_range: Radians,

    /// Search stops once the bracketing window is no wider than this.
    /// Default: 2°
    pub angle_precision: Radians,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            sample_count: defaults::SAMPLE_COUNT,
            square_size: defaults::SQUARE_SIZE,
            angle_range: Radians::from_degrees(defaults::ANGLE_RANGE_DEGREES),
            angle_precision: Radians::from_degrees(defaults::ANGLE_PRECISION_DEGREES),
        }
    }
}

impl RecognizerConfig {
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_square_size(mut self, square_size: f64) -> Self {
        self.square_size = square_size;
        self
    }

    pub fn with_angle_range(mut self, angle_range: Radians) -> Self {
        self.angle_range = angle_range;
        self
    }

    pub fn with_angle_precision(mut self, angle_precision: Radians) -> Self {
        self.angle_precision = angle_precision;
        self
    }

    /// Distance at which the score reaches zero: half the diagonal of the
    /// reference square.
    pub fn half_diagonal(&self) -> f64 {
        0.5f64.sqrt() * self.square_size
    }

    /// Check that every setting is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_count < 2 {
            return Err(ConfigError::TooFewSamples {
                value: self.sample_count,
            });
        }
        if !self.square_size.is_finite() || self.square_size <= 0.0 {
            return Err(ConfigError::InvalidSquareSize {
                value: self.square_size,
            });
        }
        if !self.angle_range.is_finite() || self.angle_range.raw() <= 0.0 {
            return Err(ConfigError::InvalidAngleRange {
                degrees: self.angle_range.to_degrees(),
            });
        }
        let precision = self.angle_precision;
        if !precision.is_finite()
            || precision.raw() <= 0.0
            || precision.raw() >= 2.0 * self.angle_range.raw()
        {
            return Err(ConfigError::InvalidAnglePrecision {
                degrees: precision.to_degrees(),
            });
        }
        Ok(())
    }
}
