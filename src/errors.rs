//! Error types with diagnostics using miette
//!
//! Every failure is a precondition violation on the caller's input, so each
//! variant carries a stable diagnostic code and a hint on what to supply instead.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Path Errors
// ============================================================================

/// A path that cannot be resampled or normalized.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum PathError {
    #[error("path has {count} point(s), at least 2 are required")]
    #[diagnostic(
        code(unistroke::path::too_few_points),
        help("collect at least two distinct points before recognizing a stroke")
    )]
    TooFewPoints { count: usize },

    #[error("path has zero length")]
    #[diagnostic(
        code(unistroke::path::zero_length),
        help("all points coincide; a stroke must move to have a shape")
    )]
    ZeroLength,

    #[error("point {index} has a non-finite coordinate")]
    #[diagnostic(code(unistroke::path::non_finite))]
    NonFinite { index: usize },

    #[error("normalized path has {found} points, expected {expected}")]
    #[diagnostic(
        code(unistroke::path::wrong_sample_count),
        help("normalized paths must be produced with the same sample count")
    )]
    WrongSampleCount { expected: usize, found: usize },

    #[error("normalized path was scaled into a {found} square, expected {expected}")]
    #[diagnostic(
        code(unistroke::path::wrong_square_size),
        help("normalized paths must be produced with the same square size")
    )]
    WrongSquareSize { expected: f64, found: f64 },

    #[error("path centroid is at ({x}, {y}), a normalized path is centered on the origin")]
    #[diagnostic(
        code(unistroke::path::not_centered),
        help("pass raw strokes through the normalizer instead")
    )]
    NotCentered { x: f64, y: f64 },

    #[error("path coordinates overflow during normalization")]
    #[diagnostic(
        code(unistroke::path::overflow),
        help("the stroke spans too large a range; rescale its coordinates first")
    )]
    Overflow,
}

// ============================================================================
// Recognition Errors
// ============================================================================

/// Errors returned by [`Matcher::recognize`](crate::Matcher::recognize) and friends.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum RecognizeError {
    #[error("no templates registered")]
    #[diagnostic(
        code(unistroke::recognize::empty_store),
        help("add at least one template before recognizing")
    )]
    EmptyStore,

    #[error(transparent)]
    #[diagnostic(transparent)]
    DegeneratePath(#[from] PathError),

    #[error("template `{name}` has {found} points, the matcher samples {expected}")]
    #[diagnostic(
        code(unistroke::recognize::incompatible_template),
        help("build the template store and the matcher from the same configuration")
    )]
    IncompatibleTemplate {
        name: String,
        expected: usize,
        found: usize,
    },

    #[error("template `{name}` was scaled into a {found} square, the matcher uses {expected}")]
    #[diagnostic(
        code(unistroke::recognize::incompatible_square_size),
        help("build the template store and the matcher from the same configuration")
    )]
    IncompatibleSquareSize {
        name: String,
        expected: f64,
        found: f64,
    },
}

impl RecognizeError {
    /// True when the candidate stroke itself was the problem.
    pub fn is_degenerate_path(&self) -> bool {
        matches!(self, RecognizeError::DegeneratePath(_))
    }
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Rejected [`RecognizerConfig`](crate::RecognizerConfig) values.
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("sample count {value} is too small")]
    #[diagnostic(code(unistroke::config::too_few_samples), help("use at least 2 samples"))]
    TooFewSamples { value: usize },

    #[error("invalid square size: {value}")]
    #[diagnostic(
        code(unistroke::config::invalid_square_size),
        help("the square size must be finite and positive")
    )]
    InvalidSquareSize { value: f64 },

    #[error("invalid angle range: {degrees} degrees")]
    #[diagnostic(
        code(unistroke::config::invalid_angle_range),
        help("the search range must be finite and positive")
    )]
    InvalidAngleRange { degrees: f64 },

    #[error("invalid angle precision: {degrees} degrees")]
    #[diagnostic(
        code(unistroke::config::invalid_angle_precision),
        help("the precision must be finite, positive and smaller than twice the range")
    )]
    InvalidAnglePrecision { degrees: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_error_messages() {
        insta::assert_snapshot!(
            PathError::TooFewPoints { count: 1 },
            @"path has 1 point(s), at least 2 are required"
        );
        insta::assert_snapshot!(PathError::ZeroLength, @"path has zero length");
        insta::assert_snapshot!(
            PathError::NonFinite { index: 3 },
            @"point 3 has a non-finite coordinate"
        );
        insta::assert_snapshot!(
            PathError::WrongSquareSize { expected: 250.0, found: 100.0 },
            @"normalized path was scaled into a 100 square, expected 250"
        );
        insta::assert_snapshot!(
            PathError::NotCentered { x: 1031.5, y: 1000.0 },
            @"path centroid is at (1031.5, 1000), a normalized path is centered on the origin"
        );
        insta::assert_snapshot!(
            PathError::Overflow,
            @"path coordinates overflow during normalization"
        );
    }

    #[test]
    fn degenerate_path_is_transparent() {
        let err = RecognizeError::from(PathError::ZeroLength);
        assert!(err.is_degenerate_path());
        assert_eq!(err.to_string(), PathError::ZeroLength.to_string());
        let code = err.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("unistroke::path::zero_length"));
    }

    #[test]
    fn recognize_error_messages() {
        insta::assert_snapshot!(RecognizeError::EmptyStore, @"no templates registered");
        insta::assert_snapshot!(
            RecognizeError::IncompatibleTemplate {
                name: "circle".into(),
                expected: 64,
                found: 32,
            },
            @"template `circle` has 32 points, the matcher samples 64"
        );
        insta::assert_snapshot!(
            RecognizeError::IncompatibleSquareSize {
                name: "circle".into(),
                expected: 250.0,
                found: 100.0,
            },
            @"template `circle` was scaled into a 100 square, the matcher uses 250"
        );
        assert!(!RecognizeError::EmptyStore.is_degenerate_path());
    }
}
