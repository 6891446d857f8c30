//! Single-stroke gesture recognition.
//!
//! A stroke is an ordered list of 2D points. Templates are strokes recorded
//! earlier under a name. Both are brought into a canonical form (fixed point
//! count, orientation removed, scaled into a reference square, centered on
//! the origin), then a stroke is compared against every template over a
//! window of rotations. The closest template wins and its distance becomes a
//! score in `[0, 1]`.
//!
//! ```
//! use unistroke::{Matcher, TemplateStore, pt};
//!
//! let mut store = TemplateStore::new();
//! store.add_template("caret", &[pt(0.0, 100.0), pt(50.0, 0.0), pt(100.0, 100.0)])?;
//! store.add_template("line", &[pt(0.0, 0.0), pt(100.0, 0.0)])?;
//!
//! // Same caret, drawn smaller and somewhere else
//! let stroke = [pt(210.0, 40.0), pt(230.0, 0.0), pt(250.0, 40.0)];
//! let found = Matcher::new().recognize(&stroke, &store)?;
//! assert_eq!(found.name(), "caret");
//! assert!(found.score() > 0.9);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Enable the `tracing` feature to get debug events for template
//! registration and recognition.

pub mod config;
pub mod defaults;
pub mod errors;
pub mod geometry;
pub mod log;
pub mod matcher;
pub mod normalize;
pub mod search;
pub mod template;
pub mod types;

pub use config::RecognizerConfig;
pub use errors::{ConfigError, PathError, RecognizeError};
pub use matcher::{Match, Matcher, path_distance, score_from_distance};
pub use normalize::Normalizer;
pub use template::{Template, TemplateSource, TemplateStore};
pub use types::{NormalizedPath, Point, Radians, pt};

/// Recognize `raw` against `store` with the default configuration.
pub fn recognize<S>(raw: &[Point], store: &S) -> Result<Match, RecognizeError>
where
    S: TemplateSource + ?Sized,
{
    Matcher::new().recognize(raw, store)
}
