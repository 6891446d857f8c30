//! Matching a stroke against templates: rotation search, path distance and
//! scoring.

use std::sync::Arc;

use crate::config::RecognizerConfig;
use crate::errors::{ConfigError, PathError, RecognizeError};
use crate::geometry::rotate_by;
use crate::log::{debug, trace, warn};
use crate::normalize::Normalizer;
use crate::search::{Minimum, golden_section_min};
use crate::template::{Template, TemplateSource};
use crate::types::{NormalizedPath, Point, Radians};

/// Outcome of a recognition: the winning template and how well it fit.
#[derive(Clone, Debug, PartialEq)]
pub struct Match {
    name: Arc<str>,
    score: f64,
    distance: f64,
    rotation: Radians,
    template_index: usize,
    points: NormalizedPath,
}

impl Match {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Similarity in `[0, 1]`; 1 is a perfect fit.
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Mean point distance at the best rotation found.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Rotation applied to the stroke to reach `distance`.
    pub fn rotation(&self) -> Radians {
        self.rotation
    }

    /// Position of the template in its store.
    pub fn template_index(&self) -> usize {
        self.template_index
    }

    /// The winning template's normalized points.
    pub fn points(&self) -> &NormalizedPath {
        &self.points
    }
}

/// Mean Euclidean distance between points at equal indices.
///
/// Paths of different lengths (or empty paths) have no meaningful distance
/// and compare as infinitely far apart.
pub fn path_distance(a: &[Point], b: &[Point]) -> f64 {
    if a.len() != b.len() || a.is_empty() {
        return f64::INFINITY;
    }
    let total: f64 = a.iter().zip(b).map(|(p, q)| p.distance(*q)).sum();
    total / a.len() as f64
}

/// Map a distance to `[0, 1]`: 1 at distance zero, 0 at half the reference
/// square's diagonal and beyond.
pub fn score_from_distance(distance: f64, square_size: f64) -> f64 {
    let half_diagonal = 0.5f64.sqrt() * square_size;
    (1.0 - distance / half_diagonal).max(0.0)
}

/// Stateless recognizer. Holds only configuration, so one matcher can serve
/// any number of threads and stores.
#[derive(Clone, Copy, Debug, Default)]
pub struct Matcher {
    config: RecognizerConfig,
    normalizer: Normalizer,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_new(config: RecognizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: Normalizer::new(&config),
        })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    pub fn normalize(&self, raw: &[Point]) -> Result<NormalizedPath, PathError> {
        self.normalizer.normalize(raw)
    }

    /// Find the template closest to `raw`.
    ///
    /// Ties go to the template that comes first in `store`.
    pub fn recognize<S>(&self, raw: &[Point], store: &S) -> Result<Match, RecognizeError>
    where
        S: TemplateSource + ?Sized,
    {
        let templates = store.templates();
        if templates.is_empty() {
            return Err(RecognizeError::EmptyStore);
        }
        let candidate = self.normalize(raw)?;

        let mut best: Option<(usize, Minimum)> = None;
        for (index, template) in templates.iter().enumerate() {
            let min = self.search_template(&candidate, template)?;
            let improves = match best {
                Some((_, current)) => min.value < current.value,
                None => true,
            };
            if improves {
                best = Some((index, min));
            }
        }

        let Some((index, min)) = best else {
            return Err(RecognizeError::EmptyStore);
        };
        let result = self.build_match(&templates[index], index, min);
        debug!(
            template = result.name(),
            score = result.score(),
            distance = result.distance(),
            "recognized"
        );
        Ok(result)
    }

    /// Score every template against `raw`, best first, keeping at most
    /// `limit` entries. Equal distances keep store order.
    pub fn rank<S>(&self, raw: &[Point], store: &S, limit: usize) -> Result<Vec<Match>, RecognizeError>
    where
        S: TemplateSource + ?Sized,
    {
        let templates = store.templates();
        if templates.is_empty() {
            return Err(RecognizeError::EmptyStore);
        }
        let candidate = self.normalize(raw)?;

        let mut matches = Vec::with_capacity(templates.len());
        for (index, template) in templates.iter().enumerate() {
            let min = self.search_template(&candidate, template)?;
            matches.push(self.build_match(template, index, min));
        }
        // Stable, so ties keep store order
        matches.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        matches.truncate(limit);
        Ok(matches)
    }

    /// Smallest distance between `candidate` and `template` over the
    /// configured rotation window, found by golden-section search.
    pub fn distance_at_best_angle(&self, candidate: &[Point], template: &[Point]) -> f64 {
        self.best_angle(candidate, template).value
    }

    /// Distance after rotating `candidate` about its centroid by `theta`.
    pub fn distance_at_angle(&self, candidate: &[Point], template: &[Point], theta: Radians) -> f64 {
        path_distance(&rotate_by(candidate, theta), template)
    }

    fn best_angle(&self, candidate: &[Point], template: &[Point]) -> Minimum {
        let range = self.config.angle_range.raw();
        golden_section_min(-range, range, self.config.angle_precision.raw(), |theta| {
            self.distance_at_angle(candidate, template, Radians(theta))
        })
    }

    fn search_template(
        &self,
        candidate: &NormalizedPath,
        template: &Template,
    ) -> Result<Minimum, RecognizeError> {
        let found = template.points().len();
        if found != candidate.len() {
            warn!(
                template = template.name(),
                expected = candidate.len(),
                found,
                "template was normalized with a different sample count"
            );
            return Err(RecognizeError::IncompatibleTemplate {
                name: template.name().to_string(),
                expected: candidate.len(),
                found,
            });
        }
        let found = template.points().square_size();
        if found != candidate.square_size() {
            warn!(
                template = template.name(),
                expected = candidate.square_size(),
                found,
                "template was normalized with a different square size"
            );
            return Err(RecognizeError::IncompatibleSquareSize {
                name: template.name().to_string(),
                expected: candidate.square_size(),
                found,
            });
        }
        let min = self.best_angle(candidate, template.points());
        trace!(template = template.name(), distance = min.value, "template searched");
        Ok(min)
    }

    fn build_match(&self, template: &Template, index: usize, min: Minimum) -> Match {
        Match {
            name: template.shared_name(),
            score: score_from_distance(min.value, self.config.square_size),
            distance: min.value,
            rotation: Radians(min.argument),
            template_index: index,
            points: template.points().clone(),
        }
    }
}
