//! Named reference strokes and the append-only store that holds them.

use std::sync::Arc;

use crate::config::RecognizerConfig;
use crate::errors::{ConfigError, PathError};
use crate::log::debug;
use crate::normalize::Normalizer;
use crate::types::{NormalizedPath, Point};

/// A named, normalized reference path. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct Template {
    name: Arc<str>,
    points: NormalizedPath,
}

impl Template {
    /// Normalize a raw stroke into a template.
    pub fn new(
        name: impl Into<String>,
        raw: &[Point],
        normalizer: &Normalizer,
    ) -> Result<Self, PathError> {
        let points = normalizer.normalize(raw)?;
        Ok(Self::from_normalized(name, points))
    }

    /// Wrap an already normalized path, e.g. template data loaded by a host.
    pub fn from_normalized(name: impl Into<String>, points: NormalizedPath) -> Self {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points(&self) -> &NormalizedPath {
        &self.points
    }

    pub(crate) fn shared_name(&self) -> Arc<str> {
        Arc::clone(&self.name)
    }
}

/// Read access to an ordered collection of templates.
///
/// Order matters: when two templates are equally close to a stroke, the one
/// that comes first wins.
pub trait TemplateSource {
    fn templates(&self) -> &[Template];
}

impl TemplateSource for [Template] {
    fn templates(&self) -> &[Template] {
        self
    }
}

impl TemplateSource for Vec<Template> {
    fn templates(&self) -> &[Template] {
        self
    }
}

/// Append-only, insertion-ordered template collection.
///
/// Templates share their data, so [`TemplateStore::snapshot`] is cheap. A
/// host that registers templates while recognizing on other threads can hand
/// each recognition its own snapshot.
#[derive(Clone, Debug, Default)]
pub struct TemplateStore {
    config: RecognizerConfig,
    normalizer: Normalizer,
    templates: Vec<Template>,
}

impl TemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_new(config: RecognizerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            normalizer: Normalizer::new(&config),
            templates: Vec::new(),
        })
    }

    pub fn config(&self) -> &RecognizerConfig {
        &self.config
    }

    /// Normalize `raw` and append it under `name`. Duplicate names are kept
    /// as separate candidates.
    pub fn add_template(
        &mut self,
        name: impl Into<String>,
        raw: &[Point],
    ) -> Result<&Template, PathError> {
        let template = Template::new(name, raw, &self.normalizer)?;
        Ok(self.push(template))
    }

    /// Append a template that was normalized elsewhere. Its point count and
    /// square size must match this store's configuration.
    pub fn add_normalized(&mut self, template: Template) -> Result<&Template, PathError> {
        let found = template.points().len();
        if found != self.config.sample_count {
            return Err(PathError::WrongSampleCount {
                expected: self.config.sample_count,
                found,
            });
        }
        let found = template.points().square_size();
        if found != self.config.square_size {
            return Err(PathError::WrongSquareSize {
                expected: self.config.square_size,
                found,
            });
        }
        Ok(self.push(template))
    }

    fn push(&mut self, template: Template) -> &Template {
        debug!(
            template = template.name(),
            index = self.templates.len(),
            "template added"
        );
        self.templates.push(template);
        &self.templates[self.templates.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Template> {
        self.templates.iter()
    }

    /// A consistent copy of the current templates.
    pub fn snapshot(&self) -> TemplateStore {
        self.clone()
    }
}

impl TemplateSource for TemplateStore {
    fn templates(&self) -> &[Template] {
        &self.templates
    }
}

impl<'a> IntoIterator for &'a TemplateStore {
    type Item = &'a Template;
    type IntoIter = std::slice::Iter<'a, Template>;

    fn into_iter(self) -> Self::IntoIter {
        self.templates.iter()
    }
}
