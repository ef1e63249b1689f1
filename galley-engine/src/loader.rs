//! Template loading and caching
//!
//! A [`TemplateStore`] resolves template names to parsed [`Template`]s.
//! Resources live as `<name>.json` files under a template directory;
//! any read or parse failure falls back to the built-in default for
//! that name, so `get` never fails. Parsed templates are cached for
//! the lifetime of the store with load-once-per-key semantics.

use crate::defaults;
use crate::error::{TemplateError, TemplateResult};
use crate::template::Template;
use dashmap::DashMap;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Parse a template document from its JSON text
pub fn parse(text: &str) -> TemplateResult<Template> {
    Ok(serde_json::from_str(text)?)
}

/// Serialize a template to its JSON text, the exact inverse of [`parse`]
pub fn serialize(template: &Template) -> TemplateResult<String> {
    Ok(serde_json::to_string_pretty(template)?)
}

/// Name-keyed template cache with fallback to built-in defaults
///
/// Safe to share across threads; concurrent first access for the same
/// name parses at most once and every caller sees the same template.
#[derive(Debug)]
pub struct TemplateStore {
    template_dir: Option<PathBuf>,
    cache: DashMap<String, Arc<Template>>,
}

impl TemplateStore {
    /// A store backed by a directory of `<name>.json` resources
    pub fn new(template_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: Some(template_dir.into()),
            cache: DashMap::new(),
        }
    }

    /// A store that only ever serves the built-in defaults
    pub fn builtin() -> Self {
        Self {
            template_dir: None,
            cache: DashMap::new(),
        }
    }

    /// Resolve a template by name, loading and caching it on first access
    pub fn get(&self, name: &str) -> Arc<Template> {
        if let Some(cached) = self.cache.get(name) {
            return cached.clone();
        }
        self.cache
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(self.load(name)))
            .clone()
    }

    /// Drop one cached template so the next access reloads it
    pub fn invalidate(&self, name: &str) {
        self.cache.remove(name);
    }

    /// Drop every cached template
    pub fn clear(&self) {
        self.cache.clear();
    }

    fn load(&self, name: &str) -> Template {
        match self.try_load(name) {
            Ok(template) => {
                debug!(template = name, "Loaded template resource");
                template
            }
            Err(TemplateError::NotConfigured) => {
                debug!(template = name, "No template directory, using default");
                defaults::default_for(name)
            }
            Err(e) => {
                warn!(template = name, error = %e, "Template load failed, using default");
                defaults::default_for(name)
            }
        }
    }

    fn try_load(&self, name: &str) -> TemplateResult<Template> {
        let dir = self.template_dir.as_ref().ok_or(TemplateError::NotConfigured)?;
        let text = std::fs::read_to_string(dir.join(format!("{name}.json")))?;
        parse(&text)
    }
}
