//! Error types for the template engine

use thiserror::Error;

/// Template loading and parsing errors
///
/// These never surface from `TemplateStore::get`, which falls back to the
/// built-in default template on any load failure. They are returned by
/// the standalone `parse` and `serialize` functions.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template document is not valid JSON or violates the schema
    #[error("Template parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// IO error reading a template resource
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Store was created without a template directory
    #[error("No template directory configured")]
    NotConfigured,
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
