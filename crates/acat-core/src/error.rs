//! Error types for catalog decoding.
//!
//! # Overview
//!
//! Decoding is all-or-nothing: the caller receives either a complete
//! [`crate::catalog::CatalogDocument`] or a single descriptive error.
//! Two failure classes exist:
//!
//! - **Structural**: a required field is absent, has the wrong shape, or
//!   the document is not the expected container type at all.
//! - **Schema mismatch**: a field is present but its value cannot be
//!   interpreted as the expected primitive (a channel that is neither a
//!   number nor a numeral-shaped string).
//!
//! Both carry the JSON path of the offending node (e.g.
//! `colors[2].color.components.red`) so the source document can be fixed
//! without re-parsing it by hand. Unrecognized but well-shaped *values*
//! (unknown idiom token, unknown color-space token) are never errors;
//! they resolve to defined defaults.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation

use thiserror::Error;

/// Result type alias using [`CatalogError`] as the error type.
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while decoding a color-asset catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error reading a catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not syntactically valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required field is missing or has the wrong shape.
    ///
    /// Fatal to the whole decode; no partial document is returned.
    #[error("structural error at {path}: expected {expected}, found {found}")]
    Structural {
        /// JSON path of the offending node.
        path: String,
        /// What the decoder expected there.
        expected: &'static str,
        /// What the document actually contains.
        found: String,
    },

    /// A present field's value cannot be interpreted as its expected
    /// primitive type.
    ///
    /// Propagates identically to [`Structural`](CatalogError::Structural)
    /// but carries the raw offending value for diagnostics.
    #[error("schema mismatch at {path}: {value} is neither a number nor a numeric string")]
    SchemaMismatch {
        /// JSON path of the offending field.
        path: String,
        /// Raw value as written in the source.
        value: String,
    },
}

impl CatalogError {
    /// Creates a [`CatalogError::Structural`] error.
    #[inline]
    pub fn structural(
        path: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::Structural {
            path: path.into(),
            expected,
            found: found.into(),
        }
    }

    /// Creates a [`CatalogError::Structural`] error for a missing
    /// required field.
    #[inline]
    pub fn missing(path: impl Into<String>, expected: &'static str) -> Self {
        Self::Structural {
            path: path.into(),
            expected,
            found: "nothing".into(),
        }
    }

    /// Creates a [`CatalogError::SchemaMismatch`] error.
    #[inline]
    pub fn schema_mismatch(path: impl Into<String>, value: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Returns `true` if this is a structural (missing/wrong-shape) error.
    #[inline]
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. })
    }

    /// Returns `true` if this is a schema-mismatch error.
    #[inline]
    pub fn is_schema_mismatch(&self) -> bool {
        matches!(self, Self::SchemaMismatch { .. })
    }

    /// Returns the JSON path carried by the error, if any.
    pub fn path(&self) -> Option<&str> {
        match self {
            Self::Structural { path, .. } | Self::SchemaMismatch { path, .. } => Some(path),
            _ => None,
        }
    }
}
