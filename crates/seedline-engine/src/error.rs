//! Error types for the Seedline core
//!
//! Every engine operation returns a typed result so the calling form layer
//! can render inline messages; errors are never used for control flow and an
//! `Err` never leaves partial mutation behind.

/// Main engine error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// Malformed or missing required field on a proposed update
    #[error("invalid {field}: {reason}")]
    Validation {
        /// Offending field name
        field: &'static str,
        /// Human-readable reason, rendered inline near the control
        reason: String,
    },

    /// Manual video ingestion matched an existing id or link
    #[error("duplicate video: {link}")]
    Duplicate {
        /// Extracted video id
        id: String,
        /// Raw link as entered
        link: String,
    },

    /// Reserved for stricter link parsing; extraction currently always
    /// falls back to a synthesized id, so this is never constructed
    #[error("unparseable video link: {0}")]
    Parse(String),

    /// Operation precondition not met (e.g. releasing payment before
    /// content approval)
    #[error("precondition failed: {0}")]
    Precondition(String),
}

impl EngineError {
    /// Shorthand for a validation failure
    #[inline]
    pub fn validation(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation {
            field,
            reason: reason.into(),
        }
    }

    /// Whether the caller should let the operator retry with different input
    #[inline]
    #[must_use]
    pub fn is_retryable_input(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Duplicate { .. })
    }
}
