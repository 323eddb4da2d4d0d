//! Core error type.
//!
//! Only geometry can be invalid: levels clamp instead of failing, and the
//! per-tick update has no failure modes at all.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CoreError {
    #[error("field dimensions must be finite and positive, got {width}x{height}")]
    InvalidField { width: f64, height: f64 },

    #[error("viewport dimensions must be finite and positive, got {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
}

/// Shorthand result type for `lc-core`.
pub type CoreResult<T> = Result<T, CoreError>;
