//! Framework error type.
//!
//! Sub-crates define their own error enums and wrap `AtcError` where they
//! need to surface a core failure.

use thiserror::Error;

/// The top-level error type for `atc-core`.
#[derive(Debug, Error)]
pub enum AtcError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),
}

/// Shorthand result type for `atc-core`.
pub type AtcResult<T> = Result<T, AtcError>;
