//! Error types for the synth crate.

use mcx_ir::{WireId, WireRole};
use thiserror::Error;

/// Reasons a synthesis request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RequestError {
    /// Fewer controls than the configuration accepts.
    #[error("{got} control wire(s) supplied, at least {min} required")]
    TooFewControls {
        /// Number of controls in the request.
        got: usize,
        /// Minimum accepted by the configuration.
        min: usize,
    },

    /// Work-wire count outside {1, 2}.
    #[error("{0} work wire(s) supplied, expected 1 or 2")]
    WorkWireCount(usize),

    /// A wire appears in more than one position of the request.
    #[error("Wire {wire} used as {first} and again as {second}")]
    DuplicateWire {
        /// The repeated wire.
        wire: WireId,
        /// Role at the first occurrence.
        first: WireRole,
        /// Role at the second occurrence.
        second: WireRole,
    },
}

/// Errors produced by multi-controlled X synthesis.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SynthError {
    /// Malformed request; fails identically on every retry.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] RequestError),

    /// Gate builder returned an error.
    #[error("Gate IR error: {0}")]
    Ir(#[from] mcx_ir::IrError),

    /// Configuration could not be read or failed validation.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SynthError {
    /// Check if this error rejects the request itself.
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, SynthError::InvalidRequest(_))
    }
}

/// Result type for synthesis operations.
pub type SynthResult<T> = Result<T, SynthError>;
