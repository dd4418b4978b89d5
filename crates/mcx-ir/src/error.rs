//! Error types for the IR crate.

use crate::wire::WireId;
use thiserror::Error;

/// Errors that can occur in IR operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Wire has no value in the basis state being evaluated.
    #[error("Wire {wire} not found in basis state{}", format_gate_context(.gate_name))]
    WireNotFound {
        /// The wire that was not found.
        wire: WireId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// The same wire appears twice in one gate.
    #[error("Duplicate wire {wire} in operation{}", format_gate_context(.gate_name))]
    DuplicateWire {
        /// The duplicate wire.
        wire: WireId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },
}

#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
