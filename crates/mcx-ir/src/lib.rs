//! Elementary Gate Model for multi-controlled X synthesis
//!
//! This crate provides the value types a synthesizer emits: wire
//! identifiers with roles, the closed set of elementary reversible gates,
//! ordered gate sequences, and the analyses the rest of the workspace
//! relies on (classical basis-state evaluation and dependency depth).
//!
//! # Core Components
//!
//! - **Wires**: [`WireId`], [`WireRole`] and [`Cleanliness`] for addressing
//!   caller-supplied wires
//! - **Gates**: [`ElementaryGate`] (NOT, CNOT, Toffoli, relative-phase
//!   Toffoli) with an explicit [`ElementaryGate::inverse`] mapping
//! - **Sequences**: [`GateSequence`] fluent builder with concatenation
//! - **Evaluation**: [`BasisState`] applies the bit action of gates
//! - **DAG**: [`GateDag`] for depth and ASAP layering
//!
//! # Example: A Toffoli Chain
//!
//! ```rust
//! use mcx_ir::{BasisState, GateSequence, WireId};
//!
//! let (a, b, c, t) = (WireId(0), WireId(1), WireId(2), WireId(3));
//! let mut seq = GateSequence::new();
//! seq.ccx(a, b, c).unwrap().cx(c, t).unwrap().ccx(a, b, c).unwrap();
//!
//! assert_eq!(seq.toffoli_count(), 2);
//! assert_eq!(seq.depth(), 3);
//!
//! let mut state = BasisState::from_integer(&[a, b, c, t], 0b0011);
//! seq.simulate(&mut state).unwrap();
//! assert_eq!(state.get(t), Ok(true));
//! assert_eq!(state.get(c), Ok(false));
//! ```
//!
//! # Gates
//!
//! | Gate | Wires | Inverse |
//! |------|-------|---------|
//! | `x` | 1 | self |
//! | `cx` | 2 | self |
//! | `ccx` | 3 | self |
//! | `rccx` / `rccxdg` | 3 | each other |

pub mod dag;
pub mod error;
pub mod gate;
pub mod sequence;
pub mod state;
pub mod wire;

pub use dag::{GateDag, NodeIndex};
pub use error::{IrError, IrResult};
pub use gate::{ElementaryGate, ToffoliForm};
pub use sequence::GateSequence;
pub use state::BasisState;
pub use wire::{Cleanliness, Wire, WireId, WireRole};
