//! `mcx-synth`: multi-controlled X synthesis from Toffolis.
//!
//! Given `n` control wires, a target and one or two caller-supplied work
//! wires, emits a Toffoli sequence that flips the target iff every control
//! is 1 and hands every work wire back as it was promised:
//!
//! - **Clean** work wires start at 0 and are returned at 0.
//! - **Dirty** work wires start in an unknown state and are returned in
//!   that state.
//!
//! One work wire selects the linear-depth [`ladder`]; two select the
//! logarithmic-depth [`tree`]. Both meet the same Toffoli counts: `2n - 3`
//! with clean work and `4n - 8` with dirty work.
//!
//! # Quick start
//!
//! ```rust
//! use mcx_ir::WireId;
//! use mcx_synth::{synthesize, verify, SynthesisRequest};
//!
//! let controls = (0..6).map(WireId);
//! let request = SynthesisRequest::new(controls, WireId(6))
//!     .with_work([WireId(7), WireId(8)])
//!     .dirty();
//!
//! let result = synthesize(&request).unwrap();
//! assert_eq!(result.toffoli_count, 4 * 6 - 8);
//! assert!(verify::check(&result).passed());
//! assert_eq!(verify::check_truth_table(&request, &result), Ok(1 << 9));
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod ladder;
pub mod mirror;
pub mod request;
pub mod synthesizer;
pub mod tree;
pub mod verify;

pub use allocator::{Allocation, Obligation, WorkWire, allocate};
pub use config::{ControlOrder, SynthesisConfig};
pub use error::{RequestError, SynthError, SynthResult};
pub use ladder::LadderBuilder;
pub use request::{Strategy, SynthesisRequest, SynthesisResult};
pub use synthesizer::{Synthesizer, synthesize};
pub use tree::BalancedTreeBuilder;
pub use verify::{VerificationReport, Violation};
