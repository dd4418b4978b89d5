//! Synthesis requests and results.

use mcx_ir::{Cleanliness, GateSequence, Wire, WireId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A multi-controlled X to synthesize.
///
/// Flip `target` iff every wire in `controls` is 1, using the caller's
/// `work` wires as scratch. Wire ids are opaque labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisRequest {
    /// Control wires.
    pub controls: Vec<WireId>,
    /// Target wire.
    pub target: WireId,
    /// Work wires (one or two).
    pub work: Vec<WireId>,
    /// Promised state of the work wires.
    #[serde(default)]
    pub cleanliness: Cleanliness,
}

impl SynthesisRequest {
    /// Create a request with no work wires and clean cleanliness.
    pub fn new(controls: impl IntoIterator<Item = WireId>, target: WireId) -> Self {
        Self {
            controls: controls.into_iter().collect(),
            target,
            work: Vec::new(),
            cleanliness: Cleanliness::Clean,
        }
    }

    /// Set the work wires.
    #[must_use]
    pub fn with_work(mut self, work: impl IntoIterator<Item = WireId>) -> Self {
        self.work = work.into_iter().collect();
        self
    }

    /// Set the cleanliness promise.
    #[must_use]
    pub fn with_cleanliness(mut self, cleanliness: Cleanliness) -> Self {
        self.cleanliness = cleanliness;
        self
    }

    /// Shorthand for [`Cleanliness::Clean`].
    #[must_use]
    pub fn clean(self) -> Self {
        self.with_cleanliness(Cleanliness::Clean)
    }

    /// Shorthand for [`Cleanliness::Dirty`].
    #[must_use]
    pub fn dirty(self) -> Self {
        self.with_cleanliness(Cleanliness::Dirty)
    }

    /// Number of controls.
    pub fn num_controls(&self) -> usize {
        self.controls.len()
    }

    /// Every wire in the request with its role, controls first.
    pub fn wires(&self) -> Vec<Wire> {
        let controls = self.controls.iter().map(|&id| Wire::control(id));
        let work = self.work.iter().map(|&id| Wire::work(id, self.cleanliness));
        controls
            .chain(std::iter::once(Wire::target(self.target)))
            .chain(work)
            .collect()
    }
}

/// Construction used for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Zero controls: a single NOT.
    Not,
    /// One control: a single CNOT.
    ControlledNot,
    /// Two controls: a single Toffoli.
    Toffoli,
    /// Linear-depth ladder over one work wire.
    Ladder,
    /// Logarithmic-depth balanced tree over two work wires.
    BalancedTree,
}

impl Strategy {
    /// Get the strategy name.
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Not => "not",
            Strategy::ControlledNot => "cnot",
            Strategy::Toffoli => "toffoli",
            Strategy::Ladder => "ladder",
            Strategy::BalancedTree => "balanced_tree",
        }
    }

    /// Check if the strategy emits exactly one gate.
    pub fn is_trivial(&self) -> bool {
        matches!(
            self,
            Strategy::Not | Strategy::ControlledNot | Strategy::Toffoli
        )
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A synthesized gate sequence together with its measured cost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisResult {
    /// The emitted gates.
    pub gates: GateSequence,
    /// Toffoli-class gates in `gates`.
    pub toffoli_count: usize,
    /// Unit-weight depth of `gates`.
    pub depth: usize,
    /// Construction that produced `gates`.
    pub strategy: Strategy,
    /// Number of controls in the request.
    pub num_controls: usize,
    /// Cleanliness the request promised.
    pub cleanliness: Cleanliness,
}

impl SynthesisResult {
    pub(crate) fn new(
        gates: GateSequence,
        strategy: Strategy,
        num_controls: usize,
        cleanliness: Cleanliness,
    ) -> Self {
        Self {
            toffoli_count: gates.toffoli_count(),
            depth: gates.depth(),
            gates,
            strategy,
            num_controls,
            cleanliness,
        }
    }

    /// Number of gates of any kind.
    pub fn gate_count(&self) -> usize {
        self.gates.len()
    }
}
