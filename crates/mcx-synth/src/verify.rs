//! Cost and behaviour checks for synthesized sequences.
//!
//! [`check`] compares a result's Toffoli count against the closed form and
//! its depth against the bound for its construction. [`check_state`] and
//! [`check_truth_table`] run the gates classically and confirm the target,
//! controls and work wires end where they should.

use mcx_ir::{BasisState, Cleanliness, IrError, WireId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::allocator::{Obligation, WorkWire};
use crate::request::{Strategy, SynthesisRequest, SynthesisResult};

/// Largest number of free input wires [`check_truth_table`] enumerates.
pub const MAX_EXHAUSTIVE_WIRES: usize = 24;

/// Toffoli count of an `n`-control MCX.
///
/// `2n - 3` with clean work, `4n - 8` with dirty work, for `n >= 3`. Two
/// controls is one Toffoli; fewer is none.
pub fn expected_toffoli_count(n: usize, cleanliness: Cleanliness) -> usize {
    match (n, cleanliness) {
        (0 | 1, _) => 0,
        (2, _) => 1,
        (_, Cleanliness::Clean) => 2 * n - 3,
        (_, Cleanliness::Dirty) => 4 * n - 8,
    }
}

/// Upper bound on the unit-weight depth of a construction.
pub fn depth_bound(n: usize, strategy: Strategy, cleanliness: Cleanliness) -> usize {
    let passes = if cleanliness.is_dirty() { 2 } else { 1 };
    match strategy {
        Strategy::Not | Strategy::ControlledNot | Strategy::Toffoli => 1,
        Strategy::Ladder => passes * 3 * n,
        Strategy::BalancedTree => passes * 8 * (ceil_log2(n) + 1),
    }
}

fn ceil_log2(n: usize) -> usize {
    if n <= 1 {
        0
    } else {
        (usize::BITS - (n - 1).leading_zeros()) as usize
    }
}

/// Outcome of [`check`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    /// Closed-form Toffoli count for the request.
    pub expected_toffoli_count: usize,
    /// Toffoli-class gates actually emitted.
    pub actual_toffoli_count: usize,
    /// Measured depth of the sequence.
    pub depth: usize,
    /// Largest depth accepted for the strategy and mode.
    pub depth_bound: usize,
}

impl VerificationReport {
    /// Check if the count matches and the depth is within bound.
    pub fn passed(&self) -> bool {
        self.expected_toffoli_count == self.actual_toffoli_count && self.depth <= self.depth_bound
    }
}

/// Measure a result against its closed-form cost.
pub fn check(result: &SynthesisResult) -> VerificationReport {
    VerificationReport {
        expected_toffoli_count: expected_toffoli_count(result.num_controls, result.cleanliness),
        actual_toffoli_count: result.gates.toffoli_count(),
        depth: result.gates.depth(),
        depth_bound: depth_bound(result.num_controls, result.strategy, result.cleanliness),
    }
}

/// Panic unless `result` meets its closed-form cost.
///
/// # Panics
///
/// If the Toffoli count differs from [`expected_toffoli_count`] or the
/// depth exceeds [`depth_bound`].
pub fn assert_bounds(result: &SynthesisResult) {
    let report = check(result);
    assert!(
        report.passed(),
        "{} MCX with {} controls ({}): {} Toffolis (expected {}), depth {} (bound {})",
        result.strategy,
        result.num_controls,
        result.cleanliness,
        report.actual_toffoli_count,
        report.expected_toffoli_count,
        report.depth,
        report.depth_bound,
    );
}

/// A behavioural check that failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Violation {
    /// The target did not end at its initial value XOR the control AND.
    #[error("Target {wire} ended at {got}, expected {expected}")]
    WrongTarget {
        /// The target wire.
        wire: WireId,
        /// Value the target should hold.
        expected: bool,
        /// Value the target holds.
        got: bool,
    },

    /// A control wire ended with a different value.
    #[error("Control {wire} was modified")]
    ControlModified {
        /// The modified control.
        wire: WireId,
    },

    /// A work wire broke its restoration obligation.
    #[error("Work wire {wire} not restored ({obligation:?})")]
    WorkNotRestored {
        /// The work wire.
        wire: WireId,
        /// What the wire was promised.
        obligation: Obligation,
    },

    /// A gate touched a wire outside the request.
    #[error("Simulation failed: {0}")]
    Simulation(#[from] IrError),
}

/// Run `result` from `initial` and check every wire of `request`.
///
/// `initial` must assign every wire of the request; clean work wires must
/// start at 0.
pub fn check_state(
    request: &SynthesisRequest,
    result: &SynthesisResult,
    initial: &BasisState,
) -> Result<(), Violation> {
    let mut state = initial.clone();
    result.gates.simulate(&mut state)?;

    let mut all_on = true;
    for &wire in &request.controls {
        let before = initial.get(wire)?;
        all_on &= before;
        if state.get(wire)? != before {
            return Err(Violation::ControlModified { wire });
        }
    }

    let expected = initial.get(request.target)? ^ all_on;
    let got = state.get(request.target)?;
    if got != expected {
        return Err(Violation::WrongTarget {
            wire: request.target,
            expected,
            got,
        });
    }

    for &id in &request.work {
        let work = WorkWire {
            id,
            cleanliness: request.cleanliness,
        };
        if !work.is_restored(initial.get(id)?, state.get(id)?) {
            return Err(Violation::WorkNotRestored {
                wire: id,
                obligation: work.obligation(),
            });
        }
    }
    Ok(())
}

/// Check every basis input of `request` against `result`.
///
/// Controls and target range over all values. Dirty work wires range over
/// all values as well; clean ones start at 0. Returns the number of inputs
/// checked.
///
/// # Panics
///
/// If more than [`MAX_EXHAUSTIVE_WIRES`] wires are free.
pub fn check_truth_table(
    request: &SynthesisRequest,
    result: &SynthesisResult,
) -> Result<usize, Violation> {
    let mut free: Vec<WireId> = request.controls.clone();
    free.push(request.target);
    if request.cleanliness.is_dirty() {
        free.extend_from_slice(&request.work);
    }
    assert!(
        free.len() <= MAX_EXHAUSTIVE_WIRES,
        "{} free wires exceed the exhaustive limit of {MAX_EXHAUSTIVE_WIRES}",
        free.len()
    );

    let inputs = 1u64 << free.len();
    for value in 0..inputs {
        let mut initial = BasisState::from_integer(&free, value);
        if !request.cleanliness.is_dirty() {
            for &id in &request.work {
                initial.set(id, false);
            }
        }
        check_state(request, result, &initial)?;
    }
    Ok(inputs as usize)
}
