//! Request validation and work-wire bookkeeping.
//!
//! The allocator turns a [`SynthesisRequest`] into an [`Allocation`]: the
//! canonically ordered controls, the work wires tagged with the obligation
//! each one carries back to the caller, and the construction to run.

use mcx_ir::{Cleanliness, WireId, WireRole};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::{ControlOrder, SynthesisConfig};
use crate::error::RequestError;
use crate::request::{Strategy, SynthesisRequest};

/// What must hold for a work wire once the emitted sequence has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Obligation {
    /// The wire started at 0 and must end at 0.
    ResetToZero,
    /// The wire started in an unknown state and must end in that state.
    RestoreInitial,
}

/// A borrowed work wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorkWire {
    /// Caller-supplied wire.
    pub id: WireId,
    /// Promised state on entry.
    pub cleanliness: Cleanliness,
}

impl WorkWire {
    /// Obligation this wire carries.
    pub fn obligation(&self) -> Obligation {
        match self.cleanliness {
            Cleanliness::Clean => Obligation::ResetToZero,
            Cleanliness::Dirty => Obligation::RestoreInitial,
        }
    }

    /// Check the wire's final bit against its obligation.
    pub fn is_restored(&self, initial: bool, final_bit: bool) -> bool {
        match self.obligation() {
            Obligation::ResetToZero => !initial && !final_bit,
            Obligation::RestoreInitial => initial == final_bit,
        }
    }
}

/// A validated request ready for a builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Allocation {
    /// Controls in canonical order.
    pub controls: Vec<WireId>,
    /// Target wire.
    pub target: WireId,
    /// Work wires in caller order.
    pub work: Vec<WorkWire>,
    /// Promised state of the work wires.
    pub cleanliness: Cleanliness,
    /// Construction to run.
    pub strategy: Strategy,
}

impl Allocation {
    /// Number of controls.
    pub fn num_controls(&self) -> usize {
        self.controls.len()
    }
}

/// Validate `request` and pick a construction.
///
/// Checks run in a fixed order: work-wire count, wire distinctness, then
/// control count.
pub fn allocate(
    request: &SynthesisRequest,
    config: &SynthesisConfig,
) -> Result<Allocation, RequestError> {
    let work_count = request.work.len();
    if !(1..=2).contains(&work_count) {
        return Err(RequestError::WorkWireCount(work_count));
    }

    check_distinct(request)?;

    let n = request.num_controls();
    let min = config.min_controls();
    if n < min {
        return Err(RequestError::TooFewControls { got: n, min });
    }

    let mut controls = request.controls.clone();
    if config.control_order == ControlOrder::Ascending {
        controls.sort_unstable();
    }

    let strategy = match (n, work_count) {
        (0, _) => Strategy::Not,
        (1, _) => Strategy::ControlledNot,
        (2, _) => Strategy::Toffoli,
        (3, _) | (_, 1) => Strategy::Ladder,
        _ => Strategy::BalancedTree,
    };

    let work = request
        .work
        .iter()
        .map(|&id| WorkWire {
            id,
            cleanliness: request.cleanliness,
        })
        .collect();

    debug!(
        n_controls = n,
        n_work = work_count,
        cleanliness = %request.cleanliness,
        %strategy,
        "allocated request"
    );

    Ok(Allocation {
        controls,
        target: request.target,
        work,
        cleanliness: request.cleanliness,
        strategy,
    })
}

fn check_distinct(request: &SynthesisRequest) -> Result<(), RequestError> {
    let mut seen: FxHashMap<WireId, WireRole> = FxHashMap::default();
    for wire in request.wires() {
        if let Some(&first) = seen.get(&wire.id) {
            return Err(RequestError::DuplicateWire {
                wire: wire.id,
                first,
                second: wire.role,
            });
        }
        seen.insert(wire.id, wire.role);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(i: u32) -> WireId {
        WireId(i)
    }

    fn request(n: u32, work: &[u32]) -> SynthesisRequest {
        SynthesisRequest::new((0..n).map(w), w(100)).with_work(work.iter().copied().map(w))
    }

    #[test]
    fn test_strategy_selection() {
        let config = SynthesisConfig::default();
        let pick = |n, work: &[u32]| allocate(&request(n, work), &config).unwrap().strategy;
        assert_eq!(pick(0, &[200]), Strategy::Not);
        assert_eq!(pick(1, &[200]), Strategy::ControlledNot);
        assert_eq!(pick(2, &[200, 201]), Strategy::Toffoli);
        assert_eq!(pick(3, &[200, 201]), Strategy::Ladder);
        assert_eq!(pick(8, &[200]), Strategy::Ladder);
        assert_eq!(pick(4, &[200, 201]), Strategy::BalancedTree);
    }

    #[test]
    fn test_work_count_checked_first() {
        let config = SynthesisConfig::default();
        // Also has a duplicate and too few controls.
        let req = SynthesisRequest::new([w(0)], w(0));
        assert_eq!(
            allocate(&req, &config),
            Err(RequestError::WorkWireCount(0))
        );
        let req = request(4, &[200, 201, 202]);
        assert_eq!(
            allocate(&req, &config),
            Err(RequestError::WorkWireCount(3))
        );
    }

    #[test]
    fn test_duplicate_reports_roles() {
        let config = SynthesisConfig::default();
        let req = SynthesisRequest::new([w(0), w(1), w(2)], w(3)).with_work([w(1)]);
        assert_eq!(
            allocate(&req, &config),
            Err(RequestError::DuplicateWire {
                wire: w(1),
                first: WireRole::Control,
                second: WireRole::Work(Cleanliness::Clean),
            })
        );

        let req = SynthesisRequest::new([w(0), w(0)], w(3)).with_work([w(4)]);
        assert!(matches!(
            allocate(&req, &config),
            Err(RequestError::DuplicateWire { first: WireRole::Control, second: WireRole::Control, .. })
        ));
    }

    #[test]
    fn test_degenerate_rejected_when_disabled() {
        let config = SynthesisConfig {
            allow_degenerate: false,
            ..SynthesisConfig::default()
        };
        assert_eq!(
            allocate(&request(1, &[200]), &config),
            Err(RequestError::TooFewControls { got: 1, min: 2 })
        );
        assert!(allocate(&request(2, &[200]), &config).is_ok());
    }

    #[test]
    fn test_ascending_order() {
        let config = SynthesisConfig {
            control_order: ControlOrder::Ascending,
            ..SynthesisConfig::default()
        };
        let req = SynthesisRequest::new([w(9), w(2), w(5)], w(0)).with_work([w(1)]);
        let alloc = allocate(&req, &config).unwrap();
        assert_eq!(alloc.controls, vec![w(2), w(5), w(9)]);
    }

    #[test]
    fn test_obligations() {
        let clean = WorkWire { id: w(0), cleanliness: Cleanliness::Clean };
        let dirty = WorkWire { id: w(0), cleanliness: Cleanliness::Dirty };
        assert_eq!(clean.obligation(), Obligation::ResetToZero);
        assert_eq!(dirty.obligation(), Obligation::RestoreInitial);
        assert!(clean.is_restored(false, false));
        assert!(!clean.is_restored(false, true));
        assert!(dirty.is_restored(true, true));
        assert!(!dirty.is_restored(true, false));
    }
}
