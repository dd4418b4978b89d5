//! Property-based tests for gate sequences.
//!
//! Tests that inversion, classical evaluation and the dependency DAG agree
//! on random gate lists.

use mcx_ir::{BasisState, ElementaryGate, GateSequence, WireId};
use proptest::prelude::*;

const WIRES: u32 = 6;

/// Generate a random gate over `WIRES` wires with distinct operands.
fn arb_gate() -> impl Strategy<Value = ElementaryGate> {
    let wires = || proptest::sample::subsequence((0..WIRES).collect::<Vec<_>>(), 3).prop_shuffle();
    prop_oneof![
        wires().prop_map(|w| ElementaryGate::not(WireId(w[0]))),
        wires().prop_map(|w| ElementaryGate::cnot(WireId(w[0]), WireId(w[1]))),
        wires().prop_map(|w| ElementaryGate::toffoli(WireId(w[0]), WireId(w[1]), WireId(w[2]))),
        (wires(), any::<bool>()).prop_map(|(w, adjoint)| {
            let gate = ElementaryGate::relative_phase_toffoli(WireId(w[0]), WireId(w[1]), WireId(w[2]));
            if adjoint { gate.inverse() } else { gate }
        }),
    ]
}

fn arb_sequence() -> impl Strategy<Value = GateSequence> {
    prop::collection::vec(arb_gate(), 0..=40)
        .prop_map(|gates| GateSequence::from_gates(gates).unwrap())
}

fn all_wires() -> Vec<WireId> {
    (0..WIRES).map(WireId).collect()
}

proptest! {
    #[test]
    fn sequence_then_inverse_is_identity(seq in arb_sequence(), value in 0u64..(1 << WIRES)) {
        let inverse = GateSequence::from_gates(seq.iter().rev().map(ElementaryGate::inverse)).unwrap();
        let start = BasisState::from_integer(&all_wires(), value);
        let mut state = start.clone();
        seq.simulate(&mut state).unwrap();
        inverse.simulate(&mut state).unwrap();
        prop_assert_eq!(state, start);
    }

    #[test]
    fn layers_partition_gates(seq in arb_sequence()) {
        let dag = seq.dag();
        let layers = dag.layers();
        prop_assert_eq!(layers.len(), seq.depth());
        prop_assert_eq!(layers.iter().map(Vec::len).sum::<usize>(), seq.len());
        for layer in &layers {
            let touched: usize = layer.iter().map(|&i| seq.gates()[i].num_wires()).sum();
            let distinct = GateSequence::from_gates(layer.iter().map(|&i| seq.gates()[i]))
                .unwrap()
                .wires()
                .len();
            prop_assert_eq!(touched, distinct);
        }
    }

    #[test]
    fn toffoli_depth_bounded_by_count(seq in arb_sequence()) {
        let dag = seq.dag();
        prop_assert!(dag.toffoli_depth() <= seq.toffoli_count());
        prop_assert!(dag.toffoli_depth() <= dag.depth());
    }
}
