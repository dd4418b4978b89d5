//! Property-based tests for MCX synthesis.
//!
//! Exhaustive truth tables stop being practical past a dozen controls, so
//! these tests draw random basis inputs at larger widths and random wire
//! labels.

use mcx_ir::{BasisState, Cleanliness, WireId};
use mcx_synth::verify::{check, check_state};
use mcx_synth::{SynthesisRequest, synthesize};
use proptest::prelude::*;
use proptest::sample::subsequence;

/// A request over `n` controls with distinct, shuffled random labels.
fn arb_request() -> impl Strategy<Value = SynthesisRequest> {
    (3_usize..=48, 1_usize..=2, any::<bool>()).prop_flat_map(|(n, work, dirty)| {
        let labels: Vec<u32> = (0..512).collect();
        subsequence(labels, n + 1 + work)
            .prop_shuffle()
            .prop_map(move |labels| {
                let ids: Vec<WireId> = labels.into_iter().map(WireId).collect();
                let cleanliness = if dirty {
                    Cleanliness::Dirty
                } else {
                    Cleanliness::Clean
                };
                SynthesisRequest::new(ids[..n].iter().copied(), ids[n])
                    .with_work(ids[n + 1..].iter().copied())
                    .with_cleanliness(cleanliness)
            })
    })
}

/// A request plus one random initial assignment honouring its promises.
fn arb_case() -> impl Strategy<Value = (SynthesisRequest, BasisState)> {
    arb_request().prop_flat_map(|req| {
        let wires = req.wires();
        (Just(req), prop::collection::vec(any::<bool>(), wires.len())).prop_map(
            |(req, bits)| {
                let mut state = BasisState::new();
                for (wire, bit) in req.wires().iter().zip(bits) {
                    state.set(wire.id, bit);
                }
                if req.cleanliness == Cleanliness::Clean {
                    for &w in &req.work {
                        state.set(w, false);
                    }
                }
                (req, state)
            },
        )
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn random_inputs_are_handled_correctly((req, initial) in arb_case()) {
        let result = synthesize(&req).unwrap();
        prop_assert!(check_state(&req, &result, &initial).is_ok());
    }

    #[test]
    fn all_controls_on_flips_target((req, mut initial) in arb_case()) {
        // Skewed inputs: the all-ones case is vanishingly rare above.
        for &c in &req.controls {
            initial.set(c, true);
        }
        let result = synthesize(&req).unwrap();
        let mut state = initial.clone();
        result.gates.simulate(&mut state).unwrap();
        prop_assert_eq!(state.get(req.target), initial.get(req.target).map(|t| !t));
        prop_assert!(check_state(&req, &result, &initial).is_ok());
    }

    #[test]
    fn cost_meets_closed_form(req in arb_request()) {
        let result = synthesize(&req).unwrap();
        prop_assert!(check(&result).passed());
    }
}
