//! Compute/uncompute pairing.
//!
//! Every work wire a builder toggles is returned by running the same gates
//! backwards. These helpers make that pairing structural: a forward block
//! is only ever emitted together with its mirror.

use mcx_ir::{ElementaryGate, GateSequence};

use crate::error::SynthResult;

/// Reverse `forward` and invert each gate.
///
/// Plain gates are self-inverse; a relative-phase Toffoli becomes its
/// adjoint, so `forward` followed by `mirror(forward)` is the identity.
pub fn mirror(forward: &GateSequence) -> SynthResult<GateSequence> {
    let gates = forward.iter().rev().map(ElementaryGate::inverse);
    Ok(GateSequence::from_gates(gates)?)
}

/// Emit `forward`, then `middle`, then `mirror(forward)`.
pub fn conjugate(forward: &GateSequence, middle: &GateSequence) -> SynthResult<GateSequence> {
    let mut seq = forward.clone();
    seq.append(middle).append(&mirror(forward)?);
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcx_ir::{BasisState, WireId};

    fn w(i: u32) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_mirror_reverses_and_inverts() {
        let mut forward = GateSequence::new();
        forward
            .rccx(w(0), w(1), w(2))
            .unwrap()
            .x(w(2))
            .unwrap()
            .ccx(w(2), w(3), w(4))
            .unwrap();

        let back = mirror(&forward).unwrap();
        let names: Vec<&str> = back.iter().map(ElementaryGate::name).collect();
        assert_eq!(names, vec!["ccx", "x", "rccxdg"]);
        assert_eq!(mirror(&back).unwrap(), forward);
    }

    #[test]
    fn test_conjugate_restores_scratch() {
        let (a, b, s, t) = (w(0), w(1), w(2), w(3));
        let mut forward = GateSequence::new();
        forward.ccx(a, b, s).unwrap();
        let mut middle = GateSequence::new();
        middle.cx(s, t).unwrap();

        let seq = conjugate(&forward, &middle).unwrap();
        assert_eq!(seq.len(), 3);

        for value in 0..16u64 {
            let mut state = BasisState::from_integer(&[a, b, s, t], value);
            seq.simulate(&mut state).unwrap();
            let start = BasisState::from_integer(&[a, b, s, t], value);
            assert_eq!(state.get(s), start.get(s));
            // The middle reads the scratch wire, initial value included.
            let flip = start.get(s).unwrap() ^ (start.get(a).unwrap() && start.get(b).unwrap());
            assert_eq!(state.get(t).unwrap(), start.get(t).unwrap() ^ flip);
        }
    }

    #[test]
    fn test_empty_forward() {
        let mut middle = GateSequence::new();
        middle.x(w(0)).unwrap();
        assert_eq!(conjugate(&GateSequence::new(), &middle).unwrap(), middle);
    }
}
