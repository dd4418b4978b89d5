//! Classical basis-state evaluation.
//!
//! Every gate in the vocabulary is a permutation of computational basis
//! states (up to phase), so the bit action of a sequence can be checked by
//! pushing one classical assignment through it. Relative phases are not
//! observable here.

use rustc_hash::FxHashMap;

use crate::error::{IrError, IrResult};
use crate::gate::ElementaryGate;
use crate::wire::WireId;

/// An assignment of one bit to each wire.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasisState {
    bits: FxHashMap<WireId, bool>,
}

impl BasisState {
    /// Create an empty assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assignment from `(wire, bit)` pairs.
    pub fn from_bits(bits: impl IntoIterator<Item = (WireId, bool)>) -> Self {
        Self {
            bits: bits.into_iter().collect(),
        }
    }

    /// Assign the low bits of `value` to `wires`, least significant first.
    pub fn from_integer(wires: &[WireId], value: u64) -> Self {
        Self::from_bits(
            wires
                .iter()
                .enumerate()
                .map(|(i, &w)| (w, (value >> i) & 1 == 1)),
        )
    }

    /// Set the bit of a wire.
    pub fn set(&mut self, wire: WireId, bit: bool) {
        self.bits.insert(wire, bit);
    }

    /// Get the bit of a wire.
    pub fn get(&self, wire: WireId) -> IrResult<bool> {
        self.bits
            .get(&wire)
            .copied()
            .ok_or(IrError::WireNotFound {
                wire,
                gate_name: None,
            })
    }

    /// Number of wires with an assigned bit.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Check if no wire has an assigned bit.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Apply the bit action of one gate.
    pub fn apply(&mut self, gate: &ElementaryGate) -> IrResult<()> {
        let lookup = |state: &Self, wire: WireId| {
            state.bits.get(&wire).copied().ok_or(IrError::WireNotFound {
                wire,
                gate_name: Some(gate.name().to_string()),
            })
        };

        let mut fire = true;
        for control in gate.controls() {
            fire &= lookup(self, control)?;
        }
        let target = gate.target();
        let current = lookup(self, target)?;
        if fire {
            self.bits.insert(target, !current);
        }
        Ok(())
    }

    /// Apply a list of gates in order.
    pub fn apply_all<'a>(
        &mut self,
        gates: impl IntoIterator<Item = &'a ElementaryGate>,
    ) -> IrResult<()> {
        for gate in gates {
            self.apply(gate)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(i: u32) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_from_integer() {
        let state = BasisState::from_integer(&[w(0), w(1), w(2)], 0b101);
        assert_eq!(state.get(w(0)), Ok(true));
        assert_eq!(state.get(w(1)), Ok(false));
        assert_eq!(state.get(w(2)), Ok(true));
        assert_eq!(state.len(), 3);
    }

    #[test]
    fn test_toffoli_action() {
        let gate = ElementaryGate::toffoli(w(0), w(1), w(2));
        for value in 0..8u64 {
            let mut state = BasisState::from_integer(&[w(0), w(1), w(2)], value);
            state.apply(&gate).unwrap();
            let expected = ((value >> 2) & 1 == 1) ^ (value & 0b11 == 0b11);
            assert_eq!(state.get(w(2)).unwrap(), expected, "input {value:03b}");
        }
    }

    #[test]
    fn test_relative_phase_matches_toffoli_bits() {
        let plain = ElementaryGate::toffoli(w(0), w(1), w(2));
        let rel = ElementaryGate::relative_phase_toffoli(w(0), w(1), w(2));
        for value in 0..8u64 {
            let mut a = BasisState::from_integer(&[w(0), w(1), w(2)], value);
            let mut b = a.clone();
            a.apply(&plain).unwrap();
            b.apply(&rel.inverse()).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_missing_wire() {
        let mut state = BasisState::from_integer(&[w(0)], 1);
        let err = state.apply(&ElementaryGate::cnot(w(0), w(9))).unwrap_err();
        assert_eq!(
            err,
            IrError::WireNotFound {
                wire: w(9),
                gate_name: Some("cx".into())
            }
        );
    }
}
