//! Ordered gate lists with a fluent builder API.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::dag::GateDag;
use crate::error::IrResult;
use crate::gate::{ElementaryGate, ToffoliForm};
use crate::state::BasisState;
use crate::wire::WireId;

/// An ordered list of elementary gates forming a circuit fragment.
///
/// Concatenation ([`GateSequence::append`]) is the only composition
/// operator. Order is significant: two gates may only be swapped when they
/// act on disjoint wires.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GateSequence {
    gates: Vec<ElementaryGate>,
}

impl GateSequence {
    /// Create a new empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence from already-validated gates.
    pub fn from_gates(gates: impl IntoIterator<Item = ElementaryGate>) -> IrResult<Self> {
        let mut seq = Self::new();
        for gate in gates {
            seq.push(gate)?;
        }
        Ok(seq)
    }

    // =========================================================================
    // Builders
    // =========================================================================

    /// Append a gate after checking its wires are distinct.
    pub fn push(&mut self, gate: ElementaryGate) -> IrResult<&mut Self> {
        gate.validate()?;
        self.gates.push(gate);
        Ok(self)
    }

    /// Apply NOT.
    pub fn x(&mut self, target: WireId) -> IrResult<&mut Self> {
        self.push(ElementaryGate::not(target))
    }

    /// Apply CNOT.
    pub fn cx(&mut self, control: WireId, target: WireId) -> IrResult<&mut Self> {
        self.push(ElementaryGate::cnot(control, target))
    }

    /// Apply Toffoli.
    pub fn ccx(&mut self, c1: WireId, c2: WireId, target: WireId) -> IrResult<&mut Self> {
        self.push(ElementaryGate::toffoli(c1, c2, target))
    }

    /// Apply relative-phase Toffoli.
    pub fn rccx(&mut self, c1: WireId, c2: WireId, target: WireId) -> IrResult<&mut Self> {
        self.push(ElementaryGate::relative_phase_toffoli(c1, c2, target))
    }

    /// Apply a Toffoli of the given form.
    pub fn toffoli(
        &mut self,
        form: ToffoliForm,
        c1: WireId,
        c2: WireId,
        target: WireId,
    ) -> IrResult<&mut Self> {
        self.push(form.gate(c1, c2, target))
    }

    /// Concatenate `other` onto the end of this sequence.
    pub fn append(&mut self, other: &GateSequence) -> &mut Self {
        self.gates.extend_from_slice(&other.gates);
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the gates in order.
    pub fn gates(&self) -> &[ElementaryGate] {
        &self.gates
    }

    /// Iterate over the gates in order.
    pub fn iter(&self) -> std::slice::Iter<'_, ElementaryGate> {
        self.gates.iter()
    }

    /// Number of gates.
    pub fn len(&self) -> usize {
        self.gates.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.gates.is_empty()
    }

    /// Consume the sequence and return its gates.
    pub fn into_gates(self) -> Vec<ElementaryGate> {
        self.gates
    }

    /// A copy of this sequence without its first `n` gates.
    #[must_use]
    pub fn skip(&self, n: usize) -> Self {
        Self {
            gates: self.gates.iter().skip(n).copied().collect(),
        }
    }

    /// Number of Toffoli-class gates (plain and relative-phase).
    pub fn toffoli_count(&self) -> usize {
        self.gates.iter().filter(|g| g.is_toffoli_class()).count()
    }

    /// Number of gates with the given name.
    pub fn count_named(&self, name: &str) -> usize {
        self.gates.iter().filter(|g| g.name() == name).count()
    }

    /// Get the circuit depth.
    pub fn depth(&self) -> usize {
        self.dag().depth()
    }

    /// Build the wire-dependency DAG of this sequence.
    pub fn dag(&self) -> GateDag {
        GateDag::from_gates(&self.gates)
    }

    /// Set of wires touched by at least one gate.
    pub fn wires(&self) -> FxHashSet<WireId> {
        self.gates.iter().flat_map(ElementaryGate::wires).collect()
    }

    /// Check whether any gate writes to `wire`.
    pub fn writes(&self, wire: WireId) -> bool {
        self.gates.iter().any(|g| g.target() == wire)
    }

    /// Push a basis state through every gate.
    pub fn simulate(&self, state: &mut BasisState) -> IrResult<()> {
        state.apply_all(&self.gates)
    }
}

impl fmt::Display for GateSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for gate in &self.gates {
            writeln!(f, "{gate};")?;
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a GateSequence {
    type Item = &'a ElementaryGate;
    type IntoIter = std::slice::Iter<'a, ElementaryGate>;

    fn into_iter(self) -> Self::IntoIter {
        self.gates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IrError;

    fn w(i: u32) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_fluent_api() {
        let mut seq = GateSequence::new();
        seq.ccx(w(0), w(1), w(2))
            .unwrap()
            .x(w(2))
            .unwrap()
            .cx(w(2), w(3))
            .unwrap();

        assert_eq!(seq.len(), 3);
        assert_eq!(seq.toffoli_count(), 1);
        assert_eq!(seq.depth(), 3);
        assert_eq!(seq.to_string(), "ccx w0, w1, w2;\nx w2;\ncx w2, w3;\n");
    }

    #[test]
    fn test_push_rejects_duplicate_wires() {
        let mut seq = GateSequence::new();
        let err = seq.ccx(w(0), w(0), w(1)).unwrap_err();
        assert!(matches!(err, IrError::DuplicateWire { wire, .. } if wire == w(0)));
        assert!(seq.is_empty());
    }

    #[test]
    fn test_append_and_skip() {
        let mut a = GateSequence::new();
        a.ccx(w(0), w(1), w(2)).unwrap();
        let mut b = GateSequence::new();
        b.rccx(w(3), w(4), w(5)).unwrap().x(w(5)).unwrap();

        a.append(&b);
        assert_eq!(a.len(), 3);
        assert_eq!(a.toffoli_count(), 2);
        assert_eq!(a.count_named("rccx"), 1);
        assert_eq!(a.skip(1), b);
        assert_eq!(a.wires().len(), 6);
        assert!(a.writes(w(5)));
        assert!(!a.writes(w(0)));
    }

    #[test]
    fn test_simulate() {
        let mut seq = GateSequence::new();
        seq.ccx(w(0), w(1), w(2)).unwrap();

        let mut state = BasisState::from_integer(&[w(0), w(1), w(2)], 0b011);
        seq.simulate(&mut state).unwrap();
        assert_eq!(state.get(w(2)), Ok(true));
    }
}
