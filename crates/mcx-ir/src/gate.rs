//! Elementary reversible gate types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};
use crate::wire::WireId;

/// The closed vocabulary of gates a synthesizer may emit.
///
/// Every variant carries exactly the wires it acts on, controls first and
/// target last. Gates are immutable values; ordering only matters inside a
/// [`GateSequence`](crate::GateSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "gate", rename_all = "snake_case")]
pub enum ElementaryGate {
    /// Bit flip (Pauli-X).
    Not {
        /// The flipped wire.
        target: WireId,
    },
    /// Controlled-NOT (CX).
    ControlledNot {
        /// The control wire.
        control: WireId,
        /// The target wire.
        target: WireId,
    },
    /// Toffoli gate (CCX). Self-inverse.
    Toffoli {
        /// First control wire.
        control1: WireId,
        /// Second control wire.
        control2: WireId,
        /// The target wire.
        target: WireId,
    },
    /// Toffoli up to a diagonal phase on its three wires.
    ///
    /// The bit action equals [`ElementaryGate::Toffoli`]; the phase is only
    /// cancelled by a later gate of the opposite `adjoint` flag on the same
    /// wires.
    RelativePhaseToffoli {
        /// First control wire.
        control1: WireId,
        /// Second control wire.
        control2: WireId,
        /// The target wire.
        target: WireId,
        /// Whether this is the adjoint form.
        adjoint: bool,
    },
}

impl ElementaryGate {
    /// Create a NOT gate.
    #[inline]
    pub fn not(target: WireId) -> Self {
        ElementaryGate::Not { target }
    }

    /// Create a controlled-NOT gate.
    #[inline]
    pub fn cnot(control: WireId, target: WireId) -> Self {
        ElementaryGate::ControlledNot { control, target }
    }

    /// Create a Toffoli gate.
    #[inline]
    pub fn toffoli(control1: WireId, control2: WireId, target: WireId) -> Self {
        ElementaryGate::Toffoli {
            control1,
            control2,
            target,
        }
    }

    /// Create a (non-adjoint) relative-phase Toffoli gate.
    #[inline]
    pub fn relative_phase_toffoli(control1: WireId, control2: WireId, target: WireId) -> Self {
        ElementaryGate::RelativePhaseToffoli {
            control1,
            control2,
            target,
            adjoint: false,
        }
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            ElementaryGate::Not { .. } => "x",
            ElementaryGate::ControlledNot { .. } => "cx",
            ElementaryGate::Toffoli { .. } => "ccx",
            ElementaryGate::RelativePhaseToffoli { adjoint: false, .. } => "rccx",
            ElementaryGate::RelativePhaseToffoli { adjoint: true, .. } => "rccxdg",
        }
    }

    /// Get the number of wires this gate acts on.
    #[inline]
    pub fn num_wires(&self) -> usize {
        match self {
            ElementaryGate::Not { .. } => 1,
            ElementaryGate::ControlledNot { .. } => 2,
            ElementaryGate::Toffoli { .. } | ElementaryGate::RelativePhaseToffoli { .. } => 3,
        }
    }

    /// The wire whose bit this gate may flip.
    #[inline]
    pub fn target(&self) -> WireId {
        match *self {
            ElementaryGate::Not { target }
            | ElementaryGate::ControlledNot { target, .. }
            | ElementaryGate::Toffoli { target, .. }
            | ElementaryGate::RelativePhaseToffoli { target, .. } => target,
        }
    }

    /// The control wires, in declaration order.
    pub fn controls(&self) -> Vec<WireId> {
        match *self {
            ElementaryGate::Not { .. } => vec![],
            ElementaryGate::ControlledNot { control, .. } => vec![control],
            ElementaryGate::Toffoli {
                control1, control2, ..
            }
            | ElementaryGate::RelativePhaseToffoli {
                control1, control2, ..
            } => vec![control1, control2],
        }
    }

    /// All wires this gate acts on, controls first.
    pub fn wires(&self) -> Vec<WireId> {
        let mut wires = self.controls();
        wires.push(self.target());
        wires
    }

    /// Check whether this gate touches `wire`.
    pub fn acts_on(&self, wire: WireId) -> bool {
        self.target() == wire || self.controls().contains(&wire)
    }

    /// Check if this is a Toffoli-class (3-wire) gate.
    #[inline]
    pub fn is_toffoli_class(&self) -> bool {
        matches!(
            self,
            ElementaryGate::Toffoli { .. } | ElementaryGate::RelativePhaseToffoli { .. }
        )
    }

    /// Check if this gate equals its own inverse.
    #[inline]
    pub fn is_self_inverse(&self) -> bool {
        !matches!(self, ElementaryGate::RelativePhaseToffoli { .. })
    }

    /// The inverse gate.
    ///
    /// NOT, CNOT and Toffoli are self-inverse. A relative-phase Toffoli maps
    /// to its adjoint, which carries the conjugate phase on the same wires.
    #[must_use]
    pub fn inverse(&self) -> Self {
        match *self {
            ElementaryGate::RelativePhaseToffoli {
                control1,
                control2,
                target,
                adjoint,
            } => ElementaryGate::RelativePhaseToffoli {
                control1,
                control2,
                target,
                adjoint: !adjoint,
            },
            other => other,
        }
    }

    /// Check that no wire appears twice in this gate.
    pub fn validate(&self) -> IrResult<()> {
        let wires = self.wires();
        for (i, wire) in wires.iter().enumerate() {
            if wires[..i].contains(wire) {
                return Err(IrError::DuplicateWire {
                    wire: *wire,
                    gate_name: Some(self.name().to_string()),
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for ElementaryGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())?;
        for (i, wire) in self.wires().iter().enumerate() {
            let sep = if i == 0 { " " } else { ", " };
            write!(f, "{sep}{wire}")?;
        }
        Ok(())
    }
}

/// Which Toffoli variant a builder emits for its compute/uncompute ladders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToffoliForm {
    /// Exact Toffoli.
    #[default]
    Plain,
    /// Relative-phase Toffoli; only valid where a mirrored adjoint follows.
    RelativePhase,
}

impl ToffoliForm {
    /// Build a gate of this form.
    #[inline]
    pub fn gate(self, control1: WireId, control2: WireId, target: WireId) -> ElementaryGate {
        match self {
            ToffoliForm::Plain => ElementaryGate::toffoli(control1, control2, target),
            ToffoliForm::RelativePhase => {
                ElementaryGate::relative_phase_toffoli(control1, control2, target)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(i: u32) -> WireId {
        WireId(i)
    }

    #[test]
    fn test_gate_properties() {
        assert_eq!(ElementaryGate::not(w(0)).num_wires(), 1);
        assert_eq!(ElementaryGate::cnot(w(0), w(1)).num_wires(), 2);
        assert_eq!(ElementaryGate::toffoli(w(0), w(1), w(2)).num_wires(), 3);

        let rccx = ElementaryGate::relative_phase_toffoli(w(0), w(1), w(2));
        assert_eq!(rccx.name(), "rccx");
        assert_eq!(rccx.wires(), vec![w(0), w(1), w(2)]);
        assert_eq!(rccx.target(), w(2));
        assert!(rccx.is_toffoli_class());
        assert!(!ElementaryGate::cnot(w(0), w(1)).is_toffoli_class());
    }

    #[test]
    fn test_inverse_mapping() {
        let ccx = ElementaryGate::toffoli(w(0), w(1), w(2));
        assert_eq!(ccx.inverse(), ccx);
        assert!(ccx.is_self_inverse());

        let rccx = ElementaryGate::relative_phase_toffoli(w(0), w(1), w(2));
        let rccxdg = rccx.inverse();
        assert_ne!(rccxdg, rccx);
        assert_eq!(rccxdg.name(), "rccxdg");
        assert_eq!(rccxdg.wires(), rccx.wires());
        assert_eq!(rccxdg.inverse(), rccx);
    }

    #[test]
    fn test_validate_duplicate_wire() {
        assert!(ElementaryGate::toffoli(w(0), w(1), w(2)).validate().is_ok());
        let err = ElementaryGate::toffoli(w(0), w(2), w(2)).validate().unwrap_err();
        assert_eq!(
            err,
            IrError::DuplicateWire {
                wire: w(2),
                gate_name: Some("ccx".into())
            }
        );
        assert!(ElementaryGate::cnot(w(4), w(4)).validate().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ElementaryGate::toffoli(w(0), w(1), w(5)).to_string(),
            "ccx w0, w1, w5"
        );
        assert_eq!(ElementaryGate::not(w(3)).to_string(), "x w3");
    }

    #[test]
    fn test_toffoli_form() {
        assert_eq!(
            ToffoliForm::Plain.gate(w(0), w(1), w(2)),
            ElementaryGate::toffoli(w(0), w(1), w(2))
        );
        assert_eq!(ToffoliForm::RelativePhase.gate(w(0), w(1), w(2)).name(), "rccx");
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_string(&ElementaryGate::cnot(w(0), w(1))).unwrap();
        assert_eq!(json, r#"{"gate":"controlled_not","control":0,"target":1}"#);

        let gate: ElementaryGate = serde_json::from_str(
            r#"{"gate":"relative_phase_toffoli","control1":0,"control2":1,"target":2,"adjoint":true}"#,
        )
        .unwrap();
        assert_eq!(gate.name(), "rccxdg");
    }
}
