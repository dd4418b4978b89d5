//! Linear-depth MCX over a single work wire.
//!
//! The construction first ANDs `c[0]` and `c[1]` onto the work wire `a`,
//! then runs a Toffoli ladder that leaves the AND of the remaining controls
//! (complemented pairwise along the way) on one designated control
//! `c[f]`. A single Toffoli `(a, c[f]) -> target` carries the result, and
//! everything before it is mirrored:
//!
//! ```text
//!   clean:  T(c0,c1->a) · L · T(a,c[f]->t) · L† · T(c0,c1->a)
//!   dirty:  clean · L · T(a,c[f]->t) · L†
//! ```
//!
//! With a clean work wire this uses `2n - 3` Toffolis. With a dirty one the
//! trailing block cancels the unknown initial value of `a`, giving `4n - 8`.
//! The controls used as scratch by `L` are restored by `L†`.

use mcx_ir::{Cleanliness, GateSequence, ToffoliForm, WireId};
use tracing::debug;

use crate::error::{RequestError, SynthResult};
use crate::mirror::conjugate;

/// Forward ladder over the controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ladder {
    /// Gates of the forward ladder. Empty for three controls.
    pub gates: GateSequence,
    /// Control holding the ladder's conjunction once `gates` has run.
    pub final_control: WireId,
}

/// Build the forward ladder over `controls` (at least three).
///
/// Every step is a Toffoli followed by a NOT on its target; the targets are
/// controls, which the mirrored ladder restores.
pub fn ladder_ops(controls: &[WireId], form: ToffoliForm) -> SynthResult<Ladder> {
    let n = controls.len();
    if n < 3 {
        return Err(RequestError::TooFewControls { got: n, min: 3 }.into());
    }
    let c = controls;
    let mut gates = GateSequence::new();

    // --- Up the odd positions ---
    for i in (1..n - 2).step_by(2) {
        gates.toffoli(form, c[i + 1], c[i + 2], c[i])?.x(c[i])?;
    }

    // --- Bridge, then back down the even positions ---
    let bridge = if n % 2 == 0 {
        (n >= 6).then(|| (n - 3, n - 5, n - 6))
    } else {
        (n >= 5).then(|| (n - 1, n - 4, n - 5))
    };
    if let Some((hi, lo, t)) = bridge {
        gates.toffoli(form, c[hi], c[lo], c[t])?.x(c[t])?;
        let mut i = t;
        while i > 1 {
            gates.toffoli(form, c[i], c[i - 1], c[i - 2])?.x(c[i - 2])?;
            i -= 2;
        }
    }

    Ok(Ladder {
        gates,
        final_control: c[5usize.saturating_sub(n)],
    })
}

/// Builder for the linear-depth construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LadderBuilder {
    form: ToffoliForm,
}

impl LadderBuilder {
    /// Create a builder emitting ladder steps in the given Toffoli form.
    ///
    /// The outer `(c0, c1) -> a` pair and the middle Toffoli are always
    /// plain.
    pub fn new(form: ToffoliForm) -> Self {
        Self { form }
    }

    /// Get the Toffoli form used for ladder steps.
    pub fn form(&self) -> ToffoliForm {
        self.form
    }

    /// Synthesize an MCX on `target` controlled by `controls` (at least
    /// three), using `work` as scratch.
    pub fn build(
        &self,
        controls: &[WireId],
        target: WireId,
        work: WireId,
        cleanliness: Cleanliness,
    ) -> SynthResult<GateSequence> {
        let ladder = ladder_ops(controls, self.form)?;

        let mut middle = GateSequence::new();
        middle.ccx(work, ladder.final_control, target)?;
        let block = conjugate(&ladder.gates, &middle)?;

        let mut seq = GateSequence::new();
        seq.ccx(controls[0], controls[1], work)?;
        seq.append(&block);
        seq.ccx(controls[0], controls[1], work)?;
        if cleanliness.is_dirty() {
            seq.append(&block);
        }

        debug!(
            n_controls = controls.len(),
            %cleanliness,
            toffolis = seq.toffoli_count(),
            "built linear ladder"
        );
        Ok(seq)
    }
}
