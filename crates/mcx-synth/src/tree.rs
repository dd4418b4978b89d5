//! Logarithmic-depth MCX over two work wires.
//!
//! The controls are combined in a balanced tree of Toffolis. Every node
//! writes the AND of two wires onto a *conditionally clean* wire: a control
//! that has already been folded into some other node, so its own value is
//! no longer needed until the mirror restores it. The first node writes onto
//! the work wire `w0` and is the only gate that ever touches `w0` on the way
//! up.
//!
//! Controls are consumed in rounds. A round takes as many fresh controls as
//! there are free wires plus one and reduces them pairwise, level by level,
//! until one survivor remains. Within a level the Toffolis act on disjoint
//! wires. When a level has an odd number of inputs, the leading one skips
//! the level and joins the next.
//!
//! The survivors of all rounds (plus `w0`) are ANDed onto the target by a
//! single Toffoli or, when several survive, by a linear ladder through `w1`.
//! `w0` only enters that ladder through its outer `(w0, s0) -> w1` pair; the
//! ladder body borrows the first control instead, which later rounds never
//! overwrite. Whatever `w1` holds therefore meets the same ladder value in
//! both passes of the dirty construction and cancels. The tree is then
//! mirrored.

use mcx_ir::{Cleanliness, GateSequence, ToffoliForm, WireId};
use tracing::{debug, trace};

use crate::error::{RequestError, SynthResult};
use crate::ladder::ladder_ops;
use crate::mirror::conjugate;

/// One round of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeRound {
    /// Gates of each level. Toffolis within a level share no wire.
    pub levels: Vec<GateSequence>,
}

impl TreeRound {
    /// Number of levels in this round.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

/// The forward half of the tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConditionallyCleanTree {
    /// Rounds in emission order.
    pub rounds: Vec<TreeRound>,
    /// Controls still holding a partial conjunction when the tree is done,
    /// in ascending slot order. `w0` is not listed.
    pub final_controls: Vec<WireId>,
    /// Control fed into the creation gate and never targeted afterwards.
    /// It holds its input bit for as long as the tree is applied.
    pub pinned: WireId,
}

impl ConditionallyCleanTree {
    /// All forward gates in order. The first gate writes onto `w0`.
    pub fn forward(&self) -> GateSequence {
        let mut seq = GateSequence::new();
        for level in self.rounds.iter().flat_map(|r| &r.levels) {
            seq.append(level);
        }
        seq
    }

    /// Number of rounds.
    pub fn num_rounds(&self) -> usize {
        self.rounds.len()
    }
}

/// Build the forward tree over `controls` (at least two) with `work` as the
/// first node's target.
pub fn build_tree(
    controls: &[WireId],
    work: WireId,
    form: ToffoliForm,
) -> SynthResult<ConditionallyCleanTree> {
    let n = controls.len();
    if n < 2 {
        return Err(RequestError::TooFewControls { got: n, min: 2 }.into());
    }

    // Slots 0..n are controls, slot n is the work wire.
    let wire = |slot: usize| if slot == n { work } else { controls[slot] };

    let mut free = vec![n];
    let mut final_slots: Vec<usize> = Vec::new();
    let mut rounds = Vec::new();
    let mut cursor = 0;

    while n - cursor > 1 {
        let take = (free.len() + 1).min(n - cursor);
        let mut batch: Vec<usize> = (cursor..cursor + take).collect();
        cursor += take;

        let mut levels = Vec::new();
        let mut consumed = Vec::new();
        while batch.len() > 1 {
            let pairs = batch.len() / 2;
            let bye = batch.len() % 2;
            let targets = free.split_off(free.len() - pairs);

            let mut level = GateSequence::new();
            for (k, &t) in targets.iter().enumerate() {
                let (x, y) = (batch[bye + k], batch[bye + pairs + k]);
                // Controls still hold their input bit; complement before
                // the AND so the mirror can undo both.
                if t != n {
                    level.x(wire(t))?;
                }
                level.toffoli(form, wire(x), wire(y), wire(t))?;
            }
            levels.push(level);

            consumed.extend_from_slice(&batch[bye..]);
            let mut next = targets;
            next.extend_from_slice(&batch[..bye]);
            batch = next;
        }

        if rounds.is_empty() {
            // Slot 0 stays out of the free list for good.
            consumed.retain(|&s| s != 0);
        }
        trace!(
            round = rounds.len(),
            take,
            levels = levels.len(),
            "tree round"
        );
        free.extend(consumed);
        free.sort_unstable();
        final_slots.extend(batch);
        rounds.push(TreeRound { levels });
    }

    final_slots.extend(cursor..n);
    final_slots.sort_unstable();
    let final_controls = final_slots
        .into_iter()
        .filter(|&s| s != n)
        .map(|s| controls[s])
        .collect();

    Ok(ConditionallyCleanTree {
        rounds,
        final_controls,
        pinned: controls[0],
    })
}

/// Builder for the logarithmic-depth construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BalancedTreeBuilder {
    form: ToffoliForm,
}

impl BalancedTreeBuilder {
    /// Create a builder emitting tree nodes in the given Toffoli form.
    pub fn new(form: ToffoliForm) -> Self {
        Self { form }
    }

    /// Synthesize an MCX on `target` controlled by `controls` (at least
    /// three), using both `work` wires as scratch.
    pub fn build(
        &self,
        controls: &[WireId],
        target: WireId,
        work: [WireId; 2],
        cleanliness: Cleanliness,
    ) -> SynthResult<GateSequence> {
        if controls.len() < 3 {
            return Err(RequestError::TooFewControls {
                got: controls.len(),
                min: 3,
            }
            .into());
        }
        let [w0, w1] = work;
        let tree = build_tree(controls, w0, self.form)?;

        let middle = match tree.final_controls.as_slice() {
            [only] => {
                let mut seq = GateSequence::new();
                seq.ccx(w0, *only, target)?;
                seq
            }
            survivors => {
                let mut inner = Vec::with_capacity(survivors.len() + 1);
                inner.push(tree.pinned);
                inner.extend_from_slice(survivors);
                let ladder = ladder_ops(&inner, ToffoliForm::Plain)?;

                let mut carry = GateSequence::new();
                carry.ccx(w1, ladder.final_control, target)?;
                let mut seq = GateSequence::new();
                seq.ccx(w0, survivors[0], w1)?;
                seq.append(&conjugate(&ladder.gates, &carry)?);
                seq.ccx(w0, survivors[0], w1)?;
                seq
            }
        };

        let forward = tree.forward();
        let mut seq = conjugate(&forward, &middle)?;
        if cleanliness.is_dirty() {
            // Second pass leaves the creation gate out; it cancels the
            // unknown initial value of w0.
            seq.append(&conjugate(&forward.skip(1), &middle)?);
        }

        debug!(
            n_controls = controls.len(),
            %cleanliness,
            rounds = tree.num_rounds(),
            survivors = tree.final_controls.len(),
            toffolis = seq.toffoli_count(),
            "built balanced tree"
        );
        Ok(seq)
    }
}
