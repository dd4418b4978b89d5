//! Top-level entry point.

use mcx_ir::{GateSequence, ToffoliForm};
use tracing::{info, instrument};

use crate::allocator::allocate;
use crate::config::SynthesisConfig;
use crate::error::SynthResult;
use crate::ladder::LadderBuilder;
use crate::request::{Strategy, SynthesisRequest, SynthesisResult};
use crate::tree::BalancedTreeBuilder;
use crate::verify;

/// Synthesizes multi-controlled X gates from Toffolis.
///
/// Synthesis is a pure function of the request and configuration: the same
/// inputs always produce the same gate sequence.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    config: SynthesisConfig,
}

impl Synthesizer {
    /// Create a synthesizer with the given configuration.
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Toffoli form used for mirrored ladders and tree nodes.
    fn form(&self, request: &SynthesisRequest) -> ToffoliForm {
        if request.cleanliness.is_dirty() && self.config.relative_phase {
            ToffoliForm::RelativePhase
        } else {
            ToffoliForm::Plain
        }
    }

    /// Synthesize `request`.
    ///
    /// # Errors
    ///
    /// [`SynthError::InvalidRequest`](crate::SynthError::InvalidRequest) if
    /// the request has the wrong number of work wires, repeats a wire, or
    /// has fewer controls than the configuration accepts.
    ///
    /// # Panics
    ///
    /// With `verify` enabled, if the result misses its closed-form cost.
    #[instrument(skip(self, request), fields(n = request.controls.len(), work = request.work.len()))]
    pub fn synthesize(&self, request: &SynthesisRequest) -> SynthResult<SynthesisResult> {
        let alloc = allocate(request, &self.config)?;
        let form = self.form(request);
        let (controls, target) = (&alloc.controls, alloc.target);

        let gates = match alloc.strategy {
            Strategy::Not => {
                let mut seq = GateSequence::new();
                seq.x(target)?;
                seq
            }
            Strategy::ControlledNot => {
                let mut seq = GateSequence::new();
                seq.cx(controls[0], target)?;
                seq
            }
            Strategy::Toffoli => {
                let mut seq = GateSequence::new();
                seq.ccx(controls[0], controls[1], target)?;
                seq
            }
            Strategy::Ladder => LadderBuilder::new(form).build(
                controls,
                target,
                alloc.work[0].id,
                alloc.cleanliness,
            )?,
            Strategy::BalancedTree => BalancedTreeBuilder::new(form).build(
                controls,
                target,
                [alloc.work[0].id, alloc.work[1].id],
                alloc.cleanliness,
            )?,
        };

        let result =
            SynthesisResult::new(gates, alloc.strategy, alloc.num_controls(), alloc.cleanliness);
        info!(
            "Synthesized {}-control MCX ({}, {}): {} gates, {} Toffolis, depth {}",
            result.num_controls,
            result.strategy,
            result.cleanliness,
            result.gate_count(),
            result.toffoli_count,
            result.depth
        );

        if self.config.verify {
            verify::assert_bounds(&result);
        }
        Ok(result)
    }
}

/// Synthesize `request` with the default configuration.
pub fn synthesize(request: &SynthesisRequest) -> SynthResult<SynthesisResult> {
    Synthesizer::default().synthesize(request)
}
