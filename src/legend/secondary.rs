use tracing::{trace, warn};

use crate::api::ChartModel;
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::transaction::LegendTransaction;
use super::{LegendOptions, LegendRenderer};

/// Second legend drawn on the same chart, listing only series that set
/// `show_in_secondary_legend`.
///
/// For the duration of its renderer's `init`/`render` call, the chart's
/// active legend options are `defaults ⊕ secondary_legend` and exactly the
/// opted-in series are visible. Both are put back before the call returns.
pub struct SecondaryLegendController {
    base: Box<dyn LegendRenderer>,
    defaults: LegendOptions,
}

impl SecondaryLegendController {
    /// Runs the renderer's `init` against the secondary options. The swap is
    /// a one-shot bootstrap: nothing stays swapped once `init` returns.
    pub fn init(
        base: Box<dyn LegendRenderer>,
        model: &mut ChartModel,
        defaults: LegendOptions,
    ) -> ChartResult<Self> {
        let mut controller = Self { base, defaults };
        {
            let effective = controller.effective_options(model);
            let mut tx = LegendTransaction::begin(model);
            tx.swap_legend_options(effective);
            controller.base.init(tx.model())?;
        }
        Ok(controller)
    }

    /// `defaults ⊕ secondary_legend`, independent of the chart's `legend`.
    #[must_use]
    pub fn effective_options(&self, model: &ChartModel) -> LegendOptions {
        match &model.options.secondary_legend {
            Some(overrides) => self.defaults.merged(overrides),
            None => self.defaults.clone(),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &LegendOptions {
        &self.defaults
    }

    pub fn render(&mut self, model: &mut ChartModel, frame: &mut RenderFrame) -> ChartResult<()> {
        let effective = self.effective_options(model);
        let mut tx = LegendTransaction::begin(model);
        let visible = tx.show_only_secondary_series();
        tx.swap_legend_options(effective);
        trace!(visible, "secondary legend pass");

        let outcome = self.base.render(tx.model(), frame).inspect_err(|err| {
            warn!(
                error = %err,
                "secondary legend pass failed; restoring series visibility and legend options"
            );
        });
        drop(tx);
        outcome
    }

    pub fn destroy(&mut self) {
        self.base.destroy();
    }
}
