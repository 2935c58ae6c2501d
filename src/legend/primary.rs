use tracing::{debug, trace, warn};

use crate::api::ChartModel;
use crate::error::ChartResult;
use crate::render::RenderFrame;

use super::partition::has_secondary_legend_series;
use super::transaction::LegendTransaction;
use super::{LegendFactory, LegendOptions, LegendRenderer, LegendRole, SecondaryLegendController};

/// The chart's main legend.
///
/// Owns the secondary legend, if any. While drawing, series opted into the
/// secondary legend are hidden from this one; their flags are restored when
/// the render cycle (both passes) ends.
pub struct PrimaryLegendController {
    base: Box<dyn LegendRenderer>,
    secondary: Option<SecondaryLegendController>,
}

impl PrimaryLegendController {
    /// Initializes the primary legend, then creates the secondary legend iff
    /// `secondary_legend` options are set and at least one series opted in.
    ///
    /// `legend_defaults` is the baseline the secondary overrides merge onto.
    pub fn init(
        model: &mut ChartModel,
        factory: &dyn LegendFactory,
        legend_defaults: &LegendOptions,
    ) -> ChartResult<Self> {
        let mut base = factory.create(LegendRole::Primary);
        base.init(model)?;

        let secondary = if !model.secondary_legend_enabled() {
            debug!("secondary legend disabled: no `secondaryLegend` options");
            None
        } else if !has_secondary_legend_series(&model.series) {
            debug!(
                series = model.series.len(),
                "secondary legend skipped: no series opted in"
            );
            None
        } else {
            let secondary = SecondaryLegendController::init(
                factory.create(LegendRole::Secondary),
                model,
                legend_defaults.clone(),
            );
            match secondary {
                Ok(secondary) => {
                    debug!("secondary legend created");
                    Some(secondary)
                }
                Err(err) => {
                    base.destroy();
                    return Err(err);
                }
            }
        };

        Ok(Self { base, secondary })
    }

    /// Draws the primary legend, then the secondary one.
    ///
    /// Chart state after this call equals chart state before it, whether or
    /// not a pass failed.
    pub fn render(&mut self, model: &mut ChartModel, frame: &mut RenderFrame) -> ChartResult<()> {
        let mut tx = LegendTransaction::begin(model);
        if tx.model().secondary_legend_enabled() {
            let hidden = tx.hide_secondary_series();
            trace!(hidden, "primary legend pass");
        }

        self.base.render(tx.model(), frame).inspect_err(|err| {
            warn!(error = %err, "primary legend pass failed; restoring series visibility");
        })?;

        if let Some(secondary) = self.secondary.as_mut() {
            secondary.render(tx.model_mut(), frame)?;
        }
        Ok(())
    }

    /// Tears down the secondary legend first, then the primary one.
    pub fn destroy(&mut self) {
        if let Some(mut secondary) = self.secondary.take() {
            secondary.destroy();
        }
        self.base.destroy();
    }

    #[must_use]
    pub fn has_secondary(&self) -> bool {
        self.secondary.is_some()
    }

    #[must_use]
    pub fn secondary(&self) -> Option<&SecondaryLegendController> {
        self.secondary.as_ref()
    }
}
