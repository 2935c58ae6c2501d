use smallvec::SmallVec;
use tracing::warn;

use crate::api::ChartModel;
use crate::legend::LegendOptions;

use super::partition::{hide_secondary_series, show_only_secondary_series};

/// `show_in_legend` values, index-aligned with the chart's series list.
pub(crate) type VisibilityBackup = SmallVec<[bool; 16]>;

/// Whether the chart's active legend slot currently holds borrowed options.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) enum SwapState {
    #[default]
    Idle,
    Swapped(LegendOptions),
}

/// Scoped save/mutate/restore over the chart's series flags and legend slot.
///
/// Restoration runs on drop, so every exit path (normal return, `?`, panic
/// unwinding) leaves the model exactly as it was when the transaction began.
/// Series flags are restored before the legend slot.
pub(crate) struct LegendTransaction<'m> {
    model: &'m mut ChartModel,
    visibility: Option<VisibilityBackup>,
    legend: SwapState,
}

impl<'m> LegendTransaction<'m> {
    pub(crate) fn begin(model: &'m mut ChartModel) -> Self {
        Self {
            model,
            visibility: None,
            legend: SwapState::Idle,
        }
    }

    pub(crate) fn model(&self) -> &ChartModel {
        &*self.model
    }

    /// Reborrow for a nested transaction; the inner one restores first.
    pub(crate) fn model_mut(&mut self) -> &mut ChartModel {
        &mut *self.model
    }

    /// Snapshots every series' flag once; later calls keep the first snapshot.
    fn capture_visibility(&mut self) {
        if self.visibility.is_none() {
            self.visibility = Some(
                self.model
                    .series
                    .iter()
                    .map(|series| series.options.show_in_legend)
                    .collect(),
            );
        }
    }

    pub(crate) fn hide_secondary_series(&mut self) -> usize {
        self.capture_visibility();
        hide_secondary_series(&mut self.model.series)
    }

    pub(crate) fn show_only_secondary_series(&mut self) -> usize {
        self.capture_visibility();
        show_only_secondary_series(&mut self.model.series)
    }

    /// Installs `options` as the active legend unless already swapped.
    ///
    /// Returns `false` when a swap was already in place and nothing changed.
    pub(crate) fn swap_legend_options(&mut self, options: LegendOptions) -> bool {
        if matches!(self.legend, SwapState::Swapped(_)) {
            return false;
        }
        let saved = std::mem::replace(&mut self.model.options.legend, options);
        self.legend = SwapState::Swapped(saved);
        true
    }

    fn restore(&mut self) {
        if let Some(backup) = self.visibility.take() {
            for (series, show) in self.model.series.iter_mut().zip(backup) {
                series.options.show_in_legend = show;
            }
        }
        if let SwapState::Swapped(saved) = std::mem::take(&mut self.legend) {
            self.model.options.legend = saved;
        }
    }
}

impl Drop for LegendTransaction<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            warn!("legend pass panicked; restoring series visibility and legend options");
        }
        self.restore();
    }
}

#[cfg(test)]
mod tests {
    use super::{LegendTransaction, SwapState};
    use crate::api::{ChartModel, ChartOptions};
    use crate::core::{Series, SeriesOptions, Viewport};
    use crate::legend::{LegendAlign, LegendOptions, LegendOverrides};

    fn model() -> ChartModel {
        ChartModel::new(
            Viewport::new(640, 480),
            ChartOptions::default().with_secondary_legend(LegendOverrides::default()),
            vec![
                Series::new(SeriesOptions::new("a").with_show_in_legend(false)),
                Series::new(SeriesOptions::new("b").in_secondary_legend()),
            ],
        )
    }

    fn secondary_options() -> LegendOptions {
        LegendOptions {
            align: LegendAlign::Right,
            ..LegendOptions::default()
        }
    }

    #[test]
    fn drop_restores_flags_and_legend_slot() {
        let mut model = model();
        let before = model.clone();
        {
            let mut tx = LegendTransaction::begin(&mut model);
            tx.show_only_secondary_series();
            assert!(tx.swap_legend_options(secondary_options()));
            assert_eq!(tx.model().options.legend.align, LegendAlign::Right);
            assert!(tx.model().series[1].options.show_in_legend);
            assert!(matches!(tx.legend, SwapState::Swapped(_)));
        }
        assert_eq!(model, before);
    }

    #[test]
    fn second_swap_keeps_first_backup() {
        let mut model = model();
        let before = model.options.legend.clone();
        {
            let mut tx = LegendTransaction::begin(&mut model);
            assert!(tx.swap_legend_options(secondary_options()));
            assert!(!tx.swap_legend_options(LegendOptions::default()));
            assert_eq!(tx.model().options.legend.align, LegendAlign::Right);
        }
        assert_eq!(model.options.legend, before);
    }

    #[test]
    fn nested_transactions_unwind_to_the_outer_snapshot() {
        let mut model = model();
        let before = model.clone();
        {
            let mut outer = LegendTransaction::begin(&mut model);
            outer.hide_secondary_series();
            {
                let mut inner = LegendTransaction::begin(outer.model_mut());
                inner.show_only_secondary_series();
                inner.swap_legend_options(secondary_options());
            }
            let flags: Vec<bool> = outer
                .model()
                .series
                .iter()
                .map(|series| series.options.show_in_legend)
                .collect();
            assert_eq!(flags, vec![false, false]);
            assert_eq!(outer.model().options.legend, before.options.legend);
        }
        assert_eq!(model, before);
    }
}
