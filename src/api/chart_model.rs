use crate::core::{Series, Viewport};
use crate::legend::LegendOptions;

use super::ChartOptions;

/// Chart state shared by both legend passes.
///
/// Legend renderers only ever see `&ChartModel`; the mutable series flags and
/// the active `legend` slot are rewritten exclusively by the legend
/// controllers, inside a render transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartModel {
    pub(crate) viewport: Viewport,
    pub(crate) options: ChartOptions,
    pub(crate) series: Vec<Series>,
}

impl ChartModel {
    #[must_use]
    pub fn new(viewport: Viewport, options: ChartOptions, series: Vec<Series>) -> Self {
        Self {
            viewport,
            options,
            series,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    /// The legend configuration the current pass should draw with.
    #[must_use]
    pub fn active_legend_options(&self) -> &LegendOptions {
        &self.options.legend
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// Series whose `show_in_legend` flag is currently set, in chart order.
    pub fn legend_series(&self) -> impl Iterator<Item = (usize, &Series)> {
        self.series
            .iter()
            .enumerate()
            .filter(|(_, series)| series.options.show_in_legend)
    }

    #[must_use]
    pub fn secondary_legend_enabled(&self) -> bool {
        self.options.secondary_legend.is_some()
    }
}
