//! Primary/secondary legend controllers.
//!
//! Both controllers delegate drawing to a [`LegendRenderer`]. The primary
//! controller hides series opted into the secondary legend, draws, then hands
//! over to the secondary controller, which shows only those series and swaps
//! the chart's active legend options for `defaults ⊕ secondaryLegend` while
//! its renderer runs. Every rewrite happens inside a scoped transaction,
//! so chart state after a render equals chart state before it, including
//! when the delegated renderer fails.

mod base;
mod layout;
mod options;
mod partition;
mod primary;
mod secondary;
mod transaction;

pub use base::{BaseLegend, BaseLegendFactory, DEFAULT_SERIES_PALETTE};
pub use layout::{LegendItemLayout, LegendLayoutResult, estimate_label_width_px, layout_legend};
pub use options::{
    LegendAlign, LegendItemStyle, LegendItemStyleOverrides, LegendLayout, LegendOptions,
    LegendOverrides, LegendVerticalAlign, default_legend_options,
};
pub use partition::{
    has_secondary_legend_series, hide_secondary_series, show_only_secondary_series,
};
pub use primary::PrimaryLegendController;
pub use secondary::SecondaryLegendController;

use crate::api::ChartModel;
use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Which of the two legends a renderer instance draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LegendRole {
    Primary,
    Secondary,
}

impl LegendRole {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

/// Base legend capability shared by both controllers.
///
/// Implementations read the active legend options and each series'
/// `show_in_legend` flag from the model; they never mutate chart state.
pub trait LegendRenderer {
    fn init(&mut self, model: &ChartModel) -> ChartResult<()>;
    fn render(&mut self, model: &ChartModel, frame: &mut RenderFrame) -> ChartResult<()>;
    fn destroy(&mut self);
}

/// Creates one legend renderer per role when a chart sets up its legends.
pub trait LegendFactory {
    fn create(&self, role: LegendRole) -> Box<dyn LegendRenderer>;
}

impl<F> LegendFactory for F
where
    F: Fn(LegendRole) -> Box<dyn LegendRenderer>,
{
    fn create(&self, role: LegendRole) -> Box<dyn LegendRenderer> {
        self(role)
    }
}
