//! chart-legends: primary and secondary chart legends.
//!
//! Series flagged with `show_in_secondary_legend` are left out of the
//! chart's main legend and drawn instead in a second, independently styled
//! legend on the same canvas. Both legends reuse one legend renderer; the
//! controllers partition series visibility and switch the active legend
//! options around each pass, restoring chart state afterwards.

pub mod api;
pub mod core;
pub mod error;
pub mod legend;
pub mod render;
pub mod telemetry;

pub use api::{Chart, ChartConfig, ChartOptions};
pub use error::{ChartError, ChartResult};
pub use legend::{LegendOptions, LegendOverrides, LegendRenderer, LegendRole};
