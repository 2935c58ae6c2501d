mod chart;
mod chart_config;
mod chart_model;
mod chart_options;

pub use chart::Chart;
pub use chart_config::ChartConfig;
pub use chart_model::ChartModel;
pub use chart_options::ChartOptions;
