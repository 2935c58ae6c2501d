use serde::{Deserialize, Serialize};

use crate::core::{Series, SeriesOptions, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::legend::LegendOptions;

use super::{ChartModel, ChartOptions};

/// Public chart bootstrap configuration.
///
/// Serializable so host applications can keep chart setup (legend options,
/// secondary legend overrides, series membership) in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub viewport: Viewport,
    #[serde(flatten)]
    pub options: ChartOptions,
    #[serde(default)]
    pub series: Vec<SeriesOptions>,
    /// Baseline the secondary legend overrides are merged onto.
    #[serde(default)]
    pub legend_defaults: LegendOptions,
}

impl ChartConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            options: ChartOptions::default(),
            series: Vec::new(),
            legend_defaults: LegendOptions::default(),
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: ChartOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub fn with_series(mut self, series: impl IntoIterator<Item = SeriesOptions>) -> Self {
        self.series.extend(series);
        self
    }

    #[must_use]
    pub fn with_legend_defaults(mut self, defaults: LegendOptions) -> Self {
        self.legend_defaults = defaults;
        self
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse chart config json: {e}")))
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize chart config json: {e}"))
        })
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        self.options.legend.validate()?;
        self.legend_defaults.validate()
    }

    /// Builds the chart model; unnamed series become `Series N` (1-based).
    pub(super) fn into_parts(self) -> (ChartModel, LegendOptions) {
        let series = self
            .series
            .into_iter()
            .enumerate()
            .map(|(index, mut options)| {
                if options.name.is_empty() {
                    options.name = format!("Series {}", index + 1);
                }
                Series::new(options)
            })
            .collect();
        (
            ChartModel::new(self.viewport, self.options, series),
            self.legend_defaults,
        )
    }
}
