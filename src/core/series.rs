use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Per-series legend membership flags plus the bits a legend item needs.
///
/// `show_in_legend` is the visibility flag read by whichever legend is
/// currently drawing; legend controllers rewrite it during a render cycle and
/// put the caller's value back before the cycle ends.
/// `show_in_secondary_legend` is declarative and never written by this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(default = "default_show_in_legend")]
    pub show_in_legend: bool,
    #[serde(default)]
    pub show_in_secondary_legend: bool,
}

fn default_show_in_legend() -> bool {
    true
}

impl SeriesOptions {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: None,
            show_in_legend: default_show_in_legend(),
            show_in_secondary_legend: false,
        }
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_show_in_legend(mut self, show: bool) -> Self {
        self.show_in_legend = show;
        self
    }

    #[must_use]
    pub fn in_secondary_legend(mut self) -> Self {
        self.show_in_secondary_legend = true;
        self
    }
}

/// One chart series; its identity is its position in the chart's series list.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub options: SeriesOptions,
}

impl Series {
    #[must_use]
    pub fn new(options: SeriesOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.options.name
    }

    #[must_use]
    pub fn is_secondary(&self) -> bool {
        self.options.show_in_secondary_legend
    }
}

impl From<SeriesOptions> for Series {
    fn from(options: SeriesOptions) -> Self {
        Self::new(options)
    }
}
