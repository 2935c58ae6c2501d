use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendVerticalAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegendLayout {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendItemStyle {
    pub color: Color,
    pub font_size: f64,
}

impl Default for LegendItemStyle {
    fn default() -> Self {
        Self {
            color: Color::from_rgb8(0x33, 0x33, 0x33),
            font_size: 12.0,
        }
    }
}

/// Complete style/position record for one legend.
///
/// Deserialization fills missing fields from the library defaults, so a
/// partial `legend` object in chart JSON is always a complete record here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOptions {
    pub enabled: bool,
    pub align: LegendAlign,
    pub vertical_align: LegendVerticalAlign,
    pub layout: LegendLayout,
    pub x: f64,
    pub y: f64,
    pub padding: f64,
    pub item_distance: f64,
    pub symbol_width: f64,
    pub symbol_padding: f64,
    pub item_style: LegendItemStyle,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    pub border_color: Color,
    pub border_width: f64,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            align: LegendAlign::Center,
            vertical_align: LegendVerticalAlign::Bottom,
            layout: LegendLayout::Horizontal,
            x: 0.0,
            y: 0.0,
            padding: 8.0,
            item_distance: 20.0,
            symbol_width: 16.0,
            symbol_padding: 5.0,
            item_style: LegendItemStyle::default(),
            background_color: None,
            border_color: Color::from_rgb8(0x99, 0x99, 0x99),
            border_width: 0.0,
        }
    }
}

/// Baseline legend configuration of the library's option registry.
#[must_use]
pub fn default_legend_options() -> LegendOptions {
    LegendOptions::default()
}

impl LegendOptions {
    /// Deep merge: every field set in `overrides` wins, everything else keeps
    /// `self`. Nested `item_style` is merged field by field.
    #[must_use]
    pub fn merged(&self, overrides: &LegendOverrides) -> Self {
        let mut item_style = self.item_style;
        if let Some(style) = &overrides.item_style {
            if let Some(color) = style.color {
                item_style.color = color;
            }
            if let Some(font_size) = style.font_size {
                item_style.font_size = font_size;
            }
        }

        Self {
            enabled: overrides.enabled.unwrap_or(self.enabled),
            align: overrides.align.unwrap_or(self.align),
            vertical_align: overrides.vertical_align.unwrap_or(self.vertical_align),
            layout: overrides.layout.unwrap_or(self.layout),
            x: overrides.x.unwrap_or(self.x),
            y: overrides.y.unwrap_or(self.y),
            padding: overrides.padding.unwrap_or(self.padding),
            item_distance: overrides.item_distance.unwrap_or(self.item_distance),
            symbol_width: overrides.symbol_width.unwrap_or(self.symbol_width),
            symbol_padding: overrides.symbol_padding.unwrap_or(self.symbol_padding),
            item_style,
            background_color: overrides.background_color.or(self.background_color),
            border_color: overrides.border_color.unwrap_or(self.border_color),
            border_width: overrides.border_width.unwrap_or(self.border_width),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(ChartError::InvalidLegendOptions(
                "offsets `x`/`y` must be finite".to_owned(),
            ));
        }
        for (name, value) in [
            ("padding", self.padding),
            ("itemDistance", self.item_distance),
            ("symbolWidth", self.symbol_width),
            ("symbolPadding", self.symbol_padding),
            ("borderWidth", self.border_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidLegendOptions(format!(
                    "`{name}` must be finite and >= 0"
                )));
            }
        }
        if !self.item_style.font_size.is_finite() || self.item_style.font_size <= 0.0 {
            return Err(ChartError::InvalidLegendOptions(
                "`itemStyle.fontSize` must be finite and > 0".to_owned(),
            ));
        }

        let colors = [
            Some(self.item_style.color),
            self.background_color,
            Some(self.border_color),
        ];
        for color in colors.into_iter().flatten() {
            color
                .validate()
                .map_err(|err| ChartError::InvalidLegendOptions(err.to_string()))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendItemStyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
}

/// Partial legend record; only the fields that are set take effect when
/// merged onto a baseline with [`LegendOptions::merged`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegendOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<LegendAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<LegendVerticalAlign>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<LegendLayout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_padding: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_style: Option<LegendItemStyleOverrides>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
}

impl LegendOverrides {
    #[must_use]
    pub fn with_align(mut self, align: LegendAlign) -> Self {
        self.align = Some(align);
        self
    }

    #[must_use]
    pub fn with_vertical_align(mut self, vertical_align: LegendVerticalAlign) -> Self {
        self.vertical_align = Some(vertical_align);
        self
    }

    #[must_use]
    pub fn with_layout(mut self, layout: LegendLayout) -> Self {
        self.layout = Some(layout);
        self
    }

    #[must_use]
    pub fn with_offset(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    #[must_use]
    pub fn with_background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    #[must_use]
    pub fn with_item_font_size(mut self, font_size: f64) -> Self {
        self.item_style.get_or_insert_with(Default::default).font_size = Some(font_size);
        self
    }
}
