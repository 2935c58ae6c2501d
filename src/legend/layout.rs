use crate::core::Viewport;
use crate::render::Color;

use super::{LegendAlign, LegendLayout, LegendOptions, LegendVerticalAlign};

const ROW_HEIGHT_FACTOR: f64 = 1.25;

/// Deterministic, backend-independent label width estimate.
#[must_use]
pub fn estimate_label_width_px(text: &str, font_size_px: f64) -> f64 {
    let units = text.chars().fold(0.0, |acc, ch| {
        acc + match ch {
            'i' | 'l' | 'j' | '.' | ',' | '\'' | '|' => 0.28,
            'm' | 'w' | 'M' | 'W' => 0.86,
            ' ' => 0.33,
            '0'..='9' => 0.62,
            ch if ch.is_uppercase() => 0.68,
            _ => 0.56,
        }
    });
    units * font_size_px
}

/// One positioned swatch + label pair.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendItemLayout {
    /// Position of the series in the chart's series list.
    pub series_index: usize,
    pub label: String,
    pub color: Color,
    pub symbol_x: f64,
    pub symbol_y: f64,
    pub symbol_width: f64,
    pub symbol_height: f64,
    pub text_x: f64,
    pub text_y: f64,
}

/// Legend box in viewport pixels plus its items in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayoutResult {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub items: Vec<LegendItemLayout>,
}

/// Lays out `(series_index, label, color)` entries as a legend box.
///
/// Horizontal legends place every item on one row; vertical legends stack one
/// item per row. The box is anchored by `align`/`vertical_align` and shifted
/// by `x`/`y`.
#[must_use]
pub fn layout_legend(
    options: &LegendOptions,
    viewport: Viewport,
    entries: &[(usize, String, Color)],
) -> LegendLayoutResult {
    let font_size = options.item_style.font_size;
    let row_height = font_size * ROW_HEIGHT_FACTOR;
    let symbol_height = font_size.min(options.symbol_width.max(1.0));

    // (relative x, row) per item before anchoring.
    let mut placements = Vec::with_capacity(entries.len());
    let mut cursor_x = 0.0;
    let mut content_width: f64 = 0.0;

    for (position, (_, label, _)) in entries.iter().enumerate() {
        let item_width = options.symbol_width
            + options.symbol_padding
            + estimate_label_width_px(label, font_size);

        match options.layout {
            LegendLayout::Horizontal => {
                placements.push((cursor_x, 0));
                content_width = cursor_x + item_width;
                cursor_x += item_width + options.item_distance;
            }
            LegendLayout::Vertical => {
                placements.push((0.0, position));
                content_width = content_width.max(item_width);
            }
        }
    }

    let rows = match options.layout {
        _ if entries.is_empty() => 0,
        LegendLayout::Horizontal => 1,
        LegendLayout::Vertical => entries.len(),
    };
    let width = content_width + 2.0 * options.padding;
    let height = rows as f64 * row_height + 2.0 * options.padding;

    let x = options.x
        + match options.align {
            LegendAlign::Left => 0.0,
            LegendAlign::Center => (viewport.width_px() - width) * 0.5,
            LegendAlign::Right => viewport.width_px() - width,
        };
    let y = options.y
        + match options.vertical_align {
            LegendVerticalAlign::Top => 0.0,
            LegendVerticalAlign::Middle => (viewport.height_px() - height) * 0.5,
            LegendVerticalAlign::Bottom => viewport.height_px() - height,
        };

    let items = entries
        .iter()
        .zip(placements)
        .map(|((series_index, label, color), (offset_x, item_row))| {
            let row_top = y + options.padding + item_row as f64 * row_height;
            let item_x = x + options.padding + offset_x;
            LegendItemLayout {
                series_index: *series_index,
                label: label.clone(),
                color: *color,
                symbol_x: item_x,
                symbol_y: row_top + (row_height - symbol_height) * 0.5,
                symbol_width: options.symbol_width,
                symbol_height,
                text_x: item_x + options.symbol_width + options.symbol_padding,
                text_y: row_top + row_height * 0.5,
            }
        })
        .collect();

    LegendLayoutResult {
        x,
        y,
        width,
        height,
        items,
    }
}
