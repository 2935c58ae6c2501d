use tracing::trace;

use crate::api::ChartModel;
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, RectPrimitive, RenderFrame, TextHAlign, TextPrimitive};

use super::{
    LegendFactory, LegendLayoutResult, LegendOptions, LegendRenderer, LegendRole, layout_legend,
};

/// Series colors used when a series does not set its own, cycled by index.
pub const DEFAULT_SERIES_PALETTE: [Color; 10] = [
    Color::rgb(0.486, 0.710, 0.925),
    Color::rgb(0.263, 0.263, 0.282),
    Color::rgb(0.565, 0.929, 0.490),
    Color::rgb(0.969, 0.639, 0.361),
    Color::rgb(0.502, 0.522, 0.914),
    Color::rgb(0.945, 0.361, 0.502),
    Color::rgb(0.894, 0.827, 0.329),
    Color::rgb(0.169, 0.565, 0.565),
    Color::rgb(0.957, 0.357, 0.357),
    Color::rgb(0.569, 0.910, 0.882),
];

/// The library's swatch + label legend.
///
/// `init` validates the active legend options; `render` lays out every
/// series whose `show_in_legend` flag is set using whatever options are
/// active at that moment, and appends the primitives to the frame.
#[derive(Debug)]
pub struct BaseLegend {
    role: LegendRole,
    initialized: bool,
    last_layout: Option<LegendLayoutResult>,
}

impl BaseLegend {
    #[must_use]
    pub fn new(role: LegendRole) -> Self {
        Self {
            role,
            initialized: false,
            last_layout: None,
        }
    }

    #[must_use]
    pub fn role(&self) -> LegendRole {
        self.role
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Layout of the most recent render; `None` when disabled or empty.
    #[must_use]
    pub fn last_layout(&self) -> Option<&LegendLayoutResult> {
        self.last_layout.as_ref()
    }

    fn emit(options: &LegendOptions, layout: &LegendLayoutResult, frame: &mut RenderFrame) {
        if options.background_color.is_some() || options.border_width > 0.0 {
            let mut background = RectPrimitive::filled(
                layout.x,
                layout.y,
                layout.width,
                layout.height,
                options.background_color.unwrap_or(options.border_color),
            )
            .with_border(options.border_color, options.border_width);
            if options.background_color.is_none() {
                background = background.without_fill();
            }
            frame.push_rect(background);
        }

        for item in &layout.items {
            frame.push_rect(RectPrimitive::filled(
                item.symbol_x,
                item.symbol_y,
                item.symbol_width,
                item.symbol_height,
                item.color,
            ));
            frame.push_text(TextPrimitive::new(
                item.label.clone(),
                item.text_x,
                item.text_y,
                options.item_style.font_size,
                options.item_style.color,
                TextHAlign::Left,
            ));
        }
    }
}

impl LegendRenderer for BaseLegend {
    fn init(&mut self, model: &ChartModel) -> ChartResult<()> {
        model.active_legend_options().validate()?;
        self.initialized = true;
        Ok(())
    }

    fn render(&mut self, model: &ChartModel, frame: &mut RenderFrame) -> ChartResult<()> {
        if !self.initialized {
            return Err(ChartError::LegendNotInitialized(self.role.as_str()));
        }

        let options = model.active_legend_options();
        options.validate()?;
        if !options.enabled {
            self.last_layout = None;
            return Ok(());
        }

        let entries: Vec<(usize, String, Color)> = model
            .legend_series()
            .filter(|(_, series)| !series.name().is_empty())
            .map(|(index, series)| {
                let color = series
                    .options
                    .color
                    .unwrap_or(DEFAULT_SERIES_PALETTE[index % DEFAULT_SERIES_PALETTE.len()]);
                (index, series.name().to_owned(), color)
            })
            .collect();

        if entries.is_empty() {
            self.last_layout = None;
            return Ok(());
        }

        let layout = layout_legend(options, model.viewport(), &entries);
        trace!(
            role = self.role.as_str(),
            items = layout.items.len(),
            x = layout.x,
            y = layout.y,
            "legend laid out"
        );
        Self::emit(options, &layout, frame);
        self.last_layout = Some(layout);
        Ok(())
    }

    fn destroy(&mut self) {
        self.initialized = false;
        self.last_layout = None;
    }
}

/// Factory producing a [`BaseLegend`] for each role.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseLegendFactory;

impl LegendFactory for BaseLegendFactory {
    fn create(&self, role: LegendRole) -> Box<dyn LegendRenderer> {
        Box::new(BaseLegend::new(role))
    }
}

#[cfg(test)]
mod tests {
    use super::BaseLegend;
    use crate::api::{ChartModel, ChartOptions};
    use crate::core::{Series, SeriesOptions, Viewport};
    use crate::error::ChartError;
    use crate::legend::{LegendOptions, LegendRenderer, LegendRole};
    use crate::render::{Color, RenderFrame};

    fn model(legend: LegendOptions) -> ChartModel {
        ChartModel::new(
            Viewport::new(600, 400),
            ChartOptions::default().with_legend(legend),
            vec![
                Series::new(SeriesOptions::new("Sales")),
                Series::new(SeriesOptions::new("Costs").with_show_in_legend(false)),
                Series::new(
                    SeriesOptions::new("Margin").with_color(Color::from_rgb8(0, 128, 0)),
                ),
            ],
        )
    }

    #[test]
    fn render_before_init_is_rejected() {
        let model = model(LegendOptions::default());
        let mut legend = BaseLegend::new(LegendRole::Secondary);
        let mut frame = RenderFrame::new(model.viewport());
        let err = legend
            .render(&model, &mut frame)
            .expect_err("uninitialized render");
        assert!(matches!(err, ChartError::LegendNotInitialized("secondary")));
    }

    #[test]
    fn only_visible_series_are_drawn() {
        let model = model(LegendOptions::default());
        let mut legend = BaseLegend::new(LegendRole::Primary);
        legend.init(&model).expect("init");
        let mut frame = RenderFrame::new(model.viewport());
        legend.render(&model, &mut frame).expect("render");

        assert_eq!(frame.text_labels().collect::<Vec<_>>(), vec!["Sales", "Margin"]);
        assert_eq!(frame.rects.len(), 2);
        assert_eq!(frame.rects[1].fill, Some(Color::from_rgb8(0, 128, 0)));
        assert!(frame.validate().is_ok());
        let layout = legend.last_layout().expect("layout");
        assert_eq!(
            layout.items.iter().map(|item| item.series_index).collect::<Vec<_>>(),
            vec![0, 2]
        );
    }

    #[test]
    fn background_and_border_add_a_box() {
        let legend_options = LegendOptions {
            background_color: Some(Color::from_rgb8(250, 250, 250)),
            border_width: 1.0,
            ..LegendOptions::default()
        };
        let model = model(legend_options);
        let mut legend = BaseLegend::new(LegendRole::Primary);
        legend.init(&model).expect("init");
        let mut frame = RenderFrame::new(model.viewport());
        legend.render(&model, &mut frame).expect("render");
        assert_eq!(frame.rects.len(), 3);
        assert_eq!(frame.rects[0].border_width, 1.0);
    }

    #[test]
    fn disabled_legend_draws_nothing() {
        let model = model(LegendOptions {
            enabled: false,
            ..LegendOptions::default()
        });
        let mut legend = BaseLegend::new(LegendRole::Primary);
        legend.init(&model).expect("init");
        let mut frame = RenderFrame::new(model.viewport());
        legend.render(&model, &mut frame).expect("render");
        assert!(frame.is_empty());
        assert!(legend.last_layout().is_none());
    }

    #[test]
    fn invalid_options_fail_init_and_destroy_resets() {
        let mut legend = BaseLegend::new(LegendRole::Primary);
        let bad = model(LegendOptions {
            padding: f64::NAN,
            ..LegendOptions::default()
        });
        assert!(matches!(
            legend.init(&bad),
            Err(ChartError::InvalidLegendOptions(_))
        ));
        assert!(!legend.is_initialized());

        let good = model(LegendOptions::default());
        legend.init(&good).expect("init");
        assert!(legend.is_initialized());
        legend.destroy();
        assert!(!legend.is_initialized());
    }
}
