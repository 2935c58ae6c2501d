use tracing::{debug, trace};

use crate::core::{Series, SeriesOptions, Viewport};
use crate::error::ChartResult;
use crate::legend::{BaseLegendFactory, LegendFactory, LegendOptions, PrimaryLegendController};
use crate::render::{RenderFrame, Renderer};

use super::{ChartConfig, ChartModel, ChartOptions};

/// Chart facade consumed by host applications.
///
/// Owns the series/options model, the legend controllers and the renderer.
/// Each `render` call is one full legend cycle: primary pass, secondary pass,
/// then the finished frame goes to the renderer.
pub struct Chart<R: Renderer> {
    renderer: R,
    model: ChartModel,
    legend_defaults: LegendOptions,
    factory: Box<dyn LegendFactory>,
    legend: PrimaryLegendController,
}

impl<R: Renderer> Chart<R> {
    /// Creates a chart drawing its legends with [`crate::legend::BaseLegend`].
    pub fn new(renderer: R, config: ChartConfig) -> ChartResult<Self> {
        Self::with_legend_factory(renderer, config, BaseLegendFactory)
    }

    pub fn with_legend_factory(
        renderer: R,
        config: ChartConfig,
        factory: impl LegendFactory + 'static,
    ) -> ChartResult<Self> {
        config.validate()?;
        let (mut model, legend_defaults) = config.into_parts();
        let factory: Box<dyn LegendFactory> = Box::new(factory);
        let legend = PrimaryLegendController::init(&mut model, factory.as_ref(), &legend_defaults)?;
        debug!(
            series = model.series.len(),
            secondary = legend.has_secondary(),
            "chart legends initialized"
        );

        Ok(Self {
            renderer,
            model,
            legend_defaults,
            factory,
            legend,
        })
    }

    /// Runs both legend passes into a fresh frame without touching the renderer.
    pub fn build_render_frame(&mut self) -> ChartResult<RenderFrame> {
        let mut frame = RenderFrame::new(self.model.viewport);
        self.legend.render(&mut self.model, &mut frame)?;
        Ok(frame)
    }

    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        trace!(
            rects = frame.rects.len(),
            texts = frame.texts.len(),
            "render legend frame"
        );
        self.renderer.render(&frame)
    }

    /// Re-creates the legend controllers so the secondary-legend guard is
    /// re-evaluated against the current options and series.
    ///
    /// On failure the current controllers stay in place and keep rendering.
    pub fn rebuild_legends(&mut self) -> ChartResult<()> {
        let next =
            PrimaryLegendController::init(&mut self.model, self.factory.as_ref(), &self.legend_defaults)?;
        self.legend.destroy();
        self.legend = next;
        debug!(
            secondary = self.legend.has_secondary(),
            "chart legends rebuilt"
        );
        Ok(())
    }

    /// Appends a series and returns its index. Call [`Self::rebuild_legends`]
    /// when the series should change whether a secondary legend exists.
    pub fn add_series(&mut self, options: SeriesOptions) -> usize {
        self.model.series.push(Series::new(options));
        self.model.series.len() - 1
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.model.series
    }

    pub fn series_options_mut(&mut self, index: usize) -> Option<&mut SeriesOptions> {
        self.model
            .series
            .get_mut(index)
            .map(|series| &mut series.options)
    }

    #[must_use]
    pub fn options(&self) -> &ChartOptions {
        &self.model.options
    }

    pub fn options_mut(&mut self) -> &mut ChartOptions {
        &mut self.model.options
    }

    #[must_use]
    pub fn model(&self) -> &ChartModel {
        &self.model
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.model.viewport
    }

    #[must_use]
    pub fn legend_defaults(&self) -> &LegendOptions {
        &self.legend_defaults
    }

    #[must_use]
    pub fn legend(&self) -> &PrimaryLegendController {
        &self.legend
    }

    #[must_use]
    pub fn has_secondary_legend(&self) -> bool {
        self.legend.has_secondary()
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Tears down the legends (secondary first) and hands back the renderer.
    #[must_use]
    pub fn destroy(mut self) -> R {
        self.legend.destroy();
        self.renderer
    }
}
