use std::panic::{AssertUnwindSafe, catch_unwind};

use chart_legends::ChartError;
use chart_legends::api::{Chart, ChartConfig, ChartModel, ChartOptions};
use chart_legends::core::{SeriesOptions, Viewport};
use chart_legends::error::ChartResult;
use chart_legends::legend::{
    LegendAlign, LegendOptions, LegendOverrides, LegendRenderer, LegendRole,
};
use chart_legends::render::{NullRenderer, RenderFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Failure {
    Error,
    Panic,
}

/// Fails (or panics) on render for one role; succeeds otherwise.
struct FailingLegend {
    role: LegendRole,
    fail_role: LegendRole,
    failure: Failure,
}

impl LegendRenderer for FailingLegend {
    fn init(&mut self, _model: &ChartModel) -> ChartResult<()> {
        Ok(())
    }

    fn render(&mut self, _model: &ChartModel, _frame: &mut RenderFrame) -> ChartResult<()> {
        if self.role != self.fail_role {
            return Ok(());
        }
        match self.failure {
            Failure::Error => Err(ChartError::InvalidData(format!(
                "{} legend backend unavailable",
                self.role.as_str()
            ))),
            Failure::Panic => panic!("{} legend exploded", self.role.as_str()),
        }
    }

    fn destroy(&mut self) {}
}

fn failing_chart(fail_role: LegendRole, failure: Failure) -> Chart<NullRenderer> {
    let options = ChartOptions::default()
        .with_legend(LegendOptions {
            align: LegendAlign::Left,
            ..LegendOptions::default()
        })
        .with_secondary_legend(LegendOverrides::default().with_align(LegendAlign::Right));
    let config = ChartConfig::new(Viewport::new(640, 480))
        .with_options(options)
        .with_series([
            SeriesOptions::new("a"),
            SeriesOptions::new("b").in_secondary_legend(),
            SeriesOptions::new("c").with_show_in_legend(false),
            SeriesOptions::new("d")
                .in_secondary_legend()
                .with_show_in_legend(false),
        ]);
    Chart::with_legend_factory(
        NullRenderer::default(),
        config,
        move |role: LegendRole| -> Box<dyn LegendRenderer> {
            Box::new(FailingLegend {
                role,
                fail_role,
                failure,
            })
        },
    )
    .expect("chart init")
}

#[test]
fn secondary_error_is_surfaced_after_state_is_restored() {
    let mut chart = failing_chart(LegendRole::Secondary, Failure::Error);
    let before = chart.model().clone();

    let err = chart.render().expect_err("secondary failure must surface");
    assert!(matches!(err, ChartError::InvalidData(ref message) if message.contains("secondary")));
    assert_eq!(chart.model(), &before);
    assert_eq!(chart.renderer().frames_rendered, 0);
}

#[test]
fn primary_error_restores_hidden_series() {
    let mut chart = failing_chart(LegendRole::Primary, Failure::Error);
    let before = chart.model().clone();

    assert!(chart.render().is_err());
    assert_eq!(chart.model(), &before);
}

#[test]
fn panicking_secondary_pass_still_restores_state() {
    let mut chart = failing_chart(LegendRole::Secondary, Failure::Panic);
    let before = chart.model().clone();

    let outcome = catch_unwind(AssertUnwindSafe(|| chart.render()));
    assert!(outcome.is_err(), "render should have panicked");
    assert_eq!(chart.model(), &before);
    assert_eq!(chart.options().legend.align, LegendAlign::Left);
}

#[test]
fn chart_recovers_after_a_failed_cycle() {
    let mut chart = failing_chart(LegendRole::Secondary, Failure::Error);
    let before = chart.model().clone();
    for _ in 0..3 {
        assert!(chart.render().is_err());
    }
    assert_eq!(chart.model(), &before);
    let flags: Vec<bool> = chart
        .series()
        .iter()
        .map(|series| series.options.show_in_legend)
        .collect();
    assert_eq!(flags, vec![true, true, false, false]);
}
