use chart_legends::ChartError;
use chart_legends::api::{Chart, ChartConfig};
use chart_legends::core::Viewport;
use chart_legends::legend::{LegendAlign, LegendLayout, LegendOptions, LegendVerticalAlign};
use chart_legends::render::{Color, NullRenderer};

const CONFIG_JSON: &str = r##"{
    "viewport": { "width": 900, "height": 500 },
    "legend": { "align": "left", "verticalAlign": "top" },
    "secondaryLegend": {
        "align": "right",
        "layout": "vertical",
        "itemStyle": { "color": "#cc0000" }
    },
    "series": [
        { "name": "Temperature" },
        { "name": "Rainfall", "showInSecondaryLegend": true, "color": "#1f77b4" },
        { "name": "Humidity", "showInLegend": false },
        { "name": "" }
    ]
}"##;

#[test]
fn chart_config_parses_legend_and_series_options() {
    let config = ChartConfig::from_json_str(CONFIG_JSON).expect("config json");
    assert_eq!(config.viewport, Viewport::new(900, 500));
    assert_eq!(config.options.legend.align, LegendAlign::Left);
    assert_eq!(config.options.legend.vertical_align, LegendVerticalAlign::Top);
    assert_eq!(config.legend_defaults, LegendOptions::default());

    let overrides = config
        .options
        .secondary_legend
        .as_ref()
        .expect("secondary legend overrides");
    assert_eq!(overrides.align, Some(LegendAlign::Right));
    assert_eq!(overrides.layout, Some(LegendLayout::Vertical));
    assert_eq!(
        overrides.item_style.and_then(|style| style.color),
        Some(Color::from_rgb8(0xcc, 0, 0))
    );
    assert_eq!(overrides.vertical_align, None);

    assert_eq!(config.series.len(), 4);
    assert!(config.series[0].show_in_legend);
    assert!(!config.series[0].show_in_secondary_legend);
    assert!(config.series[1].show_in_secondary_legend);
    assert_eq!(config.series[1].color, Some(Color::from_rgb8(0x1f, 0x77, 0xb4)));
    assert!(!config.series[2].show_in_legend);
}

#[test]
fn unnamed_series_get_positional_names() {
    let config = ChartConfig::from_json_str(CONFIG_JSON).expect("config json");
    let chart = Chart::new(NullRenderer::default(), config).expect("chart");
    assert_eq!(chart.series()[3].name(), "Series 4");
    assert!(chart.has_secondary_legend());
}

#[test]
fn config_survives_json_round_trip() {
    let config = ChartConfig::from_json_str(CONFIG_JSON).expect("config json");
    let json = config.to_json_pretty().expect("serialize");
    assert!(json.contains("\"secondaryLegend\""));
    assert!(json.contains("\"showInSecondaryLegend\": true"));
    let reparsed = ChartConfig::from_json_str(&json).expect("reparse");
    assert_eq!(reparsed, config);
}

#[test]
fn secondary_legend_false_disables_the_feature() {
    let json = r#"{
        "viewport": { "width": 300, "height": 200 },
        "secondaryLegend": false,
        "series": [{ "name": "a", "showInSecondaryLegend": true }]
    }"#;
    let config = ChartConfig::from_json_str(json).expect("config json");
    assert!(config.options.secondary_legend.is_none());
    let chart = Chart::new(NullRenderer::default(), config).expect("chart");
    assert!(!chart.has_secondary_legend());
}

#[test]
fn malformed_json_and_bad_viewport_are_rejected() {
    let err = ChartConfig::from_json_str("{ \"viewport\": ").expect_err("truncated json");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = ChartConfig::from_json_str(
        r##"{ "viewport": { "width": 10, "height": 10 }, "legend": { "itemStyle": { "color": "#zzzzzz" } } }"##,
    )
    .expect_err("invalid color");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let config = ChartConfig::new(Viewport::new(0, 10));
    let err = Chart::new(NullRenderer::default(), config)
        .err()
        .expect("zero viewport");
    assert!(matches!(err, ChartError::InvalidViewport { width: 0, height: 10 }));
}

#[test]
fn invalid_secondary_overrides_fail_chart_init() {
    let json = r#"{
        "viewport": { "width": 300, "height": 200 },
        "secondaryLegend": { "padding": -3 },
        "series": [{ "name": "a", "showInSecondaryLegend": true }]
    }"#;
    let config = ChartConfig::from_json_str(json).expect("config json");
    let err = Chart::new(NullRenderer::default(), config)
        .err()
        .expect("negative padding");
    assert!(matches!(err, ChartError::InvalidLegendOptions(_)));
}
