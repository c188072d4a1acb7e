// File: crates/swingchart-core/tests/composer.rs
// Purpose: End-to-end scene composition and the hover state machine.

use swingchart_core::grid::GridOrientation;
use swingchart_core::{
    compose, ChartComposer, ChartConfig, ComposeOutcome, DashPattern, DisplayOptions, FixedPointer, HoverState,
    ChartError, Indicator, Interval, TimeSeriesPoint, NO_VALUE,
};

fn sample_series() -> Vec<TimeSeriesPoint> {
    vec![
        TimeSeriesPoint {
            open: Some(98.0),
            high: Some(101.0),
            low: Some(97.0),
            volume: Some(1_200.0),
            ma5: Some(99.0),
            ..TimeSeriesPoint::with_close("2024-06-20", 100.0)
        },
        TimeSeriesPoint {
            open: Some(100.0),
            high: Some(112.0),
            low: Some(99.5),
            volume: Some(2_400.0),
            ma25: Some(104.0),
            volume_ma25: Some(1_800.0),
            ..TimeSeriesPoint::with_close("2024-06-21", 110.0)
        },
        TimeSeriesPoint::with_close("2024-06-24", 105.0),
    ]
}

#[test]
fn empty_or_closeless_series_is_insufficient() {
    let outcome = compose(&[], &DisplayOptions::all(), &ChartConfig::default(), HoverState::Idle);
    assert_eq!(outcome, ComposeOutcome::InsufficientData);

    let no_close = vec![TimeSeriesPoint { date: "2024-01-01".into(), volume: Some(10.0), ..Default::default() }];
    let outcome = compose(&no_close, &DisplayOptions::all(), &ChartConfig::default(), HoverState::Active(0));
    assert!(!outcome.is_drawable());
    assert!(outcome.scene().is_none());
}

#[test]
fn idle_scene_has_layers_but_no_crosshair() {
    let composer = ChartComposer::new(sample_series(), DisplayOptions::default());
    let outcome = composer.compose();
    let scene = outcome.scene().expect("drawable");

    assert_eq!(scene.width(), 720.0);
    assert_eq!(scene.height(), 360.0);
    assert_eq!(scene.line.commands.len(), 3);
    assert_eq!(scene.area.commands.len(), 6);
    assert!(scene.volume_bars.is_empty());
    assert!(scene.indicators.is_empty());
    assert!(scene.crosshair.is_none());
    assert!(scene.tooltip.is_none());

    let vertical = scene.gridlines.iter().filter(|g| g.orientation == GridOrientation::Vertical).count();
    let horizontal = scene.gridlines.iter().filter(|g| g.orientation == GridOrientation::Horizontal).count();
    assert_eq!((vertical, horizontal), (6, 4));
}

#[test]
fn enabled_layers_appear_with_their_dash_styles() {
    let composer = ChartComposer::new(sample_series(), DisplayOptions::all());
    let outcome = composer.compose();
    let scene = outcome.scene().expect("drawable");

    assert_eq!(scene.volume_bars.len(), 3);
    // ma75 has no values anywhere, so it is absent rather than empty.
    let keys: Vec<Indicator> = scene.indicators.iter().map(|p| p.indicator).collect();
    assert_eq!(keys, vec![Indicator::Ma5, Indicator::Ma25]);
    assert_eq!(scene.indicators[0].dash.on, 4.0);
    assert_eq!(scene.geometry.price_height, 270.0);
}

#[test]
fn every_indicator_gets_its_own_dash_pattern() {
    let series: Vec<TimeSeriesPoint> = (0..4)
        .map(|i| TimeSeriesPoint {
            ma5: Some(100.0 + i as f64),
            ma25: Some(101.0 + i as f64),
            ma75: Some(102.0 + i as f64),
            ..TimeSeriesPoint::with_close(format!("2024-07-0{}", i + 1), 100.0 + i as f64)
        })
        .collect();
    let outcome = compose(&series, &DisplayOptions::all(), &ChartConfig::default(), HoverState::Idle);
    let scene = outcome.scene().expect("drawable");

    let styles: Vec<(Indicator, f64, f64)> =
        scene.indicators.iter().map(|p| (p.indicator, p.dash.on, p.dash.off)).collect();
    assert_eq!(
        styles,
        vec![(Indicator::Ma5, 4.0, 2.0), (Indicator::Ma25, 4.0, 2.0), (Indicator::Ma75, 8.0, 4.0)]
    );
    for path in &scene.indicators {
        assert_eq!(path.dash, DashPattern::for_indicator(path.indicator));
    }
    assert_ne!(DashPattern::for_indicator(Indicator::Ma75), DashPattern::for_indicator(Indicator::Ma25));
}

#[test]
fn hover_adds_crosshair_and_tooltip() {
    let mut composer = ChartComposer::new(sample_series(), DisplayOptions::all());
    assert_eq!(composer.on_pointer_move(360.0, 720.0), HoverState::Active(1));

    let outcome = composer.compose();
    let scene = outcome.scene().expect("drawable");
    let crosshair = scene.crosshair.expect("crosshair while active");
    assert_eq!(crosshair.x, 360.0);
    assert_eq!(crosshair.marker.y, 0.0);

    let tooltip = scene.tooltip.as_ref().expect("tooltip while active");
    assert_eq!(tooltip.date, "2024-06-21");
    assert_eq!(tooltip.interval, Interval::Daily);
    assert_eq!(tooltip.field("High").and_then(|f| f.value), Some(112.0));
    assert_eq!(tooltip.indicator(Indicator::Ma5).map(|f| f.display_value()), Some(NO_VALUE.to_string()));
    assert_eq!(tooltip.indicator(Indicator::Ma25).map(|f| f.display_value()), Some("104.00".to_string()));
    assert_eq!(tooltip.field("Volume MA25").map(|f| f.display_value()), Some("1,800".to_string()));
    assert_eq!(tooltip.lines()[0], "2024-06-21 (daily)");
}

#[test]
fn tooltip_only_lists_enabled_fields() {
    let opts = DisplayOptions { ma75: true, ..DisplayOptions::default() };
    let scene = compose(&sample_series(), &opts, &ChartConfig::default(), HoverState::Active(2));
    let tooltip = scene.scene().and_then(|s| s.tooltip.clone()).expect("tooltip");
    let labels: Vec<&str> = tooltip.fields.iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["Open", "High", "Low", "Close", "Volume", "MA75"]);
    assert_eq!(tooltip.field("Open").map(|f| f.display_value()), Some(NO_VALUE.to_string()));
}

#[test]
fn leave_clears_and_out_of_bounds_is_ignored() {
    let mut composer = ChartComposer::new(sample_series(), DisplayOptions::default());
    composer.on_pointer_move(720.0, 720.0);
    assert_eq!(composer.hover(), HoverState::Active(2));
    composer.on_pointer_move(-1.0, 720.0);
    assert_eq!(composer.hover(), HoverState::Active(2));
    composer.on_pointer_leave();
    assert_eq!(composer.hover(), HoverState::Idle);
    assert!(composer.compose().scene().is_some_and(|s| s.crosshair.is_none()));
}

#[test]
fn pointer_move_on_empty_series_is_a_no_op() {
    let mut composer = ChartComposer::new(Vec::new(), DisplayOptions::default());
    assert_eq!(composer.on_pointer_move(10.0, 720.0), HoverState::Idle);
    assert_eq!(composer.on_pointer_move_from(&FixedPointer { offset: 0.0, width: 720.0 }), HoverState::Idle);
}

#[test]
fn replacing_the_series_resets_hover() {
    let mut composer = ChartComposer::new(sample_series(), DisplayOptions::default());
    composer.on_pointer_move(0.0, 720.0);
    composer.set_series(sample_series()[..1].to_vec());
    assert_eq!(composer.hover(), HoverState::Idle);
    assert_eq!(composer.chartable_len(), 1);
}

#[test]
fn stale_hover_index_is_not_drawn() {
    let outcome = compose(&sample_series(), &DisplayOptions::default(), &ChartConfig::default(), HoverState::Active(7));
    let scene = outcome.scene().expect("drawable");
    assert!(scene.crosshair.is_none());
    assert!(scene.tooltip.is_none());
}

#[test]
fn composition_is_idempotent() {
    let series = sample_series();
    let a = compose(&series, &DisplayOptions::all(), &ChartConfig::default(), HoverState::Active(1));
    let b = compose(&series, &DisplayOptions::all(), &ChartConfig::default(), HoverState::Active(1));
    assert_eq!(a, b);
}

#[test]
fn composer_rejects_invalid_layouts() {
    let bad = ChartConfig { volume_fraction: 1.5, ..ChartConfig::default() };
    assert!(matches!(
        ChartComposer::with_config(sample_series(), DisplayOptions::all(), bad),
        Err(ChartError::InvalidConfig(_))
    ));

    let wide = ChartConfig { width: 900.0, ..ChartConfig::default() };
    let mut composer = ChartComposer::with_config(sample_series(), DisplayOptions::all(), wide).expect("valid config");
    assert!(composer.set_config(bad).is_err());
    assert_eq!(composer.config().width, 900.0);
    let scene_height = composer.compose().scene().map(|s| s.geometry.price_height);
    assert_eq!(scene_height, Some(270.0));

    assert!(composer.set_config(ChartConfig::default()).is_ok());
    assert_eq!(composer.config().width, 720.0);
}
