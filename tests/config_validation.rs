use piplot::{ConfigError, PlotConfig};
use serde_json::json;

#[test]
fn ordered_bounds_are_accepted() {
    for (a, b) in [(-5.0, 5.0), (0.0, 0.0), (-100.0, -99.5), (3.0, 17.0)] {
        let mut p = PlotConfig::default();
        p.set_start_value(a).unwrap();
        p.set_stop_value(b).unwrap();
        assert_eq!((p.start_value(), p.stop_value()), (a, b));
    }
}

#[test]
fn start_above_stop_is_rejected() {
    let mut p = PlotConfig::default();
    p.set_stop_value(5.0).unwrap();
    let err = p.set_start_value(6.0).unwrap_err();
    assert_eq!(err, ConfigError::StartAboveStop { start: 6.0, stop: 5.0 });
    assert_eq!(p.start_value(), -20.0);
}

#[test]
fn stop_below_start_is_rejected() {
    let mut p = PlotConfig::default();
    p.set_start_value(10.0).unwrap();
    assert!(matches!(
        p.set_stop_value(9.0),
        Err(ConfigError::StopBelowStart { .. })
    ));
    assert_eq!(p.stop_value(), 20.0);
}

#[test]
fn individual_setters_depend_on_order() {
    // Moving to [30, 40) one bound at a time only works stop-first.
    let mut p = PlotConfig::default();
    assert!(p.set_start_value(30.0).is_err());
    p.set_stop_value(40.0).unwrap();
    p.set_start_value(30.0).unwrap();
    assert_eq!((p.start_value(), p.stop_value()), (30.0, 40.0));
}

#[test]
fn step_must_be_positive() {
    let mut p = PlotConfig::default();
    for bad in [0.0, -0.0, -1.0, -1e-9, f64::NAN] {
        assert!(p.set_step(bad).is_err(), "step {bad} accepted");
    }
    assert_eq!(p.step(), 0.01);
    for good in [1e-3, 0.5, 3.0] {
        p.set_step(good).unwrap();
        assert_eq!(p.step(), good);
    }
}

#[test]
fn flags_reject_non_boolean_values() {
    let mut p = PlotConfig::default();
    for name in ["need_grid", "need_legend", "need_pi_marks"] {
        for bad in [json!("true"), json!(1), json!(null), json!([true])] {
            let err = p.set_option(name, &bad).unwrap_err();
            assert_eq!(err, ConfigError::NotBoolean { option: name.to_string() });
        }
        p.set_option(name, &json!(true)).unwrap();
    }
    assert!(p.need_grid() && p.need_legend() && p.need_pi_marks());
    p.set_option("need_grid", &json!(false)).unwrap();
    assert!(!p.need_grid());
}

#[test]
fn numeric_options_reject_non_numbers() {
    let mut p = PlotConfig::default();
    for name in ["start_value", "stop_value", "step"] {
        assert!(matches!(
            p.set_option(name, &json!("5")),
            Err(ConfigError::NotNumeric { .. })
        ));
        assert!(p.set_option(name, &json!(true)).is_err());
    }
    p.set_option("stop_value", &json!(7)).unwrap();
    p.set_option("step", &json!(0.25)).unwrap();
    assert_eq!((p.stop_value(), p.step()), (7.0, 0.25));
}

#[test]
fn unknown_option_is_an_error() {
    let mut p = PlotConfig::default();
    assert_eq!(
        p.set_option("colour", &json!("red")),
        Err(ConfigError::UnknownOption("colour".into()))
    );
}

#[test]
fn set_plot_ranges_is_atomic() {
    let mut p = PlotConfig::default();
    p.set_plot_ranges(-5.0, 5.0, 0.1).unwrap();
    assert_eq!((p.start_value(), p.stop_value(), p.step()), (-5.0, 5.0, 0.1));

    // disjoint from the previous range: fine, both bounds are checked together
    p.set_plot_ranges(30.0, 40.0, 0.5).unwrap();
    assert_eq!((p.start_value(), p.stop_value(), p.step()), (30.0, 40.0, 0.5));

    assert!(matches!(
        p.set_plot_ranges(10.0, 5.0, 0.1),
        Err(ConfigError::InvertedRange { .. })
    ));
    assert!(matches!(
        p.set_plot_ranges(0.0, 1.0, 0.0),
        Err(ConfigError::NonPositiveStep { .. })
    ));
    // failures leave everything as it was
    assert_eq!((p.start_value(), p.stop_value(), p.step()), (30.0, 40.0, 0.5));
}
