//! Trajectory Regression Tests
//!
//! Exercises the full pipeline — survey file loading, normalization,
//! position integration, and MD/TVD conversion — end to end, the way the
//! command-line tools drive it. Asserts on station alignment, origin
//! anchoring, round-trip conversion, and determinism.

use std::io::Write;

use wellpath::{
    compute_position, load_survey, DepthConverter, DeviationOptions, DeviationSurvey, Location,
    PathMethod, SurveyStation,
};

/// Write a survey fixture file and return its handle.
fn survey_file(content: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("create temp survey file");
    f.write_all(content.as_bytes()).expect("write temp survey file");
    f
}

const BUILD_AND_HOLD: &str = "\
MD,INC,AZI
0,0,0
500,30,45
1000,45,90
";

#[test]
fn file_to_path_pipeline_produces_aligned_log() {
    let f = survey_file(BUILD_AND_HOLD);
    let raw = load_survey(f.path()).expect("load survey");
    let survey = DeviationSurvey::normalize(&raw, None).expect("normalize survey");
    let log = compute_position(&survey, PathMethod::MinimumCurvature);

    assert_eq!(log.len(), survey.len(), "one point per station");
    assert_eq!(log.mds(), survey.mds().as_slice(), "md columns must align");
    assert_eq!(log.points()[0].northing, 0.0);
    assert_eq!(log.points()[0].easting, 0.0);
    assert_eq!(log.points()[0].tvd, 0.0);
}

#[test]
fn below_surface_survey_gains_surface_station_through_pipeline() {
    let f = survey_file("MD INC AZI\n50 2 10\n500 30 45\n1000 45 90\n");
    let raw = load_survey(f.path()).expect("load survey");
    assert_eq!(raw.len(), 3);

    let survey = DeviationSurvey::normalize(&raw, None).expect("normalize survey");
    assert_eq!(survey.len(), 4, "surface padding adds exactly one station");
    assert_eq!(survey.stations()[0], SurveyStation::new(0.0, 0.0, 0.0));

    let log = compute_position(&survey, PathMethod::MinimumCurvature);
    assert_eq!(log.len(), 4);
}

#[test]
fn deviated_well_tvd_stays_below_md_and_round_trips() {
    let f = survey_file(BUILD_AND_HOLD);
    let raw = load_survey(f.path()).expect("load survey");

    let mut location = Location::default();
    location
        .add_deviation(&raw, DeviationOptions::default())
        .expect("add deviation");

    let last = location.position_log().expect("log").last_point().expect("last");
    assert!(last.tvd < 1000.0, "TVD must be shallower than MD, got {}", last.tvd);
    assert!(last.northing > 0.0 && last.easting > 0.0);

    for md in [0.0, 100.0, 500.0, 980.0] {
        let back = location.tvd_to_md(location.md_to_tvd(md));
        assert!(
            (back - md).abs() < 1e-9,
            "MD {md} round-tripped to {back}"
        );
    }
}

#[test]
fn conversion_extrapolates_past_survey_without_error() {
    let f = survey_file(BUILD_AND_HOLD);
    let raw = load_survey(f.path()).expect("load survey");
    let survey = DeviationSurvey::normalize(&raw, None).expect("normalize survey");
    let log = compute_position(&survey, PathMethod::MinimumCurvature);
    let converter = DepthConverter::from_position_log(&log);

    let last_tvd = log.last_point().expect("last").tvd;
    let beyond = converter.md_to_tvd(1100.0);
    assert!(
        beyond > last_tvd,
        "extrapolated TVD {beyond} should extend past the last point {last_tvd}"
    );
    // Linear extension: twice the overshoot doubles the extra TVD.
    let further = converter.md_to_tvd(1200.0);
    assert!(
        ((further - last_tvd) - 2.0 * (beyond - last_tvd)).abs() < 1e-9,
        "end-segment extrapolation must be linear"
    );
}

#[test]
fn all_methods_agree_on_vertical_well() {
    let f = survey_file("0 0 0\n300 0 0\n800 0 0\n");
    let raw = load_survey(f.path()).expect("load survey");
    let survey = DeviationSurvey::normalize(&raw, None).expect("normalize survey");

    for method in [
        PathMethod::AverageAngle,
        PathMethod::BalancedTangential,
        PathMethod::MinimumCurvature,
    ] {
        let log = compute_position(&survey, method);
        for (point, &md) in log.points().iter().zip(log.mds()) {
            assert_eq!(point.northing, 0.0, "{method}: vertical well drifted north");
            assert_eq!(point.easting, 0.0, "{method}: vertical well drifted east");
            assert_eq!(point.tvd, md, "{method}: vertical well TVD must equal MD");
        }
    }
}

#[test]
fn target_td_extends_path_deterministically() {
    let f = survey_file(BUILD_AND_HOLD);
    let raw = load_survey(f.path()).expect("load survey");

    let base = DeviationSurvey::normalize(&raw, None).expect("normalize");
    let extended = DeviationSurvey::normalize(&raw, Some(1200.0)).expect("normalize with td");
    assert_eq!(extended.len(), base.len(), "TD adjustment must not add stations");
    assert_eq!(extended.last_md(), 1200.0);

    let log_a = compute_position(&extended, PathMethod::MinimumCurvature);
    let log_b = compute_position(&extended, PathMethod::MinimumCurvature);
    assert_eq!(log_a, log_b, "identical inputs must give bit-identical logs");

    let base_log = compute_position(&base, PathMethod::MinimumCurvature);
    assert!(
        log_a.last_point().expect("last").tvd > base_log.last_point().expect("last").tvd,
        "extending TD must deepen the path"
    );
}

#[test]
fn unknown_method_name_is_rejected_up_front() {
    let err = "not_a_method".parse::<PathMethod>().unwrap_err();
    assert!(err.to_string().contains("not_a_method"));
}

#[test]
fn methods_diverge_on_curved_section() {
    // A real build section: the three methods approximate the same arc
    // differently, and minimum curvature sits between no-correction
    // tangential and the angle-average shortcut rather than matching either.
    let f = survey_file("0 0 0\n500 30 45\n1000 45 90\n");
    let raw = load_survey(f.path()).expect("load survey");
    let survey = DeviationSurvey::normalize(&raw, None).expect("normalize");

    let aa = compute_position(&survey, PathMethod::AverageAngle);
    let bt = compute_position(&survey, PathMethod::BalancedTangential);
    let mc = compute_position(&survey, PathMethod::MinimumCurvature);

    let (aa_last, bt_last, mc_last) = (
        aa.last_point().expect("aa"),
        bt.last_point().expect("bt"),
        mc.last_point().expect("mc"),
    );

    assert!(mc_last.tvd > bt_last.tvd, "RF > 1 must stretch the tangential path");
    assert!((mc_last.tvd - bt_last.tvd).abs() > 1e-6, "correction must be visible");
    assert!((aa_last.tvd - mc_last.tvd).abs() > 1e-6, "methods must not collapse");
    // All of them agree the well is deviated.
    for p in [aa_last, bt_last, mc_last] {
        assert!(p.tvd < 1000.0);
        assert!(p.northing > 0.0 && p.easting > 0.0);
    }
}
