//! End-to-end behaviour of a camera session through the public API.

use camera_control::{
    create_camera, CameraController, CameraError, CameraState, Feature, SimulatedSensor,
};
use proptest::prelude::*;
use std::io::Write;

fn frame_gaps(framerate: f64, frames: usize) -> Vec<(u64, chrono::Duration)> {
    let mut camera = seeded_camera();
    camera.set_framerate(framerate);
    camera.start();

    let mut previous = camera.get_frame().unwrap();
    let mut gaps = Vec::with_capacity(frames);
    for _ in 0..frames {
        let frame = camera.get_frame().unwrap();
        gaps.push((
            frame.frame_number() - previous.frame_number(),
            frame.timestamp() - previous.timestamp(),
        ));
        previous = frame;
    }
    gaps
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn seeded_camera() -> CameraController {
    CameraController::with_source(SimulatedSensor::with_seed(2024))
}

#[test]
fn test_configure_start_capture_stop() {
    init_tracing();
    let mut camera = create_camera();

    camera.set_framerate(1.0);
    camera.set_exposure_time(30.0);
    camera.set_width(600);
    camera.set_height(111);

    camera.start();
    assert!(camera.is_started());

    let frame = camera.get_frame().expect("frame while started");
    assert!(frame.is_valid());

    assert_eq!(camera.framerate(), 1.0);
    assert_eq!(camera.exposure_time(), 30.0);
    assert_eq!(camera.width(), 600);
    assert_eq!(camera.height(), 111);

    camera.stop();
    assert!(!camera.is_started());
}

#[test]
fn test_invalid_dimensions_fall_back_to_defaults() {
    init_tracing();
    let mut camera = create_camera();

    camera.set_width(90);
    camera.set_height(1001);

    camera.start();
    let frame = camera.get_frame().expect("frame while started");
    assert_eq!(frame.width(), 640);
    assert_eq!(frame.height(), 512);

    assert_eq!(camera.width(), 640);
    assert_eq!(camera.height(), 512);
    camera.stop();
}

#[test]
fn test_is_started_follows_lifecycle() {
    let mut camera = create_camera();
    assert!(!camera.is_started());
    camera.start();
    assert!(camera.is_started());
    camera.stop();
    assert!(!camera.is_started());
}

#[test]
fn test_burst_capture_leaves_state_untouched() {
    init_tracing();
    let mut camera = seeded_camera();
    camera.set_framerate(50.0);
    camera.set_exposure_time(19.2);
    camera.set_width(1000);
    camera.set_height(100);
    camera.start();

    let before = camera.config().clone();
    let mut previous = 0;
    for _ in 0..50 {
        let frame = camera.get_frame().expect("burst frame");
        assert!(frame.frame_number() > previous);
        previous = frame.frame_number();
    }

    assert_eq!(camera.config(), &before);
    assert_eq!(camera.state(), CameraState::Started);
    assert_eq!(camera.stats().frames_acquired, 50);
}

#[test]
fn test_restart_after_stop() {
    let mut camera = seeded_camera();
    camera.start();
    let first = camera.get_frame().unwrap().frame_number();
    camera.stop();

    camera.start();
    assert!(camera.is_started());
    let second = camera.get_frame().unwrap().frame_number();
    assert!(second > first);
}

#[test]
fn test_configuration_readable_after_stop() {
    let mut camera = seeded_camera();
    camera.set_exposure_time(6.0);
    camera.start();
    camera.stop();

    assert_eq!(camera.exposure_time(), 6.0);
    assert!(matches!(
        camera.get_frame(),
        Err(CameraError::NotStarted { .. })
    ));
}

#[test]
fn test_sessions_are_independent() {
    let mut a = seeded_camera();
    let b = seeded_camera();

    a.set_width(800);
    a.start();

    assert_eq!(b.width(), 640);
    assert!(!b.is_started());
}

#[test]
fn test_named_features() {
    let mut camera = seeded_camera();
    for (name, value) in [
        ("framerate", 20.0),
        ("exposuretime", 0.1),
        ("width", 100.0),
        ("height", 1000.0),
    ] {
        let feature: Feature = name.parse().unwrap();
        assert!(!camera.set_feature(feature, value).was_defaulted());
        assert_eq!(camera.feature(feature), value);
    }
}

#[test]
fn test_controller_from_config_file() {
    init_tracing();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[camera]\nwidth = 800\nheight = 5000\nframerate = 14.0\nexposure_time = 19.2\nseed = 11"
    )
    .unwrap();

    let camera = CameraController::from_file(file.path()).unwrap();
    assert_eq!(camera.width(), 800);
    assert_eq!(camera.height(), 512);
    assert_eq!(camera.framerate(), 14.0);
    assert_eq!(camera.exposure_time(), 19.2);
    assert_eq!(camera.stats().settings_defaulted, 1);
    assert!(!camera.is_started());
}

#[test]
fn test_frame_spacing_follows_framerate() {
    for (step, gap) in frame_gaps(1.0, 20) {
        assert_eq!(gap, chrono::Duration::seconds(step as i64));
    }
    for (step, gap) in frame_gaps(50.0, 20) {
        assert_eq!(gap, chrono::Duration::milliseconds(20 * step as i64));
    }
}

#[test]
fn test_config_file_out_of_range_dimensions_default() {
    init_tracing();
    for width in ["-5", "5000000000", "99.9", "1000.5"] {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[camera]\nwidth = {width}\nheight = -1\nseed = 3").unwrap();

        let camera = CameraController::from_file(file.path()).unwrap();
        assert_eq!(camera.width(), 640, "width = {width}");
        assert_eq!(camera.height(), 512);
        assert_eq!(camera.stats().settings_defaulted, 2);
    }
}

#[test]
fn test_config_file_fractional_dimensions_truncate() {
    let file: camera_control::FileConfig = "[camera]\nwidth = 100.5\nheight = 999.9\n"
        .parse()
        .unwrap();
    let camera = CameraController::from_file_config(&file);
    assert_eq!(camera.width(), 100);
    assert_eq!(camera.height(), 999);
    assert_eq!(camera.stats().settings_accepted, 2);
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = CameraController::from_file(dir.path().join("absent.toml"));
    assert!(matches!(
        result,
        Err(camera_control::ConfigError::FileRead(_))
    ));
}

proptest! {
    #[test]
    fn prop_width_in_range_round_trips(w in 100u32..=1000) {
        let mut camera = seeded_camera();
        camera.set_width(w);
        prop_assert_eq!(camera.width(), w);
    }

    #[test]
    fn prop_width_out_of_range_defaults(w in prop_oneof![0u32..100, 1001u32..=u32::MAX]) {
        let mut camera = seeded_camera();
        camera.set_width(500);
        prop_assert!(camera.set_width(w).was_defaulted());
        prop_assert_eq!(camera.width(), 640);
    }

    #[test]
    fn prop_height_in_range_round_trips(h in 100u32..=1000) {
        let mut camera = seeded_camera();
        camera.set_height(h);
        prop_assert_eq!(camera.height(), h);
    }

    #[test]
    fn prop_height_out_of_range_defaults(h in prop_oneof![0u32..100, 1001u32..=u32::MAX]) {
        let mut camera = seeded_camera();
        camera.set_height(500);
        prop_assert!(camera.set_height(h).was_defaulted());
        prop_assert_eq!(camera.height(), 512);
    }

    #[test]
    fn prop_framerate_in_range_round_trips(f in 1.0f64..=50.0) {
        let mut camera = seeded_camera();
        camera.set_framerate(f);
        prop_assert_eq!(camera.framerate(), f);
    }

    #[test]
    fn prop_exposure_in_range_round_trips(e in 0.1f64..=30.0) {
        let mut camera = seeded_camera();
        camera.set_exposure_time(e);
        prop_assert_eq!(camera.exposure_time(), e);
    }

    #[test]
    fn prop_rejection_is_isolated(w in 1001u32..5000, h in 100u32..=1000, f in 1.0f64..=50.0) {
        let mut camera = seeded_camera();
        camera.set_height(h);
        camera.set_framerate(f);
        camera.set_width(w);
        prop_assert_eq!(camera.width(), 640);
        prop_assert_eq!(camera.height(), h);
        prop_assert_eq!(camera.framerate(), f);
    }
}
