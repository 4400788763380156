mod common;

use common::temp_config;
use folio::config::{Config, ConfigError};
use folio::ui::intro::IntroTiming;
use tempfile::TempDir;

#[test]
fn missing_file_yields_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn defaults_match_the_intro_constants() {
    let config = Config::default();
    assert_eq!(config.splash.target_text, "Adon Paul Tomy");
    assert_eq!(config.splash.reveal_interval_ms, 100);
    assert_eq!(config.splash.resolve_threshold_frames, 20);
    assert_eq!(config.splash.settle_delay_ms, 600);
    assert_eq!(config.splash.wipe_open_radius, 150.0);
    assert_eq!(config.splash.stiffness, 0.015);
    assert_eq!(config.splash.damping, 0.85);
    assert_eq!(config.splash.scroll_sensitivity, 0.3);
    assert_eq!(config.transition.duration_ms, 500);
    assert_eq!(config.ui.frame_interval_ms, 16);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let (_dir, path) = temp_config(
        r#"
[splash]
target_text = "Hello"
settle_delay_ms = 1000

[transition]
duration_ms = 250
"#,
    );
    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.splash.target_text, "Hello");
    assert_eq!(config.splash.settle_delay_ms, 1000);
    assert_eq!(config.splash.reveal_interval_ms, 100);
    assert_eq!(config.transition.duration_ms, 250);
    assert_eq!(config.ui.frame_interval_ms, 16);

    let timing = IntroTiming::from(&config.splash);
    assert_eq!(timing.settle_delay_ms, 1000);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let (_dir, path) = temp_config("[splash\ntarget_text = ");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }), "{err}");
}

#[test]
fn wrong_type_is_a_parse_error() {
    let (_dir, path) = temp_config("[splash]\nreveal_interval_ms = \"fast\"\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ParseError { .. })
    ));
}

#[test]
fn damping_outside_unit_interval_is_rejected() {
    let (_dir, path) = temp_config("[splash]\ndamping = 1.0\n");
    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError { .. }));
    assert!(err.to_string().contains("damping"), "{err}");
}

#[test]
fn non_positive_stiffness_is_rejected() {
    let (_dir, path) = temp_config("[splash]\nstiffness = 0.0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn open_radius_beyond_full_cover_is_rejected() {
    let (_dir, path) = temp_config("[splash]\nwipe_open_radius = 200.0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}

#[test]
fn zero_frame_interval_is_rejected() {
    let (_dir, path) = temp_config("[ui]\nframe_interval_ms = 0\n");
    assert!(matches!(
        Config::load_from(&path),
        Err(ConfigError::ValidationError { .. })
    ));
}
