//! Smoke test for the mv-app service layer.

use mv_app::{DashboardSession, StepOutcome, load_config, save_config, summarize, validate};
use mv_config::Preset;

#[test]
fn saved_config_drives_a_session() {
    let path = std::env::temp_dir().join("mv_app_smoke_linear.yaml");
    save_config(&path, &Preset::Linear.config()).unwrap();

    let config = load_config(&path).unwrap();
    validate(&config).unwrap();
    let summary = summarize(&config);
    assert_eq!(summary.groups.len(), 4);
    assert_eq!(summary.groups[2].signals.len(), 3);

    let mut session = DashboardSession::new(config).unwrap();
    for _ in 0..100 {
        assert_eq!(session.step(0.01).unwrap(), StepOutcome::Rendered);
    }

    let summary = session.summary();
    assert_eq!(summary.frames, 100);
    let voltage = &summary.panels[2];
    assert_eq!(voltage.group, "voltage");
    assert_eq!(voltage.lines, 3);
    let range = voltage.y_range.unwrap();
    assert!(range.min >= -120.0 && range.max <= 120.0);
    assert!(range.width() > 100.0);
}

#[test]
fn json_and_yaml_agree() {
    let dir = std::env::temp_dir();
    let yaml = dir.join("mv_app_smoke_rotary.yaml");
    let json = dir.join("mv_app_smoke_rotary.json");
    let config = Preset::Rotary.config();

    save_config(&yaml, &config).unwrap();
    save_config(&json, &config).unwrap();

    assert_eq!(load_config(&yaml).unwrap(), load_config(&json).unwrap());
}

#[test]
fn history_limit_caps_session_frames() {
    let mut config = Preset::Rotary.config();
    config.history_limit = Some(25);
    let mut session = DashboardSession::new(config).unwrap();
    for _ in 0..60 {
        session.step(0.02).unwrap();
    }
    let summary = session.summary();
    assert_eq!(summary.frames, 25);
    assert!(summary.panels.iter().all(|p| p.points == 25));
}
