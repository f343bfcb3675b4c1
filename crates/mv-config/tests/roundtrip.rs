use mv_config::{
    ConfigError, ConfigFileError, Conversion, DisplayConfig, SceneGeometry, SignalGroup,
    from_yaml_str, load_json, load_yaml, presets, save_json, save_yaml,
};
use mv_core::NamedConversion;

#[test]
fn roundtrip_yaml_default_config() {
    let config = DisplayConfig::default();

    let path = std::env::temp_dir().join("mv_config_roundtrip_default.yaml");
    save_yaml(&path, &config).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn roundtrip_json_linear_config() {
    let mut config = presets::linear_motor();
    config.history_limit = Some(500);

    let path = std::env::temp_dir().join("mv_config_roundtrip_linear.json");
    save_json(&path, &config).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(config, loaded);
}

#[test]
fn yaml_accepts_named_and_scalar_conversions() {
    let yaml = r#"
version: 1
name: bench
groups:
  - id: angle
    signals: [theta_ref, theta]
    y_label: Angle (deg)
    legend: [Reference, Actual]
    conversion: rad_to_deg
  - id: speed
    signals: [omega]
    y_label: Speed (rpm)
    conversion: 9.549296585513721
  - id: torque
    signals: [torque]
    y_label: Torque (N-m)
    x_label: t (s)
scene:
  stator_radius: 2.0
  rotor_radius: 1.2
  shaft_radius: 0.3
"#;
    let config = from_yaml_str(yaml).unwrap();
    assert_eq!(
        config.groups[0].conversion,
        Conversion::Named(NamedConversion::RadToDeg)
    );
    assert_eq!(
        config.groups[1].conversion,
        Conversion::Factor(9.549296585513721)
    );
    assert_eq!(config.groups[2].conversion, Conversion::Factor(1.0));
    assert_eq!(config.groups[2].x_label.as_deref(), Some("t (s)"));
    assert_eq!(config.scene, SceneGeometry::new(2.0, 1.2, 0.3));
    assert_eq!(config.history_limit, None);
}

#[test]
fn yaml_with_bad_legend_fails_validation() {
    let yaml = r#"
version: 1
name: bad
groups:
  - id: angle
    signals: [theta_ref, theta]
    legend: [a, b, c]
"#;
    let err = from_yaml_str(yaml).unwrap_err();
    match err {
        ConfigFileError::Validation(ConfigError::LegendLength {
            expected, found, ..
        }) => {
            assert_eq!(expected, 2);
            assert_eq!(found, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn save_rejects_invalid_config() {
    let mut config = DisplayConfig::default();
    config.groups.push(SignalGroup::new("empty", Vec::<String>::new()));

    let path = std::env::temp_dir().join("mv_config_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &config),
        Err(ConfigFileError::Validation(ConfigError::EmptyGroup { .. }))
    ));
}

#[test]
fn missing_file_is_io_error() {
    let path = std::env::temp_dir().join("mv_config_does_not_exist_42.yaml");
    assert!(matches!(load_yaml(&path), Err(ConfigFileError::Io(_))));
}
