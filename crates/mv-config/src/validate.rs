//! Display config validation logic.

use crate::schema::DisplayConfig;
use mv_core::{ConfigError, ConfigResult};
use std::collections::HashSet;

pub fn validate_config(config: &DisplayConfig) -> ConfigResult<()> {
    if config.version == 0 || config.version > crate::LATEST_VERSION {
        return Err(ConfigError::UnsupportedVersion {
            version: config.version,
        });
    }

    if config.groups.is_empty() {
        return Err(ConfigError::NoGroups);
    }

    let mut group_ids = HashSet::new();
    for group in &config.groups {
        if !group_ids.insert(&group.id) {
            return Err(ConfigError::Duplicate {
                what: "group id",
                id: group.id.clone(),
            });
        }
        group.validate()?;
    }

    config.scene.validate()?;

    if config.history_limit == Some(0) {
        return Err(ConfigError::InvalidArg {
            what: "history_limit must be at least 1",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SceneGeometry, SignalGroup};

    fn config_with(groups: Vec<SignalGroup>) -> DisplayConfig {
        DisplayConfig {
            version: crate::LATEST_VERSION,
            name: "test".into(),
            groups,
            scene: SceneGeometry::default(),
            history_limit: None,
        }
    }

    #[test]
    fn default_config_is_valid() {
        validate_config(&DisplayConfig::default()).unwrap();
    }

    #[test]
    fn zero_groups_rejected() {
        assert_eq!(
            validate_config(&config_with(vec![])),
            Err(ConfigError::NoGroups)
        );
    }

    #[test]
    fn duplicate_group_ids_rejected() {
        let config = config_with(vec![
            SignalGroup::new("g", ["a"]),
            SignalGroup::new("g", ["b"]),
        ]);
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::Duplicate { what: "group id", .. })
        ));
    }

    #[test]
    fn shared_signals_across_groups_allowed() {
        let config = config_with(vec![
            SignalGroup::new("deg", ["theta"]).with_conversion(180.0 / std::f64::consts::PI),
            SignalGroup::new("rad", ["theta"]),
        ]);
        validate_config(&config).unwrap();
    }

    #[test]
    fn unsupported_version_rejected() {
        let mut config = config_with(vec![SignalGroup::new("g", ["a"])]);
        config.version = crate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn zero_history_limit_rejected() {
        let mut config = config_with(vec![SignalGroup::new("g", ["a"])]);
        config.history_limit = Some(0);
        assert!(validate_config(&config).is_err());
    }
}
