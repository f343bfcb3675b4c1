//! Config loading, saving, validation, and introspection.

use std::path::Path;

use mv_config::{DisplayConfig, Preset};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// On-disk format, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("yaml" | "yml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(AppError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Summary of one signal group for listing.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub id: String,
    pub signals: Vec<String>,
    pub y_label: String,
    pub factor: f64,
    pub has_legend: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfigSummary {
    pub name: String,
    pub version: u32,
    pub signal_count: usize,
    pub history_limit: Option<usize>,
    pub groups: Vec<GroupSummary>,
}

/// Load and validate a display config from a YAML or JSON file.
pub fn load_config(path: &Path) -> AppResult<DisplayConfig> {
    let format = ConfigFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let config = match format {
        ConfigFormat::Yaml => mv_config::from_yaml_str(&content)?,
        ConfigFormat::Json => mv_config::from_json_str(&content)?,
    };

    info!(path = %path.display(), groups = config.groups.len(), "loaded display config");
    Ok(config)
}

/// Validate, then write `config` in the format implied by `path`.
pub fn save_config(path: &Path, config: &DisplayConfig) -> AppResult<()> {
    let content = match ConfigFormat::from_path(path)? {
        ConfigFormat::Yaml => mv_config::to_yaml_string(config)?,
        ConfigFormat::Json => mv_config::to_json_string(config)?,
    };

    std::fs::write(path, content).map_err(|e| AppError::ConfigFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

pub fn validate(config: &DisplayConfig) -> AppResult<()> {
    mv_config::validate_config(config)?;
    Ok(())
}

/// The file at `path` when given, otherwise the built-in `preset`.
pub fn resolve_config(path: Option<&Path>, preset: Preset) -> AppResult<DisplayConfig> {
    match path {
        Some(path) => load_config(path),
        None => {
            debug!(preset = preset.label(), "using built-in display config");
            Ok(preset.config())
        }
    }
}

pub fn summarize(config: &DisplayConfig) -> ConfigSummary {
    ConfigSummary {
        name: config.name.clone(),
        version: config.version,
        signal_count: config.signal_names().len(),
        history_limit: config.history_limit,
        groups: config
            .groups
            .iter()
            .map(|group| GroupSummary {
                id: group.id.clone(),
                signals: group.signals.clone(),
                y_label: group.y_label.clone(),
                factor: group.conversion.factor(),
                has_legend: group.legend.is_some(),
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/b.yml")).unwrap(),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("b.JSON")).unwrap(),
            ConfigFormat::Json
        );
        assert!(matches!(
            ConfigFormat::from_path(Path::new("b.toml")),
            Err(AppError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn summary_of_rotary_preset() {
        let summary = summarize(&Preset::Rotary.config());
        assert_eq!(summary.groups.len(), 4);
        assert_eq!(summary.signal_count, 6);
        assert_eq!(summary.groups[0].id, "angle");
        assert!((summary.groups[0].factor - 180.0 / std::f64::consts::PI).abs() < 1e-12);
        assert!(summary.groups[0].has_legend);
        assert!(!summary.groups[1].has_legend);
    }

    #[test]
    fn missing_file_reports_path() {
        let path = Path::new("/definitely/not/here.yaml");
        match load_config(path) {
            Err(AppError::ConfigFileRead { path: p, .. }) => assert_eq!(p, path),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn resolve_prefers_preset_without_path() {
        let config = resolve_config(None, Preset::Linear).unwrap();
        assert_eq!(config, Preset::Linear.config());
    }
}
