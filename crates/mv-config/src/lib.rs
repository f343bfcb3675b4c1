//! mv-config: display description file format and validation.

pub mod presets;
pub mod schema;
pub mod validate;

pub use presets::Preset;
pub use schema::*;
pub use validate::validate_config;

pub use mv_core::ConfigError;

pub const LATEST_VERSION: u32 = 1;

pub type ConfigFileResult<T> = Result<T, ConfigFileError>;

#[derive(thiserror::Error, Debug)]
pub enum ConfigFileError {
    #[error("Validation error: {0}")]
    Validation(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn from_yaml_str(content: &str) -> ConfigFileResult<DisplayConfig> {
    let config: DisplayConfig = serde_yaml::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn to_yaml_string(config: &DisplayConfig) -> ConfigFileResult<String> {
    validate_config(config)?;
    Ok(serde_yaml::to_string(config)?)
}

pub fn load_yaml(path: &std::path::Path) -> ConfigFileResult<DisplayConfig> {
    let content = std::fs::read_to_string(path)?;
    from_yaml_str(&content)
}

pub fn save_yaml(path: &std::path::Path, config: &DisplayConfig) -> ConfigFileResult<()> {
    let content = to_yaml_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn from_json_str(content: &str) -> ConfigFileResult<DisplayConfig> {
    let config: DisplayConfig = serde_json::from_str(content)?;
    validate_config(&config)?;
    Ok(config)
}

pub fn to_json_string(config: &DisplayConfig) -> ConfigFileResult<String> {
    validate_config(config)?;
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn load_json(path: &std::path::Path) -> ConfigFileResult<DisplayConfig> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

pub fn save_json(path: &std::path::Path, config: &DisplayConfig) -> ConfigFileResult<()> {
    let content = to_json_string(config)?;
    std::fs::write(path, content)?;
    Ok(())
}
