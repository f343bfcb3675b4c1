use thiserror::Error;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type RenderResult<T> = Result<T, RenderError>;

/// Malformed display description. Raised at construction and fatal to
/// the instance being built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Display must configure at least one signal group")]
    NoGroups,

    #[error("Signal group '{group}' has no signals")]
    EmptyGroup { group: String },

    #[error("Signal group '{group}' has {found} legend labels for {expected} signals")]
    LegendLength {
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Duplicate {what}: {id}")]
    Duplicate { what: &'static str, id: String },

    #[error(
        "Invalid motor radii: stator={stator}, rotor={rotor}, shaft={shaft} (need stator > rotor > shaft > 0)"
    )]
    InvalidRadii { stator: f64, rotor: f64, shaft: f64 },

    #[error("Motor radii leave no room for the {part}: clearance {room}, need more than {needed}")]
    CrampedScene {
        part: &'static str,
        room: f64,
        needed: f64,
    },

    #[error("Invalid conversion factor for group '{group}': {factor}")]
    InvalidConversion { group: String, factor: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unsupported config version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Per-frame contract violations. A rejected frame leaves every
/// renderer and history untouched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("Group '{group}' expects {expected} series, got {found}")]
    SeriesCountMismatch {
        group: String,
        expected: usize,
        found: usize,
    },

    #[error("Series {index} of group '{group}' has {found} points, time axis has {expected}")]
    SeriesLengthMismatch {
        group: String,
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("Declared signal '{signal}' missing from frame")]
    MissingSignal { signal: String },

    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Unknown {kind} handle #{index}")]
    UnknownPrimitive { kind: &'static str, index: usize },

    #[error("Backend error: {message}")]
    Backend { message: String },
}
