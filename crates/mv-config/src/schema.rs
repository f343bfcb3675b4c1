//! Display description schema.

use mv_core::{ConfigError, ConfigResult, NamedConversion};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub groups: Vec<SignalGroup>,
    #[serde(default)]
    pub scene: SceneGeometry,
    /// Maximum number of samples kept per signal. Unbounded when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_limit: Option<usize>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        crate::presets::rotary_motor()
    }
}

impl DisplayConfig {
    /// Signal names in first-declaration order, duplicates removed.
    pub fn signal_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for group in &self.groups {
            for signal in &group.signals {
                if !names.contains(&signal.as_str()) {
                    names.push(signal);
                }
            }
        }
        names
    }
}

/// A bundle of signals sharing one display region.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignalGroup {
    pub id: String,
    pub signals: Vec<String>,
    #[serde(default)]
    pub y_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// One entry per signal, in signal order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legend: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Conversion::is_identity")]
    pub conversion: Conversion,
}

impl SignalGroup {
    pub fn new<I, S>(id: impl Into<String>, signals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            signals: signals.into_iter().map(Into::into).collect(),
            y_label: String::new(),
            x_label: None,
            title: None,
            legend: None,
            conversion: Conversion::default(),
        }
    }

    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = label.into();
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_legend<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.legend = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_conversion(mut self, conversion: impl Into<Conversion>) -> Self {
        self.conversion = conversion.into();
        self
    }

    pub fn signal_count(&self) -> usize {
        self.signals.len()
    }

    /// Checks the invariants a renderer relies on.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.signals.is_empty() {
            return Err(ConfigError::EmptyGroup {
                group: self.id.clone(),
            });
        }

        for (i, signal) in self.signals.iter().enumerate() {
            if self.signals[..i].contains(signal) {
                return Err(ConfigError::Duplicate {
                    what: "signal in group",
                    id: format!("{}.{}", self.id, signal),
                });
            }
        }

        if let Some(legend) = &self.legend {
            if legend.len() != self.signals.len() {
                return Err(ConfigError::LegendLength {
                    group: self.id.clone(),
                    expected: self.signals.len(),
                    found: legend.len(),
                });
            }
        }

        let factor = self.conversion.factor();
        if !factor.is_finite() || factor == 0.0 {
            return Err(ConfigError::InvalidConversion {
                group: self.id.clone(),
                factor,
            });
        }

        Ok(())
    }
}

/// Per-group scale applied to raw samples before drawing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Conversion {
    Factor(f64),
    Named(NamedConversion),
}

impl Default for Conversion {
    fn default() -> Self {
        Conversion::Factor(1.0)
    }
}

impl Conversion {
    pub fn factor(&self) -> f64 {
        match self {
            Conversion::Factor(f) => *f,
            Conversion::Named(named) => named.factor(),
        }
    }

    pub fn is_identity(&self) -> bool {
        self.factor() == 1.0
    }
}

impl From<f64> for Conversion {
    fn from(factor: f64) -> Self {
        Conversion::Factor(factor)
    }
}

impl From<NamedConversion> for Conversion {
    fn from(named: NamedConversion) -> Self {
        Conversion::Named(named)
    }
}

/// Radial clearance between rotor bars and the shaft/rotor edge.
pub const BAR_INSET: f64 = 0.05;
/// Air gap between the rotor and the inner stator boundary.
pub const AIR_GAP: f64 = 0.05;
/// Distance of the coil centers inside the stator edge.
pub const COIL_INSET: f64 = 0.15;
pub const COIL_RADIUS: f64 = 0.08;

/// Radii of the schematic motor, outermost first.
///
/// The schematic draws bars, air gap and coils at fixed offsets, so the
/// radii must leave room for them as well as being ordered.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SceneGeometry {
    pub stator_radius: f64,
    pub rotor_radius: f64,
    pub shaft_radius: f64,
}

impl Default for SceneGeometry {
    fn default() -> Self {
        Self {
            stator_radius: 1.0,
            rotor_radius: 0.6,
            shaft_radius: 0.15,
        }
    }
}

impl SceneGeometry {
    pub fn new(stator_radius: f64, rotor_radius: f64, shaft_radius: f64) -> Self {
        Self {
            stator_radius,
            rotor_radius,
            shaft_radius,
        }
    }

    /// Requires finite `stator > rotor > shaft > 0` with room for the
    /// rotor bars, the air gap and the stator coils.
    pub fn validate(&self) -> ConfigResult<()> {
        let Self {
            stator_radius: stator,
            rotor_radius: rotor,
            shaft_radius: shaft,
        } = *self;
        let finite = stator.is_finite() && rotor.is_finite() && shaft.is_finite();
        if !finite || !(stator > rotor && rotor > shaft && shaft > 0.0) {
            return Err(ConfigError::InvalidRadii {
                stator,
                rotor,
                shaft,
            });
        }

        let clearances = [
            ("rotor bars", rotor - shaft, 2.0 * BAR_INSET),
            ("air gap", stator - rotor, AIR_GAP),
            (
                "stator coils",
                (stator - COIL_INSET - COIL_RADIUS) - (rotor + AIR_GAP),
                0.0,
            ),
        ];
        for (part, room, needed) in clearances {
            if room <= needed {
                return Err(ConfigError::CrampedScene { part, room, needed });
            }
        }
        Ok(())
    }
}
