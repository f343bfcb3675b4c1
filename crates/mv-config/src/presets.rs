//! Built-in display layouts.

use crate::schema::{DisplayConfig, SceneGeometry, SignalGroup};
use mv_core::NamedConversion;

/// Selectable built-in layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Rotary,
    Linear,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::Rotary, Preset::Linear];

    pub fn config(self) -> DisplayConfig {
        match self {
            Preset::Rotary => rotary_motor(),
            Preset::Linear => linear_motor(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Preset::Rotary => "AC motor",
            Preset::Linear => "Linear motor",
        }
    }
}

/// Angle, velocity, dq currents and torque of an AC motor.
pub fn rotary_motor() -> DisplayConfig {
    DisplayConfig {
        version: crate::LATEST_VERSION,
        name: "AC Motor Data".to_string(),
        groups: vec![
            SignalGroup::new("angle", ["theta_ref", "theta"])
                .with_y_label("Angle (deg)")
                .with_title("AC Motor Data")
                .with_legend(["Reference", "Actual"])
                .with_conversion(NamedConversion::RadToDeg),
            SignalGroup::new("velocity", ["omega"]).with_y_label("Velocity (rad/s)"),
            SignalGroup::new("current", ["current_d", "current_q"])
                .with_y_label("Current (A)")
                .with_legend(["I_d", "I_q"]),
            SignalGroup::new("torque", ["torque"])
                .with_y_label("Torque (N-m)")
                .with_x_label("t (s)"),
        ],
        scene: SceneGeometry::default(),
        history_limit: None,
    }
}

/// Position, velocity, phase voltages and force of a linear motor.
pub fn linear_motor() -> DisplayConfig {
    DisplayConfig {
        version: crate::LATEST_VERSION,
        name: "Linear Motor Data".to_string(),
        groups: vec![
            SignalGroup::new("position", ["position_ref", "position"])
                .with_y_label("Position (m)")
                .with_title("Linear Motor Data")
                .with_legend(["Ref", "Actual"]),
            SignalGroup::new("velocity", ["velocity"]).with_y_label("Velocity (m/s)"),
            SignalGroup::new("voltage", ["voltage_a", "voltage_b", "voltage_c"])
                .with_y_label("Phase Voltage (V)")
                .with_legend(["V_a", "V_b", "V_c"]),
            SignalGroup::new("force", ["force"])
                .with_y_label("Force (N)")
                .with_x_label("Time (s)"),
        ],
        scene: SceneGeometry::default(),
        history_limit: None,
    }
}
