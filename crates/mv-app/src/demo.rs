//! Synthetic motor signals for running the dashboard without hardware.

use mv_core::units::constants::TAU;
use mv_render::MotorState;

/// Rotor speed driving the schematic, rad/s.
pub const SCENE_OMEGA: f64 = 2.0;

/// Every signal the demo source emits, rotary profile first.
pub const SIGNALS: [&str; 13] = [
    "theta_ref",
    "theta",
    "omega",
    "current_d",
    "current_q",
    "torque",
    "position_ref",
    "position",
    "velocity",
    "voltage_a",
    "voltage_b",
    "voltage_c",
    "force",
];

const LINE_HZ: f64 = 60.0;
const PHASE_PEAK_V: f64 = 120.0;

/// One frame from [`DemoMotor::step`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoFrame {
    pub t: f64,
    /// Values in [`SIGNALS`] order.
    pub signals: Vec<(&'static str, f64)>,
    pub scene: MotorState,
}

/// Deterministic signal generator covering both built-in presets.
///
/// Emits the rotary and the linear profile on every frame; a plotter
/// ignores the names its layout does not declare.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoMotor {
    t: f64,
    theta: f64,
}

impl Default for DemoMotor {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoMotor {
    pub fn new() -> Self {
        Self { t: 0.0, theta: 0.0 }
    }

    /// Time of the next frame.
    pub fn time(&self) -> f64 {
        self.t
    }

    /// Sample at the current time, then advance by `dt`.
    ///
    /// The scene angle is integrated before sampling, so the first frame
    /// already shows the rotor turned by `omega·dt`.
    pub fn step(&mut self, dt: f64) -> DemoFrame {
        let t = self.t;
        self.theta += SCENE_OMEGA * dt;

        let frame = DemoFrame {
            t,
            signals: sample(t),
            scene: MotorState {
                theta: self.theta,
                omega: Some(SCENE_OMEGA),
                torque: Some(5.0 * (2.0 * t).sin()),
            },
        };

        self.t += dt;
        frame
    }
}

/// Signal values at time `t`.
pub fn sample(t: f64) -> Vec<(&'static str, f64)> {
    let theta_ref = std::f64::consts::FRAC_PI_4 * (0.5 * t).sin();
    let line_phase = TAU * LINE_HZ * t;
    let third = TAU / 3.0;

    let values = [
        theta_ref,
        theta_ref + 0.1 * (5.0 * t).sin(),
        0.5 * std::f64::consts::FRAC_PI_4 * (0.5 * t).cos(),
        2.0 + 0.5 * t.sin(),
        3.0 + 0.8 * t.cos(),
        5.0 * t.sin(),
        0.5 * t,
        0.5 * t + 0.01 * (10.0 * t).sin(),
        0.5 + 0.1 * (10.0 * t).cos(),
        PHASE_PEAK_V * line_phase.sin(),
        PHASE_PEAK_V * (line_phase - third).sin(),
        PHASE_PEAK_V * (line_phase + third).sin(),
        100.0 + 20.0 * t.sin(),
    ];

    SIGNALS.iter().copied().zip(values).collect()
}
