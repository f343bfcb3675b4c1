//! Shared application service layer for motorview.
//!
//! Both the CLI and the GUI go through this crate: config loading and
//! validation, the demo signal source, and the dashboard session that
//! pumps frames into the strip chart and the motor schematic.

pub mod config_service;
pub mod demo;
pub mod error;
pub mod session;

pub use config_service::{
    ConfigFormat, ConfigSummary, GroupSummary, load_config, resolve_config, save_config,
    summarize, validate,
};
pub use demo::{DemoFrame, DemoMotor};
pub use error::{AppError, AppResult};
pub use session::{DashboardSession, PanelSummary, SessionSummary, StepOutcome, check_time_step};
