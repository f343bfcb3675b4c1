//! Incremental renderers for the motor dashboard.
//!
//! Every renderer here follows the same lifecycle: primitives are created
//! on the first `update` and only mutated afterwards. The lifecycle is an
//! explicit state enum per renderer so "build once, mutate forever" is
//! observable from the outside.
//!
//! # Architecture
//!
//! - [`PlotRegion`] is the seam to a drawing backend: decorations,
//!   primitive creation, in-place data mutation and view limits.
//! - [`RetainedRegion`] keeps primitives as plain data; backends draw it.
//! - [`PanelRenderer`] draws one signal group as lines.
//! - [`MultiPanelPlotter`] owns the sample history and fans frames out to
//!   one panel per group.
//! - [`SceneRenderer`] draws the rotor/stator schematic.

pub mod history;
pub mod panel;
pub mod plotter;
pub mod region;
pub mod retained;
pub mod scene;

pub use history::SampleHistory;
pub use panel::{LinePrimitiveSet, PanelRenderer, PanelState};
pub use plotter::{MultiPanelPlotter, TIME_AXIS_LINK};
pub use region::{DiskSpec, LineSpec, PlotRegion, ViewLimits};
pub use retained::{Decorations, DiskPrimitive, LinePrimitive, RetainedRegion};
pub use scene::{MotorState, ScenePrimitives, SceneRenderer, SceneState, Segment, scene_title};
