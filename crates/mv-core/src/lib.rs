//! mv-core: shared foundation for motorview.
//!
//! Contains:
//! - error (configuration and per-frame render errors)
//! - ids (typed primitive handles)
//! - numeric (finite checks and value spans)
//! - style (series and coil palettes)
//! - units (uom-backed display conversions)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod style;
pub mod units;

pub use error::{ConfigError, ConfigResult, RenderError, RenderResult};
pub use ids::*;
pub use numeric::*;
pub use style::{Color, LineStyle, SeriesStyle, SeriesStyleCycle, phase_color};
pub use units::NamedConversion;
