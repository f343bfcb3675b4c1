// mv-core/src/units.rs

use uom::si::f64::{Angle as UomAngle, AngularVelocity as UomAngularVelocity};

// Public canonical unit types (SI, f64)
pub type Angle = UomAngle;
pub type AngularVelocity = UomAngularVelocity;

#[inline]
pub fn rad(v: f64) -> Angle {
    use uom::si::angle::radian;
    Angle::new::<radian>(v)
}

#[inline]
pub fn radps(v: f64) -> AngularVelocity {
    use uom::si::angular_velocity::radian_per_second;
    AngularVelocity::new::<radian_per_second>(v)
}

/// Degrees per radian.
#[inline]
pub fn rad_to_deg_factor() -> f64 {
    use uom::si::angle::degree;
    rad(1.0).get::<degree>()
}

/// Revolutions per minute per rad/s.
#[inline]
pub fn rad_per_s_to_rpm_factor() -> f64 {
    use uom::si::angular_velocity::revolution_per_minute;
    radps(1.0).get::<revolution_per_minute>()
}

/// Degrees per second per rad/s.
#[inline]
pub fn rad_per_s_to_deg_per_s_factor() -> f64 {
    use uom::si::angular_velocity::degree_per_second;
    radps(1.0).get::<degree_per_second>()
}

/// Display conversions that can be named in a config file instead of
/// spelling out the scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum NamedConversion {
    Identity,
    RadToDeg,
    RadPerSToRpm,
    RadPerSToDegPerS,
}

impl NamedConversion {
    /// Scalar applied to every raw sample of a group.
    pub fn factor(self) -> f64 {
        match self {
            Self::Identity => 1.0,
            Self::RadToDeg => rad_to_deg_factor(),
            Self::RadPerSToRpm => rad_per_s_to_rpm_factor(),
            Self::RadPerSToDegPerS => rad_per_s_to_deg_per_s_factor(),
        }
    }
}

pub mod constants {
    /// Full turn in radians.
    pub const TAU: f64 = std::f64::consts::TAU;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _a = rad(1.0);
        let _w = radps(2.0);
    }

    #[test]
    fn named_factors() {
        let close = |a: f64, b: f64| (a - b).abs() <= 1e-12 * b.abs().max(1.0);
        assert_eq!(NamedConversion::Identity.factor(), 1.0);
        assert!(close(
            NamedConversion::RadToDeg.factor(),
            180.0 / std::f64::consts::PI
        ));
        assert!(close(
            NamedConversion::RadPerSToRpm.factor(),
            60.0 / constants::TAU
        ));
        assert!(close(
            NamedConversion::RadPerSToDegPerS.factor(),
            NamedConversion::RadToDeg.factor()
        ));
    }
}
