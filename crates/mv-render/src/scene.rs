//! Rotor/stator schematic of an AC induction motor.
//!
//! Stator disks are built once and never move. The rotor bars and the
//! shaft reference mark are rotated by the current angle on every update.
//! The view is pinned at construction and never autoscaled.

use crate::region::{DiskSpec, LineSpec, PlotRegion};
use crate::retained::RetainedRegion;
use mv_config::SceneGeometry;
pub use mv_config::{AIR_GAP, BAR_INSET, COIL_INSET, COIL_RADIUS};
use mv_core::{
    Color, ConfigResult, LineId, LineStyle, RenderResult, ShapeId, Span, ensure_finite,
    phase_color, units::constants::TAU,
};
use nalgebra::{Point2, Rotation2};
use tracing::debug;

/// Half-width of the view as a multiple of the stator radius.
pub const VIEW_SCALE: f64 = 1.5;
pub const COIL_COUNT: usize = 6;
pub const ROTOR_BAR_COUNT: usize = 8;

const BAR_WIDTH: f32 = 3.0;
const MARK_WIDTH: f32 = 3.0;

/// Rotor state fed to [`SceneRenderer::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotorState {
    pub theta: f64,
    pub omega: Option<f64>,
    pub torque: Option<f64>,
}

/// A straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: [f64; 2],
    pub end: [f64; 2],
}

impl Segment {
    fn radial(angle: f64, r_inner: f64, r_outer: f64) -> Self {
        let rot = Rotation2::new(angle);
        let a = rot * Point2::new(r_inner, 0.0);
        let b = rot * Point2::new(r_outer, 0.0);
        Self {
            start: [a.x, a.y],
            end: [b.x, b.y],
        }
    }

    pub fn xs(&self) -> [f64; 2] {
        [self.start[0], self.end[0]]
    }

    pub fn ys(&self) -> [f64; 2] {
        [self.start[1], self.end[1]]
    }
}

/// Handles of every schematic primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ScenePrimitives {
    pub stator_outer: ShapeId,
    pub stator_inner: ShapeId,
    pub coils: Vec<ShapeId>,
    pub rotor_body: ShapeId,
    pub rotor_bars: Vec<LineId>,
    pub shaft: ShapeId,
    pub reference_mark: LineId,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SceneState {
    Uninitialized,
    Live(ScenePrimitives),
}

#[derive(Debug)]
pub struct SceneRenderer<R: PlotRegion = RetainedRegion> {
    geometry: SceneGeometry,
    region: R,
    state: SceneState,
}

impl<R: PlotRegion> SceneRenderer<R> {
    /// Validates the radii and pins the view to `±1.5·stator_radius`.
    ///
    /// Radii too tight for the bars, air gap or coils are rejected, so
    /// every primitive stays inside the pinned view.
    pub fn new(mut region: R, geometry: SceneGeometry) -> ConfigResult<Self> {
        geometry.validate()?;

        let half = VIEW_SCALE * geometry.stator_radius;
        region.set_fixed_view(Span::symmetric(half), Span::symmetric(half), true);
        region.set_grid(true);
        region.set_x_label("Position (m)");
        region.set_y_label("Position (m)");
        region.set_title("AC Motor Visualization");

        Ok(Self {
            geometry,
            region,
            state: SceneState::Uninitialized,
        })
    }

    /// Move the rotor to `theta` (rad) and refresh the title.
    ///
    /// The first call also creates every primitive.
    pub fn update(
        &mut self,
        theta: f64,
        omega: Option<f64>,
        torque: Option<f64>,
    ) -> RenderResult<()> {
        ensure_finite(theta, "rotor angle")?;

        match &self.state {
            SceneState::Uninitialized => {
                let prims = build_scene(&mut self.region, &self.geometry)?;
                place_rotor(&mut self.region, &self.geometry, &prims, theta)?;
                debug!(
                    coils = prims.coils.len(),
                    bars = prims.rotor_bars.len(),
                    "motor scene live"
                );
                self.state = SceneState::Live(prims);
            }
            SceneState::Live(prims) => {
                place_rotor(&mut self.region, &self.geometry, prims, theta)?;
            }
        }

        self.region.set_title(&scene_title(theta, omega, torque));
        Ok(())
    }

    pub fn geometry(&self) -> &SceneGeometry {
        &self.geometry
    }

    pub fn state(&self) -> &SceneState {
        &self.state
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, SceneState::Live(_))
    }

    /// Fixed view window `(x, y)`.
    pub fn view_bounds(&self) -> (Span, Span) {
        let view = self.region.view();
        (view.x, view.y)
    }

    pub fn primitives(&self) -> Option<&ScenePrimitives> {
        match &self.state {
            SceneState::Uninitialized => None,
            SceneState::Live(prims) => Some(prims),
        }
    }

    pub fn reference_mark(&self) -> Option<LineId> {
        self.primitives().map(|p| p.reference_mark)
    }

    /// Bar handles in angular order; empty before the first update.
    pub fn rotor_bars(&self) -> &[LineId] {
        self.primitives().map_or(&[][..], |p| p.rotor_bars.as_slice())
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}

fn build_scene<R: PlotRegion>(
    region: &mut R,
    g: &SceneGeometry,
) -> RenderResult<ScenePrimitives> {
    let stator_outer = region.add_disk(
        DiskSpec::new([0.0, 0.0], g.stator_radius, Color::Gray)
            .with_alpha(0.3)
            .with_edge_width(2.0),
    )?;
    let stator_inner = region.add_disk(DiskSpec::new(
        [0.0, 0.0],
        g.rotor_radius + AIR_GAP,
        Color::White,
    ))?;

    let coil_distance = g.stator_radius - COIL_INSET;
    let mut coils = Vec::with_capacity(COIL_COUNT);
    for i in 0..COIL_COUNT {
        let angle = i as f64 * TAU / COIL_COUNT as f64;
        let center = Rotation2::new(angle) * Point2::new(coil_distance, 0.0);
        coils.push(region.add_disk(
            DiskSpec::new([center.x, center.y], COIL_RADIUS, phase_color(i)).with_alpha(0.7),
        )?);
    }

    let rotor_body = region.add_disk(
        DiskSpec::new([0.0, 0.0], g.rotor_radius, Color::LightBlue)
            .with_alpha(0.6)
            .with_edge_width(2.0),
    )?;

    let mut rotor_bars = Vec::with_capacity(ROTOR_BAR_COUNT);
    for _ in 0..ROTOR_BAR_COUNT {
        rotor_bars.push(region.add_line(
            LineSpec::new(Color::Black, LineStyle::Solid).with_width(BAR_WIDTH),
        )?);
    }

    let shaft = region.add_disk(
        DiskSpec::new([0.0, 0.0], g.shaft_radius, Color::DarkGray).with_edge_width(2.0),
    )?;
    let reference_mark =
        region.add_line(LineSpec::new(Color::Red, LineStyle::Solid).with_width(MARK_WIDTH))?;

    Ok(ScenePrimitives {
        stator_outer,
        stator_inner,
        coils,
        rotor_body,
        rotor_bars,
        shaft,
        reference_mark,
    })
}

fn place_rotor<R: PlotRegion>(
    region: &mut R,
    geometry: &SceneGeometry,
    prims: &ScenePrimitives,
    theta: f64,
) -> RenderResult<()> {
    for (i, bar) in prims.rotor_bars.iter().enumerate() {
        let seg = rotor_bar_segment(geometry, theta, i);
        region.set_line_data(*bar, &seg.xs(), &seg.ys())?;
    }
    let mark = reference_mark_segment(geometry, theta);
    region.set_line_data(prims.reference_mark, &mark.xs(), &mark.ys())
}

/// Bar `index` spans from just outside the shaft to just inside the rotor edge.
pub fn rotor_bar_segment(geometry: &SceneGeometry, theta: f64, index: usize) -> Segment {
    let angle = theta + index as f64 * TAU / ROTOR_BAR_COUNT as f64;
    Segment::radial(
        angle,
        geometry.shaft_radius + BAR_INSET,
        geometry.rotor_radius - BAR_INSET,
    )
}

pub fn reference_mark_segment(geometry: &SceneGeometry, theta: f64) -> Segment {
    Segment::radial(theta, 0.0, geometry.shaft_radius)
}

/// Title for the current state. Torque is only shown together with omega.
pub fn scene_title(theta: f64, omega: Option<f64>, torque: Option<f64>) -> String {
    match (omega, torque) {
        (Some(w), Some(tau)) => {
            format!("AC Motor: θ={theta:.2} rad, ω={w:.2} rad/s, τ={tau:.2} N-m")
        }
        (Some(w), None) => format!("AC Motor: θ={theta:.2} rad, ω={w:.2} rad/s"),
        (None, _) => format!("AC Motor: θ={theta:.2} rad"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::retained::DiskPrimitive;
    use mv_core::ConfigError;

    fn scene() -> SceneRenderer<RetainedRegion> {
        SceneRenderer::new(RetainedRegion::new(), SceneGeometry::new(1.0, 0.6, 0.15)).unwrap()
    }

    #[test]
    fn bad_radii_rejected() {
        let err = SceneRenderer::new(RetainedRegion::new(), SceneGeometry::new(0.5, 0.6, 0.15))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidRadii { .. }));
    }

    #[test]
    fn cramped_radii_rejected() {
        for g in [
            SceneGeometry::new(0.04, 0.02, 0.01),
            SceneGeometry::new(1.0, 0.2, 0.15),
        ] {
            let err = SceneRenderer::new(RetainedRegion::new(), g).unwrap_err();
            assert!(matches!(err, ConfigError::CrampedScene { .. }));
        }
    }

    #[test]
    fn construction_pins_view_without_primitives() {
        let scene = scene();
        assert_eq!(
            scene.view_bounds(),
            (Span::symmetric(1.5), Span::symmetric(1.5))
        );
        assert!(scene.region().view().equal_aspect);
        assert!(scene.region().disks().is_empty());
        assert!(scene.region().lines().is_empty());
        assert_eq!(
            scene.region().decorations().title,
            "AC Motor Visualization"
        );
    }

    #[test]
    fn first_update_builds_all_primitives() {
        let mut scene = scene();
        scene.update(0.0, None, None).unwrap();

        // outer + inner stator, 6 coils, rotor body, shaft
        assert_eq!(scene.region().disks().len(), 10);
        // 8 bars + reference mark
        assert_eq!(scene.region().lines().len(), 9);

        let prims = scene.primitives().unwrap();
        let inner = scene.region().disk(prims.stator_inner).unwrap();
        assert!((inner.radius - 0.65).abs() < 1e-12);

        let coil_colors: Vec<Color> = prims
            .coils
            .iter()
            .map(|id| scene.region().disk(*id).unwrap().fill)
            .collect();
        assert_eq!(
            coil_colors,
            vec![
                Color::Red,
                Color::Yellow,
                Color::Blue,
                Color::Red,
                Color::Yellow,
                Color::Blue
            ]
        );

        let coil = scene.region().disk(prims.coils[1]).unwrap();
        let expected = [0.85 * (TAU / 6.0).cos(), 0.85 * (TAU / 6.0).sin()];
        assert!((coil.center[0] - expected[0]).abs() < 1e-12);
        assert!((coil.center[1] - expected[1]).abs() < 1e-12);
    }

    #[test]
    fn primitives_are_built_once() {
        let mut scene = scene();
        scene.update(0.0, Some(1.0), None).unwrap();
        let prims = scene.primitives().unwrap().clone();
        let disks: Vec<DiskPrimitive> = scene.region().disks().to_vec();

        for k in 1..20 {
            scene.update(0.3 * k as f64, Some(1.0), Some(2.0)).unwrap();
            assert_eq!(scene.primitives(), Some(&prims));
            assert_eq!(scene.region().lines().len(), 9);
            assert_eq!(scene.region().disks(), disks.as_slice());
        }
    }

    #[test]
    fn rotor_bars_follow_theta() {
        let g = SceneGeometry::new(1.0, 0.6, 0.15);
        let seg = rotor_bar_segment(&g, 0.0, 0);
        assert!((seg.start[0] - 0.2).abs() < 1e-12);
        assert!((seg.end[0] - 0.55).abs() < 1e-12);
        assert!(seg.start[1].abs() < 1e-12);

        let seg = rotor_bar_segment(&g, 0.1, 2);
        let angle = 0.1 + TAU / 4.0;
        assert!((seg.end[0] - 0.55 * angle.cos()).abs() < 1e-12);
        assert!((seg.end[1] - 0.55 * angle.sin()).abs() < 1e-12);
    }

    #[test]
    fn title_variants() {
        assert_eq!(
            scene_title(1.0, Some(2.0), Some(3.5)),
            "AC Motor: θ=1.00 rad, ω=2.00 rad/s, τ=3.50 N-m"
        );
        assert_eq!(
            scene_title(1.0, Some(2.0), None),
            "AC Motor: θ=1.00 rad, ω=2.00 rad/s"
        );
        assert_eq!(scene_title(1.0, None, None), "AC Motor: θ=1.00 rad");
    }

    #[test]
    fn non_finite_angle_rejected_before_build() {
        let mut scene = scene();
        assert!(scene.update(f64::NAN, None, None).is_err());
        assert!(!scene.is_live());
    }
}
