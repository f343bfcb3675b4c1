//! Strip chart: N panels on a shared time axis.

use crate::history::SampleHistory;
use crate::panel::PanelRenderer;
use crate::region::PlotRegion;
use crate::retained::RetainedRegion;
use mv_config::{DisplayConfig, SignalGroup};
use mv_core::{ConfigError, ConfigResult, RenderError, RenderResult, ensure_finite};
use tracing::{debug, trace};

/// Link group every panel's x axis joins.
pub const TIME_AXIS_LINK: &str = "motorview-time";

/// Where a group's series come from and how they are scaled.
#[derive(Debug)]
struct GroupBinding {
    slots: Vec<usize>,
    factor: f64,
    // Reused between frames.
    converted: Vec<Vec<f64>>,
}

/// Owns the sample history and one [`PanelRenderer`] per signal group.
#[derive(Debug)]
pub struct MultiPanelPlotter<R: PlotRegion = RetainedRegion> {
    groups: Vec<SignalGroup>,
    panels: Vec<PanelRenderer<R>>,
    bindings: Vec<GroupBinding>,
    history: SampleHistory,
    frame: Vec<Option<f64>>,
    row: Vec<f64>,
}

impl MultiPanelPlotter<RetainedRegion> {
    pub fn new(groups: Vec<SignalGroup>) -> ConfigResult<Self> {
        Self::with_regions(groups, None, |_| RetainedRegion::new())
    }

    pub fn from_config(config: &DisplayConfig) -> ConfigResult<Self> {
        Self::with_regions(config.groups.clone(), config.history_limit, |_| {
            RetainedRegion::new()
        })
    }
}

impl<R: PlotRegion> MultiPanelPlotter<R> {
    /// Validate `groups` and allocate one region per group from `make_region`.
    pub fn with_regions<F>(
        groups: Vec<SignalGroup>,
        history_limit: Option<usize>,
        mut make_region: F,
    ) -> ConfigResult<Self>
    where
        F: FnMut(&SignalGroup) -> R,
    {
        if groups.is_empty() {
            return Err(ConfigError::NoGroups);
        }
        if history_limit == Some(0) {
            return Err(ConfigError::InvalidArg {
                what: "history_limit must be at least 1",
            });
        }

        let history = SampleHistory::new(
            groups
                .iter()
                .flat_map(|g| g.signals.iter().cloned()),
        )
        .with_limit(history_limit);

        let mut panels = Vec::with_capacity(groups.len());
        let mut bindings = Vec::with_capacity(groups.len());
        for group in &groups {
            let mut region = make_region(group);
            region.link_x_axis(TIME_AXIS_LINK);
            panels.push(PanelRenderer::configure(region, group)?);

            let slots = group
                .signals
                .iter()
                .filter_map(|s| history.slot(s))
                .collect::<Vec<_>>();
            bindings.push(GroupBinding {
                converted: vec![Vec::new(); slots.len()],
                slots,
                factor: group.conversion.factor(),
            });
        }

        debug!(
            groups = groups.len(),
            signals = history.signal_count(),
            "strip chart configured"
        );

        let signal_count = history.signal_count();
        Ok(Self {
            groups,
            panels,
            bindings,
            history,
            frame: vec![None; signal_count],
            row: Vec::with_capacity(signal_count),
        })
    }

    /// Record one frame and redraw every panel.
    ///
    /// Names no group declares are ignored. Every declared signal must be
    /// present; otherwise the frame is rejected and nothing is recorded.
    pub fn update<I, K>(&mut self, t: f64, named_values: I) -> RenderResult<()>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        ensure_finite(t, "sample time")?;

        self.frame.iter_mut().for_each(|v| *v = None);
        for (name, value) in named_values {
            let name = name.as_ref();
            match self.history.slot(name) {
                Some(slot) => self.frame[slot] = Some(value),
                None => trace!(signal = name, "ignoring undeclared signal"),
            }
        }

        self.row.clear();
        for (slot, value) in self.frame.iter().enumerate() {
            match value {
                Some(v) => self.row.push(*v),
                None => {
                    return Err(RenderError::MissingSignal {
                        signal: self.history.signal_names()[slot].clone(),
                    });
                }
            }
        }

        self.history.push(t, &self.row)?;
        self.render()
    }

    fn render(&mut self) -> RenderResult<()> {
        let time = self.history.time();
        for (panel, binding) in self.panels.iter_mut().zip(&mut self.bindings) {
            for (buf, &slot) in binding.converted.iter_mut().zip(&binding.slots) {
                buf.clear();
                buf.extend(
                    self.history
                        .values_at(slot)
                        .iter()
                        .map(|v| v * binding.factor),
                );
            }
            panel.update(time, binding.converted.as_slice())?;
        }
        Ok(())
    }

    pub fn groups(&self) -> &[SignalGroup] {
        &self.groups
    }

    pub fn panels(&self) -> &[PanelRenderer<R>] {
        &self.panels
    }

    pub fn history(&self) -> &SampleHistory {
        &self.history
    }

    /// Number of frames currently held in the history.
    pub fn frame_count(&self) -> usize {
        self.history.len()
    }

    /// Signals a caller must supply on every frame.
    pub fn declared_signals(&self) -> &[String] {
        self.history.signal_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn two_groups() -> Vec<SignalGroup> {
        vec![
            SignalGroup::new("angle", ["theta_ref", "theta"]).with_conversion(180.0 / PI),
            SignalGroup::new("velocity", ["omega"]),
        ]
    }

    #[test]
    fn zero_groups_rejected() {
        assert_eq!(
            MultiPanelPlotter::new(Vec::new()).unwrap_err(),
            ConfigError::NoGroups
        );
    }

    #[test]
    fn invalid_group_rejected() {
        let groups = vec![SignalGroup::new("angle", ["a", "b"]).with_legend(["x"])];
        assert!(matches!(
            MultiPanelPlotter::new(groups),
            Err(ConfigError::LegendLength { .. })
        ));
    }

    #[test]
    fn regions_share_time_axis() {
        let plotter = MultiPanelPlotter::new(two_groups()).unwrap();
        for panel in plotter.panels() {
            assert_eq!(
                panel.region().decorations().x_link.as_deref(),
                Some(TIME_AXIS_LINK)
            );
        }
    }

    #[test]
    fn undeclared_signals_are_ignored() {
        let mut plotter = MultiPanelPlotter::new(two_groups()).unwrap();
        plotter
            .update(
                0.0,
                [("theta_ref", 0.1), ("theta", 0.2), ("omega", 1.0), ("bogus", 9.0)],
            )
            .unwrap();
        assert_eq!(plotter.frame_count(), 1);
        assert!(plotter.history().values("bogus").is_none());
    }

    #[test]
    fn missing_signal_rejects_whole_frame() {
        let mut plotter = MultiPanelPlotter::new(two_groups()).unwrap();
        let err = plotter
            .update(0.0, [("theta_ref", 0.1), ("theta", 0.2)])
            .unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingSignal {
                signal: "omega".into()
            }
        );
        assert_eq!(plotter.frame_count(), 0);
        assert!(plotter.panels().iter().all(|p| !p.is_live()));
    }

    #[test]
    fn non_finite_time_rejected() {
        let mut plotter = MultiPanelPlotter::new(two_groups()).unwrap();
        assert!(matches!(
            plotter.update(f64::NAN, [("theta_ref", 0.0), ("theta", 0.0), ("omega", 0.0)]),
            Err(RenderError::NonFinite { .. })
        ));
        assert_eq!(plotter.frame_count(), 0);
    }

    #[test]
    fn shared_signal_feeds_both_groups() {
        let groups = vec![
            SignalGroup::new("deg", ["theta"]).with_conversion(2.0),
            SignalGroup::new("rad", ["theta"]),
        ];
        let mut plotter = MultiPanelPlotter::new(groups).unwrap();
        plotter.update(0.0, [("theta", 1.5)]).unwrap();
        assert_eq!(plotter.declared_signals().len(), 1);
        assert_eq!(plotter.panels()[0].region().lines()[0].ys, vec![3.0]);
        assert_eq!(plotter.panels()[1].region().lines()[0].ys, vec![1.5]);
    }

    #[test]
    fn history_limit_bounds_rendered_lines() {
        let mut config = DisplayConfig {
            groups: vec![SignalGroup::new("g", ["a"])],
            ..DisplayConfig::default()
        };
        config.history_limit = Some(2);
        let mut plotter = MultiPanelPlotter::from_config(&config).unwrap();
        for i in 0..4 {
            plotter.update(i as f64, [("a", i as f64)]).unwrap();
        }
        let line = &plotter.panels()[0].region().lines()[0];
        assert_eq!(line.xs, vec![2.0, 3.0]);
        assert_eq!(line.ys, vec![2.0, 3.0]);
    }
}
