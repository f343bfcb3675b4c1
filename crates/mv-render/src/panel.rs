//! Per-group incremental line renderer.

use crate::region::{LineSpec, PlotRegion};
use mv_config::SignalGroup;
use mv_core::{ConfigResult, LineId, RenderError, RenderResult, SeriesStyleCycle};
use tracing::debug;

/// Line handles of one group, in signal order.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitiveSet {
    lines: Vec<LineId>,
}

impl LinePrimitiveSet {
    pub fn ids(&self) -> &[LineId] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Lifecycle of a panel: lines exist only once the first frame arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelState {
    Uninitialized,
    Live(LinePrimitiveSet),
}

/// Draws one [`SignalGroup`] into a region it owns exclusively.
///
/// The renderer keeps no history. Every `update` carries the complete
/// series, which replace the line data wholesale.
#[derive(Debug)]
pub struct PanelRenderer<R: PlotRegion> {
    group_id: String,
    signal_count: usize,
    legend: Option<Vec<String>>,
    region: R,
    state: PanelState,
}

impl<R: PlotRegion> PanelRenderer<R> {
    /// One-time axis setup: labels, title and grid. No data primitives are
    /// created until the first [`Self::update`].
    pub fn configure(mut region: R, group: &SignalGroup) -> ConfigResult<Self> {
        group.validate()?;

        region.set_y_label(&group.y_label);
        region.set_x_label(group.x_label.as_deref().unwrap_or(""));
        region.set_title(group.title.as_deref().unwrap_or(""));
        region.set_grid(true);

        Ok(Self {
            group_id: group.id.clone(),
            signal_count: group.signals.len(),
            legend: group.legend.clone(),
            region,
            state: PanelState::Uninitialized,
        })
    }

    /// Draw `series` (parallel to the group's signals) against `time`.
    ///
    /// A series is either empty, for a signal never supplied, or exactly as
    /// long as `time`. Nothing is mutated when the frame is rejected.
    pub fn update<S: AsRef<[f64]>>(&mut self, time: &[f64], series: &[S]) -> RenderResult<()> {
        self.check_frame(time, series)?;

        let Self {
            region,
            state,
            legend,
            group_id,
            ..
        } = self;

        match state {
            PanelState::Uninitialized => {
                let set = build_lines(region, legend.as_deref(), time, series)?;
                debug!(group = %group_id, lines = set.len(), "panel live");
                *state = PanelState::Live(set);
            }
            PanelState::Live(set) => {
                for (line, values) in set.lines.iter().zip(series) {
                    write_series(region, *line, time, values.as_ref())?;
                }
            }
        }

        region.autoscale();
        Ok(())
    }

    fn check_frame<S: AsRef<[f64]>>(&self, time: &[f64], series: &[S]) -> RenderResult<()> {
        if series.len() != self.signal_count {
            return Err(RenderError::SeriesCountMismatch {
                group: self.group_id.clone(),
                expected: self.signal_count,
                found: series.len(),
            });
        }
        for (index, values) in series.iter().enumerate() {
            let n = values.as_ref().len();
            if n != 0 && n != time.len() {
                return Err(RenderError::SeriesLengthMismatch {
                    group: self.group_id.clone(),
                    index,
                    expected: time.len(),
                    found: n,
                });
            }
        }
        Ok(())
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn signal_count(&self) -> usize {
        self.signal_count
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn is_live(&self) -> bool {
        matches!(self.state, PanelState::Live(_))
    }

    /// Line handles in signal order; empty before the first update.
    pub fn line_ids(&self) -> &[LineId] {
        match &self.state {
            PanelState::Uninitialized => &[],
            PanelState::Live(set) => set.ids(),
        }
    }

    pub fn region(&self) -> &R {
        &self.region
    }
}

fn build_lines<R: PlotRegion, S: AsRef<[f64]>>(
    region: &mut R,
    legend: Option<&[String]>,
    time: &[f64],
    series: &[S],
) -> RenderResult<LinePrimitiveSet> {
    let mut lines = Vec::with_capacity(series.len());
    for (i, values) in series.iter().enumerate() {
        let label = legend.and_then(|labels| labels.get(i).cloned());
        let spec = LineSpec::from_series_style(SeriesStyleCycle::style(i)).with_label(label);
        let line = region.add_line(spec)?;
        write_series(region, line, time, values.as_ref())?;
        lines.push(line);
    }

    if legend.is_some() {
        region.set_legend(&lines)?;
    }

    Ok(LinePrimitiveSet { lines })
}

// A signal that was never supplied renders with zero points.
fn write_series<R: PlotRegion>(
    region: &mut R,
    line: LineId,
    time: &[f64],
    values: &[f64],
) -> RenderResult<()> {
    if values.is_empty() {
        region.set_line_data(line, &[], &[])
    } else {
        region.set_line_data(line, time, values)
    }
}
