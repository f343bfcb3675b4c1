//! In-memory region: primitives are kept as data and drawn by a backend.

use crate::region::{DiskSpec, LineSpec, PlotRegion, ViewLimits};
use mv_core::{Handle, LineId, RenderError, RenderResult, ShapeId, Span};

/// Fraction of the data range added on each side when autoscaling.
const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decorations {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub grid: bool,
    pub legend: Option<Vec<LineId>>,
    pub x_link: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinePrimitive {
    pub spec: LineSpec,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl LinePrimitive {
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.xs.iter().copied().zip(self.ys.iter().copied()).map(|(x, y)| [x, y])
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

pub type DiskPrimitive = DiskSpec;

/// Retained-mode [`PlotRegion`].
///
/// Line buffers are reused across `set_line_data` calls, so steady-state
/// updates do not allocate once the history stops growing.
#[derive(Debug, Clone, Default)]
pub struct RetainedRegion {
    decorations: Decorations,
    lines: Vec<LinePrimitive>,
    disks: Vec<DiskPrimitive>,
    view: ViewLimits,
}

impl RetainedRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decorations(&self) -> &Decorations {
        &self.decorations
    }

    pub fn lines(&self) -> &[LinePrimitive] {
        &self.lines
    }

    pub fn disks(&self) -> &[DiskPrimitive] {
        &self.disks
    }

    pub fn line(&self, id: LineId) -> Option<&LinePrimitive> {
        self.lines.get(id.index())
    }

    pub fn disk(&self, id: ShapeId) -> Option<&DiskPrimitive> {
        self.disks.get(id.index())
    }

    /// Legend entries as `(label, line)` in legend order.
    pub fn legend_entries(&self) -> Vec<(&str, &LinePrimitive)> {
        let Some(ids) = &self.decorations.legend else {
            return Vec::new();
        };
        ids.iter()
            .filter_map(|id| self.line(*id))
            .map(|line| (line.spec.label.as_deref().unwrap_or(""), line))
            .collect()
    }

    fn data_limits(&self) -> Option<(Span, Span)> {
        let line_x = self.lines.iter().flat_map(|l| l.xs.iter().copied());
        let line_y = self.lines.iter().flat_map(|l| l.ys.iter().copied());
        let mut x = Span::enclosing(line_x);
        let mut y = Span::enclosing(line_y);

        for disk in &self.disks {
            let (dx, dy) = disk.extent();
            x = Some(x.map_or(dx, |s| s.union(dx)));
            y = Some(y.map_or(dy, |s| s.union(dy)));
        }

        Some((x?, y?))
    }

    fn next_handle<K>(len: usize) -> Handle<K> {
        Handle::from_index(len as u32)
    }
}

impl PlotRegion for RetainedRegion {
    fn set_title(&mut self, title: &str) {
        self.decorations.title.clear();
        self.decorations.title.push_str(title);
    }

    fn set_x_label(&mut self, label: &str) {
        self.decorations.x_label = label.to_string();
    }

    fn set_y_label(&mut self, label: &str) {
        self.decorations.y_label = label.to_string();
    }

    fn set_grid(&mut self, visible: bool) {
        self.decorations.grid = visible;
    }

    fn link_x_axis(&mut self, group: &str) {
        self.decorations.x_link = Some(group.to_string());
    }

    fn add_line(&mut self, spec: LineSpec) -> RenderResult<LineId> {
        let id = Self::next_handle(self.lines.len());
        self.lines.push(LinePrimitive {
            spec,
            xs: Vec::new(),
            ys: Vec::new(),
        });
        Ok(id)
    }

    fn set_line_data(&mut self, line: LineId, xs: &[f64], ys: &[f64]) -> RenderResult<()> {
        if xs.len() != ys.len() {
            return Err(RenderError::Backend {
                message: format!(
                    "line {line}: {} x values for {} y values",
                    xs.len(),
                    ys.len()
                ),
            });
        }
        let prim = self
            .lines
            .get_mut(line.index())
            .ok_or_else(|| line.unknown())?;
        prim.xs.clear();
        prim.xs.extend_from_slice(xs);
        prim.ys.clear();
        prim.ys.extend_from_slice(ys);
        Ok(())
    }

    fn add_disk(&mut self, spec: DiskSpec) -> RenderResult<ShapeId> {
        if !(spec.radius.is_finite() && spec.radius > 0.0) {
            return Err(RenderError::Backend {
                message: format!("disk radius must be positive, got {}", spec.radius),
            });
        }
        let id = Self::next_handle(self.disks.len());
        self.disks.push(spec);
        Ok(id)
    }

    fn set_legend(&mut self, lines: &[LineId]) -> RenderResult<()> {
        if let Some(missing) = lines.iter().find(|id| id.index() >= self.lines.len()) {
            return Err(missing.unknown());
        }
        self.decorations.legend = Some(lines.to_vec());
        Ok(())
    }

    fn autoscale(&mut self) {
        if self.view.fixed {
            return;
        }
        // No finite data yet: keep the previous window.
        if let Some((x, y)) = self.data_limits() {
            self.view.x = x.padded(AUTOSCALE_MARGIN);
            self.view.y = y.padded(AUTOSCALE_MARGIN);
        }
    }

    fn set_fixed_view(&mut self, x: Span, y: Span, equal_aspect: bool) {
        self.view = ViewLimits {
            x,
            y,
            equal_aspect,
            fixed: true,
        };
    }

    fn view(&self) -> ViewLimits {
        self.view
    }
}
