//! Drawing backend seam.

use mv_core::{Color, LineId, LineStyle, RenderResult, SeriesStyle, ShapeId, Span};

/// Style and label of a line primitive.
#[derive(Debug, Clone, PartialEq)]
pub struct LineSpec {
    pub color: Color,
    pub line_style: LineStyle,
    pub width: f32,
    pub label: Option<String>,
}

impl LineSpec {
    pub fn new(color: Color, line_style: LineStyle) -> Self {
        Self {
            color,
            line_style,
            width: 1.5,
            label: None,
        }
    }

    pub fn from_series_style(style: SeriesStyle) -> Self {
        Self::new(style.color, style.line_style)
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn with_label(mut self, label: Option<String>) -> Self {
        self.label = label;
        self
    }
}

/// A filled circle with an outline.
#[derive(Debug, Clone, PartialEq)]
pub struct DiskSpec {
    pub center: [f64; 2],
    pub radius: f64,
    pub fill: Color,
    pub alpha: f32,
    pub edge: Color,
    pub edge_width: f32,
}

impl DiskSpec {
    pub fn new(center: [f64; 2], radius: f64, fill: Color) -> Self {
        Self {
            center,
            radius,
            fill,
            alpha: 1.0,
            edge: Color::Black,
            edge_width: 1.0,
        }
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_edge_width(mut self, width: f32) -> Self {
        self.edge_width = width;
        self
    }

    /// Axis-aligned extent of the disk.
    pub fn extent(&self) -> (Span, Span) {
        let [cx, cy] = self.center;
        (
            Span::new(cx - self.radius, cx + self.radius),
            Span::new(cy - self.radius, cy + self.radius),
        )
    }
}

/// Visible data window of a region.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewLimits {
    pub x: Span,
    pub y: Span,
    /// One data unit spans the same length on both axes.
    pub equal_aspect: bool,
    /// Set by [`PlotRegion::set_fixed_view`]; autoscaling is disabled.
    pub fixed: bool,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self {
            x: Span::new(0.0, 1.0),
            y: Span::new(0.0, 1.0),
            equal_aspect: false,
            fixed: false,
        }
    }
}

/// One display region (an axes) and the primitives registered with it.
///
/// Renderers own their region exclusively. Decoration setters only touch
/// chrome; data primitives are created with `add_*` and mutated through
/// their handles.
pub trait PlotRegion {
    fn set_title(&mut self, title: &str);
    fn set_x_label(&mut self, label: &str);
    fn set_y_label(&mut self, label: &str);
    fn set_grid(&mut self, visible: bool);

    /// Put the x axis in a link group; linked regions pan and zoom together.
    fn link_x_axis(&mut self, group: &str);

    fn add_line(&mut self, spec: LineSpec) -> RenderResult<LineId>;

    /// Replace a line's coordinates wholesale.
    fn set_line_data(&mut self, line: LineId, xs: &[f64], ys: &[f64]) -> RenderResult<()>;

    fn add_disk(&mut self, spec: DiskSpec) -> RenderResult<ShapeId>;

    /// Attach a legend listing `lines` in the given order.
    fn set_legend(&mut self, lines: &[LineId]) -> RenderResult<()>;

    /// Recompute data limits from every primitive and fit both axes.
    fn autoscale(&mut self);

    /// Pin the view; later `autoscale` calls leave it untouched.
    fn set_fixed_view(&mut self, x: Span, y: Span, equal_aspect: bool);

    fn view(&self) -> ViewLimits;
}
