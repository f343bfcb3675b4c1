pub mod motor_view;
pub mod strip_chart;

pub use motor_view::MotorView;
pub use strip_chart::StripChartView;

use mv_core::{Color, LineStyle};

pub(crate) fn color32(color: Color, alpha: f32) -> egui::Color32 {
    let [r, g, b] = color.rgb();
    let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}

pub(crate) fn plot_line_style(style: LineStyle) -> egui_plot::LineStyle {
    match style {
        LineStyle::Solid => egui_plot::LineStyle::Solid,
        LineStyle::Dashed => egui_plot::LineStyle::Dashed { length: 10.0 },
        // no dash-dot in egui_plot; a short dash keeps it distinct
        LineStyle::DashDot => egui_plot::LineStyle::Dashed { length: 4.0 },
        LineStyle::Dotted => egui_plot::LineStyle::Dotted { spacing: 5.0 },
    }
}
