use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoints};
use mv_render::{MultiPanelPlotter, PlotRegion, RetainedRegion};

use super::{color32, plot_line_style};

/// Stacked panels sharing the time axis, one per signal group.
pub struct StripChartView {
    min_panel_height: f32,
}

impl Default for StripChartView {
    fn default() -> Self {
        Self {
            min_panel_height: 120.0,
        }
    }
}

impl StripChartView {
    pub fn show(&mut self, ui: &mut egui::Ui, plotter: &MultiPanelPlotter<RetainedRegion>) {
        let panels = plotter.panels();
        if panels.is_empty() {
            ui.label("No signal groups configured");
            return;
        }

        let spacing = ui.spacing().item_spacing.y;
        let per_panel = (ui.available_height() / panels.len() as f32 - spacing - 18.0)
            .max(self.min_panel_height);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for panel in panels {
                let region = panel.region();
                let decor = region.decorations();
                if !decor.title.is_empty() {
                    ui.strong(&decor.title);
                }

                let mut plot = Plot::new(("strip_chart", panel.group_id()))
                    .height(per_panel)
                    .x_axis_label(decor.x_label.as_str())
                    .y_axis_label(decor.y_label.as_str())
                    .show_grid(decor.grid);
                if let Some(link) = &decor.x_link {
                    plot = plot.link_axis(link.clone(), true, false);
                }
                if decor.legend.is_some() {
                    plot = plot.legend(Legend::default());
                }

                let view = region.view();
                plot.show(ui, |plot_ui| {
                    if panel.is_live() {
                        plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                            [view.x.min, view.y.min],
                            [view.x.max, view.y.max],
                        ));
                    }
                    for line in region.lines() {
                        let points: Vec<[f64; 2]> = line.points().collect();
                        let mut plot_line = Line::new(PlotPoints::from(points))
                            .color(color32(line.spec.color, 1.0))
                            .width(line.spec.width)
                            .style(plot_line_style(line.spec.line_style));
                        if let Some(label) = &line.spec.label {
                            plot_line = plot_line.name(label);
                        }
                        plot_ui.line(plot_line);
                    }
                });
            }
        });
    }
}
