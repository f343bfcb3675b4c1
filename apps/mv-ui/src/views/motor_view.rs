use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Polygon};
use mv_render::{PlotRegion, RetainedRegion, SceneRenderer};

use super::{color32, plot_line_style};

/// Rotor/stator schematic drawn inside fixed, equal-aspect bounds.
pub struct MotorView {
    circle_segments: usize,
}

impl Default for MotorView {
    fn default() -> Self {
        Self {
            circle_segments: 72,
        }
    }
}

impl MotorView {
    pub fn show(&mut self, ui: &mut egui::Ui, scene: &SceneRenderer<RetainedRegion>) {
        let region = scene.region();
        let decor = region.decorations();
        ui.strong(&decor.title);

        let view = region.view();
        let mut plot = Plot::new("motor_scene")
            .x_axis_label(decor.x_label.as_str())
            .y_axis_label(decor.y_label.as_str())
            .show_grid(decor.grid)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false);
        if view.equal_aspect {
            plot = plot.data_aspect(1.0);
        }

        let segments = self.circle_segments;
        plot.show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max(
                [view.x.min, view.y.min],
                [view.x.max, view.y.max],
            ));

            // creation order is back-to-front
            for disk in region.disks() {
                let points = circle_points(disk.center, disk.radius, segments);
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(points))
                        .fill_color(color32(disk.fill, disk.alpha))
                        .stroke(egui::Stroke::new(disk.edge_width, color32(disk.edge, 1.0))),
                );
            }
            for line in region.lines() {
                plot_ui.line(
                    Line::new(PlotPoints::from(line.points().collect::<Vec<_>>()))
                        .color(color32(line.spec.color, 1.0))
                        .width(line.spec.width)
                        .style(plot_line_style(line.spec.line_style)),
                );
            }
        });
    }
}

fn circle_points(center: [f64; 2], radius: f64, segments: usize) -> Vec<[f64; 2]> {
    (0..segments)
        .map(|i| {
            let a = i as f64 * std::f64::consts::TAU / segments as f64;
            [center[0] + radius * a.cos(), center[1] + radius * a.sin()]
        })
        .collect()
}
