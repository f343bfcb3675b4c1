use crate::views::{MotorView, StripChartView};
use egui_file_dialog::{DialogMode, FileDialog};
use mv_app::{AppResult, DashboardSession, StepOutcome, config_service};
use mv_config::Preset;
use std::path::PathBuf;
use tracing::{error, info};

pub struct MotorViewApp {
    session: Option<DashboardSession>,
    preset: Preset,
    config_path: Option<PathBuf>,
    file_dialog: FileDialog,
    last_directory: Option<PathBuf>,
    paused: bool,
    dt_s: f64,
    status_message: Option<String>,
    strip_chart: StripChartView,
    motor_view: MotorView,
}

impl MotorViewApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            session: None,
            preset: Preset::default(),
            config_path: None,
            file_dialog: FileDialog::new(),
            last_directory: None,
            paused: false,
            dt_s: 0.01,
            status_message: None,
            strip_chart: StripChartView::default(),
            motor_view: MotorView::default(),
        };
        app.select_preset(Preset::default());
        app
    }

    fn select_preset(&mut self, preset: Preset) {
        self.preset = preset;
        self.config_path = None;
        self.install(DashboardSession::from_preset(preset), preset.label().to_string());
    }

    fn open_config(&mut self, path: PathBuf) {
        if let Some(parent) = path.parent() {
            self.last_directory = Some(parent.to_path_buf());
        }
        let session = config_service::load_config(&path).and_then(DashboardSession::new);
        let label = path.display().to_string();
        if session.is_ok() {
            self.config_path = Some(path);
        }
        self.install(session, label);
    }

    fn install(&mut self, session: AppResult<DashboardSession>, label: String) {
        match session {
            Ok(session) => {
                info!(source = %label, "dashboard loaded");
                self.session = Some(session);
                self.status_message = Some(format!("Loaded {}", label));
            }
            Err(e) => {
                error!(source = %label, error = %e, "failed to load dashboard");
                self.status_message = Some(format!("Failed to load {}: {}", label, e));
            }
        }
    }

    fn reset(&mut self) {
        if let Some(session) = self.session.as_mut() {
            if let Err(e) = session.reset() {
                self.status_message = Some(format!("Reset failed: {}", e));
            }
        }
    }

    fn step(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.step(self.dt_s) {
            Ok(StepOutcome::Rendered) => {}
            Ok(StepOutcome::Rejected { reason }) => {
                self.status_message = Some(format!("Frame skipped: {}", reason));
            }
            Err(e) => {
                self.status_message = Some(format!("Stopped: {}", e));
                self.paused = true;
            }
        }
    }

    fn toolbar(&mut self, ctx: &egui::Context, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Open").clicked() {
                let initial_dir = self.last_directory.as_ref().and_then(|p| p.to_str());
                let _ = self
                    .file_dialog
                    .open(DialogMode::SelectFile, true, initial_dir);
            }

            let mut preset = self.preset;
            egui::ComboBox::from_id_salt("preset_selector")
                .selected_text(preset.label())
                .show_ui(ui, |ui| {
                    for choice in Preset::ALL {
                        ui.selectable_value(&mut preset, choice, choice.label());
                    }
                });
            if preset != self.preset {
                self.select_preset(preset);
            }

            ui.separator();

            let pause_label = if self.paused { "Resume" } else { "Pause" };
            if ui.button(pause_label).clicked() {
                self.paused = !self.paused;
            }
            if ui.button("Reset").clicked() {
                self.reset();
            }
            ui.add(
                egui::DragValue::new(&mut self.dt_s)
                    .speed(0.001)
                    .range(1e-4..=1.0)
                    .prefix("dt "),
            );

            ui.separator();

            if let Some(session) = &self.session {
                ui.label(format!(
                    "t = {:.2} s  frames = {}  skipped = {}",
                    session.time(),
                    session.plotter().frame_count(),
                    session.rejected()
                ));
            }
            if let Some(path) = &self.config_path {
                ui.label(format!("config: {}", path.display()));
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let exit = egui::Button::new(
                    egui::RichText::new("Exit").color(egui::Color32::WHITE),
                )
                .fill(egui::Color32::from_rgb(200, 40, 40));
                if ui.add(exit).clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });
        });

        if let Some(message) = &self.status_message {
            ui.label(message);
        }
    }
}

impl eframe::App for MotorViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.toolbar(ctx, ui);
        });

        self.file_dialog.update(ctx);
        if let Some(path) = self.file_dialog.take_selected() {
            self.open_config(path.to_path_buf());
        }

        if !self.paused {
            self.step();
        }

        egui::SidePanel::right("motor_scene")
            .default_width(460.0)
            .show(ctx, |ui| match &self.session {
                Some(session) => self.motor_view.show(ui, session.scene()),
                None => {
                    ui.label("No dashboard loaded");
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| match &self.session {
            Some(session) => self.strip_chart.show(ui, session.plotter()),
            None => {
                ui.label("Open a config or pick a preset");
            }
        });

        if !self.paused {
            ctx.request_repaint();
        }
    }
}
