use eframe::egui::{self, RichText, ScrollArea};
use launch_dash::data::model::LaunchDataset;
use launch_dash::state::AppState;

use crate::ui::{panels, pie, plot, table};

pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
    /// Show the egui inspection window (`--debug`).
    pub debug: bool,
}

impl LaunchDashApp {
    pub fn new(dataset: LaunchDataset, debug: bool) -> Self {
        Self {
            state: AppState::new(dataset),
            debug,
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: controls ----
        egui::SidePanel::left("control_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(
                            RichText::new(DASHBOARD_TITLE)
                                .size(32.0)
                                .color(egui::Color32::from_rgb(0x50, 0x3D, 0x36))
                                .strong(),
                        );
                    });
                    ui.add_space(8.0);

                    pie::outcome_pie(ui, &self.state.pie);
                    ui.separator();
                    plot::payload_scatter(ui, &self.state);
                    ui.separator();

                    egui::CollapsingHeader::new(format!(
                        "Launches in view ({})",
                        self.state.scatter.point_count()
                    ))
                    .default_open(false)
                    .show(ui, |ui| {
                        table::launch_table(ui, &self.state);
                    });
                });
        });

        if self.debug {
            egui::Window::new("egui inspection")
                .default_open(false)
                .show(ctx, |ui| ctx.inspection_ui(ui));
        }
    }
}
