use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};
use launch_dash::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

/// Tabulate the launches currently plotted in the scatter.
pub fn launch_table(ui: &mut Ui, state: &AppState) {
    let rows = state.scatter.rows();
    let records = state.dataset.records();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .vscroll(false)
        .column(Column::auto().at_least(50.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(110.0))
        .column(Column::auto().at_least(140.0))
        .column(Column::remainder())
        .header(20.0, |mut header| {
            for title in ["Flight", "Launch Site", "Payload (kg)", "Booster Version", "Outcome"] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, rows.len(), |mut row| {
                let rec = &records[rows[row.index()]];
                row.col(|ui| {
                    ui.label(rec.flight_number.map(|n| n.to_string()).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(&rec.launch_site);
                });
                row.col(|ui| {
                    ui.label(
                        rec.payload_mass_kg
                            .map(|p| format!("{p:.0}"))
                            .unwrap_or_default(),
                    );
                });
                row.col(|ui| {
                    ui.label(&rec.booster_version);
                });
                row.col(|ui| {
                    ui.label(rec.outcome.to_string());
                });
            });
        });
}
