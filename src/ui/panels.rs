use eframe::egui::{self, Align2, Color32, FontId, RichText, Sense, SliderClamping, Ui};
use launch_dash::charts::ColorBy;
use launch_dash::data::filter::{PayloadRange, SiteSelection};
use launch_dash::state::{AppState, SLIDER_MARKS, SLIDER_MIN, SLIDER_STEP};

// ---------------------------------------------------------------------------
// Left side panel – dashboard controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Controls");
    ui.separator();

    site_selector(ui, state);
    ui.add_space(12.0);

    payload_slider(ui, state);
    ui.add_space(12.0);

    // ---- Colour-by selector ----
    ui.strong("Color by");
    let mut color_by = state.color_by;
    egui::ComboBox::from_id_salt("color_by")
        .selected_text(color_by.to_string())
        .show_ui(ui, |ui: &mut Ui| {
            for option in ColorBy::ALL {
                if option == ColorBy::BoosterCategory && !state.dataset.has_booster_categories() {
                    continue;
                }
                ui.selectable_value(&mut color_by, option, option.to_string());
            }
        });
    state.set_color_by(color_by);
}

fn site_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Launch Site");
    let mut site = state.site.clone();
    egui::ComboBox::from_id_salt("site_dropdown")
        .selected_text(site.label().to_string())
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            ui.selectable_value(&mut site, SiteSelection::All, SiteSelection::All.label());
            for name in state.dataset.sites() {
                let option = SiteSelection::Site(name.clone());
                ui.selectable_value(&mut site, option, name.as_str());
            }
        });
    state.set_site(site);
}

/// Two linked sliders acting as one payload range control, with the
/// kilogram tick marks painted underneath.
fn payload_slider(ui: &mut Ui, state: &mut AppState) {
    ui.strong("Select Payload Range (Kg):");
    let max = state.slider_max();
    let before = state.payload;
    let mut lo = before.lo();
    let mut hi = before.hi();

    // Never clamp: with clamping on, the slider snaps the stored value to
    // the step grid on every pass, even without user input.
    let lo_response = ui.add(
        egui::Slider::new(&mut lo, SLIDER_MIN..=max)
            .step_by(SLIDER_STEP)
            .clamping(SliderClamping::Never)
            .text("min"),
    );
    let hi_response = ui.add(
        egui::Slider::new(&mut hi, SLIDER_MIN..=max)
            .step_by(SLIDER_STEP)
            .clamping(SliderClamping::Never)
            .text("max"),
    );

    if let Some((lo, hi)) = dragged_range(
        before,
        lo_response.changed().then_some(lo),
        hi_response.changed().then_some(hi),
    ) {
        state.set_payload_range(lo, hi);
    }

    let width = ui.spacing().slider_width;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, 14.0), Sense::hover());
    let painter = ui.painter_at(rect.expand2(egui::vec2(12.0, 0.0)));
    let color = ui.visuals().weak_text_color();
    for (kg, label) in SLIDER_MARKS {
        let t = ((kg - SLIDER_MIN) / (max - SLIDER_MIN)) as f32;
        let x = rect.left() + t * rect.width();
        painter.text(
            egui::pos2(x, rect.center().y),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(11.0),
            color,
        );
    }

    ui.label(
        RichText::new(format!("{:.0} – {:.0} kg", state.payload.lo(), state.payload.hi())).small(),
    );
}

/// New payload bounds after a slider pass, or `None` when neither handle
/// was moved. A handle that was not moved keeps its pre-frame value; if the
/// handles cross, the moved one pushes the other.
fn dragged_range(before: PayloadRange, lo: Option<f64>, hi: Option<f64>) -> Option<(f64, f64)> {
    match (lo, hi) {
        (None, None) => None,
        (Some(lo), None) => Some((lo, before.hi().max(lo))),
        (None, Some(hi)) => Some((before.lo().min(hi), hi)),
        (Some(lo), Some(hi)) => Some((lo.min(hi), lo.max(hi))),
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} launches loaded, {} in view",
            state.dataset.len(),
            state.scatter.point_count()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open launch records")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match launch_dash::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} launches from {} with sites {:?}",
                    dataset.len(),
                    path.display(),
                    dataset.sites()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use launch_dash::data::loader::load_file;

    use super::*;

    fn sample_state() -> AppState {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv");
        AppState::new(load_file(&path).unwrap())
    }

    #[test]
    fn idle_frame_keeps_initial_payload_range() {
        let mut state = sample_state();
        assert_eq!((state.payload.lo(), state.payload.hi()), (0.0, 9600.0));
        assert_eq!(state.scatter.point_count(), 36);

        let ctx = egui::Context::default();
        for _ in 0..2 {
            let _ = ctx.run(egui::RawInput::default(), |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| side_panel(ui, &mut state));
            });
        }

        assert_eq!((state.payload.lo(), state.payload.hi()), (0.0, 9600.0));
        assert_eq!(state.scatter.point_count(), 36);
    }

    #[test]
    fn untouched_handle_keeps_its_value() {
        let before = PayloadRange::new(0.0, 9600.0);
        assert_eq!(dragged_range(before, None, None), None);
        assert_eq!(dragged_range(before, Some(500.0), None), Some((500.0, 9600.0)));
        assert_eq!(dragged_range(before, None, Some(7000.0)), Some((0.0, 7000.0)));
    }

    #[test]
    fn moved_handle_pushes_the_other() {
        let before = PayloadRange::new(2000.0, 4000.0);
        assert_eq!(dragged_range(before, Some(5000.0), None), Some((5000.0, 5000.0)));
        assert_eq!(dragged_range(before, None, Some(1000.0)), Some((1000.0, 1000.0)));
    }
}
