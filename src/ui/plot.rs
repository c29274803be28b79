use std::collections::BTreeMap;

use eframe::egui::Ui;
use egui_plot::{Legend, MarkerShape, Plot, PlotPoints, Points};
use launch_dash::charts::scatter::hover_text;
use launch_dash::state::AppState;

const SCATTER_HEIGHT: f32 = 380.0;

// ---------------------------------------------------------------------------
// Payload / outcome scatter (central panel)
// ---------------------------------------------------------------------------

/// Render the payload vs. outcome scatter.
///
/// Every launch is its own `Points` item so marker size can follow payload;
/// items of one series share a name and therefore one legend entry.
pub fn payload_scatter(ui: &mut Ui, state: &AppState) {
    let chart = &state.scatter;

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    // The formatter must own its data: snapshot the chart and the hover
    // text of every row in view.
    let snapshot = chart.clone();
    let texts: BTreeMap<usize, String> = chart
        .series
        .iter()
        .flat_map(|s| s.points.iter())
        .map(|p| (p.row, hover_text(&state.dataset, p)))
        .collect();

    let x_label = chart.x_label.clone();
    let y_label = chart.y_label.clone();

    Plot::new("payload_scatter")
        .height(SCATTER_HEIGHT)
        .legend(Legend::default())
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .include_x(state.payload.lo())
        .include_x(state.payload.hi())
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(false)
        .allow_zoom(true)
        .label_formatter(move |name, value| {
            let rows: Vec<&str> = snapshot
                .points_at(name, value.x, value.y)
                .iter()
                .filter_map(|p| texts.get(&p.row).map(String::as_str))
                .collect();
            if rows.is_empty() {
                format!("{x_label}: {:.0}\n{y_label}: {:.2}", value.x, value.y)
            } else {
                rows.join("\n\n")
            }
        })
        .show(ui, |plot_ui| {
            for series in &chart.series {
                for point in &series.points {
                    let marker = Points::new(PlotPoints::new(vec![[point.payload_kg, point.class]]))
                        .name(&series.name)
                        .color(series.color)
                        .shape(MarkerShape::Circle)
                        .filled(true)
                        .radius(point.radius);
                    plot_ui.points(marker);
                }
            }
        });
}
