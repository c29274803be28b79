use std::f32::consts::{FRAC_PI_2, TAU};

use eframe::egui::{self, Align2, Color32, FontId, Pos2, Sense, Shape, Stroke, Ui};
use launch_dash::charts::PieChart;
use launch_dash::color::highlight;

const PIE_HEIGHT: f32 = 320.0;
const LEGEND_WIDTH: f32 = 200.0;

// ---------------------------------------------------------------------------
// Outcome pie (central panel, top)
// ---------------------------------------------------------------------------

/// Paint the outcome pie with a legend on its right.
///
/// Slices start at twelve o'clock and run clockwise.
pub fn outcome_pie(ui: &mut Ui, chart: &PieChart) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(&chart.title);
    });

    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(egui::vec2(width, PIE_HEIGHT), Sense::hover());
    let painter = ui.painter_at(rect);

    if chart.is_empty() {
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            "No launches for this selection",
            FontId::proportional(16.0),
            ui.visuals().weak_text_color(),
        );
        return;
    }

    let pie_width = (rect.width() - LEGEND_WIDTH).max(rect.height());
    let center = egui::pos2(rect.left() + pie_width / 2.0, rect.center().y);
    let radius = (rect.height() / 2.0 - 10.0).min(pie_width / 2.0 - 10.0).max(10.0);

    let hovered = response
        .hover_pos()
        .and_then(|pos| slice_at(chart, center, radius, pos));

    let mut start = 0.0_f32;
    for (i, slice) in chart.slices.iter().enumerate() {
        let sweep = chart.fraction(i) as f32 * TAU;
        let fill = if hovered == Some(i) {
            highlight(slice.color)
        } else {
            slice.color
        };
        paint_wedge(&painter, center, radius, start, start + sweep, fill);

        let mid = start + sweep / 2.0;
        let label_pos = point_on_circle(center, radius * 0.65, mid);
        painter.text(
            label_pos,
            Align2::CENTER_CENTER,
            format!("{:.1}%", chart.fraction(i) * 100.0),
            FontId::proportional(13.0),
            label_color(slice.color),
        );
        start += sweep;
    }

    // ---- Legend ----
    let mut y = rect.top() + 20.0;
    let x = rect.left() + pie_width + 10.0;
    for slice in &chart.slices {
        let swatch = egui::Rect::from_min_size(egui::pos2(x, y - 6.0), egui::vec2(12.0, 12.0));
        painter.rect_filled(swatch, 2.0, slice.color);
        painter.text(
            egui::pos2(x + 18.0, y),
            Align2::LEFT_CENTER,
            &slice.label,
            FontId::proportional(13.0),
            ui.visuals().text_color(),
        );
        y += 20.0;
    }

    if let Some(i) = hovered {
        let slice = &chart.slices[i];
        response.on_hover_text_at_pointer(format!(
            "{}\ncount: {}\n{:.1}%",
            slice.label,
            slice.count,
            chart.fraction(i) * 100.0
        ));
    }
}

/// Screen position at `angle` radians clockwise from twelve o'clock.
fn point_on_circle(center: Pos2, radius: f32, angle: f32) -> Pos2 {
    let a = angle - FRAC_PI_2;
    egui::pos2(center.x + radius * a.cos(), center.y + radius * a.sin())
}

/// Fill a wedge as a fan of convex pieces no wider than a quarter turn.
fn paint_wedge(painter: &egui::Painter, center: Pos2, radius: f32, from: f32, to: f32, fill: Color32) {
    let pieces = ((to - from) / FRAC_PI_2).ceil().max(1.0) as usize;
    let step = (to - from) / pieces as f32;
    for p in 0..pieces {
        let a0 = from + step * p as f32;
        let segments = 16;
        let mut points = Vec::with_capacity(segments + 2);
        points.push(center);
        for s in 0..=segments {
            points.push(point_on_circle(center, radius, a0 + step * s as f32 / segments as f32));
        }
        painter.add(Shape::convex_polygon(points, fill, Stroke::NONE));
    }
    // Slice borders
    let stroke = Stroke::new(1.5, Color32::WHITE);
    painter.line_segment([center, point_on_circle(center, radius, from)], stroke);
    painter.line_segment([center, point_on_circle(center, radius, to)], stroke);
}

/// Index of the slice under `pos`, if any.
fn slice_at(chart: &PieChart, center: Pos2, radius: f32, pos: Pos2) -> Option<usize> {
    let d = pos - center;
    if d.length() > radius {
        return None;
    }
    // Clockwise angle from twelve o'clock, in [0, TAU).
    let angle = d.x.atan2(-d.y).rem_euclid(TAU);
    let mut start = 0.0_f32;
    for i in 0..chart.slices.len() {
        let end = start + chart.fraction(i) as f32 * TAU;
        if angle >= start && angle < end {
            return Some(i);
        }
        start = end;
    }
    None
}

/// Dark text on light slices, light text on dark ones.
fn label_color(fill: Color32) -> Color32 {
    let luma = 0.299 * fill.r() as f32 + 0.587 * fill.g() as f32 + 0.114 * fill.b() as f32;
    if luma > 150.0 {
        Color32::BLACK
    } else {
        Color32::WHITE
    }
}
