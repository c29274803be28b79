use std::fmt;

use eframe::egui::Color32;

use crate::color::{ColorMap, SET2};
use crate::data::filter::{scatter_rows, PayloadRange, SiteSelection};
use crate::data::model::{LaunchDataset, LaunchRecord};

pub const SCATTER_TITLE: &str = "Payload vs. Launch Success Correlation";
pub const X_LABEL: &str = "Payload Mass (kg)";
pub const Y_LABEL: &str = "Launch Outcome";

/// Largest marker radius in points, given to the heaviest payload in view.
pub const MAX_RADIUS: f32 = 10.0;
/// Markers never shrink below this, so zero-payload launches stay visible.
pub const MIN_RADIUS: f32 = 2.0;

/// Record attribute that splits scatter points into coloured series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorBy {
    #[default]
    BoosterVersion,
    BoosterCategory,
}

impl ColorBy {
    pub const ALL: [ColorBy; 2] = [ColorBy::BoosterVersion, ColorBy::BoosterCategory];

    fn key<'a>(&self, record: &'a LaunchRecord) -> &'a str {
        match self {
            ColorBy::BoosterVersion => record.booster_version.as_str(),
            ColorBy::BoosterCategory => record.booster_category.as_deref().unwrap_or("Unknown"),
        }
    }
}

impl fmt::Display for ColorBy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorBy::BoosterVersion => write!(f, "Booster Version"),
            ColorBy::BoosterCategory => write!(f, "Booster Version Category"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    /// Index of the source row in the dataset.
    pub row: usize,
    pub payload_kg: f64,
    /// Outcome class, 0.0 or 1.0.
    pub class: f64,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub name: String,
    pub color: Color32,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_by: ColorBy,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    /// Source rows of every point, in dataset order.
    pub fn rows(&self) -> Vec<usize> {
        let mut rows: Vec<usize> = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|p| p.row))
            .collect();
        rows.sort_unstable();
        rows
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    /// Every point of series `name` drawn at exactly (`payload_kg`, `class`).
    /// Launches with equal payload and outcome share one marker position, so
    /// a hovered marker can stand for several rows.
    pub fn points_at(&self, name: &str, payload_kg: f64, class: f64) -> Vec<&ScatterPoint> {
        self.series
            .iter()
            .filter(|s| s.name == name)
            .flat_map(|s| s.points.iter())
            .filter(|p| p.payload_kg == payload_kg && p.class == class)
            .collect()
    }
}

/// Tooltip text for one point: site, payload and booster.
pub fn hover_text(dataset: &LaunchDataset, point: &ScatterPoint) -> String {
    let rec = &dataset.records()[point.row];
    format!(
        "Launch Site: {}\nPayload Mass (kg): {}\nBooster Version: {}\n{}: {}",
        rec.launch_site,
        point.payload_kg,
        rec.booster_version,
        Y_LABEL,
        rec.outcome.class()
    )
}

/// Build the payload/outcome scatter for the selected site and range.
///
/// Points are exactly the rows selected by [`scatter_rows`]. Marker area
/// grows linearly with payload, relative to the heaviest payload in view.
pub fn scatter_chart(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
    color_by: ColorBy,
) -> ScatterChart {
    let rows = scatter_rows(dataset, selection, range);
    let heaviest = rows
        .iter()
        .filter_map(|&i| dataset.records()[i].payload_mass_kg)
        .fold(0.0_f64, f64::max);

    let mut colors = ColorMap::new(&SET2);
    let mut series: Vec<ScatterSeries> = Vec::new();

    for row in rows {
        let rec = &dataset.records()[row];
        let Some(payload_kg) = rec.payload_mass_kg else {
            continue;
        };
        let point = ScatterPoint {
            row,
            payload_kg,
            class: f64::from(rec.outcome.class()),
            radius: marker_radius(payload_kg, heaviest),
        };

        let key = color_by.key(rec);
        match series.iter_mut().find(|s| s.name == key) {
            Some(s) => s.points.push(point),
            None => series.push(ScatterSeries {
                name: key.to_string(),
                color: colors.color_for(key),
                points: vec![point],
            }),
        }
    }

    ScatterChart {
        title: SCATTER_TITLE.to_string(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        color_by,
        series,
    }
}

fn marker_radius(payload_kg: f64, heaviest: f64) -> f32 {
    if heaviest <= 0.0 || payload_kg <= 0.0 {
        return MIN_RADIUS;
    }
    let scaled = MAX_RADIUS * (payload_kg / heaviest).sqrt() as f32;
    scaled.max(MIN_RADIUS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Outcome;

    fn dataset() -> LaunchDataset {
        let rows = [
            ("CCAFS LC-40", 0.0, "F9 v1.0  B0003", Some("v1.0"), Outcome::Failure),
            ("CCAFS LC-40", 2500.0, "F9 FT B1021.1", Some("FT"), Outcome::Success),
            ("VAFB SLC-4E", 10000.0, "F9 FT B1029.1", Some("FT"), Outcome::Success),
            ("KSC LC-39A", 5300.0, "F9 B4 B1040.1", None, Outcome::Failure),
        ];
        let records = rows
            .into_iter()
            .map(|(site, payload, booster, category, outcome)| LaunchRecord {
                flight_number: None,
                launch_site: site.to_string(),
                payload_mass_kg: Some(payload),
                booster_version: booster.to_string(),
                booster_category: category.map(str::to_string),
                outcome,
            })
            .collect();
        LaunchDataset::from_records(records).unwrap()
    }

    #[test]
    fn series_follow_booster_version() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::All,
            PayloadRange::of_dataset(&ds),
            ColorBy::BoosterVersion,
        );
        assert_eq!(chart.title, SCATTER_TITLE);
        assert_eq!(chart.series.len(), 4);
        assert_eq!(chart.series[0].color, SET2[0]);
        assert_eq!(chart.rows(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn series_follow_category_with_unknown_bucket() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::All,
            PayloadRange::of_dataset(&ds),
            ColorBy::BoosterCategory,
        );
        let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["v1.0", "FT", "Unknown"]);
        assert_eq!(chart.series[1].points.len(), 2);
    }

    #[test]
    fn markers_scale_with_payload() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::All,
            PayloadRange::new(0.0, 10000.0),
            ColorBy::BoosterCategory,
        );
        let ft = &chart.series[1].points;
        assert_eq!(ft[1].radius, MAX_RADIUS);
        assert_eq!(ft[0].radius, MAX_RADIUS * 0.5);
        assert_eq!(chart.series[0].points[0].radius, MIN_RADIUS);
    }

    #[test]
    fn empty_selection_keeps_axes() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::parse("VAFB SLC-4E"),
            PayloadRange::new(0.0, 100.0),
            ColorBy::BoosterVersion,
        );
        assert!(chart.is_empty());
        assert_eq!(chart.x_label, X_LABEL);
        assert_eq!(chart.y_label, Y_LABEL);
    }

    #[test]
    fn hover_names_site_and_booster() {
        let ds = dataset();
        let chart = scatter_chart(
            &ds,
            &SiteSelection::parse("KSC LC-39A"),
            PayloadRange::of_dataset(&ds),
            ColorBy::BoosterVersion,
        );
        let points = chart.points_at("F9 B4 B1040.1", 5300.0, 0.0);
        assert_eq!(points.len(), 1);
        let text = hover_text(&ds, points[0]);
        assert!(text.contains("Launch Site: KSC LC-39A"));
        assert!(text.contains("Booster Version: F9 B4 B1040.1"));
    }
}
