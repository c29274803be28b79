use std::path::Path;

use launch_dash::charts::scatter::hover_text;
use launch_dash::charts::{pie_chart, scatter_chart, ColorBy};
use launch_dash::data::filter::{PayloadRange, SiteSelection};
use launch_dash::data::loader::load_file;
use launch_dash::data::model::LaunchDataset;
use launch_dash::state::AppState;

fn sample() -> LaunchDataset {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv");
    load_file(&path).expect("bundled sample loads")
}

#[test]
fn bundled_csv_statistics() {
    let ds = sample();
    assert_eq!(ds.len(), 36);
    assert_eq!(
        ds.sites(),
        ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert_eq!(ds.payload_min(), 0.0);
    assert_eq!(ds.payload_max(), 9600.0);
    assert!(ds.has_booster_categories());
}

#[test]
fn all_sites_pie_on_bundled_csv() {
    let ds = sample();
    let chart = pie_chart(&ds, &SiteSelection::All);
    let counts: Vec<(&str, usize)> = chart
        .slices
        .iter()
        .map(|s| (s.label.as_str(), s.count))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("CCAFS LC-40", 2),
            ("VAFB SLC-4E", 2),
            ("KSC LC-39A", 8),
            ("CCAFS SLC-40", 4),
        ]
    );
}

#[test]
fn ksc_scatter_in_mid_range() {
    let ds = sample();
    let chart = scatter_chart(
        &ds,
        &SiteSelection::parse("KSC LC-39A"),
        PayloadRange::new(2500.0, 6000.0),
        ColorBy::BoosterCategory,
    );
    // 5600, 5300, 3696.65, 2708, 3669, 3310, 5800
    assert_eq!(chart.point_count(), 7);
    let names: Vec<&str> = chart.series.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["FT", "B4", "B5"]);
}

#[test]
fn dashboard_state_follows_controls() {
    let mut state = AppState::new(sample());
    assert_eq!(state.scatter.point_count(), 36);

    state.set_site(SiteSelection::parse("VAFB SLC-4E"));
    assert_eq!(state.pie.title, "Success vs Failure for VAFB SLC-4E");
    let split: Vec<usize> = state.pie.slices.iter().map(|s| s.count).collect();
    assert_eq!(split, vec![2, 4]);

    state.set_payload_range(9000.0, 10_000.0);
    assert_eq!(state.scatter.point_count(), 4);
}

#[test]
fn coincident_markers_resolve_to_every_row() {
    let ds = sample();
    let chart = scatter_chart(
        &ds,
        &SiteSelection::All,
        PayloadRange::of_dataset(&ds),
        ColorBy::BoosterCategory,
    );

    let zero_payload = chart.points_at("v1.0", 0.0, 0.0);
    let rows: Vec<usize> = zero_payload.iter().map(|p| p.row).collect();
    assert_eq!(rows, vec![0, 1]);
    assert!(hover_text(&ds, zero_payload[1]).contains("F9 v1.0  B0004"));

    let heavy_ft: Vec<String> = chart
        .points_at("FT", 9600.0, 1.0)
        .into_iter()
        .map(|p| hover_text(&ds, p))
        .collect();
    assert_eq!(heavy_ft.len(), 2);
    assert!(heavy_ft[0].contains("F9 FT B1029.1"));
    assert!(heavy_ft[1].contains("F9 FT B1036.1"));
}
