use eframe::egui::Color32;

use crate::color::{cycle, RD_BU};
use crate::data::filter::{site_rows, SiteSelection};
use crate::data::model::{LaunchDataset, Outcome};

/// One wedge of the outcome pie.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub count: usize,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> usize {
        self.slices.iter().map(|s| s.count).sum()
    }

    /// Share of slice `i` in `[0, 1]`; zero for an empty chart.
    pub fn fraction(&self, i: usize) -> f64 {
        let total = self.total();
        match self.slices.get(i) {
            Some(slice) if total > 0 => slice.count as f64 / total as f64,
            _ => 0.0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Build the outcome pie for the selected site.
///
/// * `All`: successful launches counted per site, sites in order of first
///   appearance; sites without a success get no slice.
/// * `Site(s)`: launches of `s` split into success and failure.
///
/// A site that matches no rows produces a chart without slices.
pub fn pie_chart(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChart {
    let (title, groups) = match selection {
        SiteSelection::All => (
            "Total Successful Launches by All Sites".to_string(),
            successes_by_site(dataset),
        ),
        SiteSelection::Site(site) => (
            format!("Success vs Failure for {site}"),
            outcomes_for_site(dataset, selection),
        ),
    };

    let slices = groups
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .enumerate()
        .map(|(i, (label, count))| PieSlice {
            label,
            count,
            color: cycle(&RD_BU, i),
        })
        .collect();

    PieChart { title, slices }
}

fn successes_by_site(dataset: &LaunchDataset) -> Vec<(String, usize)> {
    dataset
        .sites()
        .iter()
        .map(|site| {
            let successes = dataset
                .records()
                .iter()
                .filter(|r| r.launch_site == *site && r.outcome.is_success())
                .count();
            (site.clone(), successes)
        })
        .collect()
}

fn outcomes_for_site(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<(String, usize)> {
    let rows = site_rows(dataset, selection);
    let successes = rows
        .iter()
        .filter(|&&i| dataset.records()[i].outcome.is_success())
        .count();
    vec![
        (Outcome::Success.to_string(), successes),
        (Outcome::Failure.to_string(), rows.len() - successes),
    ]
}
