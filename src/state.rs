use crate::charts::{pie_chart, scatter_chart, ColorBy, PieChart, ScatterChart};
use crate::data::filter::{PayloadRange, SiteSelection};
use crate::data::model::LaunchDataset;

/// Lower end of the payload slider.
pub const SLIDER_MIN: f64 = 0.0;
/// Default upper end of the payload slider.
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 500.0;
/// Tick labels under the payload slider.
pub const SLIDER_MARKS: [(f64, &str); 5] = [
    (0.0, "0"),
    (2_500.0, "2.5K"),
    (5_000.0, "5K"),
    (7_500.0, "7.5K"),
    (10_000.0, "10K"),
];

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset; read-only until a different file is opened.
    pub dataset: LaunchDataset,

    /// Current value of the site selector.
    pub site: SiteSelection,

    /// Current value of the payload range control.
    pub payload: PayloadRange,

    /// Attribute that colours the scatter series.
    pub color_by: ColorBy,

    /// Charts for the current control values (cached).
    pub pie: PieChart,
    pub scatter: ScatterChart,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the initial state: all sites, full payload range.
    pub fn new(dataset: LaunchDataset) -> Self {
        let site = SiteSelection::All;
        let payload = PayloadRange::of_dataset(&dataset);
        let color_by = ColorBy::default();
        let pie = pie_chart(&dataset, &site);
        let scatter = scatter_chart(&dataset, &site, payload, color_by);
        Self {
            dataset,
            site,
            payload,
            color_by,
            pie,
            scatter,
            status_message: None,
        }
    }

    /// Replace the dataset and reset every control.
    pub fn set_dataset(&mut self, dataset: LaunchDataset) {
        *self = AppState::new(dataset);
    }

    /// Upper end of the payload slider: the default, widened to the next
    /// step when the data goes beyond it.
    pub fn slider_max(&self) -> f64 {
        let data_max = (self.dataset.payload_max() / SLIDER_STEP).ceil() * SLIDER_STEP;
        data_max.max(SLIDER_MAX)
    }

    /// Recompute the pie after a site change.
    fn refresh_pie(&mut self) {
        self.pie = pie_chart(&self.dataset, &self.site);
    }

    /// Recompute the scatter after any control change.
    fn refresh_scatter(&mut self) {
        self.scatter = scatter_chart(&self.dataset, &self.site, self.payload, self.color_by);
    }

    pub fn set_site(&mut self, site: SiteSelection) {
        if site == self.site {
            return;
        }
        log::debug!("site selection → {site}");
        self.site = site;
        self.refresh_pie();
        self.refresh_scatter();
    }

    pub fn set_payload_range(&mut self, lo: f64, hi: f64) {
        let range = PayloadRange::new(lo, hi);
        if range == self.payload {
            return;
        }
        log::debug!("payload range → [{}, {}] kg", range.lo(), range.hi());
        self.payload = range;
        self.refresh_scatter();
    }

    pub fn set_color_by(&mut self, color_by: ColorBy) {
        if color_by == self.color_by {
            return;
        }
        self.color_by = color_by;
        self.refresh_scatter();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{LaunchRecord, Outcome};

    fn dataset(max_payload: f64) -> LaunchDataset {
        let records = [("A", 100.0, Outcome::Success), ("B", max_payload, Outcome::Failure)]
            .into_iter()
            .map(|(site, payload, outcome)| LaunchRecord {
                flight_number: None,
                launch_site: site.to_string(),
                payload_mass_kg: Some(payload),
                booster_version: "FT".to_string(),
                booster_category: None,
                outcome,
            })
            .collect();
        LaunchDataset::from_records(records).unwrap()
    }

    #[test]
    fn starts_with_all_sites_and_full_range() {
        let state = AppState::new(dataset(9600.0));
        assert_eq!(state.site, SiteSelection::All);
        assert_eq!((state.payload.lo(), state.payload.hi()), (100.0, 9600.0));
        assert_eq!(state.scatter.point_count(), 2);
        assert_eq!(state.pie.slices.len(), 1);
        assert_eq!(state.slider_max(), SLIDER_MAX);
    }

    #[test]
    fn slider_widens_for_heavy_payloads() {
        let state = AppState::new(dataset(15_600.0));
        assert_eq!(state.slider_max(), 16_000.0);
    }

    #[test]
    fn controls_refresh_charts() {
        let mut state = AppState::new(dataset(9600.0));
        state.set_payload_range(5000.0, 0.0);
        assert_eq!(state.scatter.rows(), vec![0]);

        state.set_site(SiteSelection::parse("B"));
        assert_eq!(state.pie.title, "Success vs Failure for B");
        assert!(state.scatter.is_empty());

        state.set_payload_range(0.0, 10_000.0);
        assert_eq!(state.scatter.rows(), vec![1]);
    }
}
