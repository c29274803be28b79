use std::fmt;

use super::model::{LaunchDataset, LaunchRecord};

/// Value the site selector uses for "every site".
pub const ALL_SITES: &str = "ALL";

// ---------------------------------------------------------------------------
// Site selection
// ---------------------------------------------------------------------------

/// Current value of the launch-site selector.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a selector value; [`ALL_SITES`] is the only sentinel.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(site) => record.launch_site == *site,
        }
    }

    /// Human label for the selector widget.
    pub fn label(&self) -> &str {
        match self {
            SiteSelection::All => "All Sites",
            SiteSelection::Site(site) => site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{ALL_SITES}"),
            SiteSelection::Site(site) => write!(f, "{site}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Payload range
// ---------------------------------------------------------------------------

/// Inclusive payload mass interval in kilograms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    /// Build a range; reversed bounds are swapped.
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            PayloadRange { lo: a, hi: b }
        } else {
            PayloadRange { lo: b, hi: a }
        }
    }

    /// The full span of payloads present in `dataset`.
    pub fn of_dataset(dataset: &LaunchDataset) -> Self {
        PayloadRange::new(dataset.payload_min(), dataset.payload_max())
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn contains(&self, payload: f64) -> bool {
        self.lo <= payload && payload <= self.hi
    }
}

// ---------------------------------------------------------------------------
// Row selection
// ---------------------------------------------------------------------------

/// Indices of rows launched from the selected site (every row for `All`).
pub fn site_rows(dataset: &LaunchDataset, selection: &SiteSelection) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| selection.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

/// Indices of rows shown in the scatter chart.
///
/// A row passes when its site matches `selection` and its payload lies in
/// `range` (bounds inclusive). Rows without a payload never pass.
pub fn scatter_rows(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> Vec<usize> {
    dataset
        .records()
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            selection.matches(rec)
                && rec.payload_mass_kg.is_some_and(|p| range.contains(p))
        })
        .map(|(i, _)| i)
        .collect()
}
