use std::fmt;

use serde::Deserialize;

use super::error::DataError;

// ---------------------------------------------------------------------------
// Outcome – the binary `class` column
// ---------------------------------------------------------------------------

/// Launch outcome as stored in the `class` column (1 = success, 0 = failure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Numeric class value as found in the source table.
    pub fn class(self) -> u8 {
        match self {
            Outcome::Failure => 0,
            Outcome::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == Outcome::Success
    }

    /// Interpret a raw class cell. Accepts `0`/`1` in integer or float
    /// spelling and `true`/`false`.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim() {
            "1" | "1.0" | "true" | "True" => Some(Outcome::Success),
            "0" | "0.0" | "false" | "False" => Some(Outcome::Failure),
            _ => None,
        }
    }

    pub fn from_f64(value: f64) -> Option<Self> {
        if value == 1.0 {
            Some(Outcome::Success)
        } else if value == 0.0 {
            Some(Outcome::Failure)
        } else {
            None
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Success => write!(f, "Success"),
            Outcome::Failure => write!(f, "Failure"),
        }
    }
}

// ---------------------------------------------------------------------------
// RawLaunch – one row as deserialized from CSV / JSON
// ---------------------------------------------------------------------------

/// A row exactly as it appears in a CSV or JSON launch file, before the
/// class column is validated. Columns not listed here are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct RawLaunch {
    #[serde(rename = "Flight Number", default)]
    pub flight_number: Option<u32>,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)", default)]
    pub payload_mass_kg: Option<f64>,
    #[serde(rename = "Booster Version")]
    pub booster_version: String,
    #[serde(rename = "Booster Version Category", default)]
    pub booster_category: Option<String>,
    #[serde(rename = "class")]
    pub class: ClassCell,
}

/// The `class` cell may be written as a number, a bool or a string
/// depending on which tool exported the table.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ClassCell {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl ClassCell {
    fn outcome(&self) -> Option<Outcome> {
        match self {
            ClassCell::Number(v) => Outcome::from_f64(*v),
            ClassCell::Bool(b) => Some(if *b { Outcome::Success } else { Outcome::Failure }),
            ClassCell::Text(s) => Outcome::parse(s),
        }
    }

    fn raw(&self) -> String {
        match self {
            ClassCell::Number(v) => v.to_string(),
            ClassCell::Bool(b) => b.to_string(),
            ClassCell::Text(s) => s.clone(),
        }
    }
}

impl RawLaunch {
    /// Validate the row; `row` is only used for the error message.
    pub fn into_record(self, row: usize) -> Result<LaunchRecord, DataError> {
        let outcome = self.class.outcome().ok_or_else(|| DataError::InvalidOutcome {
            row,
            value: self.class.raw(),
        })?;
        Ok(LaunchRecord {
            flight_number: self.flight_number,
            launch_site: self.launch_site,
            payload_mass_kg: self.payload_mass_kg.filter(|p| p.is_finite()),
            booster_version: self.booster_version,
            booster_category: self.booster_category.filter(|c| !c.is_empty()),
            outcome,
        })
    }
}

// ---------------------------------------------------------------------------
// LaunchRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single launch (one row of the source table).
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchRecord {
    pub flight_number: Option<u32>,
    pub launch_site: String,
    /// Missing cells are `None` and never match a payload filter.
    pub payload_mass_kg: Option<f64>,
    pub booster_version: String,
    pub booster_category: Option<String>,
    pub outcome: Outcome,
}

// ---------------------------------------------------------------------------
// LaunchDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table plus the values derived from it at load time.
/// Nothing here changes after construction.
#[derive(Debug, Clone)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    /// Distinct launch sites in order of first appearance.
    sites: Vec<String>,
    payload_min: f64,
    payload_max: f64,
}

impl LaunchDataset {
    /// Build the dataset and its derived statistics.
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, DataError> {
        if records.is_empty() {
            return Err(DataError::Empty);
        }

        let mut sites: Vec<String> = Vec::new();
        for rec in &records {
            if !sites.contains(&rec.launch_site) {
                sites.push(rec.launch_site.clone());
            }
        }

        let (payload_min, payload_max) = records
            .iter()
            .filter_map(|r| r.payload_mass_kg)
            .fold(None, |acc: Option<(f64, f64)>, p| match acc {
                None => Some((p, p)),
                Some((lo, hi)) => Some((lo.min(p), hi.max(p))),
            })
            .ok_or(DataError::NoPayloads)?;

        Ok(LaunchDataset {
            records,
            sites,
            payload_min,
            payload_max,
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    /// Smallest payload mass in the table.
    pub fn payload_min(&self) -> f64 {
        self.payload_min
    }

    /// Largest payload mass in the table.
    pub fn payload_max(&self) -> f64 {
        self.payload_max
    }

    /// Number of launches.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty. Always false for a constructed dataset.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Whether any record carries a booster version category.
    pub fn has_booster_categories(&self) -> bool {
        self.records.iter().any(|r| r.booster_category.is_some())
    }
}
