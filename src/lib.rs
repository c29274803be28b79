//! Launch records dashboard: data loading, row selection and chart
//! descriptions. The eframe application in `main.rs` draws them.

pub mod charts;
pub mod color;
pub mod data;
pub mod state;
