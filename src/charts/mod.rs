//! Chart descriptions derived from the dataset and the current control
//! values. Builders are pure: same inputs, same chart. Drawing lives in
//! the UI layer.

pub mod pie;
pub mod scatter;

pub use pie::{pie_chart, PieChart, PieSlice};
pub use scatter::{scatter_chart, ColorBy, ScatterChart, ScatterPoint, ScatterSeries};
