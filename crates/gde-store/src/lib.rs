#![deny(missing_docs)]

//! Persistence and reporting for generated design pools: CSV result tables
//! and cost-distribution histograms.

/// Cost histogram rendering.
pub mod report;
/// CSV result table writing and reading.
pub mod store;

pub use report::{plot_cost_histogram, HistogramParams};
pub use store::{default_results_filename, load_results, save_results, save_results_with};
