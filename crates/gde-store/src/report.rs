use std::path::Path;

use gde_core::errors::{ErrorInfo, GdeError};
use plotters::prelude::*;

/// Annotation parameters for the cost histogram caption.
#[derive(Debug, Clone, Copy)]
pub struct HistogramParams {
    /// Temperature used during the run.
    pub temperature: f64,
    /// Proposal standard deviation used during the run.
    pub proposal_std: f64,
    /// Number of histogram buckets.
    pub bins: usize,
}

impl Default for HistogramParams {
    fn default() -> Self {
        Self {
            temperature: 0.3,
            proposal_std: 0.2,
            bins: 20,
        }
    }
}

/// Renders a PNG histogram of the cost distribution with a mean marker and a
/// caption carrying the sampling parameters and sample count.
///
/// Fails on an empty pool rather than emitting an empty image.
pub fn plot_cost_histogram(
    costs: &[f64],
    params: &HistogramParams,
    path: &Path,
) -> Result<(), GdeError> {
    if costs.is_empty() {
        return Err(GdeError::Report(
            ErrorInfo::new("empty-result-set", "no costs to plot")
                .with_context("path", path.display().to_string())
                .with_hint("run generation first"),
        ));
    }
    if costs.iter().any(|cost| !cost.is_finite()) {
        return Err(GdeError::Report(
            ErrorInfo::new("non-finite-costs", "cost pool contains non-finite values")
                .with_context("path", path.display().to_string()),
        ));
    }
    let mut lo = costs.iter().copied().fold(f64::INFINITY, f64::min);
    let mut hi = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if hi - lo < f64::EPSILON {
        lo -= 0.5;
        hi += 0.5;
    }

    let bins = params.bins.max(1);
    let width = (hi - lo) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &cost in costs {
        let index = (((cost - lo) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }
    let max_count = counts.iter().copied().max().unwrap_or(0);
    let mean = costs.iter().sum::<f64>() / costs.len() as f64;

    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE).map_err(|err| draw_err(path, err))?;

    let caption = format!(
        "Alternatives cost distribution | T {} | STD {} | samples {}",
        params.temperature,
        params.proposal_std,
        costs.len()
    );
    let mut chart = ChartBuilder::on(&root)
        .caption(caption, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(48)
        .build_cartesian_2d(lo..hi, 0u32..max_count + 1)
        .map_err(|err| draw_err(path, err))?;
    chart
        .configure_mesh()
        .x_desc("Cost")
        .y_desc("Number of alternatives")
        .draw()
        .map_err(|err| draw_err(path, err))?;

    chart
        .draw_series(counts.iter().enumerate().map(|(index, &count)| {
            let x0 = lo + index as f64 * width;
            Rectangle::new([(x0, 0), (x0 + width, count)], BLUE.mix(0.45).filled())
        }))
        .map_err(|err| draw_err(path, err))?;
    chart
        .draw_series(LineSeries::new(
            [(mean, 0), (mean, max_count)],
            BLACK.stroke_width(2),
        ))
        .map_err(|err| draw_err(path, err))?;

    root.present().map_err(|err| draw_err(path, err))?;
    Ok(())
}

fn draw_err(path: &Path, err: impl std::fmt::Display) -> GdeError {
    GdeError::Report(
        ErrorInfo::new("histogram-draw", err.to_string())
            .with_context("path", path.display().to_string()),
    )
}
