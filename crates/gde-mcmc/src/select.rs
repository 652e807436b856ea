//! Post-hoc curation utilities over an already-generated design/cost pool.

use gde_core::errors::{ErrorInfo, GdeError};
use gde_core::{DesignVector, RngHandle};

/// Returns the `n` lowest-cost designs with their costs, ascending.
///
/// The sort is stable, so designs with equal cost keep their original
/// relative order. Fails fast when `n` exceeds the pool size or the slices
/// disagree in length; the pool is never silently truncated.
pub fn top_k(
    designs: &[DesignVector],
    costs: &[f64],
    n: usize,
) -> Result<(Vec<DesignVector>, Vec<f64>), GdeError> {
    check_pool(designs, costs, n)?;
    let mut order: Vec<usize> = (0..costs.len()).collect();
    order.sort_by(|&a, &b| costs[a].total_cmp(&costs[b]));
    let best_designs = order.iter().take(n).map(|&i| designs[i].clone()).collect();
    let best_costs = order.iter().take(n).map(|&i| costs[i]).collect();
    Ok((best_designs, best_costs))
}

/// Returns `n` designs drawn uniformly without replacement, with their costs.
///
/// A `Some(seed)` makes the draw reproducible; `None` draws from OS entropy.
pub fn random_k(
    designs: &[DesignVector],
    costs: &[f64],
    n: usize,
    seed: Option<u64>,
) -> Result<(Vec<DesignVector>, Vec<f64>), GdeError> {
    check_pool(designs, costs, n)?;
    let mut rng = match seed {
        Some(seed) => RngHandle::from_seed(seed),
        None => RngHandle::from_entropy(),
    };
    let indices = rand::seq::index::sample(&mut rng, costs.len(), n).into_vec();
    let picked_designs = indices.iter().map(|&i| designs[i].clone()).collect();
    let picked_costs = indices.iter().map(|&i| costs[i]).collect();
    Ok((picked_designs, picked_costs))
}

fn check_pool(designs: &[DesignVector], costs: &[f64], n: usize) -> Result<(), GdeError> {
    if designs.len() != costs.len() {
        return Err(GdeError::Selector(
            ErrorInfo::new("pool-misaligned", "designs and costs differ in length")
                .with_context("designs", designs.len().to_string())
                .with_context("costs", costs.len().to_string()),
        ));
    }
    if n > costs.len() {
        return Err(GdeError::Selector(
            ErrorInfo::new("pool-too-small", "requested more designs than the pool holds")
                .with_context("requested", n.to_string())
                .with_context("pool", costs.len().to_string())
                .with_hint("run more iterations or lower n"),
        ));
    }
    Ok(())
}
