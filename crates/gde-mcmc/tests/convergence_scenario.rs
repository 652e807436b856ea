use gde_core::{DesignVector, GdeError};
use gde_mcmc::{run, top_k, RunConfig};

fn quadratic_cost(design: &DesignVector) -> Result<f64, GdeError> {
    Ok(design.components().iter().map(|x| x * x).sum())
}

#[test]
fn sampler_drifts_toward_the_cost_minimum() {
    let mut config = RunConfig::default();
    config.iterations = 300;
    config.temperature = 0.3;
    config.proposal_std = 0.1;
    let init = DesignVector::new(vec![0.5, 0.5]).unwrap();
    let initial_cost = quadratic_cost(&init).unwrap();

    let summary = run(&config, 17, &quadratic_cost, &init).unwrap();
    assert!(summary.accepted >= 40, "only {} accepted", summary.accepted);

    let (best_designs, best_costs) =
        top_k(&summary.results.designs, &summary.results.costs, 1).unwrap();
    assert_eq!(best_designs.len(), 1);
    assert!(
        best_costs[0] < initial_cost / 2.0,
        "best cost {} did not improve on the initial {}",
        best_costs[0],
        initial_cost
    );

    // Low-cost candidates should dominate over ones worse than the start.
    let below = summary
        .results
        .costs
        .iter()
        .filter(|&&c| c < initial_cost)
        .count();
    let above = summary.results.len() - below;
    assert!(
        below > above,
        "pool is not biased toward low cost ({below} below vs {above} above)"
    );

    assert!((summary.cost_stats.min - best_costs[0]).abs() < 1e-12);
}
