use gde_core::errors::ErrorInfo;
use gde_core::{DesignVector, GdeError};
use gde_mcmc::{run, RunConfig, SamplerState};

fn fragile_cost(design: &DesignVector) -> Result<f64, GdeError> {
    if design.components().iter().any(|&x| x > 0.9) {
        return Err(GdeError::Cost(ErrorInfo::new(
            "geometry-invalid",
            "component exceeds printable envelope",
        )));
    }
    Ok(design.components().iter().map(|x| x * x).sum())
}

fn nan_pocket_cost(design: &DesignVector) -> Result<f64, GdeError> {
    if design[0] < 0.2 {
        return Ok(f64::NAN);
    }
    Ok(design.components().iter().map(|x| x * x).sum())
}

#[test]
fn evaluation_failures_are_skipped_not_fatal() {
    let mut config = RunConfig::default();
    config.iterations = 300;
    config.temperature = 1.0;
    config.proposal_std = 0.3;
    let init = DesignVector::new(vec![0.5]).unwrap();

    let summary = run(&config, 23, &fragile_cost, &init).unwrap();

    // The run completes, failures are observable, and nothing above the
    // failure envelope ever enters the pool.
    assert!(summary.skipped > 0);
    assert!(summary.skip_reasons.contains_key("cost-evaluation"));
    assert_eq!(
        summary.skip_reasons.values().sum::<usize>(),
        summary.skipped
    );
    for design in &summary.results.designs {
        for &component in design.components() {
            assert!(component <= 0.9);
        }
    }
    assert_eq!(summary.results.designs.len(), summary.results.costs.len());
}

#[test]
fn non_finite_costs_are_skipped() {
    let mut config = RunConfig::default();
    config.iterations = 300;
    config.temperature = 1.0;
    config.proposal_std = 0.3;
    let init = DesignVector::new(vec![0.5]).unwrap();

    let summary = run(&config, 29, &nan_pocket_cost, &init).unwrap();
    assert!(summary.skip_reasons.contains_key("non-finite-cost"));
    for &cost in &summary.results.costs {
        assert!(cost.is_finite());
    }
}

#[test]
fn initialization_failure_propagates() {
    let init = DesignVector::new(vec![0.95]).unwrap();
    let err = SamplerState::initialize(&fragile_cost, &init, 0.3).unwrap_err();
    assert_eq!(err.info().code, "geometry-invalid");

    let config = RunConfig::default();
    assert!(run(&config, 31, &fragile_cost, &init).is_err());
}

#[test]
fn non_finite_initial_cost_propagates() {
    let init = DesignVector::new(vec![0.1]).unwrap();
    let err = SamplerState::initialize(&nan_pocket_cost, &init, 0.3).unwrap_err();
    assert_eq!(err.info().code, "init-cost-non-finite");
}
