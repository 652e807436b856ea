use gde_core::DesignVector;
use gde_mcmc::{random_k, top_k};

fn pool() -> (Vec<DesignVector>, Vec<f64>) {
    let designs: Vec<DesignVector> = (0..30)
        .map(|i| DesignVector::new(vec![i as f64 / 30.0, 0.5]).unwrap())
        .collect();
    let costs: Vec<f64> = (0..30).map(|i| ((i * 7) % 30) as f64 / 10.0).collect();
    (designs, costs)
}

#[test]
fn top_k_returns_ascending_aligned_pairs() {
    let (designs, costs) = pool();
    let (best_designs, best_costs) = top_k(&designs, &costs, 5).unwrap();
    assert_eq!(best_designs.len(), 5);
    assert_eq!(best_costs.len(), 5);
    for pair in best_costs.windows(2) {
        assert!(pair[0] <= pair[1]);
    }
    for (design, cost) in best_designs.iter().zip(best_costs.iter()) {
        let original = designs.iter().position(|d| d == design).unwrap();
        assert_eq!(costs[original], *cost);
    }
}

#[test]
fn top_k_keeps_original_order_on_ties() {
    let designs = vec![
        DesignVector::new(vec![0.1]).unwrap(),
        DesignVector::new(vec![0.2]).unwrap(),
        DesignVector::new(vec![0.3]).unwrap(),
    ];
    let costs = vec![0.5, 0.5, 0.1];
    let (best_designs, best_costs) = top_k(&designs, &costs, 3).unwrap();
    assert_eq!(best_costs, vec![0.1, 0.5, 0.5]);
    assert_eq!(best_designs[1], designs[0]);
    assert_eq!(best_designs[2], designs[1]);
}

#[test]
fn top_k_rejects_oversized_requests() {
    let (designs, costs) = pool();
    let err = top_k(&designs, &costs, 31).unwrap_err();
    assert_eq!(err.info().code, "pool-too-small");
    assert_eq!(err.info().context.get("requested").unwrap(), "31");
}

#[test]
fn misaligned_pool_is_rejected() {
    let (designs, mut costs) = pool();
    costs.pop();
    let err = top_k(&designs, &costs, 1).unwrap_err();
    assert_eq!(err.info().code, "pool-misaligned");
}

#[test]
fn random_k_is_reproducible_per_seed() {
    let (designs, costs) = pool();
    let draw_a = random_k(&designs, &costs, 10, Some(42)).unwrap();
    let draw_b = random_k(&designs, &costs, 10, Some(42)).unwrap();
    assert_eq!(draw_a, draw_b);

    let draw_c = random_k(&designs, &costs, 10, Some(43)).unwrap();
    assert_ne!(draw_a, draw_c);
}

#[test]
fn random_k_draws_distinct_aligned_pairs() {
    let (designs, costs) = pool();
    let (picked_designs, picked_costs) = random_k(&designs, &costs, 30, Some(5)).unwrap();
    assert_eq!(picked_designs.len(), 30);
    // Without replacement over the full pool, every design appears once.
    for design in &designs {
        assert_eq!(picked_designs.iter().filter(|d| *d == design).count(), 1);
    }
    for (design, cost) in picked_designs.iter().zip(picked_costs.iter()) {
        let original = designs.iter().position(|d| d == design).unwrap();
        assert_eq!(costs[original], *cost);
    }
}

#[test]
fn random_k_rejects_oversized_requests() {
    let (designs, costs) = pool();
    let err = random_k(&designs, &costs, 31, Some(1)).unwrap_err();
    assert_eq!(err.info().code, "pool-too-small");
}
