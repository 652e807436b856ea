/// Boltzmann-weighted likelihood of a cost at the given temperature.
///
/// Always positive for finite cost; may underflow to `0.0` for very high
/// cost or very low temperature.
pub fn boltzmann_likelihood(cost: f64, temperature: f64) -> f64 {
    (-cost / temperature).exp()
}

/// Metropolis acceptance ratio `min(1, p/c)` for a proposal likelihood `p`
/// against the current likelihood `c`.
///
/// When the current likelihood is zero (cost overwhelmed the temperature and
/// the exponential underflowed) or otherwise non-finite, the ratio is defined
/// as `1.0`: the current state carries no weight, so any evaluable proposal
/// displaces it. The numeric fallback keeps the divide-by-zero case out of
/// the accept/reject draw.
pub fn acceptance_ratio(likelihood_proposal: f64, likelihood_current: f64) -> f64 {
    if likelihood_current == 0.0 || !likelihood_current.is_finite() {
        return 1.0;
    }
    (likelihood_proposal / likelihood_current).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn likelihood_decreases_with_cost() {
        let low = boltzmann_likelihood(0.1, 0.3);
        let high = boltzmann_likelihood(2.0, 0.3);
        assert!(low > high);
    }

    #[test]
    fn ratio_caps_at_one() {
        assert_eq!(acceptance_ratio(0.9, 0.3), 1.0);
        let ratio = acceptance_ratio(0.3, 0.9);
        assert!((ratio - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn zero_current_likelihood_always_accepts() {
        assert_eq!(acceptance_ratio(1e-300, 0.0), 1.0);
        assert_eq!(acceptance_ratio(0.0, 0.0), 1.0);
    }

    #[test]
    fn non_finite_current_likelihood_always_accepts() {
        assert_eq!(acceptance_ratio(0.5, f64::NAN), 1.0);
        assert_eq!(acceptance_ratio(0.5, f64::INFINITY), 1.0);
    }
}
