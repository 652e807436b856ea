use std::collections::BTreeMap;

use gde_core::DesignVector;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Aggregate statistics over the accepted costs of a run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CostStats {
    /// Mean accepted cost.
    pub mean: f64,
    /// Variance of the accepted costs.
    pub variance: f64,
    /// Lowest accepted cost.
    pub min: f64,
}

impl CostStats {
    /// Returns a zeroed descriptor for runs without accepted samples.
    pub fn empty() -> Self {
        Self {
            mean: 0.0,
            variance: 0.0,
            min: 0.0,
        }
    }
}

/// Collects per-iteration outcomes and computes aggregate run statistics.
#[derive(Debug, Default)]
pub struct RunRecorder {
    proposed: usize,
    accepted: usize,
    rejected: usize,
    skipped: usize,
    skip_reasons: BTreeMap<String, usize>,
    unique_hashes: IndexSet<String>,
    accepted_costs: Vec<f64>,
}

impl RunRecorder {
    /// Creates a new recorder instance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an accepted proposal.
    pub fn record_accept(&mut self, design: &DesignVector, cost: f64) {
        self.proposed += 1;
        self.accepted += 1;
        self.unique_hashes.insert(design.canonical_hash());
        self.accepted_costs.push(cost);
    }

    /// Records a rejected proposal.
    pub fn record_reject(&mut self) {
        self.proposed += 1;
        self.rejected += 1;
    }

    /// Records an iteration that was skipped before the acceptance test.
    pub fn record_skip(&mut self, reason: &str) {
        self.proposed += 1;
        self.skipped += 1;
        *self.skip_reasons.entry(reason.to_string()).or_insert(0) += 1;
    }

    /// Number of accepted proposals.
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of rejected proposals.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Number of skipped iterations.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Tally of skip reasons keyed by their stable labels.
    pub fn skip_reasons(&self) -> &BTreeMap<String, usize> {
        &self.skip_reasons
    }

    /// Number of distinct accepted designs, by canonical hash.
    pub fn unique_designs(&self) -> usize {
        self.unique_hashes.len()
    }

    /// Acceptance rate over the proposals that reached the acceptance test.
    pub fn acceptance_rate(&self) -> f64 {
        let tested = self.accepted + self.rejected;
        if tested == 0 {
            0.0
        } else {
            self.accepted as f64 / tested as f64
        }
    }

    /// Computes cost statistics over the accepted samples.
    pub fn cost_stats(&self) -> CostStats {
        if self.accepted_costs.is_empty() {
            return CostStats::empty();
        }
        let count = self.accepted_costs.len() as f64;
        let mean = self.accepted_costs.iter().sum::<f64>() / count;
        let mean_sq = self.accepted_costs.iter().map(|&c| c * c).sum::<f64>() / count;
        let variance = (mean_sq - mean * mean).max(0.0);
        let min = self
            .accepted_costs
            .iter()
            .copied()
            .fold(f64::INFINITY, f64::min);
        CostStats {
            mean,
            variance,
            min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recorder_tallies_outcomes() {
        let mut recorder = RunRecorder::new();
        let design = DesignVector::new(vec![0.5]).unwrap();
        recorder.record_accept(&design, 0.25);
        recorder.record_accept(&design, 0.75);
        recorder.record_reject();
        recorder.record_skip("cost-evaluation");
        recorder.record_skip("cost-evaluation");

        assert_eq!(recorder.accepted(), 2);
        assert_eq!(recorder.rejected(), 1);
        assert_eq!(recorder.skipped(), 2);
        assert_eq!(recorder.skip_reasons().get("cost-evaluation"), Some(&2));
        assert_eq!(recorder.unique_designs(), 1);
        assert!((recorder.acceptance_rate() - 2.0 / 3.0).abs() < 1e-12);

        let stats = recorder.cost_stats();
        assert!((stats.mean - 0.5).abs() < 1e-12);
        assert!((stats.min - 0.25).abs() < 1e-12);
    }

    #[test]
    fn empty_recorder_reports_zeroes() {
        let recorder = RunRecorder::new();
        assert_eq!(recorder.acceptance_rate(), 0.0);
        assert_eq!(recorder.cost_stats(), CostStats::empty());
    }
}
