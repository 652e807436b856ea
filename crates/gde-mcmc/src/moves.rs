use gde_core::errors::{ErrorInfo, GdeError};
use gde_core::{DesignVector, RngHandle};
use rand_distr::{Distribution, Normal};

/// Gaussian proposal kernel perturbing every component independently.
#[derive(Debug, Clone)]
pub struct ProposalKernel {
    normal: Normal<f64>,
}

impl ProposalKernel {
    /// Builds a kernel with the given per-component standard deviation.
    pub fn new(proposal_std: f64) -> Result<Self, GdeError> {
        let normal = Normal::new(0.0, proposal_std).map_err(|err| {
            GdeError::Sampler(
                ErrorInfo::new("proposal-kernel", err.to_string())
                    .with_context("proposal_std", proposal_std.to_string()),
            )
        })?;
        Ok(Self { normal })
    }

    /// Draws a candidate from the current design.
    ///
    /// Each component receives an independent `Normal(0, proposal_std)`
    /// perturbation and the result is clipped into `[0, 1]` before any cost
    /// evaluation sees it.
    pub fn perturb(&self, current: &DesignVector, rng: &mut RngHandle) -> DesignVector {
        let perturbed: Vec<f64> = current
            .components()
            .iter()
            .map(|&component| component + self.normal.sample(rng))
            .collect();
        DesignVector::clamped(perturbed)
    }
}
