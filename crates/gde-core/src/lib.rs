#![deny(missing_docs)]
#![doc = "Core types for the GDE toolkit: errors, deterministic RNG, design vectors, and the cost function contract."]

pub mod design;
pub mod errors;
pub mod rng;

pub use design::DesignVector;
pub use errors::{ErrorInfo, GdeError};
pub use rng::{derive_substream_seed, RngHandle};

/// Contract for the externally supplied cost evaluator.
///
/// Maps a design vector to a scalar cost where lower is better. Evaluation
/// may fail for invalid geometry; the sampler treats such failures as
/// per-iteration skips rather than run aborts.
pub trait CostFunction: Send + Sync {
    /// Evaluates the cost of a single design.
    fn evaluate(&self, design: &DesignVector) -> Result<f64, GdeError>;
}

impl<F> CostFunction for F
where
    F: Fn(&DesignVector) -> Result<f64, GdeError> + Send + Sync,
{
    fn evaluate(&self, design: &DesignVector) -> Result<f64, GdeError> {
        self(design)
    }
}
