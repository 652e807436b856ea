#![deny(missing_docs)]

//! Boltzmann-weighted design-space sampler for generative exploration.
//!
//! The kernel implements a Metropolis-style acceptance rule over an external
//! cost function, with one deliberate departure from canonical MCMC: rejected
//! proposals are never re-appended to the result history, so the output is a
//! pool of distinct, novel candidates biased toward low cost rather than an
//! estimate of the posterior.

/// YAML configuration schema and defaults.
pub mod config;
/// Deterministic seed derivation helpers.
pub mod determinism;
/// Core sampling kernel and the public `run` entry point.
pub mod kernel;
/// Boltzmann likelihood and the acceptance ratio with its degenerate fallback.
pub mod likelihood;
/// Run manifest serialization helpers.
pub mod manifest;
/// Per-iteration outcome counters and cost statistics.
pub mod metrics;
/// Gaussian proposal kernel.
pub mod moves;
/// Top-k and random-k selection over generated pools.
pub mod select;

pub use config::{OutputConfig, RunConfig, SeedPolicy};
pub use kernel::{
    propose_and_test, run, ResultSet, RunSummary, SamplerState, SkipReason, StepOutcome,
};
pub use likelihood::{acceptance_ratio, boltzmann_likelihood};
pub use manifest::RunManifest;
pub use metrics::{CostStats, RunRecorder};
pub use moves::ProposalKernel;
pub use select::{random_k, top_k};
