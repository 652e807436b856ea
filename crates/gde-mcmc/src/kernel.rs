use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use gde_core::errors::ErrorInfo;
use gde_core::{CostFunction, DesignVector, GdeError, RngHandle};
use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::config::RunConfig;
use crate::determinism;
use crate::likelihood;
use crate::manifest::RunManifest;
use crate::metrics::{CostStats, RunRecorder};
use crate::moves::ProposalKernel;

/// Reason an iteration was skipped before reaching the acceptance test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The cost function failed for the clipped proposal.
    CostEvaluation(String),
    /// The cost function returned a non-finite value.
    NonFiniteCost(String),
}

impl SkipReason {
    /// Stable label used when tallying skip reasons.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::CostEvaluation(_) => "cost-evaluation",
            SkipReason::NonFiniteCost(_) => "non-finite-cost",
        }
    }
}

/// Outcome of a single proposal iteration.
///
/// Rejections leave the chain state untouched and, unlike canonical
/// Metropolis-Hastings, the previous sample is never re-appended to the
/// history. Only distinct, novel candidates enter the result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum StepOutcome {
    /// The proposal replaced the current state.
    Accepted {
        /// Clipped proposal that was accepted.
        design: DesignVector,
        /// Cost of the accepted proposal.
        cost: f64,
    },
    /// The proposal was evaluated but lost the acceptance draw.
    Rejected,
    /// The iteration contributed nothing; the reason is observable.
    Skipped {
        /// Why the iteration was skipped.
        reason: SkipReason,
    },
}

/// Current design and its Boltzmann likelihood, threaded explicitly through
/// each step so independent chains can hold private copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerState {
    /// Current design vector.
    pub design: DesignVector,
    /// Likelihood of the current design at the run temperature.
    pub likelihood: f64,
}

impl SamplerState {
    /// Evaluates the seed design and builds the initial state.
    ///
    /// Failures propagate: the run cannot proceed without a valid starting
    /// point.
    pub fn initialize(
        cost_function: &dyn CostFunction,
        init: &DesignVector,
        temperature: f64,
    ) -> Result<Self, GdeError> {
        let cost = cost_function.evaluate(init)?;
        if !cost.is_finite() {
            return Err(GdeError::Sampler(
                ErrorInfo::new("init-cost-non-finite", "cost of the initial design is not finite")
                    .with_context("cost", cost.to_string()),
            ));
        }
        Ok(Self {
            design: init.clone(),
            likelihood: likelihood::boltzmann_likelihood(cost, temperature),
        })
    }
}

/// Index-aligned designs and costs, in acceptance order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Accepted designs.
    pub designs: Vec<DesignVector>,
    /// Costs aligned with `designs`.
    pub costs: Vec<f64>,
}

impl ResultSet {
    /// Creates an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an accepted pair, preserving index alignment.
    pub fn push(&mut self, design: DesignVector, cost: f64) {
        self.designs.push(design);
        self.costs.push(cost);
    }

    /// Number of accepted pairs.
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.designs.len(), self.costs.len());
        self.designs.len()
    }

    /// Whether the run accepted anything.
    pub fn is_empty(&self) -> bool {
        self.designs.is_empty()
    }
}

/// Summary returned to callers after a run completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Accepted designs and their costs, all chains concatenated in chain
    /// order.
    pub results: ResultSet,
    /// Number of accepted proposals.
    pub accepted: usize,
    /// Number of rejected proposals.
    pub rejected: usize,
    /// Number of skipped iterations.
    pub skipped: usize,
    /// Skip reason tally keyed by stable labels.
    pub skip_reasons: BTreeMap<String, usize>,
    /// Acceptance rate over proposals that reached the acceptance test.
    pub acceptance_rate: f64,
    /// Statistics over the accepted costs.
    pub cost_stats: CostStats,
    /// Number of distinct accepted designs by canonical hash.
    pub unique_designs: usize,
    /// Canonical hash of the first chain's terminal design.
    pub final_design_hash: String,
    /// Results CSV written during the run, if output was configured.
    pub results_path: Option<PathBuf>,
    /// Manifest path, if emitted.
    pub manifest_path: Option<PathBuf>,
}

/// Performs one proposal iteration against the supplied state.
///
/// The candidate is drawn from the Gaussian kernel, clipped into `[0, 1]`
/// before evaluation (the cost function never observes out-of-domain
/// inputs), and passed through the Boltzmann acceptance test. The returned
/// state is the proposal on acceptance and the input state otherwise.
pub fn propose_and_test(
    state: SamplerState,
    cost_function: &dyn CostFunction,
    temperature: f64,
    kernel: &ProposalKernel,
    rng: &mut RngHandle,
) -> (SamplerState, StepOutcome) {
    let proposal = kernel.perturb(&state.design, rng);

    let cost_proposal = match cost_function.evaluate(&proposal) {
        Ok(cost) => cost,
        Err(err) => {
            let outcome = StepOutcome::Skipped {
                reason: SkipReason::CostEvaluation(err.to_string()),
            };
            return (state, outcome);
        }
    };
    if !cost_proposal.is_finite() {
        let outcome = StepOutcome::Skipped {
            reason: SkipReason::NonFiniteCost(cost_proposal.to_string()),
        };
        return (state, outcome);
    }

    let likelihood_proposal = likelihood::boltzmann_likelihood(cost_proposal, temperature);
    let alpha = likelihood::acceptance_ratio(likelihood_proposal, state.likelihood);

    let draw = rng.next_u64() as f64 / u64::MAX as f64;
    if draw < alpha {
        let next = SamplerState {
            design: proposal.clone(),
            likelihood: likelihood_proposal,
        };
        let outcome = StepOutcome::Accepted {
            design: proposal,
            cost: cost_proposal,
        };
        (next, outcome)
    } else {
        (state, StepOutcome::Rejected)
    }
}

/// Runs the sampler from scratch with the provided configuration and seed.
///
/// Each chain starts from `init` with a private state and substream-derived
/// per-step RNGs. The result set is rebuilt from scratch on every call.
pub fn run(
    config: &RunConfig,
    seed: u64,
    cost_function: &dyn CostFunction,
    init: &DesignVector,
) -> Result<RunSummary, GdeError> {
    config.validate()?;
    let kernel = ProposalKernel::new(config.proposal_std)?;

    let mut results = ResultSet::new();
    let mut recorder = RunRecorder::new();
    let mut final_design_hash = String::new();

    for chain_index in 0..config.chains {
        let mut state = SamplerState::initialize(cost_function, init, config.temperature)?;
        for iteration in 0..config.iterations {
            let mut rng =
                RngHandle::from_seed(determinism::step_seed(seed, chain_index, iteration));
            let (next, outcome) =
                propose_and_test(state, cost_function, config.temperature, &kernel, &mut rng);
            state = next;
            match outcome {
                StepOutcome::Accepted { design, cost } => {
                    recorder.record_accept(&design, cost);
                    results.push(design, cost);
                }
                StepOutcome::Rejected => recorder.record_reject(),
                StepOutcome::Skipped { reason } => recorder.record_skip(reason.label()),
            }
        }
        if chain_index == 0 {
            final_design_hash = state.design.canonical_hash();
        }
    }

    let (results_path, manifest_path) = write_outputs(config, seed, &results, &final_design_hash)?;

    Ok(RunSummary {
        accepted: recorder.accepted(),
        rejected: recorder.rejected(),
        skipped: recorder.skipped(),
        skip_reasons: recorder.skip_reasons().clone(),
        acceptance_rate: recorder.acceptance_rate(),
        cost_stats: recorder.cost_stats(),
        unique_designs: recorder.unique_designs(),
        final_design_hash,
        results_path,
        manifest_path,
        results,
    })
}

fn write_outputs(
    config: &RunConfig,
    seed: u64,
    results: &ResultSet,
    final_design_hash: &str,
) -> Result<(Option<PathBuf>, Option<PathBuf>), GdeError> {
    let run_dir = match &config.output.run_directory {
        Some(dir) => dir.clone(),
        None => return Ok((None, None)),
    };
    fs::create_dir_all(&run_dir).map_err(|err| {
        GdeError::Store(
            ErrorInfo::new("run-dir-create", err.to_string())
                .with_context("path", run_dir.display().to_string()),
        )
    })?;

    let results_rel = config.output.results_file.clone().unwrap_or_else(|| {
        PathBuf::from(gde_store::default_results_filename(
            config.temperature,
            config.proposal_std,
        ))
    });
    let results_path = if results.is_empty() {
        // An empty run writes no results artifact; the manifest still records
        // the run parameters.
        None
    } else {
        let path = run_dir.join(&results_rel);
        gde_store::save_results(&results.designs, &results.costs, &path)?;
        Some(path)
    };

    let manifest = RunManifest {
        config: config.clone(),
        master_seed: seed,
        seed_label: config.seed_policy.label.clone(),
        started_at: chrono::Utc::now().to_rfc3339(),
        final_design_hash: final_design_hash.to_string(),
        results_file: results_path.as_ref().map(|_| results_rel),
    };
    let manifest_path = run_dir.join(&config.output.manifest_file);
    manifest.write(&manifest_path)?;

    Ok((results_path, Some(manifest_path)))
}
