use std::fs;
use std::path::{Path, PathBuf};

use gde_core::errors::{ErrorInfo, GdeError};
use serde::{Deserialize, Serialize};

/// YAML-configurable parameters governing a sampling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    /// Number of proposal iterations per chain.
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Boltzmann temperature controlling acceptance leniency. Higher values
    /// approach a uniform random walk, lower values greedy descent.
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    /// Standard deviation of the per-component Gaussian proposal kernel.
    #[serde(default = "default_proposal_std")]
    pub proposal_std: f64,
    /// Number of independent chains, each with private state and a private
    /// substream seed.
    #[serde(default = "default_chains")]
    pub chains: usize,
    /// Master seed and substream policy.
    #[serde(default)]
    pub seed_policy: SeedPolicy,
    /// Output directory configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

fn default_iterations() -> usize {
    100
}

fn default_temperature() -> f64 {
    0.3
}

fn default_proposal_std() -> f64 {
    0.2
}

fn default_chains() -> usize {
    1
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            temperature: default_temperature(),
            proposal_std: default_proposal_std(),
            chains: default_chains(),
            seed_policy: SeedPolicy::default(),
            output: OutputConfig::default(),
        }
    }
}

impl RunConfig {
    /// Validates the numeric parameters before a run starts.
    pub fn validate(&self) -> Result<(), GdeError> {
        if !self.temperature.is_finite() || self.temperature <= 0.0 {
            return Err(GdeError::Sampler(
                ErrorInfo::new("config-temperature", "temperature must be a positive finite value")
                    .with_context("temperature", self.temperature.to_string()),
            ));
        }
        if !self.proposal_std.is_finite() || self.proposal_std <= 0.0 {
            return Err(GdeError::Sampler(
                ErrorInfo::new(
                    "config-proposal-std",
                    "proposal_std must be a positive finite value",
                )
                .with_context("proposal_std", self.proposal_std.to_string()),
            ));
        }
        if self.chains == 0 {
            return Err(GdeError::Sampler(ErrorInfo::new(
                "config-chains",
                "at least one chain is required",
            )));
        }
        Ok(())
    }

    /// Loads and validates a configuration from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, GdeError> {
        let contents = fs::read_to_string(path).map_err(|err| {
            GdeError::Serde(
                ErrorInfo::new("config-read", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let config: RunConfig = serde_yaml::from_str(&contents).map_err(|err| {
            GdeError::Serde(
                ErrorInfo::new("config-parse", err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        config.validate()?;
        Ok(config)
    }
}

/// Deterministic seeding configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedPolicy {
    /// Master seed used for the run.
    #[serde(default = "default_master_seed")]
    pub master_seed: u64,
    /// Optional label used when deriving substream seeds (documented in manifests).
    #[serde(default)]
    pub label: Option<String>,
}

fn default_master_seed() -> u64 {
    0x05EE_D5EE_DD15_5EED_u64
}

impl Default for SeedPolicy {
    fn default() -> Self {
        Self {
            master_seed: default_master_seed(),
            label: None,
        }
    }
}

/// Output directory layout configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for run artefacts. Created if it does not exist. When
    /// absent, no files are written.
    #[serde(default)]
    pub run_directory: Option<PathBuf>,
    /// Results filename relative to `run_directory`. When absent, the
    /// `T{temperature}-STD{proposal_std}.csv` convention is used.
    #[serde(default)]
    pub results_file: Option<PathBuf>,
    /// Manifest filename relative to `run_directory`.
    #[serde(default = "default_manifest_filename")]
    pub manifest_file: PathBuf,
}

fn default_manifest_filename() -> PathBuf {
    PathBuf::from("manifest.json")
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            run_directory: None,
            results_file: None,
            manifest_file: default_manifest_filename(),
        }
    }
}
