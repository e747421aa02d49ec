// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Config
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::{
    DEFAULT_CHUNK_SIZE, DEFAULT_CUTOFF_EV, DEFAULT_GENERATION_TIERS,
    DEFAULT_SENSITIVITY_FACTOR, DEFAULT_STACK_CAPACITY, N_PROCESSES,
};
use crate::error::{RadiolysisError, RadiolysisResult};
use serde::{Deserialize, Serialize};

/// Batch simulation configuration.
///
/// Only `incident_energy_ev` and `trajectories` are required in JSON; every
/// other field falls back to the documented default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Kinetic energy of each primary electron [eV].
    pub incident_energy_ev: f64,
    /// Tracking cutoff [eV]. Electrons below it deposit their energy.
    #[serde(default = "default_cutoff")]
    pub cutoff_energy_ev: f64,
    /// Number of independent primary electrons.
    pub trajectories: usize,
    /// Channel whose cross section is amplified for sensitivity studies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manipulated_process: Option<usize>,
    /// Multiplier applied to the manipulated channel (default 1.10).
    #[serde(default = "default_sensitivity_factor")]
    pub sensitivity_factor: f64,
    /// Trajectories per chunk.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
    /// Maximum number of pending electrons in one cascade.
    #[serde(default = "default_stack_capacity")]
    pub stack_capacity: usize,
    /// Generation rows preallocated by the generation-tracking tally.
    #[serde(default = "default_generation_tiers")]
    pub generation_tiers: usize,
    /// Batch seed. Drawn from the thread RNG when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Run the trajectories of a chunk on the rayon pool.
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_cutoff() -> f64 {
    DEFAULT_CUTOFF_EV
}
fn default_sensitivity_factor() -> f64 {
    DEFAULT_SENSITIVITY_FACTOR
}
fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}
fn default_stack_capacity() -> usize {
    DEFAULT_STACK_CAPACITY
}
fn default_generation_tiers() -> usize {
    DEFAULT_GENERATION_TIERS
}
fn default_parallel() -> bool {
    true
}

impl SimulationConfig {
    /// Configuration with every optional field at its default.
    pub fn new(incident_energy_ev: f64, trajectories: usize) -> Self {
        SimulationConfig {
            incident_energy_ev,
            cutoff_energy_ev: default_cutoff(),
            trajectories,
            manipulated_process: None,
            sensitivity_factor: default_sensitivity_factor(),
            chunk_size: default_chunk_size(),
            stack_capacity: default_stack_capacity(),
            generation_tiers: default_generation_tiers(),
            seed: None,
            parallel: default_parallel(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_manipulated(mut self, process: usize) -> Self {
        self.manipulated_process = Some(process);
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Load from a JSON file and validate.
    pub fn from_file(path: &str) -> RadiolysisResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the cascade cannot run. Called before any work starts.
    pub fn validate(&self) -> RadiolysisResult<()> {
        if !self.incident_energy_ev.is_finite() || self.incident_energy_ev <= 0.0 {
            return Err(RadiolysisError::ConfigError(format!(
                "incident_energy_ev must be finite and > 0, got {}",
                self.incident_energy_ev
            )));
        }
        if !self.cutoff_energy_ev.is_finite() || self.cutoff_energy_ev <= 0.0 {
            return Err(RadiolysisError::ConfigError(format!(
                "cutoff_energy_ev must be finite and > 0, got {}",
                self.cutoff_energy_ev
            )));
        }
        if self.cutoff_energy_ev >= self.incident_energy_ev {
            return Err(RadiolysisError::ConfigError(format!(
                "cutoff_energy_ev ({}) must be below incident_energy_ev ({})",
                self.cutoff_energy_ev, self.incident_energy_ev
            )));
        }
        if self.trajectories == 0 {
            return Err(RadiolysisError::ConfigError(
                "trajectories must be >= 1".to_string(),
            ));
        }
        if self.chunk_size == 0 {
            return Err(RadiolysisError::ConfigError(
                "chunk_size must be >= 1".to_string(),
            ));
        }
        if self.stack_capacity == 0 {
            return Err(RadiolysisError::ConfigError(
                "stack_capacity must be >= 1".to_string(),
            ));
        }
        if self.generation_tiers == 0 {
            return Err(RadiolysisError::ConfigError(
                "generation_tiers must be >= 1".to_string(),
            ));
        }
        if let Some(process) = self.manipulated_process {
            if process >= N_PROCESSES {
                return Err(RadiolysisError::InvalidProcess(process));
            }
        }
        if !self.sensitivity_factor.is_finite() || self.sensitivity_factor <= 0.0 {
            return Err(RadiolysisError::ConfigError(format!(
                "sensitivity_factor must be finite and > 0, got {}",
                self.sensitivity_factor
            )));
        }
        Ok(())
    }
}
