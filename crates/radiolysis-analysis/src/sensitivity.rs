// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Sensitivity
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Response of mean channel counts to amplifying one cross section.

use radiolysis_core::batch::{BatchRunner, StandardBatch};
use radiolysis_core::tables::ProcessTable;
use radiolysis_types::config::SimulationConfig;
use radiolysis_types::constants::N_PROCESSES;
use radiolysis_types::error::{RadiolysisError, RadiolysisResult};
use serde::Serialize;

/// Channels amplified in the reference sensitivity study:
/// CH₄⁺, CH₃⁺, CH₃* (EIE), ν₄, J 0→3, J 0→4.
pub const STUDIED_PROCESSES: [usize; 6] = [0, 1, 7, 14, 15, 16];

/// Relative deviation bands reported for each channel.
pub const BANDS: [f64; 3] = [0.02, 0.05, 0.10];

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChannelSensitivity {
    pub baseline_mean: f64,
    pub manipulated_mean: f64,
    /// `(manipulated - baseline) / baseline`; `None` when the baseline mean is zero.
    pub relative_change: Option<f64>,
    /// Smallest entry of [`BANDS`] containing the change, `None` if outside all.
    pub band: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensitivityReport {
    pub manipulated_process: usize,
    pub factor: f64,
    pub channels: Vec<ChannelSensitivity>,
}

/// Compare per-channel means of two standard batches.
pub fn compare_means(baseline: &[f64; N_PROCESSES], manipulated: &[f64; N_PROCESSES]) -> Vec<ChannelSensitivity> {
    baseline
        .iter()
        .zip(manipulated.iter())
        .map(|(&b, &m)| {
            let relative_change = if b > 0.0 { Some((m - b) / b) } else { None };
            let band = relative_change.and_then(|r| BANDS.iter().copied().find(|&w| r.abs() <= w));
            ChannelSensitivity {
                baseline_mean: b,
                manipulated_mean: m,
                relative_change,
                band,
            }
        })
        .collect()
}

pub fn compare_batches(
    baseline: &StandardBatch,
    manipulated: &StandardBatch,
    process: usize,
    factor: f64,
) -> SensitivityReport {
    SensitivityReport {
        manipulated_process: process,
        factor,
        channels: compare_means(&baseline.mean_counts(), &manipulated.mean_counts()),
    }
}

/// Run `config` unmodified and again with its manipulated channel amplified.
pub fn run_sensitivity(table: &ProcessTable, config: &SimulationConfig) -> RadiolysisResult<SensitivityReport> {
    let process = config.manipulated_process.ok_or_else(|| {
        RadiolysisError::ConfigError("sensitivity run needs manipulated_process".to_string())
    })?;
    let mut base_config = config.clone();
    base_config.manipulated_process = None;

    let baseline = BatchRunner::new(table, base_config)?.run_standard()?;
    let manipulated = BatchRunner::new(table, config.clone())?.run_standard()?;
    Ok(compare_batches(&baseline, &manipulated, process, config.sensitivity_factor))
}

/// Sensitivity of every channel in [`STUDIED_PROCESSES`], each amplified in
/// turn on top of `config`. Reports follow the order of the studied list.
pub fn run_sensitivity_study(
    table: &ProcessTable,
    config: &SimulationConfig,
) -> RadiolysisResult<Vec<SensitivityReport>> {
    STUDIED_PROCESSES
        .iter()
        .map(|&process| run_sensitivity(table, &config.clone().with_manipulated(process)))
        .collect()
}
