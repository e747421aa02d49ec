// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Probability Spectrum
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Channel probabilities over a logarithmic energy sweep.

use ndarray::Array2;
use radiolysis_core::cross_section::CrossSectionEvaluator;
use radiolysis_types::constants::{ATTACHMENT_INDEX, N_PROCESSES};
use std::ops::Range;

/// Ionization, radical formation and attachment.
pub const REACTIVE: Range<usize> = 0..ATTACHMENT_INDEX + 1;
/// Vibrational and rotational excitation.
pub const MOLECULAR_EXCITATION: Range<usize> = 11..17;
/// Line and band emission.
pub const PHOTON_PRODUCING: Range<usize> = 17..N_PROCESSES;

/// `n` points from `10^start_exp` to `10^end_exp`, both ends included.
pub fn logspace(start_exp: f64, end_exp: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![10f64.powf(start_exp)],
        _ => {
            let step = (end_exp - start_exp) / (n - 1) as f64;
            (0..n)
                .map(|i| 10f64.powf(start_exp + step * i as f64))
                .collect()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbabilitySpectrum {
    pub energies_ev: Vec<f64>,
    /// `[energies × 28]`; rows where no channel is open are zero.
    pub probabilities: Array2<f64>,
}

impl ProbabilitySpectrum {
    pub fn sweep(evaluator: &CrossSectionEvaluator<'_>, energies_ev: Vec<f64>) -> Self {
        let mut probabilities = Array2::zeros((energies_ev.len(), N_PROCESSES));
        for (k, &e) in energies_ev.iter().enumerate() {
            if let Some(p) = evaluator.probabilities(e) {
                for (j, &v) in p.iter().enumerate() {
                    probabilities[[k, j]] = v;
                }
            }
        }
        ProbabilitySpectrum {
            energies_ev,
            probabilities,
        }
    }

    /// 1 eV to 100 keV, 400 points.
    pub fn standard(evaluator: &CrossSectionEvaluator<'_>) -> Self {
        Self::sweep(evaluator, logspace(0.0, 5.0, 400))
    }

    /// Summed probability of `channels` at every energy.
    pub fn group_total(&self, channels: Range<usize>) -> Vec<f64> {
        self.probabilities
            .rows()
            .into_iter()
            .map(|row| row.iter().skip(channels.start).take(channels.len()).sum::<f64>())
            .collect()
    }

    pub fn reactive(&self) -> Vec<f64> {
        self.group_total(REACTIVE)
    }

    pub fn molecular_excitation(&self) -> Vec<f64> {
        self.group_total(MOLECULAR_EXCITATION)
    }

    pub fn photon_producing(&self) -> Vec<f64> {
        self.group_total(PHOTON_PRODUCING)
    }

    /// Most probable channel at each energy; `None` where nothing is open.
    pub fn dominant_channels(&self) -> Vec<Option<usize>> {
        self.probabilities
            .rows()
            .into_iter()
            .map(|row| {
                row.iter()
                    .enumerate()
                    .filter(|(_, &p)| p > 0.0)
                    .max_by(|a, b| a.1.total_cmp(b.1))
                    .map(|(i, _)| i)
            })
            .collect()
    }
}
