// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Process Tables
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Empirical coefficient tables for the 28 electron–methane channels.
//!
//! Built once into an immutable [`ProcessTable`] and shared by reference.

use crate::cross_section::{
    CrossSectionModel, EmpiricalIonization, PhotonEmission, PiecewisePolynomial, PowerLawTail,
};
use radiolysis_types::constants::{ATTACHMENT_INDEX, N_PROCESSES};
use radiolysis_types::error::{RadiolysisError, RadiolysisResult};

/// Channel family, which also fixes the cascade transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessCategory {
    /// Ejects a secondary electron.
    Ionization,
    /// Neutral dissociation into radicals (electron-impact excitation).
    Radical,
    /// Dissociative attachment, absorbs the electron.
    Attachment,
    Vibrational,
    Rotational,
    /// Dissociative excitation followed by line emission.
    Photon,
}

impl ProcessCategory {
    pub fn is_ionization(self) -> bool {
        self == ProcessCategory::Ionization
    }

    pub fn is_attachment(self) -> bool {
        self == ProcessCategory::Attachment
    }

    pub fn name(self) -> &'static str {
        match self {
            ProcessCategory::Ionization => "ionization",
            ProcessCategory::Radical => "radical",
            ProcessCategory::Attachment => "attachment",
            ProcessCategory::Vibrational => "vibrational",
            ProcessCategory::Rotational => "rotational",
            ProcessCategory::Photon => "photon",
        }
    }
}

/// One interaction channel.
#[derive(Debug, Clone, PartialEq)]
pub struct Process {
    pub index: usize,
    /// Short code, e.g. `Ion_1`, `Nu3`, `Ly_a`.
    pub code: &'static str,
    /// Reaction or emission label.
    pub label: &'static str,
    pub category: ProcessCategory,
    /// Energy removed from the electron per event [eV].
    pub energy_loss_ev: f64,
    pub model: CrossSectionModel,
}

/// Immutable table of all channels, indexed 0..28.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

/// Per-event energy loss [eV].
pub const ENERGY_LOSS_EV: [f64; N_PROCESSES] = [
    12.60, 14.52, 15.30, 18.28, 20.10, 20.42, 19.67, // ionization
    4.68, 4.95, 9.46, // excitation-dissociation
    3.93, // attachment
    3.62e-1, 1.90e-1, 3.74e-1, 1.62e-1, // vibrational
    7.8e-3, 1.3e-2, // rotational
    10.20, 12.08, 12.75, 1.89, 2.55, 2.86, 3.03, 2.88, 6.48, 7.49, 8.00, // photon
];

pub const PROCESS_CODES: [&str; N_PROCESSES] = [
    "Ion_1", "Ion_2", "Ion_3", "Ion_4", "Ion_5", "Ion_6", "Ion_7", "EIE_1", "EIE_2", "EIE_3",
    "EA", "Nu1", "Nu2", "Nu3", "Nu4", "Jto3", "Jto4", "Ly_a", "Ly_b", "Ly_g", "H_a", "H_b",
    "H_g", "H_d", "CH G-band", "C3", "C1", "C4",
];

pub const PROCESS_LABELS: [&str; N_PROCESSES] = [
    "CH₄ + e⁻ → CH₄⁺ + 2e⁻",
    "CH₄ + e⁻ → CH₃⁺ + H* + 2e⁻",
    "CH₄ + e⁻ → CH₂⁺ + H₂ + 2e⁻",
    "CH₄ + e⁻ → CH₃* + H⁺ + 2e⁻",
    "CH₄ + e⁻ → CH⁺ + H₂ + H* + 2e⁻",
    "CH₄ + e⁻ → CH₂* + H₂⁺ + 2e⁻",
    "CH₄ + e⁻ → C⁺ + 2H₂ + 2e⁻",
    "CH₄ + e⁻ → CH₃* + H* + e⁻",
    "CH₄ + e⁻ → CH₂* + H₂ + e⁻",
    "CH₄ + e⁻ → CH* + H₂ + H* + e⁻",
    "CH₄ + e⁻ → CH₃* + H⁻",
    "mode v₁",
    "mode v₂",
    "mode v₃",
    "mode v₄",
    "J = 0 → J = 3",
    "J = 0 → J = 4",
    "Ly-α",
    "Ly-β",
    "Ly-γ",
    "H-α",
    "H-β",
    "H-γ",
    "H-δ",
    "CH G-band",
    "C III",
    "C I",
    "C IV",
];

// ── Ionization: a1..a6, threshold [keV], cap [keV], slope, offset ──

const ION_PARAMS: [[f64; 6]; 7] = [
    [9.66, 2.32, 5.60e-3, -2.08e-1, 1.87e-2, 9.10e-1],
    [7.1323, 2.2621, 5.6e-3, -2.34e-1, 1.92e-2, 9.08e-1],
    [2.06e-1, 3.29, 1.50e-2, -3.13e-1, 2.87e-2, 1.01],
    [4.54e-1, 2.80, 2.00e-2, 1.0, 7.90e-3, -5.22e-1],
    [0.064, 1.43, 0.0133, -0.33, 0.0424, 1.181],
    [6.30e-3, 5.20, 1.74e-2, -7.78e-1, 2.72e-2, 1.04],
    [4.97e-2, 3.51, 2.24e-2, -8.22e-1, 3.90e-2, 1.04],
];
const ION_THRESHOLD_KEV: [f64; 7] = [1.26e-2, 1.26e-2, 1.26e-2, 2.22e-2, 0.0282, 2.23e-2, 2.11e-2];
const ION_CAP_KEV: f64 = 1.0;
const ION_SLOPE: [f64; 7] = [-0.74434, -0.7539, -0.91907, -0.9829, -1.1594, -1.0363, -1.0325];
const ION_OFFSET: [f64; 7] = [-32.444, -32.592, -33.237, -33.6774, -33.686, -34.873, -32.365];

// ── Photon emission: a1..a8, threshold [keV], cap [keV], slope, offset ──

const PHOTON_PARAMS: [[f64; 8]; 11] = [
    [8.54e-3, 2.82, 0.0272, -0.19, 0.0595, 1.6, 0.0, 0.0],
    [5.21e-2, 4.65, 0.00591, -1.24, 0.0166, 1.1, 0.0, 0.0],
    [2.24e-2, 4.21, 0.0058, -1.12, 0.0178, 1.16, 0.0, 0.0],
    [1.33e-2, 2.41, 0.0104, -1.19, 0.0335, 1.04, 0.0, 0.0],
    [1.55e-2, 3.54, 0.0064, -1.06, 0.019, 1.05, 0.0, 0.0],
    [1.33e-3, 1.98, 0.023, -0.4, 0.0408, 1.08, 0.0, 0.0],
    [4.05e-4, 2.31, 0.0249, -0.32, 0.0406, 1.11, 0.0, 0.0],
    [1.07, 16.0, 0.0084, -1.191, 0.01184, 0.909, 3.270, 2.77e-1],
    [1.08e-2, 4.35, 0.00808, -0.23, 0.0137, 1.81, 1.745, 4.99],
    [6.88e-4, 6.55, 0.0172, 0.21, 0.025, 1.8, 1.22, 3.16],
    [1.82e-3, 2.2, 0.0116, 0.95, 0.0187, 0.95, 1.82, 5.85],
];
const PHOTON_THRESHOLD_KEV: [f64; 11] = [
    1.47e-2, 1.66e-2, 1.73e-2, 1.66e-2, 1.73e-2, 1.76e-2, 1.76e-2, 1.220e-2, 2.350e-2, 1.570e-2,
    2.500e-2,
];
const PHOTON_CAP_KEV: [f64; 11] = [0.986, 0.988, 0.984, 6.0, 6.0, 6.0, 6.0, 5.0, 0.4, 0.98, 1.0];
const PHOTON_SLOPE: [f64; 11] = [
    -1.5044, -1.1107, -1.1703, -1.0436, -1.0557, -1.0848, -1.1058, -0.91092, -1.3889, -1.4876,
    -0.97797,
];
const PHOTON_OFFSET: [f64; 11] = [
    -31.591, -35.694, -36.075, -35.305, -36.695, -37.261, -38.033, -36.036, -35.749, -34.29,
    -38.783,
];

fn piecewise(boundaries: &[f64], coefficients: &[[f64; 5]], slope: f64, offset: f64) -> CrossSectionModel {
    CrossSectionModel::Piecewise(PiecewisePolynomial::new(
        boundaries.to_vec(),
        coefficients.to_vec(),
        PowerLawTail::new(slope, offset),
    ))
}

/// Piecewise models for channels 7..=16, in channel order.
fn piecewise_models() -> Vec<CrossSectionModel> {
    const NU_RANGE: [f64; 4] = [0.0, 5.0, 10.0, 17.0];
    const J_RANGE: [f64; 3] = [0.0, 7.5, 30.0];
    vec![
        // EIE_1: CH₃* + H*
        piecewise(
            &[7.5, 17.0, 40.0, 100.0],
            &[
                [1.7536e-16, -5.3092e-17, 5.0307e-18, -1.511e-19, 1.402e-21],
                [-1.1553e-15, 1.6685e-16, -7.8001e-18, 1.5689e-19, -1.156e-21],
                [2.0729e-16, -2.1828e-18, -7.6710e-22, 7.2059e-23, 0.0],
            ],
            -1.1196,
            -32.335,
        ),
        // EIE_2: CH₂* + H₂
        piecewise(
            &[7.5, 22.0, 40.0],
            &[
                [2.1296e-16, -7.9147e-17, 9.7273e-18, -4.4331e-19, 6.8159e-21],
                [1.2817e-16, -3.555e-18, 1.1875e-20, 0.0, 0.0],
            ],
            -8.636,
            -7.9828,
        ),
        // EIE_3: CH* + H₂ + H*
        piecewise(
            &[13.0, 90.0],
            &[[-4.4972e-18, 4.5944e-19, -8.8557e-21, 8.2949e-23, -3.2217e-25]],
            -0.8511,
            -36.077,
        ),
        // EA
        piecewise(
            &[6.0, 8.0, 12.5],
            &[
                [2.7270e-17, -2.3656e-17, 6.9593e-18, -8.5858e-19, 3.8263e-20],
                [6.7363e-17, -3.5794e-17, 6.5238e-18, -4.9237e-19, 1.3212e-20],
            ],
            -15.944,
            -2.7595,
        ),
        // Nu1
        piecewise(
            &NU_RANGE,
            &[
                [9.5775e-18, -8.9135e-18, 3.3126e-18, -2.1225e-19, 0.0],
                [1.2176e-16, -8.6348e-17, 2.2772e-17, -2.2987e-18, 7.8662e-20],
                [1.9796e-16, -3.4049e-17, 2.0965e-18, -4.3665e-20, 0.0],
            ],
            -0.76715,
            -36.926,
        ),
        // Nu2
        piecewise(
            &NU_RANGE,
            &[
                [1.1232e-17, -6.0423e-18, 2.2599e-18, -1.008e-19, 0.0],
                [2.5438e-16, -1.618e-16, 3.8308e-17, -3.622e-18, 1.1914e-19],
                [1.5228e-16, -1.9841e-17, 1.0086e-18, -1.8137e-20, 0.0],
            ],
            -1.3092,
            -34.883,
        ),
        // Nu3
        piecewise(
            &NU_RANGE,
            &[
                [2.3026e-17, -1.2559e-17, 3.3263e-18, -1.2141e-19, 0.0],
                [2.8946e-16, -1.8694e-16, 4.4288e-17, -4.1437e-18, 1.344e-19],
                [1.3383e-16, -1.149e-17, 3.2806e-19, -2.3848e-21, 0.0],
            ],
            -1.5041,
            -34.149,
        ),
        // Nu4
        piecewise(
            &NU_RANGE,
            &[
                [2.7555e-17, -1.004e-17, 2.1595e-18, -9.2766e-20, 0.0],
                [2.33e-16, -1.3779e-16, 3.0494e-17, -2.7257e-18, 8.6051e-20],
                [3.5303e-17, 3.2174e-18, -3.7628e-19, 9.5309e-21, 0.0],
            ],
            -0.76174,
            -35.94,
        ),
        // J 0→3
        piecewise(
            &J_RANGE,
            &[
                [4.0187e-17, -3.4332e-17, 9.5048e-18, -5.8352e-19, 0.0],
                [3.8926e-17, 3.3496e-18, 1.8872e-19, -6.3879e-21, 0.0],
            ],
            -0.75386,
            -33.963,
        ),
        // J 0→4
        piecewise(
            &J_RANGE,
            &[
                [-1.4292e-18, 4.8739e-18, -3.8881e-18, 1.276e-18, -8.8977e-20],
                [-5.9277e-16, 1.577e-16, -1.1631e-17, 3.5567e-19, -3.9501e-21],
            ],
            -1.2547,
            -32.873,
        ),
    ]
}

fn category_of(index: usize) -> ProcessCategory {
    match index {
        0..=6 => ProcessCategory::Ionization,
        7..=9 => ProcessCategory::Radical,
        ATTACHMENT_INDEX => ProcessCategory::Attachment,
        11..=14 => ProcessCategory::Vibrational,
        15 | 16 => ProcessCategory::Rotational,
        _ => ProcessCategory::Photon,
    }
}

impl ProcessTable {
    /// Build a table from caller-supplied channels. Exactly 28 channels,
    /// stored in index order, with finite non-negative energy losses.
    pub fn from_processes(processes: Vec<Process>) -> RadiolysisResult<Self> {
        if processes.len() != N_PROCESSES {
            return Err(RadiolysisError::ConfigError(format!(
                "process table needs {N_PROCESSES} channels, got {}",
                processes.len()
            )));
        }
        for (i, p) in processes.iter().enumerate() {
            if p.index != i {
                return Err(RadiolysisError::ConfigError(format!(
                    "process '{}' stored at slot {i} but carries index {}",
                    p.code, p.index
                )));
            }
            if !p.energy_loss_ev.is_finite() || p.energy_loss_ev < 0.0 {
                return Err(RadiolysisError::ConfigError(format!(
                    "process '{}' energy loss must be finite and >= 0, got {}",
                    p.code, p.energy_loss_ev
                )));
            }
        }
        Ok(ProcessTable { processes })
    }

    /// The electron–methane reference table.
    pub fn methane() -> Self {
        let mut models: Vec<CrossSectionModel> = Vec::with_capacity(N_PROCESSES);
        for i in 0..7 {
            models.push(CrossSectionModel::Ionization(EmpiricalIonization {
                params: ION_PARAMS[i],
                threshold_kev: ION_THRESHOLD_KEV[i],
                cap_kev: ION_CAP_KEV,
                tail: PowerLawTail::new(ION_SLOPE[i], ION_OFFSET[i]),
            }));
        }
        models.extend(piecewise_models());
        for i in 0..11 {
            models.push(CrossSectionModel::Photon(PhotonEmission {
                params: PHOTON_PARAMS[i],
                threshold_kev: PHOTON_THRESHOLD_KEV[i],
                cap_kev: PHOTON_CAP_KEV[i],
                tail: PowerLawTail::new(PHOTON_SLOPE[i], PHOTON_OFFSET[i]),
            }));
        }

        let processes = models
            .into_iter()
            .enumerate()
            .map(|(index, model)| Process {
                index,
                code: PROCESS_CODES[index],
                label: PROCESS_LABELS[index],
                category: category_of(index),
                energy_loss_ev: ENERGY_LOSS_EV[index],
                model,
            })
            .collect();
        ProcessTable { processes }
    }

    pub fn process(&self, index: usize) -> RadiolysisResult<&Process> {
        self.processes
            .get(index)
            .ok_or(RadiolysisError::InvalidProcess(index))
    }

    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    pub fn energy_losses(&self) -> [f64; N_PROCESSES] {
        let mut out = [0.0; N_PROCESSES];
        for (slot, p) in out.iter_mut().zip(self.processes.iter()) {
            *slot = p.energy_loss_ev;
        }
        out
    }

    pub fn indices_of(&self, category: ProcessCategory) -> Vec<usize> {
        self.processes
            .iter()
            .filter(|p| p.category == category)
            .map(|p| p.index)
            .collect()
    }
}

impl Default for ProcessTable {
    fn default() -> Self {
        Self::methane()
    }
}
