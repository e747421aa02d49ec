// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Cross Sections
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Electron–methane cross sections for the 28 interaction channels.
//!
//! Three fit families are used:
//! - piecewise quartic polynomials in eV with a power-law tail
//!   (excitation-dissociation, attachment, vibrational, rotational),
//! - a six-parameter empirical ratio in keV for ionization,
//! - an eight-parameter variant with an optional satellite term for
//!   photon-emitting channels.
//!
//! Every family switches to `σ = exp(slope·ln E + offset)` (E in eV) above
//! its fitted range.

use crate::tables::ProcessTable;
use radiolysis_types::config::SimulationConfig;
use radiolysis_types::constants::{E_RYDBERG_KEV, EV_PER_KEV, N_PROCESSES, SIGMA_0_CM2};
use radiolysis_types::error::{RadiolysisError, RadiolysisResult};

/// High-energy asymptote `ln σ = slope·ln E + offset`, E in eV.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerLawTail {
    pub slope: f64,
    pub offset: f64,
}

impl PowerLawTail {
    pub fn new(slope: f64, offset: f64) -> Self {
        PowerLawTail { slope, offset }
    }

    #[inline]
    pub fn eval(&self, energy_ev: f64) -> f64 {
        (self.slope * energy_ev.ln() + self.offset).exp()
    }
}

/// Quartic polynomial per energy bracket.
///
/// `boundaries` is ascending; bracket `i` covers `[b[i], b[i+1])` and uses
/// `coefficients[i] = [a0, a1, a2, a3, a4]`. At or above the last boundary the
/// tail applies, below the first boundary the cross section is zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PiecewisePolynomial {
    pub boundaries: Vec<f64>,
    pub coefficients: Vec<[f64; 5]>,
    pub tail: PowerLawTail,
}

impl PiecewisePolynomial {
    pub fn new(boundaries: Vec<f64>, coefficients: Vec<[f64; 5]>, tail: PowerLawTail) -> Self {
        debug_assert_eq!(boundaries.len(), coefficients.len() + 1);
        debug_assert!(boundaries.windows(2).all(|w| w[0] < w[1]));
        PiecewisePolynomial {
            boundaries,
            coefficients,
            tail,
        }
    }

    /// Index of the bracket containing `energy_ev`, `None` below the first boundary.
    /// Returns `coefficients.len()` at or above the last boundary.
    pub fn bracket(&self, energy_ev: f64) -> Option<usize> {
        let last = self.boundaries.len() - 1;
        if energy_ev >= self.boundaries[last] {
            return Some(last);
        }
        self.boundaries
            .windows(2)
            .position(|w| w[0] <= energy_ev && energy_ev < w[1])
    }

    pub fn eval(&self, energy_ev: f64) -> f64 {
        match self.bracket(energy_ev) {
            None => 0.0,
            Some(i) if i == self.coefficients.len() => self.tail.eval(energy_ev),
            Some(i) => {
                let [a0, a1, a2, a3, a4] = self.coefficients[i];
                let e = energy_ev;
                (((a4 * e + a3) * e + a2) * e + a1) * e + a0
            }
        }
    }
}

/// `σ0·a1·(E1/E_R)^a2 / (1 + (E1/a3)^(a2+a4) + (E1/a5)^(a2+a6))`, E1 in keV above threshold.
#[inline]
fn empirical_ratio(e1_kev: f64, a1: f64, a2: f64, a3: f64, a4: f64, a5: f64, a6: f64) -> f64 {
    let num = SIGMA_0_CM2 * a1 * (e1_kev / E_RYDBERG_KEV).powf(a2);
    let den = 1.0 + (e1_kev / a3).powf(a2 + a4) + (e1_kev / a5).powf(a2 + a6);
    num / den
}

/// Empirical ionization fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmpiricalIonization {
    /// Fit parameters a1..a6.
    pub params: [f64; 6],
    /// Tabulated threshold [keV].
    pub threshold_kev: f64,
    /// Upper end of the fitted range [keV].
    pub cap_kev: f64,
    pub tail: PowerLawTail,
}

impl EmpiricalIonization {
    /// Physical onset: both electrons leaving the event must be trackable.
    pub fn onset_ev(&self, cutoff_ev: f64, energy_loss_ev: f64) -> f64 {
        (2.0 * cutoff_ev + energy_loss_ev).max(self.threshold_kev * EV_PER_KEV)
    }

    pub fn eval(&self, energy_ev: f64, cutoff_ev: f64, energy_loss_ev: f64) -> f64 {
        if energy_ev < self.onset_ev(cutoff_ev, energy_loss_ev) {
            return 0.0;
        }
        let energy_kev = energy_ev / EV_PER_KEV;
        if energy_kev < self.cap_kev {
            let [a1, a2, a3, a4, a5, a6] = self.params;
            empirical_ratio(energy_kev - self.threshold_kev, a1, a2, a3, a4, a5, a6)
        } else {
            self.tail.eval(energy_ev)
        }
    }
}

/// Photon-emission fit. A satellite term scaled by `a7` with energy axis
/// compressed by `a8` is added when `a7 > 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhotonEmission {
    /// Fit parameters a1..a8.
    pub params: [f64; 8],
    pub threshold_kev: f64,
    pub cap_kev: f64,
    pub tail: PowerLawTail,
}

impl PhotonEmission {
    pub fn has_satellite(&self) -> bool {
        self.params[6] > 0.0
    }

    pub fn eval(&self, energy_ev: f64) -> f64 {
        let energy_kev = energy_ev / EV_PER_KEV;
        if energy_kev < self.threshold_kev {
            return 0.0;
        }
        if energy_kev >= self.cap_kev {
            return self.tail.eval(energy_ev);
        }
        let [a1, a2, a3, a4, a5, a6, a7, a8] = self.params;
        let e1 = energy_kev - self.threshold_kev;
        let main = empirical_ratio(e1, a1, a2, a3, a4, a5, a6);
        if self.has_satellite() {
            main + empirical_ratio(e1 / a8, a7 * a1, a2, a3, a4, a5, a6)
        } else {
            main
        }
    }
}

/// Fit family of one channel, fixed when the table is built.
#[derive(Debug, Clone, PartialEq)]
pub enum CrossSectionModel {
    Piecewise(PiecewisePolynomial),
    Ionization(EmpiricalIonization),
    Photon(PhotonEmission),
}

impl CrossSectionModel {
    /// Raw fit value [cm²], before clamping.
    pub fn eval(&self, energy_ev: f64, cutoff_ev: f64, energy_loss_ev: f64) -> f64 {
        match self {
            CrossSectionModel::Piecewise(p) => p.eval(energy_ev),
            CrossSectionModel::Ionization(ion) => ion.eval(energy_ev, cutoff_ev, energy_loss_ev),
            CrossSectionModel::Photon(ph) => ph.eval(energy_ev),
        }
    }
}

/// Evaluates all channels of a [`ProcessTable`] at a given electron energy.
#[derive(Debug, Clone, Copy)]
pub struct CrossSectionEvaluator<'a> {
    table: &'a ProcessTable,
    cutoff_ev: f64,
    amplification: Option<(usize, f64)>,
}

impl<'a> CrossSectionEvaluator<'a> {
    pub fn new(table: &'a ProcessTable, cutoff_ev: f64) -> Self {
        CrossSectionEvaluator {
            table,
            cutoff_ev,
            amplification: None,
        }
    }

    /// Scale one channel's cross section by `factor` (sensitivity studies).
    pub fn with_amplification(mut self, process: usize, factor: f64) -> RadiolysisResult<Self> {
        if process >= N_PROCESSES {
            return Err(RadiolysisError::InvalidProcess(process));
        }
        if !factor.is_finite() || factor <= 0.0 {
            return Err(RadiolysisError::ConfigError(format!(
                "amplification factor must be finite and > 0, got {factor}"
            )));
        }
        self.amplification = Some((process, factor));
        Ok(self)
    }

    pub fn from_config(table: &'a ProcessTable, config: &SimulationConfig) -> RadiolysisResult<Self> {
        let evaluator = Self::new(table, config.cutoff_energy_ev);
        match config.manipulated_process {
            Some(process) => evaluator.with_amplification(process, config.sensitivity_factor),
            None => Ok(evaluator),
        }
    }

    pub fn table(&self) -> &'a ProcessTable {
        self.table
    }

    pub fn cutoff_ev(&self) -> f64 {
        self.cutoff_ev
    }

    pub fn amplification(&self) -> Option<(usize, f64)> {
        self.amplification
    }

    /// Cross section of one channel [cm²].
    ///
    /// Channels whose energy loss exceeds `energy_ev` are closed; negative or
    /// non-finite fit values are clamped to zero.
    pub fn cross_section(&self, energy_ev: f64, process: usize) -> RadiolysisResult<f64> {
        let p = self.table.process(process)?;
        if energy_ev <= 0.0 || !energy_ev.is_finite() || p.energy_loss_ev > energy_ev {
            return Ok(0.0);
        }
        let mut sigma = p.model.eval(energy_ev, self.cutoff_ev, p.energy_loss_ev);
        if !sigma.is_finite() || sigma < 0.0 {
            sigma = 0.0;
        }
        if let Some((target, factor)) = self.amplification {
            if target == process {
                sigma *= factor;
            }
        }
        Ok(sigma)
    }

    /// Unnormalized cross sections of all channels [cm²].
    pub fn cross_sections(&self, energy_ev: f64) -> [f64; N_PROCESSES] {
        let mut sigmas = [0.0; N_PROCESSES];
        for (i, sigma) in sigmas.iter_mut().enumerate() {
            // table length is N_PROCESSES, lookup cannot fail
            *sigma = self.cross_section(energy_ev, i).unwrap_or(0.0);
        }
        sigmas
    }

    /// Cross sections normalized to probabilities. `None` when no channel is open.
    pub fn probabilities(&self, energy_ev: f64) -> Option<[f64; N_PROCESSES]> {
        let mut sigmas = self.cross_sections(energy_ev);
        let total: f64 = sigmas.iter().sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }
        for s in sigmas.iter_mut() {
            *s /= total;
        }
        Some(sigmas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> ProcessTable {
        ProcessTable::methane()
    }

    #[test]
    fn test_power_law_tail() {
        let tail = PowerLawTail::new(-1.0, 0.0);
        assert!((tail.eval(10.0) - 0.1).abs() < 1e-12);
        let flat = PowerLawTail::new(0.0, (2.0f64).ln());
        assert!((flat.eval(12345.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_bracket_is_right_exclusive() {
        let poly = PiecewisePolynomial::new(
            vec![1.0, 2.0, 4.0],
            vec![[1.0, 0.0, 0.0, 0.0, 0.0], [2.0, 0.0, 0.0, 0.0, 0.0]],
            PowerLawTail::new(0.0, (3.0f64).ln()),
        );
        assert_eq!(poly.bracket(0.5), None);
        assert_eq!(poly.bracket(1.0), Some(0));
        assert_eq!(poly.bracket(1.999), Some(0));
        assert_eq!(poly.bracket(2.0), Some(1));
        assert_eq!(poly.bracket(4.0), Some(2));
        assert_eq!(poly.eval(0.5), 0.0);
        assert!((poly.eval(1.5) - 1.0).abs() < 1e-12);
        assert!((poly.eval(3.0) - 2.0).abs() < 1e-12);
        assert!((poly.eval(100.0) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_polynomial_coefficient_order() {
        // 1 + 2E + 3E² + 4E³ + 5E⁴ at E = 2 → 1 + 4 + 12 + 32 + 80
        let poly = PiecewisePolynomial::new(
            vec![0.0, 10.0],
            vec![[1.0, 2.0, 3.0, 4.0, 5.0]],
            PowerLawTail::new(0.0, 0.0),
        );
        assert!((poly.eval(2.0) - 129.0).abs() < 1e-12);
    }

    #[test]
    fn test_below_first_boundary_is_zero() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1.0);
        // EIE_1 opens at 7.5 eV, attachment at 6 eV.
        assert_eq!(eval.cross_section(7.4, 7).unwrap(), 0.0);
        assert!(eval.cross_section(7.6, 7).unwrap() > 0.0);
        assert_eq!(eval.cross_section(5.9, 10).unwrap(), 0.0);
        assert!(eval.cross_section(7.0, 10).unwrap() > 0.0);
    }

    #[test]
    fn test_ionization_physical_threshold() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1.0);
        // CH4+ : max(2·1 + 12.60, 12.6) = 14.6 eV
        assert_eq!(eval.cross_section(14.59, 0).unwrap(), 0.0);
        assert!(eval.cross_section(14.61, 0).unwrap() > 0.0);
        // higher cutoff raises the onset
        let eval_hi = CrossSectionEvaluator::new(&t, 5.0);
        assert_eq!(eval_hi.cross_section(20.0, 0).unwrap(), 0.0);
        assert!(eval_hi.cross_section(22.7, 0).unwrap() > 0.0);
    }

    #[test]
    fn test_ionization_tail_above_cap() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1.0);
        let sigma = eval.cross_section(5_000.0, 0).unwrap();
        let expected = (-0.74434 * 5_000.0f64.ln() - 32.444).exp();
        assert!((sigma - expected).abs() <= 1e-12 * expected);
    }

    #[test]
    fn test_photon_satellite_adds() {
        let t = table();
        let Ok(p) = t.process(24) else {
            panic!("CH G-band missing");
        };
        let CrossSectionModel::Photon(ph) = &p.model else {
            panic!("CH G-band should be a photon model");
        };
        assert!(ph.has_satellite());
        let mut bare = *ph;
        bare.params[6] = 0.0;
        let e = 100.0;
        assert!(ph.eval(e) > bare.eval(e));
    }

    #[test]
    fn test_photon_below_threshold_zero() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1.0);
        // Ly-α threshold 14.7 eV
        assert_eq!(eval.cross_section(14.6, 17).unwrap(), 0.0);
        assert!(eval.cross_section(15.0, 17).unwrap() > 0.0);
    }

    #[test]
    fn test_closed_channel_when_loss_exceeds_energy() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 0.01);
        // mode v1 loses 0.362 eV
        assert_eq!(eval.cross_section(0.3, 11).unwrap(), 0.0);
        assert!(eval.cross_section(0.5, 11).unwrap() > 0.0);
    }

    #[test]
    fn test_probabilities_normalized() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1.0);
        for &e in &[1.0, 5.0, 15.0, 100.0, 1_000.0, 20_000.0, 100_000.0] {
            let probs = eval.probabilities(e).expect("channels open");
            let sum: f64 = probs.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "sum at {e} eV = {sum}");
            assert!(probs.iter().all(|&p| p >= 0.0));
        }
    }

    #[test]
    fn test_no_open_channel_returns_none() {
        let t = table();
        let eval = CrossSectionEvaluator::new(&t, 1e-4);
        assert!(eval.probabilities(1e-3).is_none());
        assert!(eval.probabilities(0.0).is_none());
    }

    #[test]
    fn test_amplification_scales_single_channel() {
        let t = table();
        let base = CrossSectionEvaluator::new(&t, 1.0);
        let amp = base.with_amplification(14, 1.10).unwrap();
        let e = 50.0;
        let b = base.cross_sections(e);
        let a = amp.cross_sections(e);
        assert!((a[14] - 1.10 * b[14]).abs() <= 1e-12 * b[14]);
        for i in (0..N_PROCESSES).filter(|&i| i != 14) {
            assert_eq!(a[i], b[i]);
        }
    }

    #[test]
    fn test_amplified_channel_gains_probability() {
        let t = table();
        let base = CrossSectionEvaluator::new(&t, 1.0);
        let amp = base.with_amplification(0, 1.10).unwrap();
        for &e in &[10.0, 100.0, 1_000.0, 10_000.0, 100_000.0] {
            let b = base.probabilities(e).expect("channels open");
            let a = amp.probabilities(e).expect("channels open");
            if b[0] > 0.0 {
                assert!(a[0] > b[0], "p0 did not rise at {e} eV");
            } else {
                // Ion_1 is below its physical threshold at 10 eV
                assert_eq!(a[0], 0.0);
            }
            for i in 1..N_PROCESSES {
                assert!(a[i] <= b[i], "channel {i} rose at {e} eV");
            }
        }
        assert!(base.probabilities(100.0).unwrap()[0] > 0.0);
    }

    #[test]
    fn test_amplification_rejects_bad_input() {
        let t = table();
        let base = CrossSectionEvaluator::new(&t, 1.0);
        assert!(matches!(
            base.with_amplification(28, 1.1),
            Err(RadiolysisError::InvalidProcess(28))
        ));
        assert!(base.with_amplification(0, -1.0).is_err());
    }

    #[test]
    fn test_from_config_applies_manipulation() {
        let t = table();
        let cfg = SimulationConfig::new(1000.0, 1).with_manipulated(0);
        let eval = CrossSectionEvaluator::from_config(&t, &cfg).unwrap();
        assert_eq!(eval.amplification(), Some((0, 1.10)));
    }
}
