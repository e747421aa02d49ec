// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Event Sampler
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Cumulative-probability selection of the next collision channel.

use crate::cross_section::CrossSectionEvaluator;
use rand::Rng;
use radiolysis_types::constants::N_PROCESSES;

/// Chooses which channel an electron of a given energy undergoes.
///
/// `None` means no channel is open at that energy; the cascade then
/// deposits the electron as terminating energy.
pub trait EventSelector {
    fn select<R: Rng + ?Sized>(&self, energy_ev: f64, rng: &mut R) -> Option<usize>;
}

/// First index whose running cumulative probability exceeds `draw`.
///
/// Rounding can leave the final cumulative value slightly below a draw close
/// to 1; the last channel with positive probability is returned in that case,
/// so a closed channel is never chosen.
pub fn sample_index(probabilities: &[f64; N_PROCESSES], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for (i, &p) in probabilities.iter().enumerate() {
        cumulative += p;
        if draw < cumulative {
            return i;
        }
    }
    probabilities
        .iter()
        .rposition(|&p| p > 0.0)
        .unwrap_or(N_PROCESSES - 1)
}

/// Production selector: normalized cross sections + one uniform draw.
#[derive(Debug, Clone, Copy)]
pub struct CrossSectionSampler<'a> {
    evaluator: CrossSectionEvaluator<'a>,
}

impl<'a> CrossSectionSampler<'a> {
    pub fn new(evaluator: CrossSectionEvaluator<'a>) -> Self {
        CrossSectionSampler { evaluator }
    }

    pub fn evaluator(&self) -> &CrossSectionEvaluator<'a> {
        &self.evaluator
    }
}

impl EventSelector for CrossSectionSampler<'_> {
    fn select<R: Rng + ?Sized>(&self, energy_ev: f64, rng: &mut R) -> Option<usize> {
        let probabilities = self.evaluator.probabilities(energy_ev)?;
        let draw: f64 = rng.gen();
        Some(sample_index(&probabilities, draw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::ProcessTable;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn one_hot(i: usize) -> [f64; N_PROCESSES] {
        let mut p = [0.0; N_PROCESSES];
        p[i] = 1.0;
        p
    }

    #[test]
    fn test_one_hot_always_selected() {
        let p = one_hot(13);
        for &draw in &[0.0, 0.25, 0.5, 0.999_999] {
            assert_eq!(sample_index(&p, draw), 13);
        }
    }

    #[test]
    fn test_cumulative_boundaries() {
        let mut p = [0.0; N_PROCESSES];
        p[0] = 0.25;
        p[5] = 0.25;
        p[20] = 0.5;
        assert_eq!(sample_index(&p, 0.0), 0);
        assert_eq!(sample_index(&p, 0.2499), 0);
        // cumulative must strictly exceed the draw
        assert_eq!(sample_index(&p, 0.25), 5);
        assert_eq!(sample_index(&p, 0.4999), 5);
        assert_eq!(sample_index(&p, 0.5), 20);
        assert_eq!(sample_index(&p, 0.9999), 20);
    }

    #[test]
    fn test_rounding_fallback_is_last_open_channel() {
        let mut p = [0.0; N_PROCESSES];
        p[3] = 0.5;
        p[4] = 0.5 - 1e-12;
        assert_eq!(sample_index(&p, 0.999_999_999_999_9), 4);

        p[N_PROCESSES - 1] = 1e-12;
        assert_eq!(sample_index(&p, 1.0), N_PROCESSES - 1);
    }

    #[test]
    fn test_fallback_never_closed_below_last_threshold() {
        let table = ProcessTable::methane();
        let eval = CrossSectionEvaluator::new(&table, 1.0);
        let top = 1.0 - f64::EPSILON / 2.0;
        for k in 0..700 {
            let energy = 1.0 + k as f64 * 0.01;
            if let Some(p) = eval.probabilities(energy) {
                let i = sample_index(&p, top);
                assert!(p[i] > 0.0, "closed channel {i} chosen at {energy} eV");
            }
        }
    }

    #[test]
    fn test_sampler_matches_distribution() {
        let table = ProcessTable::methane();
        let eval = CrossSectionEvaluator::new(&table, 1.0);
        let sampler = CrossSectionSampler::new(eval);
        let mut rng = StdRng::seed_from_u64(2024);
        let energy = 1_000.0;
        let probs = eval.probabilities(energy).unwrap();

        let n = 200_000;
        let mut hits = [0usize; N_PROCESSES];
        for _ in 0..n {
            let i = sampler.select(energy, &mut rng).unwrap();
            hits[i] += 1;
        }
        for i in 0..N_PROCESSES {
            let freq = hits[i] as f64 / n as f64;
            let sigma = (probs[i] * (1.0 - probs[i]) / n as f64).sqrt();
            assert!(
                (freq - probs[i]).abs() <= 6.0 * sigma + 1e-4,
                "channel {i}: freq={freq}, p={}",
                probs[i]
            );
        }
    }

    #[test]
    fn test_sampler_none_when_closed() {
        let table = ProcessTable::methane();
        let sampler = CrossSectionSampler::new(CrossSectionEvaluator::new(&table, 1e-4));
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sampler.select(1e-3, &mut rng), None);
    }
}
