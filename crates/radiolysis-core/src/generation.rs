// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Generation Tally
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Event counts tiered by cascade depth.

use crate::cascade::{CascadeEngine, EventTally};
use crate::sampler::EventSelector;
use ndarray::Array2;
use rand::Rng;
use radiolysis_types::constants::N_PROCESSES;
use radiolysis_types::error::RadiolysisResult;
use radiolysis_types::state::{Electron, EventCounts};

/// `[tiers × 28]` counts. Starts with a fixed number of tiers and grows when
/// an electron deeper than the last tier records an event.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationTally {
    rows: Vec<EventCounts>,
}

impl GenerationTally {
    pub fn new(tiers: usize) -> Self {
        GenerationTally {
            rows: vec![[0; N_PROCESSES]; tiers],
        }
    }

    pub fn tiers(&self) -> usize {
        self.rows.len()
    }

    pub fn row(&self, generation: usize) -> Option<&EventCounts> {
        self.rows.get(generation)
    }

    pub fn rows(&self) -> &[EventCounts] {
        &self.rows
    }

    /// Element-wise sum; the shallower tally grows to the deeper one's tiers.
    pub fn merge(&mut self, other: &GenerationTally) {
        if other.rows.len() > self.rows.len() {
            self.rows.resize(other.rows.len(), [0; N_PROCESSES]);
        }
        for (acc, row) in self.rows.iter_mut().zip(other.rows.iter()) {
            for (a, &n) in acc.iter_mut().zip(row.iter()) {
                *a += n;
            }
        }
    }

    /// Counts summed over generations.
    pub fn channel_totals(&self) -> EventCounts {
        let mut out = [0; N_PROCESSES];
        for row in &self.rows {
            for (o, &n) in out.iter_mut().zip(row.iter()) {
                *o += n;
            }
        }
        out
    }

    /// Events per generation.
    pub fn generation_totals(&self) -> Vec<u64> {
        self.rows.iter().map(|row| row.iter().sum()).collect()
    }

    pub fn to_array(&self) -> Array2<u64> {
        let mut out = Array2::zeros((self.rows.len(), N_PROCESSES));
        for (g, row) in self.rows.iter().enumerate() {
            for (p, &n) in row.iter().enumerate() {
                out[[g, p]] = n;
            }
        }
        out
    }
}

impl EventTally for GenerationTally {
    fn record(&mut self, electron: &Electron, process: usize) {
        let g = electron.generation as usize;
        if g >= self.rows.len() {
            self.rows.resize(g + 1, [0; N_PROCESSES]);
        }
        self.rows[g][process] += 1;
    }
}

/// One generation-tracked cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOutcome {
    pub counts: GenerationTally,
    pub terminating_energy_ev: f64,
    pub attachment_energy_ev: f64,
}

impl<S: EventSelector> CascadeEngine<'_, S> {
    /// Run one cascade recording counts per generation, starting from `tiers` rows.
    pub fn run_generations<R: Rng + ?Sized>(
        &self,
        incident_ev: f64,
        tiers: usize,
        rng: &mut R,
    ) -> RadiolysisResult<GenerationOutcome> {
        let mut counts = GenerationTally::new(tiers);
        let deposit = self.run_with_tally(incident_ev, &mut counts, rng)?;
        Ok(GenerationOutcome {
            counts,
            terminating_energy_ev: deposit.terminating_ev,
            attachment_energy_ev: deposit.attachment_ev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cascade::tests::ScriptedSelector;
    use crate::tables::ProcessTable;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use radiolysis_types::config::SimulationConfig;

    /// Every uniform draw is just below 1, so each split is nearly even.
    fn even_split_rng() -> StepRng {
        StepRng::new(u64::MAX, 0)
    }

    #[test]
    fn test_secondary_counts_one_generation_deeper() {
        let table = ProcessTable::methane();
        // ionize the primary, then attach the secondary (popped first) and the primary
        let engine = CascadeEngine::new(&table, ScriptedSelector::new(vec![0, 10, 10], 10), 1.0, 20);
        let mut rng = even_split_rng();
        let out = engine.run_generations(1000.0, 10, &mut rng).unwrap();

        let g0 = out.counts.row(0).unwrap();
        let g1 = out.counts.row(1).unwrap();
        assert_eq!(g0[0], 1);
        assert_eq!(g0[10], 1);
        assert_eq!(g1[10], 1);
        assert_eq!(g1[0], 0);
        assert_eq!(out.counts.generation_totals()[..3], [2, 1, 0]);
        assert!((out.attachment_energy_ev - (1000.0 - 12.6)).abs() < 1e-9);
        assert_eq!(out.terminating_energy_ev, 0.0);
    }

    #[test]
    fn test_tiers_grow_on_demand() {
        let table = ProcessTable::methane();
        let engine = CascadeEngine::new(&table, ScriptedSelector::new(vec![0, 0, 10, 10, 10], 10), 1.0, 20);
        let mut rng = even_split_rng();
        let out = engine.run_generations(5000.0, 1, &mut rng).unwrap();
        assert_eq!(out.counts.tiers(), 3);
        assert_eq!(out.counts.row(2).unwrap()[10], 1);
        assert_eq!(out.counts.channel_totals()[0], 2);
        assert_eq!(out.counts.channel_totals()[10], 3);
    }

    #[test]
    fn test_generation_sum_matches_standard_run() {
        let table = ProcessTable::methane();
        let cfg = SimulationConfig::new(20_000.0, 1);
        let engine = CascadeEngine::from_config(&table, &cfg).unwrap();
        let standard = engine.run(20_000.0, &mut StdRng::seed_from_u64(17)).unwrap();
        let tiered = engine
            .run_generations(20_000.0, 10, &mut StdRng::seed_from_u64(17))
            .unwrap();
        assert_eq!(tiered.counts.channel_totals(), standard.event_counts);
        assert_eq!(tiered.terminating_energy_ev, standard.terminating_energy_ev);
        assert_eq!(tiered.attachment_energy_ev, standard.attachment_energy_ev);
        assert!(tiered.counts.generation_totals()[1] > 0);
    }

    #[test]
    fn test_merge_and_array_shape() {
        let mut a = GenerationTally::new(2);
        let mut b = GenerationTally::new(4);
        a.record(&Electron::primary(10.0), 3);
        let deep = Electron { energy_ev: 5.0, generation: 3 };
        b.record(&deep, 20);
        a.merge(&b);
        assert_eq!(a.tiers(), 4);
        let arr = a.to_array();
        assert_eq!(arr.dim(), (4, N_PROCESSES));
        assert_eq!(arr[[0, 3]], 1);
        assert_eq!(arr[[3, 20]], 1);
        assert_eq!(arr.sum(), 2);
    }
}
