// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Batch Runner
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Many independent cascades, aggregated chunk by chunk.
//!
//! Trajectory `i` always runs on its own random stream derived from the
//! batch seed, and per-trajectory outcomes are folded in index order. Totals
//! are therefore identical for any chunk size and for sequential or rayon
//! execution. A chunk is merged only when all of its trajectories succeed,
//! so an error leaves the totals of earlier chunks intact.

use crate::cascade::CascadeEngine;
use crate::generation::GenerationTally;
use crate::rng::{resolve_seed, trajectory_rng};
use crate::sampler::{CrossSectionSampler, EventSelector};
use crate::tables::ProcessTable;
use ndarray::Array2;
use radiolysis_types::config::SimulationConfig;
use radiolysis_types::constants::N_PROCESSES;
use radiolysis_types::error::RadiolysisResult;
use radiolysis_types::state::EventCounts;
use rand::rngs::StdRng;
use rayon::prelude::*;
use tracing::{debug, info};

/// Standard-mode output.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardBatch {
    /// `[trajectories × 28]` per-trajectory event counts.
    pub event_counts: Array2<u64>,
    pub terminating_energy_ev: f64,
    pub attachment_energy_ev: f64,
}

impl StandardBatch {
    pub fn trajectories(&self) -> usize {
        self.event_counts.nrows()
    }

    /// Counts summed over trajectories.
    pub fn channel_totals(&self) -> EventCounts {
        let mut out = [0; N_PROCESSES];
        for (o, col) in out.iter_mut().zip(self.event_counts.columns()) {
            *o = col.sum();
        }
        out
    }

    /// Mean counts per trajectory; zeros for an empty batch.
    pub fn mean_counts(&self) -> [f64; N_PROCESSES] {
        let n = self.trajectories();
        let mut out = [0.0; N_PROCESSES];
        if n == 0 {
            return out;
        }
        for (o, &total) in out.iter_mut().zip(self.channel_totals().iter()) {
            *o = total as f64 / n as f64;
        }
        out
    }
}

/// Generation-mode output.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationBatch {
    /// `[tiers × 28]` counts summed over trajectories.
    pub counts: Array2<u64>,
    pub terminating_energy_ev: f64,
    pub attachment_energy_ev: f64,
    pub trajectories: usize,
}

impl GenerationBatch {
    /// Events per generation.
    pub fn generation_totals(&self) -> Vec<u64> {
        self.counts.rows().into_iter().map(|row| row.sum()).collect()
    }

    pub fn channel_totals(&self) -> EventCounts {
        let mut out = [0; N_PROCESSES];
        for (o, col) in out.iter_mut().zip(self.counts.columns()) {
            *o = col.sum();
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
struct StandardTotals {
    rows: Vec<EventCounts>,
    terminating_ev: f64,
    attachment_ev: f64,
}

#[derive(Debug, Clone)]
struct GenerationTotals {
    tally: GenerationTally,
    terminating_ev: f64,
    attachment_ev: f64,
    trajectories: usize,
}

impl GenerationTotals {
    fn new(tiers: usize) -> Self {
        GenerationTotals {
            tally: GenerationTally::new(tiers),
            terminating_ev: 0.0,
            attachment_ev: 0.0,
            trajectories: 0,
        }
    }
}

/// Runs `config.trajectories` cascades in chunks of `config.chunk_size`.
pub struct BatchRunner<'a, S = CrossSectionSampler<'a>> {
    engine: CascadeEngine<'a, S>,
    config: SimulationConfig,
    seed: u64,
    completed: usize,
    standard: StandardTotals,
    tiered: GenerationTotals,
}

impl<'a> BatchRunner<'a, CrossSectionSampler<'a>> {
    /// Validate `config` and prepare a cross-section driven runner.
    pub fn new(table: &'a ProcessTable, config: SimulationConfig) -> RadiolysisResult<Self> {
        let engine = CascadeEngine::from_config(table, &config)?;
        Self::with_engine(engine, config)
    }
}

impl<'a, S: EventSelector + Sync> BatchRunner<'a, S> {
    /// Runner around a prepared engine; `config` still supplies the incident
    /// energy, trajectory count, chunking and seed.
    pub fn with_engine(engine: CascadeEngine<'a, S>, config: SimulationConfig) -> RadiolysisResult<Self> {
        config.validate()?;
        let seed = resolve_seed(config.seed);
        debug!(seed, trajectories = config.trajectories, "batch seed resolved");
        let tiers = config.generation_tiers;
        Ok(BatchRunner {
            engine,
            config,
            seed,
            completed: 0,
            standard: StandardTotals::default(),
            tiered: GenerationTotals::new(tiers),
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Trajectories merged so far in the current run.
    pub fn completed(&self) -> usize {
        self.completed
    }

    /// Run every trajectory in standard mode.
    pub fn run_standard(&mut self) -> RadiolysisResult<StandardBatch> {
        self.completed = 0;
        self.standard = StandardTotals::default();
        while self.completed < self.config.trajectories {
            let len = self.next_chunk_len();
            self.standard_chunk(len)?;
        }
        Ok(self.standard_totals())
    }

    /// Run every trajectory recording counts per generation.
    pub fn run_generations(&mut self) -> RadiolysisResult<GenerationBatch> {
        self.completed = 0;
        self.tiered = GenerationTotals::new(self.config.generation_tiers);
        while self.completed < self.config.trajectories {
            let len = self.next_chunk_len();
            self.generation_chunk(len)?;
        }
        Ok(self.generation_totals())
    }

    /// Run the next `len` trajectories in standard mode and merge them.
    pub fn standard_chunk(&mut self, len: usize) -> RadiolysisResult<()> {
        let outcomes = self.execute(len, |engine, incident, rng| engine.run(incident, rng))?;
        for r in &outcomes {
            self.standard.rows.push(r.event_counts);
            self.standard.terminating_ev += r.terminating_energy_ev;
            self.standard.attachment_ev += r.attachment_energy_ev;
        }
        self.finish_chunk(outcomes.len());
        Ok(())
    }

    /// Run the next `len` trajectories with generation tracking and merge them.
    pub fn generation_chunk(&mut self, len: usize) -> RadiolysisResult<()> {
        let tiers = self.config.generation_tiers;
        let outcomes = self.execute(len, |engine, incident, rng| {
            engine.run_generations(incident, tiers, rng)
        })?;
        for o in &outcomes {
            self.tiered.tally.merge(&o.counts);
            self.tiered.terminating_ev += o.terminating_energy_ev;
            self.tiered.attachment_ev += o.attachment_energy_ev;
        }
        self.tiered.trajectories += outcomes.len();
        self.finish_chunk(outcomes.len());
        Ok(())
    }

    /// Standard totals of the chunks merged so far.
    pub fn standard_totals(&self) -> StandardBatch {
        let rows = &self.standard.rows;
        let mut event_counts = Array2::zeros((rows.len(), N_PROCESSES));
        for (t, row) in rows.iter().enumerate() {
            for (p, &n) in row.iter().enumerate() {
                event_counts[[t, p]] = n;
            }
        }
        StandardBatch {
            event_counts,
            terminating_energy_ev: self.standard.terminating_ev,
            attachment_energy_ev: self.standard.attachment_ev,
        }
    }

    /// Generation totals of the chunks merged so far.
    pub fn generation_totals(&self) -> GenerationBatch {
        GenerationBatch {
            counts: self.tiered.tally.to_array(),
            terminating_energy_ev: self.tiered.terminating_ev,
            attachment_energy_ev: self.tiered.attachment_ev,
            trajectories: self.tiered.trajectories,
        }
    }

    fn next_chunk_len(&self) -> usize {
        self.config
            .chunk_size
            .min(self.config.trajectories - self.completed)
    }

    /// Outcomes of trajectories `completed..completed + len`, in index order.
    fn execute<T, F>(&self, len: usize, run: F) -> RadiolysisResult<Vec<T>>
    where
        T: Send,
        F: Fn(&CascadeEngine<'a, S>, f64, &mut StdRng) -> RadiolysisResult<T> + Sync,
    {
        let engine = &self.engine;
        let incident = self.config.incident_energy_ev;
        let seed = self.seed;
        let start = self.completed;
        let one = |i: usize| {
            let mut rng = trajectory_rng(seed, i as u64);
            run(engine, incident, &mut rng)
        };
        if self.config.parallel {
            (start..start + len).into_par_iter().map(one).collect()
        } else {
            (start..start + len).map(one).collect()
        }
    }

    fn finish_chunk(&mut self, len: usize) {
        self.completed += len;
        info!(
            completed = self.completed,
            total = self.config.trajectories,
            incident_energy_ev = self.config.incident_energy_ev,
            "chunk merged"
        );
    }
}
