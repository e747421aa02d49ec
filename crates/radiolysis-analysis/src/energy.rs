// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Energy Ledger
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Where the incident energy went.
//!
//! Each channel is charged `count × loss`, except attachment, which absorbs
//! the whole electron and is charged the accumulated attachment energy.

use radiolysis_core::batch::{GenerationBatch, StandardBatch};
use radiolysis_core::tables::{ProcessCategory, ProcessTable};
use radiolysis_types::constants::{ATTACHMENT_INDEX, N_PROCESSES};
use radiolysis_types::state::EventCounts;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyLedger {
    /// Energy per channel [eV].
    pub per_channel_ev: [f64; N_PROCESSES],
    /// Energy of electrons that ended below cutoff [eV].
    pub terminating_ev: f64,
}

/// Incident vs. accounted energy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EnergyBalance {
    pub input_ev: f64,
    pub accounted_ev: f64,
    pub residual_ev: f64,
    /// `residual / input`.
    pub relative: f64,
}

impl EnergyLedger {
    pub fn new(
        table: &ProcessTable,
        counts: &EventCounts,
        terminating_ev: f64,
        attachment_ev: f64,
    ) -> Self {
        let mut per_channel_ev = [0.0; N_PROCESSES];
        for (slot, (p, &n)) in per_channel_ev
            .iter_mut()
            .zip(table.processes().iter().zip(counts.iter()))
        {
            *slot = n as f64 * p.energy_loss_ev;
        }
        per_channel_ev[ATTACHMENT_INDEX] = attachment_ev;
        EnergyLedger {
            per_channel_ev,
            terminating_ev,
        }
    }

    pub fn from_standard(table: &ProcessTable, batch: &StandardBatch) -> Self {
        Self::new(
            table,
            &batch.channel_totals(),
            batch.terminating_energy_ev,
            batch.attachment_energy_ev,
        )
    }

    pub fn from_generations(table: &ProcessTable, batch: &GenerationBatch) -> Self {
        Self::new(
            table,
            &batch.channel_totals(),
            batch.terminating_energy_ev,
            batch.attachment_energy_ev,
        )
    }

    pub fn total_ev(&self) -> f64 {
        self.per_channel_ev.iter().sum::<f64>() + self.terminating_ev
    }

    /// Energy summed per channel family.
    pub fn by_category(&self, table: &ProcessTable) -> Vec<(ProcessCategory, f64)> {
        let mut out: Vec<(ProcessCategory, f64)> = Vec::new();
        for (p, &e) in table.processes().iter().zip(self.per_channel_ev.iter()) {
            match out.iter_mut().find(|(c, _)| *c == p.category) {
                Some((_, acc)) => *acc += e,
                None => out.push((p.category, e)),
            }
        }
        out
    }

    /// Compare against `incident_ev × trajectories`.
    pub fn balance(&self, incident_ev: f64, trajectories: usize) -> EnergyBalance {
        let input_ev = incident_ev * trajectories as f64;
        let accounted_ev = self.total_ev();
        let residual_ev = input_ev - accounted_ev;
        let relative = if input_ev > 0.0 { residual_ev / input_ev } else { 0.0 };
        EnergyBalance {
            input_ev,
            accounted_ev,
            residual_ev,
            relative,
        }
    }
}
