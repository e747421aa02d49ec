// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — State
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use crate::constants::N_PROCESSES;

/// Per-channel event counts of one trajectory or an aggregate.
pub type EventCounts = [u64; N_PROCESSES];

/// A pending electron in a cascade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Electron {
    /// Kinetic energy [eV].
    pub energy_ev: f64,
    /// Cascade depth: 0 for the primary, parent + 1 for an ionization secondary.
    pub generation: u32,
}

impl Electron {
    pub fn primary(energy_ev: f64) -> Self {
        Electron {
            energy_ev,
            generation: 0,
        }
    }

    /// Same generation, new energy (inelastic loss or the continuing half of an ionization).
    pub fn continuing(&self, energy_ev: f64) -> Self {
        Electron {
            energy_ev,
            generation: self.generation,
        }
    }

    /// Electron ejected by an ionization of `self`.
    pub fn secondary(&self, energy_ev: f64) -> Self {
        Electron {
            energy_ev,
            generation: self.generation + 1,
        }
    }
}

/// Outcome of a single cascade.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    pub event_counts: EventCounts,
    /// Energy of electrons that fell below cutoff [eV].
    pub terminating_energy_ev: f64,
    /// Energy absorbed by dissociative attachment [eV].
    pub attachment_energy_ev: f64,
}

impl SimulationResult {
    pub fn new() -> Self {
        SimulationResult {
            event_counts: [0; N_PROCESSES],
            terminating_energy_ev: 0.0,
            attachment_energy_ev: 0.0,
        }
    }

    pub fn total_events(&self) -> u64 {
        self.event_counts.iter().sum()
    }

    /// Element-wise sum of counts and energies.
    pub fn merge(&mut self, other: &SimulationResult) {
        for (acc, &n) in self.event_counts.iter_mut().zip(other.event_counts.iter()) {
            *acc += n;
        }
        self.terminating_energy_ev += other.terminating_energy_ev;
        self.attachment_energy_ev += other.attachment_energy_ev;
    }
}

impl Default for SimulationResult {
    fn default() -> Self {
        Self::new()
    }
}
