// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Cascade Engine
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Stack-driven electron cascade in the energy domain.
//!
//! One primary electron is pushed onto a LIFO stack. Each pop samples a
//! channel and applies its transition:
//! - ionization: `E - loss` is split between the continuing electron and a
//!   secondary drawn from a distribution biased towards the cutoff,
//! - attachment: the electron and its remaining energy are absorbed,
//! - every other channel: the fixed energy loss is subtracted.
//!
//! Electrons below cutoff deposit their energy as terminating energy and are
//! never pushed. The cascade ends when the stack is empty.

use crate::cross_section::CrossSectionEvaluator;
use crate::sampler::{CrossSectionSampler, EventSelector};
use crate::tables::{ProcessCategory, ProcessTable};
use rand::Rng;
use radiolysis_types::config::SimulationConfig;
use radiolysis_types::constants::N_PROCESSES;
use radiolysis_types::error::{RadiolysisError, RadiolysisResult};
use radiolysis_types::state::{Electron, EventCounts, SimulationResult};
use tracing::warn;

/// Destination for per-event records of a cascade.
pub trait EventTally {
    fn record(&mut self, electron: &Electron, process: usize);
}

impl EventTally for EventCounts {
    fn record(&mut self, _electron: &Electron, process: usize) {
        self[process] += 1;
    }
}

/// Energy that left the tracked population without a per-event loss.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyDeposit {
    /// Sub-cutoff electrons and electrons with no open channel [eV].
    pub terminating_ev: f64,
    /// Electrons absorbed by attachment [eV].
    pub attachment_ev: f64,
}

/// Fixed-capacity LIFO of pending electrons. A full stack is an error, never
/// a silent overwrite.
#[derive(Debug, Clone)]
pub struct CascadeStack {
    pending: Vec<Electron>,
    capacity: usize,
}

impl CascadeStack {
    pub fn with_capacity(capacity: usize) -> Self {
        CascadeStack {
            pending: Vec::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, electron: Electron) -> RadiolysisResult<()> {
        if self.pending.len() >= self.capacity {
            return Err(RadiolysisError::StackOverflow {
                capacity: self.capacity,
                energy_ev: electron.energy_ev,
            });
        }
        self.pending.push(electron);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<Electron> {
        self.pending.pop()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Energies leaving an ionization, before the cutoff test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonizationSplit {
    pub continuing_ev: f64,
    pub secondary_ev: f64,
}

/// Partition `energy_ev - loss_ev` between the continuing and the ejected electron.
///
/// With `avail = (E - loss) / 2` the secondary energy is
/// `cutoff·avail / (avail - u·(avail - cutoff))`, which runs from `cutoff`
/// at `u = 0` to `avail` as `u → 1`. The continuing electron keeps the rest.
pub fn split_ionization(energy_ev: f64, loss_ev: f64, cutoff_ev: f64, u: f64) -> IonizationSplit {
    let available = energy_ev - loss_ev;
    let half = available / 2.0;
    let secondary_ev = (cutoff_ev * half) / (half - u * (half - cutoff_ev));
    IonizationSplit {
        continuing_ev: available - secondary_ev,
        secondary_ev,
    }
}

/// Result of applying one sampled channel to one electron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Ionized(IonizationSplit),
    Degraded { remaining_ev: f64 },
    Attached { absorbed_ev: f64 },
}

/// Cascade driver shared by the standard and generation-tracking runs.
#[derive(Debug, Clone)]
pub struct CascadeEngine<'a, S> {
    table: &'a ProcessTable,
    selector: S,
    cutoff_ev: f64,
    stack_capacity: usize,
}

impl<'a> CascadeEngine<'a, CrossSectionSampler<'a>> {
    /// Engine sampling from the cross sections of `table`, set up from `config`.
    pub fn from_config(table: &'a ProcessTable, config: &SimulationConfig) -> RadiolysisResult<Self> {
        config.validate()?;
        let evaluator = CrossSectionEvaluator::from_config(table, config)?;
        Ok(CascadeEngine::new(
            table,
            CrossSectionSampler::new(evaluator),
            config.cutoff_energy_ev,
            config.stack_capacity,
        ))
    }
}

impl<'a, S: EventSelector> CascadeEngine<'a, S> {
    pub fn new(table: &'a ProcessTable, selector: S, cutoff_ev: f64, stack_capacity: usize) -> Self {
        CascadeEngine {
            table,
            selector,
            cutoff_ev,
            stack_capacity,
        }
    }

    pub fn table(&self) -> &'a ProcessTable {
        self.table
    }

    pub fn selector(&self) -> &S {
        &self.selector
    }

    pub fn cutoff_ev(&self) -> f64 {
        self.cutoff_ev
    }

    pub fn stack_capacity(&self) -> usize {
        self.stack_capacity
    }

    /// Run one cascade and return per-channel counts and energy totals.
    pub fn run<R: Rng + ?Sized>(
        &self,
        incident_ev: f64,
        rng: &mut R,
    ) -> RadiolysisResult<SimulationResult> {
        let mut counts: EventCounts = [0; N_PROCESSES];
        let deposit = self.run_with_tally(incident_ev, &mut counts, rng)?;
        Ok(SimulationResult {
            event_counts: counts,
            terminating_energy_ev: deposit.terminating_ev,
            attachment_energy_ev: deposit.attachment_ev,
        })
    }

    /// Run one cascade, recording every event into `tally`.
    pub fn run_with_tally<T: EventTally + ?Sized, R: Rng + ?Sized>(
        &self,
        incident_ev: f64,
        tally: &mut T,
        rng: &mut R,
    ) -> RadiolysisResult<EnergyDeposit> {
        if !incident_ev.is_finite() || incident_ev <= 0.0 {
            return Err(RadiolysisError::PhysicsViolation(format!(
                "incident energy must be finite and > 0, got {incident_ev}"
            )));
        }

        let mut stack = CascadeStack::with_capacity(self.stack_capacity);
        let mut deposit = EnergyDeposit::default();
        self.settle(Electron::primary(incident_ev), &mut stack, &mut deposit)?;

        while let Some(electron) = stack.pop() {
            let Some(process) = self.selector.select(electron.energy_ev, rng) else {
                warn!(
                    energy_ev = electron.energy_ev,
                    "no open channel, depositing electron as terminating energy"
                );
                deposit.terminating_ev += electron.energy_ev;
                continue;
            };
            let transition = self.transition(&electron, process, rng)?;
            tally.record(&electron, process);

            match transition {
                Transition::Ionized(split) => {
                    self.settle(electron.continuing(split.continuing_ev), &mut stack, &mut deposit)?;
                    self.settle(electron.secondary(split.secondary_ev), &mut stack, &mut deposit)?;
                }
                Transition::Degraded { remaining_ev } => {
                    self.settle(electron.continuing(remaining_ev), &mut stack, &mut deposit)?;
                }
                Transition::Attached { absorbed_ev } => {
                    deposit.attachment_ev += absorbed_ev;
                }
            }
        }
        Ok(deposit)
    }

    /// Apply channel `process` to `electron`.
    pub fn transition<R: Rng + ?Sized>(
        &self,
        electron: &Electron,
        process: usize,
        rng: &mut R,
    ) -> RadiolysisResult<Transition> {
        let p = self.table.process(process)?;
        let energy = electron.energy_ev;
        if p.energy_loss_ev > energy {
            return Err(RadiolysisError::PhysicsViolation(format!(
                "channel {} ({} eV loss) selected for a {energy} eV electron",
                p.code, p.energy_loss_ev
            )));
        }
        Ok(match p.category {
            ProcessCategory::Ionization => {
                let u: f64 = rng.gen();
                Transition::Ionized(split_ionization(energy, p.energy_loss_ev, self.cutoff_ev, u))
            }
            ProcessCategory::Attachment => Transition::Attached { absorbed_ev: energy },
            _ => Transition::Degraded {
                remaining_ev: energy - p.energy_loss_ev,
            },
        })
    }

    fn settle(
        &self,
        electron: Electron,
        stack: &mut CascadeStack,
        deposit: &mut EnergyDeposit,
    ) -> RadiolysisResult<()> {
        if electron.energy_ev < self.cutoff_ev {
            deposit.terminating_ev += electron.energy_ev;
            Ok(())
        } else {
            stack.push(electron)
        }
    }
}
