// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Generation Profile
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use radiolysis_core::batch::GenerationBatch;
use serde::Serialize;

const ORDINALS: [&str; 10] = [
    "Primary",
    "Secondary",
    "Tertiary",
    "Quaternary",
    "Quinary",
    "Senary",
    "Septenary",
    "Octonary",
    "Nonary",
    "Denary",
];

/// Row label for generation `g`; deeper tiers fall back to a number.
pub fn generation_label(g: usize) -> String {
    ORDINALS
        .get(g)
        .map(|s| s.to_string())
        .unwrap_or_else(|| format!("Generation {g}"))
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationShare {
    pub label: String,
    pub events: u64,
    /// Share of all events in the batch.
    pub fraction: f64,
    /// Mean events per trajectory.
    pub per_trajectory: f64,
}

/// Per-generation event totals of a batch, trailing empty tiers dropped.
pub fn generation_profile(batch: &GenerationBatch) -> Vec<GenerationShare> {
    let totals = batch.generation_totals();
    let depth = totals.iter().rposition(|&n| n > 0).map_or(0, |i| i + 1);
    let all: u64 = totals.iter().sum();
    totals[..depth]
        .iter()
        .enumerate()
        .map(|(g, &events)| GenerationShare {
            label: generation_label(g),
            events,
            fraction: if all > 0 { events as f64 / all as f64 } else { 0.0 },
            per_trajectory: if batch.trajectories > 0 {
                events as f64 / batch.trajectories as f64
            } else {
                0.0
            },
        })
        .collect()
}
