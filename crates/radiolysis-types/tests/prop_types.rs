// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Property-Based Tests (proptest) for radiolysis-types
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Property-based tests for radiolysis-types using proptest.
//!
//! Covers: result merging, configuration validation bounds,
//! configuration serialization roundtrip.

use proptest::prelude::*;
use radiolysis_types::config::SimulationConfig;
use radiolysis_types::constants::N_PROCESSES;
use radiolysis_types::state::SimulationResult;

fn result_from(counts: &[u64], terminating: f64, attachment: f64) -> SimulationResult {
    let mut r = SimulationResult::new();
    for (slot, &n) in r.event_counts.iter_mut().zip(counts.iter()) {
        *slot = n;
    }
    r.terminating_energy_ev = terminating;
    r.attachment_energy_ev = attachment;
    r
}

// ── Merge Properties ─────────────────────────────────────────────────

proptest! {
    /// Merging adds totals and is order-independent for counts.
    #[test]
    fn merge_commutes_on_counts(
        a in prop::collection::vec(0u64..1000, N_PROCESSES),
        b in prop::collection::vec(0u64..1000, N_PROCESSES),
        ta in 0.0f64..1e4,
        tb in 0.0f64..1e4,
    ) {
        let ra = result_from(&a, ta, 0.0);
        let rb = result_from(&b, tb, 1.0);

        let mut ab = ra.clone();
        ab.merge(&rb);
        let mut ba = rb.clone();
        ba.merge(&ra);

        prop_assert_eq!(ab.event_counts, ba.event_counts);
        prop_assert_eq!(ab.total_events(), ra.total_events() + rb.total_events());
        prop_assert!((ab.terminating_energy_ev - (ta + tb)).abs() < 1e-9);
        prop_assert!((ab.attachment_energy_ev - 1.0).abs() < 1e-12);
    }

    /// Merging an empty result changes nothing.
    #[test]
    fn merge_identity(a in prop::collection::vec(0u64..1000, N_PROCESSES), t in 0.0f64..1e4) {
        let ra = result_from(&a, t, 2.0);
        let mut merged = ra.clone();
        merged.merge(&SimulationResult::default());
        prop_assert_eq!(merged, ra);
    }
}

// ── Configuration Properties ─────────────────────────────────────────

proptest! {
    /// Any cutoff strictly below the incident energy with positive counts validates.
    #[test]
    fn valid_region_accepted(
        incident in 2.0f64..2e5,
        frac in 0.001f64..0.999,
        trajectories in 1usize..100_000,
        chunk in 1usize..5000,
    ) {
        let mut cfg = SimulationConfig::new(incident, trajectories).with_chunk_size(chunk);
        cfg.cutoff_energy_ev = incident * frac;
        prop_assert!(cfg.validate().is_ok());
    }

    /// Cutoff at or above the incident energy is rejected.
    #[test]
    fn cutoff_above_incident_rejected(incident in 1.0f64..1e5, excess in 0.0f64..1e3) {
        let mut cfg = SimulationConfig::new(incident, 10);
        cfg.cutoff_energy_ev = incident + excess;
        prop_assert!(cfg.validate().is_err());
    }

    /// Manipulated index is accepted exactly for the 28 channels.
    #[test]
    fn manipulated_index_bounds(process in 0usize..64) {
        let cfg = SimulationConfig::new(1000.0, 10).with_manipulated(process);
        prop_assert_eq!(cfg.validate().is_ok(), process < N_PROCESSES);
    }

    /// JSON roundtrip preserves every field.
    #[test]
    fn json_roundtrip(
        incident_kev in 1u32..200,
        trajectories in 1usize..100_000,
        seed in proptest::option::of(any::<u64>()),
        parallel in any::<bool>(),
    ) {
        let mut cfg = SimulationConfig::new(incident_kev as f64 * 1000.0, trajectories);
        cfg.seed = seed;
        cfg.parallel = parallel;
        let json = serde_json::to_string(&cfg).unwrap();
        let back: SimulationConfig = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, cfg);
    }
}
