// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Trajectory Seeding
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Independent random streams per trajectory.
//!
//! Trajectory `i` of a batch seeded with `s` always draws from the same
//! stream, whichever chunk or worker thread runs it.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64 finalizer applied to `batch_seed + (index + 1)·γ`.
pub fn trajectory_seed(batch_seed: u64, index: u64) -> u64 {
    let mut z = batch_seed.wrapping_add(index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

pub fn trajectory_rng(batch_seed: u64, index: u64) -> StdRng {
    StdRng::seed_from_u64(trajectory_seed(batch_seed, index))
}

/// Fixed seed if given, otherwise one draw from the thread RNG.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| rand::thread_rng().gen())
}
