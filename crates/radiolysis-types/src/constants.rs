// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Constants
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
/// Number of electron–methane interaction channels.
pub const N_PROCESSES: usize = 28;

/// Number of ionization channels (indices 0..7).
pub const N_IONIZATION: usize = 7;

/// Index of the dissociative attachment channel CH₄ + e⁻ → CH₃* + H⁻.
pub const ATTACHMENT_INDEX: usize = 10;

/// Rydberg-scale energy used by the empirical fit formulas [keV].
pub const E_RYDBERG_KEV: f64 = 1.36e-2;

/// Reference cross section of the empirical fit formulas [cm²].
pub const SIGMA_0_CM2: f64 = 1.0e-16;

/// Default tracking cutoff [eV].
pub const DEFAULT_CUTOFF_EV: f64 = 1.0;

/// Cross-section multiplier applied to the manipulated channel in sensitivity runs.
pub const DEFAULT_SENSITIVITY_FACTOR: f64 = 1.10;

/// Trajectories per batch chunk.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Pending-electron capacity of one cascade. Every transition at least halves
/// the energy of the branch being descended, so depth grows like log2(E/cutoff).
pub const DEFAULT_STACK_CAPACITY: usize = 20;

/// Generation rows allocated up front by the generation tally.
pub const DEFAULT_GENERATION_TIERS: usize = 10;

/// eV per keV.
pub const EV_PER_KEV: f64 = 1000.0;
