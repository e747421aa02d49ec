// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Radiolysis Analysis
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Derived quantities over cascade batches: chemistry, energy accounting,
//! convergence, sensitivity and probability spectra.

pub mod convergence;
pub mod energy;
pub mod generations;
pub mod sensitivity;
pub mod species;
pub mod spectrum;
