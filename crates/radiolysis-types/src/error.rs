// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Error
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RadiolysisError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Physics constraint violated: {0}")]
    PhysicsViolation(String),

    #[error("Cascade stack overflow: capacity={capacity}, pending electron at {energy_ev} eV")]
    StackOverflow { capacity: usize, energy_ev: f64 },

    #[error("Process index out of range: {0} (expected 0..28)")]
    InvalidProcess(usize),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type RadiolysisResult<T> = Result<T, RadiolysisError>;
