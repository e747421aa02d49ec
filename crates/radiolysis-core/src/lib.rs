//! Energy-domain Monte Carlo of electron cascades in methane.
//!
//! Process tables and cross sections feed an event sampler; the cascade
//! engine drives one primary and every electron it spawns, and the batch
//! runner aggregates many independent cascades.

pub mod batch;
pub mod cascade;
pub mod cross_section;
pub mod generation;
pub mod rng;
pub mod sampler;
pub mod tables;
