// ─────────────────────────────────────────────────────────────────────
// SCPN Radiolysis — Species Production
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! Product species of the reactive channels (ionization, radical formation
//! and attachment, indices 0–10).

use radiolysis_types::constants::ATTACHMENT_INDEX;
use radiolysis_types::state::EventCounts;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Species {
    Ch4Ion,
    Ch3Ion,
    Ch2Ion,
    ChIon,
    CIon,
    HIon,
    H2Ion,
    HAnion,
    Ch3Radical,
    Ch2Radical,
    ChRadical,
    HRadical,
    H2,
}

impl Species {
    pub fn formula(self) -> &'static str {
        match self {
            Species::Ch4Ion => "CH₄⁺",
            Species::Ch3Ion => "CH₃⁺",
            Species::Ch2Ion => "CH₂⁺",
            Species::ChIon => "CH⁺",
            Species::CIon => "C⁺",
            Species::HIon => "H⁺",
            Species::H2Ion => "H₂⁺",
            Species::HAnion => "H⁻",
            Species::Ch3Radical => "CH₃*",
            Species::Ch2Radical => "CH₂*",
            Species::ChRadical => "CH*",
            Species::HRadical => "H*",
            Species::H2 => "H₂",
        }
    }
}

use Species::*;

/// Products per event for channels 0..=10, as (species, multiplicity).
pub const PRODUCTS: [&[(Species, u64)]; ATTACHMENT_INDEX + 1] = [
    &[(Ch4Ion, 1)],
    &[(Ch3Ion, 1), (HRadical, 1)],
    &[(Ch2Ion, 1), (H2, 1)],
    &[(Ch3Radical, 1), (HIon, 1)],
    &[(ChIon, 1), (H2, 1), (HRadical, 1)],
    &[(Ch2Radical, 1), (H2Ion, 1)],
    &[(CIon, 1), (H2, 2)],
    &[(Ch3Radical, 1), (HRadical, 1)],
    &[(Ch2Radical, 1), (H2, 1)],
    &[(ChRadical, 1), (H2, 1), (HRadical, 1)],
    &[(Ch3Radical, 1), (HAnion, 1)],
];

/// Net production of every species, from channel totals.
pub fn species_production(counts: &EventCounts) -> BTreeMap<Species, u64> {
    let mut out = BTreeMap::new();
    for (products, &n) in PRODUCTS.iter().zip(counts.iter()) {
        for &(species, multiplicity) in products.iter() {
            *out.entry(species).or_insert(0) += n * multiplicity;
        }
    }
    out
}

/// One methane molecule is consumed per reactive event.
pub fn methane_consumed(counts: &EventCounts) -> u64 {
    counts[..=ATTACHMENT_INDEX].iter().sum()
}

/// Species production with formulas, for reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeciesReport {
    pub methane_consumed: u64,
    pub produced: Vec<(&'static str, u64)>,
}

impl SpeciesReport {
    pub fn from_counts(counts: &EventCounts) -> Self {
        SpeciesReport {
            methane_consumed: methane_consumed(counts),
            produced: species_production(counts)
                .into_iter()
                .filter(|&(_, n)| n > 0)
                .map(|(s, n)| (s.formula(), n))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use radiolysis_types::constants::N_PROCESSES;

    #[test]
    fn test_single_channel_products() {
        let mut counts = [0u64; N_PROCESSES];
        counts[6] = 3; // C⁺ + 2H₂
        let prod = species_production(&counts);
        assert_eq!(prod.get(&CIon), Some(&3));
        assert_eq!(prod.get(&H2), Some(&6));
        assert_eq!(prod.len(), 2);
    }

    #[test]
    fn test_non_reactive_channels_ignored() {
        let mut counts = [0u64; N_PROCESSES];
        counts[11] = 100;
        counts[27] = 5;
        assert!(species_production(&counts).is_empty());
        assert_eq!(methane_consumed(&counts), 0);
    }

    #[test]
    fn test_hydrogen_and_carbon_balance() {
        // every reactive event conserves C=1 and H=4 of the methane consumed
        let carbon = |s: Species| match s {
            Ch4Ion | Ch3Ion | Ch2Ion | ChIon | CIon | Ch3Radical | Ch2Radical | ChRadical => 1,
            _ => 0,
        };
        let hydrogen = |s: Species| match s {
            Ch4Ion => 4,
            Ch3Ion | Ch3Radical => 3,
            Ch2Ion | Ch2Radical | H2Ion | H2 => 2,
            ChIon | ChRadical | HIon | HAnion | HRadical => 1,
            CIon => 0,
        };
        for (i, products) in PRODUCTS.iter().enumerate() {
            let c: u64 = products.iter().map(|&(s, m)| carbon(s) * m).sum();
            let h: u64 = products.iter().map(|&(s, m)| hydrogen(s) * m).sum();
            assert_eq!((c, h), (1, 4), "channel {i}");
        }
    }

    #[test]
    fn test_report_uses_formulas() {
        let mut counts = [0u64; N_PROCESSES];
        counts[0] = 2;
        counts[10] = 1;
        let report = SpeciesReport::from_counts(&counts);
        assert_eq!(report.methane_consumed, 3);
        assert!(report.produced.contains(&("CH₄⁺", 2)));
        assert!(report.produced.contains(&("H⁻", 1)));
        assert!(report.produced.contains(&("CH₃*", 1)));
    }
}
