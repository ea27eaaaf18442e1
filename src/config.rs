use serde::Deserialize;

use crate::{equipment::BarbellKind, weight::Weight};

/// Tolerances, bounds and defaults used by normalization, enumeration and
/// loadout resolution.
///
/// | Field                        | Default | Meaning                                          |
/// |------------------------------|---------|--------------------------------------------------|
/// | `tolerance`                  | 0.1     | largest error of a plate or exact loadout        |
/// | `band_single_tolerance`      | 2.5     | largest error when using a single band           |
/// | `band_combination_tolerance` | 5       | largest error when combining bands               |
/// | `max_combined_bands`         | 3       | bands worn at once                               |
/// | `catalog_max`                | 500     | heaviest weight listed in the catalog            |
/// | `max_combinations`           | 100000  | bound on sums or branches explored per search    |
/// | `default_barbell_weight`     | 20      | olympic bar weight when not configured           |
/// | `default_ez_bar_weight`      | 10      | EZ bar weight when not configured                |
/// | `default_trap_bar_weight`    | 25      | trap bar weight when not configured              |
/// | `default_short_bar_weight`   | 2       | dumbbell handle weight when not configured       |
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub tolerance: Weight,
    pub band_single_tolerance: Weight,
    pub band_combination_tolerance: Weight,
    pub max_combined_bands: usize,
    pub catalog_max: Weight,
    pub max_combinations: usize,
    pub default_barbell_weight: Weight,
    pub default_ez_bar_weight: Weight,
    pub default_trap_bar_weight: Weight,
    pub default_short_bar_weight: Weight,
}

impl ResolverConfig {
    #[must_use]
    pub fn default_bar_weight(&self, kind: BarbellKind) -> Weight {
        match kind {
            BarbellKind::Olympic => self.default_barbell_weight,
            BarbellKind::Ez => self.default_ez_bar_weight,
            BarbellKind::Trap => self.default_trap_bar_weight,
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        ResolverConfig {
            tolerance: Weight::from_milli(100),
            band_single_tolerance: Weight::from_milli(2_500),
            band_combination_tolerance: Weight::from_milli(5_000),
            max_combined_bands: 3,
            catalog_max: Weight::from_milli(500_000),
            max_combinations: 100_000,
            default_barbell_weight: Weight::from_milli(20_000),
            default_ez_bar_weight: Weight::from_milli(10_000),
            default_trap_bar_weight: Weight::from_milli(25_000),
            default_short_bar_weight: Weight::from_milli(2_000),
        }
    }
}
