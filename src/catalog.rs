use std::collections::BTreeSet;

use log::{debug, warn};

use crate::{
    bar::Bar, category::Category, config::ResolverConfig, equipment::MachineKind,
    inventory::EquipmentInventory, plate::PlateSet, weight::Weight,
};

/// Sorted, deduplicated weights for the categories behind
/// `required_equipment_kinds`, plus the body weight, within `0..=catalog_max`.
///
/// An empty tag list selects every category.
#[must_use]
pub fn achievable_weights<S: AsRef<str>>(
    inventory: &EquipmentInventory,
    required_equipment_kinds: &[S],
) -> Vec<Weight> {
    achievable_weights_with(
        inventory,
        required_equipment_kinds,
        &ResolverConfig::default(),
    )
}

#[must_use]
pub fn achievable_weights_with<S: AsRef<str>>(
    inventory: &EquipmentInventory,
    required_equipment_kinds: &[S],
    config: &ResolverConfig,
) -> Vec<Weight> {
    let weights = Category::from_tags(required_equipment_kinds)
        .into_iter()
        .flat_map(|category| category_weights(inventory, category, config))
        .filter(|weight| *weight <= config.catalog_max)
        .collect::<BTreeSet<_>>();

    debug!("{} achievable weights", weights.len());

    weights.into_iter().collect()
}

/// Every weight one category of the inventory can produce, ascending.
#[must_use]
pub fn category_weights(
    inventory: &EquipmentInventory,
    category: Category,
    config: &ResolverConfig,
) -> Vec<Weight> {
    let weights = match category {
        Category::Barbell => barbell_weights(inventory, config),
        Category::Dumbbells => dumbbell_weights(inventory, config),
        Category::Kettlebell => kettlebell_weights(inventory),
        Category::Resistance => band_tensions(inventory, config),
        Category::Machine(kind) => machine_weights(inventory, kind, config),
        Category::Bodyweight => inventory.body_weight().into_iter().collect(),
    };

    debug!("{category}: {} weights", weights.len());

    weights.into_iter().collect()
}

/// Bar plus a symmetric load on both sides, for each available barbell.
#[must_use]
pub fn barbell_weights(inventory: &EquipmentInventory, config: &ResolverConfig) -> BTreeSet<Weight> {
    inventory
        .barbells()
        .flat_map(|barbell| loaded_weights(&barbell.bar(), inventory.plates(), config))
        .collect()
}

/// Pair totals of fixed dumbbells and of short bars loaded identically with plates.
#[must_use]
pub fn dumbbell_weights(
    inventory: &EquipmentInventory,
    config: &ResolverConfig,
) -> BTreeSet<Weight> {
    let fixed = inventory
        .fixed_dumbbells()
        .into_iter()
        .flat_map(|dumbbells| dumbbells.weights.iter().map(|weight| weight.times(2)));

    let adjustable = inventory
        .adjustable_dumbbells()
        .into_iter()
        .flat_map(|(bars, plates)| loaded_weights(&bars.bar(), Some(plates), config));

    fixed.chain(adjustable).collect()
}

#[must_use]
pub fn kettlebell_weights(inventory: &EquipmentInventory) -> BTreeSet<Weight> {
    inventory
        .kettlebells()
        .into_iter()
        .flat_map(|kettlebells| kettlebells.weights.iter().copied())
        .collect()
}

/// Machine ladder values up to `catalog_max`, at most `max_combinations` of them.
#[must_use]
pub fn machine_weights(
    inventory: &EquipmentInventory,
    kind: MachineKind,
    config: &ResolverConfig,
) -> BTreeSet<Weight> {
    let Some(machine) = inventory.machine(kind) else {
        return BTreeSet::new();
    };

    let weights = machine
        .ladder()
        .take_while(|weight| *weight <= config.catalog_max)
        .take(config.max_combinations)
        .collect::<BTreeSet<_>>();
    if weights.len() >= config.max_combinations {
        warn!("{kind} ladder truncated at {} weights", weights.len());
    }

    weights
}

/// Single band tensions, and if the bands are combinable, the sums of up to
/// `max_combined_bands` bands worn together.
#[must_use]
pub fn band_tensions(inventory: &EquipmentInventory, config: &ResolverConfig) -> BTreeSet<Weight> {
    let Some(bands) = inventory.bands() else {
        return BTreeSet::new();
    };
    let max_bands = if bands.combinable {
        config.max_combined_bands.max(1)
    } else {
        1
    };

    // (tension, number of bands)
    let mut sums = BTreeSet::from([(Weight::ZERO, 0)]);

    for (tension, count) in bands.on_hand() {
        let mut next = sums.clone();
        for (sum, used) in &sums {
            for n in 1..=count.min(max_bands - used) {
                let total = *sum + tension.times(n);
                if total > config.catalog_max {
                    break;
                }
                if next.len() >= config.max_combinations {
                    warn!("band combination search truncated at {} sums", next.len());
                    return worn(next);
                }
                next.insert((total, used + n));
            }
        }
        sums = next;
    }

    worn(sums)
}

fn worn(sums: BTreeSet<(Weight, usize)>) -> BTreeSet<Weight> {
    sums.into_iter()
        .filter(|(_, used)| *used > 0)
        .map(|(sum, _)| sum)
        .collect()
}

fn loaded_weights(
    bar: &Bar,
    plates: Option<&PlateSet>,
    config: &ResolverConfig,
) -> BTreeSet<Weight> {
    let Some(plates) = plates else {
        return BTreeSet::from([bar.base_weight()]);
    };
    let ends = bar.kind().required_similar_plates();
    let max_per_side = Weight::from_milli(
        config
            .catalog_max
            .saturating_sub(bar.base_weight())
            .milli()
            / u32::try_from(ends).unwrap_or(u32::MAX),
    );

    plates
        .symmetric_combinations(ends, max_per_side, config.max_combinations)
        .into_iter()
        .map(|per_side| bar.base_weight() + per_side.times(ends))
        .collect()
}
