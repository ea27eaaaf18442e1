use std::fmt::Display;

use itertools::Itertools;
use log::{debug, trace, warn};

use crate::{
    bar::Bar,
    catalog,
    category::Category,
    config::ResolverConfig,
    equipment::{MachineKind, ResistanceBands},
    inventory::EquipmentInventory,
    plate::PlateSet,
    weight::Weight,
};

/// How the handles of a dumbbell pair are made.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handle {
    /// Fixed dumbbells of this per-hand weight.
    Fixed(Weight),
    /// Short bars loaded with plates.
    Adjustable(Bar),
}

/// A concrete equipment setup for a target weight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadout {
    Barbell {
        bar: Bar,
        per_side: Vec<Weight>,
        total: Weight,
    },
    /// `per_side` is loaded on each end of both dumbbells; `total` is the pair.
    Dumbbells {
        handle: Handle,
        per_side: Vec<Weight>,
        total: Weight,
    },
    Resistance {
        bands: Vec<Weight>,
        total: Weight,
        approximate: bool,
    },
    Kettlebell {
        weight: Weight,
    },
    Machine {
        kind: MachineKind,
        setting: Weight,
    },
    Bodyweight {
        weight: Weight,
    },
    Infeasible {
        category: Category,
        target: Weight,
        reason: String,
        /// Closest achievable weights below and above the target.
        nearest: Vec<Weight>,
    },
}

impl Loadout {
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        !matches!(self, Loadout::Infeasible { .. })
    }

    #[must_use]
    pub fn total(&self) -> Option<Weight> {
        match self {
            Loadout::Barbell { total, .. }
            | Loadout::Dumbbells { total, .. }
            | Loadout::Resistance { total, .. } => Some(*total),
            Loadout::Kettlebell { weight } | Loadout::Bodyweight { weight } => Some(*weight),
            Loadout::Machine { setting, .. } => Some(*setting),
            Loadout::Infeasible { .. } => None,
        }
    }

    #[must_use]
    pub fn category(&self) -> Category {
        match self {
            Loadout::Barbell { .. } => Category::Barbell,
            Loadout::Dumbbells { .. } => Category::Dumbbells,
            Loadout::Resistance { .. } => Category::Resistance,
            Loadout::Kettlebell { .. } => Category::Kettlebell,
            Loadout::Machine { kind, .. } => Category::Machine(*kind),
            Loadout::Bodyweight { .. } => Category::Bodyweight,
            Loadout::Infeasible { category, .. } => *category,
        }
    }
}

impl Display for Loadout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Loadout::Barbell {
                bar,
                per_side,
                total,
            } => write!(f, "{bar} + {} per side = {total}", list(per_side)),
            Loadout::Dumbbells {
                handle: Handle::Fixed(weight),
                total,
                ..
            } => write!(f, "Dumbbells {weight} x 2 = {total}"),
            Loadout::Dumbbells {
                handle: Handle::Adjustable(bar),
                per_side,
                total,
            } => write!(f, "2 x {bar} + {} per end = {total}", list(per_side)),
            Loadout::Resistance {
                bands,
                total,
                approximate,
            } => {
                write!(f, "Bands {} = {total}", list(bands))?;
                if *approximate {
                    write!(f, " (approximation)")?;
                }
                Ok(())
            }
            Loadout::Kettlebell { weight } => write!(f, "Kettlebell {weight}"),
            Loadout::Machine { kind, setting } => write!(f, "{kind} at {setting}"),
            Loadout::Bodyweight { weight } => write!(f, "Bodyweight {weight}"),
            Loadout::Infeasible { reason, .. } => write!(f, "{reason}"),
        }
    }
}

fn list(weights: &[Weight]) -> String {
    format!("[{}]", weights.iter().join(", "))
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Miss {
    NoEquipment,
    Unreachable,
}

#[must_use]
pub fn resolve_loadout(
    inventory: &EquipmentInventory,
    target: Weight,
    category: Category,
) -> Loadout {
    resolve_loadout_with(inventory, target, category, &ResolverConfig::default())
}

/// Best achievable setup for `target` with the equipment of `category`.
///
/// An unreachable target is reported as [`Loadout::Infeasible`], never as an error.
#[must_use]
pub fn resolve_loadout_with(
    inventory: &EquipmentInventory,
    target: Weight,
    category: Category,
    config: &ResolverConfig,
) -> Loadout {
    let loadout = match category {
        Category::Barbell => barbell(inventory, target, config),
        Category::Dumbbells => dumbbells(inventory, target, config),
        Category::Resistance => bands(inventory, target, config),
        Category::Kettlebell => kettlebell(inventory, target, config),
        Category::Machine(kind) => machine(inventory, target, kind),
        Category::Bodyweight => bodyweight(inventory, target, config),
    };

    loadout.unwrap_or_else(|miss| infeasible(inventory, target, category, miss, config))
}

fn barbell(
    inventory: &EquipmentInventory,
    target: Weight,
    config: &ResolverConfig,
) -> Result<Loadout, Miss> {
    let mut miss = Miss::NoEquipment;

    for barbell in inventory.barbells() {
        let bar = barbell.bar();
        if let Some(per_side) = load(&bar, inventory.plates(), target, config) {
            let total = bar.loaded_weight(&per_side);
            return Ok(Loadout::Barbell {
                bar,
                per_side,
                total,
            });
        }
        miss = Miss::Unreachable;
    }

    Err(miss)
}

fn dumbbells(
    inventory: &EquipmentInventory,
    target: Weight,
    config: &ResolverConfig,
) -> Result<Loadout, Miss> {
    let mut miss = Miss::NoEquipment;

    if let Some(fixed) = inventory.fixed_dumbbells() {
        miss = Miss::Unreachable;
        if let Some(weight) = fixed
            .weights
            .iter()
            .copied()
            .filter(|weight| weight.times(2).abs_diff(target) <= config.tolerance)
            .min_by_key(|weight| weight.times(2).abs_diff(target))
        {
            return Ok(Loadout::Dumbbells {
                handle: Handle::Fixed(weight),
                per_side: Vec::new(),
                total: weight.times(2),
            });
        }
    }

    if let Some((bars, plates)) = inventory.adjustable_dumbbells() {
        miss = Miss::Unreachable;
        let bar = bars.bar();
        if let Some(per_side) = load(&bar, Some(plates), target, config) {
            let total = bar.loaded_weight(&per_side);
            return Ok(Loadout::Dumbbells {
                handle: Handle::Adjustable(bar),
                per_side,
                total,
            });
        }
    }

    Err(miss)
}

/// Plates for one end of `bar` that bring it to `target`.
fn load(
    bar: &Bar,
    plates: Option<&PlateSet>,
    target: Weight,
    config: &ResolverConfig,
) -> Option<Vec<Weight>> {
    let base = bar.base_weight();
    if target + config.tolerance < base {
        return None;
    }

    let delta = target - base;
    if delta <= config.tolerance {
        return Some(Vec::new());
    }

    let plates = plates?;
    let ends = bar.kind().required_similar_plates();

    plates
        .greedy_distribution(delta, ends, config.tolerance)
        .or_else(|| {
            trace!("greedy distribution of {delta} on {bar} failed, searching exhaustively");
            plates.exact_distribution(delta, ends, config.tolerance, config.max_combinations)
        })
}

fn bands(
    inventory: &EquipmentInventory,
    target: Weight,
    config: &ResolverConfig,
) -> Result<Loadout, Miss> {
    let bands = inventory.bands().ok_or(Miss::NoEquipment)?;

    // Heaviest first, so ties go to fewer and larger bands.
    let singles = bands
        .on_hand()
        .rev()
        .map(|(tension, _)| vec![tension])
        .collect::<Vec<_>>();
    if singles.is_empty() {
        return Err(Miss::NoEquipment);
    }
    let combinations = if bands.combinable {
        combinations(bands, config.max_combined_bands, config.max_combinations)
    } else {
        Vec::new()
    };

    let resistance = |bands: Vec<Weight>, approximate| {
        let total = bands.iter().copied().sum();
        Loadout::Resistance {
            bands,
            total,
            approximate,
        }
    };

    if let Some(exact) = closest(singles.iter().chain(&combinations), target)
        .filter(|(_, distance)| *distance <= config.tolerance)
    {
        return Ok(resistance(exact.0, false));
    }

    if let Some((single, distance)) = closest(singles.iter(), target) {
        if distance <= config.band_single_tolerance {
            return Ok(resistance(single, false));
        }
    }

    if let Some((combination, distance)) = closest(combinations.iter(), target) {
        if distance <= config.band_combination_tolerance {
            return Ok(resistance(combination, false));
        }
    }

    debug!("no band combination within tolerance of {target}, approximating");
    closest(singles.iter(), target)
        .map(|(single, _)| resistance(single, true))
        .ok_or(Miss::Unreachable)
}

/// Multisets of 2 up to `max_bands` bands, fewer bands first, heaviest first.
///
/// At most `max_combinations` search steps are taken.
fn combinations(
    bands: &ResistanceBands,
    max_bands: usize,
    max_combinations: usize,
) -> Vec<Vec<Weight>> {
    let tensions = bands.on_hand().rev().collect::<Vec<_>>();
    let mut found = Vec::new();
    let mut budget = max_combinations;

    for size in 2..=max_bands {
        multisets(
            &tensions,
            size,
            &mut Vec::new(),
            &mut found,
            &mut budget,
        );
        if budget == 0 {
            warn!("band combination search truncated at {} combinations", found.len());
            break;
        }
    }

    found
}

fn multisets(
    tensions: &[(Weight, usize)],
    size: usize,
    bands: &mut Vec<Weight>,
    found: &mut Vec<Vec<Weight>>,
    budget: &mut usize,
) {
    if bands.len() == size {
        found.push(bands.clone());
        return;
    }

    for (i, &(tension, count)) in tensions.iter().enumerate() {
        if *budget == 0 {
            return;
        }
        *budget -= 1;

        for n in (1..=count.min(size - bands.len())).rev() {
            bands.extend(std::iter::repeat_n(tension, n));
            multisets(&tensions[i + 1..], size, bands, found, budget);
            bands.truncate(bands.len() - n);
        }
    }
}

fn closest<'a>(
    candidates: impl Iterator<Item = &'a Vec<Weight>>,
    target: Weight,
) -> Option<(Vec<Weight>, Weight)> {
    candidates
        .map(|bands| (bands, bands.iter().copied().sum::<Weight>().abs_diff(target)))
        // `min_by_key` keeps the first of equally close candidates.
        .min_by_key(|(_, distance)| *distance)
        .map(|(bands, distance)| (bands.clone(), distance))
}

fn kettlebell(
    inventory: &EquipmentInventory,
    target: Weight,
    config: &ResolverConfig,
) -> Result<Loadout, Miss> {
    let kettlebells = inventory.kettlebells().ok_or(Miss::NoEquipment)?;

    kettlebells
        .weights
        .iter()
        .copied()
        .filter(|weight| weight.abs_diff(target) <= config.tolerance)
        .min_by_key(|weight| weight.abs_diff(target))
        .map(|weight| Loadout::Kettlebell { weight })
        .ok_or(Miss::Unreachable)
}

fn machine(
    inventory: &EquipmentInventory,
    target: Weight,
    kind: MachineKind,
) -> Result<Loadout, Miss> {
    let machine = inventory.machine(kind).ok_or(Miss::NoEquipment)?;

    Ok(Loadout::Machine {
        kind,
        setting: machine.nearest(target),
    })
}

fn bodyweight(
    inventory: &EquipmentInventory,
    target: Weight,
    config: &ResolverConfig,
) -> Result<Loadout, Miss> {
    let weight = inventory.body_weight().ok_or(Miss::NoEquipment)?;

    (weight.abs_diff(target) <= config.tolerance)
        .then_some(Loadout::Bodyweight { weight })
        .ok_or(Miss::Unreachable)
}

fn infeasible(
    inventory: &EquipmentInventory,
    target: Weight,
    category: Category,
    miss: Miss,
    config: &ResolverConfig,
) -> Loadout {
    let achievable = catalog::category_weights(inventory, category, config);
    let below = achievable.iter().rev().find(|weight| **weight < target);
    let above = achievable.iter().find(|weight| **weight > target);
    let nearest = below.into_iter().chain(above).copied().collect::<Vec<_>>();

    let reason = match miss {
        Miss::NoEquipment => format!("No {category} equipment available"),
        Miss::Unreachable if nearest.is_empty() => {
            format!("Cannot reach {target} with your {category} equipment")
        }
        Miss::Unreachable => format!(
            "Cannot reach {target} with your {category} equipment (closest: {})",
            nearest.iter().join(", ")
        ),
    };

    debug!("{reason}");

    Loadout::Infeasible {
        category,
        target,
        reason,
        nearest,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::{
        bar_kind::BarKind,
        equipment::{
            Barbell, BarbellKind, EquipmentEntry, FixedDumbbells, Kettlebells, Machine,
            ShortBarPair,
        },
        inventory::normalize,
    };

    fn w(units: f64) -> Weight {
        Weight::from_units(units).unwrap()
    }

    fn weights(units: &[f64]) -> Vec<Weight> {
        units.iter().map(|u| w(*u)).collect()
    }

    fn barbell_inventory(bar_weight: f64, plates: &[(f64, usize)]) -> EquipmentInventory {
        EquipmentInventory::new()
            .with(EquipmentEntry::Barbell(Barbell {
                kind: BarbellKind::Olympic,
                bar_weight: w(bar_weight),
                available: true,
            }))
            .with(EquipmentEntry::PlateSet(PlateSet::from_weights_map(plates)))
    }

    fn band_inventory(tensions: &[(f64, usize)], combinable: bool) -> EquipmentInventory {
        EquipmentInventory::new().with(EquipmentEntry::ResistanceBands(ResistanceBands {
            tensions: tensions.iter().map(|(t, c)| (w(*t), *c)).collect(),
            combinable,
            available: true,
        }))
    }

    fn home_gym() -> EquipmentInventory {
        normalize(&json!({
            "barbell": { "available": true, "bar_weight": 20 },
            "ez_bar": { "available": true, "bar_weight": 10 },
            "weight_plates": {
                "available": true,
                "plates": { "20": 2, "15": 2, "10": 4, "5": 6, "2.5": 4, "1.25": 8 }
            },
            "barbell_short_pair": { "available": true, "bar_weight": 2, "count": 2 },
            "dumbbells": { "available": true, "weights": [4, 6, 8] },
            "kettlebells": { "available": true, "weights": [12, 16, 24] },
            "resistance_bands": {
                "available": true,
                "combinable": true,
                "tensions": { "5": 2, "10": 1, "25": 1 }
            },
            "cable_machine": { "available": true, "max_weight": 80, "increment": 5 },
            "body_weight": 72.5
        }))
        .unwrap()
    }

    #[test]
    fn test_barbell_large_plates_first() {
        let inventory = barbell_inventory(20.0, &[(10.0, 4), (5.0, 4), (2.5, 4)]);

        assert_eq!(
            resolve_loadout(&inventory, w(70.0), Category::Barbell),
            Loadout::Barbell {
                bar: Bar::new(w(20.0), BarKind::Barbell),
                per_side: weights(&[10.0, 10.0, 5.0]),
                total: w(70.0),
            }
        );
    }

    #[test]
    fn test_barbell_within_tolerance() {
        let inventory = barbell_inventory(20.0, &[(10.0, 4), (5.0, 4), (2.5, 4)]);

        let loadout = resolve_loadout(&inventory, w(45.05), Category::Barbell);

        assert_eq!(
            loadout,
            Loadout::Barbell {
                bar: Bar::new(w(20.0), BarKind::Barbell),
                per_side: weights(&[10.0, 2.5]),
                total: w(45.0),
            }
        );
        assert_approx_eq!(loadout.total().unwrap().units(), 45.05, 0.1);
    }

    #[test]
    fn test_barbell_asymmetric_target_is_infeasible() {
        let inventory = barbell_inventory(20.0, &[(10.0, 4), (5.0, 4), (2.5, 4)]);

        assert_eq!(
            resolve_loadout(&inventory, w(47.5), Category::Barbell),
            Loadout::Infeasible {
                category: Category::Barbell,
                target: w(47.5),
                reason: "Cannot reach 47.5 with your Barbell equipment (closest: 45, 50)"
                    .to_string(),
                nearest: weights(&[45.0, 50.0]),
            }
        );
    }

    #[test]
    fn test_barbell_without_plates_is_infeasible() {
        let inventory = barbell_inventory(20.0, &[]);

        let loadout = resolve_loadout(&inventory, w(100.0), Category::Barbell);

        assert!(!loadout.is_feasible());
        assert_eq!(loadout.total(), None);
        assert_eq!(
            loadout,
            Loadout::Infeasible {
                category: Category::Barbell,
                target: w(100.0),
                reason: "Cannot reach 100 with your Barbell equipment (closest: 20)".to_string(),
                nearest: weights(&[20.0]),
            }
        );
    }

    #[test]
    fn test_barbell_below_bar_weight_is_infeasible() {
        let inventory = barbell_inventory(20.0, &[(10.0, 4)]);

        assert!(!resolve_loadout(&inventory, w(15.0), Category::Barbell).is_feasible());
    }

    #[test]
    fn test_barbell_falls_back_to_exhaustive_search() {
        let inventory = barbell_inventory(20.0, &[(5.0, 2), (3.0, 4)]);

        assert_eq!(
            resolve_loadout(&inventory, w(32.0), Category::Barbell),
            Loadout::Barbell {
                bar: Bar::new(w(20.0), BarKind::Barbell),
                per_side: weights(&[3.0, 3.0]),
                total: w(32.0),
            }
        );
    }

    #[test]
    fn test_barbell_tries_every_bar() {
        let inventory = barbell_inventory(20.0, &[(5.0, 2)]).with(EquipmentEntry::Barbell(
            Barbell {
                kind: BarbellKind::Ez,
                bar_weight: w(7.5),
                available: true,
            },
        ));

        assert_eq!(
            resolve_loadout(&inventory, w(17.5), Category::Barbell),
            Loadout::Barbell {
                bar: Bar::new(w(7.5), BarKind::Barbell),
                per_side: weights(&[5.0]),
                total: w(17.5),
            }
        );
    }

    #[test]
    fn test_no_barbell() {
        assert_eq!(
            resolve_loadout(&EquipmentInventory::new(), w(60.0), Category::Barbell),
            Loadout::Infeasible {
                category: Category::Barbell,
                target: w(60.0),
                reason: "No Barbell equipment available".to_string(),
                nearest: vec![],
            }
        );
    }

    #[test]
    fn test_fixed_dumbbells_preferred() {
        let inventory = home_gym();

        assert_eq!(
            resolve_loadout(&inventory, w(12.0), Category::Dumbbells),
            Loadout::Dumbbells {
                handle: Handle::Fixed(w(6.0)),
                per_side: vec![],
                total: w(12.0),
            }
        );
    }

    #[test]
    fn test_adjustable_dumbbells() {
        let inventory = home_gym();

        assert_eq!(
            resolve_loadout(&inventory, w(34.0), Category::Dumbbells),
            Loadout::Dumbbells {
                handle: Handle::Adjustable(Bar::new(w(2.0), BarKind::Dumbbell)),
                per_side: weights(&[5.0, 2.5]),
                total: w(34.0),
            }
        );
    }

    #[test]
    fn test_adjustable_dumbbells_need_four_plates() {
        let inventory = EquipmentInventory::new()
            .with(EquipmentEntry::ShortBarPair(ShortBarPair {
                bar_weight: w(2.0),
                count: 2,
                available: true,
            }))
            .with(EquipmentEntry::PlateSet(PlateSet::from_weights_map(&[(10.0, 2)])))
            .with(EquipmentEntry::FixedDumbbells(FixedDumbbells {
                weights: vec![],
                available: false,
            }));

        assert!(!resolve_loadout(&inventory, w(24.0), Category::Dumbbells).is_feasible());
    }

    #[rstest]
    #[case::exact_single(10.0, &[10.0], false)]
    #[case::close_single(11.5, &[10.0], false)]
    #[case::exact_combination(15.0, &[10.0, 5.0], false)]
    #[case::close_combination(42.0, &[25.0, 10.0, 5.0], false)]
    #[case::approximation(100.0, &[25.0], true)]
    fn test_bands(#[case] target: f64, #[case] expected: &[f64], #[case] approximate: bool) {
        let inventory = band_inventory(&[(5.0, 2), (10.0, 1), (25.0, 1)], true);

        assert_eq!(
            resolve_loadout(&inventory, w(target), Category::Resistance),
            Loadout::Resistance {
                bands: weights(expected),
                total: weights(expected).into_iter().sum(),
                approximate,
            }
        );
    }

    #[test]
    fn test_bands_not_combinable() {
        let inventory = band_inventory(&[(5.0, 2), (10.0, 1)], false);

        assert_eq!(
            resolve_loadout(&inventory, w(15.0), Category::Resistance),
            Loadout::Resistance {
                bands: weights(&[10.0]),
                total: w(10.0),
                approximate: true,
            }
        );
    }

    #[test]
    fn test_bands_tie_prefers_heavier_band() {
        let inventory = band_inventory(&[(10.0, 1), (20.0, 1)], false);

        assert_eq!(
            resolve_loadout(&inventory, w(15.0), Category::Resistance),
            Loadout::Resistance {
                bands: weights(&[20.0]),
                total: w(20.0),
                approximate: true,
            }
        );
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(23.0, 25.0)]
    #[case(500.0, 80.0)]
    fn test_machine(#[case] target: f64, #[case] expected: f64) {
        assert_eq!(
            resolve_loadout(
                &home_gym(),
                w(target),
                Category::Machine(MachineKind::Cable)
            ),
            Loadout::Machine {
                kind: MachineKind::Cable,
                setting: w(expected),
            }
        );
    }

    #[test]
    fn test_unavailable_machine() {
        let inventory = EquipmentInventory::new().with(EquipmentEntry::Machine(Machine {
            kind: MachineKind::LegPress,
            max_weight: w(200.0),
            increment: w(10.0),
            available: false,
        }));

        assert!(
            !resolve_loadout(&inventory, w(100.0), Category::Machine(MachineKind::LegPress))
                .is_feasible()
        );
    }

    #[test]
    fn test_kettlebell() {
        let inventory = EquipmentInventory::new().with(EquipmentEntry::Kettlebells(Kettlebells {
            weights: weights(&[12.0, 16.0]),
            available: true,
        }));

        assert_eq!(
            resolve_loadout(&inventory, w(16.0), Category::Kettlebell),
            Loadout::Kettlebell { weight: w(16.0) }
        );
        assert_eq!(
            resolve_loadout(&inventory, w(20.0), Category::Kettlebell),
            Loadout::Infeasible {
                category: Category::Kettlebell,
                target: w(20.0),
                reason: "Cannot reach 20 with your Kettlebell equipment (closest: 16)"
                    .to_string(),
                nearest: weights(&[16.0]),
            }
        );
    }

    #[test]
    fn test_bodyweight() {
        assert_eq!(
            resolve_loadout(&home_gym(), w(72.5), Category::Bodyweight),
            Loadout::Bodyweight { weight: w(72.5) }
        );
        assert_eq!(
            resolve_loadout(&home_gym(), w(200.0), Category::Bodyweight),
            Loadout::Infeasible {
                category: Category::Bodyweight,
                target: w(200.0),
                reason: "Cannot reach 200 with your Bodyweight equipment (closest: 72.5)"
                    .to_string(),
                nearest: weights(&[72.5]),
            }
        );
        assert!(
            !resolve_loadout(&EquipmentInventory::new(), w(70.0), Category::Bodyweight)
                .is_feasible()
        );
    }

    #[test]
    fn test_band_combinations_order() {
        let inventory = band_inventory(&[(5.0, 2), (10.0, 1), (25.0, 1)], true);

        assert_eq!(
            combinations(inventory.bands().unwrap(), 3, 1000),
            vec![
                weights(&[25.0, 10.0]),
                weights(&[25.0, 5.0]),
                weights(&[10.0, 5.0]),
                weights(&[5.0, 5.0]),
                weights(&[25.0, 10.0, 5.0]),
                weights(&[25.0, 5.0, 5.0]),
                weights(&[10.0, 5.0, 5.0]),
            ]
        );
    }

    #[test]
    fn test_band_combinations_bounded() {
        let tensions = (1..=300).map(|t| (f64::from(t), 3)).collect::<Vec<_>>();
        let inventory = band_inventory(&tensions, true);

        assert!(combinations(inventory.bands().unwrap(), 3, 1000).len() <= 1000);
        assert_eq!(
            resolve_loadout(&inventory, w(2000.0), Category::Resistance),
            Loadout::Resistance {
                bands: weights(&[300.0]),
                total: w(300.0),
                approximate: true,
            }
        );
    }

    #[rstest]
    #[case::barbell(Category::Barbell, 2)]
    #[case::dumbbells(Category::Dumbbells, 4)]
    fn test_loadouts_are_symmetric(#[case] category: Category, #[case] ends: usize) {
        let inventory = home_gym();
        let plates = inventory.plates().unwrap();

        for weight in catalog::category_weights(&inventory, category, &ResolverConfig::default()) {
            let loadout = resolve_loadout(&inventory, weight, category);
            let per_side = match &loadout {
                Loadout::Barbell { per_side, .. } | Loadout::Dumbbells { per_side, .. } => {
                    per_side
                }
                loadout => panic!("unexpected loadout {loadout:?}"),
            };

            let used = per_side.iter().fold(BTreeMap::new(), |mut used, plate| {
                *used.entry(*plate).or_insert(0) += ends;
                used
            });
            for (plate, count) in used {
                assert!(
                    count <= plates.count(plate),
                    "{loadout} uses {count} plates of {plate}"
                );
            }
        }
    }

    #[test]
    fn test_achievable_weights_resolve() {
        let inventory = home_gym();

        for category in Category::all() {
            for weight in catalog::category_weights(&inventory, category, &ResolverConfig::default())
            {
                let loadout = resolve_loadout(&inventory, weight, category);

                assert!(loadout.is_feasible(), "{category} {weight}: {loadout}");
                assert_eq!(loadout.category(), category);
                assert!(
                    loadout.total().unwrap().abs_diff(weight) <= w(0.1),
                    "{category} {weight}: {loadout}"
                );
            }
        }
    }

    #[rstest]
    #[case(
        Loadout::Barbell {
            bar: Bar::new(w(20.0), BarKind::Barbell),
            per_side: weights(&[10.0, 2.5]),
            total: w(45.0),
        },
        "Barbell (20) + [10, 2.5] per side = 45"
    )]
    #[case(
        Loadout::Dumbbells {
            handle: Handle::Adjustable(Bar::new(w(2.0), BarKind::Dumbbell)),
            per_side: weights(&[5.0]),
            total: w(24.0),
        },
        "2 x Dumbbell (2) + [5] per end = 24"
    )]
    #[case(
        Loadout::Resistance { bands: weights(&[25.0]), total: w(25.0), approximate: true },
        "Bands [25] = 25 (approximation)"
    )]
    fn test_display(#[case] loadout: Loadout, #[case] expected: &str) {
        assert_eq!(loadout.to_string(), expected);
    }
}
