use std::collections::{BTreeMap, BTreeSet};

use log::debug;
use serde_json::{Map, Value};

use crate::{
    config::ResolverConfig,
    equipment::{
        Barbell, Bench, BenchPosition, EquipmentEntry, EquipmentKind, FixedDumbbells, Kettlebells,
        Machine, MachineKind, ResistanceBands, ShortBarPair,
    },
    gym_error::InventoryError,
    plate::PlateSet,
    weight::Weight,
};

/// The user's equipment, validated and keyed by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquipmentInventory {
    entries: BTreeMap<EquipmentKind, EquipmentEntry>,
    body_weight: Option<Weight>,
}

impl EquipmentInventory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `entry`, replacing any previous entry of the same kind.
    #[must_use]
    pub fn with(mut self, entry: EquipmentEntry) -> Self {
        self.entries.insert(entry.kind(), entry);
        self
    }

    #[must_use]
    pub fn with_body_weight(mut self, body_weight: Weight) -> Self {
        self.body_weight = Some(body_weight);
        self
    }

    #[must_use]
    pub fn get(&self, kind: EquipmentKind) -> Option<&EquipmentEntry> {
        self.entries.get(&kind)
    }

    pub fn entries(&self) -> impl Iterator<Item = &EquipmentEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn body_weight(&self) -> Option<Weight> {
        self.body_weight
    }

    /// Available barbells of every variant.
    pub fn barbells(&self) -> impl Iterator<Item = &Barbell> {
        self.entries.values().filter_map(|entry| match entry {
            EquipmentEntry::Barbell(barbell) if barbell.available => Some(barbell),
            _ => None,
        })
    }

    #[must_use]
    pub fn plates(&self) -> Option<&PlateSet> {
        match self.get(EquipmentKind::WeightPlates) {
            Some(EquipmentEntry::PlateSet(plates)) if plates.is_available() => Some(plates),
            _ => None,
        }
    }

    #[must_use]
    pub fn fixed_dumbbells(&self) -> Option<&FixedDumbbells> {
        match self.get(EquipmentKind::Dumbbells) {
            Some(EquipmentEntry::FixedDumbbells(dumbbells)) if dumbbells.available => {
                Some(dumbbells)
            }
            _ => None,
        }
    }

    /// Short bars and plates, if together they make a pair of adjustable dumbbells.
    #[must_use]
    pub fn adjustable_dumbbells(&self) -> Option<(&ShortBarPair, &PlateSet)> {
        match self.get(EquipmentKind::ShortBarPair) {
            Some(EquipmentEntry::ShortBarPair(bars)) if bars.is_pair() => {
                Some((bars, self.plates()?))
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn kettlebells(&self) -> Option<&Kettlebells> {
        match self.get(EquipmentKind::Kettlebells) {
            Some(EquipmentEntry::Kettlebells(kettlebells)) if kettlebells.available => {
                Some(kettlebells)
            }
            _ => None,
        }
    }

    #[must_use]
    pub fn bands(&self) -> Option<&ResistanceBands> {
        match self.get(EquipmentKind::ResistanceBands) {
            Some(EquipmentEntry::ResistanceBands(bands)) if bands.available => Some(bands),
            _ => None,
        }
    }

    #[must_use]
    pub fn machine(&self, kind: MachineKind) -> Option<&Machine> {
        match self.get(EquipmentKind::Machine(kind)) {
            Some(EquipmentEntry::Machine(machine)) if machine.available => Some(machine),
            _ => None,
        }
    }
}

///
/// # Errors
/// If a weight is negative or not finite, or a count is negative.
///
pub fn normalize(raw: &Value) -> Result<EquipmentInventory, InventoryError> {
    normalize_with(raw, &ResolverConfig::default())
}

/// Builds an inventory from raw configuration.
///
/// Malformed optional data never fails: a missing `available` flag means
/// unavailable, missing counts are zero, unknown kinds and unreadable entries
/// are skipped. Only numbers that are present but invalid are rejected.
///
/// # Errors
/// If a weight is negative or not finite, or a count is negative.
///
pub fn normalize_with(
    raw: &Value,
    config: &ResolverConfig,
) -> Result<EquipmentInventory, InventoryError> {
    let mut inventory = EquipmentInventory::new();

    let Some(map) = raw.as_object() else {
        debug!("equipment configuration is not an object, treating as empty");
        return Ok(inventory);
    };

    for (id, value) in map {
        if id == "body_weight" {
            inventory.body_weight = weight(value, id)?;
            continue;
        }

        let Some(kind) = EquipmentKind::from_id(id) else {
            debug!("ignoring unknown equipment kind {id}");
            continue;
        };
        let Some(fields) = value.as_object() else {
            debug!("ignoring malformed {id} entry");
            continue;
        };
        let fields = Fields { id, fields };

        let entry = match kind {
            EquipmentKind::Barbell(kind) => EquipmentEntry::Barbell(Barbell {
                kind,
                bar_weight: fields
                    .bar_weight()?
                    .unwrap_or_else(|| config.default_bar_weight(kind)),
                available: fields.flag("available"),
            }),
            EquipmentKind::WeightPlates => EquipmentEntry::PlateSet(PlateSet::new(
                fields.weight_counts("plates")?,
                fields.flag("available"),
            )),
            EquipmentKind::ShortBarPair => EquipmentEntry::ShortBarPair(ShortBarPair {
                bar_weight: fields
                    .bar_weight()?
                    .unwrap_or(config.default_short_bar_weight),
                count: fields.count("count")?,
                available: fields.flag("available"),
            }),
            EquipmentKind::Dumbbells => EquipmentEntry::FixedDumbbells(FixedDumbbells {
                weights: fields.weights("weights")?,
                available: fields.flag("available"),
            }),
            EquipmentKind::Kettlebells => EquipmentEntry::Kettlebells(Kettlebells {
                weights: fields.weights("weights")?,
                available: fields.flag("available"),
            }),
            EquipmentKind::ResistanceBands => EquipmentEntry::ResistanceBands(ResistanceBands {
                tensions: fields.weight_counts("tensions")?,
                combinable: fields.flag("combinable"),
                available: fields.flag("available"),
            }),
            EquipmentKind::Machine(kind) => {
                let increment = fields.weight("increment")?.unwrap_or_default();
                let mut available = fields.flag("available");
                if available && increment == Weight::ZERO {
                    debug!("{id} has no weight increment, treating as unavailable");
                    available = false;
                }
                EquipmentEntry::Machine(Machine {
                    kind,
                    max_weight: fields.weight("max_weight")?.unwrap_or_default(),
                    increment,
                    available,
                })
            }
            EquipmentKind::Bench => EquipmentEntry::Bench(Bench {
                positions: fields.positions("positions"),
                available: fields.flag("available"),
            }),
        };

        inventory.entries.insert(kind, entry);
    }

    Ok(inventory)
}

/// Equipment tags the inventory satisfies, for exercise filtering.
///
/// Always contains `bodyweight`. An available bench is listed once per enabled
/// position. Short bars with plates count as `dumbbells`.
#[must_use]
pub fn available_equipment_kinds(inventory: &EquipmentInventory) -> BTreeSet<String> {
    let mut kinds = BTreeSet::from(["bodyweight".to_string()]);

    for entry in inventory.entries().filter(|entry| entry.is_available()) {
        match entry {
            EquipmentEntry::Bench(bench) => kinds.extend(
                bench
                    .positions
                    .iter()
                    .map(|position| position.tag().to_string()),
            ),
            entry => {
                kinds.insert(entry.kind().id().to_string());
            }
        }
    }

    let dumbbells = EquipmentKind::Dumbbells.id();
    if !kinds.contains(dumbbells) && inventory.adjustable_dumbbells().is_some() {
        kinds.insert(dumbbells.to_string());
    }

    kinds
}

struct Fields<'a> {
    id: &'a str,
    fields: &'a Map<String, Value>,
}

impl Fields<'_> {
    fn path(&self, name: &str) -> String {
        format!("{}.{name}", self.id)
    }

    fn flag(&self, name: &str) -> bool {
        self.fields
            .get(name)
            .and_then(Value::as_bool)
            .unwrap_or_default()
    }

    fn weight(&self, name: &str) -> Result<Option<Weight>, InventoryError> {
        match self.fields.get(name) {
            Some(value) => weight(value, &self.path(name)),
            None => Ok(None),
        }
    }

    fn bar_weight(&self) -> Result<Option<Weight>, InventoryError> {
        match self.weight("bar_weight")? {
            Some(weight) => Ok(Some(weight)),
            None => self.weight("weight"),
        }
    }

    fn count(&self, name: &str) -> Result<usize, InventoryError> {
        match self.fields.get(name) {
            Some(value) => count(value, &self.path(name)),
            None => Ok(0),
        }
    }

    fn weights(&self, name: &str) -> Result<Vec<Weight>, InventoryError> {
        let Some(values) = self.fields.get(name).and_then(Value::as_array) else {
            return Ok(Vec::new());
        };

        let mut weights = Vec::with_capacity(values.len());
        for (i, value) in values.iter().enumerate() {
            if let Some(weight) = weight(value, &format!("{}[{i}]", self.path(name)))? {
                weights.push(weight);
            }
        }
        weights.sort();
        weights.dedup();

        Ok(weights)
    }

    fn weight_counts(&self, name: &str) -> Result<BTreeMap<Weight, usize>, InventoryError> {
        let Some(values) = self.fields.get(name).and_then(Value::as_object) else {
            return Ok(BTreeMap::new());
        };

        let mut counts = BTreeMap::new();
        for (key, value) in values {
            let path = format!("{}.{key}", self.path(name));
            let Ok(units) = key.trim().parse::<f64>() else {
                debug!("ignoring {path}: not a weight");
                continue;
            };
            let weight = Weight::from_units(units).map_err(|source| {
                InventoryError::InvalidWeight {
                    field: path.clone(),
                    source,
                }
            })?;
            let on_hand = count(value, &path)?;
            let total: &mut usize = counts.entry(weight).or_default();
            *total = total.saturating_add(on_hand);
        }

        Ok(counts)
    }

    fn positions(&self, name: &str) -> BTreeSet<BenchPosition> {
        self.fields
            .get(name)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
            .filter_map(BenchPosition::from_id)
            .collect()
    }
}

fn weight(value: &Value, path: &str) -> Result<Option<Weight>, InventoryError> {
    let Some(units) = value.as_f64() else {
        debug!("ignoring {path}: not a number");
        return Ok(None);
    };

    Weight::from_units(units)
        .map(Some)
        .map_err(|source| InventoryError::InvalidWeight {
            field: path.to_string(),
            source,
        })
}

fn count(value: &Value, path: &str) -> Result<usize, InventoryError> {
    if let Some(count) = value.as_u64() {
        return Ok(usize::try_from(count).unwrap_or(usize::MAX));
    }
    match value.as_f64() {
        Some(count) if count < 0.0 => Err(InventoryError::NegativeCount {
            field: path.to_string(),
            count,
        }),
        Some(count) if count.fract() == 0.0 && count.is_finite() => {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = count as usize;
            Ok(count)
        }
        _ => {
            debug!("ignoring {path}: not a count");
            Ok(0)
        }
    }
}
