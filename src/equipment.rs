use std::{
    collections::{BTreeMap, BTreeSet},
    fmt::Display,
};

use crate::{bar::Bar, bar_kind::BarKind, plate::PlateSet, weight::Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BarbellKind {
    Olympic,
    Ez,
    Trap,
}

impl BarbellKind {
    pub const ALL: [BarbellKind; 3] = [BarbellKind::Olympic, BarbellKind::Ez, BarbellKind::Trap];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            BarbellKind::Olympic => "barbell",
            BarbellKind::Ez => "ez_bar",
            BarbellKind::Trap => "trap_bar",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MachineKind {
    Cable,
    LegPress,
    LatPulldown,
    ChestPress,
}

impl MachineKind {
    pub const ALL: [MachineKind; 4] = [
        MachineKind::Cable,
        MachineKind::LegPress,
        MachineKind::LatPulldown,
        MachineKind::ChestPress,
    ];

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            MachineKind::Cable => "cable_machine",
            MachineKind::LegPress => "leg_press",
            MachineKind::LatPulldown => "lat_pulldown",
            MachineKind::ChestPress => "chest_press",
        }
    }
}

impl Display for MachineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MachineKind::Cable => write!(f, "Cable"),
            MachineKind::LegPress => write!(f, "Leg press"),
            MachineKind::LatPulldown => write!(f, "Lat pulldown"),
            MachineKind::ChestPress => write!(f, "Chest press"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BenchPosition {
    Flat,
    InclineUp,
    Decline,
}

impl BenchPosition {
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id {
            "flat" => Some(BenchPosition::Flat),
            "incline_up" => Some(BenchPosition::InclineUp),
            "decline" => Some(BenchPosition::Decline),
            _ => None,
        }
    }

    /// Equipment tag an exercise uses to require this position.
    #[must_use]
    pub fn tag(&self) -> &'static str {
        match self {
            BenchPosition::Flat => "bench_flat",
            BenchPosition::InclineUp => "bench_incline",
            BenchPosition::Decline => "bench_decline",
        }
    }
}

/// Identifier of an inventory entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EquipmentKind {
    Barbell(BarbellKind),
    WeightPlates,
    ShortBarPair,
    Dumbbells,
    Kettlebells,
    ResistanceBands,
    Machine(MachineKind),
    Bench,
}

impl EquipmentKind {
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        if let Some(kind) = BarbellKind::ALL.into_iter().find(|kind| kind.id() == id) {
            return Some(EquipmentKind::Barbell(kind));
        }
        if let Some(kind) = MachineKind::ALL.into_iter().find(|kind| kind.id() == id) {
            return Some(EquipmentKind::Machine(kind));
        }
        match id {
            "weight_plates" => Some(EquipmentKind::WeightPlates),
            "barbell_short_pair" => Some(EquipmentKind::ShortBarPair),
            "dumbbells" => Some(EquipmentKind::Dumbbells),
            "kettlebells" => Some(EquipmentKind::Kettlebells),
            "resistance_bands" => Some(EquipmentKind::ResistanceBands),
            "bench" => Some(EquipmentKind::Bench),
            _ => None,
        }
    }

    #[must_use]
    pub fn id(&self) -> &'static str {
        match self {
            EquipmentKind::Barbell(kind) => kind.id(),
            EquipmentKind::Machine(kind) => kind.id(),
            EquipmentKind::WeightPlates => "weight_plates",
            EquipmentKind::ShortBarPair => "barbell_short_pair",
            EquipmentKind::Dumbbells => "dumbbells",
            EquipmentKind::Kettlebells => "kettlebells",
            EquipmentKind::ResistanceBands => "resistance_bands",
            EquipmentKind::Bench => "bench",
        }
    }
}

impl Display for EquipmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Barbell {
    pub kind: BarbellKind,
    pub bar_weight: Weight,
    pub available: bool,
}

impl Barbell {
    #[must_use]
    pub fn bar(&self) -> Bar {
        Bar::new(self.bar_weight, BarKind::Barbell)
    }
}

/// Two short bars that become adjustable dumbbells once loaded with plates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortBarPair {
    pub bar_weight: Weight,
    pub count: usize,
    pub available: bool,
}

impl ShortBarPair {
    #[must_use]
    pub fn bar(&self) -> Bar {
        Bar::new(self.bar_weight, BarKind::Dumbbell)
    }

    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.available && self.count >= 2
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedDumbbells {
    /// Per-hand weights, ascending.
    pub weights: Vec<Weight>,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Kettlebells {
    pub weights: Vec<Weight>,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResistanceBands {
    pub tensions: BTreeMap<Weight, usize>,
    pub combinable: bool,
    pub available: bool,
}

impl ResistanceBands {
    /// Tensions with at least one band on hand, ascending. Zero tensions are skipped.
    pub fn on_hand(&self) -> impl DoubleEndedIterator<Item = (Weight, usize)> + '_ {
        self.tensions
            .iter()
            .filter(|(tension, count)| **tension > Weight::ZERO && **count > 0)
            .map(|(tension, count)| (*tension, *count))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    pub kind: MachineKind,
    pub max_weight: Weight,
    pub increment: Weight,
    pub available: bool,
}

impl Machine {
    /// Selectable stack weights: `0, increment, 2 * increment, ...` up to `max_weight`.
    pub fn ladder(&self) -> impl Iterator<Item = Weight> + '_ {
        (0..=self.steps()).map(|step| self.increment.times(step))
    }

    /// Closest value on the ladder; halfway targets round down.
    #[must_use]
    pub fn nearest(&self, target: Weight) -> Weight {
        let increment = self.increment.milli();
        if increment == 0 {
            return Weight::ZERO;
        }
        let mut step = target.milli() / increment;
        if (target.milli() % increment) * 2 > increment {
            step += 1;
        }
        self.increment.times((step as usize).min(self.steps()))
    }

    fn steps(&self) -> usize {
        self.max_weight.fits(self.increment)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bench {
    pub positions: BTreeSet<BenchPosition>,
    pub available: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EquipmentEntry {
    Barbell(Barbell),
    PlateSet(PlateSet),
    ShortBarPair(ShortBarPair),
    FixedDumbbells(FixedDumbbells),
    Kettlebells(Kettlebells),
    ResistanceBands(ResistanceBands),
    Machine(Machine),
    Bench(Bench),
}

impl EquipmentEntry {
    #[must_use]
    pub fn kind(&self) -> EquipmentKind {
        match self {
            EquipmentEntry::Barbell(barbell) => EquipmentKind::Barbell(barbell.kind),
            EquipmentEntry::PlateSet(_) => EquipmentKind::WeightPlates,
            EquipmentEntry::ShortBarPair(_) => EquipmentKind::ShortBarPair,
            EquipmentEntry::FixedDumbbells(_) => EquipmentKind::Dumbbells,
            EquipmentEntry::Kettlebells(_) => EquipmentKind::Kettlebells,
            EquipmentEntry::ResistanceBands(_) => EquipmentKind::ResistanceBands,
            EquipmentEntry::Machine(machine) => EquipmentKind::Machine(machine.kind),
            EquipmentEntry::Bench(_) => EquipmentKind::Bench,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        match self {
            EquipmentEntry::Barbell(Barbell { available, .. })
            | EquipmentEntry::ShortBarPair(ShortBarPair { available, .. })
            | EquipmentEntry::FixedDumbbells(FixedDumbbells { available, .. })
            | EquipmentEntry::Kettlebells(Kettlebells { available, .. })
            | EquipmentEntry::ResistanceBands(ResistanceBands { available, .. })
            | EquipmentEntry::Machine(Machine { available, .. })
            | EquipmentEntry::Bench(Bench { available, .. }) => *available,
            EquipmentEntry::PlateSet(plates) => plates.is_available(),
        }
    }
}
