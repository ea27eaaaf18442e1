use std::{collections::BTreeSet, fmt::Display};

use crate::equipment::{BarbellKind, MachineKind};

/// A family of equipment that produces one kind of achievable weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Barbell,
    Dumbbells,
    Kettlebell,
    Resistance,
    Machine(MachineKind),
    Bodyweight,
}

impl Category {
    #[must_use]
    pub fn all() -> Vec<Category> {
        [
            Category::Barbell,
            Category::Dumbbells,
            Category::Kettlebell,
            Category::Resistance,
        ]
        .into_iter()
        .chain(MachineKind::ALL.into_iter().map(Category::Machine))
        .chain([Category::Bodyweight])
        .collect()
    }

    /// Category an exercise's equipment tag draws its weights from.
    ///
    /// Tags without weights of their own, such as bench positions or plates, map
    /// to `None`.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        if BarbellKind::ALL.iter().any(|kind| kind.id() == tag) {
            return Some(Category::Barbell);
        }
        if let Some(kind) = MachineKind::ALL.into_iter().find(|kind| kind.id() == tag) {
            return Some(Category::Machine(kind));
        }
        match tag {
            "dumbbells" | "barbell_short_pair" => Some(Category::Dumbbells),
            "kettlebells" => Some(Category::Kettlebell),
            "resistance_bands" => Some(Category::Resistance),
            "bodyweight" => Some(Category::Bodyweight),
            _ => None,
        }
    }

    /// Categories for a list of required equipment tags; every category if the
    /// list is empty.
    #[must_use]
    pub fn from_tags<S: AsRef<str>>(tags: &[S]) -> BTreeSet<Self> {
        if tags.is_empty() {
            return Self::all().into_iter().collect();
        }
        tags.iter()
            .filter_map(|tag| Self::from_tag(tag.as_ref()))
            .collect()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Barbell => write!(f, "Barbell"),
            Category::Dumbbells => write!(f, "Dumbbells"),
            Category::Kettlebell => write!(f, "Kettlebell"),
            Category::Resistance => write!(f, "Resistance bands"),
            Category::Machine(kind) => write!(f, "{kind}"),
            Category::Bodyweight => write!(f, "Bodyweight"),
        }
    }
}
