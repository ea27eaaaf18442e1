use std::fmt::Display;

use crate::{bar_kind::BarKind, weight::Weight};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bar {
    pub weight: Weight,
    pub kind: BarKind,
}

impl Bar {
    #[must_use]
    pub fn new(weight: Weight, kind: BarKind) -> Self {
        Bar { weight, kind }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn kind(&self) -> &BarKind {
        &self.kind
    }

    /// Weight of the unloaded bars lifted together.
    #[must_use]
    pub fn base_weight(&self) -> Weight {
        self.weight.times(self.kind.bars_in_use())
    }

    /// Total weight after putting `per_side` on every loaded end.
    #[must_use]
    pub fn loaded_weight(&self, per_side: &[Weight]) -> Weight {
        self.base_weight()
            + per_side
                .iter()
                .copied()
                .sum::<Weight>()
                .times(self.kind.required_similar_plates())
    }
}

impl Display for Bar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.kind, self.weight)
    }
}
