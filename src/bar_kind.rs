use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub enum BarKind {
    Dumbbell,
    Barbell,
}

impl BarKind {
    /// Plates of one weight consumed for each plate placed on a single end.
    ///
    /// A barbell mirrors every plate on its other side. A dumbbell pair mirrors
    /// it on both ends of both bars.
    #[must_use]
    pub fn required_similar_plates(&self) -> usize {
        match self {
            BarKind::Dumbbell => 4,
            BarKind::Barbell => 2,
        }
    }

    /// Bars lifted together for one set.
    #[must_use]
    pub fn bars_in_use(&self) -> usize {
        match self {
            BarKind::Dumbbell => 2,
            BarKind::Barbell => 1,
        }
    }
}

impl Display for BarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarKind::Dumbbell => write!(f, "Dumbbell"),
            BarKind::Barbell => write!(f, "Barbell"),
        }
    }
}
