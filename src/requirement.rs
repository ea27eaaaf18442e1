use std::{fmt::Display, str::FromStr};

use crate::{
    category::Category, equipment::MachineKind, gym_error::RequirementError, loadout::Loadout,
    weight::Weight,
};

/// A target weight for one category, e.g. `60b` for a 60 kg barbell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Requirement {
    pub weight: Weight,
    pub category: Category,
}

impl Requirement {
    #[must_use]
    pub fn new(weight: Weight, category: Category) -> Self {
        Requirement { weight, category }
    }

    #[must_use]
    pub fn weight(&self) -> Weight {
        self.weight
    }

    #[must_use]
    pub fn category(&self) -> Category {
        self.category
    }

    #[must_use]
    pub fn matches(&self, loadout: &Loadout, tolerance: Weight) -> bool {
        loadout.category() == self.category
            && loadout
                .total()
                .is_some_and(|total| total.abs_diff(self.weight) <= tolerance)
    }
}

impl FromStr for Requirement {
    type Err = RequirementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(suffix) = s.chars().last() else {
            return Err(RequirementError::Empty);
        };
        let (weight, _) = s.split_at(s.len() - suffix.len_utf8());

        let category = match suffix.to_ascii_lowercase() {
            'b' => Category::Barbell,
            'd' => Category::Dumbbells,
            'k' => Category::Kettlebell,
            'r' => Category::Resistance,
            'c' => Category::Machine(MachineKind::Cable),
            'l' => Category::Machine(MachineKind::LegPress),
            'p' => Category::Machine(MachineKind::LatPulldown),
            'h' => Category::Machine(MachineKind::ChestPress),
            _ => return Err(RequirementError::UnknownCategory(suffix.to_string())),
        };
        let weight = weight
            .trim()
            .parse::<f64>()
            .map_err(|_| RequirementError::InvalidWeight(weight.to_string()))?;

        Ok(Requirement {
            weight: Weight::from_units(weight)?,
            category,
        })
    }
}

impl Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.category, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::gym_error::WeightError;

    fn w(units: f64) -> Weight {
        Weight::from_units(units).unwrap()
    }

    #[rstest]
    #[case("60b", Ok(Requirement::new(w(60.0), Category::Barbell)))]
    #[case("22.5D", Ok(Requirement::new(w(22.5), Category::Dumbbells)))]
    #[case(" 16k ", Ok(Requirement::new(w(16.0), Category::Kettlebell)))]
    #[case("45l", Ok(Requirement::new(w(45.0), Category::Machine(MachineKind::LegPress))))]
    #[case("", Err(RequirementError::Empty))]
    #[case("60x", Err(RequirementError::UnknownCategory("x".to_string())))]
    #[case("abcb", Err(RequirementError::InvalidWeight("abc".to_string())))]
    #[case("-5b", Err(RequirementError::Weight(WeightError::Negative(-5.0))))]
    fn test_requirement_from_str(
        #[case] s: &str,
        #[case] expected: Result<Requirement, RequirementError>,
    ) {
        assert_eq!(s.parse::<Requirement>(), expected);
    }

    #[test]
    fn test_matches() {
        let requirement = Requirement::new(w(12.0), Category::Kettlebell);

        assert!(requirement.matches(&Loadout::Kettlebell { weight: w(12.0) }, w(0.1)));
        assert!(!requirement.matches(&Loadout::Kettlebell { weight: w(16.0) }, w(0.1)));
        assert!(!requirement.matches(&Loadout::Bodyweight { weight: w(12.0) }, w(0.1)));
    }
}
