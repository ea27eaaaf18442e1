use std::collections::{BTreeMap, BTreeSet};

use log::{trace, warn};

use crate::weight::Weight;

/// Plates on hand, keyed by unit weight.
///
/// Shared read-only by barbell and dumbbell resolution; every search below
/// returns fresh values instead of consuming counts from the set itself.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlateSet {
    plates: BTreeMap<Weight, usize>,
    available: bool,
}

impl PlateSet {
    /// Weightless plates and zero counts are dropped.
    #[must_use]
    pub fn new(plates: BTreeMap<Weight, usize>, available: bool) -> Self {
        PlateSet {
            plates: plates
                .into_iter()
                .filter(|(weight, count)| *weight > Weight::ZERO && *count > 0)
                .collect(),
            available,
        }
    }

    #[cfg(test)]
    #[must_use]
    pub fn from_weights_map(weights_map: &[(f64, usize)]) -> Self {
        Self::new(
            weights_map
                .iter()
                .filter_map(|(weight, count)| Some((Weight::from_units(*weight).ok()?, *count)))
                .collect(),
            true,
        )
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        self.available
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    #[must_use]
    pub fn count(&self, weight: Weight) -> usize {
        self.plates.get(&weight).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Weight, usize)> + '_ {
        self.plates.iter().map(|(weight, count)| (*weight, *count))
    }

    /// Every per-side weight that can be loaded symmetrically, including zero.
    ///
    /// One plate of weight `w` on a single end consumes `required_similar_plates`
    /// plates of that weight. The search walks weights in ascending order and
    /// extends the set of reachable sums with every usable multiple, which covers
    /// all plate subsets without enumerating them one by one. Sums above
    /// `max_per_side` are pruned; the set never grows beyond `max_combinations`.
    #[must_use]
    pub fn symmetric_combinations(
        &self,
        required_similar_plates: usize,
        max_per_side: Weight,
        max_combinations: usize,
    ) -> BTreeSet<Weight> {
        let mut sums = BTreeSet::from([Weight::ZERO]);

        for (weight, count) in self.iter() {
            let units = count / required_similar_plates.max(1);
            if units == 0 {
                continue;
            }

            let mut next = sums.clone();
            for sum in &sums {
                for n in 1..=units {
                    let total = *sum + weight.times(n);
                    if total > max_per_side {
                        break;
                    }
                    if next.len() >= max_combinations {
                        warn!("plate combination search truncated at {} sums", next.len());
                        return next;
                    }
                    next.insert(total);
                }
            }
            sums = next;
        }

        sums
    }

    /// Greedy high-to-low distribution of `delta` over `required_similar_plates`
    /// ends, returning the plates for a single end.
    ///
    /// Largest plates go on first and the total never overshoots. Returns `None`
    /// if more than `tolerance` is left once every plate has been tried.
    #[must_use]
    pub fn greedy_distribution(
        &self,
        delta: Weight,
        required_similar_plates: usize,
        tolerance: Weight,
    ) -> Option<Vec<Weight>> {
        let mut remaining = delta;
        let mut per_side = Vec::new();

        for (weight, count) in self.iter().rev() {
            if remaining <= tolerance {
                break;
            }
            let step = weight.times(required_similar_plates);
            let mut left = count;
            while remaining > tolerance && remaining >= step && left >= required_similar_plates {
                trace!("greedy: {weight} per side, {remaining} remaining");
                per_side.push(weight);
                remaining = remaining - step;
                left -= required_similar_plates;
            }
        }

        (remaining <= tolerance).then_some(per_side)
    }

    /// Exhaustive depth-first search for a distribution of `delta`.
    ///
    /// Weights are tried in descending order with the highest multiple first, so
    /// the first hit uses the fewest, largest plates. At most `max_combinations`
    /// branches are expanded.
    #[must_use]
    pub fn exact_distribution(
        &self,
        delta: Weight,
        required_similar_plates: usize,
        tolerance: Weight,
        max_combinations: usize,
    ) -> Option<Vec<Weight>> {
        let weights = self
            .iter()
            .rev()
            .map(|(weight, count)| (weight, count / required_similar_plates.max(1)))
            .filter(|(_, units)| *units > 0)
            .collect::<Vec<_>>();

        let mut per_side = Vec::new();
        let mut budget = max_combinations;

        search(
            &weights,
            required_similar_plates,
            delta,
            tolerance,
            &mut per_side,
            &mut budget,
        )
        .then_some(per_side)
    }
}

fn search(
    weights: &[(Weight, usize)],
    required_similar_plates: usize,
    remaining: Weight,
    tolerance: Weight,
    per_side: &mut Vec<Weight>,
    budget: &mut usize,
) -> bool {
    if remaining <= tolerance {
        return true;
    }
    let Some((&(weight, units), rest)) = weights.split_first() else {
        return false;
    };
    if *budget == 0 {
        return false;
    }
    *budget -= 1;

    let step = weight.times(required_similar_plates);
    for n in (0..=units.min(remaining.fits(step))).rev() {
        per_side.extend(std::iter::repeat_n(weight, n));
        if search(
            rest,
            required_similar_plates,
            remaining - step.times(n),
            tolerance,
            per_side,
            budget,
        ) {
            return true;
        }
        per_side.truncate(per_side.len() - n);
    }

    false
}
