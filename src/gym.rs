use std::collections::BTreeSet;

use multimap::MultiMap;

use crate::{
    catalog,
    category::Category,
    config::ResolverConfig,
    inventory::{self, EquipmentInventory},
    loadout::{self, Loadout},
    requirement::Requirement,
    weight::Weight,
};

/// A snapshot of one user's equipment together with the resolver settings.
///
/// Every method is a pure function of the snapshot, so a `Gym` can be shared
/// between threads and queried concurrently.
#[derive(Clone, Debug)]
pub struct Gym {
    inventory: EquipmentInventory,
    config: ResolverConfig,
}

impl Gym {
    #[must_use]
    pub fn new(inventory: EquipmentInventory) -> Self {
        Self::with_config(inventory, ResolverConfig::default())
    }

    #[must_use]
    pub fn with_config(inventory: EquipmentInventory, config: ResolverConfig) -> Self {
        Gym { inventory, config }
    }

    #[must_use]
    pub fn inventory(&self) -> &EquipmentInventory {
        &self.inventory
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub fn available_equipment_kinds(&self) -> BTreeSet<String> {
        inventory::available_equipment_kinds(&self.inventory)
    }

    #[must_use]
    pub fn achievable_weights<S: AsRef<str>>(&self, required_equipment_kinds: &[S]) -> Vec<Weight> {
        catalog::achievable_weights_with(&self.inventory, required_equipment_kinds, &self.config)
    }

    /// Achievable weights of every category that has any, grouped by category.
    #[must_use]
    pub fn weights(&self) -> MultiMap<Category, Weight> {
        let catalog_max = self.config.catalog_max;

        Category::all()
            .into_iter()
            .flat_map(|category| {
                catalog::category_weights(&self.inventory, category, &self.config)
                    .into_iter()
                    .filter(move |weight| *weight <= catalog_max)
                    .map(move |weight| (category, weight))
            })
            .collect()
    }

    #[must_use]
    pub fn resolve_loadout(&self, target: Weight, category: Category) -> Loadout {
        loadout::resolve_loadout_with(&self.inventory, target, category, &self.config)
    }

    /// One loadout per requirement, in order.
    #[must_use]
    pub fn resolve(&self, requirements: &[Requirement]) -> Vec<Loadout> {
        requirements
            .iter()
            .map(|requirement| self.resolve_loadout(requirement.weight(), requirement.category()))
            .collect()
    }
}
