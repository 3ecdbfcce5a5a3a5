//! The built-in upgrade catalog.
//!
//! Ordering matters: the registry applies damage modifiers in catalog order,
//! so the per-sport boosts come before the super upgrades.

use raid_core::upgrade::{RegistryError, UpgradeDef, UpgradeRegistry};
use raid_core::SportKind;

/// A named set of upgrade definitions, either built-in or loaded from data.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeCatalog {
    pub upgrades: Vec<UpgradeDef>,
}

impl UpgradeCatalog {
    /// Builds a registry from the catalog, preserving catalog order.
    pub fn into_registry(self) -> Result<UpgradeRegistry, RegistryError> {
        let mut registry = UpgradeRegistry::new();
        for def in self.upgrades {
            registry.register(def)?;
        }
        Ok(registry)
    }
}

/// The default shop: three runner items, then cycling, swimming, football.
/// Each sport's super upgrade requires that sport's boosts at max level.
pub fn builtin_catalog() -> UpgradeCatalog {
    UpgradeCatalog {
        upgrades: vec![
            UpgradeDef::duration_boost(
                "run_watch",
                "Runner's Watch",
                "Counts every run one extra minute per level.",
                SportKind::Run,
                1,
            ),
            UpgradeDef::distance_boost(
                "run_roulette",
                "Crooked Roulette",
                "Adds 0.2 km per level to every run.",
                SportKind::Run,
                0.2,
            ),
            UpgradeDef::super_charge(
                "run_super",
                "Titanium Sneaker",
                "Doubles all damage. Requires mastering the runner gear.",
                SportKind::Run,
                vec!["run_watch".to_owned(), "run_roulette".to_owned()],
            ),
            UpgradeDef::duration_boost(
                "cycle_watch",
                "Bike Computer",
                "Counts every ride two extra minutes per level.",
                SportKind::Cycle,
                2,
            ),
            UpgradeDef::distance_boost(
                "cycle_odometer",
                "Broken Odometer",
                "Adds 1 km per level to every ride.",
                SportKind::Cycle,
                1.0,
            ),
            UpgradeDef::super_charge(
                "cycle_super",
                "Carbon Frame",
                "Doubles all damage. Requires mastering the cycling gear.",
                SportKind::Cycle,
                vec!["cycle_watch".to_owned(), "cycle_odometer".to_owned()],
            ),
            UpgradeDef::distance_boost(
                "swim_flippers",
                "Flippers",
                "Adds 0.1 km per level to every swim.",
                SportKind::Swim,
                0.1,
            ),
            UpgradeDef::super_charge(
                "swim_super",
                "Gills",
                "Doubles all damage. Requires maxed Flippers.",
                SportKind::Swim,
                vec!["swim_flippers".to_owned()],
            ),
            UpgradeDef::calorie_boost(
                "football_energy",
                "Energy Drink",
                "Adds 100 kcal per level to every match.",
                SportKind::Football,
                100,
            ),
            UpgradeDef::super_charge(
                "football_super",
                "Golden Ball",
                "Doubles all damage. Requires maxed Energy Drink.",
                SportKind::Football,
                vec!["football_energy".to_owned()],
            ),
        ],
    }
}
