use std::collections::HashMap;

use thiserror::Error;

use crate::upgrade::UpgradeDef;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("upgrade key already registered: {0}")]
    DuplicateKey(String),
}

/// Ordered catalog of upgrade definitions.
///
/// Registration order is load order and is observable: the combat pipeline
/// applies damage modifiers by iterating the registry, not the player's
/// ownership map.
#[derive(Debug, Default)]
pub struct UpgradeRegistry {
    defs: Vec<UpgradeDef>,
    index: HashMap<String, usize>,
}

impl UpgradeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, def: UpgradeDef) -> Result<(), RegistryError> {
        if self.index.contains_key(def.key()) {
            return Err(RegistryError::DuplicateKey(def.key().to_owned()));
        }
        self.index.insert(def.key().to_owned(), self.defs.len());
        self.defs.push(def);
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&UpgradeDef> {
        self.index.get(key).map(|&i| &self.defs[i])
    }

    /// Definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &UpgradeDef> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Whether an upgrade is still locked for a player.
    ///
    /// Every prerequisite must be owned at its own max level. A prerequisite
    /// key missing from the registry keeps the upgrade locked rather than
    /// silently unlocking it.
    pub fn is_locked(&self, def: &UpgradeDef, owned: &HashMap<String, u8>) -> bool {
        def.prerequisites().iter().any(|prereq| {
            let Some(prereq_def) = self.get(prereq) else {
                return true;
            };
            owned
                .get(prereq)
                .is_none_or(|&level| level < prereq_def.max_level())
        })
    }
}
