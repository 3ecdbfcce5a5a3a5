use std::collections::BTreeSet;

/// Boss archetype drawn at spawn time.
///
/// The archetype fixes the trait set and an HP adjustment; it never changes
/// after creation.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BossKind {
    Normal,
    Armored,
    Agile,
    Radioactive,
    Swarm,
}

impl BossKind {
    /// Cosmetic name suffix; must not affect mechanics.
    pub fn name_suffix(&self) -> &'static str {
        match self {
            BossKind::Normal => "",
            BossKind::Armored => "the Ironclad",
            BossKind::Agile => "the Phantom",
            BossKind::Radioactive => "the Toxic",
            BossKind::Swarm => "Swarm",
        }
    }
}

/// Immutable boss properties set at creation.
///
/// Explicit tagged optionals rather than an open-ended map, so the
/// invariants stay checkable at compile time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossTraits {
    /// Fraction of incoming damage absorbed while armor is intact.
    pub armor_reduction: Option<f64>,
    /// Percent chance to evade an attack outright.
    pub evasion_chance: Option<u8>,
    /// Fraction of max HP healed per incoming attack.
    pub regen_per_attack: Option<f64>,
}

/// A mutable, player-inflicted boss condition accumulated during the raid.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display, strum::EnumString,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Debuff {
    /// Armor is broken: armored reduction stops applying and every attack
    /// gains the synergy bonus.
    ArmorBreak,
}

/// Grow-only set of debuffs. Merging is a union; nothing is ever removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DebuffSet {
    inner: BTreeSet<Debuff>,
}

impl DebuffSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, debuff: Debuff) -> bool {
        self.inner.contains(&debuff)
    }

    pub fn insert(&mut self, debuff: Debuff) {
        self.inner.insert(debuff);
    }

    /// Union merge. Never removes existing debuffs.
    pub fn merge(&mut self, other: &DebuffSet) {
        self.inner.extend(other.inner.iter().copied());
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Debuff> + '_ {
        self.inner.iter().copied()
    }
}
