use crate::combat::{AttackInput, SportKind};

/// What an upgrade does when its owner attacks.
///
/// Input boosts inflate one workout metric before the sport formula runs
/// and scale with the owned level. `SuperCharge` is a flat damage doubler
/// that ignores level beyond being owned at all.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum UpgradeEffect {
    DurationBoost { minutes_per_level: u32 },
    DistanceBoost { km_per_level: f64 },
    CalorieBoost { calories_per_level: u32 },
    SuperCharge,
}

/// One purchasable upgrade.
///
/// Fields stay private so definitions only enter the system through the
/// constructors or a deserialized catalog, both of which fix the pricing
/// and level rules per effect kind.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UpgradeDef {
    key: String,
    name: String,
    description: String,
    sport: SportKind,
    max_level: u8,
    base_price: u64,
    effect: UpgradeEffect,
    #[cfg_attr(feature = "serde", serde(default))]
    prerequisites: Vec<String>,
}

const STANDARD_MAX_LEVEL: u8 = 10;
const STANDARD_BASE_PRICE: u64 = 100;
const SUPER_BASE_PRICE: u64 = 2000;

impl UpgradeDef {
    pub fn duration_boost(
        key: &str,
        name: &str,
        description: &str,
        sport: SportKind,
        minutes_per_level: u32,
    ) -> Self {
        Self::standard(
            key,
            name,
            description,
            sport,
            UpgradeEffect::DurationBoost { minutes_per_level },
        )
    }

    pub fn distance_boost(
        key: &str,
        name: &str,
        description: &str,
        sport: SportKind,
        km_per_level: f64,
    ) -> Self {
        Self::standard(
            key,
            name,
            description,
            sport,
            UpgradeEffect::DistanceBoost { km_per_level },
        )
    }

    pub fn calorie_boost(
        key: &str,
        name: &str,
        description: &str,
        sport: SportKind,
        calories_per_level: u32,
    ) -> Self {
        Self::standard(
            key,
            name,
            description,
            sport,
            UpgradeEffect::CalorieBoost { calories_per_level },
        )
    }

    /// A one-level damage doubler, gated behind its prerequisites.
    pub fn super_charge(
        key: &str,
        name: &str,
        description: &str,
        sport: SportKind,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            key: key.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            sport,
            max_level: 1,
            base_price: SUPER_BASE_PRICE,
            effect: UpgradeEffect::SuperCharge,
            prerequisites,
        }
    }

    fn standard(
        key: &str,
        name: &str,
        description: &str,
        sport: SportKind,
        effect: UpgradeEffect,
    ) -> Self {
        Self {
            key: key.to_owned(),
            name: name.to_owned(),
            description: description.to_owned(),
            sport,
            max_level: STANDARD_MAX_LEVEL,
            base_price: STANDARD_BASE_PRICE,
            effect,
            prerequisites: Vec::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn sport(&self) -> SportKind {
        self.sport
    }

    pub fn max_level(&self) -> u8 {
        self.max_level
    }

    pub fn effect(&self) -> &UpgradeEffect {
        &self.effect
    }

    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// Price of the next level given the currently owned level, or `None`
    /// when the upgrade is already maxed. Price scales linearly: the first
    /// level costs the base price, the second twice that, and so on.
    pub fn price(&self, owned_level: u8) -> Option<u64> {
        if owned_level >= self.max_level {
            return None;
        }
        Some(self.base_price * (u64::from(owned_level) + 1))
    }

    /// Inflates a workout metric before the sport formula runs.
    ///
    /// Only fires for the upgrade's own sport; owning level zero is a no-op.
    pub fn modify_input(&self, level: u8, input: &mut AttackInput) {
        if level == 0 || input.sport != self.sport {
            return;
        }
        match self.effect {
            UpgradeEffect::DurationBoost { minutes_per_level } => {
                input.duration_minutes += minutes_per_level * u32::from(level);
            }
            UpgradeEffect::DistanceBoost { km_per_level } => {
                input.distance_km += km_per_level * f64::from(level);
            }
            UpgradeEffect::CalorieBoost { calories_per_level } => {
                input.calories += calories_per_level * u32::from(level);
            }
            UpgradeEffect::SuperCharge => {}
        }
    }

    /// Scales the computed damage. Unlike input boosts this is not gated on
    /// the attack's sport; owning the doubler rewards every workout.
    pub fn modify_damage(&self, level: u8, damage: f64) -> f64 {
        match self.effect {
            UpgradeEffect::SuperCharge if level > 0 && damage > 0.0 => damage * 2.0,
            _ => damage,
        }
    }
}
