/// Balance constants and tunable parameters for boss sizing, damage, and rewards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BalanceConfig {
    /// Average damage a single workout is expected to deal.
    pub avg_damage_per_workout: f64,
    /// Expected workouts per player per week.
    pub workouts_per_week: f64,
    /// Global difficulty coefficient applied to boss HP.
    pub difficulty: f64,
    /// Lower bound on generated boss HP.
    pub min_boss_hp: u32,
    /// Fraction of max HP a radioactive boss heals per incoming attack.
    pub regen_per_attack: f64,
    /// Damage multiplier applied once the boss's armor is broken.
    pub synergy_multiplier: f64,
    /// Per-level damage scaling for players.
    pub level_damage_factor: f64,
    /// XP awarded for a landed attack.
    pub xp_per_hit: u32,
    /// Consolation XP awarded when the boss evades.
    pub xp_per_miss: u32,
    /// HP-to-coins divisor for the base reward pool.
    pub pool_hp_divisor: f64,
    /// Additive pool multiplier bonus for the armor trait.
    pub pool_bonus_armor: f64,
    /// Additive pool multiplier bonus for the evasion trait.
    pub pool_bonus_evasion: f64,
    /// Additive pool multiplier bonus for the regen trait.
    pub pool_bonus_regen: f64,
}

impl BalanceConfig {
    pub const DEFAULT_AVG_DAMAGE_PER_WORKOUT: f64 = 350.0;
    pub const DEFAULT_WORKOUTS_PER_WEEK: f64 = 3.0;
    pub const DEFAULT_DIFFICULTY: f64 = 1.2;
    pub const DEFAULT_MIN_BOSS_HP: u32 = 1000;
    pub const DEFAULT_REGEN_PER_ATTACK: f64 = 0.005;
    pub const DEFAULT_SYNERGY_MULTIPLIER: f64 = 1.15;
    pub const DEFAULT_LEVEL_DAMAGE_FACTOR: f64 = 0.01;
    pub const DEFAULT_XP_PER_HIT: u32 = 100;
    pub const DEFAULT_XP_PER_MISS: u32 = 10;
    pub const DEFAULT_POOL_HP_DIVISOR: f64 = 10.0;
    pub const DEFAULT_POOL_BONUS_ARMOR: f64 = 0.3;
    pub const DEFAULT_POOL_BONUS_EVASION: f64 = 0.3;
    pub const DEFAULT_POOL_BONUS_REGEN: f64 = 0.5;

    pub fn new() -> Self {
        Self {
            avg_damage_per_workout: Self::DEFAULT_AVG_DAMAGE_PER_WORKOUT,
            workouts_per_week: Self::DEFAULT_WORKOUTS_PER_WEEK,
            difficulty: Self::DEFAULT_DIFFICULTY,
            min_boss_hp: Self::DEFAULT_MIN_BOSS_HP,
            regen_per_attack: Self::DEFAULT_REGEN_PER_ATTACK,
            synergy_multiplier: Self::DEFAULT_SYNERGY_MULTIPLIER,
            level_damage_factor: Self::DEFAULT_LEVEL_DAMAGE_FACTOR,
            xp_per_hit: Self::DEFAULT_XP_PER_HIT,
            xp_per_miss: Self::DEFAULT_XP_PER_MISS,
            pool_hp_divisor: Self::DEFAULT_POOL_HP_DIVISOR,
            pool_bonus_armor: Self::DEFAULT_POOL_BONUS_ARMOR,
            pool_bonus_evasion: Self::DEFAULT_POOL_BONUS_EVASION,
            pool_bonus_regen: Self::DEFAULT_POOL_BONUS_REGEN,
        }
    }
}

impl Default for BalanceConfig {
    fn default() -> Self {
        Self::new()
    }
}
