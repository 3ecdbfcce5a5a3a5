/// Player progression: level, experience, and coin balance.
///
/// Level and XP mutate only through attack resolution; coins mutate only
/// through reward distribution (shop spending is an external concern).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerProgress {
    level: u32,
    xp: u32,
    gold: u64,
}

impl PlayerProgress {
    /// XP required to advance from level `n` is `n * XP_PER_LEVEL`.
    pub const XP_PER_LEVEL: u32 = 1000;

    pub fn new() -> Self {
        Self {
            level: 1,
            xp: 0,
            gold: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn gold(&self) -> u64 {
        self.gold
    }

    /// Awards XP and applies any level-ups, carrying leftover XP over.
    ///
    /// Returns the number of levels gained.
    pub fn award_xp(&mut self, amount: u32) -> u32 {
        let before = self.level;
        self.xp = self.xp.saturating_add(amount);
        while self.xp >= self.level * Self::XP_PER_LEVEL {
            self.xp -= self.level * Self::XP_PER_LEVEL;
            self.level += 1;
        }
        self.level - before
    }

    /// Credits coins from a reward payout.
    pub fn credit_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount);
    }
}

impl Default for PlayerProgress {
    fn default() -> Self {
        Self::new()
    }
}
