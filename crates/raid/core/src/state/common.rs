use std::fmt;

/// Unique identifier for a player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Reserved identifier for system-level events (boss spawning).
    ///
    /// System events are deterministic state transitions not initiated by
    /// any player, but they still need a stable seed component.
    pub const SYSTEM: Self = Self(u64::MAX);
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Unique identifier for a boss instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BossId(pub u64);

impl fmt::Display for BossId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "boss-{}", self.0)
    }
}

/// Integer hit point meter with saturating mutators.
///
/// Invariant: `0 <= current <= maximum` always holds after any mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitPoints {
    current: u32,
    maximum: u32,
}

impl HitPoints {
    /// Creates a full meter.
    pub fn new_full(maximum: u32) -> Self {
        Self {
            current: maximum,
            maximum,
        }
    }

    /// Creates a meter at an arbitrary level, clamped to the maximum.
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn maximum(&self) -> u32 {
        self.maximum
    }

    /// Subtracts damage, flooring at zero.
    pub fn damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }

    /// Adds healing, capped at the maximum.
    pub fn heal(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    pub fn is_depleted(&self) -> bool {
        self.current == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn damage_floors_at_zero() {
        let mut hp = HitPoints::new_full(10);
        hp.damage(25);
        assert_eq!(hp.current(), 0);
        assert!(hp.is_depleted());
    }

    #[test]
    fn heal_caps_at_maximum() {
        let mut hp = HitPoints::new(5, 10);
        hp.heal(100);
        assert_eq!(hp.current(), 10);
    }

    #[test]
    fn new_clamps_current_to_maximum() {
        let hp = HitPoints::new(50, 10);
        assert_eq!(hp.current(), 10);
    }
}
