//! RNG oracle for deterministic random number generation.
//!
//! All combat randomness (evasion rolls, crit rolls, debuff rolls, boss
//! generation) flows through a trait-based RNG so that outcomes are
//! deterministic given a seed. This keeps the damage pipeline replayable
//! and lets tests pin every roll.

/// Roll-site contexts for seed derivation.
///
/// Use a different context for each independent roll within the same
/// attack so the rolls do not correlate.
pub mod roll {
    /// Evasion check against an agile boss.
    pub const EVASION: u32 = 0;
    /// Critical hit check (football).
    pub const CRIT: u32 = 1;
    /// Armor break proposal (swim, football).
    pub const DEBUFF: u32 = 2;
    /// Boss archetype draw at spawn time.
    pub const BOSS_KIND: u32 = 10;
    /// Boss name prefix draw.
    pub const NAME_PREFIX: u32 = 11;
    /// Boss name noun draw.
    pub const NAME_NOUN: u32 = 12;
}

/// RNG oracle for deterministic random number generation.
///
/// Implementations must be deterministic and produce the same values
/// given the same seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Roll a d100 (1-100 inclusive).
    ///
    /// Common for percentage-based mechanics like evasion and crit chance.
    fn roll_d100(&self, seed: u64) -> u32 {
        (self.next_u32(seed) % 100) + 1
    }

    /// Uniform draw in [0, 1).
    fn unit(&self, seed: u64) -> f64 {
        f64::from(self.next_u32(seed)) / (f64::from(u32::MAX) + 1.0)
    }

    /// Pick an index in [0, len).
    ///
    /// Returns 0 for an empty range.
    fn pick_index(&self, seed: u64, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR produces 32-bit output from 64-bit state with a single
/// multiply + xorshift + rotate. Deterministic, small, and passes the
/// usual statistical batteries.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    /// Advance the PCG state by one step.
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// PCG output function using XSH-RR (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        let state = Self::pcg_step(seed);
        Self::pcg_output(state)
    }
}

/// Compute a deterministic seed from raid state components.
///
/// Combines multiple entropy sources so each random event in the raid
/// gets a unique, replayable seed.
///
/// # Arguments
///
/// * `session_seed` - Base seed fixed at runtime start (for replay)
/// * `nonce` - Attack sequence number (increments each attack)
/// * `player_id` - Player submitting the attack (or a sentinel for system events)
/// * `context` - Roll-site constant from [`roll`]
pub fn compute_seed(session_seed: u64, nonce: u64, player_id: u64, context: u32) -> u64 {
    // Mix inputs with SplitMix64/FxHash-style multipliers.
    let mut hash = session_seed;

    hash ^= nonce.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= player_id.wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    // Final avalanche step
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
