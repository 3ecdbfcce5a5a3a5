use std::str::FromStr;

/// Workout discipline of a submitted attack.
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
pub enum SportKind {
    Run,
    Cycle,
    Swim,
    Football,
}

impl SportKind {
    /// Parses an inbound sport string; unknown values fall back to `Run`.
    ///
    /// Falling back is a policy decision, not an error: collaborators may
    /// send sports this engine has no dedicated formula for yet.
    pub fn parse_or_default(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::Run)
    }
}

/// One workout-derived attack submission, after inbound validation.
///
/// All fields are non-negative by construction of their types.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackInput {
    pub sport: SportKind,
    pub duration_minutes: u32,
    pub calories: u32,
    pub distance_km: f64,
    pub avg_heart_rate: u32,
}

impl AttackInput {
    pub fn new(sport: SportKind) -> Self {
        Self {
            sport,
            duration_minutes: 0,
            calories: 0,
            distance_km: 0.0,
            avg_heart_rate: 0,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_distance(mut self, km: f64) -> Self {
        self.distance_km = km;
        self
    }

    pub fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.avg_heart_rate = bpm;
        self
    }
}
