use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveCategory::Physical => write!(f, "physical"),
            MoveCategory::Special => write!(f, "special"),
            MoveCategory::Status => write!(f, "status"),
        }
    }
}

/// Secondary effects a move can leave on its target. A creature carries at
/// most one of these at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter)]
#[serde(rename_all = "lowercase")]
pub enum StatusEffect {
    Paralysis,
    Burn,
    Freeze,
    Confusion,
}

impl StatusEffect {
    /// Multiplier applied to effective speed while the effect is active.
    pub fn speed_multiplier(&self) -> f64 {
        match self {
            StatusEffect::Paralysis => 0.5,
            StatusEffect::Burn | StatusEffect::Freeze | StatusEffect::Confusion => 1.0,
        }
    }

    /// Fraction of max HP lost at the end of every full turn.
    pub fn residual_damage_fraction(&self) -> f64 {
        match self {
            StatusEffect::Burn => 1.0 / 16.0,
            StatusEffect::Paralysis | StatusEffect::Freeze | StatusEffect::Confusion => 0.0,
        }
    }
}

impl fmt::Display for StatusEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusEffect::Paralysis => "paralysis",
            StatusEffect::Burn => "burn",
            StatusEffect::Freeze => "freeze",
            StatusEffect::Confusion => "confusion",
        };
        write!(f, "{}", name)
    }
}

/// Identifier of every move in the catalog.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum MoveId {
    // Normal Type
    Tackle,
    Headbutt,
    BodySlam,
    Slash,
    HyperVoice,

    // Fire Type
    FirePunch,
    Flamethrower,
    FireBlast,
    WillOWisp,

    // Water Type
    Waterfall,
    Surf,
    HydroPump,

    // Electric Type
    ThunderPunch,
    Thunderbolt,
    Thunder,
    ThunderWave,

    // Grass Type
    SeedBomb,
    EnergyBall,

    // Ice Type
    IcePunch,
    IceBeam,
    Blizzard,

    // Fighting Type
    CrossChop,
    FocusBlast,

    // Poison Type
    PoisonJab,
    SludgeBomb,

    // Ground Type
    Earthquake,
    EarthPower,

    // Flying Type
    DrillPeck,
    AirSlash,

    // Psychic Type
    ZenHeadbutt,
    Psychic,

    // Bug Type
    XScissor,
    BugBuzz,

    // Rock Type
    RockSlide,
    PowerGem,

    // Ghost Type
    ShadowClaw,
    ShadowBall,
    ConfuseRay,

    // Dragon Type
    DragonClaw,
    DragonPulse,

    // Dark Type
    Crunch,
    DarkPulse,

    // Steel Type
    IronHead,
    FlashCannon,

    // Fairy Type
    PlayRough,
    Moonblast,
}

impl MoveId {
    /// Looks a move up by a loosely formatted name: "Thunder Wave",
    /// "thunder_wave" and "thunder-wave" all resolve to the same move.
    pub fn from_name(name: &str) -> Option<MoveId> {
        let normalized: String = name
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();
        MoveId::from_str(&normalized).ok()
    }

    /// The kebab-case identifier used in data files.
    pub fn key(&self) -> &'static str {
        self.into()
    }
}

impl fmt::Display for MoveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_move_names_normalize() {
        assert_eq!(MoveId::from_name("Thunder Wave"), Some(MoveId::ThunderWave));
        assert_eq!(MoveId::from_name("thunder_wave"), Some(MoveId::ThunderWave));
        assert_eq!(MoveId::from_name("Will-O-Wisp"), Some(MoveId::WillOWisp));
        assert_eq!(MoveId::from_name("x-scissor"), Some(MoveId::XScissor));
        assert_eq!(MoveId::from_name("Splash"), None);
    }

    #[test]
    fn test_every_key_parses_back() {
        for move_id in MoveId::iter() {
            assert_eq!(MoveId::from_name(move_id.key()), Some(move_id));
        }
    }

    #[test]
    fn test_status_effect_mechanics() {
        assert_eq!(StatusEffect::Paralysis.speed_multiplier(), 0.5);
        assert_eq!(StatusEffect::Burn.speed_multiplier(), 1.0);
        assert_eq!(StatusEffect::Burn.residual_damage_fraction(), 0.0625);
        assert_eq!(StatusEffect::Freeze.residual_damage_fraction(), 0.0);
    }
}
