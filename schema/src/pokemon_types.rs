use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{EnumCount, EnumIter, EnumString, IntoStaticStr};

/// The eighteen elemental types known to the effectiveness table.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    EnumCount,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PokemonType {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl fmt::Display for PokemonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

impl PokemonType {
    /// Calculate type effectiveness multiplier for attacking type vs defending type
    /// Returns: 2.0 = Super Effective, 1.0 = Normal, 0.5 = Not Very Effective, 0.0 = No Effect
    pub fn type_effectiveness(attacking: PokemonType, defending: PokemonType) -> f64 {
        use PokemonType::*;

        match (attacking, defending) {
            // Normal
            (Normal, Ghost) => 0.0,
            (Normal, Rock) | (Normal, Steel) => 0.5,
            (Normal, _) => 1.0,

            // Fire
            (Fire, Fire) | (Fire, Water) | (Fire, Rock) | (Fire, Dragon) => 0.5,
            (Fire, Grass) | (Fire, Ice) | (Fire, Bug) | (Fire, Steel) => 2.0,
            (Fire, _) => 1.0,

            // Water
            (Water, Water) | (Water, Grass) | (Water, Dragon) => 0.5,
            (Water, Fire) | (Water, Ground) | (Water, Rock) => 2.0,
            (Water, _) => 1.0,

            // Electric
            (Electric, Electric) | (Electric, Grass) | (Electric, Dragon) => 0.5,
            (Electric, Ground) => 0.0,
            (Electric, Water) | (Electric, Flying) => 2.0,
            (Electric, _) => 1.0,

            // Grass
            (Grass, Fire)
            | (Grass, Grass)
            | (Grass, Poison)
            | (Grass, Flying)
            | (Grass, Bug)
            | (Grass, Dragon)
            | (Grass, Steel) => 0.5,
            (Grass, Water) | (Grass, Ground) | (Grass, Rock) => 2.0,
            (Grass, _) => 1.0,

            // Ice
            (Ice, Fire) | (Ice, Water) | (Ice, Ice) | (Ice, Steel) => 0.5,
            (Ice, Grass) | (Ice, Ground) | (Ice, Flying) | (Ice, Dragon) => 2.0,
            (Ice, _) => 1.0,

            // Fighting
            (Fighting, Poison)
            | (Fighting, Flying)
            | (Fighting, Psychic)
            | (Fighting, Bug)
            | (Fighting, Fairy) => 0.5,
            (Fighting, Ghost) => 0.0,
            (Fighting, Normal)
            | (Fighting, Ice)
            | (Fighting, Rock)
            | (Fighting, Dark)
            | (Fighting, Steel) => 2.0,
            (Fighting, _) => 1.0,

            // Poison
            (Poison, Poison) | (Poison, Ground) | (Poison, Rock) | (Poison, Ghost) => 0.5,
            (Poison, Steel) => 0.0,
            (Poison, Grass) | (Poison, Fairy) => 2.0,
            (Poison, _) => 1.0,

            // Ground
            (Ground, Grass) | (Ground, Bug) => 0.5,
            (Ground, Flying) => 0.0,
            (Ground, Fire)
            | (Ground, Electric)
            | (Ground, Poison)
            | (Ground, Rock)
            | (Ground, Steel) => 2.0,
            (Ground, _) => 1.0,

            // Flying (Ice resists it in this table)
            (Flying, Electric) | (Flying, Ice) | (Flying, Rock) | (Flying, Steel) => 0.5,
            (Flying, Grass) | (Flying, Fighting) | (Flying, Bug) => 2.0,
            (Flying, _) => 1.0,

            // Psychic
            (Psychic, Psychic) | (Psychic, Steel) => 0.5,
            (Psychic, Dark) => 0.0,
            (Psychic, Fighting) | (Psychic, Poison) => 2.0,
            (Psychic, _) => 1.0,

            // Bug
            (Bug, Fire)
            | (Bug, Fighting)
            | (Bug, Poison)
            | (Bug, Flying)
            | (Bug, Ghost)
            | (Bug, Steel)
            | (Bug, Fairy) => 0.5,
            (Bug, Grass) | (Bug, Psychic) | (Bug, Dark) => 2.0,
            (Bug, _) => 1.0,

            // Rock
            (Rock, Fighting) | (Rock, Ground) | (Rock, Steel) => 0.5,
            (Rock, Fire) | (Rock, Ice) | (Rock, Flying) | (Rock, Bug) => 2.0,
            (Rock, _) => 1.0,

            // Ghost
            (Ghost, Normal) => 0.0,
            (Ghost, Dark) => 0.5,
            (Ghost, Psychic) | (Ghost, Ghost) => 2.0,
            (Ghost, _) => 1.0,

            // Dragon
            (Dragon, Steel) => 0.5,
            (Dragon, Fairy) => 0.0,
            (Dragon, Dragon) => 2.0,
            (Dragon, _) => 1.0,

            // Dark
            (Dark, Fighting) | (Dark, Dark) | (Dark, Fairy) => 0.5,
            (Dark, Psychic) | (Dark, Ghost) => 2.0,
            (Dark, _) => 1.0,

            // Steel
            (Steel, Fire) | (Steel, Water) | (Steel, Electric) | (Steel, Steel) => 0.5,
            (Steel, Ice) | (Steel, Rock) | (Steel, Fairy) => 2.0,
            (Steel, _) => 1.0,

            // Fairy
            (Fairy, Fire) | (Fairy, Poison) | (Fairy, Steel) => 0.5,
            (Fairy, Fighting) | (Fairy, Dragon) | (Fairy, Dark) => 2.0,
            (Fairy, _) => 1.0,
        }
    }

    pub fn is_immune(attacking: PokemonType, defending: PokemonType) -> bool {
        Self::type_effectiveness(attacking, defending) == 0.0
    }
}

/// A type as declared on a creature record.
///
/// Records coming from the roster service may carry type names the table
/// does not know about. Those are kept verbatim so they can be rendered in
/// the battle log, and they are neutral against everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CreatureType {
    Known(PokemonType),
    Unknown(String),
}

impl CreatureType {
    pub fn parse(name: &str) -> Self {
        let trimmed = name.trim();
        match PokemonType::from_str(trimmed) {
            Ok(known) => CreatureType::Known(known),
            Err(_) => CreatureType::Unknown(trimmed.to_lowercase()),
        }
    }

    pub fn known(&self) -> Option<PokemonType> {
        match self {
            CreatureType::Known(known) => Some(*known),
            CreatureType::Unknown(_) => None,
        }
    }

    pub fn is(&self, pokemon_type: PokemonType) -> bool {
        self.known() == Some(pokemon_type)
    }
}

impl From<PokemonType> for CreatureType {
    fn from(value: PokemonType) -> Self {
        CreatureType::Known(value)
    }
}

impl From<String> for CreatureType {
    fn from(value: String) -> Self {
        CreatureType::parse(&value)
    }
}

impl From<&str> for CreatureType {
    fn from(value: &str) -> Self {
        CreatureType::parse(value)
    }
}

impl From<CreatureType> for String {
    fn from(value: CreatureType) -> Self {
        value.to_string()
    }
}

impl fmt::Display for CreatureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CreatureType::Known(known) => write!(f, "{}", known),
            CreatureType::Unknown(name) => write!(f, "{}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_known_type_names_round_trip_through_display() {
        for pokemon_type in PokemonType::iter() {
            let parsed = CreatureType::parse(&pokemon_type.to_string());
            assert_eq!(parsed, CreatureType::Known(pokemon_type));
        }
        assert_eq!(PokemonType::COUNT, 18);
    }

    #[test]
    fn test_type_names_parse_case_insensitively() {
        assert_eq!(CreatureType::parse("Fire"), CreatureType::Known(PokemonType::Fire));
        assert_eq!(CreatureType::parse(" DRAGON "), CreatureType::Known(PokemonType::Dragon));
    }

    #[test]
    fn test_unknown_type_is_preserved() {
        let parsed = CreatureType::parse("Cosmic");
        assert_eq!(parsed, CreatureType::Unknown("cosmic".to_string()));
        assert_eq!(parsed.known(), None);
        assert_eq!(parsed.to_string(), "cosmic");
    }

    #[test]
    fn test_immunities() {
        assert!(PokemonType::is_immune(PokemonType::Normal, PokemonType::Ghost));
        assert!(PokemonType::is_immune(PokemonType::Electric, PokemonType::Ground));
        assert!(PokemonType::is_immune(PokemonType::Dragon, PokemonType::Fairy));
        assert!(!PokemonType::is_immune(PokemonType::Fire, PokemonType::Water));
    }

    #[test]
    fn test_multipliers_are_from_the_fixed_set() {
        for attacking in PokemonType::iter() {
            for defending in PokemonType::iter() {
                let m = PokemonType::type_effectiveness(attacking, defending);
                assert!([0.0, 0.5, 1.0, 2.0].contains(&m), "{attacking} vs {defending} = {m}");
            }
        }
    }
}
