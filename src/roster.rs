//! Consumer side of the creature lookup service.

use crate::creature::{Creature, CreatureRecord};
use crate::errors::RosterError;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Anything that can hand out creatures by name.
pub trait CreatureSource {
    /// Case-insensitive lookup.
    fn find_creature(&self, name: &str) -> Option<Creature>;
}

/// In-memory roster loaded from a list of creature records.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    // Keyed by lowercase name; insertion order kept for listing.
    creatures: HashMap<String, Creature>,
    order: Vec<String>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster, rejecting the whole list if any record is invalid.
    pub fn from_records(records: Vec<CreatureRecord>) -> Result<Self, RosterError> {
        let mut roster = Self::new();
        for record in records {
            roster.insert(Creature::try_from(record)?)?;
        }
        Ok(roster)
    }

    pub fn from_ron_str(source: &str) -> Result<Self, RosterError> {
        let records: Vec<CreatureRecord> = ron::from_str(source)?;
        Self::from_records(records)
    }

    pub fn from_json_str(source: &str) -> Result<Self, RosterError> {
        let records: Vec<CreatureRecord> = serde_json::from_str(source)?;
        Self::from_records(records)
    }

    /// Load a `.ron` or `.json` roster file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RosterError> {
        let path = path.as_ref();
        let read = || {
            fs::read_to_string(path).map_err(|source| RosterError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let roster = match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("ron") => Self::from_ron_str(&read()?)?,
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::from_json_str(&read()?)?,
            _ => return Err(RosterError::UnsupportedFormat(path.to_path_buf())),
        };
        tracing::debug!(path = %path.display(), creatures = roster.len(), "loaded roster");
        Ok(roster)
    }

    /// The roster bundled with the crate.
    pub fn bundled() -> Result<Self, RosterError> {
        Self::from_ron_str(include_str!("../data/roster.ron"))
    }

    pub fn insert(&mut self, creature: Creature) -> Result<(), RosterError> {
        let key = creature.name().to_lowercase();
        if self.creatures.contains_key(&key) {
            return Err(RosterError::DuplicateCreature(creature.name().to_string()));
        }
        self.order.push(key.clone());
        self.creatures.insert(key, creature);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Creature> {
        self.creatures.get(&name.trim().to_lowercase())
    }

    /// Creatures in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = &Creature> {
        self.order.iter().filter_map(|key| self.creatures.get(key))
    }

    pub fn len(&self) -> usize {
        self.creatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.creatures.is_empty()
    }
}

impl CreatureSource for Roster {
    fn find_creature(&self, name: &str) -> Option<Creature> {
        self.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CreatureDataError;
    use pretty_assertions::assert_eq;
    use schema::MoveId;

    const SMALL_RON: &str = r#"#![enable(implicit_some)]
        [
            (
                name: "Charizard",
                stats: (hp: 78, attack: 84, defense: 78, special_attack: 109, special_defense: 85, speed: 100),
                types: ["fire", "flying"],
            ),
            (
                name: "Pikachu",
                stats: (hp: 35, attack: 55, defense: 40, special_attack: 50, special_defense: 50, speed: 90),
                types: ["electric"],
                moves: ["thunderbolt", "slash"],
            ),
        ]
    "#;

    #[test]
    fn test_ron_roster_lookup_is_case_insensitive() {
        let roster = Roster::from_ron_str(SMALL_RON).unwrap();
        assert_eq!(roster.len(), 2);
        let charizard = roster.find_creature("CHARIZARD").unwrap();
        assert_eq!(charizard.name(), "Charizard");
        assert_eq!(charizard.type_label(), "fire/flying");
        assert_eq!(
            roster.find_creature("pikachu").unwrap().moveset(),
            Some(&[MoveId::Thunderbolt, MoveId::Slash][..])
        );
        assert!(roster.find_creature("Mew").is_none());
    }

    #[test]
    fn test_iteration_keeps_file_order() {
        let roster = Roster::from_ron_str(SMALL_RON).unwrap();
        let names: Vec<&str> = roster.iter().map(Creature::name).collect();
        assert_eq!(names, vec!["Charizard", "Pikachu"]);
    }

    #[test]
    fn test_json_roster() {
        let json = r#"[
            {"name": "Snorlax",
             "stats": {"hp": 160, "attack": 110, "defense": 65, "special_attack": 65, "special_defense": 110, "speed": 30},
             "types": ["normal"]}
        ]"#;
        let roster = Roster::from_json_str(json).unwrap();
        assert_eq!(roster.get("snorlax").unwrap().base_stats().hp, 160);
    }

    #[test]
    fn test_invalid_record_fails_whole_load() {
        let json = r#"[{"name": "Broken", "stats": {"hp": 10}, "types": ["normal"]}]"#;
        match Roster::from_json_str(json) {
            Err(RosterError::InvalidCreature(CreatureDataError::MissingStats { name, fields })) => {
                assert_eq!(name, "Broken");
                assert_eq!(fields.len(), 5);
            }
            other => panic!("expected missing stats, got {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_names_are_rejected() {
        let json = r#"[
            {"name": "Eevee", "stats": {"hp": 55, "attack": 55, "defense": 50, "special_attack": 45, "special_defense": 65, "speed": 55}, "types": ["normal"]},
            {"name": "EEVEE", "stats": {"hp": 55, "attack": 55, "defense": 50, "special_attack": 45, "special_defense": 65, "speed": 55}, "types": ["normal"]}
        ]"#;
        assert!(matches!(
            Roster::from_json_str(json),
            Err(RosterError::DuplicateCreature(name)) if name == "EEVEE"
        ));
    }

    #[test]
    fn test_unsupported_extension() {
        assert!(matches!(
            Roster::load("roster.yaml"),
            Err(RosterError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_bundled_roster_loads() {
        let roster = Roster::bundled().unwrap();
        assert!(roster.len() >= 10);
        for name in ["Charizard", "Pikachu", "Blastoise", "Venusaur", "Gengar"] {
            assert!(roster.get(name).is_some(), "{name} missing from bundled roster");
        }
    }

    #[test]
    fn test_load_from_disk() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/roster.ron");
        let roster = Roster::load(path).unwrap();
        assert_eq!(roster.len(), Roster::bundled().unwrap().len());
    }
}
