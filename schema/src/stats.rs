use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{EnumIter, IntoStaticStr};

/// Names the six battle statistics in their canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, IntoStaticStr)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum StatKind {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &'static str = self.into();
        write!(f, "{}", name)
    }
}

/// Species base statistics, as published in the source stat tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u16,
    pub attack: u16,
    pub defense: u16,
    pub special_attack: u16,
    pub special_defense: u16,
    pub speed: u16,
}

impl BaseStats {
    pub fn new(
        hp: u16,
        attack: u16,
        defense: u16,
        special_attack: u16,
        special_defense: u16,
        speed: u16,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    pub fn get(&self, stat: StatKind) -> u16 {
        match stat {
            StatKind::Hp => self.hp,
            StatKind::Attack => self.attack,
            StatKind::Defense => self.defense,
            StatKind::SpecialAttack => self.special_attack,
            StatKind::SpecialDefense => self.special_defense,
            StatKind::Speed => self.speed,
        }
    }

    /// Sum of all six stats ("base stat total").
    pub fn total(&self) -> u32 {
        self.to_array().iter().map(|&stat| stat as u32).sum()
    }

    /// HP, ATK, DEF, SP.ATK, SP.DEF, SPD
    pub fn to_array(&self) -> [u16; 6] {
        [
            self.hp,
            self.attack,
            self.defense,
            self.special_attack,
            self.special_defense,
            self.speed,
        ]
    }
}

impl From<[u16; 6]> for BaseStats {
    fn from(stats: [u16; 6]) -> Self {
        let [hp, attack, defense, special_attack, special_defense, speed] = stats;
        Self::new(hp, attack, defense, special_attack, special_defense, speed)
    }
}

impl fmt::Display for BaseStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HP:{} ATK:{} DEF:{} SP.ATK:{} SP.DEF:{} SPD:{}",
            self.hp, self.attack, self.defense, self.special_attack, self.special_defense, self.speed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_array_order_matches_stat_kind_order() {
        let stats = BaseStats::from([78, 84, 78, 109, 85, 100]);
        let by_kind: Vec<u16> = StatKind::iter().map(|kind| stats.get(kind)).collect();
        assert_eq!(by_kind, stats.to_array().to_vec());
        assert_eq!(stats.special_attack, 109);
    }

    #[test]
    fn test_total() {
        assert_eq!(BaseStats::from([78, 84, 78, 109, 85, 100]).total(), 534);
        assert_eq!(BaseStats::from([35, 55, 40, 50, 50, 90]).total(), 320);
    }

    #[test]
    fn test_stat_kind_names() {
        assert_eq!(StatKind::SpecialDefense.to_string(), "special_defense");
        assert_eq!(StatKind::Hp.to_string(), "hp");
    }
}
