use schema::{CreatureType, PokemonType};

/// Multiplier of an attacking type against a defender's declared types.
///
/// Dual types multiply together (2 x 2 = 4, 0.5 x 0 = 0). Unknown defending
/// types contribute a neutral 1.
pub fn effectiveness(attacking: PokemonType, defending: &[CreatureType]) -> f64 {
    defending
        .iter()
        .map(|defending_type| match defending_type.known() {
            Some(known) => PokemonType::type_effectiveness(attacking, known),
            None => 1.0,
        })
        .product()
}

/// Same-type attack bonus applies when the move's type is one of the
/// attacker's declared types.
pub fn has_stab(move_type: PokemonType, attacker_types: &[CreatureType]) -> bool {
    attacker_types.iter().any(|t| t.is(move_type))
}
