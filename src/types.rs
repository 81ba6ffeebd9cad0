// Ref: pokemon-showdown/data/typechart.ts (multipliers only, grouped per attacking type).

/// Lowercase, alphanumeric-only identifier ("Will-O-Wisp" -> "willowisp").
pub fn normalize_id(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub const TYPE_NAMES: [&str; 18] = [
    "Normal", "Fire", "Water", "Electric", "Grass", "Ice", "Fighting", "Poison", "Ground",
    "Flying", "Psychic", "Bug", "Rock", "Ghost", "Dragon", "Dark", "Steel", "Fairy",
];

/// Maps any spelling of a type name onto its canonical display form.
pub fn canonical_type(name: &str) -> Option<&'static str> {
    let id = normalize_id(name);
    TYPE_NAMES
        .iter()
        .copied()
        .find(|candidate| candidate.eq_ignore_ascii_case(&id))
}

pub fn has_type(types: &[String], wanted: &str) -> bool {
    types.iter().any(|t| t.eq_ignore_ascii_case(wanted))
}

struct Matchup {
    double: &'static [&'static str],
    half: &'static [&'static str],
    immune: &'static [&'static str],
}

static CHART: phf::Map<&'static str, Matchup> = phf::phf_map! {
    "normal" => Matchup { double: &[], half: &["rock", "steel"], immune: &["ghost"] },
    "fire" => Matchup {
        double: &["grass", "ice", "bug", "steel"],
        half: &["fire", "water", "rock", "dragon"],
        immune: &[],
    },
    "water" => Matchup {
        double: &["fire", "ground", "rock"],
        half: &["water", "grass", "dragon"],
        immune: &[],
    },
    "electric" => Matchup {
        double: &["water", "flying"],
        half: &["electric", "grass", "dragon"],
        immune: &["ground"],
    },
    "grass" => Matchup {
        double: &["water", "ground", "rock"],
        half: &["fire", "grass", "poison", "flying", "bug", "dragon", "steel"],
        immune: &[],
    },
    "ice" => Matchup {
        double: &["grass", "ground", "flying", "dragon"],
        half: &["fire", "water", "ice", "steel"],
        immune: &[],
    },
    "fighting" => Matchup {
        double: &["normal", "ice", "rock", "dark", "steel"],
        half: &["poison", "flying", "psychic", "bug", "fairy"],
        immune: &["ghost"],
    },
    "poison" => Matchup {
        double: &["grass", "fairy"],
        half: &["poison", "ground", "rock", "ghost"],
        immune: &["steel"],
    },
    "ground" => Matchup {
        double: &["fire", "electric", "poison", "rock", "steel"],
        half: &["grass", "bug"],
        immune: &["flying"],
    },
    "flying" => Matchup {
        double: &["grass", "fighting", "bug"],
        half: &["electric", "rock", "steel"],
        immune: &[],
    },
    "psychic" => Matchup { double: &["fighting", "poison"], half: &["psychic", "steel"], immune: &["dark"] },
    "bug" => Matchup {
        double: &["grass", "psychic", "dark"],
        half: &["fire", "fighting", "poison", "flying", "ghost", "steel", "fairy"],
        immune: &[],
    },
    "rock" => Matchup {
        double: &["fire", "ice", "flying", "bug"],
        half: &["fighting", "ground", "steel"],
        immune: &[],
    },
    "ghost" => Matchup { double: &["ghost", "psychic"], half: &["dark"], immune: &["normal"] },
    "dragon" => Matchup { double: &["dragon"], half: &["steel"], immune: &["fairy"] },
    "dark" => Matchup { double: &["psychic", "ghost"], half: &["fighting", "dark", "fairy"], immune: &[] },
    "steel" => Matchup {
        double: &["rock", "ice", "fairy"],
        half: &["fire", "water", "electric", "steel"],
        immune: &[],
    },
    "fairy" => Matchup {
        double: &["fighting", "dragon", "dark"],
        half: &["fire", "poison", "steel"],
        immune: &[],
    },
};

pub fn type_effectiveness(move_type: &str, target_types: &[String]) -> f32 {
    let Some(matchup) = CHART.get(normalize_id(move_type).as_str()) else {
        return 1.0;
    };
    target_types
        .iter()
        .map(|t| normalize_id(t))
        .fold(1.0, |multiplier, def| {
            if matchup.immune.contains(&def.as_str()) {
                0.0
            } else if matchup.double.contains(&def.as_str()) {
                multiplier * 2.0
            } else if matchup.half.contains(&def.as_str()) {
                multiplier * 0.5
            } else {
                multiplier
            }
        })
}

/// True when entry rocks deal more than neutral damage to this typing.
pub fn is_stealth_rock_weak(types: &[String]) -> bool {
    type_effectiveness("rock", types) > 1.0
}
