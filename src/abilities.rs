use crate::counter::{self, MoveCounter, SetupType};
use crate::types::{has_type, normalize_id};
use phf::phf_set;
use rand::Rng;
use tracing::debug;

pub const NO_ABILITY: &str = "No Ability";

static BLACKLIST: phf::Set<&'static str> = phf_set! {
    "defeatist", "emergencyexit", "klutz", "minus", "plus", "slowstart", "truant", "wimpout",
};

static ALWAYS_BAD: phf::Set<&'static str> = phf_set! {
    "immunity", "waterveil", "magmaarmor", "normalize", "slowstart",
};

static MULTIPLAYER_ONLY: phf::Set<&'static str> = phf_set! {
    "friendguard", "healer", "telepathy", "powerofalchemy", "receiver", "symbiosis",
};

static ABSORBERS: phf::Set<&'static str> = phf_set! {
    "waterabsorb", "voltabsorb", "flashfire", "sapsipper", "stormdrain", "lightningrod",
    "motordrive", "dryskin", "eartheater", "wellbakedbody",
};

static WEATHER_SETTERS: phf::Set<&'static str> = phf_set! {
    "drizzle", "drought", "sandstream", "snowwarning",
};

/// Counter key an ability needs to be non-zero, for move-synergy abilities.
fn required_synergy(ability: &str) -> Option<&'static str> {
    Some(match ability {
        "contrary" => counter::KEY_CONTRARY,
        "skilllink" => counter::KEY_SKILL_LINK,
        "ironfist" => counter::KEY_IRON_FIST,
        "strongjaw" => counter::KEY_STRONG_JAW,
        "sheerforce" => counter::KEY_SHEER_FORCE,
        "technician" => counter::KEY_TECHNICIAN,
        "toughclaws" => counter::KEY_TOUGH_CLAWS,
        "adaptability" => counter::KEY_STAB,
        "liquidvoice" | "punkrock" => counter::KEY_SOUND,
        _ => return None,
    })
}

pub fn should_cull(
    ability: &str,
    counter: &MoveCounter,
    held: &[String],
    types: &[String],
    _species: &str,
) -> bool {
    let id = normalize_id(ability);
    let id = id.as_str();
    if BLACKLIST.contains(id) || ALWAYS_BAD.contains(id) || MULTIPLAYER_ONLY.contains(id) {
        return true;
    }
    if let Some(key) = required_synergy(id) {
        return !counter.has(key);
    }
    let setup = counter.setup_type();
    match id {
        "hugepower" | "purepower" | "gorillatactics" => {
            counter.get(counter::KEY_PHYSICAL_POOL) < 2
        }
        "soulheart" | "beastboost" => {
            setup == SetupType::None && counter.damaging_count() < 2
        }
        "regenerator" | "naturalcure" => {
            matches!(setup, SetupType::Physical | SetupType::Special)
        }
        "quickfeet" => !counter.has(counter::KEY_STATUS_MOVE),
        "moxie" => counter.damaging_count() < 2,
        _ if WEATHER_SETTERS.contains(id) => !has_weather_synergy(id, held, types),
        _ => false,
    }
}

fn has_weather_synergy(ability: &str, held: &[String], types: &[String]) -> bool {
    let any_move = |needles: &[&str]| {
        held.iter()
            .any(|m| needles.iter().any(|needle| m.contains(needle)))
    };
    match ability {
        "drizzle" => has_type(types, "Water") || any_move(&["water", "surf", "hydro"]),
        "drought" => has_type(types, "Fire") || any_move(&["fire", "flame", "blaze"]),
        "sandstream" => ["Rock", "Ground", "Steel"].iter().any(|t| has_type(types, t)),
        "snowwarning" => has_type(types, "Ice"),
        _ => false,
    }
}

pub fn rate(ability: &str, counter: &MoveCounter) -> i32 {
    let id = normalize_id(ability);
    let id = id.as_str();
    if BLACKLIST.contains(id) {
        return -100;
    }
    let scaled = |base: i32, key: &str, per: i32| base + counter.get(key) as i32 * per;
    match id {
        "hugepower" | "purepower" => scaled(100, counter::KEY_PHYSICAL_POOL, 10),
        "magicguard" | "regenerator" => 90,
        "speedboost" => 85,
        "prankster" => 80 + counter.status() as i32 * 5,
        "adaptability" => scaled(70, counter::KEY_STAB, 10),
        "sheerforce" => scaled(65, counter::KEY_SHEER_FORCE, 10),
        "technician" => scaled(60, counter::KEY_TECHNICIAN, 10),
        "skilllink" => scaled(55, counter::KEY_SKILL_LINK, 15),
        "ironfist" => scaled(50, counter::KEY_IRON_FIST, 10),
        "strongjaw" => scaled(50, counter::KEY_STRONG_JAW, 10),
        "contrary" => scaled(45, counter::KEY_CONTRARY, 20),
        "toughclaws" => scaled(40, counter::KEY_TOUGH_CLAWS, 5),
        "moxie" | "beastboost" if counter.setup_type() != SetupType::None => 60,
        "moxie" | "beastboost" => 40,
        _ if WEATHER_SETTERS.contains(id) => 75,
        _ if ABSORBERS.contains(id) => 50,
        _ => 30,
    }
}

/// Sorts by rating (stable, descending) and draws rank 0/1/2 with weight
/// 0.66/0.24/0.10.
pub fn pick_weighted<R: Rng + ?Sized>(
    abilities: &[String],
    counter: &MoveCounter,
    rng: &mut R,
) -> Option<String> {
    let mut ranked: Vec<(i32, &String)> =
        abilities.iter().map(|a| (rate(a, counter), a)).collect();
    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    let roll: f64 = rng.gen();
    let index = if roll < 0.66 {
        0
    } else if roll < 0.90 && ranked.len() > 1 {
        1
    } else if roll >= 0.90 && ranked.len() > 2 {
        2
    } else {
        0
    };
    ranked.get(index).map(|(_, ability)| (*ability).clone())
}

/// Culls, then picks. Falls back to the uncut list, then to `NO_ABILITY`.
pub fn select_ability<R: Rng + ?Sized>(
    abilities: &[String],
    counter: &MoveCounter,
    held: &[String],
    types: &[String],
    species: &str,
    rng: &mut R,
) -> String {
    let survivors: Vec<String> = abilities
        .iter()
        .filter(|a| {
            let cull = should_cull(a, counter, held, types, species);
            if cull {
                debug!(species, ability = a.as_str(), "ability culled");
            }
            !cull
        })
        .cloned()
        .collect();
    let pool = if survivors.is_empty() { abilities } else { &survivors[..] };
    pick_weighted(pool, counter, rng).unwrap_or_else(|| NO_ABILITY.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::registry::EmptyRegistry;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;

    fn strings(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn counter_for(moves: &[&str], types: &[&str], abilities: &[&str]) -> MoveCounter {
        analyze(moves, &strings(types), &strings(abilities), &EmptyRegistry)
    }

    #[test]
    fn blacklisted_and_doubles_abilities_are_culled() {
        let counter = counter_for(&["Tackle"], &["Normal"], &[]);
        for ability in ["Truant", "Slow Start", "Wimp Out", "Healer", "Telepathy", "Water Veil"] {
            assert!(should_cull(ability, &counter, &[], &[], "x"), "{ability}");
        }
        assert!(!should_cull("Intimidate", &counter, &[], &[], "x"));
    }

    #[test]
    fn synergy_abilities_need_their_moves() {
        let counter = counter_for(&["Bullet Punch", "Earthquake"], &["Steel"], &["Technician"]);
        assert!(!should_cull("Technician", &counter, &[], &[], "scizor"));
        assert!(!should_cull("Iron Fist", &counter, &[], &[], "scizor"));
        assert!(should_cull("Skill Link", &counter, &[], &[], "scizor"));
        assert!(should_cull("Strong Jaw", &counter, &[], &[], "scizor"));
    }

    #[test]
    fn weather_needs_theme() {
        let counter = counter_for(&["Earthquake"], &["Ground"], &[]);
        let held = strings(&["earthquake"]);
        assert!(should_cull("Drizzle", &counter, &held, &strings(&["Ground"]), "x"));
        assert!(!should_cull("Sand Stream", &counter, &held, &strings(&["Ground"]), "x"));
        let held = strings(&["hydropump"]);
        assert!(!should_cull("Drizzle", &counter, &held, &strings(&["Ground"]), "x"));
    }

    #[test]
    fn huge_power_outrates_everything() {
        let counter = counter_for(&["Play Rough", "Aqua Jet", "Knock Off"], &["Water"], &[]);
        assert_eq!(rate("Huge Power", &counter), 130);
        assert_eq!(rate("Thick Fat", &counter), 30);
        assert_eq!(rate("Truant", &counter), -100);
        assert_eq!(rate("Water Absorb", &counter), 50);
    }

    #[test]
    fn weighted_pick_respects_ranks() {
        let counter = counter_for(&["Earthquake"], &["Ground"], &[]);
        let abilities = strings(&["Thick Fat", "Magic Guard", "Speed Boost"]);
        let mut rng = SmallRng::seed_from_u64(7);
        let mut top = 0;
        for _ in 0..1000 {
            let pick = pick_weighted(&abilities, &counter, &mut rng).expect("non-empty list");
            if pick == "Magic Guard" {
                top += 1;
            }
        }
        // Expected ~660.
        assert!((560..760).contains(&top), "top pick count {top}");
    }

    #[test]
    fn all_culled_falls_back_to_original_list() {
        let counter = counter_for(&["Tackle"], &["Normal"], &[]);
        let mut rng = SmallRng::seed_from_u64(1);
        let picked = select_ability(&strings(&["Truant"]), &counter, &[], &[], "slaking", &mut rng);
        assert_eq!(picked, "Truant");
        let picked = select_ability(&[], &counter, &[], &[], "slaking", &mut rng);
        assert_eq!(picked, NO_ABILITY);
    }
}
