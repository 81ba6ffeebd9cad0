use crate::counter::{self, MoveCounter, SetupType};
use crate::stats::Stat;
use crate::types::normalize_id;
use serde::Serialize;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize)]
pub enum Nature {
    Hardy,
    Lonely,
    Brave,
    Adamant,
    Naughty,
    Bold,
    Docile,
    Relaxed,
    Impish,
    Lax,
    Timid,
    Hasty,
    Serious,
    Jolly,
    Naive,
    Modest,
    Mild,
    Quiet,
    Bashful,
    Rash,
    Calm,
    Gentle,
    Sassy,
    Careful,
    Quirky,
}

/// Name, boosted stat, reduced stat. Neutral natures name the same stat twice.
pub const NATURE_TABLE: [(Nature, Stat, Stat); 25] = [
    (Nature::Hardy, Stat::Atk, Stat::Atk),
    (Nature::Docile, Stat::Def, Stat::Def),
    (Nature::Serious, Stat::Spa, Stat::Spa),
    (Nature::Bashful, Stat::Spd, Stat::Spd),
    (Nature::Quirky, Stat::Spe, Stat::Spe),
    (Nature::Lonely, Stat::Atk, Stat::Def),
    (Nature::Brave, Stat::Atk, Stat::Spe),
    (Nature::Adamant, Stat::Atk, Stat::Spa),
    (Nature::Naughty, Stat::Atk, Stat::Spd),
    (Nature::Bold, Stat::Def, Stat::Atk),
    (Nature::Relaxed, Stat::Def, Stat::Spe),
    (Nature::Impish, Stat::Def, Stat::Spa),
    (Nature::Lax, Stat::Def, Stat::Spd),
    (Nature::Modest, Stat::Spa, Stat::Atk),
    (Nature::Mild, Stat::Spa, Stat::Def),
    (Nature::Quiet, Stat::Spa, Stat::Spe),
    (Nature::Rash, Stat::Spa, Stat::Spd),
    (Nature::Calm, Stat::Spd, Stat::Atk),
    (Nature::Gentle, Stat::Spd, Stat::Def),
    (Nature::Sassy, Stat::Spd, Stat::Spe),
    (Nature::Careful, Stat::Spd, Stat::Spa),
    (Nature::Timid, Stat::Spe, Stat::Atk),
    (Nature::Hasty, Stat::Spe, Stat::Def),
    (Nature::Jolly, Stat::Spe, Stat::Spa),
    (Nature::Naive, Stat::Spe, Stat::Spd),
];

/// Used whenever the chosen nature does not suit the moveset.
pub const FALLBACK_NATURE: Nature = Nature::Hardy;

impl Nature {
    pub fn all() -> impl Iterator<Item = Nature> {
        NATURE_TABLE.iter().map(|(nature, _, _)| *nature)
    }

    fn entry(self) -> (Stat, Stat) {
        NATURE_TABLE
            .iter()
            .find(|(nature, _, _)| *nature == self)
            .map(|(_, boosted, reduced)| (*boosted, *reduced))
            .unwrap_or((Stat::Atk, Stat::Atk))
    }

    pub fn boosted(self) -> Stat {
        self.entry().0
    }

    pub fn reduced(self) -> Stat {
        self.entry().1
    }

    pub fn is_neutral(self) -> bool {
        let (boosted, reduced) = self.entry();
        boosted == reduced
    }

    pub fn from_name(name: &str) -> Option<Nature> {
        let id = normalize_id(name);
        Nature::all().find(|nature| normalize_id(&nature.to_string()) == id)
    }

    /// Multiplier applied to `stat` when computing final stats.
    pub fn modifier(self, stat: Stat) -> f32 {
        let (boosted, reduced) = self.entry();
        if boosted == reduced {
            1.0
        } else if stat == boosted {
            1.1
        } else if stat == reduced {
            0.9
        } else {
            1.0
        }
    }
}

impl fmt::Display for Nature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

pub fn natures_boosting(stat: Stat) -> Vec<Nature> {
    Nature::all()
        .filter(|n| !n.is_neutral() && n.boosted() == stat)
        .collect()
}

pub fn natures_reducing(stat: Stat) -> Vec<Nature> {
    Nature::all()
        .filter(|n| !n.is_neutral() && n.reduced() == stat)
        .collect()
}

pub fn neutral_natures() -> Vec<Nature> {
    Nature::all().filter(|n| n.is_neutral()).collect()
}

pub fn role_is_bulky(role: &str) -> bool {
    ["Bulky", "Wall", "Tank"].iter().any(|tag| role.contains(tag))
}

/// Role table first, then moveset shape.
pub fn select_nature(counter: &MoveCounter, role: Option<&str>) -> Nature {
    let physical = counter.get(counter::KEY_PHYSICAL_POOL);
    let special = counter.get(counter::KEY_SPECIAL_POOL);
    let is_physical = physical > special;
    let is_special = special > physical;
    let is_mixed = physical > 0 && special > 0 && physical.abs_diff(special) <= 1;
    let speed_nature = if is_physical { Nature::Jolly } else { Nature::Timid };

    if let Some(role) = role {
        if role_is_bulky(role) {
            return if is_physical {
                Nature::Impish
            } else if is_special {
                Nature::Calm
            } else {
                Nature::Bold
            };
        }
        if role.contains("Support") || role.contains("Fast Attacker") {
            return speed_nature;
        }
        if role.contains("Wallbreaker") {
            return if is_physical { Nature::Adamant } else { Nature::Modest };
        }
        if role.contains("Setup") || role.contains("Sweeper") {
            return speed_nature;
        }
    }

    let setup = counter.setup_type();
    let has_priority = counter.has(counter::KEY_PRIORITY);
    if setup == SetupType::Physical || is_physical {
        return if has_priority { Nature::Adamant } else { Nature::Jolly };
    }
    if setup == SetupType::Special || is_special {
        return if has_priority { Nature::Modest } else { Nature::Timid };
    }
    if is_mixed || setup == SetupType::Mixed {
        return Nature::Hasty;
    }
    if counter.damaging_count() <= 1 {
        return Nature::Bold;
    }
    if physical > 0 {
        Nature::Jolly
    } else {
        Nature::Timid
    }
}

/// A non-neutral nature must not boost an unused attacking stat or cut the
/// dominant one.
pub fn is_valid(nature: Nature, counter: &MoveCounter) -> bool {
    if nature.is_neutral() {
        return true;
    }
    let physical = counter.get(counter::KEY_PHYSICAL_POOL);
    let special = counter.get(counter::KEY_SPECIAL_POOL);
    let bad_boost = match nature.boosted() {
        Stat::Atk => physical == 0,
        Stat::Spa => special == 0,
        _ => false,
    };
    let bad_cut = match nature.reduced() {
        Stat::Atk => physical > special,
        Stat::Spa => special > physical,
        _ => false,
    };
    !bad_boost && !bad_cut
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::registry::EmptyRegistry;

    fn counter_for(moves: &[&str]) -> MoveCounter {
        analyze(moves, &["Normal".to_string()], &[], &EmptyRegistry)
    }

    #[test]
    fn catalog_has_five_neutral_and_twenty_distinct() {
        assert_eq!(Nature::all().count(), 25);
        assert_eq!(neutral_natures().len(), 5);
        assert_eq!(natures_boosting(Stat::Spe).len(), 4);
        assert_eq!(natures_reducing(Stat::Atk).len(), 4);
        assert!(natures_boosting(Stat::Hp).is_empty());
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(Nature::from_name("adamant"), Some(Nature::Adamant));
        assert_eq!(Nature::from_name("Jolly"), Some(Nature::Jolly));
        assert_eq!(Nature::from_name("Grumpy"), None);
        assert_eq!(Nature::Modest.modifier(Stat::Spa), 1.1);
        assert_eq!(Nature::Modest.modifier(Stat::Atk), 0.9);
        assert_eq!(Nature::Serious.modifier(Stat::Spa), 1.0);
    }

    #[test]
    fn bulky_roles_pick_defensive_natures() {
        let physical = counter_for(&["Earthquake", "Knock Off", "Toxic", "Recover"]);
        assert_eq!(select_nature(&physical, Some("Bulky Support")), Nature::Impish);
        let special = counter_for(&["Scald", "Ice Beam", "Toxic", "Recover"]);
        assert_eq!(select_nature(&special, Some("Bulky Attacker")), Nature::Calm);
        let neither = counter_for(&["Toxic", "Recover", "Protect", "Haze"]);
        assert_eq!(select_nature(&neither, Some("Wall")), Nature::Bold);
    }

    #[test]
    fn shape_cascade_without_role() {
        let priority = counter_for(&["Swords Dance", "Extreme Speed", "Earthquake", "Knock Off"]);
        assert_eq!(select_nature(&priority, None), Nature::Adamant);
        let special = counter_for(&["Nasty Plot", "Dark Pulse", "Flamethrower", "Roost"]);
        assert_eq!(select_nature(&special, None), Nature::Timid);
        let mixed = counter_for(&["Earthquake", "Ice Beam", "Roost", "Toxic"]);
        assert_eq!(select_nature(&mixed, None), Nature::Hasty);
        let passive = counter_for(&["Scald", "Toxic", "Recover", "Haze"]);
        assert_eq!(select_nature(&passive, None), Nature::Timid);
    }

    #[test]
    fn validity_rules() {
        let special = counter_for(&["Scald", "Ice Beam", "Toxic", "Recover"]);
        assert!(!is_valid(Nature::Adamant, &special));
        assert!(!is_valid(Nature::Jolly, &special));
        assert!(is_valid(Nature::Timid, &special));
        assert!(is_valid(Nature::Hardy, &special));
    }
}
