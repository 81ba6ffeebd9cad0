use crate::counter::{self, MoveCounter, SetupType};
use crate::natures::{role_is_bulky, Nature};
use serde::{Deserialize, Serialize};

pub const MAX_EV: u16 = 255;
pub const MAX_EV_TOTAL: u16 = 510;
pub const MAX_IV: u16 = 31;
/// Flat per-stat effort value used when no role is given.
pub const LEGACY_EV: u16 = 85;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
}

pub const ALL_STATS: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::Spa, Stat::Spd, Stat::Spe];

/// Six values keyed by stat; used for base stats, effort values and
/// individual values alike.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StatSpread {
    #[serde(default)]
    pub hp: u16,
    #[serde(default)]
    pub atk: u16,
    #[serde(default)]
    pub def: u16,
    #[serde(default)]
    pub spa: u16,
    #[serde(default)]
    pub spd: u16,
    #[serde(default)]
    pub spe: u16,
}

impl StatSpread {
    pub fn uniform(value: u16) -> Self {
        StatSpread {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    pub fn get(&self, stat: Stat) -> u16 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u16) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Atk => self.atk = value,
            Stat::Def => self.def = value,
            Stat::Spa => self.spa = value,
            Stat::Spd => self.spd = value,
            Stat::Spe => self.spe = value,
        }
    }

    pub fn total(&self) -> u32 {
        ALL_STATS.iter().map(|s| self.get(*s) as u32).sum()
    }
}

fn scaled_base(base: u16, iv: u16, ev: u16, level: u16) -> u64 {
    (u64::from(base) * 2 + u64::from(iv) + u64::from(ev) / 4) * u64::from(level) / 100
}

fn clamp_u16(value: u64) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}

/// Saturates at `u16::MAX` instead of overflowing on out-of-range inputs.
pub fn calc_hp(base: u16, iv: u16, ev: u16, level: u16) -> u16 {
    clamp_u16(scaled_base(base, iv, ev, level) + u64::from(level) + 10)
}

pub fn calc_stat(base: u16, iv: u16, ev: u16, level: u16, nature: Nature, stat: Stat) -> u16 {
    let raw = scaled_base(base, iv, ev, level) + 5;
    let percent = (nature.modifier(stat) * 100.0).round() as u64;
    clamp_u16(raw * percent / 100)
}

/// Final stats for a spread at `level`.
pub fn compute_stats(
    base: &StatSpread,
    ivs: &StatSpread,
    evs: &StatSpread,
    level: u16,
    nature: Nature,
) -> StatSpread {
    let mut out = StatSpread::default();
    for stat in ALL_STATS {
        let value = match stat {
            Stat::Hp => calc_hp(base.hp, ivs.hp, evs.hp, level),
            _ => calc_stat(base.get(stat), ivs.get(stat), evs.get(stat), level, nature, stat),
        };
        out.set(stat, value);
    }
    out
}

fn offense_stat(counter: &MoveCounter) -> Stat {
    if counter.get(counter::KEY_PHYSICAL_POOL) > counter.get(counter::KEY_SPECIAL_POOL) {
        Stat::Atk
    } else {
        Stat::Spa
    }
}

fn fast_offense(offense: Stat) -> StatSpread {
    let mut evs = StatSpread::default();
    evs.hp = 4;
    evs.spe = 252;
    evs.set(offense, 252);
    evs
}

/// Role table when a role is given, otherwise the flat legacy spread.
pub fn build_effort_values(counter: &MoveCounter, role: Option<&str>) -> StatSpread {
    let Some(role) = role else {
        return StatSpread::uniform(LEGACY_EV);
    };
    if role_is_bulky(role) {
        return StatSpread {
            hp: 252,
            def: 252,
            spd: 4,
            ..StatSpread::default()
        };
    }
    let fast_roles = ["Fast Attacker", "Choice Scarf", "Wallbreaker"];
    if fast_roles.iter().any(|tag| role.contains(tag)) {
        return fast_offense(offense_stat(counter));
    }
    if role.contains("Setup") || role.contains("Sweeper") {
        let offense = match counter.setup_type() {
            SetupType::Special => Stat::Spa,
            SetupType::Physical | SetupType::Mixed => Stat::Atk,
            _ => offense_stat(counter),
        };
        return fast_offense(offense);
    }
    if role.contains("Support") || role.contains("Pivot") {
        return StatSpread {
            hp: 252,
            def: 128,
            spd: 128,
            ..StatSpread::default()
        };
    }
    fast_offense(offense_stat(counter))
}

/// All 31, except Attack drops to 0 on purely special sets.
pub fn build_individual_values(counter: &MoveCounter) -> StatSpread {
    let mut ivs = StatSpread::uniform(MAX_IV);
    if counter.get(counter::KEY_PHYSICAL_POOL) == 0 && counter.get(counter::KEY_SPECIAL_POOL) > 0 {
        ivs.atk = 0;
    }
    ivs
}

/// Searches HP effort values downward from 85 in steps of 4 for a parity the
/// moveset benefits from. Returns `current` when nothing applies or matches.
pub fn optimize_hp_ev(current: u16, counter: &MoveCounter, base_hp: u16, level: u16) -> u16 {
    let targets: [(&str, fn(u16) -> bool); 3] = [
        (counter::KEY_STEALTH_ROCK, |hp| hp % 2 == 1),
        (counter::KEY_SUBSTITUTE, |hp| hp % 4 == 0),
        (counter::KEY_BELLY_DRUM, |hp| hp % 2 == 0 && hp % 4 != 0),
    ];
    for (key, wanted) in targets {
        if !counter.has(key) {
            continue;
        }
        let found = (1..=LEGACY_EV)
            .rev()
            .step_by(4)
            .find(|ev| wanted(calc_hp(base_hp, MAX_IV, *ev, level)));
        if let Some(ev) = found {
            return ev;
        }
    }
    current
}

pub fn is_valid_ev_spread(evs: &StatSpread, legacy_total_cap: bool) -> bool {
    ALL_STATS.iter().all(|s| evs.get(*s) <= MAX_EV)
        && (!legacy_total_cap || evs.total() <= MAX_EV_TOTAL as u32)
}

pub fn is_valid_iv_spread(ivs: &StatSpread) -> bool {
    ALL_STATS.iter().all(|s| ivs.get(*s) <= MAX_IV)
}

/// Clamps each value to 255, then trims from the last stat backwards until
/// the total fits in 510.
pub fn cap_total(evs: StatSpread) -> StatSpread {
    let mut out = evs;
    for stat in ALL_STATS {
        out.set(stat, out.get(stat).min(MAX_EV));
    }
    let mut excess = out.total().saturating_sub(MAX_EV_TOTAL as u32) as u16;
    for stat in ALL_STATS.iter().rev() {
        if excess == 0 {
            break;
        }
        let value = out.get(*stat);
        let cut = value.min(excess);
        out.set(*stat, value - cut);
        excess -= cut;
    }
    out
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
    fn hp_formula_matches_known_values() {
        // Blissey: base 255, 31 IV, 252 EV, level 100.
        assert_eq!(calc_hp(255, 31, 252, 100), 714);
        // Garchomp speed, Jolly, 252 EV.
        assert_eq!(calc_stat(102, 31, 252, 100, Nature::Jolly, Stat::Spe), 333);
        assert_eq!(calc_stat(102, 31, 252, 100, Nature::Hardy, Stat::Spe), 303);
    }

    #[test]
    fn formulas_do_not_overflow_on_extreme_inputs() {
        assert_eq!(calc_hp(400, 31, 252, 100), 1004);
        assert_eq!(calc_stat(400, 31, 252, 100, Nature::Hardy, Stat::Atk), 899);
        assert_eq!(calc_hp(u16::MAX, MAX_IV, MAX_EV, u16::MAX), u16::MAX);
        assert_eq!(calc_stat(255, 31, 252, 200, Nature::Adamant, Stat::Atk), 1334);
        // 310 * 0.9 lands exactly on 279.
        assert_eq!(calc_stat(150, 5, 0, 100, Nature::Modest, Stat::Atk), 279);
    }

    #[test]
    fn bulky_roles_ignore_moveset() {
        let expected = StatSpread {
            hp: 252,
            def: 252,
            spd: 4,
            ..StatSpread::default()
        };
        let counter = counter_for(&["Earthquake", "Close Combat", "Swords Dance", "Stone Edge"]);
        assert_eq!(build_effort_values(&counter, Some("Bulky Support")), expected);
        assert_eq!(build_effort_values(&counter, Some("Tank")), expected);
    }

    #[test]
    fn fast_attacker_maxes_dominant_offense() {
        let counter = counter_for(&["Hydro Pump", "Ice Beam", "Earthquake", "Surf"]);
        let evs = build_effort_values(&counter, Some("Fast Attacker"));
        assert_eq!((evs.spa, evs.spe, evs.hp, evs.atk), (252, 252, 4, 0));
    }

    #[test]
    fn support_splits_defenses() {
        let counter = counter_for(&["Toxic", "Recover"]);
        let evs = build_effort_values(&counter, Some("Fast Support"));
        assert_eq!((evs.hp, evs.def, evs.spd, evs.spe), (252, 128, 128, 0));
    }

    #[test]
    fn legacy_spread_is_flat() {
        let counter = counter_for(&["Tackle"]);
        let evs = build_effort_values(&counter, None);
        assert_eq!(evs, StatSpread::uniform(85));
        assert!(is_valid_ev_spread(&evs, true));
    }

    #[test]
    fn attack_iv_dropped_on_special_sets() {
        assert_eq!(build_individual_values(&counter_for(&["Surf", "Ice Beam"])).atk, 0);
        assert_eq!(build_individual_values(&counter_for(&["Surf", "Waterfall"])).atk, 31);
        assert_eq!(build_individual_values(&counter_for(&["Toxic"])).atk, 31);
    }

    #[test]
    fn hp_parity_search() {
        let sr = counter_for(&["Stealth Rock"]);
        let ev = optimize_hp_ev(85, &sr, 100, 100);
        assert_eq!(calc_hp(100, 31, ev, 100) % 2, 1);

        let sub = counter_for(&["Substitute"]);
        let ev = optimize_hp_ev(85, &sub, 100, 100);
        assert_eq!(calc_hp(100, 31, ev, 100) % 4, 0);

        let drum = counter_for(&["Belly Drum"]);
        let hp = calc_hp(100, 31, optimize_hp_ev(85, &drum, 100, 100), 100);
        assert!(hp % 2 == 0 && hp % 4 != 0);

        assert_eq!(optimize_hp_ev(85, &counter_for(&["Tackle"]), 100, 100), 85);
    }

    #[test]
    fn ev_validity_and_capping() {
        let over = StatSpread::uniform(252);
        assert!(is_valid_ev_spread(&over, false));
        assert!(!is_valid_ev_spread(&over, true));
        let capped = cap_total(over);
        assert_eq!(capped.total(), 510);
        assert!(is_valid_ev_spread(&capped, true));
        assert!(!is_valid_iv_spread(&StatSpread::uniform(32)));
        assert!(is_valid_iv_spread(&StatSpread::uniform(31)));
    }
}
