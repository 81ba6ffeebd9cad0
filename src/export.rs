use crate::model::{Gender, GeneratedSet};
use crate::stats::{Stat, StatSpread, ALL_STATS, MAX_IV};

fn label(stat: Stat) -> &'static str {
    match stat {
        Stat::Hp => "HP",
        Stat::Atk => "Atk",
        Stat::Def => "Def",
        Stat::Spa => "SpA",
        Stat::Spd => "SpD",
        Stat::Spe => "Spe",
    }
}

fn spread_line(spread: &StatSpread, skip: u16) -> Option<String> {
    let parts: Vec<String> = ALL_STATS
        .iter()
        .filter(|s| spread.get(**s) != skip)
        .map(|s| format!("{} {}", spread.get(*s), label(*s)))
        .collect();
    (!parts.is_empty()).then(|| parts.join(" / "))
}

/// Team-builder export text for one set, terminated by a newline.
pub fn to_showdown(set: &GeneratedSet) -> String {
    let mut out = String::new();
    out.push_str(&set.species);
    match set.gender {
        Gender::Male => out.push_str(" (M)"),
        Gender::Female => out.push_str(" (F)"),
        Gender::Genderless => {}
    }
    if let Some(item) = &set.item {
        out.push_str(&format!(" @ {item}"));
    }
    out.push('\n');
    out.push_str(&format!("Ability: {}\n", set.ability));
    if set.level != 100 {
        out.push_str(&format!("Level: {}\n", set.level));
    }
    if let Some(evs) = spread_line(&set.evs, 0) {
        out.push_str(&format!("EVs: {evs}\n"));
    }
    out.push_str(&format!("{} Nature\n", set.nature));
    if let Some(ivs) = spread_line(&set.ivs, MAX_IV) {
        out.push_str(&format!("IVs: {ivs}\n"));
    }
    for mv in &set.moves {
        out.push_str(&format!("- {mv}\n"));
    }
    out
}
