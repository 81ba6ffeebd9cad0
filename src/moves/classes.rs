//! Named move classes keyed by normalized move id.

use crate::counter::SetupType;
use phf::phf_set;

pub static PHYSICAL_SETUP: phf::Set<&'static str> = phf_set! {
    "bellydrum", "bulkup", "coil", "curse", "dragondance", "honeclaws", "howl", "meditate",
    "poweruppunch", "swordsdance", "shiftgear", "victorydance",
};

pub static SPECIAL_SETUP: phf::Set<&'static str> = phf_set! {
    "calmmind", "chargebeam", "geomancy", "nastyplot", "quiverdance", "tailglow", "takeheart",
    "torchsong",
};

pub static MIXED_SETUP: phf::Set<&'static str> = phf_set! {
    "growth", "happyhour", "holdhands", "celebrate", "shellsmash", "workup", "clangoroussoul",
    "noretreat",
};

pub static SPEED_SETUP: phf::Set<&'static str> = phf_set! {
    "agility", "autotomize", "flamecharge", "rockpolish", "trailblaze", "aquastep",
};

pub static HAZARDS: phf::Set<&'static str> = phf_set! {
    "spikes", "stealthrock", "stickyweb", "toxicspikes",
};

pub static RECOVERY: phf::Set<&'static str> = phf_set! {
    "healorder", "milkdrink", "moonlight", "morningsun", "recover", "roost", "shoreup",
    "slackoff", "softboiled", "synthesis", "wish", "strengthsap", "junglehealing", "lifedew",
};

/// Moves that self-inflict stat drops, which a contrary ability turns into boosts.
pub static CONTRARY: phf::Set<&'static str> = phf_set! {
    "closecombat", "dracometeor", "hammerarm", "hyperspacefury", "leafstorm", "overheat",
    "psychoboost", "superpower", "vcreate", "fleurcannon", "makeitrain", "armorcannon",
};

/// Damaging moves that are worth running without a type match.
pub static STAB_EXEMPT: phf::Set<&'static str> = phf_set! {
    "accelerock", "aquajet", "bulletpunch", "explosion", "extremespeed", "fakeout", "feint",
    "firstimpression", "flamecharge", "iceshard", "machpunch", "pursuit", "quickattack",
    "selfdestruct", "shadowsneak", "suckerpunch", "vacuumwave", "watershuriken",
};

pub static PRIORITY: phf::Set<&'static str> = phf_set! {
    "accelerock", "aquajet", "bulletpunch", "extremespeed", "fakeout", "feint",
    "firstimpression", "iceshard", "jetpunch", "machpunch", "quickattack", "shadowsneak",
    "suckerpunch", "vacuumwave", "watershuriken", "grassyglide", "thunderclap", "zippyzap",
};

pub static RECOIL: phf::Set<&'static str> = phf_set! {
    "bravebird", "doubleedge", "flareblitz", "headcharge", "headsmash", "submission", "takedown",
    "volttackle", "wildcharge", "woodhammer", "wavecrash", "headlongrush",
};

pub static DRAIN: phf::Set<&'static str> = phf_set! {
    "absorb", "drainpunch", "drainingkiss", "dreameater", "gigadrain", "hornleech", "leechlife",
    "megadrain", "oblivionwing", "paraboliccharge", "bitterblade", "matchagotcha",
};

pub static PIVOT: phf::Set<&'static str> = phf_set! {
    "batonpass", "flipturn", "partingshot", "teleport", "uturn", "voltswitch", "shedtail",
    "chillyreception",
};

pub static SOUND: phf::Set<&'static str> = phf_set! {
    "alluringvoice", "boomburst", "bugbuzz", "chatter", "clangoroussoul", "disarmingvoice",
    "echoedvoice", "grasswhistle", "growl", "hypervoice", "metalsound", "nobleroar", "overdrive",
    "perishsong", "psychicnoise", "relicsong", "round", "screech", "sing", "snore",
    "sparklingaria", "supersonic", "torchsong", "uproar",
};

pub static PUNCH: phf::Set<&'static str> = phf_set! {
    "bulletpunch", "cometpunch", "dizzypunch", "drainpunch", "dynamicpunch", "firepunch",
    "focuspunch", "hammerarm", "icepunch", "jetpunch", "machpunch", "megapunch", "meteormash",
    "plasmafists", "poweruppunch", "ragefist", "shadowpunch", "skyuppercut", "thunderpunch",
};

pub static BITE: phf::Set<&'static str> = phf_set! {
    "bite", "crunch", "firefang", "fishiousrend", "hyperfang", "icefang", "jawlock",
    "poisonfang", "psychicfangs", "thunderfang",
};

pub static MULTI_HIT: phf::Set<&'static str> = phf_set! {
    "armthrust", "barrage", "bonerush", "bulletseed", "cometpunch", "doubleslap", "furyattack",
    "furyswipes", "iciclespear", "pinmissile", "populationbomb", "rockblast", "scaleshot",
    "spikecannon", "tailslap", "watershuriken", "tripleaxel",
};

/// Damaging moves with a secondary effect that sheer force removes.
pub static SECONDARY_EFFECT: phf::Set<&'static str> = phf_set! {
    "airslash", "ancientpower", "astonish", "aurasphere", "bite", "blizzard", "bodyslam",
    "bounce", "bugbuzz", "bulldoze", "chargebeam", "crunch", "crushclaw", "darkpulse",
    "discharge", "earthpower", "energyball", "extrasensory", "fakeout", "fireblast", "firefang",
    "firepunch", "flamethrower", "flashcannon", "focusblast", "gunkshot", "headbutt",
    "heatwave", "hurricane", "icebeam", "icefang", "icepunch", "iciclecrash", "ironhead",
    "lavaplume", "lick", "mudshot", "muddywater", "poisonjab", "powergem", "psychic",
    "razorshell", "rockslide", "scald", "seedflare", "shadowball", "signalbeam", "silverwind",
    "sludgebomb", "sludgewave", "smog", "snore", "stomp", "thunder", "thunderbolt",
    "thunderfang", "thunderpunch", "triattack", "twister", "waterfall", "waterpulse",
    "zenheadbutt", "zingzap",
};

pub static CONTACT: phf::Set<&'static str> = phf_set! {
    "aerialace", "aquajet", "aquatail", "armthrust", "assurance", "bodypress", "bodyslam",
    "bounce", "bravebird", "brickbreak", "bugbite", "closecombat", "cometpunch", "crabhammer",
    "crosschop", "crosspoison", "crunch", "crushclaw", "dig", "dive", "doubleedge", "doublehit",
    "doublekick", "dragonclaw", "dragonrush", "dragontail", "drainpunch", "drillpeck",
    "drillrun", "dualchop", "dynamicpunch", "endeavor", "extremespeed", "facade", "fakeout",
    "falseswipe", "firefang", "firelash", "firepunch", "firstimpression", "flamecharge",
    "flamewheel", "flareblitz", "fly", "focuspunch", "furyattack", "furyswipes", "gigaimpact",
    "grassknot", "grassyglide", "gyroball", "hammerarm", "headbutt", "headcharge", "headsmash",
    "heatcrash", "heavyslam", "highhorsepower", "highjumpkick", "hornattack", "hornleech",
    "hyperfang", "icefang", "icehammer", "icepunch", "ironhead", "irontail", "jawlock",
    "jumpkick", "karatechop", "knockoff", "lashout", "lastresort", "leafblade", "leechlife",
    "lick", "liquidation", "lowkick", "lowsweep", "machpunch", "megahorn", "megakick",
    "megapunch", "meteormash", "nightslash", "nuzzle", "outrage", "payback", "phantomforce",
    "playrough", "pluck", "poisonfang", "poisonjab", "poisontail", "pound", "powertrip",
    "poweruppunch", "powerwhip", "psychicfangs", "pursuit", "quickattack", "rapidspin",
    "razorshell", "retaliate", "return", "revenge", "reversal", "rollout", "sacredsword",
    "scratch", "seismictoss", "shadowclaw", "shadowforce", "shadowpunch", "shadowsneak",
    "skyuppercut", "slam", "slash", "smartstrike", "spiritbreak", "steelwing", "stomp",
    "stompingtantrum", "stormthrow", "strength", "suckerpunch", "superfang", "superpower",
    "tackle", "takedown", "thief", "thrash", "throatchop", "thunderfang", "thunderpunch",
    "tripleaxel", "uturn", "vcreate", "volttackle", "waterfall", "wavecrash", "wildcharge",
    "wingattack", "woodhammer", "xscissor", "zenheadbutt", "zingzap", "zippyzap",
};

pub static BULLET: phf::Set<&'static str> = phf_set! {
    "acidspray", "aurasphere", "barrage", "bulletseed", "electroball", "energyball",
    "focusblast", "gyroball", "iceball", "magnetbomb", "mistball", "mudbomb", "octazooka",
    "pollenpuff", "pyroball", "rockblast", "rockwrecker", "searingshot", "seedbomb",
    "shadowball", "sludgebomb", "weatherball", "zapcannon",
};

pub static POWDER: phf::Set<&'static str> = phf_set! {
    "cottonspore", "magicpowder", "poisonpowder", "powder", "ragepowder", "sleeppowder",
    "spore", "stunspore",
};

pub static SCREENS: phf::Set<&'static str> = phf_set! {
    "auroraveil", "lightscreen", "reflect",
};

pub static PROTECT: phf::Set<&'static str> = phf_set! {
    "banefulbunker", "burningbulwark", "detect", "kingsshield", "obstruct", "protect",
    "silktrap", "spikyshield",
};

pub static HAZARD_REMOVAL: phf::Set<&'static str> = phf_set! {
    "defog", "mortalspin", "rapidspin", "tidyup",
};

/// Burn / paralysis / poison infliction.
pub static STATUS_INFLICTION: phf::Set<&'static str> = phf_set! {
    "glare", "poisonpowder", "stunspore", "thunderwave", "toxic", "willowisp",
};

/// Moves that are dead weight while locked by a choice item.
pub static CHOICE_INCOMPATIBLE: phf::Set<&'static str> = phf_set! {
    "dragontail", "fakeout", "firstimpression", "flamecharge", "healingwish", "partingshot",
    "rapidspin", "switcheroo", "trick",
};

/// Strongest first; a held hazard culls every weaker one.
pub const HAZARD_RANKING: [&str; 4] = ["stealthrock", "spikes", "stickyweb", "toxicspikes"];

/// Preferred first; at most one remover is kept.
pub const HAZARD_REMOVAL_RANKING: [&str; 4] = ["defog", "rapidspin", "mortalspin", "tidyup"];

pub fn setup_kind(move_id: &str) -> SetupType {
    if PHYSICAL_SETUP.contains(move_id) {
        SetupType::Physical
    } else if SPECIAL_SETUP.contains(move_id) {
        SetupType::Special
    } else if MIXED_SETUP.contains(move_id) {
        SetupType::Mixed
    } else if SPEED_SETUP.contains(move_id) {
        SetupType::Speed
    } else {
        SetupType::None
    }
}

pub fn is_hazard(move_id: &str) -> bool {
    HAZARDS.contains(move_id)
}

pub fn is_recovery(move_id: &str) -> bool {
    RECOVERY.contains(move_id)
}

pub fn is_priority(move_id: &str) -> bool {
    PRIORITY.contains(move_id)
}

pub fn is_pivot(move_id: &str) -> bool {
    PIVOT.contains(move_id)
}

pub fn is_stab_exempt(move_id: &str) -> bool {
    STAB_EXEMPT.contains(move_id)
}

pub fn is_protect(move_id: &str) -> bool {
    PROTECT.contains(move_id)
}

pub fn is_screen(move_id: &str) -> bool {
    SCREENS.contains(move_id)
}

pub fn is_hazard_removal(move_id: &str) -> bool {
    HAZARD_REMOVAL.contains(move_id)
}

pub fn is_status_infliction(move_id: &str) -> bool {
    STATUS_INFLICTION.contains(move_id)
}

pub fn is_choice_incompatible(move_id: &str) -> bool {
    CHOICE_INCOMPATIBLE.contains(move_id)
}

/// Position in `ranking`, lower is better. Unranked moves sort last.
pub fn rank_of(ranking: &[&str], move_id: &str) -> usize {
    ranking
        .iter()
        .position(|candidate| *candidate == move_id)
        .unwrap_or(ranking.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_kind_is_exclusive() {
        assert_eq!(setup_kind("swordsdance"), SetupType::Physical);
        assert_eq!(setup_kind("nastyplot"), SetupType::Special);
        assert_eq!(setup_kind("shellsmash"), SetupType::Mixed);
        assert_eq!(setup_kind("agility"), SetupType::Speed);
        assert_eq!(setup_kind("earthquake"), SetupType::None);
        for id in PHYSICAL_SETUP.iter() {
            assert!(
                !SPECIAL_SETUP.contains(*id) && !MIXED_SETUP.contains(*id) && !SPEED_SETUP.contains(*id)
            );
        }
    }

    #[test]
    fn stab_exempt_overlaps_priority() {
        assert!(is_stab_exempt("suckerpunch"));
        assert!(is_priority("suckerpunch"));
        assert!(is_stab_exempt("explosion"));
        assert!(!is_priority("explosion"));
    }

    #[test]
    fn rankings_order_hazards() {
        assert!(rank_of(&HAZARD_RANKING, "stealthrock") < rank_of(&HAZARD_RANKING, "spikes"));
        assert_eq!(rank_of(&HAZARD_RANKING, "earthquake"), HAZARD_RANKING.len());
        assert!(
            rank_of(&HAZARD_REMOVAL_RANKING, "defog") < rank_of(&HAZARD_REMOVAL_RANKING, "rapidspin")
        );
    }

    #[test]
    fn classified_moves_exist_in_table() {
        for set in [&HAZARDS, &RECOVERY, &PRIORITY, &PIVOT, &SCREENS, &PROTECT, &HAZARD_REMOVAL] {
            for id in set.iter() {
                assert!(crate::moves::table::MOVE_TABLE.contains_key(*id), "{id} missing");
            }
        }
    }
}
