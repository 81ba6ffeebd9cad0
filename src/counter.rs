use crate::moves::MoveCategory;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

// Counter keys. Category counts use `MoveCategory::label`, type counts use the
// normalized type id ("fire", "water", ...).
pub const KEY_STAB: &str = "stab";
pub const KEY_PHYSICAL_POOL: &str = "physicalpool";
pub const KEY_SPECIAL_POOL: &str = "specialpool";
pub const KEY_SETUP: &str = "setup";
pub const KEY_PHYSICAL_SETUP: &str = "physicalsetup";
pub const KEY_SPECIAL_SETUP: &str = "specialsetup";
pub const KEY_MIXED_SETUP: &str = "mixedsetup";
pub const KEY_SPEED_SETUP: &str = "speedsetup";
pub const KEY_HAZARDS: &str = "hazards";
pub const KEY_RECOVERY: &str = "recovery";
pub const KEY_PRIORITY: &str = "priority";
pub const KEY_RECOIL: &str = "recoil";
pub const KEY_DRAIN: &str = "drain";
pub const KEY_PIVOT: &str = "pivot";
pub const KEY_SOUND: &str = "sound";
pub const KEY_CONTACT: &str = "contact";
pub const KEY_BULLET: &str = "bullet";
pub const KEY_POWDER: &str = "powder";
pub const KEY_PROTECT: &str = "protect";

// Ability synergy keys share their name with the ability that wants them.
pub const KEY_SKILL_LINK: &str = "skilllink";
pub const KEY_IRON_FIST: &str = "ironfist";
pub const KEY_STRONG_JAW: &str = "strongjaw";
pub const KEY_CONTRARY: &str = "contrary";
pub const KEY_SHEER_FORCE: &str = "sheerforce";
pub const KEY_TOUGH_CLAWS: &str = "toughclaws";
pub const KEY_TECHNICIAN: &str = "technician";
pub const KEY_ADAPTABILITY: &str = "adaptability";

// Individually tracked moves.
pub const KEY_BELLY_DRUM: &str = "bellydrum";
pub const KEY_SUBSTITUTE: &str = "substitute";
pub const KEY_REST: &str = "rest";
pub const KEY_SLEEP_TALK: &str = "sleeptalk";
pub const KEY_KNOCK_OFF: &str = "knockoff";
pub const KEY_HAZARD_REMOVAL: &str = "hazardremoval";
pub const KEY_SCREENS: &str = "screens";
pub const KEY_STATUS_MOVE: &str = "statusmove";
pub const KEY_STEALTH_ROCK: &str = "stealthrock";
pub const KEY_SPIKES: &str = "spikes";
pub const KEY_STICKY_WEB: &str = "stickyweb";
pub const KEY_TOXIC_SPIKES: &str = "toxicspikes";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SetupType {
    #[default]
    None,
    Physical,
    Special,
    Mixed,
    Speed,
}

pub fn allows_physical(setup: SetupType) -> bool {
    matches!(setup, SetupType::Physical | SetupType::Mixed)
}

/// Physical, special or mixed. Speed-only setup does not count.
pub fn is_offensive(setup: SetupType) -> bool {
    matches!(setup, SetupType::Physical | SetupType::Special | SetupType::Mixed)
}

/// Folds one more setup move into the aggregate setup type: the first setup
/// move decides, and only a physical/special pair upgrades to mixed.
pub fn merge_setup(current: SetupType, incoming: SetupType) -> SetupType {
    match (current, incoming) {
        (_, SetupType::None) => current,
        (SetupType::None, _) => incoming,
        (_, SetupType::Speed) => current,
        (SetupType::Physical, SetupType::Special) | (SetupType::Special, SetupType::Physical) => {
            SetupType::Mixed
        }
        _ => current,
    }
}

/// Aggregate properties of a candidate moveset. Built fresh per analysis.
#[derive(Clone, Debug, Default)]
pub struct MoveCounter {
    counts: HashMap<String, u32>,
    setup_type: SetupType,
    damaging: BTreeMap<String, MoveCategory>,
}

impl MoveCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> u32 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    pub fn has(&self, key: &str) -> bool {
        self.get(key) > 0
    }

    pub fn add(&mut self, key: &str) {
        *self.counts.entry(key.to_string()).or_insert(0) += 1;
    }

    pub fn setup_type(&self) -> SetupType {
        self.setup_type
    }

    pub fn set_setup_type(&mut self, setup: SetupType) {
        self.setup_type = setup;
    }

    pub fn add_setup(&mut self, setup: SetupType) {
        self.setup_type = merge_setup(self.setup_type, setup);
    }

    pub fn add_damaging_move(&mut self, move_id: &str, category: MoveCategory) {
        self.damaging.insert(move_id.to_string(), category);
    }

    pub fn is_damaging(&self, move_id: &str) -> bool {
        self.damaging.contains_key(move_id)
    }

    pub fn damaging_category(&self, move_id: &str) -> Option<MoveCategory> {
        self.damaging.get(move_id).copied()
    }

    pub fn damaging_count(&self) -> usize {
        self.damaging.len()
    }

    pub fn physical(&self) -> u32 {
        self.get(MoveCategory::Physical.label())
    }

    pub fn special(&self) -> u32 {
        self.get(MoveCategory::Special.label())
    }

    pub fn status(&self) -> u32 {
        self.get(MoveCategory::Status.label())
    }
}
