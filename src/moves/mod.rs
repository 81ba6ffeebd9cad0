pub mod classes;
pub mod table;

use crate::registry::SpeciesRegistry;
use crate::types::normalize_id;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Type reported for moves nothing knows about.
pub const UNTYPED: &str = "???";

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveCategory {
    #[serde(alias = "Physical")]
    Physical,
    #[serde(alias = "Special")]
    Special,
    #[serde(alias = "Status")]
    Status,
}

impl MoveCategory {
    pub fn is_damaging(self) -> bool {
        !matches!(self, MoveCategory::Status)
    }

    /// Counter key for this category ("Physical", "Special", "Status").
    pub fn label(self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveInfo {
    pub category: MoveCategory,
    #[serde(rename = "type")]
    pub move_type: Cow<'static, str>,
    #[serde(default)]
    pub power: u16,
}

impl MoveInfo {
    pub fn unknown() -> Self {
        MoveInfo {
            category: MoveCategory::Status,
            move_type: Cow::Borrowed(UNTYPED),
            power: 0,
        }
    }
}

/// Resolves a move through registry, static table, name heuristics, then the
/// status/untyped/zero-power default.
pub fn resolve_move_info(move_id: &str, registry: &dyn SpeciesRegistry) -> MoveInfo {
    let id = normalize_id(move_id);
    if let Some(info) = registry.lookup_move_info(&id) {
        return info;
    }
    if let Some(info) = table::MOVE_TABLE.get(id.as_str()) {
        return info.clone();
    }
    infer_from_name(&id).unwrap_or_else(MoveInfo::unknown)
}

const SPECIAL_PATTERNS: [&str; 10] = [
    "beam", "pulse", "ball", "blast", "cannon", "storm", "voice", "wave", "gem", "spout",
];
const PHYSICAL_PATTERNS: [&str; 16] = [
    "punch", "kick", "fang", "claw", "slash", "strike", "tackle", "bite", "crash", "hammer",
    "edge", "blade", "horn", "smash", "jab", "rush",
];

/// Guesses category, type and a nominal power from substrings of the id.
pub fn infer_from_name(move_id: &str) -> Option<MoveInfo> {
    let id = normalize_id(move_id);
    let category = if SPECIAL_PATTERNS.iter().any(|p| id.contains(p)) {
        MoveCategory::Special
    } else if PHYSICAL_PATTERNS.iter().any(|p| id.contains(p)) {
        MoveCategory::Physical
    } else {
        return None;
    };
    Some(MoveInfo {
        category,
        move_type: Cow::Borrowed(guess_type(&id)),
        power: 80,
    })
}

const TYPE_HINTS: [(&str, &[&str]); 17] = [
    ("Water", &["water", "aqua", "hydro"]),
    ("Electric", &["thunder", "electr", "volt", "shock", "zap"]),
    ("Fire", &["fire", "flame", "blaze", "heat", "burn"]),
    ("Ice", &["ice", "frost", "freeze", "blizzard"]),
    ("Grass", &["leaf", "seed", "vine", "petal", "wood"]),
    ("Psychic", &["psych", "confusion"]),
    ("Dark", &["dark", "bite", "crunch"]),
    ("Dragon", &["dragon", "draco"]),
    ("Ground", &["earth", "dig", "ground", "mud"]),
    ("Rock", &["rock", "stone"]),
    ("Steel", &["steel", "iron", "metal"]),
    ("Fighting", &["punch", "kick", "combat", "chop"]),
    ("Poison", &["poison", "toxic", "acid", "sludge"]),
    ("Bug", &["bug", "sting"]),
    ("Ghost", &["shadow", "phantom", "hex", "curse"]),
    ("Fairy", &["fairy", "moon", "dazzl"]),
    ("Flying", &["wing", "air", "sky", "aero"]),
];

fn guess_type(id: &str) -> &'static str {
    TYPE_HINTS
        .iter()
        .find(|(_, needles)| needles.iter().any(|n| id.contains(n)))
        .map(|(ty, _)| *ty)
        .unwrap_or("Normal")
}
