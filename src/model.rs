use crate::natures::Nature;
use crate::stats::StatSpread;
use serde::{Deserialize, Serialize};

fn default_level() -> u16 {
    100
}

/// One creature's candidate pools, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateInput {
    pub species: String,
    #[serde(default = "default_level")]
    pub level: u16,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    /// Advisory only; the item selector decides.
    #[serde(default)]
    pub items: Vec<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl CandidateInput {
    pub fn new(species: impl Into<String>, level: u16) -> Self {
        CandidateInput {
            species: species.into(),
            level,
            moves: Vec::new(),
            abilities: Vec::new(),
            items: Vec::new(),
            types: Vec::new(),
            role: None,
        }
    }

    pub fn with_moves(mut self, moves: &[&str]) -> Self {
        self.moves = moves.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn with_abilities(mut self, abilities: &[&str]) -> Self {
        self.abilities = abilities.iter().map(|a| a.to_string()).collect();
        self
    }

    pub fn with_types(mut self, types: &[&str]) -> Self {
        self.types = types.iter().map(|t| t.to_string()).collect();
        self
    }

    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Genderless,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSet {
    pub species: String,
    pub level: u16,
    pub ability: String,
    pub item: Option<String>,
    /// Always four distinct moves.
    pub moves: Vec<String>,
    pub evs: StatSpread,
    pub ivs: StatSpread,
    pub nature: Nature,
    pub gender: Gender,
    pub role: Option<String>,
    /// Present when the registry knows the species' base stats.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_stats: Option<StatSpread>,
}
