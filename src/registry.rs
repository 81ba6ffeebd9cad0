use crate::moves::MoveInfo;
use crate::stats::StatSpread;
use crate::types::{canonical_type, normalize_id};
use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Read-only species and move reference data consulted during generation.
///
/// Implementations are shared across generation threads and never mutated by
/// the engine.
pub trait SpeciesRegistry: Sync {
    fn resolve_types(&self, species: &str) -> Vec<String>;

    fn resolve_base_abilities(&self, species: &str) -> Vec<String>;

    fn lookup_move_info(&self, move_id: &str) -> Option<MoveInfo>;

    fn resolve_base_stats(&self, _species: &str) -> Option<StatSpread> {
        None
    }

    /// Competitive roles the species can be generated in.
    fn role_variants(&self, _species: &str) -> Vec<RoleVariant> {
        Vec::new()
    }

    /// Display names of every species with at least one role, in a stable order.
    fn species_with_roles(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Knows nothing; every lookup falls through to the built-in defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct EmptyRegistry;

impl SpeciesRegistry for EmptyRegistry {
    fn resolve_types(&self, _species: &str) -> Vec<String> {
        Vec::new()
    }

    fn resolve_base_abilities(&self, _species: &str) -> Vec<String> {
        Vec::new()
    }

    fn lookup_move_info(&self, _move_id: &str) -> Option<MoveInfo> {
        None
    }
}

/// One role a species can be generated in, with that role's candidate pools.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleVariant {
    pub role: String,
    #[serde(default)]
    pub level: Option<u16>,
    #[serde(default)]
    pub moves: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesEntry {
    /// Display name; filled from the snapshot key when absent.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub abilities: Vec<String>,
    #[serde(default)]
    pub base_stats: Option<StatSpread>,
    #[serde(default)]
    pub roles: Vec<RoleVariant>,
}

impl SpeciesEntry {
    /// Fills the display name and canonicalizes type spellings.
    fn normalized(mut self, key: &str) -> Self {
        self.name.get_or_insert_with(|| key.trim().to_string());
        for ty in &mut self.types {
            if let Some(canonical) = canonical_type(ty) {
                *ty = canonical.to_string();
            }
        }
        self
    }
}

/// In-memory snapshot loaded from a JSON file:
/// `{"species": {id: {types, abilities, baseStats, roles}}, "moves": {id: {category, type, power}}}`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct StaticRegistry {
    #[serde(default)]
    species: HashMap<String, SpeciesEntry>,
    #[serde(default)]
    moves: HashMap<String, MoveInfo>,
}

impl StaticRegistry {
    pub fn from_json(raw: &str) -> anyhow::Result<Self> {
        let parsed: StaticRegistry =
            serde_json::from_str(raw).context("Failed to parse registry JSON")?;
        Ok(parsed.normalized())
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read registry file at {}", path.display()))?;
        Self::from_json(&raw).with_context(|| format!("Invalid registry in {}", path.display()))
    }

    pub fn insert_species(&mut self, species: &str, entry: SpeciesEntry) {
        self.species
            .insert(normalize_id(species), entry.normalized(species));
    }

    pub fn insert_move(&mut self, move_id: &str, info: MoveInfo) {
        self.moves.insert(normalize_id(move_id), info);
    }

    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    fn normalized(self) -> Self {
        StaticRegistry {
            species: self
                .species
                .into_iter()
                .map(|(id, entry)| (normalize_id(&id), entry.normalized(&id)))
                .collect(),
            moves: self
                .moves
                .into_iter()
                .map(|(id, info)| (normalize_id(&id), info))
                .collect(),
        }
    }

    fn species_entry(&self, species: &str) -> Option<&SpeciesEntry> {
        self.species.get(&normalize_id(species))
    }
}

impl SpeciesRegistry for StaticRegistry {
    fn resolve_types(&self, species: &str) -> Vec<String> {
        self.species_entry(species)
            .map(|entry| entry.types.clone())
            .unwrap_or_default()
    }

    fn resolve_base_abilities(&self, species: &str) -> Vec<String> {
        self.species_entry(species)
            .map(|entry| entry.abilities.clone())
            .unwrap_or_default()
    }

    fn lookup_move_info(&self, move_id: &str) -> Option<MoveInfo> {
        self.moves.get(&normalize_id(move_id)).cloned()
    }

    fn resolve_base_stats(&self, species: &str) -> Option<StatSpread> {
        self.species_entry(species).and_then(|entry| entry.base_stats)
    }

    fn role_variants(&self, species: &str) -> Vec<RoleVariant> {
        self.species_entry(species)
            .map(|entry| entry.roles.clone())
            .unwrap_or_default()
    }

    fn species_with_roles(&self) -> Vec<String> {
        let mut with_roles: Vec<(&String, &SpeciesEntry)> = self
            .species
            .iter()
            .filter(|(_, entry)| !entry.roles.is_empty())
            .collect();
        with_roles.sort_by(|a, b| a.0.cmp(b.0));
        with_roles
            .into_iter()
            .map(|(id, entry)| entry.name.clone().unwrap_or_else(|| id.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::MoveCategory;

    const SNAPSHOT: &str = r#"{
        "species": {
            "Great Tusk": {
                "types": ["Ground", "Fighting"],
                "abilities": ["Protosynthesis"],
                "baseStats": {"hp": 115, "atk": 131, "def": 131, "spa": 53, "spd": 53, "spe": 87}
            }
        },
        "moves": {
            "Headlong Rush": {"category": "physical", "type": "Ground", "power": 120}
        }
    }"#;

    #[test]
    fn lookups_normalize_keys() -> anyhow::Result<()> {
        let registry = StaticRegistry::from_json(SNAPSHOT)?;
        assert_eq!(registry.resolve_types("greattusk"), vec!["Ground", "Fighting"]);
        assert_eq!(registry.resolve_base_abilities("GREAT-TUSK"), vec!["Protosynthesis"]);
        assert_eq!(registry.resolve_base_stats("great tusk").map(|s| s.hp), Some(115));
        let info = registry
            .lookup_move_info("headlongrush")
            .ok_or_else(|| anyhow::anyhow!("move missing"))?;
        assert_eq!(info.category, MoveCategory::Physical);
        assert_eq!(info.power, 120);
        Ok(())
    }

    #[test]
    fn unknown_species_resolves_to_nothing() -> anyhow::Result<()> {
        let registry = StaticRegistry::from_json(SNAPSHOT)?;
        assert!(registry.resolve_types("missingno").is_empty());
        assert!(registry.resolve_base_stats("missingno").is_none());
        assert!(EmptyRegistry.lookup_move_info("tackle").is_none());
        Ok(())
    }

    #[test]
    fn snapshot_types_are_canonicalized() -> anyhow::Result<()> {
        let registry = StaticRegistry::from_json(
            r#"{"species": {"Rotom-Wash": {"types": ["electric", "WATER", "Shadow"]}}}"#,
        )?;
        assert_eq!(registry.resolve_types("rotomwash"), vec!["Electric", "Water", "Shadow"]);
        Ok(())
    }

    #[test]
    fn inserted_entries_are_visible() {
        let mut registry = StaticRegistry::default();
        registry.insert_species(
            "Iron Valiant",
            SpeciesEntry {
                types: vec!["fairy".to_string(), "Fighting".to_string()],
                roles: vec![RoleVariant {
                    role: "Fast Attacker".to_string(),
                    moves: vec!["Moonblast".to_string()],
                    ..RoleVariant::default()
                }],
                ..SpeciesEntry::default()
            },
        );
        registry.insert_species("Blissey", SpeciesEntry::default());
        registry.insert_move(
            "Spirit Break",
            MoveInfo {
                category: MoveCategory::Physical,
                move_type: "Fairy".into(),
                power: 75,
            },
        );
        assert_eq!(registry.species_count(), 2);
        assert_eq!(registry.move_count(), 1);
        assert_eq!(registry.resolve_types("iron-valiant"), vec!["Fairy", "Fighting"]);
        assert_eq!(registry.species_with_roles(), vec!["Iron Valiant"]);
        assert_eq!(registry.role_variants("Iron Valiant")[0].role, "Fast Attacker");
        assert!(registry.role_variants("Blissey").is_empty());
        let resolved = crate::moves::resolve_move_info("spiritbreak", &registry);
        assert_eq!((resolved.category, resolved.power), (MoveCategory::Physical, 75));
    }

    #[test]
    fn malformed_snapshot_is_an_error() {
        assert!(StaticRegistry::from_json("{\"species\": 3}").is_err());
    }
}
