use pokemon_set_generator::batch::{candidate_seed, render_sets};
use pokemon_set_generator::generator::{generate_for_species, pick_role_variant};
use pokemon_set_generator::moves::{MoveCategory, MoveInfo};
use pokemon_set_generator::registry::{
    EmptyRegistry, RoleVariant, SpeciesEntry, SpeciesRegistry, StaticRegistry,
};
use pokemon_set_generator::{
    generate_batch, generate_team, validate_candidates, write_sets, CandidateInput,
    GeneratorOptions, OutputFormat,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::BTreeSet;

fn candidates() -> Vec<CandidateInput> {
    (0..12)
        .map(|i| {
            CandidateInput::new(format!("Garchomp{i}"), 100)
                .with_moves(&[
                    "Earthquake",
                    "Outrage",
                    "Stone Edge",
                    "Swords Dance",
                    "Fire Fang",
                    "Stealth Rock",
                ])
                .with_abilities(&["Rough Skin"])
                .with_types(&["Dragon", "Ground"])
        })
        .collect()
}

#[test]
fn batch_preserves_order_and_is_deterministic() {
    let input = candidates();
    let options = GeneratorOptions::default();
    let first = generate_batch(&input, &EmptyRegistry, &options, 42);
    let second = generate_batch(&input, &EmptyRegistry, &options, 42);
    assert_eq!(first.len(), input.len());
    for (set, candidate) in first.iter().zip(&input) {
        assert_eq!(set.species, candidate.species);
    }
    assert_eq!(first, second);
}

#[test]
fn candidate_seeds_differ_per_index() {
    let seeds: Vec<u64> = (0..64).map(|i| candidate_seed(7, i)).collect();
    let mut unique = seeds.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), seeds.len());
}

#[test]
fn renders_json_and_showdown() -> anyhow::Result<()> {
    let sets = generate_batch(&candidates()[..2], &EmptyRegistry, &GeneratorOptions::default(), 3);
    let json = render_sets(&sets, OutputFormat::Json)?;
    let parsed: serde_json::Value = serde_json::from_str(&json)?;
    assert_eq!(parsed.as_array().map(|a| a.len()), Some(2));
    assert_eq!(parsed[0]["moves"].as_array().map(|m| m.len()), Some(4));

    let text = render_sets(&sets, OutputFormat::Showdown)?;
    assert_eq!(text.matches("Ability: Rough Skin").count(), 2);
    assert_eq!(text.lines().filter(|l| l.starts_with("- ")).count(), 8);
    Ok(())
}

#[test]
fn writes_output_file() -> anyhow::Result<()> {
    let sets = generate_batch(&candidates()[..1], &EmptyRegistry, &GeneratorOptions::default(), 0);
    let path = std::env::temp_dir().join(format!("set_generator_{}.json", std::process::id()));
    write_sets(&sets, &path, OutputFormat::Json)?;
    let written = std::fs::read_to_string(&path)?;
    std::fs::remove_file(&path)?;
    assert!(written.contains("\"species\": \"Garchomp0\""));
    Ok(())
}

#[test]
fn rejects_out_of_range_levels_and_blank_species() {
    assert!(validate_candidates(&candidates()).is_ok());
    assert!(validate_candidates(&[CandidateInput::new("Garchomp", 0)]).is_err());
    assert!(validate_candidates(&[CandidateInput::new("Garchomp", 101)]).is_err());
    assert!(validate_candidates(&[CandidateInput::new("  ", 50)]).is_err());
}

fn role(name: &str, level: Option<u16>, moves: &[&str], abilities: &[&str]) -> RoleVariant {
    RoleVariant {
        role: name.to_string(),
        level,
        moves: moves.iter().map(|m| m.to_string()).collect(),
        abilities: abilities.iter().map(|a| a.to_string()).collect(),
        items: Vec::new(),
    }
}

fn species(types: &[&str], roles: Vec<RoleVariant>) -> SpeciesEntry {
    SpeciesEntry {
        types: types.iter().map(|t| t.to_string()).collect(),
        roles,
        ..SpeciesEntry::default()
    }
}

fn roster_registry() -> StaticRegistry {
    let mut registry = StaticRegistry::default();
    registry.insert_species(
        "Garchomp",
        species(
            &["Dragon", "Ground"],
            vec![
                role(
                    "Fast Attacker",
                    None,
                    &["Earthquake", "Outrage", "Stone Edge", "Swords Dance", "Fire Fang"],
                    &["Rough Skin"],
                ),
                role(
                    "Bulky Support",
                    Some(86),
                    &["Earthquake", "Dragon Tail", "Stealth Rock", "Spikes", "Toxic"],
                    &["Rough Skin"],
                ),
                role(
                    "Setup Sweeper",
                    Some(84),
                    &["Scale Shot", "Earthquake", "Swords Dance", "Iron Head", "Fire Fang"],
                    &["Rough Skin"],
                ),
            ],
        ),
    );
    registry.insert_species(
        "Toxapex",
        species(
            &["Poison", "Water"],
            vec![role(
                "Bulky Support",
                Some(88),
                &["Scald", "Toxic", "Recover", "Haze", "Toxic Spikes"],
                &["Regenerator"],
            )],
        ),
    );
    registry.insert_species(
        "Gholdengo",
        species(
            &["Steel", "Ghost"],
            vec![role(
                "Fast Attacker",
                Some(78),
                &["Make It Rain", "Shadow Ball", "Nasty Plot", "Trick", "Focus Blast"],
                &["Good as Gold"],
            )],
        ),
    );
    registry.insert_species(
        "Iron Valiant",
        species(
            &["Fairy", "Fighting"],
            vec![role(
                "Fast Attacker",
                Some(80),
                &["Moonblast", "Close Combat", "Spirit Break", "Knock Off", "Swords Dance"],
                &["Quark Drive"],
            )],
        ),
    );
    registry.insert_species(
        "Corviknight",
        species(
            &["Flying", "Steel"],
            vec![role(
                "Bulky Support",
                Some(82),
                &["Brave Bird", "Body Press", "Roost", "Defog", "U-turn"],
                &["Pressure"],
            )],
        ),
    );
    // Roleless species are never drafted.
    registry.insert_species("Ditto", species(&["Normal"], Vec::new()));
    registry.insert_move(
        "Spirit Break",
        MoveInfo {
            category: MoveCategory::Physical,
            move_type: "Fairy".into(),
            power: 75,
        },
    );
    registry
}

#[test]
fn role_pick_is_seeded_and_reaches_every_role() {
    let registry = roster_registry();
    let mut seen = BTreeSet::new();
    for seed in 0..64 {
        let first = pick_role_variant("Garchomp", &registry, &mut SmallRng::seed_from_u64(seed));
        let second = pick_role_variant("Garchomp", &registry, &mut SmallRng::seed_from_u64(seed));
        let first = first.expect("Garchomp has roles");
        assert_eq!(Some(&first), second.as_ref());
        assert!(first.types.is_empty());
        seen.insert((first.role.clone(), first.level));
    }
    let expected: BTreeSet<(Option<String>, u16)> = [
        (Some("Fast Attacker".to_string()), 100),
        (Some("Bulky Support".to_string()), 86),
        (Some("Setup Sweeper".to_string()), 84),
    ]
    .into_iter()
    .collect();
    assert_eq!(seen, expected);
}

#[test]
fn species_without_roles_are_skipped() {
    let registry = roster_registry();
    let mut rng = SmallRng::seed_from_u64(1);
    assert!(pick_role_variant("Ditto", &registry, &mut rng).is_none());
    assert!(pick_role_variant("Missingno", &registry, &mut rng).is_none());
    assert!(pick_role_variant("Garchomp", &EmptyRegistry, &mut rng).is_none());
    assert!(generate_for_species("Ditto", &registry, &GeneratorOptions::default(), &mut rng).is_none());
}

#[test]
fn role_sets_come_from_the_picked_role() {
    let registry = roster_registry();
    let options = GeneratorOptions::default();
    for seed in 0..32 {
        let picked = pick_role_variant("Garchomp", &registry, &mut SmallRng::seed_from_u64(seed))
            .expect("Garchomp has roles");
        let set = generate_for_species("Garchomp", &registry, &options, &mut SmallRng::seed_from_u64(seed))
            .expect("Garchomp has roles");
        assert_eq!(set.role, picked.role);
        assert_eq!(set.level, picked.level);
        assert_eq!(set.moves.len(), 4);
        for mv in &set.moves {
            assert!(picked.moves.contains(mv), "{mv} not in {:?}", picked.moves);
        }
    }
}

#[test]
fn team_is_deterministic_with_distinct_species() {
    let registry = roster_registry();
    let options = GeneratorOptions::default();
    let roster: BTreeSet<String> = registry.species_with_roles().into_iter().collect();
    assert_eq!(roster.len(), 5);
    assert!(!roster.contains("Ditto"));

    for seed in 0..16 {
        let team = generate_team(&registry, 3, &options, seed);
        assert_eq!(team, generate_team(&registry, 3, &options, seed));
        assert_eq!(team.len(), 3);
        let species: BTreeSet<&str> = team.iter().map(|set| set.species.as_str()).collect();
        assert_eq!(species.len(), 3, "seed {seed}");
        for set in &team {
            assert!(roster.contains(&set.species), "{}", set.species);
            assert!(set.role.is_some());
            assert_eq!(set.moves.len(), 4);
        }
    }
}

#[test]
fn team_size_is_capped_by_the_roster() {
    let registry = roster_registry();
    let options = GeneratorOptions::default();
    assert_eq!(generate_team(&registry, 6, &options, 9).len(), 5);
    assert!(generate_team(&registry, 0, &options, 9).is_empty());
    assert!(generate_team(&EmptyRegistry, 6, &options, 9).is_empty());
}

#[test]
fn team_seed_changes_the_draft() {
    let registry = roster_registry();
    let options = GeneratorOptions::default();
    let leads: BTreeSet<String> = (0..24)
        .filter_map(|seed| generate_team(&registry, 1, &options, seed).pop())
        .map(|set| set.species)
        .collect();
    assert!(leads.len() > 1, "{leads:?}");
}
