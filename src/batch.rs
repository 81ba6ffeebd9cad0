use crate::export::to_showdown;
use crate::generator::{generate_set, pick_role_variant, GeneratorOptions};
use crate::model::{CandidateInput, GeneratedSet};
use crate::registry::SpeciesRegistry;
use anyhow::Context;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rayon::prelude::*;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputFormat {
    Json,
    Showdown,
}

/// Seed for the candidate at `index`; independent of thread scheduling.
pub fn candidate_seed(seed: u64, index: usize) -> u64 {
    seed ^ ((index as u64) << 32) ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Generates one set per candidate in parallel. Output order matches input.
pub fn generate_batch(
    candidates: &[CandidateInput],
    registry: &dyn SpeciesRegistry,
    options: &GeneratorOptions,
    seed: u64,
) -> Vec<GeneratedSet> {
    candidates
        .par_iter()
        .enumerate()
        .map(|(idx, candidate)| {
            let mut rng = SmallRng::seed_from_u64(candidate_seed(seed, idx));
            generate_set(candidate, registry, options, &mut rng)
        })
        .collect()
}

/// Team of up to `count` distinct species drawn from the registry's roster.
///
/// The roster is shuffled and truncated, each species gets a random role, and
/// the resulting candidates go through `generate_batch` with the same seed.
pub fn generate_team(
    registry: &dyn SpeciesRegistry,
    count: usize,
    options: &GeneratorOptions,
    seed: u64,
) -> Vec<GeneratedSet> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut roster = registry.species_with_roles();
    roster.shuffle(&mut rng);
    roster.truncate(count);
    debug!(requested = count, picked = roster.len(), "team roster");
    let candidates: Vec<CandidateInput> = roster
        .iter()
        .filter_map(|species| pick_role_variant(species, registry, &mut rng))
        .collect();
    generate_batch(&candidates, registry, options, seed)
}

pub fn render_sets(sets: &[GeneratedSet], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(sets).context("Failed to serialize generated sets")
        }
        OutputFormat::Showdown => Ok(sets
            .iter()
            .map(to_showdown)
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

pub fn write_sets(sets: &[GeneratedSet], path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let out = render_sets(sets, format)?;
    std::fs::write(path, out)
        .with_context(|| format!("Failed to write sets to {}", path.display()))?;
    Ok(())
}
