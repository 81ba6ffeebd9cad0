pub mod abilities;
pub mod analyzer;
pub mod batch;
pub mod counter;
pub mod export;
pub mod generator;
pub mod items;
pub mod model;
pub mod moves;
pub mod natures;
pub mod registry;
pub mod stats;
pub mod types;
pub mod validator;

pub use crate::batch::{generate_batch, generate_team, write_sets, OutputFormat};
pub use crate::generator::{generate_set, GeneratorOptions};
pub use crate::model::{CandidateInput, Gender, GeneratedSet};
use crate::registry::{EmptyRegistry, SpeciesRegistry, StaticRegistry};
use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub input_path: PathBuf,
    pub registry_path: Option<PathBuf>,
    pub seed: u64,
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// When set, draws a team of this size from the registry's roles instead
    /// of reading candidates.
    pub team_size: Option<usize>,
    pub generator: GeneratorOptions,
}

pub fn load_candidates(path: &Path) -> anyhow::Result<Vec<CandidateInput>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read candidates file at {}", path.display()))?;
    let parsed: Vec<CandidateInput> = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse JSON from {}", path.display()))?;
    validate_candidates(&parsed)?;
    Ok(parsed)
}

/// Rejects inputs the engine does not define behavior for.
pub fn validate_candidates(candidates: &[CandidateInput]) -> anyhow::Result<()> {
    for (idx, candidate) in candidates.iter().enumerate() {
        if candidate.species.trim().is_empty() {
            anyhow::bail!("Candidate {idx} has an empty species");
        }
        if !(1..=100).contains(&candidate.level) {
            anyhow::bail!(
                "Candidate {idx} ({}) has level {}, expected 1..=100",
                candidate.species,
                candidate.level
            );
        }
    }
    Ok(())
}

pub fn run(opts: CliOptions) -> anyhow::Result<()> {
    if opts.generator.max_attempts == 0 {
        anyhow::bail!("--max-attempts must be > 0");
    }
    if opts.team_size.is_some() && opts.registry_path.is_none() {
        anyhow::bail!("--team requires --registry");
    }
    let registry: Box<dyn SpeciesRegistry> = match &opts.registry_path {
        Some(path) => {
            let loaded = StaticRegistry::load(path)?;
            info!(
                species = loaded.species_count(),
                moves = loaded.move_count(),
                "loaded registry"
            );
            Box::new(loaded)
        }
        None => Box::new(EmptyRegistry),
    };
    let sets = match opts.team_size {
        Some(count) => generate_team(registry.as_ref(), count, &opts.generator, opts.seed),
        None => {
            let candidates = load_candidates(&opts.input_path)?;
            generate_batch(&candidates, registry.as_ref(), &opts.generator, opts.seed)
        }
    };
    write_sets(&sets, &opts.output_path, opts.format)?;
    info!(
        count = sets.len(),
        path = %opts.output_path.display(),
        "wrote generated sets"
    );
    println!("Wrote {} sets to {}", sets.len(), opts.output_path.display());
    Ok(())
}
