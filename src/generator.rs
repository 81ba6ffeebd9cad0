use crate::abilities::{self, NO_ABILITY};
use crate::analyzer::analyze;
use crate::counter::MoveCounter;
use crate::items::{self, ItemContext, DEFAULT_ITEM};
use crate::model::{CandidateInput, Gender, GeneratedSet};
use crate::natures::{self, Nature, FALLBACK_NATURE};
use crate::registry::{RoleVariant, SpeciesRegistry};
use crate::stats::{self, StatSpread, LEGACY_EV, MAX_IV};
use crate::types::normalize_id;
use crate::validator::{has_required_coverage, should_cull, CullDecision};
use phf::phf_set;
use rand::Rng;
use tracing::{debug, warn};

pub const MOVES_PER_SET: usize = 4;

/// Padding for short pools, and the whole moveset when the pool is empty.
pub const FALLBACK_MOVES: [&str; 4] = ["Tackle", "Growl", "Quick Attack", "Scratch"];

pub const DEFAULT_TYPE: &str = "Normal";

static GENDERLESS: phf::Set<&'static str> = phf_set! {
    "magnemite", "magneton", "magnezone", "voltorb", "electrode", "staryu", "starmie",
    "porygon", "porygon2", "porygonz", "beldum", "metang", "metagross", "bronzor", "bronzong",
};

#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    /// Bound on sample/validate cycles before giving up on a clean set.
    pub max_attempts: usize,
    /// Bound on draws from the original pool when backfilling.
    pub max_backfill_draws: usize,
    /// Cap the six effort values at 510 total.
    pub enforce_ev_total: bool,
    /// Tune HP effort values on role-less sets when base HP is known.
    pub optimize_hp: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            max_backfill_draws: 100,
            enforce_ev_total: true,
            optimize_hp: true,
        }
    }
}

/// A move as the generator tracks it: normalized id plus the caller's spelling.
#[derive(Debug, Clone)]
struct Slot {
    id: String,
    name: String,
}

fn ids(slots: &[Slot]) -> Vec<String> {
    slots.iter().map(|s| s.id.clone()).collect()
}

/// Belly Drum and Substitute never share a set.
fn conflicts_with(id: &str, held: &[Slot]) -> bool {
    let partner = match id {
        "bellydrum" => "substitute",
        "substitute" => "bellydrum",
        _ => return false,
    };
    held.iter().any(|s| s.id == partner)
}

fn draw<R: Rng + ?Sized>(pool: &mut Vec<Slot>, rng: &mut R) -> Option<Slot> {
    if pool.is_empty() {
        return None;
    }
    let idx = rng.gen_range(0..pool.len());
    Some(pool.swap_remove(idx))
}

fn candidate_pool(moves: &[String]) -> Vec<Slot> {
    let mut pool: Vec<Slot> = Vec::new();
    for raw in moves {
        let name = raw.trim();
        let id = normalize_id(name);
        if id.is_empty() || pool.iter().any(|s| s.id == id) {
            continue;
        }
        pool.push(Slot {
            id,
            name: name.to_string(),
        });
    }
    pool
}

/// Builds one competitive set for `input`.
///
/// Never fails: an empty move pool yields the fixed fallback set, and an
/// exhausted search is backfilled and padded to four moves.
pub fn generate_set<R: Rng + ?Sized>(
    input: &CandidateInput,
    registry: &dyn SpeciesRegistry,
    options: &GeneratorOptions,
    rng: &mut R,
) -> GeneratedSet {
    let species = input.species.as_str();
    let mut types = input.types.clone();
    if types.is_empty() {
        types = registry.resolve_types(species);
    }
    if types.is_empty() {
        types = vec![DEFAULT_TYPE.to_string()];
    }
    let mut abilities = input.abilities.clone();
    if abilities.is_empty() {
        abilities = registry.resolve_base_abilities(species);
    }

    let pool = candidate_pool(&input.moves);
    if pool.is_empty() {
        warn!(species, "empty move pool, using fallback set");
        return fallback_set(input, &abilities, registry);
    }

    let held = select_moves(species, &pool, &types, &abilities, registry, options, rng);
    finalize(input, held, &types, &abilities, registry, options, rng)
}

/// Candidate built from one registry role; types are left for the registry.
pub fn candidate_for_role(species: &str, variant: &RoleVariant) -> CandidateInput {
    CandidateInput {
        species: species.to_string(),
        level: variant.level.unwrap_or(100),
        moves: variant.moves.clone(),
        abilities: variant.abilities.clone(),
        items: variant.items.clone(),
        types: Vec::new(),
        role: Some(variant.role.clone()),
    }
}

/// Picks one of the species' registry roles uniformly at random.
pub fn pick_role_variant<R: Rng + ?Sized>(
    species: &str,
    registry: &dyn SpeciesRegistry,
    rng: &mut R,
) -> Option<CandidateInput> {
    let variants = registry.role_variants(species);
    if variants.is_empty() {
        debug!(species, "no registry roles");
        return None;
    }
    let variant = &variants[rng.gen_range(0..variants.len())];
    debug!(species, role = %variant.role, of = variants.len(), "picked role");
    Some(candidate_for_role(species, variant))
}

/// Random role pick followed by `generate_set`; `None` when the species has no roles.
pub fn generate_for_species<R: Rng + ?Sized>(
    species: &str,
    registry: &dyn SpeciesRegistry,
    options: &GeneratorOptions,
    rng: &mut R,
) -> Option<GeneratedSet> {
    let input = pick_role_variant(species, registry, rng)?;
    Some(generate_set(&input, registry, options, rng))
}

fn select_moves<R: Rng + ?Sized>(
    species: &str,
    pool: &[Slot],
    types: &[String],
    abilities: &[String],
    registry: &dyn SpeciesRegistry,
    options: &GeneratorOptions,
    rng: &mut R,
) -> Vec<Slot> {
    let mut remaining = pool.to_vec();
    let mut rejected: Vec<Slot> = Vec::new();
    let mut held: Vec<Slot> = Vec::new();
    let mut settled = false;

    for _ in 0..options.max_attempts {
        while held.len() < MOVES_PER_SET {
            let Some(slot) = draw(&mut remaining, rng).or_else(|| draw(&mut rejected, rng)) else {
                break;
            };
            if !held.iter().any(|s| s.id == slot.id) {
                held.push(slot);
            }
        }

        let held_ids = ids(&held);
        let counter = analyze(held_ids.as_slice(), types, abilities, registry);
        let culled = held_ids.iter().position(|id| {
            let decision = should_cull(id, &counter, &held_ids, types, abilities, species);
            if let CullDecision::Cull(reason) = decision {
                debug!(species, move_id = id.as_str(), reason, "move culled");
            }
            decision.is_cull()
        });
        if let Some(idx) = culled {
            rejected.push(held.remove(idx));
            continue;
        }

        if held.len() < MOVES_PER_SET {
            // Nothing left to draw and nothing to cull.
            break;
        }
        if !has_required_coverage(&counter, &held_ids, types, counter.setup_type()) {
            debug!(species, evicted = held[0].id.as_str(), "coverage check failed");
            rejected.push(held.remove(0));
            continue;
        }
        settled = true;
        break;
    }

    if !settled {
        warn!(species, held = held.len(), "move search exhausted, backfilling");
        drop_conflicts(&mut held);
        backfill(&mut held, pool, options.max_backfill_draws, rng);
        pad_with_basic_moves(species, &mut held);
    }
    held
}

fn drop_conflicts(held: &mut Vec<Slot>) {
    let mut kept: Vec<Slot> = Vec::with_capacity(held.len());
    for slot in held.drain(..) {
        if !conflicts_with(&slot.id, &kept) {
            kept.push(slot);
        }
    }
    *held = kept;
}

fn backfill<R: Rng + ?Sized>(held: &mut Vec<Slot>, pool: &[Slot], max_draws: usize, rng: &mut R) {
    for _ in 0..max_draws {
        if held.len() >= MOVES_PER_SET {
            return;
        }
        let slot = &pool[rng.gen_range(0..pool.len())];
        if held.iter().any(|s| s.id == slot.id) || conflicts_with(&slot.id, held) {
            continue;
        }
        held.push(slot.clone());
    }
}

fn pad_with_basic_moves(species: &str, held: &mut Vec<Slot>) {
    for name in FALLBACK_MOVES {
        if held.len() >= MOVES_PER_SET {
            return;
        }
        let id = normalize_id(name);
        if held.iter().any(|s| s.id == id) {
            continue;
        }
        warn!(species, padded = name, "padding with basic move");
        held.push(Slot {
            id,
            name: name.to_string(),
        });
    }
}

fn resolve_gender<R: Rng + ?Sized>(species: &str, rng: &mut R) -> Gender {
    if GENDERLESS.contains(normalize_id(species).as_str()) {
        Gender::Genderless
    } else if rng.gen_bool(0.5) {
        Gender::Male
    } else {
        Gender::Female
    }
}

fn effort_values(
    input: &CandidateInput,
    counter: &MoveCounter,
    base: Option<&StatSpread>,
    options: &GeneratorOptions,
) -> StatSpread {
    let role = input.role.as_deref();
    let mut evs = stats::build_effort_values(counter, role);
    if let (None, Some(base), true) = (role, base, options.optimize_hp) {
        evs.hp = stats::optimize_hp_ev(evs.hp, counter, base.hp, input.level);
    }
    if options.enforce_ev_total {
        evs = stats::cap_total(evs);
    }
    evs
}

fn finalize<R: Rng + ?Sized>(
    input: &CandidateInput,
    held: Vec<Slot>,
    types: &[String],
    abilities: &[String],
    registry: &dyn SpeciesRegistry,
    options: &GeneratorOptions,
    rng: &mut R,
) -> GeneratedSet {
    let species = input.species.as_str();
    let role = input.role.as_deref();
    let held_ids = ids(&held);
    let counter = analyze(held_ids.as_slice(), types, abilities, registry);

    let ability = abilities::select_ability(abilities, &counter, &held_ids, types, species, rng);
    let item = items::select_item(
        &ItemContext {
            counter: &counter,
            held: &held_ids,
            ability: &ability,
            types,
            species,
            role,
        },
        rng,
    );
    let mut nature = natures::select_nature(&counter, role);
    if !natures::is_valid(nature, &counter) {
        debug!(species, %nature, "nature rejected, using fallback");
        nature = FALLBACK_NATURE;
    }
    let base = registry.resolve_base_stats(species);
    let evs = effort_values(input, &counter, base.as_ref(), options);
    let ivs = stats::build_individual_values(&counter);
    let gender = resolve_gender(species, rng);

    GeneratedSet {
        species: input.species.clone(),
        level: input.level,
        ability,
        item,
        moves: held.into_iter().map(|s| s.name).collect(),
        evs,
        ivs,
        nature,
        gender,
        role: input.role.clone(),
        final_stats: base.map(|b| stats::compute_stats(&b, &ivs, &evs, input.level, nature)),
    }
}

fn fallback_set(
    input: &CandidateInput,
    abilities: &[String],
    registry: &dyn SpeciesRegistry,
) -> GeneratedSet {
    let evs = StatSpread::uniform(LEGACY_EV);
    let ivs = StatSpread::uniform(MAX_IV);
    let nature: Nature = FALLBACK_NATURE;
    let base = registry.resolve_base_stats(&input.species);
    GeneratedSet {
        species: input.species.clone(),
        level: input.level,
        ability: abilities
            .first()
            .cloned()
            .unwrap_or_else(|| NO_ABILITY.to_string()),
        item: Some(
            input
                .items
                .first()
                .cloned()
                .unwrap_or_else(|| DEFAULT_ITEM.to_string()),
        ),
        moves: FALLBACK_MOVES.iter().map(|m| m.to_string()).collect(),
        evs,
        ivs,
        nature,
        gender: Gender::Genderless,
        role: input.role.clone(),
        final_stats: base.map(|b| stats::compute_stats(&b, &ivs, &evs, input.level, nature)),
    }
}
