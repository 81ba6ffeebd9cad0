use crate::counter::{MoveCounter, SetupType, KEY_HAZARDS, KEY_PHYSICAL_POOL, KEY_PRIORITY};
use crate::counter::{KEY_RECOVERY, KEY_SPECIAL_POOL, KEY_STAB};
use crate::moves::classes;
use crate::natures::role_is_bulky;
use crate::types::{is_stealth_rock_weak, normalize_id, TYPE_NAMES};
use phf::phf_map;
use rand::Rng;
use tracing::debug;

pub const DEFAULT_ITEM: &str = "Leftovers";

const LIFE_ORB: &str = "Life Orb";
const CHOICE_SCARF: &str = "Choice Scarf";
const CHOICE_BAND: &str = "Choice Band";
const CHOICE_SPECS: &str = "Choice Specs";

/// Signature items. Multi-form species list each forme explicitly.
static SPECIES_ITEMS: phf::Map<&'static str, &'static str> = phf_map! {
    "pikachu" => "Light Ball",
    "cubone" => "Thick Club",
    "marowak" => "Thick Club",
    "marowakalola" => "Thick Club",
    "marowakalolatotem" => "Thick Club",
    "farfetchd" => "Leek",
    "farfetchdgalar" => "Leek",
    "sirfetchd" => "Leek",
    "clamperl" => "DeepSeaTooth",
    "ditto" => "Choice Scarf",
    "dialga" => "Adamant Orb",
    "dialgaorigin" => "Adamant Orb",
    "palkia" => "Lustrous Orb",
    "palkiaorigin" => "Lustrous Orb",
    "giratina" => "Griseous Orb",
    "giratinaorigin" => "Griseous Orb",
    "groudon" => "Red Orb",
    "groudonprimal" => "Red Orb",
    "kyogre" => "Blue Orb",
    "kyogreprimal" => "Blue Orb",
    "latios" => "Soul Dew",
    "latiosmega" => "Soul Dew",
    "latias" => "Soul Dew",
    "latiasmega" => "Soul Dew",
};

/// Not fully evolved, and worth an Eviolite.
static NFE_SPECIES: phf::Set<&'static str> = phf::phf_set! {
    "bulbasaur", "ivysaur", "charmander", "charmeleon", "squirtle", "wartortle",
    "pichu", "cleffa", "igglybuff", "togepi", "togetic", "azurill", "wynaut",
    "budew", "chingling", "bonsly", "munchlax", "riolu", "mantyke",
    "porygon2", "chansey", "scyther", "onix", "rhydon", "tangela",
    "electabuzz", "magmar", "dusclops", "roselia", "murkrow", "misdreavus",
    "gligar", "sneasel", "piloswine",
};

/// Arceus plate per type, indexed like `TYPE_NAMES`. Normal has none.
const PLATES: [Option<&str>; 18] = [
    None,
    Some("Flame Plate"),
    Some("Splash Plate"),
    Some("Zap Plate"),
    Some("Meadow Plate"),
    Some("Icicle Plate"),
    Some("Fist Plate"),
    Some("Toxic Plate"),
    Some("Earth Plate"),
    Some("Sky Plate"),
    Some("Mind Plate"),
    Some("Insect Plate"),
    Some("Stone Plate"),
    Some("Spooky Plate"),
    Some("Draco Plate"),
    Some("Dread Plate"),
    Some("Iron Plate"),
    Some("Pixie Plate"),
];

const DRIVES: [(&str, &str, &str); 4] = [
    ("burn", "fire", "Burn Drive"),
    ("chill", "ice", "Chill Drive"),
    ("douse", "water", "Douse Drive"),
    ("shock", "electric", "Shock Drive"),
];

/// Everything the item tiers look at besides the random source.
pub struct ItemContext<'a> {
    pub counter: &'a MoveCounter,
    /// Normalized ids of the held moves.
    pub held: &'a [String],
    pub ability: &'a str,
    pub types: &'a [String],
    pub species: &'a str,
    pub role: Option<&'a str>,
}

/// What a tier decided. `Skip` means "no item from this tier, and stop
/// looking", which only the high tier uses.
#[derive(Debug, Eq, PartialEq)]
enum Tier {
    Pick(String),
    Pass,
    Skip,
}

fn pick(item: &str) -> Tier {
    Tier::Pick(item.to_string())
}

/// Runs the high, medium, low and default tiers in order. Signature
/// species items beat every role.
///
/// Returns `None` only when the high tier decides the set holds nothing
/// (Rayquaza, Acrobatics users, Normal Arceus and so on).
pub fn select_item<R: Rng + ?Sized>(ctx: &ItemContext<'_>, rng: &mut R) -> Option<String> {
    let chosen = match high_tier(ctx) {
        Tier::Pick(item) => Some(item),
        Tier::Skip => None,
        Tier::Pass => medium_tier(ctx, rng)
            .or_else(|| low_tier(ctx, rng))
            .or_else(|| Some(default_item(ctx.counter, ctx.role))),
    };
    debug!(species = ctx.species, item = ?chosen, "item selected");
    chosen
}

fn high_tier(ctx: &ItemContext<'_>) -> Tier {
    let holds = |id: &str| ctx.held.iter().any(|m| m == id);
    let species = normalize_id(ctx.species);
    if let Some(forme) = species.strip_prefix("arceus") {
        return form_item(&PLATES, forme, ctx.types);
    }
    if let Some(forme) = species.strip_prefix("silvally") {
        return form_item(&memories(), forme, ctx.types);
    }
    if let Some(forme) = species.strip_prefix("genesect") {
        return DRIVES
            .iter()
            .find(|(suffix, ty, _)| forme.contains(suffix) || forme.contains(ty))
            .map_or(Tier::Skip, |(_, _, drive)| pick(drive));
    }
    if let Some(item) = SPECIES_ITEMS.get(species.as_str()) {
        return pick(item);
    }
    if species == "rayquaza" {
        return Tier::Skip;
    }

    if let Some(role) = ctx.role {
        if role == "AV Pivot" {
            return pick("Assault Vest");
        }
        if role.contains("Booster Energy") || role == "Fast Bulky Setup" {
            return pick("Booster Energy");
        }
        if role == "Tera Blast user" && holds("terablast") {
            return pick("Expert Belt");
        }
    }
    if NFE_SPECIES.contains(species.as_str()) {
        return pick("Eviolite");
    }

    if holds("geomancy") {
        return pick("Power Herb");
    }
    if holds("acrobatics") {
        return Tier::Skip;
    }
    if holds("fling") {
        return pick("Iron Ball");
    }
    if normalize_id(ctx.ability) == "unburden" {
        return pick("Sitrus Berry");
    }
    Tier::Pass
}

fn memories() -> [Option<String>; 18] {
    let mut out: [Option<String>; 18] = Default::default();
    for (slot, name) in out.iter_mut().zip(TYPE_NAMES).skip(1) {
        *slot = Some(format!("{name} Memory"));
    }
    out
}

/// Forme suffix first, then the first listed type. Normal gets nothing.
fn form_item<S: AsRef<str>>(table: &[Option<S>; 18], forme: &str, types: &[String]) -> Tier {
    let by_forme = TYPE_NAMES
        .iter()
        .position(|name| !forme.is_empty() && forme.contains(&normalize_id(name)));
    let by_type = || {
        types
            .first()
            .and_then(|t| TYPE_NAMES.iter().position(|name| normalize_id(name) == normalize_id(t)))
    };
    match by_forme.or_else(by_type).and_then(|i| table[i].as_ref()) {
        Some(item) => pick(item.as_ref()),
        None => Tier::Skip,
    }
}

fn all_damaging(counter: &MoveCounter, move_count: usize) -> bool {
    let physical = counter.get(KEY_PHYSICAL_POOL) as usize;
    let special = counter.get(KEY_SPECIAL_POOL) as usize;
    physical + special >= move_count
}

fn choice_item<R: Rng + ?Sized>(counter: &MoveCounter, rng: &mut R) -> &'static str {
    let physical = counter.get(KEY_PHYSICAL_POOL);
    let special = counter.get(KEY_SPECIAL_POOL);
    if !counter.has(KEY_PRIORITY) && rng.gen_bool(0.3) {
        return CHOICE_SCARF;
    }
    match physical.cmp(&special) {
        std::cmp::Ordering::Greater => CHOICE_BAND,
        std::cmp::Ordering::Less => CHOICE_SPECS,
        std::cmp::Ordering::Equal => CHOICE_SCARF,
    }
}

fn medium_tier<R: Rng + ?Sized>(ctx: &ItemContext<'_>, rng: &mut R) -> Option<String> {
    let counter = ctx.counter;
    let move_count = ctx.held.len();
    let all_damaging = all_damaging(counter, move_count);

    if let Some(role) = ctx.role {
        if role.contains("Wallbreaker") && counter.damaging_count() >= 3 {
            let item = if all_damaging && rng.gen_bool(0.5) {
                choice_item(counter, rng)
            } else {
                LIFE_ORB
            };
            return Some(item.to_string());
        }
        if role.contains("Fast Attacker") && all_damaging {
            return Some(CHOICE_SCARF.to_string());
        }
        if role_is_bulky(role) {
            return None;
        }
    }

    if counter.setup_type() != SetupType::None {
        return (counter.damaging_count() >= 3).then(|| LIFE_ORB.to_string());
    }

    let physical = counter.get(KEY_PHYSICAL_POOL);
    let special = counter.get(KEY_SPECIAL_POOL);
    let incompatible = ctx.held.iter().any(|m| classes::is_choice_incompatible(m));
    if all_damaging && !incompatible {
        if !counter.has(KEY_PRIORITY) && rng.gen_bool(0.3) {
            return Some(CHOICE_SCARF.to_string());
        }
        if physical > special {
            return Some(CHOICE_BAND.to_string());
        }
        if special > physical {
            return Some(CHOICE_SPECS.to_string());
        }
    }
    if counter.status() == 0 && counter.damaging_count() >= 3 {
        return Some("Assault Vest".to_string());
    }
    if physical > 0 && special > 0 {
        return Some(LIFE_ORB.to_string());
    }
    None
}

fn low_tier<R: Rng + ?Sized>(ctx: &ItemContext<'_>, rng: &mut R) -> Option<String> {
    let counter = ctx.counter;
    let rock_weak = is_stealth_rock_weak(ctx.types);
    if ctx.role.is_some_and(role_is_bulky) {
        return rock_weak.then(|| "Heavy-Duty Boots".to_string());
    }
    if rock_weak {
        return Some("Heavy-Duty Boots".to_string());
    }
    if counter.has(KEY_HAZARDS) {
        return Some("Focus Sash".to_string());
    }
    if counter.has(KEY_STAB) && counter.damaging_count() >= 3 {
        return Some("Expert Belt".to_string());
    }
    if counter.setup_type() != SetupType::None && rng.gen_bool(0.2) {
        return Some("Weakness Policy".to_string());
    }
    None
}

fn default_item(counter: &MoveCounter, role: Option<&str>) -> String {
    if let Some(role) = role {
        if role_is_bulky(role) || role.contains("Support") {
            return DEFAULT_ITEM.to_string();
        }
        let offensive = ["Setup", "Sweeper", "Attacker", "Wallbreaker"];
        if offensive.iter().any(|tag| role.contains(tag)) {
            return LIFE_ORB.to_string();
        }
    }
    if counter.has(KEY_RECOVERY) || counter.damaging_count() <= 2 {
        DEFAULT_ITEM.to_string()
    } else {
        LIFE_ORB.to_string()
    }
}
