use crate::counter::{self, MoveCounter, SetupType};
use crate::moves::classes::{self, setup_kind};
use crate::moves::{resolve_move_info, MoveCategory};
use crate::registry::SpeciesRegistry;
use crate::types::normalize_id;

/// Builds the aggregate counter for a candidate moveset.
///
/// `moves` may be display names or ids; everything is normalized internally.
pub fn analyze<S: AsRef<str>>(
    moves: &[S],
    types: &[String],
    abilities: &[String],
    registry: &dyn SpeciesRegistry,
) -> MoveCounter {
    let type_ids: Vec<String> = types.iter().map(|t| normalize_id(t)).collect();
    let ability_ids: Vec<String> = abilities.iter().map(|a| normalize_id(a)).collect();
    let has_technician = ability_ids.iter().any(|a| a == "technician");
    let has_adaptability = ability_ids.iter().any(|a| a == "adaptability");

    let mut counter = MoveCounter::new();
    for raw in moves {
        let id = normalize_id(raw.as_ref());
        let info = resolve_move_info(&id, registry);

        counter.add(info.category.label());
        if info.category.is_damaging() {
            counter.add_damaging_move(&id, info.category);
            let move_type = normalize_id(&info.move_type);
            counter.add(&move_type);
            if type_ids.contains(&move_type) || classes::is_stab_exempt(&id) {
                counter.add(counter::KEY_STAB);
            }
            match info.category {
                MoveCategory::Physical => counter.add(counter::KEY_PHYSICAL_POOL),
                MoveCategory::Special => counter.add(counter::KEY_SPECIAL_POOL),
                MoveCategory::Status => {}
            }
        }

        let setup = setup_kind(&id);
        if setup != SetupType::None {
            counter.add(counter::KEY_SETUP);
            counter.add_setup(setup);
            counter.add(match setup {
                SetupType::Physical => counter::KEY_PHYSICAL_SETUP,
                SetupType::Special => counter::KEY_SPECIAL_SETUP,
                SetupType::Mixed => counter::KEY_MIXED_SETUP,
                _ => counter::KEY_SPEED_SETUP,
            });
        }

        if classes::is_hazard(&id) {
            counter.add(counter::KEY_HAZARDS);
            // Each hazard also counts under its own id.
            counter.add(&id);
        }
        if classes::is_recovery(&id) {
            counter.add(counter::KEY_RECOVERY);
        }
        if classes::is_priority(&id) {
            counter.add(counter::KEY_PRIORITY);
        }
        if classes::is_pivot(&id) {
            counter.add(counter::KEY_PIVOT);
        }
        if classes::is_protect(&id) {
            counter.add(counter::KEY_PROTECT);
        }
        let memberships = [
            (&classes::RECOIL, counter::KEY_RECOIL),
            (&classes::DRAIN, counter::KEY_DRAIN),
            (&classes::SOUND, counter::KEY_SOUND),
            (&classes::CONTACT, counter::KEY_CONTACT),
            (&classes::BULLET, counter::KEY_BULLET),
            (&classes::POWDER, counter::KEY_POWDER),
            (&classes::MULTI_HIT, counter::KEY_SKILL_LINK),
            (&classes::PUNCH, counter::KEY_IRON_FIST),
            (&classes::BITE, counter::KEY_STRONG_JAW),
            (&classes::CONTRARY, counter::KEY_CONTRARY),
            (&classes::SECONDARY_EFFECT, counter::KEY_SHEER_FORCE),
            (&classes::CONTACT, counter::KEY_TOUGH_CLAWS),
        ];
        for (set, key) in memberships {
            if set.contains(id.as_str()) {
                counter.add(key);
            }
        }

        if has_technician && info.power > 0 && info.power <= 60 {
            counter.add(counter::KEY_TECHNICIAN);
        }
        if has_adaptability && counter.has(counter::KEY_STAB) {
            counter.add(counter::KEY_ADAPTABILITY);
        }

        track_named_move(&mut counter, &id);
    }
    counter
}

fn track_named_move(counter: &mut MoveCounter, id: &str) {
    match id {
        "bellydrum" => counter.add(counter::KEY_BELLY_DRUM),
        "substitute" => counter.add(counter::KEY_SUBSTITUTE),
        "rest" => counter.add(counter::KEY_REST),
        "sleeptalk" => counter.add(counter::KEY_SLEEP_TALK),
        "knockoff" => counter.add(counter::KEY_KNOCK_OFF),
        _ => {}
    }
    if classes::is_hazard_removal(id) {
        counter.add(counter::KEY_HAZARD_REMOVAL);
    }
    if classes::is_screen(id) {
        counter.add(counter::KEY_SCREENS);
    }
    if classes::is_status_infliction(id) {
        counter.add(counter::KEY_STATUS_MOVE);
    }
}
