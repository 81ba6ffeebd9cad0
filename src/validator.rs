use crate::counter::{self, allows_physical, is_offensive, MoveCounter, SetupType};
use crate::moves::classes::{self, rank_of, setup_kind, HAZARD_RANKING, HAZARD_REMOVAL_RANKING};
use crate::moves::MoveCategory;

/// Outcome of checking one held move against the rest of the set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CullDecision {
    Keep,
    KeepSetup,
    /// Reason is diagnostic only.
    Cull(&'static str),
}

impl CullDecision {
    pub fn is_cull(self) -> bool {
        matches!(self, CullDecision::Cull(_))
    }
}

/// Decides whether `move_id` stays in the held set.
///
/// `held` holds the normalized ids of every move currently held, including
/// `move_id` itself; `counter` is the analysis of exactly that set.
pub fn should_cull(
    move_id: &str,
    counter: &MoveCounter,
    held: &[String],
    _types: &[String],
    _abilities: &[String],
    _species: &str,
) -> CullDecision {
    let setup = counter.setup_type();
    let holds = |id: &str| held.iter().any(|m| m == id);

    if move_id == "knockoff" {
        return CullDecision::Keep;
    }

    let kind = setup_kind(move_id);
    if kind != SetupType::None {
        return check_setup_move(move_id, kind, counter, &holds);
    }

    if classes::is_hazard(move_id) {
        let rank = rank_of(&HAZARD_RANKING, move_id);
        if held
            .iter()
            .any(|m| classes::is_hazard(m) && rank_of(&HAZARD_RANKING, m) < rank)
        {
            return CullDecision::Cull("a stronger hazard is already held");
        }
    }

    match move_id {
        "rest" if !holds("sleeptalk") => return CullDecision::Cull("rest without sleep talk"),
        "sleeptalk" if !holds("rest") => return CullDecision::Cull("sleep talk without rest"),
        "substitute" if holds("bellydrum") => {
            return CullDecision::Cull("substitute conflicts with belly drum")
        }
        "substitute" if counter.has(counter::KEY_RECOIL) => {
            return CullDecision::Cull("substitute conflicts with recoil")
        }
        _ => {}
    }

    if classes::is_status_infliction(move_id) {
        if is_offensive(setup) {
            return CullDecision::Cull("status move on a setup sweeper");
        }
        if counter.get(counter::KEY_STATUS_MOVE) > 1 {
            return CullDecision::Cull("more than one status move");
        }
    }

    if classes::is_priority(move_id) && allows_physical(setup) {
        return CullDecision::Cull("priority on a physical setup sweeper");
    }

    if classes::is_pivot(move_id) {
        if allows_physical(setup) {
            return CullDecision::Cull("pivot on a physical setup sweeper");
        }
        if counter.get(counter::KEY_PIVOT) > 1 {
            return CullDecision::Cull("more than one pivot move");
        }
    }

    // Protect belongs only on recovery-based stall: any setup move, speed
    // included, or missing recovery culls it.
    if classes::is_protect(move_id)
        && (counter.has(counter::KEY_SETUP) || !counter.has(counter::KEY_RECOVERY))
    {
        return CullDecision::Cull("protect without a recovery-based plan");
    }

    if classes::is_hazard_removal(move_id) {
        let rank = rank_of(&HAZARD_REMOVAL_RANKING, move_id);
        if held.iter().any(|m| {
            m != move_id
                && classes::is_hazard_removal(m)
                && rank_of(&HAZARD_REMOVAL_RANKING, m) <= rank
        }) {
            return CullDecision::Cull("a preferred hazard remover is already held");
        }
    }

    if classes::is_screen(move_id) && move_id != "auroraveil" {
        if is_offensive(setup) {
            return CullDecision::Cull("screens on a setup sweeper");
        }
        let partner = if move_id == "reflect" { "lightscreen" } else { "reflect" };
        if !holds(partner) {
            return CullDecision::Cull("screen without its partner");
        }
    }

    if let Some(category) = counter.damaging_category(move_id) {
        return check_damaging_move(category, counter, setup);
    }

    CullDecision::Keep
}

fn check_setup_move(
    move_id: &str,
    kind: SetupType,
    counter: &MoveCounter,
    holds: &dyn Fn(&str) -> bool,
) -> CullDecision {
    match kind {
        SetupType::Physical => {
            if counter.get(counter::KEY_PHYSICAL_POOL) < 2 {
                return CullDecision::Cull("not enough physical attacks to set up");
            }
            if move_id == "bellydrum" && holds("substitute") {
                return CullDecision::Cull("belly drum conflicts with substitute");
            }
        }
        SetupType::Special => {
            if counter.get(counter::KEY_SPECIAL_POOL) < 2 {
                return CullDecision::Cull("not enough special attacks to set up");
            }
        }
        SetupType::Mixed => {
            if counter.damaging_count() < 2 {
                return CullDecision::Cull("not enough attacks to set up");
            }
        }
        SetupType::Speed => {
            if counter.get(counter::KEY_SETUP) > 1 {
                return CullDecision::Cull("speed setup alongside another setup move");
            }
            if counter.damaging_count() < 2 {
                return CullDecision::Cull("not enough attacks to set up");
            }
        }
        SetupType::None => return CullDecision::Keep,
    }
    CullDecision::KeepSetup
}

fn check_damaging_move(
    category: MoveCategory,
    counter: &MoveCounter,
    setup: SetupType,
) -> CullDecision {
    match (setup, category) {
        (SetupType::Physical, MoveCategory::Special)
            if counter.get(counter::KEY_SPECIAL_POOL) > 2 =>
        {
            CullDecision::Cull("special attacks on a physical setup sweeper")
        }
        (SetupType::Special, MoveCategory::Physical)
            if counter.get(counter::KEY_PHYSICAL_POOL) > 2 =>
        {
            CullDecision::Cull("physical attacks on a special setup sweeper")
        }
        _ => CullDecision::Keep,
    }
}

/// Whole-set check run once four moves survive individually.
pub fn has_required_coverage(
    counter: &MoveCounter,
    held: &[String],
    _types: &[String],
    setup: SetupType,
) -> bool {
    if !counter.has(counter::KEY_STAB)
        && !counter.has(counter::KEY_PRIORITY)
        && !held.iter().any(|m| m == "knockoff")
    {
        return false;
    }
    match setup {
        SetupType::Physical => counter.get(counter::KEY_PHYSICAL_POOL) >= 2,
        SetupType::Special => counter.get(counter::KEY_SPECIAL_POOL) >= 2,
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;
    use crate::registry::EmptyRegistry;
    use crate::types::normalize_id;

    fn ids(moves: &[&str]) -> Vec<String> {
        moves.iter().map(|m| normalize_id(m)).collect()
    }

    fn decide(target: &str, moves: &[&str], types: &[&str]) -> CullDecision {
        let held = ids(moves);
        let types: Vec<String> = types.iter().map(|t| t.to_string()).collect();
        let counter = analyze(&held, &types, &[], &EmptyRegistry);
        should_cull(&normalize_id(target), &counter, &held, &types, &[], "testmon")
    }

    #[test]
    fn setup_needs_two_supporting_attacks() {
        let moves = ["Swords Dance", "Earthquake", "Stone Edge", "Roost"];
        assert_eq!(decide("Swords Dance", &moves, &["Ground"]), CullDecision::KeepSetup);
        let moves = ["Swords Dance", "Earthquake", "Roost", "Toxic"];
        assert!(decide("Swords Dance", &moves, &["Ground"]).is_cull());
        let moves = ["Nasty Plot", "Earthquake", "Stone Edge", "Dark Pulse"];
        assert!(decide("Nasty Plot", &moves, &["Dark"]).is_cull());
    }

    #[test]
    fn belly_drum_and_substitute_conflict() {
        let moves = ["Belly Drum", "Substitute", "Earthquake", "Extreme Speed"];
        assert!(decide("Belly Drum", &moves, &["Normal"]).is_cull());
        assert!(decide("Substitute", &moves, &["Normal"]).is_cull());
    }

    #[test]
    fn weaker_hazard_yields_to_stealth_rock() {
        let moves = ["Stealth Rock", "Spikes", "Earthquake", "Toxic Spikes"];
        assert_eq!(decide("Stealth Rock", &moves, &["Ground"]), CullDecision::Keep);
        assert!(decide("Spikes", &moves, &["Ground"]).is_cull());
        assert!(decide("Toxic Spikes", &moves, &["Ground"]).is_cull());
    }

    #[test]
    fn rest_and_sleep_talk_come_together() {
        assert!(decide("Rest", &["Rest", "Scald", "Toxic", "Ice Beam"], &["Water"]).is_cull());
        let moves = ["Rest", "Sleep Talk", "Scald", "Ice Beam"];
        assert_eq!(decide("Rest", &moves, &["Water"]), CullDecision::Keep);
        assert_eq!(decide("Sleep Talk", &moves, &["Water"]), CullDecision::Keep);
    }

    #[test]
    fn only_one_status_move_without_offensive_setup() {
        let moves = ["Will-O-Wisp", "Toxic", "Scald", "Recover"];
        assert!(decide("Will-O-Wisp", &moves, &["Water"]).is_cull());
        let moves = ["Will-O-Wisp", "Calm Mind", "Scald", "Ice Beam"];
        assert!(decide("Will-O-Wisp", &moves, &["Water"]).is_cull());
    }

    #[test]
    fn priority_and_pivots_are_dropped_by_physical_setup() {
        let moves = ["Swords Dance", "Bullet Punch", "U-turn", "Close Combat"];
        assert!(decide("Bullet Punch", &moves, &["Bug", "Steel"]).is_cull());
        assert!(decide("U-turn", &moves, &["Bug", "Steel"]).is_cull());
        let moves = ["U-turn", "Volt Switch", "Thunderbolt", "Knock Off"];
        assert!(decide("Volt Switch", &moves, &["Electric"]).is_cull());
    }

    #[test]
    fn knock_off_is_always_kept() {
        let moves = ["Swords Dance", "Knock Off", "Earthquake", "Nasty Plot"];
        assert_eq!(decide("Knock Off", &moves, &["Ground"]), CullDecision::Keep);
    }

    #[test]
    fn protect_needs_recovery() {
        let moves = ["Protect", "Toxic", "Scald", "Ice Beam"];
        assert!(decide("Protect", &moves, &["Water"]).is_cull());
        let moves = ["Protect", "Wish", "Scald", "Ice Beam"];
        assert_eq!(decide("Protect", &moves, &["Water"]), CullDecision::Keep);
        // Speed-only setup still rules Protect out.
        let moves = ["Protect", "Recover", "Agility", "Scald"];
        assert!(decide("Protect", &moves, &["Water"]).is_cull());
    }

    #[test]
    fn one_hazard_remover_by_preference() {
        let moves = ["Rapid Spin", "Defog", "Earthquake", "Ice Beam"];
        assert!(decide("Rapid Spin", &moves, &["Ground"]).is_cull());
        assert_eq!(decide("Defog", &moves, &["Ground"]), CullDecision::Keep);
    }

    #[test]
    fn screens_need_their_partner() {
        let moves = ["Reflect", "Psychic", "Thunder Wave", "Shadow Ball"];
        assert!(decide("Reflect", &moves, &["Psychic"]).is_cull());
        let moves = ["Reflect", "Light Screen", "Psychic", "Thunder Wave"];
        assert_eq!(decide("Reflect", &moves, &["Psychic"]), CullDecision::Keep);
    }

    #[test]
    fn off_category_attacks_capped_under_setup() {
        let moves = ["Swords Dance", "Flamethrower", "Ice Beam", "Thunderbolt"];
        let held = ids(&moves);
        let mut counter = analyze(&held, &[], &[], &EmptyRegistry);
        counter.set_setup_type(SetupType::Physical);
        let decision = should_cull("icebeam", &counter, &held, &[], &[], "testmon");
        assert!(decision.is_cull());
    }

    #[test]
    fn coverage_requires_stab_or_priority() {
        let held = ids(&["Flamethrower", "Toxic", "Protect", "Wish"]);
        let types = vec!["Water".to_string()];
        let counter = analyze(&held, &types, &[], &EmptyRegistry);
        assert!(!has_required_coverage(&counter, &held, &types, counter.setup_type()));

        let held = ids(&["Flamethrower", "Knock Off", "Protect", "Wish"]);
        let counter = analyze(&held, &types, &[], &EmptyRegistry);
        assert!(has_required_coverage(&counter, &held, &types, counter.setup_type()));
    }

    #[test]
    fn coverage_requires_setup_support() {
        let held = ids(&["Nasty Plot", "Dark Pulse", "Knock Off", "Sucker Punch"]);
        let types = vec!["Dark".to_string()];
        let counter = analyze(&held, &types, &[], &EmptyRegistry);
        assert!(!has_required_coverage(&counter, &held, &types, SetupType::Special));
    }
}
