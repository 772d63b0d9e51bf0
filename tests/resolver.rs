//! Integration tests for the random player pick over squad data.

use rand::rngs::StdRng;
use rand::SeedableRng;
use soccer_guess_web::{pick_matching_player, SquadMember};

fn member(name: &str, nationality: Option<&str>) -> SquadMember {
    SquadMember {
        id: None,
        name: name.to_string(),
        position: None,
        date_of_birth: None,
        nationality: nationality.map(String::from),
    }
}

#[test]
fn picks_the_only_matching_member() {
    let squad = vec![
        member("Thibaut Courtois", Some("Belgium")),
        member("Dani Carvajal", Some("Spain")),
        member("Luka Modric", Some("Croatia")),
    ];
    let mut rng = StdRng::seed_from_u64(7);
    let pick = pick_matching_player(&squad, "Spain", &mut rng).unwrap();
    assert_eq!(pick.name, "Dani Carvajal");
}

#[test]
fn nationality_match_is_case_insensitive() {
    let squad = vec![member("Dani Carvajal", Some("Spain"))];
    let mut rng = StdRng::seed_from_u64(7);
    let pick = pick_matching_player(&squad, "sPaIn", &mut rng).unwrap();
    assert_eq!(pick.name, "Dani Carvajal");
}

#[test]
fn no_matching_nationality_yields_none() {
    let squad = vec![
        member("Thibaut Courtois", Some("Belgium")),
        member("Trialist", None),
    ];
    let mut rng = StdRng::seed_from_u64(7);
    assert!(pick_matching_player(&squad, "Spain", &mut rng).is_none());
}

#[test]
fn empty_squad_yields_none() {
    let squad: Vec<SquadMember> = Vec::new();
    let mut rng = StdRng::seed_from_u64(7);
    assert!(pick_matching_player(&squad, "Spain", &mut rng).is_none());
}

#[test]
fn pick_is_deterministic_under_a_seeded_rng() {
    let squad = vec![
        member("Dani Carvajal", Some("Spain")),
        member("Fede Valverde", Some("Uruguay")),
        member("Joselu", Some("Spain")),
        member("Brahim Diaz", Some("Spain")),
    ];
    let mut a = StdRng::seed_from_u64(42);
    let mut b = StdRng::seed_from_u64(42);
    assert_eq!(
        pick_matching_player(&squad, "Spain", &mut a),
        pick_matching_player(&squad, "Spain", &mut b)
    );
}

#[test]
fn pick_always_comes_from_the_matching_set() {
    let squad = vec![
        member("Thibaut Courtois", Some("Belgium")),
        member("Dani Carvajal", Some("Spain")),
        member("Joselu", Some("Spain")),
        member("Luka Modric", Some("Croatia")),
        member("Brahim Diaz", Some("Spain")),
    ];
    for seed in 0..32 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pick = pick_matching_player(&squad, "Spain", &mut rng).unwrap();
        assert_eq!(pick.nationality.as_deref(), Some("Spain"));
    }
}
