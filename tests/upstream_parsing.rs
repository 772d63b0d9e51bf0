//! Integration tests for parsing football-data API payloads.

use soccer_guess_web::upstream::{parse_squad_response, parse_team_search_response};
use soccer_guess_web::{Endpoint, ResolveError};
use std::fs;
use std::path::PathBuf;

fn read_fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    fs::read_to_string(path).unwrap()
}

#[test]
fn parses_team_squad_fixture() {
    let squad = parse_squad_response(&read_fixture("team_squad.json")).unwrap();
    assert_eq!(squad.len(), 4);
    assert_eq!(squad[0].name, "Thibaut Courtois");
    assert_eq!(squad[0].id, Some(50));
    assert_eq!(squad[0].position.as_deref(), Some("Goalkeeper"));
    assert_eq!(squad[0].date_of_birth.as_deref(), Some("1992-05-11"));
    assert_eq!(squad[0].nationality.as_deref(), Some("Belgium"));
    // Members can arrive with only a name
    assert_eq!(squad[3].name, "Trialist");
    assert_eq!(squad[3].id, None);
    assert_eq!(squad[3].nationality, None);
    assert_eq!(squad[3].date_of_birth, None);
}

#[test]
fn empty_squad_parses_to_no_members() {
    let squad = parse_squad_response(r#"{"squad": []}"#).unwrap();
    assert!(squad.is_empty());
}

#[test]
fn squadless_payload_is_malformed() {
    assert!(matches!(
        parse_squad_response(r#"{"id": 86, "name": "Real Madrid CF"}"#),
        Err(ResolveError::MalformedResponse {
            endpoint: Endpoint::Squad,
            ..
        })
    ));
}

#[test]
fn non_json_payload_is_malformed() {
    assert!(matches!(
        parse_squad_response("<html>rate limited</html>"),
        Err(ResolveError::MalformedResponse {
            endpoint: Endpoint::Squad,
            ..
        })
    ));
    assert!(matches!(
        parse_team_search_response("null", "Real Madrid"),
        Err(ResolveError::MalformedResponse {
            endpoint: Endpoint::TeamSearch,
            ..
        })
    ));
}

#[test]
fn parses_team_search_fixture() {
    let id = parse_team_search_response(&read_fixture("team_search.json"), "Real Madrid").unwrap();
    assert_eq!(id, 86);
}

#[test]
fn team_search_without_teams_is_unknown() {
    match parse_team_search_response(r#"{"teams": []}"#, "Atlantis FC") {
        Err(ResolveError::UnknownTeam(name)) => assert_eq!(name, "Atlantis FC"),
        other => panic!("expected UnknownTeam, got {other:?}"),
    }
    // A missing teams field counts as no match too
    match parse_team_search_response(r#"{"count": 0}"#, "Atlantis FC") {
        Err(ResolveError::UnknownTeam(name)) => assert_eq!(name, "Atlantis FC"),
        other => panic!("expected UnknownTeam, got {other:?}"),
    }
}
