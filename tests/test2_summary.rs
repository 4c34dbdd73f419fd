use golf_scorecard::ScoreError;
use golf_scorecard::score::{SummaryReport, build_summary};
use std::collections::HashMap;

fn names(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

#[test]
fn test_summary_text_exact() {
    let players = names(&["Amy", "Bo"]);
    let scores = HashMap::from([
        ("Amy".to_string(), vec![4, 5]),
        ("Bo".to_string(), vec![3, 4]),
    ]);

    let text = build_summary("Pebble", &players, &[4, 4], &scores).unwrap();
    let expected = concat!(
        "Golf Results - Pebble\n",
        "\n",
        "Player      Total   Rel   \n",
        "----------------------------\n",
        "Bo          7       -1    \n",
        "Amy         9       +1    \n",
        "\n",
        "Winner: Bo (7)",
    );
    assert_eq!(text, expected);
}

#[test]
fn test_ties_keep_player_order() {
    let players = names(&["Cat", "Dan", "Eve"]);
    let scores = HashMap::from([
        ("Cat".to_string(), vec![5, 5]),
        ("Dan".to_string(), vec![4, 4]),
        ("Eve".to_string(), vec![4, 4]),
    ]);

    let report = SummaryReport::build("Links", &players, &[4, 4], &scores).unwrap();
    let order: Vec<&str> = report.ranked().iter().map(|p| p.name.as_str()).collect();
    assert_eq!(order, vec!["Dan", "Eve", "Cat"]);
    assert_eq!(report.winner().map(|w| w.name.as_str()), Some("Dan"));
    assert!(report.render().ends_with("Winner: Dan (8)"));

    // same totals, players listed the other way round
    let players = names(&["Eve", "Dan", "Cat"]);
    let report = SummaryReport::build("Links", &players, &[4, 4], &scores).unwrap();
    assert_eq!(report.winner().map(|w| w.name.as_str()), Some("Eve"));
}

#[test]
fn test_long_names_are_not_truncated() {
    let players = names(&["Bartholomew Smith"]);
    let scores = HashMap::from([("Bartholomew Smith".to_string(), vec![3])]);

    let text = build_summary("Augusta", &players, &[3], &scores).unwrap();
    let row = text.lines().nth(4).unwrap();
    assert_eq!(row, "Bartholomew Smith3       E     ");
}

#[test]
fn test_even_player_shows_e() {
    let players = names(&["Solo"]);
    let scores = HashMap::from([("Solo".to_string(), vec![4, 3, 5])]);
    let text = build_summary("Home", &players, &[4, 4, 4], &scores).unwrap();
    assert!(text.contains("Solo        12      E     "));
    assert!(text.ends_with("Winner: Solo (12)"));
}

#[test]
fn test_missing_player_fails_before_rendering() {
    let players = names(&["Amy", "Ghost"]);
    let scores = HashMap::from([("Amy".to_string(), vec![4, 5])]);
    let err = build_summary("Pebble", &players, &[4, 4], &scores).unwrap_err();
    assert_eq!(err, ScoreError::MissingPlayerData("Ghost".to_string()));
}

#[test]
fn test_mismatched_card_rejected() {
    let players = names(&["Amy"]);
    let scores = HashMap::from([("Amy".to_string(), vec![4, 5, 6])]);
    let err = build_summary("Pebble", &players, &[4, 4], &scores).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)));
}

#[test]
fn test_no_players_rejected() {
    let scores: HashMap<String, Vec<i32>> = HashMap::new();
    let err = build_summary("Pebble", &[], &[4], &scores).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)));
}

#[test]
fn test_summary_with_no_holes() {
    let players = names(&["Amy", "Bo"]);
    let scores = HashMap::from([("Amy".to_string(), vec![]), ("Bo".to_string(), vec![])]);
    let report = SummaryReport::build("Pebble", &players, &[], &scores).unwrap();
    assert_eq!(report.winner().map(|w| (w.name.as_str(), w.total)), Some(("Amy", 0)));
    assert!(report.ranked().iter().all(|p| p.rel_short == "E"));
}
