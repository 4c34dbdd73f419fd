use golf_scorecard::ScoreError;
use golf_scorecard::score::{calculate, player_stats, stats::relative_to_par};
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn test_even_par() {
    let line = calculate(&[4, 4, 4], &[5, 4, 3]).unwrap();
    assert_eq!(line.total_par, 12);
    assert_eq!(line.total_strokes, 12);
    assert_eq!(line.diff, 0);
    assert_eq!(line.rel_long, "E (even par)");
    assert_eq!(line.rel_short, "E");
}

#[test]
fn test_over_par() {
    let line = calculate(&[4, 4], &[5, 6]).unwrap();
    assert_eq!(line.diff, 3);
    assert_eq!(line.rel_long, "+3 (over par)");
    assert_eq!(line.rel_short, "+3");
}

#[test]
fn test_under_par() {
    let line = calculate(&[4, 4], &[3, 3]).unwrap();
    assert_eq!(line.diff, -2);
    assert_eq!(line.rel_long, "-2 (under par)");
    assert_eq!(line.rel_short, "-2");
}

#[test]
fn test_no_holes_is_even() {
    let line = calculate(&[], &[]).unwrap();
    assert_eq!(line.total_par, 0);
    assert_eq!(line.total_strokes, 0);
    assert_eq!(line.diff, 0);
    assert_eq!(line.rel_long, "E (even par)");
    assert_eq!(line.rel_short, "E");
}

#[test]
fn test_mismatched_lengths_rejected() {
    let err = calculate(&[4, 4, 4], &[4, 4]).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)), "got {err:?}");
}

#[test]
fn test_totals_that_overflow_are_rejected() {
    assert!(matches!(
        calculate(&[i32::MAX, 1], &[4, 4]),
        Err(ScoreError::InvalidInput(_))
    ));
    assert!(matches!(
        calculate(&[4, 4], &[i32::MAX, 1]),
        Err(ScoreError::InvalidInput(_))
    ));
    // both totals fit, their difference does not
    assert!(matches!(
        calculate(&[i32::MAX], &[-2]),
        Err(ScoreError::InvalidInput(_))
    ));
    assert_eq!(calculate(&[i32::MAX], &[i32::MAX]).unwrap().diff, 0);
}

#[test]
fn test_player_stats_in_input_order() {
    let players = vec!["Amy".to_string(), "Bo".to_string()];
    let scores = HashMap::from([
        ("Amy".to_string(), vec![4, 5]),
        ("Bo".to_string(), vec![3, 4]),
    ]);
    let stats = player_stats(&players, &[4, 4], &scores).unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0].player, "Amy");
    assert_eq!(stats[0].total_strokes, 9);
    assert_eq!(stats[0].rel_long, "+1 (over par)");
    assert_eq!(stats[1].player, "Bo");
    assert_eq!(stats[1].total_par, 8);
    assert_eq!(stats[1].rel_short, "-1");
}

#[test]
fn test_player_stats_missing_player() {
    let players = vec!["Amy".to_string(), "Cy".to_string()];
    let scores = HashMap::from([("Amy".to_string(), vec![4, 5])]);
    let err = player_stats(&players, &[4, 4], &scores).unwrap_err();
    assert_eq!(err, ScoreError::MissingPlayerData("Cy".to_string()));
}

#[test]
fn test_player_stats_short_card() {
    let players = vec!["Amy".to_string()];
    let scores = HashMap::from([("Amy".to_string(), vec![4])]);
    let err = player_stats(&players, &[4, 4], &scores).unwrap_err();
    assert!(matches!(err, ScoreError::InvalidInput(_)));
}

proptest! {
    #[test]
    fn prop_diff_is_strokes_minus_par(
        holes in prop::collection::vec((3i32..=6, 1i32..=20), 0..=27)
    ) {
        let (pars, strokes): (Vec<i32>, Vec<i32>) = holes.into_iter().unzip();
        let line = calculate(&pars, &strokes).unwrap();

        prop_assert_eq!(line.total_par, pars.iter().sum::<i32>());
        prop_assert_eq!(line.total_strokes, strokes.iter().sum::<i32>());
        prop_assert_eq!(line.total_strokes - line.total_par, line.diff);

        let branches = [
            line.rel_long.ends_with("(over par)") && line.diff > 0,
            line.rel_long.ends_with("(under par)") && line.diff < 0,
            line.rel_long == "E (even par)" && line.diff == 0,
        ];
        prop_assert_eq!(branches.iter().filter(|b| **b).count(), 1);
    }

    #[test]
    fn prop_calculate_is_pure(
        holes in prop::collection::vec((3i32..=6, 1i32..=20), 0..=27)
    ) {
        let (pars, strokes): (Vec<i32>, Vec<i32>) = holes.into_iter().unzip();
        prop_assert_eq!(calculate(&pars, &strokes), calculate(&pars, &strokes));
    }

    #[test]
    fn prop_short_text_is_prefix_of_long(diff in -200i32..=200) {
        let (long, short) = relative_to_par(diff);
        prop_assert!(long.starts_with(&short));
    }
}
