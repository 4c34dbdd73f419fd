use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use crate::error::ScoreError;

/// Totals for one player's card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatLine {
    pub total_par: i32,
    pub total_strokes: i32,
    pub diff: i32,
    pub rel_long: String,
    pub rel_short: String,
}

/// A `StatLine` tagged with the player it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerStat {
    pub player: String,
    pub total_par: i32,
    pub total_strokes: i32,
    pub diff: i32,
    pub rel_long: String,
    pub rel_short: String,
}

impl PlayerStat {
    fn from_line(player: &str, line: StatLine) -> Self {
        Self {
            player: player.to_string(),
            total_par: line.total_par,
            total_strokes: line.total_strokes,
            diff: line.diff,
            rel_long: line.rel_long,
            rel_short: line.rel_short,
        }
    }
}

/// Long and short text for a differential, e.g. `("+3 (over par)", "+3")`.
#[must_use]
pub fn relative_to_par(diff: i32) -> (String, String) {
    match diff.signum() {
        1 => (format!("+{diff} (over par)"), format!("+{diff}")),
        -1 => (format!("{diff} (under par)"), diff.to_string()),
        _ => ("E (even par)".to_string(), "E".to_string()),
    }
}

fn checked_total(values: &[i32], what: &str) -> Result<i32, ScoreError> {
    values
        .iter()
        .try_fold(0i32, |acc, v| acc.checked_add(*v))
        .ok_or_else(|| ScoreError::invalid(format!("{what} total overflows i32")))
}

/// Sum pars and strokes for one player and describe the result relative to par.
///
/// # Errors
///
/// Returns `ScoreError::InvalidInput` if `pars` and `strokes` differ in length,
/// or if a total or the differential does not fit in an `i32`.
pub fn calculate(pars: &[i32], strokes: &[i32]) -> Result<StatLine, ScoreError> {
    if pars.len() != strokes.len() {
        return Err(ScoreError::invalid(format!(
            "{} pars but {} stroke entries",
            pars.len(),
            strokes.len()
        )));
    }

    let total_par = checked_total(pars, "par")?;
    let total_strokes = checked_total(strokes, "stroke")?;
    let diff = total_strokes
        .checked_sub(total_par)
        .ok_or_else(|| ScoreError::invalid("differential overflows i32"))?;
    let (rel_long, rel_short) = relative_to_par(diff);

    Ok(StatLine {
        total_par,
        total_strokes,
        diff,
        rel_long,
        rel_short,
    })
}

/// Check every player has a stroke sequence matching `pars` before anything is summed.
pub(crate) fn validate_cards<S: BuildHasher>(
    players: &[String],
    pars: &[i32],
    scores: &HashMap<String, Vec<i32>, S>,
) -> Result<(), ScoreError> {
    for name in players {
        let strokes = scores
            .get(name)
            .ok_or_else(|| ScoreError::MissingPlayerData(name.clone()))?;
        if strokes.len() != pars.len() {
            return Err(ScoreError::invalid(format!(
                "{name} has {} stroke entries for {} holes",
                strokes.len(),
                pars.len()
            )));
        }
    }
    Ok(())
}

/// One `PlayerStat` per player, in the order given.
///
/// # Errors
///
/// `ScoreError::MissingPlayerData` if a player has no strokes recorded, or
/// `ScoreError::InvalidInput` if any card is a different length than `pars`.
pub fn player_stats<S: BuildHasher>(
    players: &[String],
    pars: &[i32],
    scores: &HashMap<String, Vec<i32>, S>,
) -> Result<Vec<PlayerStat>, ScoreError> {
    validate_cards(players, pars, scores)?;

    let mut stats = Vec::with_capacity(players.len());
    for name in players {
        let strokes = scores
            .get(name)
            .ok_or_else(|| ScoreError::MissingPlayerData(name.clone()))?;
        stats.push(PlayerStat::from_line(name, calculate(pars, strokes)?));
    }
    Ok(stats)
}
