use std::collections::HashMap;
use std::hash::BuildHasher;
use std::str::FromStr;

use crate::model::{HoleEntry, MAX_PLAYERS, Nine, SetupDraft};
use crate::mvu::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoleAction {
    Next,
    Finish,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleSubmission {
    pub index: usize,
    pub entry: HoleEntry,
    pub action: HoleAction,
}

fn parse_field<T: FromStr, S: BuildHasher>(
    form: &HashMap<String, String, S>,
    key: &str,
) -> Result<T, AppError> {
    let raw = form
        .get(key)
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::Form(format!("{key} is required")))?;
    raw.parse()
        .map_err(|_| AppError::Form(format!("{key} must be a whole number, got '{raw}'")))
}

/// Read the setup form as submitted. Validation happens when the round starts,
/// so a rejected draft can be shown again unchanged.
pub fn decode_setup<S: BuildHasher>(form: &HashMap<String, String, S>) -> SetupDraft {
    let course_name = form.get("course_name").cloned().unwrap_or_default();
    let player_count = form
        .get("num_players")
        .and_then(|s| s.trim().parse().ok());

    let names: Vec<String> = (0..MAX_PLAYERS)
        .map(|i| form.get(&format!("player_{i}")).cloned().unwrap_or_default())
        .collect();

    // unchecked boxes are simply absent from the form
    let nines: Vec<Nine> = Nine::ALL
        .into_iter()
        .filter(|n| form.contains_key(n.field()))
        .collect();

    SetupDraft {
        course_name,
        player_count,
        names,
        nines,
    }
}

/// Decode one hole's form for a round with `player_count` players.
///
/// # Errors
///
/// `AppError::Form` for missing or non-numeric fields or an unknown action,
/// `AppError::Score` for out-of-range par or strokes.
pub fn decode_hole<S: BuildHasher>(
    form: &HashMap<String, String, S>,
    player_count: usize,
) -> Result<HoleSubmission, AppError> {
    let index: usize = parse_field(form, "hole_index")?;
    let par: i32 = parse_field(form, "par")?;
    let strokes = (0..player_count)
        .map(|i| parse_field(form, &format!("stroke_{i}")))
        .collect::<Result<Vec<i32>, _>>()?;

    let action = match form.get("action").map(String::as_str) {
        Some("next") | None => HoleAction::Next,
        Some("finish") => HoleAction::Finish,
        Some(other) => return Err(AppError::Form(format!("unknown action '{other}'"))),
    };

    Ok(HoleSubmission {
        index,
        entry: HoleEntry::new(par, strokes)?,
        action,
    })
}
