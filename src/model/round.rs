use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::ops::RangeInclusive;

use crate::error::ScoreError;
use crate::score::{PlayerStat, SummaryReport, player_stats};

pub const MAX_PLAYERS: usize = 4;
pub const DEFAULT_PLAYER_COUNT: usize = 2;
pub const DEFAULT_COURSE_NAME: &str = "My Golf Course";
pub const PAR_RANGE: RangeInclusive<i32> = 3..=6;
pub const STROKE_RANGE: RangeInclusive<i32> = 1..=20;

/// A block of nine consecutive holes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Nine {
    Front,
    Back,
    Third,
}

impl Nine {
    /// Display order, which is also the order holes are played in.
    pub const ALL: [Nine; 3] = [Nine::Front, Nine::Back, Nine::Third];

    #[must_use]
    pub fn holes(self) -> RangeInclusive<i32> {
        match self {
            Nine::Front => 1..=9,
            Nine::Back => 10..=18,
            Nine::Third => 19..=27,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Nine::Front => "Front 9 (1–9)",
            Nine::Back => "Back 9 (10–18)",
            Nine::Third => "3rd Nine (19–27)",
        }
    }

    /// Form field name for the nine's checkbox.
    #[must_use]
    pub fn field(self) -> &'static str {
        match self {
            Nine::Front => "nine_front",
            Nine::Back => "nine_back",
            Nine::Third => "nine_third",
        }
    }
}

/// Holes for the selected nines, always Front, Back, Third regardless of
/// selection order. Nothing selected means the front nine.
#[must_use]
pub fn hole_sequence(selected: &[Nine]) -> Vec<i32> {
    let nines: Vec<Nine> = if selected.is_empty() {
        vec![Nine::Front]
    } else {
        Nine::ALL
            .into_iter()
            .filter(|n| selected.contains(n))
            .collect()
    };
    nines.into_iter().flat_map(Nine::holes).collect()
}

/// Normalised answers from the setup form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundSetup {
    pub course_name: String,
    pub players: Vec<String>,
    pub nines: Vec<Nine>,
}

impl RoundSetup {
    /// Only the first `player_count` names are used. Blank names become
    /// `Player1`, `Player2`, ... by position; a blank course name becomes the
    /// default course name.
    ///
    /// # Errors
    ///
    /// `ScoreError::InvalidInput` if `player_count` is outside 1..=4 or two
    /// players end up with the same name.
    pub fn new(
        course_name: &str,
        raw_names: &[String],
        player_count: usize,
        nines: Vec<Nine>,
    ) -> Result<Self, ScoreError> {
        if !(1..=MAX_PLAYERS).contains(&player_count) {
            return Err(ScoreError::invalid(format!(
                "number of players must be between 1 and {MAX_PLAYERS}, got {player_count}"
            )));
        }

        let mut players: Vec<String> = Vec::with_capacity(player_count);
        for i in 0..player_count {
            let name = raw_names.get(i).map(|s| s.trim()).unwrap_or_default();
            let name = if name.is_empty() {
                format!("Player{}", i + 1)
            } else {
                name.to_string()
            };
            if players.contains(&name) {
                return Err(ScoreError::invalid(format!(
                    "player name '{name}' is used more than once"
                )));
            }
            players.push(name);
        }

        let course_name = course_name.trim();
        let course_name = if course_name.is_empty() {
            DEFAULT_COURSE_NAME.to_string()
        } else {
            course_name.to_string()
        };

        Ok(Self {
            course_name,
            players,
            nines,
        })
    }
}

/// What the setup form submitted, before any defaulting or validation.
/// Kept so a rejected form can be shown again as the user left it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupDraft {
    pub course_name: String,
    pub player_count: Option<usize>,
    pub names: Vec<String>,
    pub nines: Vec<Nine>,
}

impl SetupDraft {
    /// The blank form: two players, front nine.
    #[must_use]
    pub fn new(default_course_name: &str) -> Self {
        Self {
            course_name: default_course_name.to_string(),
            player_count: Some(DEFAULT_PLAYER_COUNT),
            names: (1..=MAX_PLAYERS).map(|n| format!("Player{n}")).collect(),
            nines: vec![Nine::Front],
        }
    }

    /// # Errors
    ///
    /// `ScoreError::InvalidInput` if the player count is missing, or as
    /// [`RoundSetup::new`].
    pub fn to_setup(&self) -> Result<RoundSetup, ScoreError> {
        let player_count = self
            .player_count
            .ok_or_else(|| ScoreError::invalid("number of players must be a whole number"))?;
        RoundSetup::new(
            &self.course_name,
            &self.names,
            player_count,
            self.nines.clone(),
        )
    }
}

/// Par and every player's strokes for one hole, strokes in player order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HoleEntry {
    pub par: i32,
    pub strokes: Vec<i32>,
}

impl HoleEntry {
    /// # Errors
    ///
    /// `ScoreError::InvalidInput` if par is outside 3..=6 or any stroke count
    /// is outside 1..=20.
    pub fn new(par: i32, strokes: Vec<i32>) -> Result<Self, ScoreError> {
        if !PAR_RANGE.contains(&par) {
            return Err(ScoreError::invalid(format!(
                "par must be between {} and {}, got {par}",
                PAR_RANGE.start(),
                PAR_RANGE.end()
            )));
        }
        if let Some(bad) = strokes.iter().find(|s| !STROKE_RANGE.contains(s)) {
            return Err(ScoreError::invalid(format!(
                "strokes must be between {} and {}, got {bad}",
                STROKE_RANGE.start(),
                STROKE_RANGE.end()
            )));
        }
        Ok(Self { par, strokes })
    }
}

/// A round in progress or finished.
///
/// `pars` and each player's card always have the same length: the number of
/// holes recorded so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    pub course_name: String,
    pub players: Vec<String>,
    pub holes: Vec<i32>,
    pub pars: Vec<i32>,
    pub scores: HashMap<String, Vec<i32>>,
    pub started_at: DateTime<Utc>,
}

impl Round {
    #[must_use]
    pub fn start(setup: RoundSetup, started_at: DateTime<Utc>) -> Self {
        let holes = hole_sequence(&setup.nines);
        let scores = setup
            .players
            .iter()
            .map(|p| (p.clone(), Vec::with_capacity(holes.len())))
            .collect();
        Self {
            course_name: setup.course_name,
            pars: Vec::with_capacity(holes.len()),
            players: setup.players,
            holes,
            scores,
            started_at,
        }
    }

    #[must_use]
    pub fn holes_recorded(&self) -> usize {
        self.pars.len()
    }

    /// Index into `holes` and hole number of the next hole to enter.
    #[must_use]
    pub fn current_hole(&self) -> Option<(usize, i32)> {
        let idx = self.holes_recorded();
        self.holes.get(idx).map(|h| (idx, *h))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.holes_recorded() >= self.holes.len()
    }

    /// Record the hole at `index`. The next unplayed index appends; an index
    /// already played overwrites that hole.
    ///
    /// # Errors
    ///
    /// `ScoreError::InvalidInput` if `index` is past the next unplayed hole or
    /// the entry does not have exactly one stroke count per player.
    pub fn record_hole(&mut self, index: usize, entry: HoleEntry) -> Result<(), ScoreError> {
        let recorded = self.holes_recorded();
        if index > recorded || index >= self.holes.len() {
            return Err(ScoreError::invalid(format!(
                "cannot record hole index {index}: {recorded} of {} holes recorded",
                self.holes.len()
            )));
        }
        if entry.strokes.len() != self.players.len() {
            return Err(ScoreError::invalid(format!(
                "expected strokes for {} players, got {}",
                self.players.len(),
                entry.strokes.len()
            )));
        }

        for name in &self.players {
            match self.scores.get(name) {
                Some(card) if card.len() == recorded => {}
                Some(_) => {
                    return Err(ScoreError::invalid(format!(
                        "card for {name} is out of step with the pars"
                    )));
                }
                None => return Err(ScoreError::MissingPlayerData(name.clone())),
            }
        }

        let append = index == recorded;
        if append {
            self.pars.push(entry.par);
        } else {
            self.pars[index] = entry.par;
        }
        for (name, strokes) in self.players.iter().zip(entry.strokes) {
            if let Some(card) = self.scores.get_mut(name) {
                if append {
                    card.push(strokes);
                } else {
                    card[index] = strokes;
                }
            }
        }
        Ok(())
    }

    /// Stop the round after the holes already recorded.
    pub fn finish_early(&mut self) {
        let recorded = self.holes_recorded();
        self.holes.truncate(recorded);
    }

    /// Per-player totals in setup order.
    ///
    /// # Errors
    ///
    /// See [`player_stats`].
    pub fn player_stats(&self) -> Result<Vec<PlayerStat>, ScoreError> {
        player_stats(&self.players, &self.pars, &self.scores)
    }

    /// # Errors
    ///
    /// See [`SummaryReport::build`].
    pub fn summary_report(&self) -> Result<SummaryReport, ScoreError> {
        SummaryReport::build(&self.course_name, &self.players, &self.pars, &self.scores)
    }

    /// # Errors
    ///
    /// See [`SummaryReport::build`].
    pub fn summary_text(&self) -> Result<String, ScoreError> {
        self.summary_report().map(|r| r.render())
    }

    /// `(hole, par, strokes per player)` for every recorded hole.
    #[must_use]
    pub fn card_rows(&self) -> Vec<(i32, i32, Vec<i32>)> {
        self.holes
            .iter()
            .zip(&self.pars)
            .enumerate()
            .map(|(idx, (hole, par))| {
                let strokes = self
                    .players
                    .iter()
                    .map(|p| {
                        self.scores
                            .get(p)
                            .and_then(|card| card.get(idx))
                            .copied()
                            .unwrap_or_default()
                    })
                    .collect();
                (*hole, *par, strokes)
            })
            .collect()
    }
}
