use serde::Serialize;
use std::collections::HashMap;
use std::hash::BuildHasher;

use super::stats::{calculate, validate_cards};
use crate::error::ScoreError;

const NAME_WIDTH: usize = 12;
const TOTAL_WIDTH: usize = 8;
const REL_WIDTH: usize = 6;
const SEPARATOR_WIDTH: usize = 28;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedPlayer {
    pub name: String,
    pub total: i32,
    pub rel_short: String,
}

/// Players ranked by total strokes, best first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub course_name: String,
    ranked: Vec<RankedPlayer>,
}

impl SummaryReport {
    /// Rank `players` by total strokes. Equal totals keep the order of `players`.
    ///
    /// # Errors
    ///
    /// `ScoreError::InvalidInput` for an empty player list or a card whose
    /// length differs from `pars`; `ScoreError::MissingPlayerData` if a player
    /// has no card at all.
    pub fn build<S: BuildHasher>(
        course_name: &str,
        players: &[String],
        pars: &[i32],
        scores: &HashMap<String, Vec<i32>, S>,
    ) -> Result<Self, ScoreError> {
        if players.is_empty() {
            return Err(ScoreError::invalid("no players in round"));
        }
        validate_cards(players, pars, scores)?;

        let mut ranked = Vec::with_capacity(players.len());
        for name in players {
            let strokes = scores
                .get(name)
                .ok_or_else(|| ScoreError::MissingPlayerData(name.clone()))?;
            let line = calculate(pars, strokes)?;
            ranked.push(RankedPlayer {
                name: name.clone(),
                total: line.total_strokes,
                rel_short: line.rel_short,
            });
        }

        // sort_by_key is stable, which is the tie-break
        ranked.sort_by_key(|p| p.total);

        Ok(Self {
            course_name: course_name.to_string(),
            ranked,
        })
    }

    #[must_use]
    pub fn ranked(&self) -> &[RankedPlayer] {
        &self.ranked
    }

    #[must_use]
    pub fn winner(&self) -> Option<&RankedPlayer> {
        self.ranked.first()
    }

    /// Fixed-width text suitable for pasting into an SMS or chat message.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.ranked.len() + 6);
        lines.push(format!("Golf Results - {}\n", self.course_name));
        lines.push(format_row("Player", "Total", "Rel"));
        lines.push("-".repeat(SEPARATOR_WIDTH));
        for p in &self.ranked {
            lines.push(format_row(&p.name, &p.total.to_string(), &p.rel_short));
        }
        lines.push(String::new());
        if let Some(w) = self.winner() {
            lines.push(format!("Winner: {} ({})", w.name, w.total));
        }
        lines.join("\n")
    }
}

fn format_row(name: &str, total: &str, rel: &str) -> String {
    format!("{name:<NAME_WIDTH$}{total:<TOTAL_WIDTH$}{rel:<REL_WIDTH$}")
}

/// Build and render the summary text in one go.
///
/// # Errors
///
/// See [`SummaryReport::build`].
pub fn build_summary<S: BuildHasher>(
    course_name: &str,
    players: &[String],
    pars: &[i32],
    scores: &HashMap<String, Vec<i32>, S>,
) -> Result<String, ScoreError> {
    SummaryReport::build(course_name, players, pars, scores).map(|r| r.render())
}
