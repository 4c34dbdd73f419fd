use maud::{Markup, html};

use crate::error::ScoreError;
use crate::model::Round;
use crate::model::round::{PAR_RANGE, STROKE_RANGE};

const DEFAULT_PAR: i32 = 4;
const DEFAULT_STROKES: i32 = 4;

/// Step 2: par and strokes for the next hole, plus running totals.
///
/// # Errors
///
/// Returns an error if the round's cards are inconsistent.
pub fn render_hole_form(round: &Round) -> Result<Markup, ScoreError> {
    let stats = round.player_stats()?;
    let total_holes = round.holes.len();

    Ok(html! {
        h2 { "Step 2 – Enter scores hole by hole" }
        p { "Course: " strong { (round.course_name) } }
        p { "Players: " strong { (round.players.join(", ")) } }
        p { "Total holes this round: " strong { (total_holes) } }

        @if let Some((idx, hole)) = round.current_hole() {
            h3 { "Hole " (hole) " (" (idx + 1) " of " (total_holes) ")" }
            form class="hole" method="post" action="round/hole" {
                input type="hidden" name="hole_index" value=(idx);

                label for="par" { "Par for hole " (hole) }
                input type="number" id="par" name="par"
                    min=(*PAR_RANGE.start()) max=(*PAR_RANGE.end()) value=(DEFAULT_PAR);

                p { "Enter strokes for each player:" }
                @for (i, name) in round.players.iter().enumerate() {
                    @let field = format!("stroke_{i}");
                    label for=(field) { "Strokes for " (name) }
                    input type="number" id=(field) name=(field)
                        min=(*STROKE_RANGE.start()) max=(*STROKE_RANGE.end()) value=(DEFAULT_STROKES);
                }

                div class="buttons" {
                    button type="submit" name="action" value="next" { "Save hole and next ▶" }
                    button type="submit" name="action" value="finish" { "Finish round now ⏹" }
                }
            }
            p class="info" {
                "Fill par and strokes, then click " strong { "Save hole and next" } ". "
                "Use " strong { "Finish round now" } " to stop before all holes are played."
            }
        }

        @if round.holes_recorded() > 0 {
            h3 { "So far" }
            table class="styled-table running" {
                thead {
                    tr {
                        th { "Player" }
                        th { "Strokes" }
                        th { "Par" }
                        th { "Relative" }
                    }
                }
                tbody {
                    @for stat in &stats {
                        tr {
                            td { (stat.player) }
                            td { (stat.total_strokes) }
                            td { (stat.total_par) }
                            td { (stat.rel_long) }
                        }
                    }
                }
            }
        }
    })
}
