use maud::{Markup, html};

use crate::error::ScoreError;
use crate::model::Round;
use crate::view::utils::score_with_shape;

/// Step 3: the scorecard with totals and the SMS text.
///
/// # Errors
///
/// Returns an error if the round's cards are inconsistent.
pub fn render_summary(round: &Round) -> Result<Markup, ScoreError> {
    let stats = round.player_stats()?;
    let report = round.summary_report()?;
    let sms_text = report.render();

    Ok(html! {
        h2 { "Step 3 – Summary and SMS" }

        h3 { "📋 Scorecard Summary" }
        table class="styled-table scorecard" {
            thead {
                tr {
                    th { "Hole (Par)" }
                    @for name in &round.players {
                        th { (name) }
                    }
                }
            }
            tbody {
                @for (hole, par, strokes) in round.card_rows() {
                    tr {
                        td { (hole) " (" (par) ")" }
                        @for s in strokes {
                            td { (score_with_shape(par, s)) }
                        }
                    }
                }
                tr class="total" {
                    td { "Total" }
                    @for stat in &stats {
                        td { (stat.total_strokes) }
                    }
                }
                tr class="rel" {
                    td { "Rel to Par" }
                    @for stat in &stats {
                        td { (stat.rel_short) }
                    }
                }
            }
        }

        @if let Some(winner) = report.winner() {
            p class="winner" { "🏆 " (winner.name) " wins with " (winner.total) }
        }

        h3 { "📱 SMS / WhatsApp Summary" }
        pre id="sms" {
            (sms_text)
        }
        p class="hint" {
            button type="button" hx-get="round/summary.txt" hx-target="#sms" hx-swap="innerHTML" {
                "↻ Refresh"
            }
            " · "
            a href="round/summary.txt" { "Plain text" }
            " · "
            a href="round/summary.json" { "JSON" }
        }

        form method="post" action="round/new" {
            button type="submit" { "🔁 Start a new round" }
        }
    })
}
