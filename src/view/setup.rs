use maud::{Markup, html};

use crate::model::{MAX_PLAYERS, Nine, SetupDraft};

/// Step 1: course, players and nines, filled in from `draft`. Posts to `round/start`.
#[must_use]
pub fn render_setup_form(draft: &SetupDraft) -> Markup {
    html! {
        h2 { "Step 1 – Game setup" }
        form class="setup" method="post" action="round/start" {
            label for="course_name" { "Golf course name" }
            input type="text" id="course_name" name="course_name" value=(draft.course_name);

            label for="num_players" { "Number of players" }
            select id="num_players" name="num_players" {
                @for n in 1..=MAX_PLAYERS {
                    option value=(n) selected[draft.player_count == Some(n)] { (n) }
                }
            }

            h3 { "Player names" }
            p class="hint" { "Only the first names up to the number of players are used." }
            @for i in 0..MAX_PLAYERS {
                @let field = format!("player_{i}");
                label for=(field) { "Player " (i + 1) }
                input type="text" id=(field) name=(field)
                    value=(draft.names.get(i).map(String::as_str).unwrap_or_default());
            }

            h3 { "Which nines will be played?" }
            @for nine in Nine::ALL {
                label class="nine" {
                    input type="checkbox" name=(nine.field()) value="on" checked[draft.nines.contains(&nine)];
                    " " (nine.label())
                }
            }

            button type="submit" { "▶ Start round" }
        }
    }
}
