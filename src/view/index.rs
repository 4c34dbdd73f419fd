use maud::{Markup, html};

use crate::HTMX_PATH;

pub const PAGE_TITLE: &str = "Golf Scorecard";

#[must_use]
pub fn render_index_template(title: &str, content: &Markup) -> Markup {
    html! {
        (maud::DOCTYPE)
        head{
            meta charset="UTF-8";
            meta name="viewport" content="width=device-width, initial-scale=1.0";
            link rel="stylesheet" type="text/css" href="static/scorecard.css";
            title { (title) }
            script src=(HTMX_PATH) defer {}
        }
        body {
            h1 { "⛳ " (title) }
            p class="intro" {
                "Hole-by-hole scorecard with up to 4 players and Front / Back / 3rd Nine selection."
            }
            div id="round" {
                (content)
            }
        }
    }
}
