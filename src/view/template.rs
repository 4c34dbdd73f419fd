use maud::{Markup, html};

use crate::error::ScoreError;
use crate::model::SetupDraft;
use crate::mvu::round::RoundModel;
use crate::view::hole::render_hole_form;
use crate::view::index::{PAGE_TITLE, render_index_template};
use crate::view::setup::render_setup_form;
use crate::view::summary::render_summary;

/// Full page for whichever step the model is on, with the last rejection on top.
///
/// # Errors
///
/// Returns an error if the round's cards are inconsistent.
pub fn render_round_page(model: &RoundModel) -> Result<Markup, ScoreError> {
    let content = match model.round.as_ref() {
        None => match &model.setup_draft {
            Some(draft) => render_setup_form(draft),
            None => render_setup_form(&SetupDraft::new(&model.default_course_name)),
        },
        Some(round) if !round.is_complete() => render_hole_form(round)?,
        Some(round) => render_summary(round)?,
    };

    Ok(render_index_template(
        PAGE_TITLE,
        &html! {
            @if let Some(e) = &model.flash {
                div class="error" role="alert" { (e.to_string()) }
            }
            (content)
        },
    ))
}
