use chrono::{DateTime, Utc};
use maud::Markup;

use super::error::AppError;
use crate::model::{HoleEntry, Round, SetupDraft};
use crate::view::render_round_page;

/// Which step of the form the session is on. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Setup,
    Entry,
    Summary,
}

/// Everything one browser session knows about its round.
///
/// `error` belongs to the message being handled right now. `flash` is the
/// last rejection, kept until a page has shown it once.
#[derive(Debug, Clone)]
pub struct RoundModel {
    pub default_course_name: String,
    pub round: Option<Round>,
    pub setup_draft: Option<SetupDraft>,
    pub markup: Option<Markup>,
    pub error: Option<AppError>,
    pub flash: Option<AppError>,
}

impl RoundModel {
    #[must_use]
    pub fn new(default_course_name: &str) -> Self {
        Self {
            default_course_name: default_course_name.to_string(),
            round: None,
            setup_draft: None,
            markup: None,
            error: None,
            flash: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match &self.round {
            None => Phase::Setup,
            Some(round) if !round.is_complete() => Phase::Entry,
            Some(_) => Phase::Summary,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    StartRound {
        draft: SetupDraft,
        started_at: DateTime<Utc>,
    },
    SaveHole {
        index: usize,
        entry: HoleEntry,
    },
    FinishRound {
        index: usize,
        entry: HoleEntry,
    },
    NewRound,
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    RenderPage,
}

/// Apply `msg` to the model. Rejected input is recorded in `model.error` and
/// `model.flash` and leaves the round untouched.
pub fn update(model: &mut RoundModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::RenderPage],
        Msg::StartRound { draft, started_at } => {
            if model.phase() != Phase::Setup {
                reject(
                    model,
                    AppError::Form(
                        "a round is already in progress; start a new round first".into(),
                    ),
                );
                return vec![];
            }
            match draft.to_setup() {
                Ok(setup) => {
                    model.round = Some(Round::start(setup, started_at));
                    model.setup_draft = None;
                    model.flash = None;
                }
                Err(e) => {
                    // keep what was typed so the form comes back as it was sent
                    model.setup_draft = Some(draft);
                    reject(model, e.into());
                }
            }
            vec![]
        }
        Msg::SaveHole { index, entry } => {
            let saved = with_round(model, |round| round.record_hole(index, entry));
            settle(model, saved);
            vec![]
        }
        Msg::FinishRound { index, entry } => {
            let finished = with_round(model, |round| {
                round.record_hole(index, entry)?;
                round.finish_early();
                Ok(())
            });
            settle(model, finished);
            vec![]
        }
        Msg::NewRound => {
            model.round = None;
            model.setup_draft = None;
            model.markup = None;
            model.flash = None;
            vec![]
        }
        Msg::Rendered(markup) => {
            // the page carrying the flash has been built
            model.markup = Some(markup);
            model.flash = None;
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

fn reject(model: &mut RoundModel, e: AppError) {
    model.flash = Some(e.clone());
    model.error = Some(e);
}

fn settle(model: &mut RoundModel, result: Result<(), AppError>) {
    match result {
        Ok(()) => model.flash = None,
        Err(e) => reject(model, e),
    }
}

fn with_round<F>(model: &mut RoundModel, f: F) -> Result<(), AppError>
where
    F: FnOnce(&mut Round) -> Result<(), crate::error::ScoreError>,
{
    let round = model
        .round
        .as_mut()
        .ok_or_else(|| AppError::NotFound("no round in progress".into()))?;
    f(round).map_err(AppError::from)
}

pub fn run_effect(effect: Effect, model: &RoundModel) -> Msg {
    match effect {
        Effect::RenderPage => match render_round_page(model) {
            Ok(markup) => Msg::Rendered(markup),
            Err(e) => Msg::Failed(AppError::from(e)),
        },
    }
}
