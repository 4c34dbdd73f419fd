use actix_web::cookie::{Cookie, SameSite};
use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, error, info, warn};

use super::form::{HoleAction, decode_hole, decode_setup};
use crate::model::{Round, hole_sequence};
use crate::mvu::{AppError, Msg, RoundModel, run_round};
use crate::score::{PlayerStat, RankedPlayer};
use crate::session::{SESSION_COOKIE, SessionStore};

/// Where every POST sends the browser: the page one level above `round/`.
pub const INDEX_FROM_ROUND: &str = "../";

/// Register the round routes. Paths are relative to whatever scope mounts them.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(index))
        .route("/round/start", web::post().to(start_round))
        .route("/round/hole", web::post().to(finish_or_save_hole))
        .route("/round/new", web::post().to(new_round))
        .route("/round/summary.txt", web::get().to(summary_text))
        .route("/round/summary.json", web::get().to(summary_json));
}

fn session_id(req: &HttpRequest) -> Option<String> {
    req.cookie(SESSION_COOKIE)
        .map(|c| c.value().to_string())
        .filter(|id| SessionStore::is_well_formed(id))
}

fn session_cookie(id: &str) -> Cookie<'static> {
    Cookie::build(SESSION_COOKIE, id.to_string())
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .finish()
}

pub async fn index(req: HttpRequest, store: Data<SessionStore>) -> HttpResponse {
    let (id, rendered) = store
        .with_session(session_id(&req).as_deref(), Utc::now(), |model| {
            run_round(model, Msg::PageLoad).map(|()| model.markup.take())
        })
        .await;

    match rendered {
        Ok(Some(markup)) => {
            debug!(session = %id, "page rendered");
            HttpResponse::Ok()
                .cookie(session_cookie(&id))
                .content_type("text/html")
                .body(markup.into_string())
        }
        Ok(None) => {
            error!(session = %id, "page load finished without markup");
            HttpResponse::InternalServerError()
                .cookie(session_cookie(&id))
                .json(json!({"error": "page was not rendered"}))
        }
        Err(e) => {
            error!(session = %id, error = %e, "page render failed");
            HttpResponse::InternalServerError()
                .cookie(session_cookie(&id))
                .json(json!({"error": e.to_string()}))
        }
    }
}

/// Decode a form into a message, run it, then redirect back to the page.
/// Rejected input redirects too; the page shows the error once from the
/// model's flash, so the browser never sits on a `round/...` URL.
async fn dispatch_form<F>(req: &HttpRequest, store: &SessionStore, decode: F) -> HttpResponse
where
    F: FnOnce(&RoundModel) -> Result<Msg, AppError>,
{
    let (id, outcome) = store
        .with_session(session_id(req).as_deref(), Utc::now(), |model| {
            let result = decode(model).and_then(|msg| run_round(model, msg));
            if let Err(e) = &result {
                model.flash = Some(e.clone());
            }
            result
        })
        .await;

    match outcome {
        Ok(()) => debug!(session = %id, "form accepted"),
        Err(e) if e.is_client_input() => warn!(session = %id, error = %e, "form rejected"),
        Err(e) => warn!(session = %id, error = %e, "form out of step with the round"),
    }

    HttpResponse::SeeOther()
        .cookie(session_cookie(&id))
        .insert_header((header::LOCATION, INDEX_FROM_ROUND))
        .finish()
}

pub async fn start_round(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> HttpResponse {
    let draft = decode_setup(&form.into_inner());
    info!(
        course = %draft.course_name,
        players = ?draft.player_count,
        holes = hole_sequence(&draft.nines).len(),
        "setup submitted"
    );
    dispatch_form(&req, store.get_ref(), |_| {
        Ok(Msg::StartRound {
            draft,
            started_at: Utc::now(),
        })
    })
    .await
}

pub async fn finish_or_save_hole(
    req: HttpRequest,
    form: web::Form<HashMap<String, String>>,
    store: Data<SessionStore>,
) -> HttpResponse {
    let form = form.into_inner();
    dispatch_form(&req, store.get_ref(), |model| {
        let player_count = model
            .round
            .as_ref()
            .map(|r| r.players.len())
            .ok_or_else(|| AppError::NotFound("no round in progress".into()))?;
        let submission = decode_hole(&form, player_count)?;
        debug!(index = submission.index, par = submission.entry.par, "hole submitted");
        Ok(match submission.action {
            HoleAction::Next => Msg::SaveHole {
                index: submission.index,
                entry: submission.entry,
            },
            HoleAction::Finish => Msg::FinishRound {
                index: submission.index,
                entry: submission.entry,
            },
        })
    })
    .await
}

pub async fn new_round(req: HttpRequest, store: Data<SessionStore>) -> HttpResponse {
    dispatch_form(&req, store.get_ref(), |_| Ok(Msg::NewRound)).await
}

fn no_round() -> HttpResponse {
    HttpResponse::NotFound().json(json!({"error": "no round in progress"}))
}

pub async fn summary_text(req: HttpRequest, store: Data<SessionStore>) -> HttpResponse {
    let text = store
        .peek(session_id(&req).as_deref(), |model| {
            model.round.as_ref().map(Round::summary_text)
        })
        .await
        .flatten();

    match text {
        Some(Ok(text)) => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body(text),
        Some(Err(e)) => {
            error!(error = %e, "summary text failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
        None => no_round(),
    }
}

#[derive(Debug, Serialize)]
pub struct RoundSummary {
    pub course_name: String,
    pub started_at: DateTime<Utc>,
    pub complete: bool,
    pub holes: Vec<i32>,
    pub pars: Vec<i32>,
    pub stats: Vec<PlayerStat>,
    pub ranking: Vec<RankedPlayer>,
    pub winner: Option<RankedPlayer>,
}

impl RoundSummary {
    /// Totals over the holes recorded so far.
    ///
    /// # Errors
    ///
    /// Returns an error if the round's cards are inconsistent.
    pub fn from_round(round: &Round) -> Result<Self, AppError> {
        let report = round.summary_report()?;
        Ok(Self {
            course_name: round.course_name.clone(),
            started_at: round.started_at,
            complete: round.is_complete(),
            holes: round.holes[..round.holes_recorded()].to_vec(),
            pars: round.pars.clone(),
            stats: round.player_stats()?,
            winner: report.winner().cloned(),
            ranking: report.ranked().to_vec(),
        })
    }
}

pub async fn summary_json(req: HttpRequest, store: Data<SessionStore>) -> HttpResponse {
    let summary = store
        .peek(session_id(&req).as_deref(), |model| {
            model.round.as_ref().map(RoundSummary::from_round)
        })
        .await
        .flatten();

    match summary {
        Some(Ok(summary)) => HttpResponse::Ok().json(summary),
        Some(Err(e)) => {
            error!(error = %e, "summary json failed");
            HttpResponse::InternalServerError().json(json!({"error": e.to_string()}))
        }
        None => no_round(),
    }
}
