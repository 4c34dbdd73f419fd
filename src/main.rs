use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, web};
use chrono::Utc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use golf_scorecard::args;
use golf_scorecard::controller::round;
use golf_scorecard::session::SessionStore;

const PRUNE_INTERVAL: Duration = Duration::from_secs(60);

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("golf_scorecard=info,actix_web=warn"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = args::args_checks();
    if !args.static_dir.is_dir() {
        warn!(dir = %args.static_dir.display(), "static directory not found, pages will be unstyled");
    }

    let store = SessionStore::new(args.session_idle, &args.default_course);
    spawn_session_pruner(store.clone());

    let static_dir = args.static_dir.clone();
    info!(host = %args.host, port = args.port, "listening");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(store.clone()))
            .configure(round::configure)
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", &static_dir))
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

fn spawn_session_pruner(store: SessionStore) {
    actix_web::rt::spawn(async move {
        let mut ticker = tokio::time::interval(PRUNE_INTERVAL);
        loop {
            ticker.tick().await;
            let removed = store.prune_idle(Utc::now()).await;
            if removed > 0 {
                info!(removed, "pruned idle sessions");
            }
        }
    });
}
