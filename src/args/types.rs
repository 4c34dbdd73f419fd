use chrono::TimeDelta;
use clap::Parser;
use std::path::PathBuf;

use crate::model::DEFAULT_COURSE_NAME;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Hole-by-hole golf scorecard", long_about = None)]
pub struct Args {
    /// Address to bind the web server to.
    #[arg(long, env = "GOLF_HOST", value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(
        short = 'p',
        long,
        env = "GOLF_PORT",
        value_name = "PORT",
        default_value_t = 8081
    )]
    pub port: u16,
    /// Directory served under /static (stylesheet).
    #[arg(
        long,
        env = "GOLF_STATIC_DIR",
        value_name = "DIR",
        default_value = "./static"
    )]
    pub static_dir: PathBuf,
    /// Rounds untouched for this many minutes are forgotten.
    #[arg(
        long,
        env = "GOLF_SESSION_IDLE_MINUTES",
        value_name = "MINUTES",
        default_value_t = 120,
        value_parser = crate::args::validation::check_idle_minutes
    )]
    pub session_idle_minutes: i64,
    /// Course name pre-filled on the setup form.
    #[arg(
        long,
        env = "GOLF_DEFAULT_COURSE",
        value_name = "NAME",
        default_value = DEFAULT_COURSE_NAME,
        value_parser = crate::args::validation::check_course_name
    )]
    pub default_course: String,
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub session_idle: TimeDelta,
    pub default_course: String,
}

impl From<Args> for CleanArgs {
    fn from(args: Args) -> Self {
        Self {
            host: args.host,
            port: args.port,
            static_dir: args.static_dir,
            session_idle: TimeDelta::minutes(args.session_idle_minutes),
            default_course: args.default_course,
        }
    }
}
