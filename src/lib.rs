pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu;
pub mod score;
pub mod session;
pub mod view;

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::ScoreError;
pub use score::{build_summary, calculate};
