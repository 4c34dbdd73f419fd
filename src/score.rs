//! Scoring core: per-player totals and the plain-text summary report.
//!
//! Everything in here is a pure function over caller-supplied data. Nothing is
//! cached; callers recompute from the current round whenever they need a view.

pub mod stats;
pub mod summary;

pub use stats::{PlayerStat, StatLine, calculate, player_stats};
pub use summary::{RankedPlayer, SummaryReport, build_summary};
