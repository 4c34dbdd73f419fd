pub mod round;
pub mod score;

pub use round::{
    DEFAULT_COURSE_NAME, DEFAULT_PLAYER_COUNT, HoleEntry, MAX_PLAYERS, Nine, Round, RoundSetup,
    SetupDraft, hole_sequence,
};
pub use score::ScoreDisplay;
