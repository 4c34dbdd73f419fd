pub mod error;
pub mod round;
pub mod runtime;

pub use error::AppError;
pub use round::{Effect, Msg, Phase, RoundModel, update};
pub use runtime::run_round;
