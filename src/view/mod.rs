pub mod hole;
pub mod index;
pub mod setup;
pub mod summary;
pub mod template;
pub mod utils;

pub use template::render_round_page;
