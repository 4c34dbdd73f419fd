pub mod form;
pub mod http_handlers;

pub use http_handlers::{
    configure, finish_or_save_hole, index, new_round, start_round, summary_json, summary_text,
};
