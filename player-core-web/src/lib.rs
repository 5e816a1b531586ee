pub mod env;
pub mod media_element;

mod player_core_web;
pub use player_core_web::*;
