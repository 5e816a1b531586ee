pub mod common;

pub mod playback;
pub mod player;
pub mod player_session;
pub mod settings_store;
pub mod style_projection;
