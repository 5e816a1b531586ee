mod font_size;
pub use font_size::*;

mod player_settings;
pub use player_settings::*;

mod setting_update;
pub use setting_update::*;

mod volume_boost;
pub use volume_boost::*;
