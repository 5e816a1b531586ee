mod media_source;
pub use media_source::*;

mod subtitle_track;
pub use subtitle_track::*;
