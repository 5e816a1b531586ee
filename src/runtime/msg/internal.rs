use crate::models::player::MediaError;
use crate::types::media::MediaSource;

//
// Those messages are meant to be dispatched and handled only inside player-core crate
//
#[derive(Debug)]
pub enum Internal {
    /// Result for fetching the media source of the given id.
    MediaSourceResult(String, Result<MediaSource, MediaError>),
}
