use crate::models::player::MediaError;
use crate::types::settings::PlayerSettings;
use serde::Serialize;

/// Event messages
///
/// Those messages are meant to be dispatched by the `player-core` crate and
/// handled by the users of the `player-core` crate.
#[derive(Clone, Serialize, Debug, PartialEq)]
#[serde(tag = "event", content = "args")]
pub enum Event {
    SettingsUpdated {
        settings: PlayerSettings,
    },
    SettingsReset,
    CaptionStylesReset {
        settings: PlayerSettings,
    },
    MediaSourceRequested {
        id: String,
    },
    #[serde(rename_all = "camelCase")]
    MediaSourceLoaded {
        id: String,
        title: String,
        /// Milliseconds between the load action and the fetch result
        load_time: i64,
    },
    Error {
        error: MediaError,
        source: Box<Event>,
    },
}
