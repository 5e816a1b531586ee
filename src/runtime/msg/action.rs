use crate::models::player::Selected as PlayerSelected;
use crate::types::settings::SettingUpdate;
use serde::Deserialize;

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum ActionSettings {
    Update(SettingUpdate),
    /// Restores every setting and removes the stored entry.
    Reset,
    ResetCaptionStyles,
}

#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "model", content = "args")]
pub enum ActionLoad {
    Player(PlayerSelected),
}

/// Action messages
///
/// Those messages are meant to be dispatched only by the users of the
/// `player-core` crate and handled by the `player-core` crate.
#[derive(Clone, Deserialize, Debug)]
#[serde(tag = "action", content = "args")]
pub enum Action {
    Settings(ActionSettings),
    Load(ActionLoad),
    Unload,
}
