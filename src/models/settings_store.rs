use crate::constants::PLAYER_SETTINGS_STORAGE_KEY;
use crate::runtime::msg::{Action, ActionSettings, Event, Msg};
use crate::runtime::{Effects, Env, Update};
use crate::types::settings::{PlayerSettings, SettingUpdate};
use serde::Serialize;

/// Owns the settings of one player session and mirrors every change to storage.
///
/// Storage failures never reach the caller: reads fall back to defaults and failed writes are
/// logged while the in-memory snapshot stays authoritative.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SettingsStore {
    settings: PlayerSettings,
}

impl SettingsStore {
    pub fn load<E: Env>() -> Self {
        let settings = match E::get_storage::<serde_json::Value>(PLAYER_SETTINGS_STORAGE_KEY) {
            Ok(Some(stored)) => PlayerSettings::reconcile(&stored),
            Ok(None) => PlayerSettings::default(),
            Err(error) => {
                tracing::warn!(%error, "failed to load player settings, using defaults");
                PlayerSettings::default()
            }
        };
        SettingsStore { settings }
    }
    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }
    pub fn update<E: Env>(&mut self, update: SettingUpdate) -> PlayerSettings {
        self.settings.apply(update);
        self.persist::<E>();
        self.settings.to_owned()
    }
    pub fn reset<E: Env>(&mut self) -> PlayerSettings {
        self.settings = PlayerSettings::default();
        if let Err(error) = E::set_storage::<PlayerSettings>(PLAYER_SETTINGS_STORAGE_KEY, None) {
            tracing::warn!(%error, "failed to remove player settings from storage");
        }
        self.settings.to_owned()
    }
    pub fn reset_caption_styles<E: Env>(&mut self) -> PlayerSettings {
        self.settings.reset_caption_styles();
        self.persist::<E>();
        self.settings.to_owned()
    }
    fn persist<E: Env>(&self) {
        if let Err(error) = E::set_storage(PLAYER_SETTINGS_STORAGE_KEY, Some(&self.settings)) {
            tracing::warn!(%error, "failed to push player settings to storage");
        }
    }
}

impl<E: Env + 'static> Update<E> for SettingsStore {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Settings(ActionSettings::Update(update))) => {
                let is_changed = self.settings.get(update.key()) != *update;
                let settings = SettingsStore::update::<E>(self, update.to_owned());
                let effects = Effects::msg(Msg::Event(Event::SettingsUpdated { settings }));
                if is_changed {
                    effects
                } else {
                    effects.unchanged()
                }
            }
            Msg::Action(Action::Settings(ActionSettings::Reset)) => {
                let is_changed = self.settings != PlayerSettings::default();
                self.reset::<E>();
                let effects = Effects::msg(Msg::Event(Event::SettingsReset));
                if is_changed {
                    effects
                } else {
                    effects.unchanged()
                }
            }
            Msg::Action(Action::Settings(ActionSettings::ResetCaptionStyles)) => {
                let prev_settings = self.settings.to_owned();
                let settings = self.reset_caption_styles::<E>();
                let is_changed = prev_settings != settings;
                let effects = Effects::msg(Msg::Event(Event::CaptionStylesReset { settings }));
                if is_changed {
                    effects
                } else {
                    effects.unchanged()
                }
            }
            _ => Effects::none().unchanged(),
        }
    }
}
