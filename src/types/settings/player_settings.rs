use crate::types::settings::{FontSize, SettingKey, SettingUpdate, VolumeBoost};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSettings {
    pub high_contrast: bool,
    pub reduced_motion: bool,
    pub focus_indicators: bool,
    pub r#loop: bool,
    pub autoplay: bool,
    /// Seconds skipped by the seek buttons.
    pub skip_interval: u32,
    pub volume_boost: VolumeBoost,
    pub audio_equalizer: AudioEqualizer,
    pub audio_normalization: bool,
    pub mono_audio: bool,
    pub font_size: FontSize,
    pub font_family: FontFamily,
    pub font_weight: FontWeight,
    /// Hex (`#rrggbb`) or `rgba(r, g, b, a)` color.
    pub text_color: String,
    pub background_color: String,
    pub window_color: String,
    pub outline: bool,
    pub text_shadow: TextShadow,
    pub position: CaptionPosition,
    pub theme: Theme,
    pub control_bar: ControlBar,
    pub thumbnail_preview: bool,
    pub gesture_controls: bool,
    pub keyboard_shortcuts: KeyboardShortcuts,
}

impl Default for PlayerSettings {
    fn default() -> Self {
        PlayerSettings {
            high_contrast: false,
            reduced_motion: false,
            focus_indicators: true,
            r#loop: false,
            autoplay: false,
            skip_interval: 10,
            volume_boost: VolumeBoost::default(),
            audio_equalizer: AudioEqualizer::None,
            audio_normalization: false,
            mono_audio: false,
            font_size: FontSize::default(),
            font_family: FontFamily::SansSerif,
            font_weight: FontWeight::Normal,
            text_color: "#ffffff".to_owned(),
            background_color: "#000000".to_owned(),
            window_color: "#000000".to_owned(),
            outline: true,
            text_shadow: TextShadow::Soft,
            position: CaptionPosition::Bottom,
            theme: Theme::Dark,
            control_bar: ControlBar::AutoHide,
            thumbnail_preview: true,
            gesture_controls: true,
            keyboard_shortcuts: KeyboardShortcuts::Enabled,
        }
    }
}

impl PlayerSettings {
    /// Builds a fully populated snapshot from a stored JSON value.
    ///
    /// Every known key is read on its own: a legal value replaces the default, an illegal one
    /// keeps it. Keys that are not part of [`PlayerSettings`] are ignored.
    pub fn reconcile(stored: &serde_json::Value) -> Self {
        let mut settings = PlayerSettings::default();
        let stored = match stored.as_object() {
            Some(stored) => stored,
            None => {
                tracing::debug!("stored player settings are not an object, using defaults");
                return settings;
            }
        };
        for key in SettingKey::iter() {
            let value = match stored.get(key.as_ref()) {
                Some(value) => value,
                None => continue,
            };
            match SettingUpdate::from_key_value(key, value.to_owned()) {
                Ok(update) => settings.apply(update),
                Err(error) => {
                    tracing::debug!(%key, %error, "ignoring stored player setting");
                }
            }
        }
        settings
    }
    /// Replaces exactly the field addressed by `update`.
    pub fn apply(&mut self, update: SettingUpdate) {
        match update {
            SettingUpdate::HighContrast(value) => self.high_contrast = value,
            SettingUpdate::ReducedMotion(value) => self.reduced_motion = value,
            SettingUpdate::FocusIndicators(value) => self.focus_indicators = value,
            SettingUpdate::Loop(value) => self.r#loop = value,
            SettingUpdate::Autoplay(value) => self.autoplay = value,
            SettingUpdate::SkipInterval(value) => self.skip_interval = value,
            SettingUpdate::VolumeBoost(value) => self.volume_boost = value,
            SettingUpdate::AudioEqualizer(value) => self.audio_equalizer = value,
            SettingUpdate::AudioNormalization(value) => self.audio_normalization = value,
            SettingUpdate::MonoAudio(value) => self.mono_audio = value,
            SettingUpdate::FontSize(value) => self.font_size = value,
            SettingUpdate::FontFamily(value) => self.font_family = value,
            SettingUpdate::FontWeight(value) => self.font_weight = value,
            SettingUpdate::TextColor(value) => self.text_color = value,
            SettingUpdate::BackgroundColor(value) => self.background_color = value,
            SettingUpdate::WindowColor(value) => self.window_color = value,
            SettingUpdate::Outline(value) => self.outline = value,
            SettingUpdate::TextShadow(value) => self.text_shadow = value,
            SettingUpdate::Position(value) => self.position = value,
            SettingUpdate::Theme(value) => self.theme = value,
            SettingUpdate::ControlBar(value) => self.control_bar = value,
            SettingUpdate::ThumbnailPreview(value) => self.thumbnail_preview = value,
            SettingUpdate::GestureControls(value) => self.gesture_controls = value,
            SettingUpdate::KeyboardShortcuts(value) => self.keyboard_shortcuts = value,
        }
    }
    /// Current value of a single field.
    pub fn get(&self, key: SettingKey) -> SettingUpdate {
        match key {
            SettingKey::HighContrast => SettingUpdate::HighContrast(self.high_contrast),
            SettingKey::ReducedMotion => SettingUpdate::ReducedMotion(self.reduced_motion),
            SettingKey::FocusIndicators => SettingUpdate::FocusIndicators(self.focus_indicators),
            SettingKey::Loop => SettingUpdate::Loop(self.r#loop),
            SettingKey::Autoplay => SettingUpdate::Autoplay(self.autoplay),
            SettingKey::SkipInterval => SettingUpdate::SkipInterval(self.skip_interval),
            SettingKey::VolumeBoost => SettingUpdate::VolumeBoost(self.volume_boost),
            SettingKey::AudioEqualizer => SettingUpdate::AudioEqualizer(self.audio_equalizer),
            SettingKey::AudioNormalization => {
                SettingUpdate::AudioNormalization(self.audio_normalization)
            }
            SettingKey::MonoAudio => SettingUpdate::MonoAudio(self.mono_audio),
            SettingKey::FontSize => SettingUpdate::FontSize(self.font_size),
            SettingKey::FontFamily => SettingUpdate::FontFamily(self.font_family),
            SettingKey::FontWeight => SettingUpdate::FontWeight(self.font_weight),
            SettingKey::TextColor => SettingUpdate::TextColor(self.text_color.to_owned()),
            SettingKey::BackgroundColor => {
                SettingUpdate::BackgroundColor(self.background_color.to_owned())
            }
            SettingKey::WindowColor => SettingUpdate::WindowColor(self.window_color.to_owned()),
            SettingKey::Outline => SettingUpdate::Outline(self.outline),
            SettingKey::TextShadow => SettingUpdate::TextShadow(self.text_shadow),
            SettingKey::Position => SettingUpdate::Position(self.position),
            SettingKey::Theme => SettingUpdate::Theme(self.theme),
            SettingKey::ControlBar => SettingUpdate::ControlBar(self.control_bar),
            SettingKey::ThumbnailPreview => SettingUpdate::ThumbnailPreview(self.thumbnail_preview),
            SettingKey::GestureControls => SettingUpdate::GestureControls(self.gesture_controls),
            SettingKey::KeyboardShortcuts => {
                SettingUpdate::KeyboardShortcuts(self.keyboard_shortcuts)
            }
        }
    }
    /// Restores the subtitle appearance fields, leaving everything else untouched.
    pub fn reset_caption_styles(&mut self) {
        let defaults = PlayerSettings::default();
        SettingKey::CAPTION_STYLES
            .iter()
            .for_each(|key| self.apply(defaults.get(*key)));
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum AudioEqualizer {
    None,
    Bass,
    Treble,
    Vocal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontFamily {
    SansSerif,
    Serif,
    Monospace,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum FontWeight {
    Normal,
    Bold,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum TextShadow {
    None,
    Soft,
    Hard,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum CaptionPosition {
    Top,
    Center,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Theme {
    Dark,
    Light,
    Auto,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum ControlBar {
    Always,
    AutoHide,
    Minimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Display, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum KeyboardShortcuts {
    Enabled,
    Disabled,
}
