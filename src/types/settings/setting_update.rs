use crate::types::settings::{
    AudioEqualizer, CaptionPosition, ControlBar, FontFamily, FontSize, FontWeight,
    KeyboardShortcuts, TextShadow, Theme, VolumeBoost,
};
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumIter};

/// Name of a single [`PlayerSettings`] field, as it appears in storage.
///
/// [`PlayerSettings`]: crate::types::settings::PlayerSettings
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, AsRefStr, Display, EnumIter,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SettingKey {
    HighContrast,
    ReducedMotion,
    FocusIndicators,
    Loop,
    Autoplay,
    SkipInterval,
    VolumeBoost,
    AudioEqualizer,
    AudioNormalization,
    MonoAudio,
    FontSize,
    FontFamily,
    FontWeight,
    TextColor,
    BackgroundColor,
    WindowColor,
    Outline,
    TextShadow,
    Position,
    Theme,
    ControlBar,
    ThumbnailPreview,
    GestureControls,
    KeyboardShortcuts,
}

impl SettingKey {
    /// The subtitle appearance fields restored by `reset_caption_styles`.
    pub const CAPTION_STYLES: [SettingKey; 9] = [
        SettingKey::FontSize,
        SettingKey::FontFamily,
        SettingKey::FontWeight,
        SettingKey::TextColor,
        SettingKey::BackgroundColor,
        SettingKey::WindowColor,
        SettingKey::Outline,
        SettingKey::TextShadow,
        SettingKey::Position,
    ];
}

/// A new value for exactly one field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "camelCase")]
pub enum SettingUpdate {
    HighContrast(bool),
    ReducedMotion(bool),
    FocusIndicators(bool),
    Loop(bool),
    Autoplay(bool),
    SkipInterval(u32),
    VolumeBoost(VolumeBoost),
    AudioEqualizer(AudioEqualizer),
    AudioNormalization(bool),
    MonoAudio(bool),
    FontSize(FontSize),
    FontFamily(FontFamily),
    FontWeight(FontWeight),
    TextColor(String),
    BackgroundColor(String),
    WindowColor(String),
    Outline(bool),
    TextShadow(TextShadow),
    Position(CaptionPosition),
    Theme(Theme),
    ControlBar(ControlBar),
    ThumbnailPreview(bool),
    GestureControls(bool),
    KeyboardShortcuts(KeyboardShortcuts),
}

impl SettingUpdate {
    pub fn from_key_value(
        key: SettingKey,
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::json!({
            "key": key,
            "value": value,
        }))
    }
    pub fn key(&self) -> SettingKey {
        match self {
            SettingUpdate::HighContrast(_) => SettingKey::HighContrast,
            SettingUpdate::ReducedMotion(_) => SettingKey::ReducedMotion,
            SettingUpdate::FocusIndicators(_) => SettingKey::FocusIndicators,
            SettingUpdate::Loop(_) => SettingKey::Loop,
            SettingUpdate::Autoplay(_) => SettingKey::Autoplay,
            SettingUpdate::SkipInterval(_) => SettingKey::SkipInterval,
            SettingUpdate::VolumeBoost(_) => SettingKey::VolumeBoost,
            SettingUpdate::AudioEqualizer(_) => SettingKey::AudioEqualizer,
            SettingUpdate::AudioNormalization(_) => SettingKey::AudioNormalization,
            SettingUpdate::MonoAudio(_) => SettingKey::MonoAudio,
            SettingUpdate::FontSize(_) => SettingKey::FontSize,
            SettingUpdate::FontFamily(_) => SettingKey::FontFamily,
            SettingUpdate::FontWeight(_) => SettingKey::FontWeight,
            SettingUpdate::TextColor(_) => SettingKey::TextColor,
            SettingUpdate::BackgroundColor(_) => SettingKey::BackgroundColor,
            SettingUpdate::WindowColor(_) => SettingKey::WindowColor,
            SettingUpdate::Outline(_) => SettingKey::Outline,
            SettingUpdate::TextShadow(_) => SettingKey::TextShadow,
            SettingUpdate::Position(_) => SettingKey::Position,
            SettingUpdate::Theme(_) => SettingKey::Theme,
            SettingUpdate::ControlBar(_) => SettingKey::ControlBar,
            SettingUpdate::ThumbnailPreview(_) => SettingKey::ThumbnailPreview,
            SettingUpdate::GestureControls(_) => SettingKey::GestureControls,
            SettingUpdate::KeyboardShortcuts(_) => SettingKey::KeyboardShortcuts,
        }
    }
}
