use crate::models::style_projection::CaptionStyle;
use crate::types::settings::{PlayerSettings, VolumeBoost};

/// The player the settings are pushed into.
pub trait PlaybackEngine {
    fn volume(&self) -> f64;
    fn set_volume(&mut self, volume: f64);
    /// Sets the custom properties on the element that contains the captions overlay.
    fn set_caption_variables(&mut self, variables: &[(&'static str, &str)]);
    fn set_loop(&mut self, r#loop: bool);
    fn set_autoplay(&mut self, autoplay: bool);
}

/// Amplified volume, capped at full scale. An identity boost returns `current` untouched.
pub fn effective_volume(current: f64, boost: VolumeBoost) -> f64 {
    if boost.is_identity() {
        current
    } else {
        (current * boost.value()).min(1.0)
    }
}

/// Pushes the playback related part of `settings` into `engine`.
pub fn apply_settings<P: PlaybackEngine>(
    engine: &mut P,
    settings: &PlayerSettings,
    caption: &CaptionStyle,
) {
    let volume = effective_volume(engine.volume(), settings.volume_boost);
    engine.set_volume(volume);
    engine.set_caption_variables(&caption.variables());
    engine.set_loop(settings.r#loop);
    engine.set_autoplay(settings.autoplay);
    tracing::trace!(volume, "applied player settings to the playback engine");
}
