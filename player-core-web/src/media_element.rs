use player_core::models::playback::PlaybackEngine;
use web_sys::{HtmlElement, HtmlMediaElement};

/// A `<video>`/`<audio>` element together with the player container that wraps it and the
/// captions overlay. Caption variables go on the container so the overlay inherits them.
pub struct MediaElement {
    pub media: HtmlMediaElement,
    pub container: HtmlElement,
}

impl PlaybackEngine for MediaElement {
    fn volume(&self) -> f64 {
        self.media.volume()
    }
    fn set_volume(&mut self, volume: f64) {
        self.media.set_volume(volume);
    }
    fn set_caption_variables(&mut self, variables: &[(&'static str, &str)]) {
        let style = self.container.style();
        for (name, value) in variables {
            if let Err(error) = style.set_property(name, value) {
                tracing::warn!(name, ?error, "failed to set caption variable");
            }
        }
    }
    fn set_loop(&mut self, r#loop: bool) {
        self.media.set_loop(r#loop);
    }
    fn set_autoplay(&mut self, autoplay: bool) {
        self.media.set_autoplay(autoplay);
    }
}
