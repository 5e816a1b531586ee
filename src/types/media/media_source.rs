use crate::constants::DOCUMENT_TITLE_SUFFIX;
use crate::types::media::SubtitleTrack;
use serde::{Deserialize, Serialize};
use url::Url;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSource {
    pub title: String,
    pub poster_url: Url,
    pub video_url: Url,
    #[serde(default)]
    pub subtitle_tracks: Vec<SubtitleTrack>,
}

impl MediaSource {
    pub fn document_title(&self) -> String {
        format!("{} | {}", self.title, DOCUMENT_TITLE_SUFFIX)
    }
}
