use crate::types::media::{MediaSource, SubtitleTrack};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use url::Url;

pub const PLAYER_SETTINGS_STORAGE_KEY: &str = "player-settings";
pub const DOCUMENT_TITLE_SUFFIX: &str = "Media Player";

pub const CUE_FONT_SIZE_VAR: &str = "--cue-font-size";
pub const CUE_FONT_FAMILY_VAR: &str = "--cue-font-family";
pub const CUE_FONT_WEIGHT_VAR: &str = "--cue-font-weight";
pub const CUE_COLOR_VAR: &str = "--cue-color";
pub const CUE_BG_COLOR_VAR: &str = "--cue-bg-color";
pub const CUE_WINDOW_COLOR_VAR: &str = "--cue-window-color";
pub const CUE_TEXT_SHADOW_VAR: &str = "--cue-text-shadow";
pub const CUE_TEXT_STROKE_VAR: &str = "--cue-text-stroke";
pub const CUE_TOP_VAR: &str = "--cue-top";
pub const CUE_BOTTOM_VAR: &str = "--cue-bottom";
pub const CUE_TRANSFORM_VAR: &str = "--cue-transform";

pub const SOFT_TEXT_SHADOW: &str = "1px 1px 2px rgba(0,0,0,0.8)";
pub const HARD_TEXT_SHADOW: &str = "2px 2px 4px rgba(0,0,0,0.9)";
pub const OUTLINE_TEXT_STROKE: &str = "1px rgba(0,0,0,0.8)";
pub const CSS_NONE: &str = "none";
pub const CSS_AUTO: &str = "auto";
pub const CAPTION_EDGE_OFFSET: &str = "10%";
pub const CAPTION_CENTER_OFFSET: &str = "50%";
pub const CAPTION_CENTER_TRANSFORM: &str = "translateY(-50%)";

pub const PLAYER_CONTAINER_BASE_CLASSES: &[&str] = &[
    "relative",
    "w-full",
    "max-w-6xl",
    "mx-auto",
    "bg-slate-900",
    "text-white",
    "font-sans",
    "rounded-lg",
    "ring-media-focus",
    "data-[focus]:ring-4",
    "shadow-2xl",
    "aspect-video",
    "max-h-[85vh]",
    "min-h-[280px]",
    "h-auto",
    "overflow-visible",
    "max-w-[95vw]",
    "sm:max-w-4xl",
    "md:max-w-5xl",
    "lg:max-w-6xl",
    "xl:max-w-7xl",
];
pub const HIGH_CONTRAST_CLASSES: &[&str] = &["contrast-125", "brightness-110"];
pub const REDUCED_MOTION_CLASSES: &[&str] = &["motion-reduce:transition-none"];
pub const TRANSITION_CLASSES: &[&str] = &["transition-all", "duration-300", "ease-in-out"];
/// Dark theme tokens and their light theme replacements.
pub const LIGHT_THEME_SWAPS: &[(&str, &str)] =
    &[("bg-slate-900", "bg-slate-100"), ("text-white", "text-black")];

pub const CONTROLS_ROOT_BASE_CLASSES: &[&str] = &[
    "media-controls:opacity-100",
    "absolute",
    "inset-0",
    "z-20",
    "flex",
    "h-full",
    "w-full",
    "flex-col",
    "bg-gradient-to-t",
    "from-black/60",
    "via-transparent",
    "to-transparent",
    "opacity-0",
    "transition-all",
    "duration-300",
];
pub const CONTROLS_ALWAYS_VISIBLE_CLASS: &str = "opacity-100";
pub const CONTROLS_MINIMAL_GRADIENT_CLASS: &str = "from-black/40";
pub const CONTROLS_GROUP_SPACING: &str = "space-x-3";
pub const CONTROLS_MINIMAL_GROUP_SPACING: &str = "space-x-2";
pub const BUTTON_FOCUS_CLASS: &str = "group-focus:text-brand";
pub const SLIDER_FOCUS_CLASSES: &[&str] = &["focus-within:ring-4", "focus-within:ring-brand/50"];
pub const GESTURE_SEEK_SECONDS: i32 = 10;

lazy_static! {
    pub static ref RGBA_COLOR_REGEX: Regex =
        Regex::new(r"rgba?\(([0-9]+),\s*([0-9]+),\s*([0-9]+)(?:,\s*([0-9.]+))?\)")
            .expect("RGBA_COLOR_REGEX parse failed");
    pub static ref SAMPLE_MEDIA: HashMap<&'static str, MediaSource> = vec![
        (
            "1",
            MediaSource {
                title: "Sample Video - Big Buck Bunny".to_owned(),
                poster_url: Url::parse(
                    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/BigBuckBunny.jpg"
                )
                .expect("SAMPLE_MEDIA poster url parse failed"),
                video_url: Url::parse(
                    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/BigBuckBunny.mp4"
                )
                .expect("SAMPLE_MEDIA video url parse failed"),
                subtitle_tracks: Vec::<SubtitleTrack>::new(),
            },
        ),
        (
            "2",
            MediaSource {
                title: "Sample Video - Elephant Dream".to_owned(),
                poster_url: Url::parse(
                    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/images/ElephantsDream.jpg"
                )
                .expect("SAMPLE_MEDIA poster url parse failed"),
                video_url: Url::parse(
                    "https://commondatastorage.googleapis.com/gtv-videos-bucket/sample/ElephantsDream.mp4"
                )
                .expect("SAMPLE_MEDIA video url parse failed"),
                subtitle_tracks: Vec::<SubtitleTrack>::new(),
            },
        ),
    ]
    .into_iter()
    .collect();
}
