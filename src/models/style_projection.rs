use crate::constants::{
    BUTTON_FOCUS_CLASS, CAPTION_CENTER_OFFSET, CAPTION_CENTER_TRANSFORM, CAPTION_EDGE_OFFSET,
    CONTROLS_ALWAYS_VISIBLE_CLASS, CONTROLS_GROUP_SPACING, CONTROLS_MINIMAL_GRADIENT_CLASS,
    CONTROLS_MINIMAL_GROUP_SPACING, CONTROLS_ROOT_BASE_CLASSES, CSS_AUTO, CSS_NONE,
    CUE_BG_COLOR_VAR, CUE_BOTTOM_VAR, CUE_COLOR_VAR, CUE_FONT_FAMILY_VAR, CUE_FONT_SIZE_VAR,
    CUE_FONT_WEIGHT_VAR, CUE_TEXT_SHADOW_VAR, CUE_TEXT_STROKE_VAR, CUE_TOP_VAR, CUE_TRANSFORM_VAR,
    CUE_WINDOW_COLOR_VAR, GESTURE_SEEK_SECONDS,
    HARD_TEXT_SHADOW, HIGH_CONTRAST_CLASSES, LIGHT_THEME_SWAPS, OUTLINE_TEXT_STROKE,
    PLAYER_CONTAINER_BASE_CLASSES, REDUCED_MOTION_CLASSES, SLIDER_FOCUS_CLASSES,
    SOFT_TEXT_SHADOW, TRANSITION_CLASSES,
};
use crate::types::color::rgba_to_hex;
use crate::types::settings::{
    CaptionPosition, ControlBar, KeyboardShortcuts, PlayerSettings, TextShadow, Theme,
};
use boolinator::Boolinator;
use derive_more::Display;
use itertools::Itertools;
use serde::{Serialize, Serializer};

/// Everything the presentation layer derives from a settings snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleProjection {
    pub caption: CaptionStyle,
    pub container_class: String,
    pub controls: ControlsLayout,
}

impl StyleProjection {
    pub fn new(settings: &PlayerSettings) -> Self {
        StyleProjection {
            caption: CaptionStyle::new(settings),
            container_class: container_class(settings),
            controls: ControlsLayout::new(settings),
        }
    }
}

impl Default for StyleProjection {
    fn default() -> Self {
        StyleProjection::new(&PlayerSettings::default())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionStyle {
    pub font_size: String,
    pub font_family: String,
    pub font_weight: String,
    pub color: String,
    pub bg_color: String,
    pub window_color: String,
    pub text_shadow: String,
    pub text_stroke: String,
    pub top: String,
    pub bottom: String,
    pub transform: String,
}

impl CaptionStyle {
    pub fn new(settings: &PlayerSettings) -> Self {
        let text_shadow = match settings.text_shadow {
            TextShadow::None => CSS_NONE,
            TextShadow::Soft => SOFT_TEXT_SHADOW,
            TextShadow::Hard => HARD_TEXT_SHADOW,
        };
        let text_stroke = if settings.outline {
            OUTLINE_TEXT_STROKE
        } else {
            CSS_NONE
        };
        let (top, bottom, transform) = match settings.position {
            CaptionPosition::Top => (CAPTION_EDGE_OFFSET, CSS_AUTO, CSS_NONE),
            CaptionPosition::Center => (CAPTION_CENTER_OFFSET, CSS_AUTO, CAPTION_CENTER_TRANSFORM),
            CaptionPosition::Bottom => (CSS_AUTO, CAPTION_EDGE_OFFSET, CSS_NONE),
        };
        CaptionStyle {
            font_size: settings.font_size.to_string(),
            font_family: settings.font_family.to_string(),
            font_weight: settings.font_weight.to_string(),
            color: rgba_to_hex(&settings.text_color),
            bg_color: rgba_to_hex(&settings.background_color),
            window_color: rgba_to_hex(&settings.window_color),
            text_shadow: text_shadow.to_owned(),
            text_stroke: text_stroke.to_owned(),
            top: top.to_owned(),
            bottom: bottom.to_owned(),
            transform: transform.to_owned(),
        }
    }
    /// The `--cue-*` custom properties set on the player container, caption position included.
    pub fn variables(&self) -> Vec<(&'static str, &str)> {
        vec![
            (CUE_FONT_SIZE_VAR, self.font_size.as_str()),
            (CUE_FONT_FAMILY_VAR, self.font_family.as_str()),
            (CUE_FONT_WEIGHT_VAR, self.font_weight.as_str()),
            (CUE_COLOR_VAR, self.color.as_str()),
            (CUE_BG_COLOR_VAR, self.bg_color.as_str()),
            (CUE_WINDOW_COLOR_VAR, self.window_color.as_str()),
            (CUE_TEXT_SHADOW_VAR, self.text_shadow.as_str()),
            (CUE_TEXT_STROKE_VAR, self.text_stroke.as_str()),
            (CUE_TOP_VAR, self.top.as_str()),
            (CUE_BOTTOM_VAR, self.bottom.as_str()),
            (CUE_TRANSFORM_VAR, self.transform.as_str()),
        ]
    }
}

/// Class list of the player container. Only `high_contrast`, `reduced_motion` and `theme`
/// take part.
pub fn container_class(settings: &PlayerSettings) -> String {
    let motion_classes = if settings.reduced_motion {
        REDUCED_MOTION_CLASSES
    } else {
        TRANSITION_CLASSES
    };
    PLAYER_CONTAINER_BASE_CLASSES
        .iter()
        .map(|token| match settings.theme {
            Theme::Light => LIGHT_THEME_SWAPS
                .iter()
                .find(|(dark, _)| dark == token)
                .map(|(_, light)| light)
                .unwrap_or(token),
            Theme::Dark | Theme::Auto => token,
        })
        .chain(
            settings
                .high_contrast
                .as_some(HIGH_CONTRAST_CLASSES)
                .unwrap_or_default()
                .iter(),
        )
        .chain(motion_classes.iter())
        .join(" ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GestureEvent {
    PointerUp,
    DblPointerUp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum GestureAction {
    #[display(fmt = "seek:{}", _0)]
    Seek(i32),
    #[display(fmt = "toggle:paused")]
    TogglePaused,
    #[display(fmt = "toggle:controls")]
    ToggleControls,
}

impl Serialize for GestureAction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GestureBinding {
    pub event: GestureEvent,
    pub action: GestureAction,
    pub class_name: String,
}

impl GestureBinding {
    fn new(event: GestureEvent, action: GestureAction, width_class: &str) -> Self {
        GestureBinding {
            event,
            action,
            class_name: format!("absolute inset-0 z-0 block h-full {width_class}"),
        }
    }
}

/// Which controls the chrome shows, and how.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlsLayout {
    /// Empty when gesture controls are disabled.
    pub gestures: Vec<GestureBinding>,
    pub root_class: String,
    pub group_spacing_class: String,
    pub show_title: bool,
    pub show_pip: bool,
    pub show_fullscreen: bool,
    /// Empty when focus indicators are disabled.
    pub button_focus_class: String,
    pub slider_focus_class: String,
    pub thumbnail_preview: bool,
    pub seek_backward_seconds: i64,
    pub seek_forward_seconds: i64,
    pub keyboard_shortcuts: bool,
}

impl ControlsLayout {
    pub fn new(settings: &PlayerSettings) -> Self {
        let gestures = settings
            .gesture_controls
            .as_some_from(|| {
                vec![
                    GestureBinding::new(
                        GestureEvent::DblPointerUp,
                        GestureAction::Seek(-GESTURE_SEEK_SECONDS),
                        "w-1/5",
                    ),
                    GestureBinding::new(
                        GestureEvent::DblPointerUp,
                        GestureAction::Seek(GESTURE_SEEK_SECONDS),
                        "w-4/5",
                    ),
                    GestureBinding::new(
                        GestureEvent::PointerUp,
                        GestureAction::TogglePaused,
                        "w-full",
                    ),
                    GestureBinding::new(
                        GestureEvent::PointerUp,
                        GestureAction::ToggleControls,
                        "w-full",
                    ),
                ]
            })
            .unwrap_or_default();
        let is_minimal = settings.control_bar == ControlBar::Minimal;
        let root_class = CONTROLS_ROOT_BASE_CLASSES
            .iter()
            .copied()
            .chain(
                (settings.control_bar == ControlBar::Always).as_some(CONTROLS_ALWAYS_VISIBLE_CLASS),
            )
            .chain(is_minimal.as_some(CONTROLS_MINIMAL_GRADIENT_CLASS))
            .join(" ");
        let group_spacing_class = if is_minimal {
            CONTROLS_MINIMAL_GROUP_SPACING
        } else {
            CONTROLS_GROUP_SPACING
        };
        let skip_interval = i64::from(settings.skip_interval);
        ControlsLayout {
            gestures,
            root_class,
            group_spacing_class: group_spacing_class.to_owned(),
            show_title: !is_minimal,
            show_pip: !is_minimal,
            show_fullscreen: !is_minimal,
            button_focus_class: settings
                .focus_indicators
                .as_some(BUTTON_FOCUS_CLASS)
                .unwrap_or_default()
                .to_owned(),
            slider_focus_class: settings
                .focus_indicators
                .as_some(SLIDER_FOCUS_CLASSES)
                .unwrap_or_default()
                .join(" "),
            thumbnail_preview: settings.thumbnail_preview,
            seek_backward_seconds: -skip_interval,
            seek_forward_seconds: skip_interval,
            keyboard_shortcuts: settings.keyboard_shortcuts == KeyboardShortcuts::Enabled,
        }
    }
}
