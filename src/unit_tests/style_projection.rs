use crate::models::style_projection::{
    container_class, CaptionStyle, ControlsLayout, GestureAction, GestureEvent, StyleProjection,
};
use crate::types::settings::{
    CaptionPosition, ControlBar, FontFamily, FontSize, FontWeight, KeyboardShortcuts,
    PlayerSettings, TextShadow, Theme,
};

#[test]
fn caption_style_defaults() {
    let caption = CaptionStyle::new(&PlayerSettings::default());
    assert_eq!(
        caption.variables(),
        vec![
            ("--cue-font-size", "100%"),
            ("--cue-font-family", "sans-serif"),
            ("--cue-font-weight", "normal"),
            ("--cue-color", "#ffffff"),
            ("--cue-bg-color", "#000000"),
            ("--cue-window-color", "#000000"),
            ("--cue-text-shadow", "1px 1px 2px rgba(0,0,0,0.8)"),
            ("--cue-text-stroke", "1px rgba(0,0,0,0.8)"),
            ("--cue-top", "auto"),
            ("--cue-bottom", "10%"),
            ("--cue-transform", "none"),
        ]
    );
    assert_eq!(
        (
            caption.top.as_str(),
            caption.bottom.as_str(),
            caption.transform.as_str()
        ),
        ("auto", "10%", "none"),
        "Captions sit at the bottom by default"
    );
}

#[test]
fn caption_style_hard_shadow_center() {
    let caption = CaptionStyle::new(&PlayerSettings {
        text_shadow: TextShadow::Hard,
        outline: false,
        position: CaptionPosition::Center,
        font_size: FontSize(150),
        font_family: FontFamily::Monospace,
        font_weight: FontWeight::Bold,
        background_color: "rgba(0, 0, 0, 0.5)".to_owned(),
        ..PlayerSettings::default()
    });
    assert_eq!(caption.text_shadow, "2px 2px 4px rgba(0,0,0,0.9)");
    assert_eq!(caption.text_stroke, "none", "No stroke without outline");
    assert_eq!(caption.top, "50%");
    assert_eq!(caption.bottom, "auto");
    assert_eq!(caption.transform, "translateY(-50%)");
    assert_eq!(caption.font_size, "150%");
    assert_eq!(caption.font_family, "monospace");
    assert_eq!(caption.font_weight, "bold");
    assert_eq!(caption.bg_color, "#000000", "Alpha is dropped");
}

#[test]
fn caption_style_no_shadow_top() {
    let caption = CaptionStyle::new(&PlayerSettings {
        text_shadow: TextShadow::None,
        position: CaptionPosition::Top,
        text_color: "not-a-color".to_owned(),
        ..PlayerSettings::default()
    });
    assert_eq!(caption.text_shadow, "none");
    assert_eq!(caption.top, "10%");
    assert_eq!(caption.bottom, "auto");
    assert_eq!(caption.transform, "none");
    assert_eq!(caption.color, "not-a-color", "Malformed colors pass through");
}

#[test]
fn container_class_defaults() {
    assert_eq!(
        container_class(&PlayerSettings::default()),
        "relative w-full max-w-6xl mx-auto bg-slate-900 text-white font-sans rounded-lg \
         ring-media-focus data-[focus]:ring-4 shadow-2xl aspect-video max-h-[85vh] \
         min-h-[280px] h-auto overflow-visible max-w-[95vw] sm:max-w-4xl md:max-w-5xl \
         lg:max-w-6xl xl:max-w-7xl transition-all duration-300 ease-in-out"
    );
}

#[test]
fn container_class_gating_fields() {
    let class = container_class(&PlayerSettings {
        high_contrast: true,
        reduced_motion: true,
        theme: Theme::Light,
        ..PlayerSettings::default()
    });
    let tokens = class.split(' ').collect::<Vec<_>>();
    assert!(tokens.contains(&"contrast-125"));
    assert!(tokens.contains(&"brightness-110"));
    assert!(tokens.contains(&"motion-reduce:transition-none"));
    assert!(!tokens.contains(&"transition-all"), "No transitions with reduced motion");
    assert!(tokens.contains(&"bg-slate-100"));
    assert!(tokens.contains(&"text-black"));
    assert!(!tokens.contains(&"bg-slate-900"), "Dark background is swapped");
    assert!(!tokens.contains(&"text-white"), "Dark text color is swapped");
}

#[test]
fn container_class_ignores_other_fields() {
    let defaults = container_class(&PlayerSettings::default());
    let class = container_class(&PlayerSettings {
        font_size: FontSize(200),
        control_bar: ControlBar::Minimal,
        gesture_controls: false,
        r#loop: true,
        theme: Theme::Auto,
        ..PlayerSettings::default()
    });
    assert_eq!(class, defaults, "Only gating fields affect the container");
}

#[test]
fn controls_layout_defaults() {
    let controls = ControlsLayout::new(&PlayerSettings::default());
    assert_eq!(
        controls
            .gestures
            .iter()
            .map(|gesture| (gesture.event, gesture.action))
            .collect::<Vec<_>>(),
        vec![
            (GestureEvent::DblPointerUp, GestureAction::Seek(-10)),
            (GestureEvent::DblPointerUp, GestureAction::Seek(10)),
            (GestureEvent::PointerUp, GestureAction::TogglePaused),
            (GestureEvent::PointerUp, GestureAction::ToggleControls),
        ]
    );
    assert_eq!(
        controls.gestures[0].class_name,
        "absolute inset-0 z-0 block h-full w-1/5"
    );
    assert!(controls.show_title && controls.show_pip && controls.show_fullscreen);
    assert_eq!(controls.group_spacing_class, "space-x-3");
    assert!(!controls.root_class.split(' ').any(|token| token == "opacity-100"));
    assert_eq!(controls.button_focus_class, "group-focus:text-brand");
    assert_eq!(
        controls.slider_focus_class,
        "focus-within:ring-4 focus-within:ring-brand/50"
    );
    assert!(controls.thumbnail_preview);
    assert!(controls.keyboard_shortcuts);
    assert_eq!(
        (controls.seek_backward_seconds, controls.seek_forward_seconds),
        (-10, 10)
    );
}

#[test]
fn controls_layout_minimal() {
    let controls = ControlsLayout::new(&PlayerSettings {
        control_bar: ControlBar::Minimal,
        gesture_controls: false,
        focus_indicators: false,
        thumbnail_preview: false,
        keyboard_shortcuts: KeyboardShortcuts::Disabled,
        skip_interval: 30,
        ..PlayerSettings::default()
    });
    assert!(controls.gestures.is_empty(), "No gestures when disabled");
    assert!(!controls.show_title && !controls.show_pip && !controls.show_fullscreen);
    assert_eq!(controls.group_spacing_class, "space-x-2");
    assert!(controls.root_class.ends_with(" from-black/40"));
    assert!(controls.button_focus_class.is_empty());
    assert!(controls.slider_focus_class.is_empty());
    assert!(!controls.thumbnail_preview);
    assert!(!controls.keyboard_shortcuts);
    assert_eq!(
        (controls.seek_backward_seconds, controls.seek_forward_seconds),
        (-30, 30)
    );
}

#[test]
fn controls_layout_always_visible() {
    let controls = ControlsLayout::new(&PlayerSettings {
        control_bar: ControlBar::Always,
        ..PlayerSettings::default()
    });
    assert!(controls.root_class.ends_with(" opacity-100"));
    assert!(controls.show_title);
}

#[test]
fn style_projection_serialization() {
    let projection = serde_json::to_value(StyleProjection::default()).unwrap();
    assert_eq!(projection["caption"]["bgColor"], "#000000");
    assert_eq!(projection["controls"]["gestures"][0]["event"], "dblpointerup");
    assert_eq!(projection["controls"]["gestures"][0]["action"], "seek:-10");
    assert_eq!(projection["controls"]["gestures"][2]["action"], "toggle:paused");
    assert!(projection["containerClass"].is_string());
}
