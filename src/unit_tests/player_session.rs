use crate::constants::PLAYER_SETTINGS_STORAGE_KEY;
use crate::models::player_session::{PlayerSession, PlayerSessionField};
use crate::models::style_projection::StyleProjection;
use crate::runtime::msg::{Action, ActionSettings, Event};
use crate::runtime::{Runtime, RuntimeAction, RuntimeEvent};
use crate::types::settings::{CaptionPosition, PlayerSettings, SettingUpdate, Theme};
use crate::unit_tests::{TestEnv, STORAGE};

fn settings_action(action: ActionSettings) -> RuntimeAction<TestEnv, PlayerSession> {
    RuntimeAction {
        field: None,
        action: Action::Settings(action),
    }
}

#[test]
fn new_session_projects_stored_settings() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    STORAGE.write().unwrap().insert(
        PLAYER_SETTINGS_STORAGE_KEY.to_owned(),
        r#"{"position":"top","theme":"light"}"#.to_owned(),
    );
    let (session, effects) = PlayerSession::new::<TestEnv>();
    let settings = PlayerSettings {
        position: CaptionPosition::Top,
        theme: Theme::Light,
        ..PlayerSettings::default()
    };
    assert_eq!(session.settings.settings(), &settings);
    assert_eq!(session.styles, StyleProjection::new(&settings));
    assert_eq!(session.styles.caption.top, "10%");
    assert!(!effects.has_changed);
}

#[test]
fn dispatch_settings_update() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (session, _) = PlayerSession::new::<TestEnv>();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(session, vec![], 1000);
    runtime.dispatch(settings_action(ActionSettings::Update(
        SettingUpdate::HighContrast(true),
    )));
    let settings = PlayerSettings {
        high_contrast: true,
        ..PlayerSettings::default()
    };
    assert_eq!(runtime.model().unwrap().settings.settings(), &settings);
    assert!(
        runtime
            .model()
            .unwrap()
            .styles
            .container_class
            .contains("contrast-125"),
        "Styles follow the settings"
    );
    assert_eq!(
        STORAGE
            .read()
            .unwrap()
            .get(PLAYER_SETTINGS_STORAGE_KEY)
            .map(|data| serde_json::from_str::<PlayerSettings>(data).unwrap()),
        Some(settings.to_owned()),
        "Settings are persisted"
    );
    let events = TestEnv::events(&mut rx);
    assert!(events.iter().any(|event| matches!(
        event,
        RuntimeEvent::NewState(fields)
            if *fields == vec![PlayerSessionField::Settings, PlayerSessionField::Styles]
    )));
    assert!(events.iter().any(|event| matches!(
        event,
        RuntimeEvent::CoreEvent(Event::SettingsUpdated { settings: updated }) if *updated == settings
    )));
}

#[test]
fn dispatch_settings_update_not_changed() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (session, _) = PlayerSession::new::<TestEnv>();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(session, vec![], 1000);
    runtime.dispatch(settings_action(ActionSettings::Update(SettingUpdate::Theme(
        Theme::Dark,
    ))));
    let events = TestEnv::events(&mut rx);
    assert!(
        !events
            .iter()
            .any(|event| matches!(event, RuntimeEvent::NewState(_))),
        "Model did not change"
    );
    assert!(events.iter().any(|event| matches!(
        event,
        RuntimeEvent::CoreEvent(Event::SettingsUpdated { .. })
    )));
    assert!(
        STORAGE
            .read()
            .unwrap()
            .contains_key(PLAYER_SETTINGS_STORAGE_KEY),
        "Snapshot is still persisted"
    );
}

#[test]
fn dispatch_settings_reset() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (session, _) = PlayerSession::new::<TestEnv>();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(session, vec![], 1000);
    runtime.dispatch(settings_action(ActionSettings::Update(SettingUpdate::Theme(
        Theme::Light,
    ))));
    runtime.dispatch(settings_action(ActionSettings::Reset));
    assert_eq!(
        runtime.model().unwrap().settings.settings(),
        &PlayerSettings::default()
    );
    assert_eq!(
        runtime.model().unwrap().styles,
        StyleProjection::default(),
        "Styles are projected from defaults again"
    );
    assert!(!STORAGE
        .read()
        .unwrap()
        .contains_key(PLAYER_SETTINGS_STORAGE_KEY));
    assert!(TestEnv::events(&mut rx)
        .iter()
        .any(|event| matches!(event, RuntimeEvent::CoreEvent(Event::SettingsReset))));
}

#[test]
fn dispatch_reset_caption_styles_to_field() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (session, _) = PlayerSession::new::<TestEnv>();
    let (runtime, mut rx) = Runtime::<TestEnv, _>::new(session, vec![], 1000);
    runtime.dispatch(settings_action(ActionSettings::Update(
        SettingUpdate::Position(CaptionPosition::Center),
    )));
    TestEnv::events(&mut rx);
    runtime.dispatch(RuntimeAction {
        field: Some(PlayerSessionField::Settings),
        action: Action::Settings(ActionSettings::ResetCaptionStyles),
    });
    assert_eq!(runtime.model().unwrap().styles.caption.bottom, "10%");
    let events = TestEnv::events(&mut rx);
    assert!(events.iter().any(|event| matches!(
        event,
        RuntimeEvent::CoreEvent(Event::CaptionStylesReset { settings })
            if settings.position == CaptionPosition::Bottom
    )));
}
