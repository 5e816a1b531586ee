use crate::env::WebEnv;
use crate::media_element::MediaElement;
use futures::{future, StreamExt};
use gloo_utils::format::JsValueSerdeExt;
use lazy_static::lazy_static;
use player_core::models::playback;
use player_core::models::player_session::{PlayerSession, PlayerSessionField};
use player_core::runtime::msg::{Action, Event};
use player_core::runtime::{Env, Runtime, RuntimeAction, RuntimeEvent};
use std::sync::RwLock;
use tracing::{info, Level};
use tracing_wasm::WASMLayerConfigBuilder;
use wasm_bindgen::{prelude::wasm_bindgen, JsValue};

lazy_static! {
    static ref RUNTIME: RwLock<Option<Runtime<WebEnv, PlayerSession>>> = Default::default();
}

#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    #[cfg(any(debug_assertions, feature = "log-trace"))]
    let max_level = Level::TRACE;
    #[cfg(all(not(debug_assertions), not(feature = "log-trace")))]
    let max_level = Level::ERROR;

    let config = WASMLayerConfigBuilder::default()
        .set_max_level(max_level)
        .build();
    tracing_wasm::set_as_global_default_with_config(config);

    info!(?max_level, "Logging level");
}

#[wasm_bindgen]
pub fn initialize_runtime(emit_to_ui: js_sys::Function) -> Result<(), JsValue> {
    let mut runtime = RUNTIME.write().map_err(lock_error)?;
    if runtime.is_some() {
        return Err(JsValue::from_str("runtime is already initialized"));
    };
    let (model, effects) = PlayerSession::new::<WebEnv>();
    let (new_runtime, rx) =
        Runtime::<WebEnv, _>::new(model, effects.into_iter().collect::<Vec<_>>(), 1000);
    WebEnv::exec_concurrent(rx.for_each(move |event| {
        if let RuntimeEvent::CoreEvent(Event::MediaSourceLoaded { .. }) = &event {
            update_document_title();
        };
        match <JsValue as JsValueSerdeExt>::from_serde(&event) {
            Ok(event) => {
                if let Err(error) = emit_to_ui.call1(&JsValue::NULL, &event) {
                    tracing::error!(?error, "emit event failed");
                }
            }
            Err(error) => tracing::error!(%error, "event serialization failed"),
        };
        future::ready(())
    }));
    *runtime = Some(new_runtime);
    Ok(())
}

#[wasm_bindgen]
pub fn get_state(field: JsValue) -> Result<JsValue, JsValue> {
    let field = JsValueSerdeExt::into_serde::<PlayerSessionField>(&field).map_err(serde_error)?;
    with_runtime(|runtime| {
        let model = runtime.model().map_err(lock_error)?;
        let state = match field {
            PlayerSessionField::Settings => {
                <JsValue as JsValueSerdeExt>::from_serde(&model.settings)
            }
            PlayerSessionField::Styles => {
                <JsValue as JsValueSerdeExt>::from_serde(&model.styles)
            }
            PlayerSessionField::Player => {
                <JsValue as JsValueSerdeExt>::from_serde(&model.player)
            }
        };
        state.map_err(serde_error)
    })
}

#[wasm_bindgen]
pub fn dispatch(action: JsValue, field: JsValue) -> Result<(), JsValue> {
    let action = JsValueSerdeExt::into_serde::<Action>(&action).map_err(serde_error)?;
    let field =
        JsValueSerdeExt::into_serde::<Option<PlayerSessionField>>(&field).map_err(serde_error)?;
    with_runtime(|runtime| {
        runtime.dispatch(RuntimeAction { field, action });
        Ok(())
    })
}

/// Volume the media element should play at for the current volume boost.
#[wasm_bindgen]
pub fn effective_volume(current: f64) -> Result<f64, JsValue> {
    with_runtime(|runtime| {
        let model = runtime.model().map_err(lock_error)?;
        Ok(playback::effective_volume(
            current,
            model.settings.settings().volume_boost,
        ))
    })
}

/// Pushes volume boost, loop and autoplay into `media` and the caption variables into
/// `container`, the player element holding both the media and the captions overlay.
#[wasm_bindgen]
pub fn apply_settings(
    media: web_sys::HtmlMediaElement,
    container: web_sys::HtmlElement,
) -> Result<(), JsValue> {
    with_runtime(|runtime| {
        let model = runtime.model().map_err(lock_error)?;
        playback::apply_settings(
            &mut MediaElement { media, container },
            model.settings.settings(),
            &model.styles.caption,
        );
        Ok(())
    })
}

fn update_document_title() {
    let title = with_runtime(|runtime| {
        let model = runtime.model().map_err(lock_error)?;
        Ok(model
            .player
            .media_source
            .as_ref()
            .and_then(|media_source| media_source.ready())
            .map(|media_source| media_source.document_title()))
    });
    match title {
        Ok(Some(title)) => WebEnv::set_document_title(&title),
        Ok(None) => {}
        Err(error) => tracing::warn!(?error, "page title not updated"),
    }
}

fn with_runtime<T>(
    f: impl FnOnce(&Runtime<WebEnv, PlayerSession>) -> Result<T, JsValue>,
) -> Result<T, JsValue> {
    let runtime = RUNTIME.read().map_err(lock_error)?;
    let runtime = runtime
        .as_ref()
        .ok_or_else(|| JsValue::from_str("runtime is not ready"))?;
    f(runtime)
}

fn lock_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&format!("lock failed: {error}"))
}

fn serde_error(error: serde_json::Error) -> JsValue {
    JsValue::from_str(&format!("serialization failed: {error}"))
}
