use chrono::{DateTime, TimeZone, Utc};
use futures::{future, Future};
use player_core::constants::SAMPLE_MEDIA;
use player_core::runtime::{ConditionalSend, Env, EnvError, EnvFutureExt, TryEnvFuture};
use player_core::types::media::MediaSource;
use serde::{Deserialize, Serialize};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;

/// [`Env`] of the browser: `localStorage`, the sample media catalog and the JS event loop.
pub enum WebEnv {}

impl WebEnv {
    // @TODO the storage handle could be kept once resolved instead of looked up on every access
    fn local_storage() -> Result<web_sys::Storage, EnvError> {
        web_sys::window()
            .ok_or(EnvError::StorageUnavailable)?
            .local_storage()
            .map_err(|_| EnvError::StorageUnavailable)?
            .ok_or(EnvError::StorageUnavailable)
    }
    pub fn set_document_title(title: &str) {
        match web_sys::window().and_then(|window| window.document()) {
            Some(document) => document.set_title(title),
            None => tracing::warn!("document is not available, page title not updated"),
        }
    }
}

impl Env for WebEnv {
    fn get_storage<T: for<'de> Deserialize<'de>>(key: &str) -> Result<Option<T>, EnvError> {
        let storage = Self::local_storage()?;
        let value = storage
            .get_item(key)
            .map_err(|error| EnvError::StorageReadError(js_error_message(error)))?;
        Ok(match value {
            Some(value) => Some(serde_json::from_str(&value)?),
            None => None,
        })
    }
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> Result<(), EnvError> {
        let storage = Self::local_storage()?;
        let result = match value {
            Some(value) => {
                let serialized = serde_json::to_string(value)?;
                storage.set_item(key, &serialized)
            }
            None => storage.remove_item(key),
        };
        result.map_err(|error| EnvError::StorageWriteError(js_error_message(error)))
    }
    fn fetch_media_source(id: &str) -> TryEnvFuture<Option<MediaSource>> {
        future::ok(SAMPLE_MEDIA.get(id).cloned()).boxed_env()
    }
    fn exec_concurrent<F: Future<Output = ()> + ConditionalSend + 'static>(future: F) {
        spawn_local(future)
    }
    fn now() -> DateTime<Utc> {
        let millis = js_sys::Date::now() as i64;
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default()
    }
}

fn js_error_message(error: JsValue) -> String {
    error
        .dyn_into::<js_sys::Error>()
        .map(|error| String::from(error.to_string()))
        .unwrap_or_else(|_| "unknown JS error".to_owned())
}
