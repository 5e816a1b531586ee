use crate::models::common::{eq_update, Loadable};
use crate::runtime::msg::{Action, ActionLoad, Event, Internal, Msg};
use crate::runtime::{Effects, Env, EnvError, EnvFutureExt, Update};
use crate::types::media::MediaSource;
use chrono::{DateTime, Utc};
use futures::FutureExt;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Selected {
    pub id: String,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum MediaError {
    /// The provider has no media behind the requested id.
    NotFound(String),
    Env(EnvError),
}

impl MediaError {
    pub fn message(&self) -> String {
        match &self {
            MediaError::NotFound(id) => format!("Media not found: {id}"),
            MediaError::Env(error) => error.message(),
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            MediaError::NotFound(_) => 2001,
            MediaError::Env(error) => error.code(),
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for MediaError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("MediaError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

#[derive(Clone, Default, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub selected: Option<Selected>,
    pub media_source: Option<Loadable<MediaSource, MediaError>>,
    #[serde(skip_serializing)]
    pub load_started: Option<DateTime<Utc>>,
}

impl<E: Env + 'static> Update<E> for Player {
    fn update(&mut self, msg: &Msg) -> Effects {
        match msg {
            Msg::Action(Action::Load(ActionLoad::Player(selected))) => {
                let selected_effects = eq_update(&mut self.selected, Some(selected.to_owned()));
                let media_source_effects =
                    eq_update(&mut self.media_source, Some(Loadable::Loading));
                self.load_started = Some(E::now());
                let id = selected.id.to_owned();
                Effects::msg(Msg::Event(Event::MediaSourceRequested { id: id.to_owned() }))
                    .unchanged()
                    .join(
                        Effects::future(
                            E::fetch_media_source(&id)
                                .map(move |result| {
                                    let result = match result {
                                        Ok(Some(media_source)) => Ok(media_source),
                                        Ok(None) => Err(MediaError::NotFound(id.to_owned())),
                                        Err(error) => Err(MediaError::Env(error)),
                                    };
                                    Msg::Internal(Internal::MediaSourceResult(id, result))
                                })
                                .boxed_env(),
                        )
                        .unchanged(),
                    )
                    .join(selected_effects)
                    .join(media_source_effects)
            }
            Msg::Action(Action::Unload) => {
                self.load_started = None;
                let selected_effects = eq_update(&mut self.selected, None);
                let media_source_effects = eq_update(&mut self.media_source, None);
                selected_effects.join(media_source_effects)
            }
            Msg::Internal(Internal::MediaSourceResult(id, result))
                if self.selected.as_ref().map(|selected| &selected.id) == Some(id) =>
            {
                let load_time = self
                    .load_started
                    .take()
                    .map(|load_started| (E::now() - load_started).num_milliseconds())
                    .unwrap_or_default();
                let (media_source, event) = match result {
                    Ok(media_source) => (
                        Loadable::Ready(media_source.to_owned()),
                        Event::MediaSourceLoaded {
                            id: id.to_owned(),
                            title: media_source.title.to_owned(),
                            load_time,
                        },
                    ),
                    Err(error) => (
                        Loadable::Err(error.to_owned()),
                        Event::Error {
                            error: error.to_owned(),
                            source: Box::new(Event::MediaSourceRequested { id: id.to_owned() }),
                        },
                    ),
                };
                Effects::msg(Msg::Event(event))
                    .unchanged()
                    .join(eq_update(&mut self.media_source, Some(media_source)))
            }
            Msg::Internal(Internal::MediaSourceResult(id, _)) => {
                tracing::debug!(%id, "ignoring media source result for a stale selection");
                Effects::none().unchanged()
            }
            _ => Effects::none().unchanged(),
        }
    }
}
