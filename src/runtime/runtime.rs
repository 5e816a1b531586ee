use crate::runtime::msg::{Action, Event, Msg};
use crate::runtime::{Effect, Env, Model};
use derivative::Derivative;
use enclose::enclose;
use futures::channel::mpsc::{channel, Receiver, Sender};
use futures::FutureExt;
use serde::Serialize;
use std::marker::PhantomData;
use std::sync::{Arc, LockResult, RwLock, RwLockReadGuard};

/// What the runtime reports to its owner: the fields whose state changed, or a core event.
#[derive(Serialize, Debug)]
#[serde(tag = "name", content = "args")]
pub enum RuntimeEvent<E: Env, M: Model<E>> {
    NewState(Vec<M::Field>),
    CoreEvent(Event),
}

/// An action addressed to the whole model, or to a single field of it.
#[derive(Debug)]
pub struct RuntimeAction<E: Env, M: Model<E>> {
    pub field: Option<M::Field>,
    pub action: Action,
}

/// Message loop around the root model.
///
/// Actions enter through [`Runtime::dispatch`]. Effects run right away (messages) or on
/// [`Env::exec_concurrent`] (futures), and their results are fed back into the model.
#[derive(Derivative)]
#[derivative(Clone(bound = ""))]
pub struct Runtime<E: Env, M: Model<E>> {
    model: Arc<RwLock<M>>,
    tx: Sender<RuntimeEvent<E, M>>,
    env: PhantomData<E>,
}

impl<E, M> Runtime<E, M>
where
    E: Env + Send + Sync + 'static,
    M: Model<E> + Send + Sync + 'static,
{
    pub fn new(
        model: M,
        effects: Vec<Effect>,
        buffer: usize,
    ) -> (Self, Receiver<RuntimeEvent<E, M>>) {
        let (tx, rx) = channel(buffer);
        let runtime = Runtime {
            model: Arc::new(RwLock::new(model)),
            tx,
            env: PhantomData,
        };
        runtime.handle_effects(effects, vec![]);
        (runtime, rx)
    }
    pub fn model(&self) -> LockResult<RwLockReadGuard<M>> {
        self.model.read()
    }
    pub fn dispatch(&self, action: RuntimeAction<E, M>) {
        let RuntimeAction { field, action } = action;
        let msg = Msg::Action(action);
        self.update_model(|model| match &field {
            Some(field) => model.update_field(&msg, field),
            None => model.update(&msg),
        });
    }
    /// Runs `update` under the write lock, then handles what it produced.
    ///
    /// A poisoned lock means an earlier update panicked half way, so the message is dropped.
    fn update_model<F>(&self, update: F)
    where
        F: FnOnce(&mut M) -> (Vec<Effect>, Vec<M::Field>),
    {
        let (effects, fields) = match self.model.write() {
            Ok(mut model) => update(&mut *model),
            Err(error) => {
                tracing::error!(%error, "model is poisoned, message dropped");
                return;
            }
        };
        self.handle_effects(effects, fields);
    }
    fn emit(&self, event: RuntimeEvent<E, M>) {
        if let Err(error) = self.tx.clone().try_send(event) {
            tracing::warn!(%error, "emit event failed");
        }
    }
    fn handle_effects(&self, effects: Vec<Effect>, fields: Vec<M::Field>) {
        if !fields.is_empty() {
            self.emit(RuntimeEvent::NewState(fields));
        }
        for effect in effects {
            match effect {
                Effect::Msg(msg) => self.handle_effect_output(*msg),
                Effect::Future(future) => E::exec_concurrent(future.then(
                    enclose!((self.clone() => runtime) move |msg| async move {
                        runtime.handle_effect_output(msg);
                    }),
                )),
            }
        }
    }
    fn handle_effect_output(&self, msg: Msg) {
        match msg {
            Msg::Event(event) => self.emit(RuntimeEvent::CoreEvent(event)),
            Msg::Internal(_) => self.update_model(|model| model.update(&msg)),
            // Actions only come from the outside, through `dispatch`.
            Msg::Action(action) => {
                tracing::error!(?action, "effect resolved with an action, ignored");
            }
        }
    }
}
