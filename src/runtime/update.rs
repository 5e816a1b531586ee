use crate::runtime::msg::Msg;
use crate::runtime::{Effect, Effects, Env};
#[cfg(debug_assertions)]
use core::fmt::Debug;
use serde::{Deserialize, Serialize};

/// Root of the state owned by a [`Runtime`](crate::runtime::Runtime).
///
/// Both methods return the effects to run and the fields whose state changed.
pub trait Model<E: Env>: Clone {
    #[cfg(not(debug_assertions))]
    type Field: Send + Sync + Serialize + for<'de> Deserialize<'de>;
    #[cfg(debug_assertions)]
    type Field: Debug + Send + Sync + Serialize + for<'de> Deserialize<'de>;

    fn update(&mut self, msg: &Msg) -> (Vec<Effect>, Vec<Self::Field>);
    /// Like [`Model::update`], restricted to `field`.
    fn update_field(&mut self, msg: &Msg, field: &Self::Field) -> (Vec<Effect>, Vec<Self::Field>);
}

/// A part of the model that reacts to messages on its own.
pub trait Update<E: Env> {
    fn update(&mut self, msg: &Msg) -> Effects;
}
