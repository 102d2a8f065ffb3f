use std::fmt;

use crate::{EmissionSink, Store};

/// A reactive value source readable through a store.
///
/// Implement this for whatever identifies an observable value in your
/// state-management layer (a provider handle, a selector, a cell key).
/// The harness calls [`listen`](Source::listen) at most once per run, and
/// only when the test actually declared an expectation.
///
/// Implementations must uphold two ordering rules:
///
/// - every emission is forwarded to the sink in the order the store
///   produces it, with no coalescing or deduplication;
/// - when `fire_immediately` is set, the value current at attachment time
///   is delivered synchronously, before `listen` returns.
///
/// Listener detachment is the store's job: [`Store::dispose`] must drop
/// every sink handed out here.
pub trait Source<S: Store>: 'static {
    /// The emitted value type.
    type Value: Clone + fmt::Debug + PartialEq + 'static;

    /// Attach a listener for this source's emissions on the given store.
    fn listen(&self, store: &S, sink: EmissionSink<Self::Value>, fire_immediately: bool);
}
