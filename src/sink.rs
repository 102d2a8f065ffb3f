use std::fmt;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};

/// The listener half handed to [`Source::listen`](crate::Source::listen).
///
/// Converts a push-based listener callback into an ordered buffer: each
/// [`emit`](EmissionSink::emit) appends the newly emitted value to the
/// harness's capture channel, preserving emission order exactly. There is
/// no deduplication and no backpressure; tight synchronous bursts are all
/// captured.
///
/// The sink may be cloned if the store fans a listener out internally; all
/// clones feed the same buffer.
pub struct EmissionSink<V> {
    sender: UnboundedSender<V>,
}

impl<V> EmissionSink<V> {
    /// Create a sink and the receiver the harness drains after the action.
    pub(crate) fn channel() -> (Self, UnboundedReceiver<V>) {
        let (sender, receiver) = unbounded_channel();
        (Self { sender }, receiver)
    }

    /// Record one emitted value.
    ///
    /// Emissions arriving after the run is over (the harness dropped its
    /// receiver) are silently discarded.
    pub fn emit(&self, value: V) {
        let _ = self.sender.send(value);
    }
}

impl<V> Clone for EmissionSink<V> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<V> fmt::Debug for EmissionSink<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmissionSink").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_emission_order() {
        let (sink, mut rx) = EmissionSink::channel();
        for i in 0..100 {
            sink.emit(i);
        }

        let mut captured = Vec::new();
        while let Ok(v) = rx.try_recv() {
            captured.push(v);
        }
        assert_eq!(captured, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn clones_feed_the_same_buffer() {
        let (sink, mut rx) = EmissionSink::channel();
        let other = sink.clone();

        sink.emit("a");
        other.emit("b");
        sink.emit("c");

        let mut captured = Vec::new();
        while let Ok(v) = rx.try_recv() {
            captured.push(v);
        }
        assert_eq!(captured, vec!["a", "b", "c"]);
    }

    #[test]
    fn emit_after_receiver_dropped_is_ignored() {
        let (sink, rx) = EmissionSink::channel();
        drop(rx);
        sink.emit(1);
    }
}
