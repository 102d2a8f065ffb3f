//! # Emissary
//!
//! Assert the exact sequence of values a reactive store emits under test.
//!
//! Emissary glues a state-management layer to your tests: it attaches a
//! listener to a reactive value source, captures every emission into an
//! ordered buffer while your action runs, and compares the buffer against
//! an expected sequence. On mismatch the failure message carries a
//! character-level diff of the expected and actual renderings.
//!
//! It is deliberately not a state-management system itself. Your container
//! plugs in through two small traits — [`Store`] (construct from overrides,
//! dispose) and [`Source`] (attach a listener) — and emissary depends on
//! nothing else about it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::cell::RefCell;
//! use emissary::{EmissionSink, Harness, Source, Store};
//!
//! // The container seam: your state-management layer implements these.
//! #[derive(Default)]
//! struct Overrides {
//!     start: i64,
//! }
//!
//! struct CounterStore {
//!     value: RefCell<i64>,
//!     listeners: RefCell<Vec<EmissionSink<i64>>>,
//! }
//!
//! impl Store for CounterStore {
//!     type Overrides = Overrides;
//!
//!     fn construct(overrides: Overrides) -> Self {
//!         CounterStore {
//!             value: RefCell::new(overrides.start),
//!             listeners: RefCell::new(Vec::new()),
//!         }
//!     }
//!
//!     fn dispose(&self) {
//!         self.listeners.borrow_mut().clear();
//!     }
//! }
//!
//! impl CounterStore {
//!     fn increment(&self) {
//!         let next = *self.value.borrow() + 1;
//!         *self.value.borrow_mut() = next;
//!         for sink in self.listeners.borrow().iter() {
//!             sink.emit(next);
//!         }
//!     }
//! }
//!
//! struct Count;
//!
//! impl Source<CounterStore> for Count {
//!     type Value = i64;
//!
//!     fn listen(&self, store: &CounterStore, sink: EmissionSink<i64>, fire_immediately: bool) {
//!         if fire_immediately {
//!             sink.emit(*store.value.borrow());
//!         }
//!         store.listeners.borrow_mut().push(sink);
//!     }
//! }
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> emissary::Result {
//!     Harness::new("counter increments", Count)
//!         .act(|store| async move {
//!             store.increment();
//!             store.increment();
//!             Ok(())
//!         })
//!         .expect_emissions(|| [1, 2])
//!         .await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Harness`] | Runs one test case end-to-end: setup, store construction, capture, action, comparison, verify, teardown |
//! | [`Store`] | Container seam: construct from an override set, dispose |
//! | [`Source`] | Value-source seam: attach a listener, optionally replaying the current value |
//! | [`EmissionSink`] | Listener half handed to [`Source::listen`]; converts pushed emissions into the capture buffer |
//! | [`Expectation`] | Matcher over the captured buffer: exact sequence or predicate |
//! | [`Error`] | Crate-wide error; [`Error::Mismatch`] carries the diagnostic diff |
//!
//! ## Execution Model
//!
//! One harness run is strictly sequential: each async hook is awaited fully
//! before the next step begins, and emissions are captured in exactly the
//! order the store produces them. Store handles are `Rc` and run futures
//! are `!Send` — the harness targets single-threaded test contexts, the
//! only place it belongs. The store is disposed on every exit path, so
//! listener state never leaks across tests.
//!
//! There are no retries and no timeouts; a hanging hook stalls until your
//! test framework's own timeout policy intervenes.

mod error;
mod expectation;
mod guard;
mod harness;
mod sink;
mod source;
mod store;

pub mod diff;

pub use error::Error;
pub use expectation::Expectation;
pub use harness::Harness;
pub use sink::EmissionSink;
pub use source::Source;
pub use store::Store;

/// Convenience alias for `Result<T, emissary::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
