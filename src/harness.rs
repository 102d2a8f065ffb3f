use std::{
    fmt,
    future::{Future, IntoFuture},
    pin::Pin,
    rc::Rc,
};

use tracing::{Instrument, debug, trace};

use crate::{
    Error, Expectation, Result, Source, Store, diff, guard::DisposeGuard, sink::EmissionSink,
};

type HookFuture = Pin<Box<dyn Future<Output = Result>>>;
type HookFn = Box<dyn FnOnce() -> HookFuture>;
type ActionFn<S> = Box<dyn FnOnce(Rc<S>) -> HookFuture>;
type VerifyFn<S> = Box<dyn FnOnce(Rc<S>) -> Result>;
type ExpectFn<V> = Box<dyn FnOnce() -> Expectation<V>>;

/// Test harness for asserting the sequence of values a store emits.
///
/// One harness runs one test case end-to-end with strict ordering and
/// guaranteed cleanup:
///
/// - Store lifecycle via [`with_overrides`](Self::with_overrides) and
///   automatic disposal on every exit path
/// - Emission capture via [`expect_emissions`](Self::expect_emissions),
///   [`fire_immediately`](Self::fire_immediately), [`skip`](Self::skip)
/// - User hooks via [`on_setup`](Self::on_setup), [`act`](Self::act),
///   [`verify`](Self::verify), [`on_teardown`](Self::on_teardown)
///
/// # Example
///
/// ```ignore
/// Harness::new("counter increments", Counter)
///     .act(|store| async move {
///         store.increment();
///         store.increment();
///         Ok(())
///     })
///     .expect_emissions(|| [1, 2])
///     .await?;
/// ```
///
/// # Note
///
/// Store handles are `Rc` and the run future is `!Send`. This is
/// intentional — the harness is designed for single-threaded test contexts
/// only, and the whole run is strictly sequential: each hook is awaited
/// fully before the next step begins.
pub struct Harness<S: Store, Src: Source<S>> {
    description: String,
    source: Src,
    overrides: S::Overrides,
    skip: usize,
    fire_immediately: bool,
    setup: Option<HookFn>,
    action: Option<ActionFn<S>>,
    expect: Option<ExpectFn<Src::Value>>,
    verify: Option<VerifyFn<S>>,
    teardown: Option<HookFn>,
}

impl<S: Store, Src: Source<S>> fmt::Debug for Harness<S, Src> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Harness")
            .field("description", &self.description)
            .field("skip", &self.skip)
            .field("fire_immediately", &self.fire_immediately)
            .finish_non_exhaustive()
    }
}

impl<S: Store, Src: Source<S>> Harness<S, Src> {
    /// Create a harness for one test case.
    ///
    /// The description names the case in failure messages and log output.
    /// Everything else is optional: with no further configuration,
    /// [`run`](Self::run) constructs a store from default overrides and
    /// disposes it again.
    pub fn new(description: impl Into<String>, source: Src) -> Self {
        Self {
            description: description.into(),
            source,
            overrides: S::Overrides::default(),
            skip: 0,
            fire_immediately: false,
            setup: None,
            action: None,
            expect: None,
            verify: None,
            teardown: None,
        }
    }

    // ==================== Store Configuration ====================

    /// Replace dependencies of the store for this run.
    ///
    /// The override set is consumed by construction and discarded with the
    /// store; nothing leaks into the next run.
    pub fn with_overrides(mut self, overrides: S::Overrides) -> Self {
        self.overrides = overrides;
        self
    }

    // ==================== Capture Configuration ====================

    /// Discard the first `count` captured emissions before comparison.
    ///
    /// Useful when the opening of a sequence is known and uninteresting.
    /// A count past the end of the buffer leaves an empty remainder.
    pub fn skip(mut self, count: usize) -> Self {
        self.skip = count;
        self
    }

    /// Deliver the source's current value to the listener at attachment,
    /// before the action runs, making it the first captured emission.
    pub fn fire_immediately(mut self) -> Self {
        self.fire_immediately = true;
        self
    }

    /// Declare the expected emission sequence.
    ///
    /// The thunk is evaluated lazily, after the action completed, so it may
    /// reference values that only exist once the action ran. Plain
    /// collections convert to exact-sequence matchers; see
    /// [`Expectation`] for predicate matching.
    ///
    /// Without an expectation the harness never attaches a listener to the
    /// source at all.
    pub fn expect_emissions<F, M>(mut self, expect: F) -> Self
    where
        F: FnOnce() -> M + 'static,
        M: Into<Expectation<Src::Value>>,
    {
        self.expect = Some(Box::new(move || expect().into()));
        self
    }

    // ==================== User Hooks ====================

    /// Run an async hook before the store is constructed.
    pub fn on_setup<F, Fut>(mut self, setup: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result> + 'static,
    {
        self.setup = Some(Box::new(move || Box::pin(setup())));
        self
    }

    /// Run the action under test, receiving a live store handle.
    ///
    /// Emissions the action triggers — including tight synchronous bursts —
    /// are captured in order.
    pub fn act<F, Fut>(mut self, action: F) -> Self
    where
        F: FnOnce(Rc<S>) -> Fut + 'static,
        Fut: Future<Output = Result> + 'static,
    {
        self.action = Some(Box::new(move |store| Box::pin(action(store))));
        self
    }

    /// Inspect the live store after the comparison passed.
    ///
    /// Skipped when the comparison failed; the mismatch error propagates
    /// first.
    pub fn verify<F>(mut self, verify: F) -> Self
    where
        F: FnOnce(Rc<S>) -> Result + 'static,
    {
        self.verify = Some(Box::new(verify));
        self
    }

    /// Run an async hook at the very end of a passing run.
    ///
    /// Disposal of the store does not depend on this hook; it happens on
    /// every exit path, after the teardown on success and in place of it on
    /// failure.
    pub fn on_teardown<F, Fut>(mut self, teardown: F) -> Self
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result> + 'static,
    {
        self.teardown = Some(Box::new(move || Box::pin(teardown())));
        self
    }

    // ==================== Execution ====================

    /// Run the test case.
    ///
    /// Steps, in strict order: setup → store construction (disposal
    /// registered immediately) → listener attachment (only with an
    /// expectation) → action → prefix skip → comparison → verify →
    /// teardown. The first failing step short-circuits the rest; the store
    /// is disposed regardless.
    pub async fn run(self) -> Result {
        let span = tracing::debug_span!("emissary", test = %self.description);
        self.execute().instrument(span).await
    }

    async fn execute(mut self) -> Result {
        if let Some(setup) = self.setup.take() {
            setup().await?;
            trace!("setup complete");
        }

        let store = DisposeGuard::new(S::construct(self.overrides));
        debug!("store constructed");

        let capture = match self.expect.take() {
            Some(expect) => {
                let (sink, receiver) = EmissionSink::channel();
                self.source.listen(&store, sink, self.fire_immediately);
                trace!(fire_immediately = self.fire_immediately, "listener attached");
                Some((receiver, expect))
            }
            None => None,
        };

        if let Some(action) = self.action.take() {
            action(store.handle()).await?;
            trace!("action complete");
        }

        if let Some((mut receiver, expect)) = capture {
            let mut buffer = Vec::new();
            while let Ok(value) = receiver.try_recv() {
                buffer.push(value);
            }
            debug!(captured = buffer.len(), skip = self.skip, "emissions captured");

            let remainder = buffer.split_off(self.skip.min(buffer.len()));
            let expectation = expect();
            if !expectation.matches(&remainder) {
                return Err(Error::Mismatch {
                    test: self.description,
                    detail: diff::mismatch_detail(
                        &expectation.describe(),
                        &format!("{remainder:?}"),
                    ),
                });
            }
        }

        if let Some(verify) = self.verify.take() {
            verify(store.handle())?;
            trace!("verify complete");
        }

        if let Some(teardown) = self.teardown.take() {
            teardown().await?;
            trace!("teardown complete");
        }

        Ok(())
    }
}

impl<S: Store, Src: Source<S>> IntoFuture for Harness<S, Src> {
    type Output = Result;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output>>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.run())
    }
}
