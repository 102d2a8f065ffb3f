/// A dependency container that owns reactive state under test.
///
/// Implement this for the container type of your state-management layer.
/// The harness depends on exactly three operations: construction from an
/// override set, listener attachment (via [`Source`](crate::Source)), and
/// disposal. It knows nothing about state derivation, dependency graphs,
/// or how overrides are resolved internally.
///
/// Disposal takes `&self` because containers are typically reached through
/// shared handles during a test; detaching listeners and releasing state is
/// expected to go through interior mutability. [`Harness`](crate::Harness)
/// calls [`dispose`](Store::dispose) exactly once per run, on every exit
/// path.
///
/// # Example
///
/// ```rust,ignore
/// struct CounterStore {
///     value: RefCell<i64>,
///     listeners: RefCell<Vec<EmissionSink<i64>>>,
/// }
///
/// impl Store for CounterStore {
///     type Overrides = CounterOverrides;
///
///     fn construct(overrides: CounterOverrides) -> Self {
///         CounterStore {
///             value: RefCell::new(overrides.start.unwrap_or(0)),
///             listeners: RefCell::new(Vec::new()),
///         }
///     }
///
///     fn dispose(&self) {
///         self.listeners.borrow_mut().clear();
///     }
/// }
/// ```
pub trait Store: 'static {
    /// The override set applied at construction.
    ///
    /// One fresh value per test run, consumed by [`construct`](Store::construct)
    /// and discarded with the store. `Default` gives the no-overrides case.
    type Overrides: Default;

    /// Build a fresh container, substituting the given overrides.
    fn construct(overrides: Self::Overrides) -> Self;

    /// Release the container and detach every listener it holds.
    ///
    /// Called exactly once per run, after teardown or on the first failing
    /// step, whichever comes first. Must be safe to call while user code
    /// still holds handles to the store.
    fn dispose(&self);
}
