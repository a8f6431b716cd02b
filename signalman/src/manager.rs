//! The dispatch engine.
//!
//! [`Manager`] owns the registry, performs registration, and runs the
//! matching/invoking walk. Dispatch is an ordinary blocking call: handlers
//! run synchronously, in priority-then-registration order, until the list is
//! exhausted or one of them returns [`Value::Stop`].

use crate::registry::{Registry, RegistryView};
use signalman_core::{
    Callback, DispatchError, Handler, Origin, Outcomes, RegisterError, Sender, Value,
};
use std::sync::{Arc, RwLock, Weak};

/// Priority assigned by [`Manager::register`] when no explicit priority is
/// given. Lower priorities fire first; 5000 leaves room on either side for
/// handlers that must run before or after the defaults.
pub const DEFAULT_PRIORITY: i32 = 5000;

/// The signal used for the meta-dispatch of every produced outcome.
///
/// Whenever a handler produces an outcome for an ordinary dispatch, the
/// manager runs a secondary dispatch of this signal with the outcome as the
/// single argument, letting observers (audit, logging, metrics) see every
/// result without being part of the primary result set.
///
/// Handlers registered with a wildcard signal match this signal like any
/// other; scope their sender pattern away from the manager's kind if they
/// should only see ordinary dispatches.
pub const RESULT_SIGNAL: &str = "handler_result";

/// Processes signals through to registered handlers.
///
/// # Dispatch Semantics
///
/// - Handlers fire in ascending priority order; within a priority, in
///   registration order. The order is stable across repeated dispatches
///   absent intervening registration.
/// - The handler list is snapshotted before any callback runs, so
///   registering during a walk never affects that walk (snapshot isolation),
///   and callbacks may freely re-enter [`dispatch`](Manager::dispatch).
/// - Each dispatch call owns its own [`Outcomes`]; the return value is the
///   only channel for results.
/// - A callback fault propagates out of `dispatch`; the partial collection
///   for that call is lost. No retries, no handler isolation.
///
/// The manager is itself an [`Origin`] so it can stand as the emitting
/// object for [`RESULT_SIGNAL`] meta-dispatches; outcomes emitted by the
/// manager itself are not re-observed, which is what bounds the recursion.
pub struct Manager {
    registry: RwLock<Registry>,
    self_ref: Weak<Manager>,
}

impl Manager {
    /// Create a manager with an empty registry.
    pub fn new() -> Arc<Self> {
        Arc::new_cyclic(|self_ref| Self {
            registry: RwLock::new(Registry::new()),
            self_ref: self_ref.clone(),
        })
    }

    /// Start building a manager seeded with handlers.
    pub fn builder() -> ManagerBuilder {
        ManagerBuilder::new()
    }

    /// Register a handler at [`DEFAULT_PRIORITY`].
    ///
    /// `signal` must be non-empty; `"*"` subscribes to every signal.
    /// Registration is not deduplicated: registering the same rule twice
    /// yields two invocations per dispatch.
    pub fn register(
        &self,
        sender: impl Into<Sender>,
        signal: &str,
        callback: impl Callback,
    ) -> Result<(), RegisterError> {
        self.register_at(sender, signal, DEFAULT_PRIORITY, callback)
    }

    /// Register a handler at an explicit priority. Lower numbers fire first.
    pub fn register_at(
        &self,
        sender: impl Into<Sender>,
        signal: &str,
        priority: i32,
        callback: impl Callback,
    ) -> Result<(), RegisterError> {
        if signal.is_empty() {
            return Err(RegisterError::EmptySignal);
        }
        let handler = Arc::new(Handler::new(sender, signal, callback));
        self.registry
            .write()
            .expect("registry lock poisoned")
            .add(signal, priority, handler);
        tracing::trace!(signal, priority, "handler registered");
        Ok(())
    }

    /// A view of the full registry with unsorted buckets.
    pub fn handlers(&self) -> RegistryView {
        self.registry
            .read()
            .expect("registry lock poisoned")
            .view()
    }

    /// The handlers registered under exactly this signal key, sorted
    /// ascending by priority, or `None` if nothing was registered for it.
    /// The sort is memoized until a registration disturbs the buckets.
    pub fn handlers_for(&self, signal: &str) -> Option<Vec<Arc<Handler>>> {
        self.registry
            .write()
            .expect("registry lock poisoned")
            .handlers_for(signal)
    }

    /// Invoke the handlers for a signal and collect their outcomes.
    ///
    /// Walks the matching handlers in priority-then-registration order. Each
    /// match appends an [`Outcome`](signalman_core::Outcome) to the returned
    /// collection, after a meta-dispatch of [`RESULT_SIGNAL`] lets observers
    /// see it. An outcome whose value is [`Value::Stop`] ends the walk
    /// early; the remaining handlers, including those in later priority
    /// buckets, are never invoked.
    ///
    /// Dispatching a signal with no registered handlers returns an empty
    /// collection and is not an error.
    pub fn dispatch(
        &self,
        origin: &Arc<dyn Origin>,
        signal: &str,
        args: &[Value],
    ) -> Result<Outcomes, DispatchError> {
        let mut outcomes = Outcomes::new();
        self.process(origin, signal, args, &mut outcomes)?;
        Ok(outcomes)
    }

    fn process(
        &self,
        origin: &Arc<dyn Origin>,
        signal: &str,
        args: &[Value],
        outcomes: &mut Outcomes,
    ) -> Result<(), DispatchError> {
        // owned snapshot; the lock is released before any callback runs
        let snapshot = self
            .registry
            .write()
            .expect("registry lock poisoned")
            .snapshot_for(signal);
        if snapshot.is_empty() {
            return Ok(());
        }
        tracing::trace!(signal, handlers = snapshot.len(), "dispatching");

        for handler in snapshot {
            let attempted = handler.attempt(origin, signal, args).map_err(|source| {
                DispatchError::Callback {
                    signal: signal.to_string(),
                    source,
                }
            })?;
            let Some(outcome) = attempted else {
                continue;
            };

            // let observers see the outcome, unless the manager itself
            // emitted it (that is what bounds the recursion); the meta walk
            // collects into its own discarded set and its STOP, if any,
            // ends only the meta walk
            if !self.is_self(origin) {
                if let Some(me) = self.self_ref.upgrade() {
                    let me: Arc<dyn Origin> = me;
                    let mut observed = Outcomes::new();
                    self.process(&me, RESULT_SIGNAL, &[Value::of(outcome.clone())], &mut observed)?;
                }
            }

            let stop = outcome.value().is_stop();
            outcomes.append(outcome);
            if stop {
                tracing::debug!(signal, delivered = outcomes.len(), "dispatch stopped early");
                return Ok(());
            }
        }
        Ok(())
    }

    fn is_self(&self, origin: &Arc<dyn Origin>) -> bool {
        Arc::as_ptr(origin) as *const () == std::ptr::from_ref(self) as *const ()
    }
}

impl Origin for Manager {
    fn kind(&self) -> &'static str {
        "signalman::Manager"
    }
}

/// Builder that seeds a [`Manager`] with handlers before it is shared.
///
/// ```rust,ignore
/// let manager = Manager::builder()
///     .handler(Sender::Any, "greet", echo)
///     .handler_at(Sender::Any, "greet", 100, validate)
///     .build()?;
/// ```
pub struct ManagerBuilder {
    seeds: Vec<(Sender, String, i32, Arc<dyn Callback>)>,
}

impl ManagerBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self { seeds: Vec::new() }
    }

    /// Seed a handler at [`DEFAULT_PRIORITY`].
    pub fn handler(
        self,
        sender: impl Into<Sender>,
        signal: impl Into<String>,
        callback: impl Callback,
    ) -> Self {
        self.handler_at(sender, signal, DEFAULT_PRIORITY, callback)
    }

    /// Seed a handler at an explicit priority.
    pub fn handler_at(
        mut self,
        sender: impl Into<Sender>,
        signal: impl Into<String>,
        priority: i32,
        callback: impl Callback,
    ) -> Self {
        self.seeds
            .push((sender.into(), signal.into(), priority, Arc::new(callback)));
        self
    }

    /// Build the manager, registering every seeded handler in order.
    pub fn build(self) -> Result<Arc<Manager>, RegisterError> {
        let manager = Manager::new();
        for (sender, signal, priority, callback) in self.seeds {
            manager.register_at(sender, &signal, priority, callback)?;
        }
        Ok(manager)
    }
}

impl Default for ManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
