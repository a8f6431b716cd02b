//! Testing utilities for Signalman.
//!
//! Ready-made callbacks for exercising dispatch in tests:
//!
//! - [`RecordingCallback`]: records every argument vector it is invoked with
//! - [`CountingCallback`]: counts invocations
//! - [`StopCallback`]: always returns the stop sentinel
//! - [`echo`]: returns the first argument unchanged

use signalman_core::{BoxError, Callback, Value};
use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

/// Return the first argument unchanged, or [`Value::Unit`] when called with
/// no arguments.
pub fn echo(args: &[Value]) -> Result<Value, BoxError> {
    Ok(args.first().cloned().unwrap_or(Value::Unit))
}

/// A callback that records every argument vector it is invoked with.
///
/// Clones share the same recording, so a clone can be registered while the
/// original is kept for assertions.
pub struct RecordingCallback {
    calls: Arc<Mutex<Vec<Vec<Value>>>>,
    value: Value,
}

impl RecordingCallback {
    /// Create a recorder that returns [`Value::Unit`].
    pub fn new() -> Self {
        Self::returning(Value::Unit)
    }

    /// Create a recorder that returns a fixed value.
    pub fn returning(value: Value) -> Self {
        Self {
            calls: Arc::new(Mutex::new(Vec::new())),
            value,
        }
    }

    /// The recorded argument vectors, in invocation order.
    pub fn calls(&self) -> Vec<Vec<Value>> {
        self.calls.lock().expect("recording lock poisoned").clone()
    }

    /// Number of invocations recorded.
    pub fn count(&self) -> usize {
        self.calls.lock().expect("recording lock poisoned").len()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.calls.lock().expect("recording lock poisoned").clear();
    }
}

impl Default for RecordingCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RecordingCallback {
    fn clone(&self) -> Self {
        Self {
            calls: self.calls.clone(),
            value: self.value.clone(),
        }
    }
}

impl Callback for RecordingCallback {
    fn invoke(&self, args: &[Value]) -> Result<Value, BoxError> {
        self.calls
            .lock()
            .expect("recording lock poisoned")
            .push(args.to_vec());
        Ok(self.value.clone())
    }
}

/// A callback that counts invocations and returns [`Value::Unit`].
pub struct CountingCallback {
    count: Arc<AtomicUsize>,
}

impl CountingCallback {
    /// Create a counter starting at zero.
    pub fn new() -> Self {
        Self {
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// The current invocation count.
    pub fn count(&self) -> usize {
        self.count.load(Ordering::SeqCst)
    }

    /// Reset the counter to zero.
    pub fn reset(&self) {
        self.count.store(0, Ordering::SeqCst);
    }
}

impl Default for CountingCallback {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for CountingCallback {
    fn clone(&self) -> Self {
        Self {
            count: self.count.clone(),
        }
    }
}

impl Callback for CountingCallback {
    fn invoke(&self, _args: &[Value]) -> Result<Value, BoxError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(Value::Unit)
    }
}

/// A callback that always returns [`Value::Stop`], halting the dispatch
/// walk.
#[derive(Clone, Copy, Debug, Default)]
pub struct StopCallback;

impl Callback for StopCallback {
    fn invoke(&self, _args: &[Value]) -> Result<Value, BoxError> {
        Ok(Value::Stop)
    }
}
