//! Handler rules and their match-and-invoke operation.

use crate::callback::Callback;
use crate::error::BoxError;
use crate::origin::Origin;
use crate::outcome::Outcome;
use crate::sender::Sender;
use crate::signal::SignalPattern;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// A registered (sender pattern, signal pattern, callback) rule.
///
/// Handlers are immutable after creation and carry no identity beyond their
/// fields; many handlers may exist for the same signal, and registering the
/// same rule twice yields two invocations per dispatch.
pub struct Handler {
    sender: Sender,
    signal: SignalPattern,
    callback: Arc<dyn Callback>,
}

impl Handler {
    /// Create a handler from its three fields.
    pub fn new(
        sender: impl Into<Sender>,
        signal: impl Into<SignalPattern>,
        callback: impl Callback,
    ) -> Self {
        Self {
            sender: sender.into(),
            signal: signal.into(),
            callback: Arc::new(callback),
        }
    }

    /// Start building a handler with defaulted fields
    /// (`sender = Any`, `signal = Any`).
    pub fn builder() -> HandlerBuilder {
        HandlerBuilder::new()
    }

    /// The declared sender pattern.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// The declared signal pattern.
    pub fn signal(&self) -> &SignalPattern {
        &self.signal
    }

    /// Match-and-invoke: run the callback iff both the sender and the signal
    /// tests pass.
    ///
    /// Returns `Ok(None)` when either test fails — the explicit "did not
    /// match" indicator, distinct from a matched callback legitimately
    /// returning [`Value::Unit`]. On a match, the produced [`Outcome`]
    /// records the handler's *declared* sender, not the origin, and the
    /// signal name actually requested.
    pub fn attempt(
        &self,
        origin: &Arc<dyn Origin>,
        signal: &str,
        args: &[Value],
    ) -> Result<Option<Outcome>, BoxError> {
        if !self.sender.matches(origin) || !self.signal.matches(signal) {
            return Ok(None);
        }
        let value = self.callback.invoke(args)?;
        Ok(Some(Outcome::new(
            origin.clone(),
            self.sender.clone(),
            signal,
            value,
        )))
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("sender", &self.sender)
            .field("signal", &self.signal)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Handler`] with stated defaults: `sender = Any`,
/// `signal = Any`. The callback has no meaningful default and is supplied
/// last, completing the build.
pub struct HandlerBuilder {
    sender: Sender,
    signal: SignalPattern,
}

impl HandlerBuilder {
    /// Create a builder with all fields defaulted.
    pub fn new() -> Self {
        Self {
            sender: Sender::Any,
            signal: SignalPattern::Any,
        }
    }

    /// Set the sender pattern.
    pub fn sender(mut self, sender: impl Into<Sender>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Set the signal pattern.
    pub fn signal(mut self, signal: impl Into<SignalPattern>) -> Self {
        self.signal = signal.into();
        self
    }

    /// Supply the callback and build the handler.
    pub fn callback(self, callback: impl Callback) -> Handler {
        Handler {
            sender: self.sender,
            signal: self.signal,
            callback: Arc::new(callback),
        }
    }
}

impl Default for HandlerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
