//! Dispatch outcomes and their ordered collection.

use crate::origin::Origin;
use crate::sender::Sender;
use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// The immutable record of one successful handler match-and-invoke.
///
/// `origin` is the object that actually emitted the signal; `sender` is the
/// pattern the matching handler declared, which is not necessarily the same
/// thing. Cloning an outcome is cheap; all heavy fields are shared.
#[derive(Clone)]
pub struct Outcome {
    origin: Arc<dyn Origin>,
    sender: Sender,
    signal: String,
    value: Value,
}

impl Outcome {
    /// Create an outcome from its four fields.
    pub fn new(
        origin: Arc<dyn Origin>,
        sender: Sender,
        signal: impl Into<String>,
        value: Value,
    ) -> Self {
        Self {
            origin,
            sender,
            signal: signal.into(),
            value,
        }
    }

    /// Start building an outcome with defaulted fields
    /// (`sender = Any`, `signal = ""`, `value = Unit`).
    pub fn builder(origin: Arc<dyn Origin>) -> OutcomeBuilder {
        OutcomeBuilder {
            origin,
            sender: Sender::Any,
            signal: String::new(),
            value: Value::Unit,
        }
    }

    /// The object that emitted the signal.
    pub fn origin(&self) -> &Arc<dyn Origin> {
        &self.origin
    }

    /// The sender pattern the matching handler declared.
    pub fn sender(&self) -> &Sender {
        &self.sender
    }

    /// The signal name actually dispatched.
    pub fn signal(&self) -> &str {
        &self.signal
    }

    /// The value the callback returned.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

impl fmt::Debug for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Outcome")
            .field("origin", &self.origin.kind())
            .field("sender", &self.sender)
            .field("signal", &self.signal)
            .field("value", &self.value)
            .finish()
    }
}

/// Builder for [`Outcome`] with stated defaults.
pub struct OutcomeBuilder {
    origin: Arc<dyn Origin>,
    sender: Sender,
    signal: String,
    value: Value,
}

impl OutcomeBuilder {
    /// Set the declared sender pattern.
    pub fn sender(mut self, sender: impl Into<Sender>) -> Self {
        self.sender = sender.into();
        self
    }

    /// Set the dispatched signal name.
    pub fn signal(mut self, signal: impl Into<String>) -> Self {
        self.signal = signal.into();
        self
    }

    /// Set the returned value.
    pub fn value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    /// Build the outcome.
    pub fn build(self) -> Outcome {
        Outcome {
            origin: self.origin,
            sender: self.sender,
            signal: self.signal,
            value: self.value,
        }
    }
}

/// The ordered, append-only collection of outcomes produced by one dispatch
/// call.
///
/// A fresh collection is born empty at dispatch start, grows by append during
/// the walk, and is returned to the caller, who then owns it. The engine
/// keeps no reference to a previously returned collection, so nested or
/// later dispatches can never clobber it.
#[derive(Clone, Default)]
pub struct Outcomes {
    entries: Vec<Outcome>,
}

impl Outcomes {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an outcome, preserving order.
    pub fn append(&mut self, outcome: Outcome) {
        self.entries.push(outcome);
    }

    /// The most recently appended outcome, if any.
    pub fn last(&self) -> Option<&Outcome> {
        self.entries.last()
    }

    /// Whether the dispatch that produced this collection stopped early.
    ///
    /// Tri-state on purpose: `None` for an empty collection ("never ran" is
    /// distinct from "ran and didn't stop"), otherwise whether the last
    /// outcome's value is the stop sentinel.
    pub fn stopped(&self) -> Option<bool> {
        self.last().map(|outcome| outcome.value().is_stop())
    }

    /// Number of outcomes recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no handler matched.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over the outcomes in delivery order.
    pub fn iter(&self) -> std::slice::Iter<'_, Outcome> {
        self.entries.iter()
    }

    /// The outcome at the given delivery position.
    pub fn get(&self, index: usize) -> Option<&Outcome> {
        self.entries.get(index)
    }
}

impl fmt::Debug for Outcomes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.entries).finish()
    }
}

impl IntoIterator for Outcomes {
    type Item = Outcome;
    type IntoIter = std::vec::IntoIter<Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Outcomes {
    type Item = &'a Outcome;
    type IntoIter = std::slice::Iter<'a, Outcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
