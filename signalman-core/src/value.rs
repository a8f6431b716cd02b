//! Opaque values flowing through signal callbacks.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An opaque payload passed to and returned from signal callbacks.
///
/// `Value` is a tagged variant rather than a bare `Any` so that two
/// out-of-band cases stay distinguishable from every legitimate payload:
///
/// - [`Value::Stop`] is the reserved stop sentinel. A handler returning it
///   ends the dispatch walk early; no later handler runs.
/// - [`Value::Unit`] is "matched and returned nothing". It is distinct from
///   a handler not matching at all, which surfaces as the absence of an
///   [`Outcome`](crate::Outcome) rather than as any `Value`.
///
/// Payloads are shared behind `Arc`, so cloning a `Value` is cheap.
#[derive(Clone, Default)]
pub enum Value {
    /// The reserved sentinel that halts further handler invocation.
    Stop,
    /// A callback that ran but had nothing to return.
    #[default]
    Unit,
    /// Arbitrary shared payload data.
    Payload(Arc<dyn Any + Send + Sync>),
}

impl Value {
    /// Wrap an arbitrary payload.
    pub fn of<T: Any + Send + Sync>(payload: T) -> Self {
        Value::Payload(Arc::new(payload))
    }

    /// Whether this value is the stop sentinel.
    pub fn is_stop(&self) -> bool {
        matches!(self, Value::Stop)
    }

    /// Borrow the payload as a concrete type, if this is a payload of that type.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self {
            Value::Payload(payload) => payload.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Stop => f.write_str("Stop"),
            Value::Unit => f.write_str("Unit"),
            Value::Payload(_) => f.write_str("Payload(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_round_trips_through_downcast() {
        let value = Value::of(String::from("hi"));
        assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("hi"));
        assert!(value.downcast_ref::<u32>().is_none());
    }

    #[test]
    fn stop_is_not_a_payload() {
        assert!(Value::Stop.is_stop());
        assert!(!Value::Unit.is_stop());
        assert!(Value::Stop.downcast_ref::<String>().is_none());
    }
}
