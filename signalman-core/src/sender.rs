//! Sender patterns for scoping handlers to origins.

use crate::origin::{Origin, same_instance};
use crate::signal::WILDCARD;
use std::fmt;
use std::sync::Arc;

/// The origin filter a handler declares.
///
/// Matching switches on the variant:
///
/// - [`Sender::Any`] accepts every origin.
/// - [`Sender::Kind`] accepts any origin whose
///   [`responds_to_kind`](Origin::responds_to_kind) answers for the name,
///   which is how a handler registered for a base kind also fires for
///   derived-kind origins.
/// - [`Sender::Instance`] accepts exactly one shared instance, by address
///   identity. It never honors structural equality and never honors kind
///   hierarchies: a different instance of the same kind does not match.
#[derive(Clone)]
pub enum Sender {
    /// Match origins of any kind.
    Any,
    /// Match any origin answering to this kind name.
    Kind(String),
    /// Match exactly this shared instance.
    Instance(Arc<dyn Origin>),
}

impl Sender {
    /// Whether this pattern accepts the given origin.
    pub fn matches(&self, origin: &Arc<dyn Origin>) -> bool {
        match self {
            Sender::Any => true,
            Sender::Kind(kind) => origin.responds_to_kind(kind),
            Sender::Instance(instance) => same_instance(instance, origin),
        }
    }
}

impl fmt::Debug for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::Any => f.write_str("Any"),
            Sender::Kind(kind) => write!(f, "Kind({kind})"),
            Sender::Instance(instance) => write!(f, "Instance({})", instance.kind()),
        }
    }
}

impl From<&str> for Sender {
    fn from(kind: &str) -> Self {
        if kind == WILDCARD {
            Sender::Any
        } else {
            Sender::Kind(kind.to_string())
        }
    }
}

impl From<String> for Sender {
    fn from(kind: String) -> Self {
        Sender::from(kind.as_str())
    }
}

impl From<Arc<dyn Origin>> for Sender {
    fn from(instance: Arc<dyn Origin>) -> Self {
        Sender::Instance(instance)
    }
}

impl<T: Origin> From<Arc<T>> for Sender {
    fn from(instance: Arc<T>) -> Self {
        Sender::Instance(instance)
    }
}
