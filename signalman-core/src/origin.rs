//! Origin trait for signal-emitting objects.

use std::any::Any;
use std::sync::Arc;

/// An object that emits signals.
///
/// Origins are shared as `Arc<dyn Origin>` so that handlers scoped to a
/// specific instance can match by address identity, and so that produced
/// [`Outcome`](crate::Outcome) records can retain who emitted without
/// borrowing from the caller.
///
/// # Kind Matching
///
/// [`kind`](Origin::kind) names the runtime type of the origin, and
/// [`responds_to_kind`](Origin::responds_to_kind) decides whether the origin
/// answers to a given kind name. The default is exact-name equality;
/// implementors with a conceptual hierarchy override it to also answer for
/// ancestor kinds, which is what makes a handler registered for a base kind
/// fire for derived-kind origins:
///
/// ```rust,ignore
/// struct Dog;
///
/// impl Origin for Dog {
///     fn kind(&self) -> &'static str {
///         "Dog"
///     }
///
///     fn responds_to_kind(&self, kind: &str) -> bool {
///         kind == "Dog" || kind == "Animal"
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot emit signals",
    label = "missing `Origin` implementation",
    note = "Origins must report a `kind` name and be `Send + Sync + 'static`."
)]
pub trait Origin: Any + Send + Sync {
    /// The runtime kind name of this origin.
    fn kind(&self) -> &'static str;

    /// Whether this origin answers to the given kind name.
    ///
    /// Defaults to exact equality with [`kind`](Origin::kind). Override to
    /// also answer for ancestor kinds.
    fn responds_to_kind(&self, kind: &str) -> bool {
        self.kind() == kind
    }
}

/// Address identity of two shared origins.
///
/// Compares the allocations behind the two `Arc`s, never structural
/// equality. Two distinct instances of the same kind are never the same
/// instance.
pub fn same_instance(a: &Arc<dyn Origin>, b: &Arc<dyn Origin>) -> bool {
    Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Emitter;

    impl Origin for Emitter {
        fn kind(&self) -> &'static str {
            "Emitter"
        }
    }

    #[test]
    fn same_instance_is_address_identity() {
        let a: Arc<dyn Origin> = Arc::new(Emitter);
        let b: Arc<dyn Origin> = Arc::new(Emitter);
        assert!(same_instance(&a, &a.clone()));
        assert!(!same_instance(&a, &b));
    }

    #[test]
    fn kind_matching_defaults_to_exact_equality() {
        let emitter = Emitter;
        assert!(emitter.responds_to_kind("Emitter"));
        assert!(!emitter.responds_to_kind("Other"));
    }
}
