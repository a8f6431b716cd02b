//! Callback trait for handler bodies.

use crate::error::BoxError;
use crate::value::Value;
use std::sync::Arc;

/// The invocable body of a handler.
///
/// Callbacks take an explicit argument vector of opaque [`Value`]s and return
/// one [`Value`], or a fault. The engine does not catch faults: an `Err`
/// propagates synchronously out of the dispatch that invoked the callback.
///
/// The trait is object-safe so callbacks can be stored behind
/// `Arc<dyn Callback>` in the registry. A blanket implementation covers plain
/// functions and closures:
///
/// ```rust,ignore
/// fn echo(args: &[Value]) -> Result<Value, BoxError> {
///     Ok(args.first().cloned().unwrap_or(Value::Unit))
/// }
///
/// manager.register(Sender::Any, "greet", echo)?;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a signal `Callback`",
    label = "missing `Callback` implementation",
    note = "Callbacks are `Fn(&[Value]) -> Result<Value, BoxError>` or types implementing `Callback::invoke`."
)]
pub trait Callback: Send + Sync + 'static {
    /// Invoke the callback with the dispatch argument vector.
    fn invoke(&self, args: &[Value]) -> Result<Value, BoxError>;
}

// Blanket impl for closures and fn items
impl<F> Callback for F
where
    F: Fn(&[Value]) -> Result<Value, BoxError> + Send + Sync + 'static,
{
    fn invoke(&self, args: &[Value]) -> Result<Value, BoxError> {
        (self)(args)
    }
}

// Allow a shared callback to be registered where `impl Callback` is expected.
impl Callback for Arc<dyn Callback> {
    fn invoke(&self, args: &[Value]) -> Result<Value, BoxError> {
        (**self).invoke(args)
    }
}
