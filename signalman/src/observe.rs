//! Observation helpers built on the meta-dispatch signal.

use crate::manager::{Manager, RESULT_SIGNAL};
use signalman_core::{BoxError, Outcome, RegisterError, Sender, Value};

/// Register an observer that logs every outcome the manager produces.
///
/// Subscribes to [`RESULT_SIGNAL`], so the callback runs once per outcome of
/// every ordinary dispatch, outside the primary result set. Useful as a
/// ready-made audit hook; for custom instrumentation, register your own
/// callback on [`RESULT_SIGNAL`] the same way.
pub fn register_tracing_observer(manager: &Manager) -> Result<(), RegisterError> {
    manager.register(Sender::Any, RESULT_SIGNAL, log_outcome)
}

fn log_outcome(args: &[Value]) -> Result<Value, BoxError> {
    if let Some(outcome) = args.first().and_then(|arg| arg.downcast_ref::<Outcome>()) {
        tracing::debug!(
            signal = outcome.signal(),
            origin = outcome.origin().kind(),
            stop = outcome.value().is_stop(),
            "handler produced outcome"
        );
    }
    Ok(Value::Unit)
}
