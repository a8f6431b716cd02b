//! # signalman - In-Process Signal Dispatch Mediator
//!
//! `signalman` decouples signal producers from consumers without shared
//! imports between them: arbitrary origin objects emit named signals, and a
//! registry of handlers — each scoped to a sender pattern and a signal name —
//! is consulted in priority order, invoked, and its outcomes collected into
//! an ordered result set.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use signalman::{BoxError, Manager, Origin, Sender, Value};
//! use std::sync::Arc;
//!
//! struct Greeter;
//!
//! impl Origin for Greeter {
//!     fn kind(&self) -> &'static str {
//!         "Greeter"
//!     }
//! }
//!
//! fn echo(args: &[Value]) -> Result<Value, BoxError> {
//!     Ok(args.first().cloned().unwrap_or(Value::Unit))
//! }
//!
//! let manager = Manager::new();
//! manager.register(Sender::Any, "greet", echo)?;
//!
//! let greeter: Arc<dyn Origin> = Arc::new(Greeter);
//! let outcomes = manager.dispatch(&greeter, "greet", &[Value::of("hi".to_string())])?;
//! assert_eq!(outcomes.len(), 1);
//! ```
//!
//! ## Cooperative Short-Circuiting
//!
//! Priority ordering plus the [`Value::Stop`] sentinel gives handlers a
//! cooperative veto mechanism: a validation handler registered at a low
//! priority can halt a pipeline before later handlers run, without any
//! handler knowing about the others.
//!
//! ## Observing Every Outcome
//!
//! Every outcome of an ordinary dispatch is re-dispatched under
//! [`RESULT_SIGNAL`] with the manager itself as the origin, giving
//! cross-cutting observers (audit, metrics) a uniform extension point. See
//! [`observe::register_tracing_observer`] for a ready-made logging observer.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod manager;
mod registry;

pub mod observe;
pub mod testing;

pub use manager::{DEFAULT_PRIORITY, Manager, ManagerBuilder, RESULT_SIGNAL};
pub use registry::RegistryView;

pub use signalman_core::{
    BoxError, Callback, DispatchError, Handler, HandlerBuilder, Origin, Outcome, OutcomeBuilder,
    Outcomes, RegisterError, Sender, SignalError, SignalPattern, Value, WILDCARD, same_instance,
};

/// Prelude module - common imports for Signalman.
///
/// # Usage
///
/// ```rust,ignore
/// use signalman::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        BoxError, Callback, DEFAULT_PRIORITY, Manager, Origin, Outcome, Outcomes, RESULT_SIGNAL,
        Sender, SignalPattern, Value,
    };
}
