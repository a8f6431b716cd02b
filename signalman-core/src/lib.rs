//! # signalman-core
//!
//! Core types for the Signalman signal dispatch mediator.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that defines origins and callbacks without needing the full
//! `signalman` dispatch engine.
//!
//! # Building Blocks
//!
//! Dispatch is built from a handful of small pieces, leaves first:
//!
//! - [`Value`] — the opaque payload flowing through callbacks, with a
//!   reserved [`Value::Stop`] sentinel that ends a dispatch walk early.
//! - [`Origin`] — the trait implemented by objects that emit signals.
//!   Origins report a `kind` name and may answer for ancestor kinds to get
//!   polymorphic sender matching.
//! - [`Sender`] / [`SignalPattern`] — the two filters a handler declares:
//!   which origins it cares about (instance, kind, or wildcard) and which
//!   signal names it responds to (exact or wildcard).
//! - [`Callback`] — the invocable body of a handler, taking an argument
//!   vector and returning a [`Value`] or a fault.
//! - [`Handler`] — an immutable (sender, signal, callback) rule exposing a
//!   single match-and-invoke operation, [`Handler::attempt`].
//! - [`Outcome`] / [`Outcomes`] — the record of one successful
//!   match-and-invoke, and the ordered collection of records produced by one
//!   dispatch call.
//!
//! # Error Types
//!
//! - [`SignalError`] - Top-level error type
//! - [`RegisterError`] - Registration-time errors
//! - [`DispatchError`] - Dispatch-time errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod callback;
mod error;
mod handler;
mod origin;
mod outcome;
mod sender;
mod signal;
mod value;

// Re-exports
pub use callback::Callback;
pub use error::{BoxError, DispatchError, RegisterError, SignalError};
pub use handler::{Handler, HandlerBuilder};
pub use origin::{Origin, same_instance};
pub use outcome::{Outcome, OutcomeBuilder, Outcomes};
pub use sender::Sender;
pub use signal::{SignalPattern, WILDCARD};
pub use value::Value;
