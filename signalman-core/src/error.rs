//! Error types for Signalman.
//!
//! This module provides a structured error hierarchy using `thiserror`:
//!
//! - [`SignalError`] - Top-level error type for all Signalman operations
//! - [`RegisterError`] - Errors raised at registration time, before any dispatch
//! - [`DispatchError`] - Errors raised while walking handlers for a dispatch

use thiserror::Error;

/// A boxed error type for dynamic error handling.
///
/// Callbacks report faults as `BoxError` so handler bodies can surface any
/// error type without the engine knowing about it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Signalman operations.
#[derive(Error, Debug)]
pub enum SignalError {
    /// An error occurred while registering a handler.
    #[error("registration error: {0}")]
    Register(#[from] RegisterError),

    /// An error occurred while dispatching a signal.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),
}

/// Errors raised at registration time, before any dispatch.
#[derive(Error, Debug)]
pub enum RegisterError {
    /// The signal name was empty.
    #[error("signal name must not be empty")]
    EmptySignal,
}

/// Errors raised while walking handlers for a dispatch.
///
/// The engine provides no isolation boundary between handlers: a callback
/// fault propagates out of `dispatch` and the partially built collection for
/// that call is lost.
#[derive(Error, Debug)]
pub enum DispatchError {
    /// A handler callback failed while handling a signal.
    #[error("callback failed while handling signal `{signal}`")]
    Callback {
        /// The signal being dispatched when the callback failed.
        signal: String,
        /// The fault raised by the callback.
        #[source]
        source: BoxError,
    },
}
