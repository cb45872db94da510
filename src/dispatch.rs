//! Worker dispatch abstraction.
//!
//! A [`Dispatcher`] schedules one unit of work asynchronously. The provider
//! uses it for exactly one thing: handing the request pipeline plus its
//! completion callback off the caller's context. Everything after transport
//! completion runs inline on whatever context the transport resumed on.

use futures::future::BoxFuture;

/// The capability of scheduling a unit of work asynchronously.
pub trait Dispatcher: Send + Sync {
    /// Schedules the task to run; returns immediately.
    fn dispatch(&self, task: BoxFuture<'static, ()>);
}

/// Default dispatcher: spawn onto the ambient tokio runtime.
///
/// Panics outside a runtime context, as `tokio::spawn` does.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDispatcher;

impl Dispatcher for TokioDispatcher {
    fn dispatch(&self, task: BoxFuture<'static, ()>) {
        tokio::spawn(task);
    }
}
