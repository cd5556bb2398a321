use crate::Shortcut;

use std::{future::Future, pin::Pin};

/// Future resolved by a [`PersistenceGate`].
pub type GateFuture = Pin<Box<dyn Future<Output = bool> + Send + 'static>>;

/// Caller-supplied veto over shortcut changes.
///
/// Resolving `true` lets the recorder adopt the candidate; `false` leaves it
/// untouched. The future runs on the async runtime and may take as long as
/// it needs, for example to write the binding to disk.
pub trait PersistenceGate {
    /// Ask whether `candidate` may become the recorder's value.
    fn request(&self, candidate: Option<Shortcut>) -> GateFuture;
}

impl<F, Fut> PersistenceGate for F
where
    F: Fn(Option<Shortcut>) -> Fut,
    Fut: Future<Output = bool> + Send + 'static,
{
    fn request(&self, candidate: Option<Shortcut>) -> GateFuture {
        Box::pin(self(candidate))
    }
}

/// Gate used when the caller supplies none: every change is accepted and
/// persistence is left to the environment.
pub fn accept_all() -> impl PersistenceGate {
    |_candidate: Option<Shortcut>| std::future::ready(true)
}
