//! Bounded waits for browser futures.
//!
//! The timer is a plain function pointer so callers can swap the browser
//! clock for one that fires immediately.

#[cfg(test)]
#[path = "timeout_test.rs"]
mod timeout_test;

use std::future::Future;
use std::pin::Pin;

use futures::future::{Either, select};

/// Future that resolves once the deadline has passed.
pub type Timer = Pin<Box<dyn Future<Output = ()>>>;

/// Builds a `Timer` for a duration in milliseconds.
pub type TimerFn = fn(u32) -> Timer;

/// Browser clock via `gloo-timers`. Outside the browser there is no event
/// loop to drive it, so the timer never fires.
pub fn browser_timer(timeout_ms: u32) -> Timer {
    #[cfg(feature = "hydrate")]
    {
        Box::pin(gloo_timers::future::TimeoutFuture::new(timeout_ms))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = timeout_ms;
        Box::pin(futures::future::pending())
    }
}

/// Await `future` until `timer` fires; `None` means the timer won.
pub async fn with_timeout<F: Future>(future: F, timer: Timer) -> Option<F::Output> {
    let future = std::pin::pin!(future);
    match select(future, timer).await {
        Either::Left((output, _)) => Some(output),
        Either::Right(((), _)) => None,
    }
}
