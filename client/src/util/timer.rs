//! Delay source for simulated backend latency.
//!
//! The browser build waits on a `setTimeout`-backed future; other builds
//! resolve immediately since nothing on the server ever awaits a sign-in.

#[cfg(test)]
#[path = "timer_test.rs"]
mod timer_test;

use std::future::Future;
use std::time::Duration;

/// Something that can wait for a duration without blocking the UI thread.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

/// `gloo-timers` in the browser, immediate elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

impl Timer for BrowserTimer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "hydrate")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}
