//! Browser timer for the core `Sleep` seam.

use std::future::Future;
use std::time::Duration;

use mentorhub::Sleep;

/// `Sleep` backed by `setTimeout` via `gloo-timers`; resolves immediately
/// outside the browser.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSleep;

impl Sleep for BrowserSleep {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        #[cfg(feature = "csr")]
        {
            gloo_timers::future::sleep(duration)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = duration;
            std::future::ready(())
        }
    }
}
