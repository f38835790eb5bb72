//! Browser timer adapter for the delay port.

use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;

use banter_core::ports::DelayPort;

/// Timed suspension backed by `setTimeout`.
pub struct BrowserDelay;

#[async_trait(?Send)]
impl DelayPort for BrowserDelay {
    async fn sleep_ms(&self, ms: u64) {
        TimeoutFuture::new(ms as u32).await;
    }
}
