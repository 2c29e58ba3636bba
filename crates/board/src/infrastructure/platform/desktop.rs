//! Desktop platform implementations

use std::{future::Future, pin::Pin};

use crate::ports::outbound::{DocumentProvider, SleepProvider};
use crate::state::Platform;

/// Desktop sleep provider using tokio timer
#[derive(Clone, Default)]
pub struct DesktopSleepProvider;

impl SleepProvider for DesktopSleepProvider {
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>> {
        Box::pin(async move {
            tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
        })
    }
}

/// Desktop document provider (no-op for page title)
#[derive(Clone, Default)]
pub struct DesktopDocumentProvider;

impl DocumentProvider for DesktopDocumentProvider {
    fn set_page_title(&self, _title: &str) {
        // Window title is set once by the runner's desktop config
    }
}

/// Create platform services for desktop
pub fn create_platform() -> Platform {
    Platform::new(DesktopSleepProvider, DesktopDocumentProvider)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    #[tokio::test]
    async fn test_sleep_waits_at_least_requested_time() {
        let started = Instant::now();
        DesktopSleepProvider.sleep_ms(20).await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }
}
