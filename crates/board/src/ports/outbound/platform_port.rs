//! PlatformPort - Unified platform services interface
//!
//! This trait lets the UI layer use platform services without knowing the
//! concrete `Platform` container.
//!
//! Use via Dioxus context: `use_context::<Arc<dyn PlatformPort>>()`

use std::{future::Future, pin::Pin};

pub trait PlatformPort: Send + Sync {
    /// Sleep for the given number of milliseconds
    fn sleep_ms(&self, ms: u64) -> Pin<Box<dyn Future<Output = ()> + 'static>>;

    /// Set the browser page title (no-op on desktop)
    fn set_page_title(&self, title: &str);
}
