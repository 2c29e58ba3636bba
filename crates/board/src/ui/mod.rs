use crate::ports::outbound::PlatformPort;
use dioxus::prelude::*;
use std::sync::Arc;

pub mod presentation;

/// Document and desktop window title
pub const PAGE_TITLE: &str = "Mergington High School Activities";

const BOARD_CSS: &str = include_str!("../../assets/board.css");

/// Type alias for the platform port used throughout the UI
pub type Platform = Arc<dyn PlatformPort>;

/// Hook to access the Platform from Dioxus context
pub fn use_platform() -> Platform {
    use_context::<Platform>()
}

pub fn app() -> Element {
    rsx! {
        AppRoot {}
    }
}

#[component]
fn AppRoot() -> Element {
    // Must be created inside an active Dioxus runtime.
    use_context_provider(presentation::state::BoardState::new);

    let platform = use_platform();
    use_hook(move || platform.set_page_title(PAGE_TITLE));

    rsx! {
        style { "{BOARD_CSS}" }
        presentation::components::ActivityBoard {}
    }
}
