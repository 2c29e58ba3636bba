//! Status message area

use dioxus::prelude::*;

use crate::ui::presentation::state::use_board_state;

/// The single status message area; hidden when no message is live
#[component]
pub fn StatusBanner() -> Element {
    let state = use_board_state();

    let (class, text) = match state.status.read().visible() {
        Some(message) => (message.kind().css_class(), message.text().to_string()),
        None => ("hidden", String::new()),
    };

    rsx! {
        div { id: "message", class: "{class}", "{text}" }
    }
}
