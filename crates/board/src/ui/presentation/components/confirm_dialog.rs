//! Modal asking the user to confirm a participant removal

use dioxus::prelude::*;

use crate::ui::presentation::state::use_board_state;

#[component]
pub fn ConfirmDialog() -> Element {
    let mut state = use_board_state();

    let prompt = state
        .pending_decision
        .read()
        .as_ref()
        .map(|decision| decision.prompt.clone());

    let Some(prompt) = prompt else {
        return rsx! {};
    };

    rsx! {
        div { class: "confirm-backdrop",
            div { class: "confirm-dialog",
                p { "{prompt}" }
                div { class: "confirm-actions",
                    button {
                        r#type: "button",
                        class: "confirm-cancel",
                        onclick: move |_| state.answer_decision(false),
                        "Cancel"
                    }
                    button {
                        r#type: "button",
                        class: "confirm-accept",
                        onclick: move |_| state.answer_decision(true),
                        "OK"
                    }
                }
            }
        }
    }
}
