//! Signup form: email input, activity select, submit button

use dioxus::prelude::*;
use mergington_domain::view::SELECT_PLACEHOLDER_TEXT;
use mergington_domain::BoardView;

use crate::ui::presentation::handlers::submit_signup;
use crate::ui::presentation::services::use_activity_board_service;
use crate::ui::presentation::state::use_board_state;
use crate::ui::use_platform;

/// Signup form. The select is rebuilt from the current list on every render.
#[component]
pub fn SignupFormView() -> Element {
    let board = use_activity_board_service();
    let mut state = use_board_state();
    let platform = use_platform();

    let email = state.form.read().email().to_string();
    let selected = state.form.read().activity().to_string();
    let options = BoardView::for_state(&state.list.read()).options;

    rsx! {
        form {
            id: "signup-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                spawn(submit_signup(board.clone(), state, platform.clone()));
            },

            div { class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    r#type: "email",
                    id: "email",
                    required: true,
                    placeholder: "your-email@mergington.edu",
                    value: "{email}",
                    oninput: move |evt| state.set_email(evt.value()),
                }
            }

            div { class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: "{selected}",
                    onchange: move |evt| state.select_activity(evt.value()),
                    option { value: "", "{SELECT_PLACEHOLDER_TEXT}" }
                    for name in options {
                        option {
                            key: "{name}",
                            value: "{name}",
                            selected: name == selected,
                            "{name}"
                        }
                    }
                }
            }

            button { r#type: "submit", "Sign Up" }
        }
    }
}
