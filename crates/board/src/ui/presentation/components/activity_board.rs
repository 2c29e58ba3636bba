//! Page layout: header, activities section, signup section

use dioxus::prelude::*;

use super::{ActivitiesList, ConfirmDialog, SignupFormView, StatusBanner};
use crate::ui::presentation::handlers::load_activities;
use crate::ui::presentation::services::use_activity_board_service;
use crate::ui::presentation::state::use_board_state;

#[component]
pub fn ActivityBoard() -> Element {
    let board = use_activity_board_service();
    let state = use_board_state();

    // Initial load, once per mount
    use_hook(move || spawn(load_activities(board, state)));

    rsx! {
        header {
            h1 { "Mergington High School" }
            h2 { "Extracurricular Activities" }
        }

        main {
            section { id: "activities-container",
                h3 { "Available Activities" }
                ActivitiesList {}
            }

            section { id: "signup-container",
                h3 { "Sign Up for an Activity" }
                SignupFormView {}
                StatusBanner {}
            }
        }

        footer {
            p { "\u{a9} 2023 Mergington High School" }
        }

        ConfirmDialog {}
    }
}
