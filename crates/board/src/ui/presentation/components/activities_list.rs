//! Activities list area

use dioxus::prelude::*;
use mergington_domain::view::{LOAD_FAILED_TEXT, LOADING_TEXT};
use mergington_domain::{BoardView, ListState};

use super::ActivityCardView;
use crate::ui::presentation::state::use_board_state;

/// The activities list area: loading text, failure text, or one card per activity
#[component]
pub fn ActivitiesList() -> Element {
    let state = use_board_state();

    let content = match &*state.list.read() {
        ListState::Loading => rsx! {
            p { "{LOADING_TEXT}" }
        },
        ListState::Failed => rsx! {
            p { "{LOAD_FAILED_TEXT}" }
        },
        ListState::Loaded(catalog) => {
            let cards = BoardView::project(catalog).cards;
            rsx! {
                for card in cards {
                    ActivityCardView { key: "{card.name}", card: card.clone() }
                }
            }
        }
    };

    rsx! {
        div { id: "activities-list", {content} }
    }
}
