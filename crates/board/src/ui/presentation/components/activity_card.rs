//! Activity card with its participant roster

use dioxus::prelude::*;
use mergington_domain::view::NO_PARTICIPANTS_TEXT;
use mergington_domain::{ActivityCard, ParticipantList, ParticipantRow};

use crate::ui::presentation::handlers::start_removal;
use crate::ui::presentation::services::use_activity_board_service;
use crate::ui::presentation::state::use_board_state;
use crate::ui::use_platform;

#[component]
pub fn ActivityCardView(card: ActivityCard) -> Element {
    rsx! {
        div { class: "activity-card",
            h4 { "{card.name}" }
            p { "{card.description}" }
            p {
                strong { "Schedule:" }
                " {card.schedule}"
            }
            div { class: "participants-section",
                h5 { "Participants:" }
                ParticipantListView { participants: card.participants.clone() }
            }
        }
    }
}

#[component]
fn ParticipantListView(participants: ParticipantList) -> Element {
    match participants {
        ParticipantList::Empty => rsx! {
            ul { class: "participants-list",
                li { class: "no-participants", "{NO_PARTICIPANTS_TEXT}" }
            }
        },
        ParticipantList::Rows(rows) => rsx! {
            ul { class: "participants-list",
                for row in rows {
                    ParticipantItem { key: "{row.email}", row: row.clone() }
                }
            }
        },
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow) -> Element {
    let board = use_activity_board_service();
    let state = use_board_state();
    let platform = use_platform();

    let title = row.remove_title();
    let activity = row.activity.clone();
    let email = row.email.clone();

    rsx! {
        li { class: "participant-item",
            span { class: "participant-email", "{row.email}" }
            button {
                class: "delete-participant",
                r#type: "button",
                title: "{title}",
                onclick: move |_| {
                    start_removal(
                        board.clone(),
                        state,
                        platform.clone(),
                        activity.clone(),
                        email.clone(),
                    );
                },
                "\u{1f5d1}\u{fe0f}"
            }
        }
    }
}
