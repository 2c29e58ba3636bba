//! Board projection
//!
//! Cards, participant rows and select options derived from one snapshot,
//! plus the fixed texts the board shows around them.

use crate::entities::{Activity, ActivityCatalog};

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER_TEXT: &str = "-- Select an activity --";

/// Question asked before a participant is removed
pub fn confirm_removal_prompt(activity: &str, email: &str) -> String {
    format!("Are you sure you want to remove {email} from {activity}?")
}

/// State of the activities list area
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ListState {
    /// Nothing fetched yet
    #[default]
    Loading,
    Loaded(ActivityCatalog),
    /// The last fetch failed; the previous snapshot is discarded
    Failed,
}

/// One participant line with its delete control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

impl ParticipantRow {
    /// Tooltip of the delete control
    pub fn remove_title(&self) -> String {
        format!("Remove {} from {}", self.email, self.activity)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParticipantList {
    /// Single placeholder row, no delete controls
    Empty,
    Rows(Vec<ParticipantRow>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub participants: ParticipantList,
}

impl ActivityCard {
    fn from_activity(name: &str, activity: &Activity) -> Self {
        let participants = if activity.has_participants() {
            ParticipantList::Rows(
                activity
                    .participants
                    .iter()
                    .map(|email| ParticipantRow {
                        activity: name.to_string(),
                        email: email.clone(),
                    })
                    .collect(),
            )
        } else {
            ParticipantList::Empty
        };

        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            participants,
        }
    }
}

/// Cards and selection options for one snapshot, in catalog order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub cards: Vec<ActivityCard>,
    pub options: Vec<String>,
}

impl BoardView {
    pub fn project(catalog: &ActivityCatalog) -> Self {
        Self {
            cards: catalog
                .iter()
                .map(|(name, activity)| ActivityCard::from_activity(name, activity))
                .collect(),
            options: catalog.names().map(str::to_string).collect(),
        }
    }

    /// Projection of a list state; no cards and no options unless loaded
    pub fn for_state(state: &ListState) -> Self {
        match state {
            ListState::Loaded(catalog) => Self::project(catalog),
            ListState::Loading | ListState::Failed => Self::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(json: serde_json::Value) -> ActivityCatalog {
        serde_json::from_value(json).unwrap()
    }

    fn delete_controls(list: &ParticipantList) -> usize {
        match list {
            ParticipantList::Empty => 0,
            ParticipantList::Rows(rows) => rows.len(),
        }
    }

    #[test]
    fn test_chess_club_scenario() {
        let view = BoardView::project(&catalog(serde_json::json!({
            "Chess Club": {"description": "d", "schedule": "s", "participants": ["a@x.com"]}
        })));

        assert_eq!(view.cards.len(), 1);
        let card = &view.cards[0];
        assert_eq!(card.name, "Chess Club");
        assert_eq!(card.description, "d");
        assert_eq!(card.schedule, "s");
        assert_eq!(
            card.participants,
            ParticipantList::Rows(vec![ParticipantRow {
                activity: "Chess Club".to_string(),
                email: "a@x.com".to_string(),
            }])
        );
        assert_eq!(delete_controls(&card.participants), 1);
        assert_eq!(view.options, vec!["Chess Club".to_string()]);
    }

    #[test]
    fn test_cards_match_source_records() {
        let source = catalog(serde_json::json!({
            "Gym Class": {
                "description": "Physical education",
                "schedule": "Mondays, Wednesdays, Fridays",
                "participants": ["john@mergington.edu", "olivia@mergington.edu"]
            },
            "Soccer Team": {"description": "Local leagues", "schedule": "Tuesdays", "participants": []},
            "Drama Club": {"description": "Plays", "schedule": "Mondays", "participants": ["x@y.z"]}
        }));

        let view = BoardView::project(&source);

        assert_eq!(view.cards.len(), source.len());
        for (card, (name, activity)) in view.cards.iter().zip(source.iter()) {
            assert_eq!(card.name, name);
            assert_eq!(card.description, activity.description);
            assert_eq!(card.schedule, activity.schedule);
            assert_eq!(delete_controls(&card.participants), activity.participant_count());
        }
        assert_eq!(view.options, vec!["Gym Class", "Soccer Team", "Drama Club"]);
    }

    #[test]
    fn test_empty_roster_renders_placeholder_only() {
        let view = BoardView::project(&catalog(serde_json::json!({
            "Art Workshop": {"description": "d", "schedule": "s", "participants": []}
        })));

        assert_eq!(view.cards[0].participants, ParticipantList::Empty);
        assert_eq!(delete_controls(&view.cards[0].participants), 0);
    }

    #[test]
    fn test_participants_keep_server_order() {
        let view = BoardView::project(&catalog(serde_json::json!({
            "Chess Club": {"description": "d", "schedule": "s", "participants": ["z@x.com", "a@x.com"]}
        })));

        match &view.cards[0].participants {
            ParticipantList::Rows(rows) => {
                let emails: Vec<&str> = rows.iter().map(|r| r.email.as_str()).collect();
                assert_eq!(emails, vec!["z@x.com", "a@x.com"]);
            }
            ParticipantList::Empty => panic!("expected participant rows"),
        }
    }

    #[test]
    fn test_row_texts() {
        let row = ParticipantRow {
            activity: "Chess Club".to_string(),
            email: "a@x.com".to_string(),
        };

        assert_eq!(row.remove_title(), "Remove a@x.com from Chess Club");
        assert_eq!(
            confirm_removal_prompt(&row.activity, &row.email),
            "Are you sure you want to remove a@x.com from Chess Club?"
        );
    }

    #[test]
    fn test_view_empty_unless_loaded() {
        assert_eq!(BoardView::for_state(&ListState::Loading), BoardView::default());
        assert_eq!(BoardView::for_state(&ListState::Failed), BoardView::default());

        let source = catalog(serde_json::json!({
            "Chess Club": {"description": "d", "schedule": "s", "participants": []}
        }));
        let loaded = BoardView::for_state(&ListState::Loaded(source.clone()));
        assert_eq!(loaded, BoardView::project(&source));
        assert_eq!(loaded.options, vec!["Chess Club"]);
    }
}
