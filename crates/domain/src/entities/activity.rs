//! Activity entity and the catalog snapshot
//!
//! The server owns every activity. The client only ever holds the most
//! recent snapshot of `GET /activities`, which is replaced wholesale on
//! every reload. Key order is the order in which the server sent the keys.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::fmt;

use crate::error::DomainError;

/// A single activity record as served by the API.
///
/// Extra fields in the record (e.g. `max_participants`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Participant emails in server order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub participants: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        participants: Vec<String>,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            participants,
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn has_participants(&self) -> bool {
        !self.participants.is_empty()
    }
}

/// Immutable snapshot of the activity collection, keyed by unique name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    entries: Vec<(String, Activity)>,
}

impl ActivityCatalog {
    /// Build a catalog from ordered entries.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicateActivity` if two entries share a name.
    pub fn new(entries: Vec<(String, Activity)>) -> Result<Self, DomainError> {
        for (index, (name, _)) in entries.iter().enumerate() {
            if entries[..index].iter().any(|(seen, _)| seen == name) {
                return Err(DomainError::duplicate_activity(name.clone()));
            }
        }
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(name, activity)` pairs in server order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries
            .iter()
            .map(|(name, activity)| (name.as_str(), activity))
    }

    /// Activity names in server order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    entries.push((name, activity));
                }
                ActivityCatalog::new(entries).map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_keeps_server_key_order() {
        let json = r#"{
            "Soccer Team": {"description": "d1", "schedule": "s1", "participants": []},
            "Art Workshop": {"description": "d2", "schedule": "s2", "participants": []},
            "Chess Club": {"description": "d3", "schedule": "s3", "participants": ["a@x.com"]}
        }"#;

        let catalog: ActivityCatalog = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Soccer Team", "Art Workshop", "Chess Club"]);
    }

    #[test]
    fn test_catalog_keeps_order_through_json_value() {
        let value = serde_json::json!({
            "Zeta": {"description": "", "schedule": "", "participants": []},
            "Alpha": {"description": "", "schedule": "", "participants": []}
        });

        let catalog: ActivityCatalog = serde_json::from_value(value).unwrap();

        let names: Vec<&str> = catalog.names().collect();
        assert_eq!(names, vec!["Zeta", "Alpha"]);
    }

    #[test]
    fn test_activity_ignores_unknown_fields() {
        let json = r#"{
            "description": "Learn strategies",
            "schedule": "Fridays",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
        }"#;

        let activity: Activity = serde_json::from_str(json).unwrap();

        assert_eq!(activity.participant_count(), 2);
        assert_eq!(activity.participants[0], "michael@mergington.edu");
    }

    #[test]
    fn test_missing_or_null_participants_read_as_empty() {
        let missing: Activity =
            serde_json::from_str(r#"{"description": "d", "schedule": "s"}"#).unwrap();
        let null: Activity =
            serde_json::from_str(r#"{"description": "d", "schedule": "s", "participants": null}"#)
                .unwrap();

        assert!(!missing.has_participants());
        assert!(!null.has_participants());
    }

    #[test]
    fn test_catalog_rejects_non_object() {
        let result: Result<ActivityCatalog, _> = serde_json::from_str("[1, 2, 3]");
        assert!(result.is_err());
    }

    #[test]
    fn test_new_rejects_duplicate_names() {
        let entries = vec![
            ("Chess Club".to_string(), Activity::new("d", "s", vec![])),
            ("Chess Club".to_string(), Activity::new("d", "s", vec![])),
        ];

        assert_eq!(
            ActivityCatalog::new(entries),
            Err(DomainError::duplicate_activity("Chess Club"))
        );
    }

    #[test]
    fn test_repeated_key_in_response_is_rejected() {
        let result = serde_json::from_str::<ActivityCatalog>(
            r#"{
                "Chess Club": {"description": "d", "schedule": "s", "participants": []},
                "Chess Club": {"description": "d2", "schedule": "s2", "participants": []}
            }"#,
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_names_follow_entries() {
        let catalog = ActivityCatalog::new(vec![
            (
                "Drama Club".to_string(),
                Activity::new("Plays", "Mondays", vec!["a@x.com".to_string()]),
            ),
            ("Art Club".to_string(), Activity::new("Paint", "Fridays", vec![])),
        ])
        .unwrap();

        assert_eq!(catalog.names().collect::<Vec<_>>(), vec!["Drama Club", "Art Club"]);
    }
}
