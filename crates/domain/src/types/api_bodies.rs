use serde::de::IgnoredAny;
use serde::Deserialize;

/// Body of a successful signup: `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SignupReceipt {
    pub message: String,
}

/// Body of a rejected request: `{ "detail": ... }`
///
/// `detail` is usually a string. Validation failures can send a list
/// instead, which is not shown to the user.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    detail: Option<Detail>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Detail {
    Text(String),
    Other(IgnoredAny),
}

impl ErrorBody {
    /// The detail text, if the server sent one as a string
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(Detail::Text(text)) => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "Activity not found"}"#).unwrap();
        assert_eq!(body.into_detail(), Some("Activity not found".to_string()));
    }

    #[test]
    fn test_missing_detail() {
        let body: ErrorBody = serde_json::from_str(r#"{"error": "nope"}"#).unwrap();
        assert_eq!(body.into_detail(), None);
    }

    #[test]
    fn test_structured_detail_is_not_text() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"detail": [{"loc": ["query", "email"], "msg": "field required"}]}"#,
        )
        .unwrap();
        assert_eq!(body.into_detail(), None);
    }
}
