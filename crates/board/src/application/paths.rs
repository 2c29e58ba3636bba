//! Request paths of the activities API
//!
//! Activity names and emails are encoded the way `encodeURIComponent`
//! would, so a space becomes `%20` in both the path and the query.

use url::form_urlencoded;

pub const ACTIVITIES_PATH: &str = "/activities";

/// `POST /activities/{activity}/signup?email={email}`
pub fn signup_path(activity: &str, email: &str) -> String {
    activity_action_path(activity, "signup", email)
}

/// `DELETE /activities/{activity}/unregister?email={email}`
pub fn unregister_path(activity: &str, email: &str) -> String {
    activity_action_path(activity, "unregister", email)
}

fn activity_action_path(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/{action}?email={}",
        encode_component(activity),
        encode_component(email)
    )
}

fn encode_component(raw: &str) -> String {
    // byte_serialize escapes a literal '+', so any '+' left is an encoded space.
    form_urlencoded::byte_serialize(raw.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
