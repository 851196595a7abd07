use serde::{Deserialize, Serialize};

/// The logged-in user as persisted by the session layer.
///
/// Stored as a JSON string under the fixed "user" key; the submission
/// workflow only ever reads the email.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionUser {
    pub email: String,
    #[serde(rename = "type", default = "default_user_type")]
    pub user_type: String,
}

fn default_user_type() -> String {
    "Employee".to_string()
}
