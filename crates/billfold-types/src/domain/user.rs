use serde::{Deserialize, Serialize};

/// Role flag stored with the logged-in user. The client reads it but never
/// enforces authorization beyond routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Employee,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Employee => "Employee",
            UserRole::Admin => "Admin",
        }
    }
}

/// The logged-in user, as persisted by the session collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "type")]
    pub role: UserRole,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_deserializes_from_session_shape() {
        let user: User =
            serde_json::from_str(r#"{"type":"Employee","email":"employee@test.tld"}"#).unwrap();
        assert_eq!(user.role, UserRole::Employee);
        assert_eq!(user.email, "employee@test.tld");
    }

    #[test]
    fn test_role_round_trips_capitalized() {
        let json = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(json, r#""Admin""#);
    }
}
