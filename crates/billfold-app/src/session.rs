use billfold_types::{User, UserRole};

/// The logged-in user, passed into controllers at construction.
///
/// Wraps the persisted user record so controllers never reach into the
/// session storage collaborator themselves.
#[derive(Debug, Clone)]
pub struct Session {
    user: User,
}

impl Session {
    pub fn new(user: User) -> Self {
        Self { user }
    }

    pub fn email(&self) -> &str {
        &self.user.email
    }

    pub fn role(&self) -> UserRole {
        self.user.role
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_exposes_user_identity() {
        let session = Session::new(User {
            role: UserRole::Employee,
            email: "employee@test.tld".to_string(),
        });
        assert_eq!(session.email(), "employee@test.tld");
        assert_eq!(session.role(), UserRole::Employee);
    }
}
