//! Credential matching against a known-user roster.

use tarjetero_core::{OwnerId, User};

/// Login form contents, as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// The resolved identity carried through every subsequent screen
/// transition as an explicit parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub owner_id: OwnerId,
    pub display_name: String,
}

/// Authentication failures, distinct from network failures (a roster that
/// could not be fetched surfaces as a store error before resolution is
/// ever attempted).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A required credential field was left empty.
    #[error("Missing credential field: {0}")]
    MissingField(&'static str),

    /// No roster entry matched both username and password.
    #[error("Invalid username or password")]
    InvalidCredentials,
}

/// Resolve credentials against the roster.
///
/// Requires an exact match on both username and password. Usernames are
/// assumed unique in the roster; if duplicates exist anyway, the first
/// match in roster order wins -- documented, not silently arbitrary. On
/// failure nothing of the submitted credentials leaks into the result.
pub fn resolve(credentials: &Credentials, roster: &[User]) -> Result<Session, SessionError> {
    if credentials.username.is_empty() {
        return Err(SessionError::MissingField("username"));
    }
    if credentials.password.is_empty() {
        return Err(SessionError::MissingField("password"));
    }

    let user = roster
        .iter()
        .find(|u| u.username == credentials.username && u.password == credentials.password)
        .ok_or(SessionError::InvalidCredentials)?;

    tracing::info!(owner_id = user.id, "Session resolved");

    Ok(Session {
        owner_id: user.id,
        display_name: user.name.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn roster() -> Vec<User> {
        vec![
            User {
                id: 1,
                username: "axel".into(),
                password: "123".into(),
                name: "Axel".into(),
                age: Some(20),
            },
            User {
                id: 2,
                username: "usuario2".into(),
                password: "securePass456".into(),
                name: "María López".into(),
                age: Some(25),
            },
        ]
    }

    fn creds(username: &str, password: &str) -> Credentials {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }

    #[test]
    fn exact_match_resolves_owner_and_display_name() {
        let session = resolve(&creds("axel", "123"), &roster()).unwrap();
        assert_eq!(session.owner_id, 1);
        assert_eq!(session.display_name, "Axel");
    }

    #[test]
    fn wrong_password_fails() {
        assert_matches!(
            resolve(&creds("axel", "1234"), &roster()),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn unknown_username_fails() {
        assert_matches!(
            resolve(&creds("nobody", "123"), &roster()),
            Err(SessionError::InvalidCredentials)
        );
    }

    #[test]
    fn empty_fields_are_rejected_before_matching() {
        assert_matches!(
            resolve(&creds("", "123"), &roster()),
            Err(SessionError::MissingField("username"))
        );
        assert_matches!(
            resolve(&creds("axel", ""), &roster()),
            Err(SessionError::MissingField("password"))
        );
    }

    #[test]
    fn duplicate_usernames_first_roster_entry_wins() {
        let mut users = roster();
        users.push(User {
            id: 3,
            username: "axel".into(),
            password: "123".into(),
            name: "Impostor".into(),
            age: None,
        });

        let session = resolve(&creds("axel", "123"), &users).unwrap();
        assert_eq!(session.owner_id, 1);
        assert_eq!(session.display_name, "Axel");
    }
}
