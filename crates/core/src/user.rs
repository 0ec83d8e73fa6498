use crate::types::OwnerId;

/// An identity principal from the roster.
///
/// Created by the external authentication collaborator; read-only here and
/// valid for one login session.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: OwnerId,
    pub username: String,
    pub password: String,
    /// Display name, e.g. shown on the profile screen.
    pub name: String,
    /// Display-only; the roster may omit it.
    pub age: Option<u32>,
}
