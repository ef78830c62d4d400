//! User identity model and creation rules.

use serde::{Deserialize, Serialize};

use marquee_core::{DomainError, DomainResult, Entity, UserId};

use crate::Role;

/// A stored user together with its resolved role set.
///
/// Role membership is a set-valued relation `{(user_id, role_id)}` owned by
/// the identity store; this struct is the flattened view handlers work with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub user_name: String,
    pub password_hash: String,
    pub roles: Vec<Role>,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A request to create a user, before the store has seen it.
///
/// Role existence is the store's concern (it can check atomically); this type
/// owns the shape checks. An admin-created user must name at least one role,
/// and every named role must already exist or the whole creation fails with
/// no partial assignment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub user_name: String,
    pub password: String,
    pub roles: Vec<String>,
}

impl NewUser {
    pub fn validate(&self) -> DomainResult<()> {
        if self.user_name.trim().is_empty() {
            return Err(DomainError::validation("user name cannot be empty"));
        }
        if self.password.trim().is_empty() {
            return Err(DomainError::validation("password cannot be empty"));
        }
        if self.roles.is_empty() {
            return Err(DomainError::validation("at least one role is required"));
        }
        if self.roles.iter().any(|r| r.trim().is_empty()) {
            return Err(DomainError::validation("role names cannot be empty"));
        }
        Ok(())
    }
}
