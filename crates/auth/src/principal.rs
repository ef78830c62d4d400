use serde::{Deserialize, Serialize};

use marquee_core::UserId;

use crate::Role;

/// The caller of an operation, as far as authorization is concerned.
///
/// Construction is decoupled from transport: the API layer derives a
/// `Principal` from verified token claims, tests build one directly. A
/// request without credentials is `Anonymous` rather than an error because
/// read operations in this domain are unrestricted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Principal {
    Anonymous,
    Authenticated { user_id: UserId, roles: Vec<Role> },
}

impl Principal {
    pub fn authenticated(user_id: UserId, roles: Vec<Role>) -> Self {
        Self::Authenticated { user_id, roles }
    }

    pub fn is_anonymous(&self) -> bool {
        matches!(self, Principal::Anonymous)
    }

    /// The authenticated user id, if any.
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Principal::Anonymous => None,
            Principal::Authenticated { user_id, .. } => Some(*user_id),
        }
    }

    /// Exact, case-sensitive role membership check.
    pub fn has_role(&self, role: &Role) -> bool {
        match self {
            Principal::Anonymous => false,
            Principal::Authenticated { roles, .. } => {
                roles.iter().any(|r| r.as_str() == role.as_str())
            }
        }
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(&Role::ADMIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_has_no_roles() {
        assert!(!Principal::Anonymous.has_role(&Role::ADMIN));
        assert!(Principal::Anonymous.user_id().is_none());
    }

    #[test]
    fn role_match_is_case_sensitive() {
        let p = Principal::authenticated(UserId::new(1), vec![Role::new("admin")]);
        assert!(!p.is_admin());
        assert!(p.has_role(&Role::new("admin")));
    }

    #[test]
    fn roles_are_not_exclusive() {
        let p = Principal::authenticated(UserId::new(1), vec![Role::ADMIN, Role::USER]);
        assert!(p.has_role(&Role::ADMIN));
        assert!(p.has_role(&Role::USER));
    }
}
