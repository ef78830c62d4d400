//! The authorization resolver.
//!
//! Pure decision logic for theater mutations, callable independently of
//! transport or storage:
//!
//! - No IO
//! - No panics
//! - Always returns a decision value, never an error
//!
//! The update and delete policies share one primitive so the two call sites
//! cannot drift. The caller maps `Deny(Unauthenticated)` to 401,
//! `Deny(Forbidden)` to 403, and proceeds on `Allow`/`AllowRestricted`.

use serde::Serialize;

use marquee_core::UserId;

use crate::Principal;

/// Why a mutation was denied.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenyReason {
    /// No principal at all. Maps to 401, not 403.
    Unauthenticated,
    /// Authenticated but not entitled.
    Forbidden,
}

/// Which theater fields a principal may mutate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct FieldSet {
    pub name: bool,
    pub address: bool,
    pub seat_count: bool,
    pub manager_id: bool,
}

impl FieldSet {
    /// Every field, including the manager assignment. Admin-only.
    pub const FULL: FieldSet = FieldSet {
        name: true,
        address: true,
        seat_count: true,
        manager_id: true,
    };

    /// What the current manager may touch. A manager cannot reassign (or
    /// drop) ownership; an attempted `manager_id` change is ignored rather
    /// than rejected, while the other fields in the same request still apply.
    pub const MANAGED: FieldSet = FieldSet {
        name: true,
        address: true,
        seat_count: true,
        manager_id: false,
    };
}

/// Decision for an update of an existing theater.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WriteDecision {
    Allow,
    AllowRestricted(FieldSet),
    Deny(DenyReason),
}

impl WriteDecision {
    /// The mutable field set, if the write may proceed at all.
    pub fn field_set(&self) -> Option<FieldSet> {
        match self {
            WriteDecision::Allow => Some(FieldSet::FULL),
            WriteDecision::AllowRestricted(fields) => Some(*fields),
            WriteDecision::Deny(_) => None,
        }
    }
}

/// Decision for a delete. No field restriction applies to deletion, so the
/// restricted case collapses to a plain allow.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DeleteDecision {
    Allow,
    Deny(DenyReason),
}

/// Shared ownership-or-admin branching for every mutation of an existing
/// theater.
fn resolve_mutation(principal: &Principal, manager_id: Option<UserId>) -> WriteDecision {
    if principal.is_anonymous() {
        return WriteDecision::Deny(DenyReason::Unauthenticated);
    }
    if principal.is_admin() {
        return WriteDecision::Allow;
    }
    // A theater without a manager matches no non-admin principal.
    if principal.user_id() == manager_id && manager_id.is_some() {
        return WriteDecision::AllowRestricted(FieldSet::MANAGED);
    }
    WriteDecision::Deny(DenyReason::Forbidden)
}

/// Only authenticated admins may create theaters. Anonymous callers must be
/// mapped to 401 by the caller, not 403.
pub fn can_create(principal: &Principal) -> bool {
    principal.is_admin()
}

/// Read access is unrestricted in this domain. Kept for symmetry with the
/// mutation policies so a future policy change has a single seam.
pub fn can_read(_principal: &Principal) -> bool {
    true
}

/// Resolve an update of the theater owned by `manager_id` (if anyone).
pub fn resolve_write(principal: &Principal, manager_id: Option<UserId>) -> WriteDecision {
    resolve_mutation(principal, manager_id)
}

/// Resolve a delete. Identical branching to [`resolve_write`], collapsed to
/// allow/deny.
pub fn resolve_delete(principal: &Principal, manager_id: Option<UserId>) -> DeleteDecision {
    match resolve_mutation(principal, manager_id) {
        WriteDecision::Deny(reason) => DeleteDecision::Deny(reason),
        WriteDecision::Allow | WriteDecision::AllowRestricted(_) => DeleteDecision::Allow,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn admin() -> Principal {
        Principal::authenticated(UserId::new(1), vec![Role::ADMIN])
    }

    fn user(id: i64) -> Principal {
        Principal::authenticated(UserId::new(id), vec![Role::USER])
    }

    #[test]
    fn only_admin_creates() {
        assert!(can_create(&admin()));
        assert!(!can_create(&user(2)));
        assert!(!can_create(&Principal::Anonymous));
    }

    #[test]
    fn reads_are_unrestricted() {
        assert!(can_read(&Principal::Anonymous));
        assert!(can_read(&user(2)));
    }

    #[test]
    fn anonymous_write_is_unauthenticated() {
        let decision = resolve_write(&Principal::Anonymous, Some(UserId::new(2)));
        assert_eq!(decision, WriteDecision::Deny(DenyReason::Unauthenticated));
    }

    #[test]
    fn admin_writes_any_field_of_any_theater() {
        for manager in [None, Some(UserId::new(7))] {
            let decision = resolve_write(&admin(), manager);
            assert_eq!(decision, WriteDecision::Allow);
            assert_eq!(decision.field_set(), Some(FieldSet::FULL));
        }
    }

    #[test]
    fn manager_gets_restricted_field_set() {
        let decision = resolve_write(&user(2), Some(UserId::new(2)));
        let fields = decision.field_set().unwrap();
        assert!(fields.name && fields.address && fields.seat_count);
        assert!(!fields.manager_id);
    }

    #[test]
    fn non_manager_is_forbidden() {
        let decision = resolve_write(&user(3), Some(UserId::new(2)));
        assert_eq!(decision, WriteDecision::Deny(DenyReason::Forbidden));
        assert_eq!(
            resolve_delete(&user(3), Some(UserId::new(2))),
            DeleteDecision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn unmanaged_theater_matches_no_non_admin() {
        let decision = resolve_write(&user(2), None);
        assert_eq!(decision, WriteDecision::Deny(DenyReason::Forbidden));
    }

    #[test]
    fn delete_mirrors_write_branching() {
        assert_eq!(resolve_delete(&admin(), None), DeleteDecision::Allow);
        assert_eq!(
            resolve_delete(&user(2), Some(UserId::new(2))),
            DeleteDecision::Allow
        );
        assert_eq!(
            resolve_delete(&Principal::Anonymous, Some(UserId::new(2))),
            DeleteDecision::Deny(DenyReason::Unauthenticated)
        );
    }

    #[test]
    fn admin_role_does_not_imply_user_or_vice_versa() {
        // "admin" (lowercase) is a different role; exact match only.
        let p = Principal::authenticated(UserId::new(4), vec![Role::new("admin")]);
        assert_eq!(
            resolve_write(&p, Some(UserId::new(9))),
            WriteDecision::Deny(DenyReason::Forbidden)
        );
    }

    #[test]
    fn decisions_are_idempotent() {
        let p = user(2);
        let manager = Some(UserId::new(2));
        assert_eq!(resolve_write(&p, manager), resolve_write(&p, manager));
        assert_eq!(resolve_delete(&p, manager), resolve_delete(&p, manager));
    }
}
