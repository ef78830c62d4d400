use serde::{Deserialize, Serialize};

use marquee_auth::FieldSet;
use marquee_core::{DomainError, DomainResult, Entity, TheaterId, UserId};

/// Longest permitted theater name.
pub const MAX_NAME_LEN: usize = 120;

/// A persisted theater.
///
/// # Invariants
/// - `id` is assigned by the store on creation and never changes.
/// - `name`, `address` and `seat_count` satisfy [`TheaterDraft::validate`]
///   before any mutation commits.
/// - `manager_id`, if set, references a user; referential integrity is the
///   store's concern, the entity only carries the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theater {
    pub id: TheaterId,
    pub name: String,
    pub address: String,
    pub seat_count: i32,
    pub manager_id: Option<UserId>,
}

impl Entity for Theater {
    type Id = TheaterId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// A proposed theater state, before the store has seen it.
///
/// This is both the create payload and the update payload; validation is
/// structural only and independent of who is asking (authorization is the
/// resolver's job).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TheaterDraft {
    pub name: String,
    pub address: String,
    pub seat_count: i32,
    pub manager_id: Option<UserId>,
}

impl TheaterDraft {
    /// The validation gate. Runs before any authorization-sensitive mutation
    /// is attempted.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::validation(format!(
                "name cannot exceed {MAX_NAME_LEN} characters"
            )));
        }
        if self.address.trim().is_empty() {
            return Err(DomainError::validation("address cannot be empty"));
        }
        if self.seat_count <= 0 {
            return Err(DomainError::validation("seat count must be positive"));
        }
        Ok(())
    }
}

impl Theater {
    /// Build a new theater from a validated draft. The id comes from the
    /// store on insert; until then the theater is "not yet created".
    pub fn from_draft(draft: TheaterDraft) -> DomainResult<Self> {
        draft.validate()?;
        Ok(Self {
            id: TheaterId::new(0),
            name: draft.name,
            address: draft.address,
            seat_count: draft.seat_count,
            manager_id: draft.manager_id,
        })
    }

    /// Apply an update draft, copying only the fields the resolver permits.
    ///
    /// A `manager_id` change outside the permitted set is dropped silently:
    /// the update proceeds with the prior value while the other fields still
    /// apply.
    pub fn apply(&mut self, draft: &TheaterDraft, fields: &FieldSet) {
        if fields.name {
            self.name = draft.name.clone();
        }
        if fields.address {
            self.address = draft.address.clone();
        }
        if fields.seat_count {
            self.seat_count = draft.seat_count;
        }
        if fields.manager_id {
            self.manager_id = draft.manager_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, address: &str, seat_count: i32) -> TheaterDraft {
        TheaterDraft {
            name: name.to_string(),
            address: address.to_string(),
            seat_count,
            manager_id: None,
        }
    }

    #[test]
    fn valid_draft_passes() {
        assert!(draft("Columbia Theatre", "220 E Thomas St", 850).validate().is_ok());
    }

    #[test]
    fn whitespace_name_rejected() {
        assert!(draft("   ", "somewhere", 10).validate().is_err());
    }

    #[test]
    fn name_longer_than_limit_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(draft(&long, "somewhere", 10).validate().is_err());
        let exact = "x".repeat(MAX_NAME_LEN);
        assert!(draft(&exact, "somewhere", 10).validate().is_ok());
    }

    #[test]
    fn empty_address_rejected() {
        assert!(draft("Columbia", "", 10).validate().is_err());
    }

    #[test]
    fn non_positive_seat_count_rejected() {
        assert!(draft("Columbia", "somewhere", 0).validate().is_err());
        assert!(draft("Columbia", "somewhere", -5).validate().is_err());
    }

    #[test]
    fn restricted_apply_keeps_manager() {
        let mut theater = Theater {
            id: TheaterId::new(1),
            name: "Old".to_string(),
            address: "Old Rd".to_string(),
            seat_count: 100,
            manager_id: Some(UserId::new(2)),
        };

        let update = TheaterDraft {
            name: "New".to_string(),
            address: "New Rd".to_string(),
            seat_count: 200,
            manager_id: Some(UserId::new(9)),
        };

        theater.apply(&update, &FieldSet::MANAGED);
        assert_eq!(theater.name, "New");
        assert_eq!(theater.address, "New Rd");
        assert_eq!(theater.seat_count, 200);
        // The attempted reassignment is dropped, not rejected.
        assert_eq!(theater.manager_id, Some(UserId::new(2)));
    }

    #[test]
    fn full_apply_moves_manager() {
        let mut theater = Theater {
            id: TheaterId::new(1),
            name: "Old".to_string(),
            address: "Old Rd".to_string(),
            seat_count: 100,
            manager_id: None,
        };

        let update = TheaterDraft {
            name: "Old".to_string(),
            address: "Old Rd".to_string(),
            seat_count: 100,
            manager_id: Some(UserId::new(2)),
        };

        theater.apply(&update, &FieldSet::FULL);
        assert_eq!(theater.manager_id, Some(UserId::new(2)));
    }

    #[test]
    fn from_draft_validates() {
        assert!(Theater::from_draft(draft("", "a", 1)).is_err());
        let t = Theater::from_draft(draft("Columbia", "220 E Thomas St", 850)).unwrap();
        assert!(!t.id.is_persisted());
    }
}
