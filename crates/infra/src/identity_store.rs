use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, RwLock};

use marquee_auth::{Role, User};
use marquee_core::{DomainError, DomainResult, RoleId, UserId};

/// Identity collaborator: users, roles, and the user↔role assignment.
///
/// Role membership is a set-valued relation `{(user_id, role_id)}` with a
/// uniqueness constraint: no duplicate pair, no inheritance.
pub trait IdentityStore: Send + Sync {
    fn create_role(&self, name: &str) -> DomainResult<RoleId>;
    fn role_exists(&self, name: &str) -> bool;

    /// Create a user with an already-hashed password and the given role
    /// names. Every named role must exist; if any is unknown the whole
    /// creation fails and nothing is stored.
    fn create_user(
        &self,
        user_name: &str,
        password_hash: &str,
        role_names: &[String],
    ) -> DomainResult<User>;

    fn get(&self, id: UserId) -> Option<User>;
    fn find_by_name(&self, user_name: &str) -> Option<User>;

    /// Resolved role set for a user ("what are U's roles").
    fn roles_of(&self, id: UserId) -> Vec<Role>;
}

impl<S> IdentityStore for Arc<S>
where
    S: IdentityStore + ?Sized,
{
    fn create_role(&self, name: &str) -> DomainResult<RoleId> {
        (**self).create_role(name)
    }

    fn role_exists(&self, name: &str) -> bool {
        (**self).role_exists(name)
    }

    fn create_user(
        &self,
        user_name: &str,
        password_hash: &str,
        role_names: &[String],
    ) -> DomainResult<User> {
        (**self).create_user(user_name, password_hash, role_names)
    }

    fn get(&self, id: UserId) -> Option<User> {
        (**self).get(id)
    }

    fn find_by_name(&self, user_name: &str) -> Option<User> {
        (**self).find_by_name(user_name)
    }

    fn roles_of(&self, id: UserId) -> Vec<Role> {
        (**self).roles_of(id)
    }
}

#[derive(Debug, Clone)]
struct StoredUser {
    id: UserId,
    user_name: String,
    password_hash: String,
}

#[derive(Debug, Default)]
struct IdentityTables {
    users: HashMap<UserId, StoredUser>,
    roles: HashMap<RoleId, String>,
    /// Composite key: one row per (user, role) pair.
    assignments: HashSet<(UserId, RoleId)>,
}

/// In-memory identity store for dev/tests.
#[derive(Debug)]
pub struct InMemoryIdentityStore {
    inner: RwLock<IdentityTables>,
    next_user_id: AtomicI64,
    next_role_id: AtomicI64,
}

impl Default for InMemoryIdentityStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryIdentityStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(IdentityTables::default()),
            next_user_id: AtomicI64::new(1),
            next_role_id: AtomicI64::new(1),
        }
    }

    fn user_view(tables: &IdentityTables, stored: &StoredUser) -> User {
        let mut roles: Vec<(RoleId, String)> = tables
            .assignments
            .iter()
            .filter(|(user_id, _)| *user_id == stored.id)
            .filter_map(|(_, role_id)| tables.roles.get(role_id).map(|n| (*role_id, n.clone())))
            .collect();
        roles.sort_by_key(|(role_id, _)| *role_id);

        User {
            id: stored.id,
            user_name: stored.user_name.clone(),
            password_hash: stored.password_hash.clone(),
            roles: roles.into_iter().map(|(_, name)| Role::new(name)).collect(),
        }
    }
}

impl IdentityStore for InMemoryIdentityStore {
    fn create_role(&self, name: &str) -> DomainResult<RoleId> {
        let mut tables = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("identity store poisoned"))?;
        if tables.roles.values().any(|n| n == name) {
            return Err(DomainError::conflict(format!("role '{name}' already exists")));
        }
        let id = RoleId::new(self.next_role_id.fetch_add(1, Ordering::SeqCst));
        tables.roles.insert(id, name.to_string());
        Ok(id)
    }

    fn role_exists(&self, name: &str) -> bool {
        self.inner
            .read()
            .map(|tables| tables.roles.values().any(|n| n == name))
            .unwrap_or(false)
    }

    fn create_user(
        &self,
        user_name: &str,
        password_hash: &str,
        role_names: &[String],
    ) -> DomainResult<User> {
        let mut tables = self
            .inner
            .write()
            .map_err(|_| DomainError::conflict("identity store poisoned"))?;

        if tables.users.values().any(|u| u.user_name == user_name) {
            return Err(DomainError::conflict(format!(
                "user name '{user_name}' already exists"
            )));
        }

        // Resolve every role before touching any table, so an unknown role
        // leaves no partial assignment behind.
        let mut role_ids: Vec<RoleId> = Vec::with_capacity(role_names.len());
        for name in role_names {
            let role_id = tables
                .roles
                .iter()
                .find(|(_, n)| *n == name)
                .map(|(id, _)| *id)
                .ok_or_else(|| DomainError::validation(format!("unknown role '{name}'")))?;
            if !role_ids.contains(&role_id) {
                role_ids.push(role_id);
            }
        }

        let id = UserId::new(self.next_user_id.fetch_add(1, Ordering::SeqCst));
        let stored = StoredUser {
            id,
            user_name: user_name.to_string(),
            password_hash: password_hash.to_string(),
        };
        tables.users.insert(id, stored.clone());
        for role_id in role_ids {
            tables.assignments.insert((id, role_id));
        }

        Ok(Self::user_view(&tables, &stored))
    }

    fn get(&self, id: UserId) -> Option<User> {
        let tables = self.inner.read().ok()?;
        let stored = tables.users.get(&id)?.clone();
        Some(Self::user_view(&tables, &stored))
    }

    fn find_by_name(&self, user_name: &str) -> Option<User> {
        let tables = self.inner.read().ok()?;
        let stored = tables
            .users
            .values()
            .find(|u| u.user_name == user_name)?
            .clone();
        Some(Self::user_view(&tables, &stored))
    }

    fn roles_of(&self, id: UserId) -> Vec<Role> {
        self.get(id).map(|u| u.roles).unwrap_or_default()
    }
}
