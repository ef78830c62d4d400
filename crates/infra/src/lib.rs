//! `marquee-infra` — storage collaborators behind traits.
//!
//! The domain treats both stores as external collaborators: plain CRUD
//! primitives keyed by id, consistency delegated to the store (last-write-wins
//! between concurrent updates is acceptable, there is no optimistic
//! concurrency token). The in-memory implementations here back dev and tests.

pub mod identity_store;
pub mod seed;
pub mod theater_store;

pub use identity_store::{IdentityStore, InMemoryIdentityStore};
pub use theater_store::{InMemoryTheaterStore, TheaterStore};
