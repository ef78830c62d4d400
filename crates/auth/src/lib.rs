//! `marquee-auth` — identity model and the pure authorization boundary.
//!
//! This crate is intentionally decoupled from HTTP and storage. The resolver
//! in [`resolve`] is callable with nothing but a principal and the manager
//! reference of the resource under mutation.

pub mod claims;
pub mod password;
pub mod principal;
pub mod resolve;
pub mod roles;
pub mod token;
pub mod user;

pub use claims::{Claims, TokenValidationError, validate_claims};
pub use principal::Principal;
pub use resolve::{
    DeleteDecision, DenyReason, FieldSet, WriteDecision, can_create, can_read, resolve_delete,
    resolve_write,
};
pub use roles::Role;
pub use token::{Hs256TokenCodec, TokenCodec, TokenError};
pub use user::{NewUser, User};
