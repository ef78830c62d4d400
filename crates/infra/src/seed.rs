//! Seed data for dev and black-box tests.

use anyhow::Context;

use marquee_auth::password::hash_password;
use marquee_theaters::{Theater, TheaterDraft};

use crate::{IdentityStore, TheaterStore};

const SEED_PASSWORD: &str = "Password123!";

/// Populate empty stores with the canonical roles, a few users, and the
/// Hammond theaters. Idempotence is not a concern: stores start empty.
pub fn seed(identity: &dyn IdentityStore, theaters: &dyn TheaterStore) -> anyhow::Result<()> {
    identity.create_role("Admin").context("seed role Admin")?;
    identity.create_role("User").context("seed role User")?;

    let hash = hash_password(SEED_PASSWORD)
        .map_err(|e| anyhow::anyhow!("seed password hash: {e}"))?;

    identity
        .create_user("galkadi", &hash, &["Admin".to_string()])
        .context("seed user galkadi")?;
    identity
        .create_user("bob", &hash, &["User".to_string()])
        .context("seed user bob")?;
    identity
        .create_user("sue", &hash, &["User".to_string()])
        .context("seed user sue")?;

    for (name, address, seat_count) in [
        ("AmStar Cinema Hammond", "1000 CM Fagan Dr, Hammond, LA 70403", 200),
        ("Celebrity Theatres Hammond", "1818 S Morrison Blvd, Hammond, LA 70403", 150),
        ("Columbia Theatre", "220 E Thomas St, Hammond, LA 70401", 850),
    ] {
        let theater = Theater::from_draft(TheaterDraft {
            name: name.to_string(),
            address: address.to_string(),
            seat_count,
            manager_id: None,
        })
        .with_context(|| format!("seed theater {name}"))?;
        theaters.insert(theater);
    }

    tracing::debug!("seeded identity and theater stores");
    Ok(())
}
