use std::sync::Arc;

use marquee_auth::{Hs256TokenCodec, TokenCodec};
use marquee_infra::{
    IdentityStore, InMemoryIdentityStore, InMemoryTheaterStore, TheaterStore, seed::seed,
};

/// Shared collaborators handed to handlers via a request extension.
pub struct AppServices {
    pub identity: Arc<dyn IdentityStore>,
    pub theaters: Arc<dyn TheaterStore>,
    pub tokens: Arc<dyn TokenCodec>,
}

/// In-memory wiring (dev/test): stores + seed data + token codec.
pub fn build_services(jwt_secret: &str) -> AppServices {
    let identity: Arc<dyn IdentityStore> = Arc::new(InMemoryIdentityStore::new());
    let theaters: Arc<dyn TheaterStore> = Arc::new(InMemoryTheaterStore::new());

    if let Err(e) = seed(identity.as_ref(), theaters.as_ref()) {
        // Stores start empty, so a seed failure means a broken build, not a
        // recoverable runtime state.
        tracing::error!("seed failed: {e:#}");
    }

    let tokens: Arc<dyn TokenCodec> = Arc::new(Hs256TokenCodec::new(jwt_secret.as_bytes()));

    AppServices {
        identity,
        theaters,
        tokens,
    }
}
