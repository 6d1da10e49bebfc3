//! Rate limiting middleware using token bucket algorithm.

use axum::Router;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer,
    governor::GovernorConfigBuilder,
    key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor},
};

use crate::state::AppState;

/// Rate limit profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Public pages (login): 2 requests per second, burst of 100.
    Public,
    /// Pages behind the login guard: 1 request per second, burst of 10.
    Secure,
}

impl Tier {
    fn limits(self) -> (u64, u32) {
        match self {
            Tier::Public => (2, 100),
            Tier::Secure => (1, 10),
        }
    }
}

/// Applies a per-IP rate limiter of the given tier to `router`.
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// - `behind_proxy = false`: the socket peer address (requires
///   `into_make_service_with_connect_info`)
/// - `behind_proxy = true`: `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
///   falling back to the peer address
///
/// # Example
///
/// ```rust,ignore
/// let pages = rate_limit::apply(web::routes::public_routes(), false, Tier::Public);
/// ```
pub fn apply(router: Router<AppState>, behind_proxy: bool, tier: Tier) -> Router<AppState> {
    if behind_proxy {
        router.layer(governor_layer(SmartIpKeyExtractor, tier))
    } else {
        router.layer(governor_layer(PeerIpKeyExtractor, tier))
    }
}

fn governor_layer<K>(
    key_extractor: K,
    tier: Tier,
) -> GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>
where
    K: KeyExtractor,
{
    let (per_second, burst_size) = tier.limits();
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(key_extractor)
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit periods and burst sizes are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}
