//! Per-client rate limiting using the token bucket algorithm.

use anyhow::{Context, Result};
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use std::time::Duration;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::KeyExtractor,
};

/// Creates a rate limiter allowing `per_minute` requests per client per minute.
///
/// # Limits
///
/// - **Burst**: `per_minute` requests
/// - **Replenish**: one request every `60 / per_minute` seconds
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
///
/// # Key Extraction
///
/// Clients are identified by `key_extractor`: `PeerIpKeyExtractor` uses the
/// socket peer address, `SmartIpKeyExtractor` trusts forwarding headers and
/// must only be used behind a reverse proxy.
///
/// # Errors
///
/// Returns an error if `per_minute` is zero.
///
/// # Example
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .layer(rate_limit::layer(PeerIpKeyExtractor, 10)?);
/// ```
pub fn layer<K>(
    key_extractor: K,
    per_minute: u32,
) -> Result<GovernorLayer<K, NoOpMiddleware<QuantaInstant>, axum::body::Body>>
where
    K: KeyExtractor,
{
    anyhow::ensure!(per_minute > 0, "rate limit must allow at least one request per minute");

    let replenish_every = Duration::from_millis(60_000 / u64::from(per_minute));

    let governor_conf = GovernorConfigBuilder::default()
        .key_extractor(key_extractor)
        .period(replenish_every)
        .burst_size(per_minute)
        .finish()
        .context("invalid rate limit configuration")?;

    Ok(GovernorLayer::new(Arc::new(governor_conf)))
}
