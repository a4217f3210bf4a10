//! Per-IP rate limiting using a token bucket.
//!
//! Keys are taken from the socket peer address, so the server must be
//! started with `into_make_service_with_connect_info::<SocketAddr>()`.

use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::PeerIpKeyExtractor,
};

type IpGovernorLayer =
    GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>;

fn build(per_second: u64, burst_size: u32) -> IpGovernorLayer {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(per_second)
            .burst_size(burst_size)
            .finish()
            .expect("rate limit period and burst size are non-zero"),
    );

    GovernorLayer::new(governor_conf)
}

/// Rate limiter for vendor endpoints.
///
/// # Limits
///
/// - **Rate**: 2 requests per second
/// - **Burst**: 100 requests
///
/// Requests exceeding the limit receive `429 Too Many Requests`.
pub fn layer() -> IpGovernorLayer {
    build(2, 100)
}

/// Stricter rate limiter for registration and login.
///
/// # Limits
///
/// - **Rate**: 1 request per second
/// - **Burst**: 10 requests
///
/// Slows down credential guessing from a single address.
pub fn secure_layer() -> IpGovernorLayer {
    build(1, 10)
}
