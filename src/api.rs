//! Simulated backend round-trips.
//!
//! No server exists; every "request" is a fixed-latency timer that resolves
//! to [`Outcome::Success`]. The failure variant is the seam for a real
//! backend later; callers already match on it.

use gloo_timers::future::TimeoutFuture;

use crate::config::SIMULATED_LATENCY_MS;

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Success,
    /// Unused while the backend is simulated.
    #[allow(dead_code)]
    Failure(String),
}

async fn round_trip() -> Outcome {
    TimeoutFuture::new(SIMULATED_LATENCY_MS).await;
    Outcome::Success
}

/// "Sends" a verification code to the given phone.
pub async fn request_login_code(_phone: &str) -> Outcome {
    round_trip().await
}

/// "Checks" the entered code. Always succeeds; see module docs.
pub async fn verify_code(_code: &str) -> Outcome {
    round_trip().await
}

/// "Registers" the completed profile.
pub async fn register_profile() -> Outcome {
    round_trip().await
}
