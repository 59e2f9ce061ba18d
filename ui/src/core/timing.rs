//! Timer utilities shared by the delayed UI continuations.

use time::OffsetDateTime;

/// Suspend the current task for `ms` milliseconds.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u64) {
    let clamped = u32::try_from(ms).unwrap_or(u32::MAX);
    gloo_timers::future::TimeoutFuture::new(clamped).await;
}

/// Suspend the current task for `ms` milliseconds.
#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(ms)).await;
}

pub fn now() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
