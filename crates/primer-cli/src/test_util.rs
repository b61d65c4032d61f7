//! Shared test helpers.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Serialize tests that mutate process environment variables.
///
/// Recovers from poisoning so one failed test does not cascade.
pub fn lock_env() -> MutexGuard<'static, ()> {
    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}
