//! Process-wide loader instance.
//!
//! Responsibilities:
//! - Hold at most one `ConfigLoader` per process.
//! - Construct it on first use and hand out shared references afterwards.
//! - Allow tests to drop it entirely.
//!
//! Invariants:
//! - First writer wins: environment selection and defaults are fixed by the
//!   first successful construction until `reset_shared_loader` is called.
//! - A later call with different defaults is logged at warn level and ignored.
//! - A failed construction leaves the slot empty, so the next call retries.
//! - Check-and-set runs under a single lock acquisition.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::error::ConfigLoaderError;
use super::resolver::ConfigLoader;
use crate::RawConfig;

static SHARED: Mutex<Option<Arc<ConfigLoader>>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<Arc<ConfigLoader>>> {
    SHARED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Get the process-wide loader, constructing it from the environment on first use.
///
/// `defaults` only take effect on the call that constructs the loader.
pub fn shared_loader(defaults: Option<RawConfig>) -> Result<Arc<ConfigLoader>, ConfigLoaderError> {
    let mut slot = slot();

    if let Some(loader) = slot.as_ref() {
        if let Some(requested) = defaults.as_ref()
            && requested != loader.defaults()
        {
            tracing::warn!(
                kept = ?loader.defaults().keys().collect::<Vec<_>>(),
                ignored = ?requested.keys().collect::<Vec<_>>(),
                "Loader already constructed; ignoring different defaults"
            );
        }
        return Ok(Arc::clone(loader));
    }

    let loader = Arc::new(ConfigLoader::from_env(defaults)?);
    *slot = Some(Arc::clone(&loader));
    Ok(loader)
}

/// Drop the process-wide loader so the next `shared_loader` call re-reads the environment.
///
/// Handles already returned stay valid; they just stop being the shared instance.
pub fn reset_shared_loader() {
    slot().take();
}
