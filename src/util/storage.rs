//! Browser `localStorage` string helpers.
//!
//! Storage may be missing or throw (private mode, disabled cookies); both
//! read as "no value" and writes are dropped.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

/// Load the raw string stored under `key`.
pub fn load(key: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(key).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save `value` under `key`.
pub fn save(key: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            log::debug!("localStorage unavailable; not saving {key}");
            return;
        };
        let _ = storage.set_item(key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
