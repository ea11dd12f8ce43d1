//! Date pattern caching.

use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, PoisonError};

use crate::pattern::Pattern;

/// Global cache for parsed date patterns.
static CACHE: Mutex<Option<LruCache<String, Pattern>>> = Mutex::new(None);

const CACHE_SIZE: NonZeroUsize = NonZeroUsize::MIN.saturating_add(63);

/// Get or parse a pattern, using the cache.
pub fn get_or_parse(pattern: &str) -> Pattern {
    let mut cache_guard = CACHE.lock().unwrap_or_else(PoisonError::into_inner);

    let cache = cache_guard.get_or_insert_with(|| LruCache::new(CACHE_SIZE));

    if let Some(parsed) = cache.get(pattern) {
        return parsed.clone();
    }

    log::debug!("pattern cache miss for {pattern:?}");
    let parsed = Pattern::parse(pattern);
    cache.put(pattern.to_string(), parsed.clone());
    parsed
}
