// ABOUTME: Process-wide cache of compiled CSS selectors.
// ABOUTME: Profile selector strings compile lazily, once, behind a read-mostly lock.

//! Compiled selector cache.
//!
//! Selector strings arrive from layout profiles at runtime, and every sweep
//! pass evaluates the same handful against every feed item. Compiling a
//! selector costs far more than matching it, so compiled selectors are
//! cached for the life of the process, keyed by their source string.
//! Invalid selectors cache as `None`; profile validation surfaces them
//! before any pass runs.

use std::collections::HashMap;
use std::sync::RwLock;

use once_cell::sync::Lazy;
use scraper::Selector;

static SELECTOR_CACHE: Lazy<RwLock<HashMap<String, Option<Selector>>>> =
    Lazy::new(|| RwLock::new(HashMap::new()));

/// Returns the compiled form of `css`, compiling and caching it on first
/// use. `None` means the selector does not parse.
pub fn get_or_compile(css: &str) -> Option<Selector> {
    {
        let cache = SELECTOR_CACHE.read().unwrap();
        if let Some(cached) = cache.get(css) {
            return cached.clone();
        }
    }

    let compiled = Selector::parse(css).ok();
    let mut cache = SELECTOR_CACHE.write().unwrap();
    // Another thread may have compiled the same string between the locks.
    if let Some(cached) = cache.get(css) {
        return cached.clone();
    }
    cache.insert(css.to_string(), compiled.clone());
    compiled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_selector_compiles_and_caches() {
        assert!(get_or_compile("ytd-rich-item-renderer").is_some());
        assert!(get_or_compile("ytd-rich-item-renderer").is_some());
    }

    #[test]
    fn test_invalid_selector_caches_as_none() {
        assert!(get_or_compile("[[[invalid").is_none());
        assert!(get_or_compile("[[[invalid").is_none());
    }

    #[test]
    fn test_attribute_selectors_compile() {
        assert!(get_or_compile("span[role='text']").is_some());
        assert!(get_or_compile("a[href]").is_some());
    }
}
