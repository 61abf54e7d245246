//! Cache key identity and namespace composition
//!
//! Applications describe *what* they cache by implementing [`CacheKey`];
//! the façade decides *where* it lives in the shared store by prefixing
//! the rendered key with its namespace.

/// Capability of rendering a stable cache key
///
/// Implementors must produce a deterministic, non-empty string that
/// uniquely identifies a logical cache entry within its domain. Two
/// values with the same rendered form refer to the same entry.
pub trait CacheKey {
    /// Render this value to its stable string form
    fn cache_key(&self) -> String;
}

impl CacheKey for str {
    fn cache_key(&self) -> String {
        self.to_string()
    }
}

impl CacheKey for String {
    fn cache_key(&self) -> String {
        self.clone()
    }
}

impl<K: CacheKey + ?Sized> CacheKey for &K {
    fn cache_key(&self) -> String {
        (**self).cache_key()
    }
}

/// Compose the fully-qualified store key: `<namespace>:<rendered key>`
///
/// This is the exact string sent to the backing store, and therefore a
/// wire-level contract when multiple processes share one store.
///
/// The `:` separator is not escaped in either part. A rendered key that
/// itself contains `:` can collide with a different (namespace, key)
/// pair; callers are responsible for choosing non-ambiguous keys.
pub fn qualify<K: CacheKey + ?Sized>(namespace: &str, key: &K) -> String {
    format!("{}:{}", namespace, key.cache_key())
}
