//! Store capability trait

use crate::errors::CacheResult;
use std::time::Duration;

/// Trait defining the primitives the façade requires of a backing store
///
/// Implemented by concrete backends (Redis, in-memory). All operations
/// are async and return `CacheResult` for error handling. Keys are
/// already fully qualified by the time they reach a store.
pub trait CacheStore: Send + Sync {
    /// Get a value by fully-qualified key
    ///
    /// Returns `Ok(Some(value))` on a hit, `Ok(None)` on a miss. A miss
    /// is not an error at this layer; the façade translates it.
    fn get(
        &self,
        key: &str,
    ) -> impl std::future::Future<Output = CacheResult<Option<String>>> + Send;

    /// Store a value under a fully-qualified key
    ///
    /// A `ttl` of `Duration::ZERO` means the entry never expires.
    fn set(
        &self,
        key: &str,
        value: &str,
        ttl: Duration,
    ) -> impl std::future::Future<Output = CacheResult<()>> + Send;

    /// Delete a fully-qualified key, returning the number of entries
    /// removed (zero or one); removing nothing is success
    fn delete(&self, key: &str) -> impl std::future::Future<Output = CacheResult<u64>> + Send;

    /// Name of the backend, for logging and diagnostics
    fn backend_name(&self) -> &'static str;
}
