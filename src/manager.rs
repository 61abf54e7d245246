//! Namespaced cache façade

use crate::errors::{CacheError, CacheResult};
use crate::key::{qualify, CacheKey};
use crate::traits::CacheStore;
use std::time::Duration;
use tracing::debug;

/// Namespaced façade over a backing store
///
/// Holds an immutable namespace and a handle to an already-configured
/// store. Every operation composes the fully-qualified key
/// (`<namespace>:<key>`), performs a single round trip, and classifies
/// the outcome into the [`CacheError`] taxonomy. The façade keeps no
/// other state, so it is safe to share across tasks without locking;
/// ordering between concurrent writers to the same key is whatever the
/// backing store provides.
///
/// The store handle is borrowed in spirit: the façade never closes or
/// reconfigures it. Cancellation and deadlines are the caller's to
/// enforce (e.g. `tokio::time::timeout` around an operation); dropping
/// the returned future aborts the in-flight round trip.
#[derive(Debug, Clone)]
pub struct CacheManager<S: CacheStore> {
    store: S,
    namespace: String,
}

impl<S: CacheStore> CacheManager<S> {
    /// Create a façade for the given namespace over `store`
    ///
    /// Fails with [`CacheError::InvalidConfiguration`] when the
    /// namespace is empty. The store handle is not validated; a broken
    /// connection surfaces on first use.
    pub fn new(namespace: impl Into<String>, store: S) -> CacheResult<Self> {
        let namespace = namespace.into();
        if namespace.is_empty() {
            return Err(CacheError::InvalidConfiguration(
                "namespace is empty".to_string(),
            ));
        }

        Ok(Self { store, namespace })
    }

    /// The namespace all keys of this façade live under
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Fetch the value stored under `key`
    ///
    /// Returns the raw string exactly as stored. An absent key fails
    /// with [`CacheError::KeyNotFound`]; any other store failure passes
    /// through as [`CacheError::Backend`] or [`CacheError::Timeout`].
    pub async fn get<K: CacheKey + ?Sized>(&self, key: &K) -> CacheResult<String> {
        let fq_key = self.key_string(key);
        match self.store.get(&fq_key).await? {
            Some(value) => {
                debug!(key = %fq_key, backend = self.store.backend_name(), "Cache HIT");
                Ok(value)
            }
            None => {
                debug!(key = %fq_key, backend = self.store.backend_name(), "Cache MISS");
                Err(CacheError::KeyNotFound(fq_key))
            }
        }
    }

    /// Store `value` under `key` with the given time-to-live
    ///
    /// A `ttl` of `Duration::ZERO` stores the entry without expiry.
    pub async fn set<K: CacheKey + ?Sized>(
        &self,
        key: &K,
        value: &str,
        ttl: Duration,
    ) -> CacheResult<()> {
        let fq_key = self.key_string(key);
        self.store.set(&fq_key, value, ttl).await?;

        debug!(
            key = %fq_key,
            ttl_ms = ttl.as_millis() as u64,
            backend = self.store.backend_name(),
            "Cache SET"
        );
        Ok(())
    }

    /// Delete the entry under `key`, if present
    ///
    /// Deleting an absent key is not an error; the operation is
    /// idempotent.
    pub async fn del<K: CacheKey + ?Sized>(&self, key: &K) -> CacheResult<()> {
        let fq_key = self.key_string(key);
        let removed = self.store.delete(&fq_key).await?;

        debug!(key = %fq_key, removed = removed, backend = self.store.backend_name(), "Cache DEL");
        Ok(())
    }

    fn key_string<K: CacheKey + ?Sized>(&self, key: &K) -> String {
        qualify(&self.namespace, key)
    }
}
