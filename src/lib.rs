#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # nscache
//!
//! Namespaced cache-access façade over a remote key/value store.
//!
//! ## Architecture
//!
//! ```text
//! CacheManager<S>              <- namespace + error classification
//!   └── S: CacheStore            <- backend capability trait
//!         ├── RedisStore           <- ConnectionManager-based async Redis
//!         └── MemoryStore          <- in-process map for tests/dev
//! ```
//!
//! Every logical key is prefixed with the façade's namespace
//! (`<namespace>:<key>`) before it reaches the store, so multiple
//! tenants can share one store without colliding. Backend outcomes are
//! mapped onto a small error vocabulary ([`CacheError`]): a miss is
//! [`CacheError::KeyNotFound`] and everything else is an infrastructure
//! fault.
//!
//! The façade is deliberately thin: no retries, no local caching, no
//! batching. Each operation is a single round trip; deadlines and
//! cancellation belong to the caller.
//!
//! ## Usage
//!
//! ```no_run
//! use nscache::{CacheManager, RedisStore};
//! use std::time::Duration;
//!
//! # async fn demo() -> nscache::CacheResult<()> {
//! let store = RedisStore::connect("redis://localhost:6379").await?;
//! let cache = CacheManager::new("svc", store)?;
//!
//! cache.set("exists_key", "value", Duration::from_secs(60)).await?;
//! let value = cache.get("exists_key").await?;
//! cache.del("exists_key").await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod errors;
pub mod key;
pub mod manager;
pub mod stores;
pub mod traits;

pub use config::RedisConfig;
pub use errors::{BoxError, CacheError, CacheResult};
pub use key::{qualify, CacheKey};
pub use manager::CacheManager;
pub use stores::MemoryStore;
pub use traits::CacheStore;

#[cfg(feature = "store-redis")]
pub use stores::RedisStore;
