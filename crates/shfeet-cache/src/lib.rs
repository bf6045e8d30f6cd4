//! Type-safe key-value persistence for the SHFeet storefront.
//!
//! The cart engine persists its line list as JSON under a single key and
//! reads it back once at startup. This crate provides the [`Cache`] wrapper
//! that does the JSON round trip and the [`Store`] backends it writes to:
//!
//! - [`MemoryStore`] for tests and throwaway sessions
//! - [`FileStore`] for the terminal storefront (one file per key)
//! - `SpinStore` (wasm32 only) for Spin's Key-Value Store
//!
//! # Example
//!
//! ```rust
//! use shfeet_cache::Cache;
//!
//! let cache = Cache::memory();
//! cache.set("cart", &vec![1, 2, 3]).unwrap();
//! let restored: Option<Vec<i32>> = cache.get("cart").unwrap();
//! assert_eq!(restored, Some(vec![1, 2, 3]));
//! ```

mod error;
mod kv;
mod store;

pub use error::CacheError;
pub use kv::Cache;
pub use store::{FileStore, MemoryStore, Store};

#[cfg(target_arch = "wasm32")]
pub use store::SpinStore;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError, FileStore, MemoryStore, Store};
}
