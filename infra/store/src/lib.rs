//! In-memory persistence primitives.
//!
//! * [`Table`]: a thread-safe row store with auto-increment identifiers and an
//!   optional unique secondary key per row.
//! * [`SessionCache`]: keyed, short-lived state that expires after a period of
//!   inactivity and is bounded in size.
//!
//! ```rust
//! use paw_store::{Record, SessionCache, StoreError, Table};
//! use std::time::Duration;
//!
//! #[derive(Clone)]
//! struct Kind {
//!     id: u64,
//!     name: String,
//! }
//!
//! impl Record for Kind {
//!     fn unique_key(&self) -> Option<String> {
//!         Some(self.name.to_lowercase())
//!     }
//! }
//!
//! # fn main() -> Result<(), StoreError> {
//! let kinds = Table::new("kinds");
//! let dog = kinds.insert_with(|id| Kind { id, name: "Dog".into() })?;
//! assert_eq!(dog.id, 1);
//!
//! let sessions = SessionCache::<u64>::builder().time_to_idle(Duration::from_secs(60)).build()?;
//! sessions.insert("abc", dog.id);
//! assert_eq!(sessions.get("abc"), Some(1));
//! # Ok(())
//! # }
//! ```

mod error;
mod session;
mod table;

pub use error::{StoreError, StoreErrorExt};
pub use session::{NoIdle, SessionCache, SessionCacheBuilder, WithIdle};
pub use table::{Record, Table};
