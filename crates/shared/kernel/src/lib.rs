//! Kernel utilities shared across slices: configuration loading, unambiguous
//! identifiers and, under the `server` feature, the HTTP state, error body and
//! system routes every slice plugs into.
//!
//! ## Identifiers
//! ```rust
//! # use paw_kernel::safe_nanoid;
//! let id = safe_nanoid!();
//! assert_eq!(id.len(), 12);
//!
//! let key = paw_kernel::session_key();
//! assert_eq!(key.len(), 16);
//! ```
//!
//! ## Config loading
//! ```rust,no_run
//! use paw_kernel::config::load_config;
//! use paw_kernel::domain::config::ApiConfig;
//!
//! let cfg: ApiConfig = load_config(Some("server")).unwrap_or_default();
//! ```
pub mod config;
pub mod prelude;
#[cfg(feature = "server")]
pub mod server;

// Alphabet excludes visually ambiguous characters (I, O, l, 0, 1).
pub const SAFE_ALPHABET: &[char; 55] = &[
    '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'J', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', 'a', 'b', 'c', 'd', 'e', 'f',
    'g', 'h', 'j', 'k', 'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

pub use nanoid::nanoid;
pub use paw_domain as domain;

/// Generates an unambiguous `NanoID` (12 characters unless a size is given).
#[macro_export]
macro_rules! safe_nanoid {
    () => {
        $crate::nanoid!(12, $crate::SAFE_ALPHABET)
    };
    ($size:expr) => {
        $crate::nanoid!($size, $crate::SAFE_ALPHABET)
    };
}

/// A fresh key for one registration session.
#[must_use]
pub fn session_key() -> String {
    safe_nanoid!(domain::constants::SESSION_KEY_LENGTH)
}

