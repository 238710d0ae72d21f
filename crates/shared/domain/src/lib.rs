//! # Domain Models
//!
//! Pure data shared by every crate: configuration sections, the feature slice
//! registry and the pet registration models. Dependencies stay limited to
//! `serde`, `chrono` and `strum`; anything doing I/O belongs elsewhere.

pub mod config;
pub mod constants;
pub mod models;
pub mod registry;
