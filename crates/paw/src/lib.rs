//! Facade crate for `Pawprint` features and shared modules.
//! Re-exports domain/kernel primitives and aggregates feature initialization.
//! Keep this crate thin: it should compose other crates, not implement business logic.
//!
//! ## Usage
//! - Add `paw` with the `server` feature to get the HTTP routes of every slice.
//! - Call `paw::init` to build the feature slices; extend it as new slices appear.

pub use paw_domain as domain;
use paw_domain::config::ApiConfig;
use paw_domain::registry::InitializedSlice;
pub use paw_kernel as kernel;

#[cfg(feature = "server")]
pub mod server {
    pub mod router {
        pub use paw_kernel::server::router::system_router;
        use paw_kernel::server::ApiState;
        use utoipa_axum::router::OpenApiRouter;

        /// Routes of every enabled feature slice.
        #[must_use]
        pub fn feature_router() -> OpenApiRouter<ApiState> {
            OpenApiRouter::new().merge(crate::features::registration::api::router())
        }
    }
}

/// Feature registry for runtime introspection.
pub mod features {
    pub use paw_registration as registration;

    /// Build-time enabled features (by Cargo feature).
    pub const ENABLED: &[&str] = &[
        #[cfg(feature = "server")]
        "server",
        "registration",
    ];

    #[must_use]
    pub fn is_enabled(name: &str) -> bool {
        ENABLED.contains(&name)
    }
}

/// Initialize all enabled features.
///
/// # Errors
/// Returns an error if any feature initialization fails.
pub fn init(config: &ApiConfig) -> Result<Vec<InitializedSlice>, Box<dyn std::error::Error>> {
    let mut slices = Vec::new();

    // Registration wizard, catalog and pets
    slices.push(features::registration::init(config)?);

    Ok(slices)
}
