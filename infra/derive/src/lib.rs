#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Attribute macros shared by every crate of the workspace. They remove the
//! boilerplate of error enums, feature slice handles and HTTP DTOs so each
//! slice only declares what is specific to it.
//!
//! The examples below are `ignore`d because a proc-macro crate cannot use its
//! own macros; the consuming crates' tests exercise them instead.

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemFn, ItemStruct, parse_macro_input};

/// Declares a DTO exchanged over the HTTP API.
///
/// * Adds `Debug`, `Serialize` and `Deserialize` unless already derived.
/// * Adds `utoipa::ToSchema` when the consuming crate enables its `server` feature.
/// * Applies `#[serde(rename_all = "camelCase")]` unless overridden with
///   `rename_all = "..."`.
/// * Applies `#[serde(deny_unknown_fields)]` unless disabled with
///   `deny_unknown_fields = false`.
///
/// ```rust,ignore
/// #[paw_derive::api_model(deny_unknown_fields = false)]
/// pub struct StepOneForm {
///     pub name: String,
///     pub type_id: u32,
/// }
/// ```
#[proc_macro_attribute]
pub fn api_model(attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::api::expand_api_model(attr.into(), input).into()
}

/// Marks an Axum handler as an `OpenAPI` operation.
///
/// Arguments are forwarded verbatim to `utoipa::path` (only under the `server`
/// feature of the consuming crate), so `get`, `path = "..."`, `params(...)`,
/// `responses(...)` and `tag = "..."` all work as documented by `utoipa`.
///
/// ```rust,ignore
/// #[paw_derive::api_handler(
///     get,
///     path = "/pet-types",
///     responses((status = OK, body = [PetTypeView])),
///     tag = CATALOG_TAG,
/// )]
/// pub async fn list_pet_types(
///     State(state): State<ApiState>,
/// ) -> ApiResult<Json<Vec<PetTypeView>>> {
///     // ...
/// }
/// ```
#[proc_macro_attribute]
pub fn api_handler(args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemFn);
    macros::api::expand_api_handler(args.into(), input).into()
}

/// Turns an enum into a workspace error type.
///
/// # Generated items
///
/// * `#[derive(Debug, thiserror::Error)]` when not already present.
/// * A `<Name>Ext` trait with `.context(..)` for `Result<T, Name>`, and for
///   `Result<T, Source>` of every variant that wraps a `source`.
/// * `From<Source>` for every variant that wraps a `source`.
/// * `From<&'static str>` and `From<String>` when an `Internal { message, .. }`
///   variant exists.
/// * A private `format_context` helper used by the `#[error(...)]` strings,
///   so declare at most one such enum per module.
///
/// # Rules
///
/// * Only enums with named-field variants are accepted.
/// * A `context` field must be typed `Option<Cow<'static, str>>`.
/// * A variant wrapping a `source` must also carry a `context` field.
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[paw_derive::paw_error]
/// pub enum StoreError {
///     #[error("Conflict{}: {message}", format_context(.context))]
///     Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
///
///     #[error("Internal store error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn load() -> Result<(), StoreError> {
///     Err("lock poisoned".into())
/// }
/// ```
#[proc_macro_attribute]
pub fn paw_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand_error(input).into()
}

/// Turns a struct into a shareable feature slice handle.
///
/// The annotated struct is renamed to `<Name>Inner`; `<Name>` becomes a cheap
/// `Arc` wrapper that derefs to it and implements
/// `paw_kernel::domain::registry::FeatureSlice` so it can be registered in the
/// server state.
///
/// ```rust,ignore
/// #[paw_derive::paw_slice]
/// pub struct Registration {
///     service: RegistrationService,
/// }
///
/// let slice = Registration::new(RegistrationInner { service });
/// ```
#[proc_macro_attribute]
pub fn paw_slice(_attr: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as ItemStruct);
    macros::slice::expand_slice(input).into()
}
