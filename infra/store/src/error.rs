use std::borrow::Cow;

/// A specialized [`StoreError`] enum of this crate.
#[paw_derive::paw_error]
pub enum StoreError {
    /// A unique key is already taken by another record.
    #[error("Unique constraint violated{}: {message}", format_context(.context))]
    Conflict { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Builder settings that cannot produce a working store.
    #[error("Invalid store configuration{}: {message}", format_context(.context))]
    InvalidConfiguration { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal store error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
