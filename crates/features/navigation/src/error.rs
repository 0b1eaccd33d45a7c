use std::borrow::Cow;

/// Error types specific to the navigation feature.
#[folio_derive::folio_error]
pub enum NavigationError {
    #[error("No page sections found{}: {message}", format_context(.context))]
    NoSections { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Unknown default page{}: {message}", format_context(.context))]
    UnknownDefault { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal navigation error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
