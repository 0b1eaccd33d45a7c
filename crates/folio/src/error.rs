use folio_kernel::content::ContentError;
use folio_navigation::NavigationError;
use std::borrow::Cow;

/// Errors raised while assembling a session.
#[folio_derive::folio_error]
pub enum PortfolioError {
    #[error("Invalid content{}: {source}", format_context(.context))]
    Content { source: ContentError, context: Option<Cow<'static, str>> },

    #[error("Navigation setup failed{}: {source}", format_context(.context))]
    Navigation { source: NavigationError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal portfolio error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
