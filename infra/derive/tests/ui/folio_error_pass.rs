use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Fmt error{}: {source}", format_context(.context))]
    Fmt {
        #[source]
        source: std::fmt::Error,
        context: Option<Cow<'static, str>>,
    },

    #[error("Missing element{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {
    let err: DemoError = std::fmt::Error.into();
    let _ = err.to_string();
}
