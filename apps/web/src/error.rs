use folio::PortfolioError;
use std::borrow::Cow;
use wasm_bindgen::{JsCast, JsValue};

/// Errors raised while bringing the page up in the browser.
#[folio_derive::folio_error]
pub enum WebError {
    /// A browser API was missing or threw.
    #[error("Browser error{}: {message}", format_context(.context))]
    Browser { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Portfolio error{}: {source}", format_context(.context))]
    Portfolio { source: PortfolioError, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal web error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl WebError {
    pub(crate) fn browser(message: impl Into<Cow<'static, str>>) -> Self {
        Self::Browser { message: message.into(), context: None }
    }

    /// Wraps an exception thrown by a browser API.
    pub(crate) fn js(value: &JsValue, context: &'static str) -> Self {
        Self::Browser { message: js_message(value).into(), context: Some(context.into()) }
    }
}

/// Best-effort text of a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
