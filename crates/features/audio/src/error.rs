use std::borrow::Cow;

/// Error types specific to the audio feature.
#[folio_derive::folio_error]
pub enum AudioError {
    /// The host refused to start playback (autoplay policy, decoding failure, ...).
    #[error("Playback rejected{}: {message}", format_context(.context))]
    Playback { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Audio source missing{}: {message}", format_context(.context))]
    MissingSource { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal audio error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
