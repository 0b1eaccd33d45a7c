use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum PlaybackError {
    #[error("Io error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Rejected{}: {message}", format_context(.context))]
    Rejected { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal playback error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn open_missing() -> Result<(), std::io::Error> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "ambient.mp3"))
}

#[test]
fn source_errors_convert_and_carry_context() {
    let err = open_missing().context("Loading ambient loop").unwrap_err();
    assert!(matches!(err, PlaybackError::Io { .. }));
    assert_eq!(err.to_string(), "Io error (Loading ambient loop): ambient.mp3");
}

#[test]
fn question_mark_uses_from_impl() {
    fn load() -> Result<(), PlaybackError> {
        open_missing()?;
        Ok(())
    }

    let err = load().unwrap_err();
    assert_eq!(err.to_string(), "Io error: ambient.mp3");
}

#[test]
fn context_is_added_to_existing_errors() {
    let result: Result<(), PlaybackError> =
        Err(PlaybackError::Rejected { message: "autoplay".into(), context: None });

    let err = result.context("hover cue").unwrap_err();
    assert_eq!(err.to_string(), "Rejected (hover cue): autoplay");
}

#[test]
fn strings_become_internal_errors() {
    let from_static: PlaybackError = "boom".into();
    let from_owned: PlaybackError = String::from("bang").into();

    assert_eq!(from_static.to_string(), "Internal playback error: boom");
    assert!(matches!(from_owned, PlaybackError::Internal { .. }));
}

#[test]
fn folio_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
}
