/// An interface sound a controller asks for.
///
/// Controllers only request cues; whether one is audible (SFX switched off, muted page) is
/// decided by the audio slice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    Hover,
    Click,
}
