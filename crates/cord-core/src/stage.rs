use crate::timeline::{TargetProps, Timeline};

/// The five audio cues.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Click,
    DoorOpen,
    DoorClose,
    BearShort,
    BearLong,
}

impl SoundCue {
    pub const ALL: [SoundCue; 5] = [
        SoundCue::Click,
        SoundCue::DoorOpen,
        SoundCue::DoorClose,
        SoundCue::BearShort,
        SoundCue::BearLong,
    ];

    pub fn path(self) -> &'static str {
        match self {
            SoundCue::Click => "/clip/click.mp3",
            SoundCue::DoorOpen => "/clip/door-open.mp3",
            SoundCue::DoorClose => "/clip/door-close.mp3",
            SoundCue::BearShort => "/clip/bear-groan-short.mp3",
            SoundCue::BearLong => "/clip/bear-groan-long.mp3",
        }
    }
}

/// Everything outside the core: the animation engine, audio and the bound
/// checkbox. Calls never block and never fail.
pub trait Stage {
    /// Assign properties immediately.
    fn set(&mut self, assignments: &[TargetProps]);
    /// Start a timeline now. Its effects come back through
    /// [`Director::apply`](crate::director::Director::apply).
    fn play(&mut self, timeline: Timeline);
    /// Fire-and-forget playback.
    fn play_sound(&mut self, cue: SoundCue);
    /// Set the bound control's `checked` state.
    fn sync_control(&mut self, checked: bool);
}
