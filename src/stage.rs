use crate::app::App;
use crate::audio::Sounds;
use crate::gsap::{self, Targets};
use cord_core::{SoundCue, Stage, TargetProps, Timeline};
use std::rc::Weak;
use web_sys as web;

/// Browser-side stage: GSAP for motion, `<audio>` for cues, the checkbox
/// for the bound control.
pub struct WebStage {
    targets: Targets,
    control: web::HtmlInputElement,
    sounds: Sounds,
    app: Weak<App>,
}

impl WebStage {
    pub fn new(
        targets: Targets,
        control: web::HtmlInputElement,
        sounds: Sounds,
        app: Weak<App>,
    ) -> Self {
        Self {
            targets,
            control,
            sounds,
            app,
        }
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }
}

impl Stage for WebStage {
    fn set(&mut self, assignments: &[TargetProps]) {
        for tp in assignments {
            gsap::set(&self.targets, tp.target, &tp.props);
        }
    }

    fn play(&mut self, timeline: Timeline) {
        log::debug!("[stage] play {} ({:.2}s)", timeline.label, timeline.duration());
        gsap::build(timeline, &self.targets, &self.app);
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.sounds.play(cue);
    }

    fn sync_control(&mut self, checked: bool) {
        self.control.set_checked(checked);
    }
}
