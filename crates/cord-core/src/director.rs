//! Interprets effects against the widget state and the outer stage.

use crate::config::SceneConfig;
use crate::constants::GROAN_COIN;
use crate::drag::{DragController, DragPhase, TugOutcome};
use crate::random::RandomSource;
use crate::sequences::{cord_morph, initial_pose, orchestration, reaction, ReactionParams};
use crate::stage::{SoundCue, Stage};
use crate::state::{AppState, TugPoint};
use crate::timeline::{Effect, Prop, Target, TargetProps};
use glam::Vec2;

pub struct Director<R: RandomSource> {
    config: SceneConfig,
    state: AppState,
    drag: DragController,
    rng: R,
}

impl<R: RandomSource> Director<R> {
    pub fn new(config: SceneConfig, rng: R) -> Self {
        Self::with_state(config, AppState::default(), rng)
    }

    pub fn with_state(config: SceneConfig, state: AppState, rng: R) -> Self {
        let drag = DragController::new(config.reference_endpoint);
        Self {
            config,
            state,
            drag,
            rng,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn tug_point(&self) -> TugPoint {
        self.drag.tug_point()
    }

    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Apply the starting pose and park the tug point.
    pub fn setup(&mut self, stage: &mut dyn Stage) {
        stage.set(&initial_pose());
        self.reset_tug(stage);
        log::info!(
            "[setup] rest=({:.1},{:.1}) segments={}",
            self.config.reference_endpoint.x,
            self.config.reference_endpoint.y,
            self.config.segment_count
        );
    }

    pub fn press(&mut self, pointer: Vec2, stage: &mut dyn Stage) {
        let rest = self.drag.press(pointer);
        stage.set(&[rest]);
        log::debug!("[tug] press at ({:.1},{:.1})", pointer.x, pointer.y);
    }

    pub fn drag(&mut self, proxy: Vec2, stage: &mut dyn Stage) {
        if let Some(end) = self.drag.drag(proxy) {
            stage.set(&[end]);
        }
    }

    pub fn release(&mut self, pointer: Vec2, stage: &mut dyn Stage) {
        if let Some((travelled, spring)) = self.drag.release(pointer) {
            log::debug!("[tug] release travelled={:.1}", travelled);
            stage.play(spring);
        }
    }

    pub fn apply(&mut self, effect: Effect, stage: &mut dyn Stage) {
        match effect {
            Effect::FlipToggle => {
                let on = self.state.toggle.flip();
                // the bound checkbox tracks "light off"
                stage.sync_control(!on);
                stage.set(&[TargetProps::new(Target::Root, [Prop::OnFlag(u8::from(on))])]);
                log::info!("[toggle] on={}", on);
            }
            Effect::Set(assignments) => stage.set(&assignments),
            Effect::PlaySound(cue) => stage.play_sound(cue),
            Effect::PlayGroan => {
                let cue = if self.rng.next_unit() > GROAN_COIN {
                    SoundCue::BearLong
                } else {
                    SoundCue::BearShort
                };
                stage.play_sound(cue);
            }
            Effect::ResetTug => self.reset_tug(stage),
            Effect::Spawn(timeline) => stage.play(timeline),
            Effect::PlayCordMorph => stage.play(cord_morph(self.config.segment_count)),
            Effect::TugSettled { travelled } => match self.drag.settle(travelled) {
                TugOutcome::Trigger => self.trigger(stage),
                TugOutcome::Rest => self.reset_tug(stage),
            },
            Effect::CommitTrigger => {
                if self.state.commit_trigger() {
                    stage.set(&[TargetProps::display(Target::Brows, true)]);
                }
                log::info!("[mood] anger={}", self.state.mood.read());
            }
        }
    }

    fn reset_tug(&mut self, stage: &mut dyn Stage) {
        let rest = self.drag.reset();
        stage.set(&[rest]);
    }

    // No busy guard: a second trigger while one plays simply overlaps.
    fn trigger(&mut self, stage: &mut dyn Stage) {
        let anger = self.state.mood.read();
        let params = ReactionParams::derive(anger, &mut self.rng);
        let timeline = orchestration(
            cord_morph(self.config.segment_count),
            reaction(&params, self.config.reference_endpoint),
        );
        log::info!(
            "[reaction] anger={} arm={:.2} slide={:.2} delay={:.2} bear={} length={:.2}s",
            anger,
            params.arm_swing,
            params.slide,
            params.close_delay,
            params.bear_appears,
            timeline.duration()
        );
        stage.play(timeline);
    }
}
