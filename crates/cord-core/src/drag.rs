use crate::constants::{CORD_DURATION, TUG_THRESHOLD};
use crate::sequences::rest_pose;
use crate::state::TugPoint;
use crate::timeline::{Effect, Prop, Target, TargetProps, Timeline, Tween};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    Pressing,
    Dragging,
    /// Released; the dummy cord is springing back.
    Settling,
}

/// What a settled tug asks for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TugOutcome {
    Trigger,
    Rest,
}

#[inline]
pub fn outcome_for(travelled: f32) -> TugOutcome {
    if travelled > TUG_THRESHOLD {
        TugOutcome::Trigger
    } else {
        TugOutcome::Rest
    }
}

/// Press / drag / release over the proxy point.
#[derive(Clone, Debug)]
pub struct DragController {
    phase: DragPhase,
    start: Vec2,
    rest: Vec2,
    tug: TugPoint,
}

impl DragController {
    pub fn new(rest: Vec2) -> Self {
        Self {
            phase: DragPhase::Idle,
            start: Vec2::ZERO,
            rest,
            tug: TugPoint::at(rest),
        }
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn tug_point(&self) -> TugPoint {
        self.tug
    }

    /// Put the tug point back at rest. Idempotent.
    pub fn reset(&mut self) -> TargetProps {
        self.tug = TugPoint::at(self.rest);
        rest_pose(self.rest)
    }

    /// Record where the tug began and reset the tug point.
    pub fn press(&mut self, pointer: Vec2) -> TargetProps {
        self.start = pointer;
        self.phase = DragPhase::Pressing;
        self.reset()
    }

    /// Follow the proxy with the dummy cord end. Ignored unless pressed.
    pub fn drag(&mut self, proxy: Vec2) -> Option<TargetProps> {
        match self.phase {
            DragPhase::Pressing | DragPhase::Dragging => {
                self.phase = DragPhase::Dragging;
                self.tug = TugPoint::at(proxy);
                Some(TargetProps::new(
                    Target::DummyCordLine,
                    [Prop::EndX(proxy.x), Prop::EndY(proxy.y)],
                ))
            }
            DragPhase::Idle | DragPhase::Settling => None,
        }
    }

    /// Measure the tug and return the spring-back animation. Its completion
    /// carries the distance so the decision is made once the cord is home.
    pub fn release(&mut self, pointer: Vec2) -> Option<(f32, Timeline)> {
        match self.phase {
            DragPhase::Pressing | DragPhase::Dragging => {
                let travelled = pointer.distance(self.start);
                self.phase = DragPhase::Settling;
                let home = Tween::new(
                    Target::DummyCordLine,
                    [Prop::EndX(self.rest.x), Prop::EndY(self.rest.y)],
                )
                .duration(CORD_DURATION)
                .on_complete(Effect::TugSettled { travelled });
                let spring = Timeline::new("spring-back").to(home);
                Some((travelled, spring))
            }
            DragPhase::Idle | DragPhase::Settling => None,
        }
    }

    /// The spring-back finished.
    pub fn settle(&mut self, travelled: f32) -> TugOutcome {
        // a new press may already be under way
        if self.phase == DragPhase::Settling {
            self.phase = DragPhase::Idle;
        }
        outcome_for(travelled)
    }
}
