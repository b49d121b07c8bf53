//! Timeline builders for the cord snap, the bear reaction and the full
//! trigger that wraps both.

use crate::constants::*;
use crate::random::RandomSource;
use crate::stage::SoundCue;
use crate::timeline::{Effect, Position, Prop, Target, TargetProps, Timeline, Tween};
use glam::Vec2;

/// Pose applied once before the first interaction.
pub fn initial_pose() -> Vec<TargetProps> {
    vec![
        TargetProps::new(
            Target::Paw,
            [Prop::TransformOrigin("50% 50%"), Prop::XPercent(-30.0)],
        ),
        TargetProps::new(Target::Bulb, [Prop::Z(10.0)]),
        TargetProps::new(
            Target::Arms,
            [
                Prop::XPercent(ARM_REST_X_PERCENT),
                Prop::Rotation(ARM_REST_ROTATION),
                Prop::TransformOrigin("100% 50%"),
                Prop::YPercent(-2.0),
                Prop::Display(true),
            ],
        ),
        TargetProps::display(Target::Brows, false),
        TargetProps::new(
            Target::Bear,
            [
                Prop::Rotation(-50.0),
                Prop::XPercent(40.0),
                Prop::TransformOrigin("50% 50%"),
                Prop::Scale(0.0),
                Prop::Display(true),
            ],
        ),
    ]
}

/// Proxy assignment that puts the tug point back at rest.
pub fn rest_pose(reference: Vec2) -> TargetProps {
    TargetProps::new(Target::Proxy, [Prop::X(reference.x), Prop::Y(reference.y)])
}

/// Snap the live cord through every other shape and back, flipping the
/// toggle as it starts.
pub fn cord_morph(segment_count: usize) -> Timeline {
    let mut tl = Timeline::new("cord")
        .on_start(Effect::FlipToggle)
        .on_start(Effect::Set(vec![
            TargetProps::display(Target::DummyCord, false),
            TargetProps::display(Target::Cord(0), true),
        ]))
        .on_start(Effect::PlaySound(SoundCue::Click))
        .on_complete(Effect::Set(vec![
            TargetProps::display(Target::DummyCord, true),
            TargetProps::display(Target::Cord(0), false),
        ]))
        .on_complete(Effect::ResetTug);

    for segment in 1..segment_count {
        let morph = Tween::new(Target::Cord(0), [Prop::MorphTo(segment)])
            .duration(CORD_DURATION)
            .yoyo(1, 0.0);
        tl = tl.to(morph);
    }
    tl
}

/// Mood-dependent knobs for one reaction.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReactionParams {
    pub arm_swing: f32,
    pub slide: f32,
    pub close_delay: f32,
    pub bear_appears: bool,
}

impl ReactionParams {
    /// Draws happen in a fixed order: slide, close delay, appearance gate.
    /// A tier that does not need a draw does not consume one.
    pub fn derive<R: RandomSource + ?Sized>(anger: u32, rng: &mut R) -> Self {
        let arm_swing = if anger > ANGER_FAST_ARMS_ABOVE {
            ARM_SWING_ANGRY
        } else {
            ARM_SWING_CALM
        };
        let slide = if anger > ANGER_FAST_SLIDE_ABOVE {
            SLIDE_ANGRY
        } else {
            rng.range(SLIDE_RANGE.0, SLIDE_RANGE.1)
        };
        let close_delay = if anger >= ANGER_HESITATE_FROM {
            rng.range(CLOSE_DELAY_RANGE.0, CLOSE_DELAY_RANGE.1)
        } else {
            0.0
        };
        let bear_appears = anger >= ANGER_BEAR_FROM && rng.next_unit() > BEAR_APPEAR_GATE;
        Self {
            arm_swing,
            slide,
            close_delay,
            bear_appears,
        }
    }
}

fn door_close() -> Timeline {
    let swing = Tween::new(Target::Door, [Prop::RotateY(0.0)])
        .duration(DOOR_SWING_DURATION)
        .on_complete(Effect::PlaySound(SoundCue::DoorClose));
    Timeline::new("door-close").to(swing)
}

/// Door opens, the bear maybe peeks, the arms reach out, yank the cord and
/// switch the light back.
pub fn reaction(params: &ReactionParams, reference: Vec2) -> Timeline {
    let arm = params.arm_swing;
    let open = Tween::new(Target::Door, [Prop::RotateY(DOOR_OPEN_ANGLE)])
        .duration(DOOR_SWING_DURATION)
        .on_start(Effect::PlaySound(SoundCue::DoorOpen));
    let tl = Timeline::new("reaction").to(open);

    let tl = if params.bear_appears {
        let peek = Tween::new(Target::Bear, [Prop::XPercent(BEAR_SLIDE_X_PERCENT)])
            .duration(params.slide)
            .yoyo(1, BEAR_SLIDE_HOLD)
            .on_start(Effect::PlayGroan)
            .on_start(Effect::Set(vec![TargetProps::new(Target::Bear, [Prop::Scale(1.0)])]));
        tl.to(peek)
    } else {
        tl.empty()
    };

    let close = Tween::new(
        Target::Arms,
        [Prop::Rotation(0.0), Prop::XPercent(0.0), Prop::YPercent(0.0)],
    )
    .duration(arm)
    .delay(params.close_delay);
    let grip = Tween::new(Target::Paw, [Prop::XPercent(0.0)])
        .also(Target::Knuckles, [Prop::XPercent(KNUCKLES_GRIP_X_PERCENT)])
        .duration(PAW_DURATION);
    let overshoot = Tween::new(Target::Arms, [Prop::Rotation(ARM_OVERSHOOT_ROTATION)])
        .duration(arm * 0.5);
    let retract = Tween::new(
        Target::Arms,
        [Prop::Rotation(ARM_REST_ROTATION), Prop::XPercent(ARM_REST_X_PERCENT)],
    )
    .duration(arm)
    .on_complete(Effect::Spawn(door_close()));
    let yank = Tween::new(
        Target::DummyCordLine,
        [
            Prop::EndX(reference.x + YANK_OFFSET.0),
            Prop::EndY(reference.y + YANK_OFFSET.1),
        ],
    )
    .duration(CORD_DURATION);
    let home = Tween::new(
        Target::DummyCordLine,
        [Prop::EndX(reference.x), Prop::EndY(reference.y)],
    )
    .duration(CORD_DURATION);
    let release = Tween::new(Target::Paw, [Prop::XPercent(PAW_RELEASE_X_PERCENT)])
        .also(Target::Knuckles, [Prop::XPercent(0.0)])
        .duration(PAW_DURATION);

    tl.to(close)
        .to_at(grip, Position::BeforeEnd(PAW_LEAD))
        .to(overshoot)
        .to(retract)
        .to_at(yank, Position::WithPrevious(0.0))
        .to_at(home, Position::AfterPrevious)
        .to_at(release, Position::WithPrevious(0.0))
        .call_at(Effect::PlayCordMorph, Position::WithPrevious(0.0))
}

/// One user-visible trigger: the user's snap followed by the reaction.
/// The hit spot is hidden for the whole run.
pub fn orchestration(cord: Timeline, reaction: Timeline) -> Timeline {
    Timeline::new("trigger")
        .on_start(Effect::Set(vec![TargetProps::display(Target::HitSpot, false)]))
        .add(cord)
        .add(reaction)
        .on_complete(Effect::Set(vec![TargetProps::display(Target::HitSpot, true)]))
        .on_complete(Effect::CommitTrigger)
}
