// Layout of the cord and reaction timelines.

use cord_core::sequences::{cord_morph, initial_pose, orchestration, reaction};
use cord_core::{
    Effect, Position, Prop, ReactionParams, Step, Target, TargetProps, Timeline, Tween,
};
use glam::Vec2;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn calm() -> ReactionParams {
    ReactionParams {
        arm_swing: 0.4,
        slide: 0.3,
        close_delay: 0.0,
        bear_appears: false,
    }
}

fn tween_at(tl: &Timeline, i: usize) -> &Tween {
    let Step::Tween(t) = &tl.steps[i].step else {
        panic!("step {i} is not a tween");
    };
    t
}

fn parts(tween: &Tween) -> Vec<(Target, Vec<Prop>)> {
    tween
        .targets
        .iter()
        .map(|tp| (tp.target, tp.props.to_vec()))
        .collect()
}

#[test]
fn tween_span_counts_repeats_and_holds() {
    let t = Tween::new(Target::Bear, [Prop::XPercent(-55.0)])
        .duration(0.4)
        .yoyo(1, 1.0);
    assert!(approx(t.span(), 1.8));
}

#[test]
fn positions_resolve_against_previous_and_end() {
    let step = |target, duration| Tween::new(target, [Prop::Z(0.0)]).duration(duration);
    let tl = Timeline::new("t")
        .to(step(Target::Door, 1.0))
        .to_at(step(Target::Paw, 0.5), Position::BeforeEnd(0.2))
        .to_at(step(Target::Arms, 0.1), Position::WithPrevious(0.0))
        .to_at(step(Target::Arms, 0.1), Position::AfterPrevious)
        .to(step(Target::Bulb, 0.3).delay(0.5));
    let spans = tl.layout();
    assert!(approx(spans[1].start, 0.8));
    assert!(approx(spans[2].start, 0.8));
    assert!(approx(spans[3].start, 0.9));
    // end so far is 1.3 (the paw), plus the delay
    assert!(approx(spans[4].start, 1.8));
    assert!(approx(tl.duration(), 2.1));
}

#[test]
fn cord_morph_visits_every_other_segment() {
    let tl = cord_morph(4);
    let targets: Vec<usize> = tl
        .steps
        .iter()
        .filter_map(|p| match &p.step {
            Step::Tween(t) => match t.targets[0].props[0] {
                Prop::MorphTo(i) => Some(i),
                _ => None,
            },
            _ => None,
        })
        .collect();
    assert_eq!(targets, vec![1, 2, 3]);
    assert!(approx(tl.duration(), 0.6));
    assert_eq!(tl.on_start[0], Effect::FlipToggle);
    assert!(tl.on_complete.contains(&Effect::ResetTug));
}

#[test]
fn cord_morph_with_a_single_segment_has_no_steps() {
    let tl = cord_morph(1);
    assert!(tl.steps.is_empty());
    assert_eq!(tl.duration(), 0.0);
    assert_eq!(tl.on_start.len(), 3);
}

#[test]
fn calm_reaction_layout() {
    let tl = reaction(&calm(), Vec2::new(98.0, 380.0));
    assert_eq!(tl.steps.len(), 10);
    assert_eq!(tl.steps[1].step, Step::Empty);

    let s = tl.layout();
    let expect = [
        (0.0, 0.2), // door
        (0.2, 0.2), // placeholder
        (0.2, 0.6), // arms close
        (0.4, 0.5), // paw grip
        (0.6, 0.8), // overshoot
        (0.8, 1.2), // arms back
        (0.8, 0.9), // yank
        (0.9, 1.0), // cord home
        (0.9, 1.0), // paw release
        (0.9, 0.9), // second snap
    ];
    for (i, (start, end)) in expect.iter().enumerate() {
        assert!(approx(s[i].start, *start), "step {i} start {}", s[i].start);
        assert!(approx(s[i].end, *end), "step {i} end {}", s[i].end);
    }
    assert!(approx(tl.duration(), 1.2));
}

#[test]
fn close_delay_and_bear_push_the_arms_back() {
    let params = ReactionParams {
        arm_swing: 0.2,
        slide: 0.4,
        close_delay: 0.5,
        bear_appears: true,
    };
    let tl = reaction(&params, Vec2::ZERO);
    let s = tl.layout();
    // bear: out, hold, back
    assert!(approx(s[1].start, 0.2));
    assert!(approx(s[1].end, 2.0));
    assert!(approx(s[2].start, 2.5));
    assert!(approx(s[2].end, 2.7));
    // paw grip leads the arms' end by 0.2, which is their whole swing here
    assert!(approx(s[3].start, 2.5));
}

#[test]
fn yank_targets_are_offset_from_the_reference() {
    let tl = reaction(&calm(), Vec2::new(98.0, 380.0));
    let Step::Tween(yank) = &tl.steps[6].step else {
        panic!("expected tween");
    };
    assert_eq!(yank.targets[0].target, Target::DummyCordLine);
    assert_eq!(
        yank.targets[0].props.as_slice(),
        &[Prop::EndX(118.0), Prop::EndY(440.0)]
    );
    let Step::Tween(home) = &tl.steps[7].step else {
        panic!("expected tween");
    };
    assert_eq!(
        home.targets[0].props.as_slice(),
        &[Prop::EndX(98.0), Prop::EndY(380.0)]
    );
}

#[test]
fn door_close_is_spawned_not_sequenced() {
    let tl = reaction(&calm(), Vec2::ZERO);
    let Step::Tween(back) = &tl.steps[5].step else {
        panic!("expected tween");
    };
    assert!(matches!(back.on_complete.as_slice(), [Effect::Spawn(t)] if t.label == "door-close"));
    // the door close adds nothing to the reaction's length
    assert!(approx(tl.duration(), 1.2));
}

#[test]
fn reaction_props_match_contract() {
    let params = ReactionParams {
        bear_appears: true,
        ..calm()
    };
    let tl = reaction(&params, Vec2::new(98.0, 380.0));

    let expect: [(usize, Vec<(Target, Vec<Prop>)>); 8] = [
        (0, vec![(Target::Door, vec![Prop::RotateY(25.0)])]),
        (1, vec![(Target::Bear, vec![Prop::XPercent(-55.0)])]),
        (
            2,
            vec![(
                Target::Arms,
                vec![Prop::Rotation(0.0), Prop::XPercent(0.0), Prop::YPercent(0.0)],
            )],
        ),
        (
            3,
            vec![
                (Target::Paw, vec![Prop::XPercent(0.0)]),
                (Target::Knuckles, vec![Prop::XPercent(10.0)]),
            ],
        ),
        (4, vec![(Target::Arms, vec![Prop::Rotation(5.0)])]),
        (
            5,
            vec![(Target::Arms, vec![Prop::Rotation(-90.0), Prop::XPercent(10.0)])],
        ),
        (
            6,
            vec![(Target::DummyCordLine, vec![Prop::EndX(118.0), Prop::EndY(440.0)])],
        ),
        (
            8,
            vec![
                (Target::Paw, vec![Prop::XPercent(-28.0)]),
                (Target::Knuckles, vec![Prop::XPercent(0.0)]),
            ],
        ),
    ];
    for (i, want) in expect {
        assert_eq!(parts(tween_at(&tl, i)), want, "step {i}");
    }

    // the bear is scaled in as its slide starts
    let bear = tween_at(&tl, 1);
    assert!(bear.on_start.contains(&Effect::Set(vec![TargetProps::new(
        Target::Bear,
        [Prop::Scale(1.0)]
    )])));

    let [Effect::Spawn(close)] = tween_at(&tl, 5).on_complete.as_slice() else {
        panic!("expected a spawned door close");
    };
    assert_eq!(
        parts(tween_at(close, 0)),
        vec![(Target::Door, vec![Prop::RotateY(0.0)])]
    );
}

#[test]
fn initial_pose_matches_the_resting_scene() {
    let pose = initial_pose();
    let expect = [
        TargetProps::new(
            Target::Paw,
            [Prop::TransformOrigin("50% 50%"), Prop::XPercent(-30.0)],
        ),
        TargetProps::new(Target::Bulb, [Prop::Z(10.0)]),
        TargetProps::new(
            Target::Arms,
            [
                Prop::XPercent(10.0),
                Prop::Rotation(-90.0),
                Prop::TransformOrigin("100% 50%"),
                Prop::YPercent(-2.0),
                Prop::Display(true),
            ],
        ),
        TargetProps::new(Target::Brows, [Prop::Display(false)]),
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
    ];
    assert_eq!(pose.as_slice(), &expect);
}

#[test]
fn orchestration_runs_cord_then_reaction() {
    let tl = orchestration(cord_morph(3), reaction(&calm(), Vec2::ZERO));
    let s = tl.layout();
    assert!(approx(s[0].end, 0.4));
    assert!(approx(s[1].start, 0.4));
    assert!(approx(tl.duration(), 1.6));
    assert_eq!(tl.on_complete.last(), Some(&Effect::CommitTrigger));
}
