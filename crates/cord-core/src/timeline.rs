//! Data model for the animation capability.
//!
//! Sequences are built as plain values and handed to a [`Stage`] to play.
//! Callbacks are [`Effect`]s rather than closures so a timeline can be
//! inspected, logged and replayed headlessly.
//!
//! [`Stage`]: crate::stage::Stage

use crate::stage::SoundCue;
use smallvec::{smallvec, SmallVec};

/// Every element the widget animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Target {
    Door,
    Bear,
    Arms,
    Paw,
    Knuckles,
    Brows,
    Bulb,
    /// One of the cord shapes; 0 is the live, morphable segment.
    Cord(usize),
    DummyCord,
    DummyCordLine,
    HitSpot,
    /// Invisible element the drag capability moves around.
    Proxy,
    /// The document element (carries `--on`).
    Root,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Prop {
    RotateY(f32),
    Rotation(f32),
    XPercent(f32),
    YPercent(f32),
    Scale(f32),
    Z(f32),
    X(f32),
    Y(f32),
    /// Line end attributes `x2` / `y2`.
    EndX(f32),
    EndY(f32),
    Display(bool),
    TransformOrigin(&'static str),
    /// Morph the target's path into the given cord segment.
    MorphTo(usize),
    /// The `--on` custom property, 1 or 0.
    OnFlag(u8),
}

pub type Props = SmallVec<[Prop; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct TargetProps {
    pub target: Target,
    pub props: Props,
}

impl TargetProps {
    pub fn new(target: Target, props: impl IntoIterator<Item = Prop>) -> Self {
        Self {
            target,
            props: props.into_iter().collect(),
        }
    }

    pub fn display(target: Target, shown: bool) -> Self {
        Self {
            target,
            props: smallvec![Prop::Display(shown)],
        }
    }
}

/// Callback payloads. The director interprets them; the engine only carries
/// them to the right moment.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Flip the toggle and push it to the bound control and `--on`.
    FlipToggle,
    Set(Vec<TargetProps>),
    PlaySound(SoundCue),
    /// Coin flip between the long and short groan.
    PlayGroan,
    /// Return the tug point to rest.
    ResetTug,
    /// Start an independent timeline nobody waits on.
    Spawn(Timeline),
    /// Build and play a fresh cord morph at this moment.
    PlayCordMorph,
    /// The dummy cord has sprung back after a release.
    TugSettled { travelled: f32 },
    /// A full trigger finished: bump the mood and maybe show the brows.
    CommitTrigger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tween {
    pub targets: SmallVec<[TargetProps; 2]>,
    pub duration: f32,
    pub delay: f32,
    pub repeat: u32,
    pub repeat_delay: f32,
    pub yoyo: bool,
    pub on_start: Vec<Effect>,
    pub on_complete: Vec<Effect>,
}

impl Tween {
    pub fn new(target: Target, props: impl IntoIterator<Item = Prop>) -> Self {
        Self {
            targets: smallvec![TargetProps::new(target, props)],
            duration: 0.0,
            delay: 0.0,
            repeat: 0,
            repeat_delay: 0.0,
            yoyo: false,
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    /// Animate another target alongside with its own values.
    pub fn also(mut self, target: Target, props: impl IntoIterator<Item = Prop>) -> Self {
        self.targets.push(TargetProps::new(target, props));
        self
    }

    pub fn duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    pub fn delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    pub fn yoyo(mut self, repeat: u32, repeat_delay: f32) -> Self {
        self.repeat = repeat;
        self.repeat_delay = repeat_delay;
        self.yoyo = true;
        self
    }

    pub fn on_start(mut self, effect: Effect) -> Self {
        self.on_start.push(effect);
        self
    }

    pub fn on_complete(mut self, effect: Effect) -> Self {
        self.on_complete.push(effect);
        self
    }

    /// Time from first frame to last, excluding `delay`.
    pub fn span(&self) -> f32 {
        self.duration * (self.repeat + 1) as f32 + self.repeat_delay * self.repeat as f32
    }
}

/// Where a step goes relative to what is already in the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// After everything so far.
    Sequential,
    /// Start of the previous step plus an offset (`<`).
    WithPrevious(f32),
    /// End of the previous step (`>`).
    AfterPrevious,
    /// This much before the current end of the timeline (`-=`).
    BeforeEnd(f32),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    Tween(Tween),
    Child(Timeline),
    Call(Effect),
    /// Holds a slot in the sequence without taking time.
    Empty,
}

impl Step {
    fn delay(&self) -> f32 {
        match self {
            Step::Tween(t) => t.delay,
            _ => 0.0,
        }
    }

    fn span(&self) -> f32 {
        match self {
            Step::Tween(t) => t.span(),
            Step::Child(tl) => tl.duration(),
            Step::Call(_) | Step::Empty => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Placed {
    pub position: Position,
    pub step: Step,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub start: f32,
    pub end: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Timeline {
    pub label: &'static str,
    pub steps: Vec<Placed>,
    pub on_start: Vec<Effect>,
    pub on_complete: Vec<Effect>,
}

impl Timeline {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            steps: Vec::new(),
            on_start: Vec::new(),
            on_complete: Vec::new(),
        }
    }

    pub fn on_start(mut self, effect: Effect) -> Self {
        self.on_start.push(effect);
        self
    }

    pub fn on_complete(mut self, effect: Effect) -> Self {
        self.on_complete.push(effect);
        self
    }

    pub fn to(self, tween: Tween) -> Self {
        self.to_at(tween, Position::Sequential)
    }

    pub fn to_at(self, tween: Tween, position: Position) -> Self {
        self.place(Step::Tween(tween), position)
    }

    pub fn add(self, child: Timeline) -> Self {
        self.add_at(child, Position::Sequential)
    }

    pub fn add_at(self, child: Timeline, position: Position) -> Self {
        self.place(Step::Child(child), position)
    }

    pub fn call_at(self, effect: Effect, position: Position) -> Self {
        self.place(Step::Call(effect), position)
    }

    pub fn empty(self) -> Self {
        self.place(Step::Empty, Position::Sequential)
    }

    fn place(mut self, step: Step, position: Position) -> Self {
        self.steps.push(Placed { position, step });
        self
    }

    /// Start and end of every step, relative to the timeline's own start.
    pub fn layout(&self) -> Vec<Span> {
        let mut spans = Vec::with_capacity(self.steps.len());
        let mut end = 0.0_f32;
        let mut prev = Span {
            start: 0.0,
            end: 0.0,
        };
        for placed in &self.steps {
            let anchor = match placed.position {
                Position::Sequential => end,
                Position::WithPrevious(offset) => prev.start + offset,
                Position::AfterPrevious => prev.end,
                Position::BeforeEnd(offset) => end - offset,
            }
            .max(0.0);
            let start = anchor + placed.step.delay();
            let span = Span {
                start,
                end: start + placed.step.span(),
            };
            end = end.max(span.end);
            prev = span;
            spans.push(span);
        }
        spans
    }

    pub fn duration(&self) -> f32 {
        self.layout().iter().fold(0.0, |acc, s| acc.max(s.end))
    }
}
