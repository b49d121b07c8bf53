//! Headless stand-in for the animation engine.
//!
//! Lays out each played timeline at the current clock and fires its effects
//! in time order, ties going to declaration order. Property values are not
//! interpolated; only instant assignments are tracked.

use crate::director::Director;
use crate::random::RandomSource;
use crate::stage::{SoundCue, Stage};
use crate::timeline::{Effect, Prop, Step, Target, TargetProps, Timeline, Tween};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

#[derive(Clone, Debug, PartialEq)]
pub enum Record {
    Set(TargetProps),
    Sound(SoundCue),
    Control(bool),
    TimelineStart(&'static str),
    TweenStart(Tween),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub at: f32,
    pub record: Record,
}

#[derive(Debug)]
enum Due {
    TimelineStart(&'static str, Vec<Effect>),
    TweenStart(Tween),
    Effects(Vec<Effect>),
}

#[derive(Debug)]
struct Scheduled {
    at: f32,
    seq: u64,
    due: Due,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // reversed: BinaryHeap is a max-heap
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at
            .total_cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

#[derive(Debug, Default)]
pub struct Playback {
    now: f32,
    seq: u64,
    queue: BinaryHeap<Scheduled>,
    log: Vec<Entry>,
    displays: HashMap<Target, bool>,
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.log
    }

    /// Last assigned visibility of a target.
    pub fn display(&self, target: Target) -> Option<bool> {
        self.displays.get(&target).copied()
    }

    pub fn sounds(&self) -> Vec<SoundCue> {
        self.log
            .iter()
            .filter_map(|e| match e.record {
                Record::Sound(cue) => Some(cue),
                _ => None,
            })
            .collect()
    }

    pub fn control_history(&self) -> Vec<bool> {
        self.log
            .iter()
            .filter_map(|e| match e.record {
                Record::Control(checked) => Some(checked),
                _ => None,
            })
            .collect()
    }

    pub fn timelines_started(&self, label: &str) -> usize {
        self.log
            .iter()
            .filter(|e| matches!(e.record, Record::TimelineStart(l) if l == label))
            .count()
    }

    /// Time of the first logged record matching `pred`.
    pub fn first_at(&self, pred: impl Fn(&Record) -> bool) -> Option<f32> {
        self.log.iter().find(|e| pred(&e.record)).map(|e| e.at)
    }

    /// Fire everything due up to and including `until`, then park the clock
    /// there.
    pub fn advance<R: RandomSource>(&mut self, director: &mut Director<R>, until: f32) {
        while self.queue.peek().is_some_and(|s| s.at <= until) {
            if let Some(next) = self.queue.pop() {
                self.now = next.at;
                self.fire(next.due, director);
            }
        }
        self.now = self.now.max(until);
    }

    /// Fire everything, including timelines started along the way.
    pub fn run<R: RandomSource>(&mut self, director: &mut Director<R>) {
        while let Some(next) = self.queue.pop() {
            self.now = next.at;
            self.fire(next.due, director);
        }
    }

    fn fire<R: RandomSource>(&mut self, due: Due, director: &mut Director<R>) {
        let effects = match due {
            Due::TimelineStart(label, effects) => {
                self.record(Record::TimelineStart(label));
                effects
            }
            Due::TweenStart(tween) => {
                let effects = tween.on_start.clone();
                self.record(Record::TweenStart(tween));
                effects
            }
            Due::Effects(effects) => effects,
        };
        for effect in effects {
            director.apply(effect, self);
        }
    }

    fn record(&mut self, record: Record) {
        self.log.push(Entry {
            at: self.now,
            record,
        });
    }

    fn push(&mut self, at: f32, due: Due) {
        self.seq += 1;
        self.queue.push(Scheduled {
            at,
            seq: self.seq,
            due,
        });
    }

    fn schedule(&mut self, timeline: Timeline, base: f32) {
        let spans = timeline.layout();
        let end = base + spans.iter().fold(0.0_f32, |acc, s| acc.max(s.end));
        self.push(base, Due::TimelineStart(timeline.label, timeline.on_start));
        for (placed, span) in timeline.steps.into_iter().zip(spans) {
            let start = base + span.start;
            match placed.step {
                Step::Tween(mut tween) => {
                    let on_complete = std::mem::take(&mut tween.on_complete);
                    self.push(start, Due::TweenStart(tween));
                    if !on_complete.is_empty() {
                        self.push(base + span.end, Due::Effects(on_complete));
                    }
                }
                Step::Child(child) => self.schedule(child, start),
                Step::Call(effect) => self.push(start, Due::Effects(vec![effect])),
                Step::Empty => {}
            }
        }
        if !timeline.on_complete.is_empty() {
            self.push(end, Due::Effects(timeline.on_complete));
        }
    }
}

impl Stage for Playback {
    fn set(&mut self, assignments: &[TargetProps]) {
        for tp in assignments {
            for prop in &tp.props {
                if let Prop::Display(shown) = prop {
                    self.displays.insert(tp.target, *shown);
                }
            }
            self.record(Record::Set(tp.clone()));
        }
    }

    fn play(&mut self, timeline: Timeline) {
        self.schedule(timeline, self.now);
    }

    fn play_sound(&mut self, cue: SoundCue) {
        self.record(Record::Sound(cue));
    }

    fn sync_control(&mut self, checked: bool) {
        self.record(Record::Control(checked));
    }
}
