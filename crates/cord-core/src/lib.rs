//! Interaction core for the pull-cord light toggle.
//!
//! Pointer input goes into a [`Director`], which builds timelines and hands
//! them to a [`Stage`]. The stage plays them and reports each callback back
//! as an [`Effect`]. Nothing here touches a browser API, so the same logic
//! runs under [`Playback`] in host tests.

pub mod config;
pub mod constants;
pub mod director;
pub mod drag;
pub mod error;
pub mod playback;
pub mod random;
pub mod sequences;
pub mod stage;
pub mod state;
pub mod timeline;

pub use config::SceneConfig;
pub use director::Director;
pub use drag::{DragController, DragPhase, TugOutcome};
pub use error::SetupError;
pub use playback::{Entry, Playback, Record};
pub use random::{RandomSource, ScriptedRandom};
pub use sequences::ReactionParams;
pub use stage::{SoundCue, Stage};
pub use state::{AppState, MoodState, ToggleState, TugPoint};
pub use timeline::{Effect, Position, Prop, Step, Target, TargetProps, Timeline, Tween};
