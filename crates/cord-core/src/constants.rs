/// Fixed timing and geometry of the cord and bear vignette.
///
/// Durations are in seconds (the animation engine's time unit); offsets are
/// percentages of the target's own box unless noted otherwise.
// Tug detection
pub const TUG_THRESHOLD: f32 = 50.0; // release distance (pointer units) that counts as a pull
pub const CORD_DURATION: f32 = 0.1; // dummy-cord spring back and each morph half-step

// Door
pub const DOOR_OPEN_ANGLE: f32 = 25.0; // rotateY degrees
pub const DOOR_SWING_DURATION: f32 = 0.2;

// Bear slide-in
pub const BEAR_SLIDE_X_PERCENT: f32 = -55.0;
pub const BEAR_SLIDE_HOLD: f32 = 1.0; // pause in view before sliding back
pub const BEAR_APPEAR_GATE: f32 = 0.25; // draw must exceed this for the bear to show
pub const GROAN_COIN: f32 = 0.5; // draw above picks the long groan

// Arm swing tiers
pub const ARM_SWING_CALM: f32 = 0.4;
pub const ARM_SWING_ANGRY: f32 = 0.2;
pub const SLIDE_ANGRY: f32 = 0.2;
pub const SLIDE_RANGE: (f32, f32) = (0.2, 0.6);
pub const CLOSE_DELAY_RANGE: (f32, f32) = (0.2, 2.0);

// Anger thresholds (strictly greater / at least, as named)
pub const ANGER_FAST_ARMS_ABOVE: u32 = 4;
pub const ANGER_FAST_SLIDE_ABOVE: u32 = 7;
pub const ANGER_HESITATE_FROM: u32 = 1;
pub const ANGER_BEAR_FROM: u32 = 2;
pub const ANGER_BROWS_FROM: u32 = 4;

// Arm and paw poses
pub const ARM_REST_ROTATION: f32 = -90.0;
pub const ARM_REST_X_PERCENT: f32 = 10.0;
pub const ARM_OVERSHOOT_ROTATION: f32 = 5.0;
pub const PAW_LEAD: f32 = 0.2; // paw starts this long before the arms finish closing
pub const PAW_DURATION: f32 = 0.1;
pub const KNUCKLES_GRIP_X_PERCENT: f32 = 10.0;
pub const PAW_RELEASE_X_PERCENT: f32 = -28.0;

// Dummy-cord yank (SVG user units, added to the reference endpoint)
pub const YANK_OFFSET: (f32, f32) = (20.0, 60.0);
