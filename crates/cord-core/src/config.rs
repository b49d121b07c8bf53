use crate::error::SetupError;
use glam::Vec2;

/// Static scene facts read once at setup.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    /// Resting end of the dummy cord line (`x2`, `y2`).
    pub reference_endpoint: Vec2,
    /// Number of cord shapes; index 0 is the live segment.
    pub segment_count: usize,
}

impl SceneConfig {
    pub fn new(reference_endpoint: Vec2, segment_count: usize) -> Self {
        Self {
            reference_endpoint,
            segment_count,
        }
    }

    /// Build from the raw `x2`/`y2` attribute strings of the dummy cord line.
    pub fn from_attributes(x2: &str, y2: &str, segment_count: usize) -> Result<Self, SetupError> {
        let x = parse_attr("x2", x2)?;
        let y = parse_attr("y2", y2)?;
        Ok(Self::new(Vec2::new(x, y), segment_count))
    }
}

fn parse_attr(name: &'static str, raw: &str) -> Result<f32, SetupError> {
    raw.trim()
        .parse::<f32>()
        .map_err(|source| SetupError::BadAttribute {
            name,
            value: raw.to_string(),
            source,
        })
}
