use serde::Deserialize;

/// A timed transcript unit. Immutable once loaded; `start <= end`,
/// both in seconds from the beginning of the recording.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    /// The representative instant of the segment, used as the capture
    /// timestamp.
    pub fn midpoint(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}
