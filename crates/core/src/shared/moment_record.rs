use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::shared::bounding_box::BoundingBox;

/// One entry of the output metadata document: a selected transcript
/// segment together with its captured frames and optional detection.
///
/// `marked_capture` equals `raw_capture` exactly when `bbox` is absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MomentRecord {
    /// 1-based position within the run, contiguous across all records.
    pub id: u64,
    /// Segment midpoint in seconds, rounded to millisecond precision.
    pub timestamp: f64,
    pub text: String,
    pub raw_capture: PathBuf,
    pub marked_capture: PathBuf,
    pub bbox: Option<BoundingBox>,
}

/// Rounds a timestamp in seconds to millisecond precision.
///
/// Idempotent: re-rounding an already-rounded value is a no-op.
pub fn round_to_millis(seconds: f64) -> f64 {
    (seconds * 1000.0).round() / 1000.0
}
