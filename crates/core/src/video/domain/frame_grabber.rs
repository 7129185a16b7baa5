use std::path::Path;

use crate::shared::frame::Frame;

/// Captures a single frame from a video by timestamp.
///
/// Implementations handle I/O details (codec, container, seeking) and
/// must scope decoder resources to the call: acquired on entry,
/// released on every exit path, so handles never accumulate across a
/// per-moment loop.
pub trait FrameGrabber: Send {
    /// Decodes the nearest frame at or after `timestamp` seconds.
    ///
    /// Errors are fatal to the pipeline: the video could not be opened,
    /// or no frame could be decoded at that position.
    fn grab(&mut self, video: &Path, timestamp: f64)
        -> Result<Frame, Box<dyn std::error::Error>>;
}
