use std::path::Path;

use crate::shared::frame::Frame;

/// Decodes an image file (a UI-element template) into a [`Frame`].
pub trait ImageReader: Send {
    /// A failure here is a hard load error, distinct from a negative
    /// detection; callers decide whether it aborts or degrades.
    fn read(&self, path: &Path) -> Result<Frame, Box<dyn std::error::Error>>;
}
