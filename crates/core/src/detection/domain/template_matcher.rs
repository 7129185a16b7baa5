use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

/// Result of searching a frame for a template.
///
/// A miss is an ordinary value, not an error: hard failures (unreadable
/// input) are reported separately by the image-loading layer. `NotFound`
/// keeps the best score seen so misses can be diagnosed from logs.
#[derive(Clone, Debug, PartialEq)]
pub enum MatchOutcome {
    Found { bbox: BoundingBox, score: f64 },
    NotFound { best_score: f64 },
}

impl MatchOutcome {
    pub fn bbox(&self) -> Option<&BoundingBox> {
        match self {
            MatchOutcome::Found { bbox, .. } => Some(bbox),
            MatchOutcome::NotFound { .. } => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, MatchOutcome::Found { .. })
    }
}

/// Locates the best-aligned copy of a template inside a source frame.
///
/// Exact-scale, axis-aligned translation search only; rotation, scale
/// and occlusion are out of scope for implementations.
pub trait TemplateMatcher: Send {
    fn locate(&self, source: &Frame, template: &Frame) -> MatchOutcome;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_exposes_bbox() {
        let outcome = MatchOutcome::Found {
            bbox: BoundingBox::new(1, 2, 3, 4),
            score: 0.9,
        };
        assert!(outcome.is_found());
        assert_eq!(outcome.bbox(), Some(&BoundingBox::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_not_found_has_no_bbox() {
        let outcome = MatchOutcome::NotFound { best_score: 0.4 };
        assert!(!outcome.is_found());
        assert_eq!(outcome.bbox(), None);
    }
}
