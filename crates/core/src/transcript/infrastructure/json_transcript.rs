use std::path::Path;

use serde::Deserialize;

use crate::shared::json_document::{self, MalformedInputError};
use crate::transcript::domain::segment::Segment;

/// Transcript document shape:
///
/// ```json
/// {
///   "segments": [
///     {"start": 0.1, "end": 1.2, "text": "..."}
///   ]
/// }
/// ```
#[derive(Deserialize)]
struct TranscriptDocument {
    segments: Vec<Segment>,
}

/// Loads transcript segments from a JSON document, in input order.
pub fn load_segments(path: &Path) -> Result<Vec<Segment>, MalformedInputError> {
    let doc: TranscriptDocument = json_document::load(path)?;
    Ok(doc.segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_doc(dir: &Path, body: &str) -> std::path::PathBuf {
        let path = dir.join("transcript.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_loads_segments_in_input_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            r#"{"segments": [
                {"start": 3.0, "end": 4.0, "text": "later"},
                {"start": 0.0, "end": 1.0, "text": "earlier"}
            ]}"#,
        );

        let segments = load_segments(&path).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "later");
        assert_eq!(segments[1].text, "earlier");
    }

    #[test]
    fn test_integer_timestamps_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            r#"{"segments": [{"start": 1, "end": 2, "text": "x"}]}"#,
        );
        let segments = load_segments(&path).unwrap();
        assert_eq!(segments[0].start, 1.0);
        assert_eq!(segments[0].end, 2.0);
    }

    #[test]
    fn test_empty_segment_list_is_valid() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path(), r#"{"segments": []}"#);
        assert!(load_segments(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_segments_field_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path(), "{}");
        let err = load_segments(&path).unwrap_err();
        assert!(matches!(err, MalformedInputError::Parse { .. }));
    }

    #[test]
    fn test_missing_text_field_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(dir.path(), r#"{"segments": [{"start": 0.0, "end": 1.0}]}"#);
        assert!(load_segments(&path).is_err());
    }

    #[test]
    fn test_non_numeric_end_is_malformed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_doc(
            dir.path(),
            r#"{"segments": [{"start": 0.0, "end": "soon", "text": "x"}]}"#,
        );
        assert!(load_segments(&path).is_err());
    }

    #[test]
    fn test_missing_file_is_malformed() {
        let err = load_segments(Path::new("/nonexistent/transcript.json")).unwrap_err();
        assert!(matches!(err, MalformedInputError::Read { .. }));
    }
}
