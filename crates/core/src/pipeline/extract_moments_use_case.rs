use std::path::{Path, PathBuf};

use crate::detection::domain::outline::draw_outline;
use crate::detection::domain::template_matcher::{MatchOutcome, TemplateMatcher};
use crate::detection::domain::trigger_map::TriggerIndex;
use crate::pipeline::metadata::write_metadata;
use crate::shared::bounding_box::BoundingBox;
use crate::shared::constants::{
    MARKED_CAPTURE_DIR, METADATA_FILENAME, OUTLINE_COLOR, OUTLINE_THICKNESS, RAW_CAPTURE_DIR,
};
use crate::shared::frame::Frame;
use crate::shared::moment_record::{round_to_millis, MomentRecord};
use crate::transcript::domain::keyword_selector::KeywordSelector;
use crate::transcript::domain::segment::Segment;
use crate::video::domain::frame_grabber::FrameGrabber;
use crate::video::domain::image_reader::ImageReader;
use crate::video::domain::image_writer::ImageWriter;

/// Key-moment extraction pipeline: select segments → capture a frame
/// per moment → locate and outline the triggered UI element → persist
/// captures and metadata.
///
/// Capture failures are fatal and abort the run; matching failures of
/// any kind degrade the affected moment to an unannotated capture and
/// never change the number of records produced. Holds no state across
/// runs; the output directory is an explicit argument.
pub struct ExtractMomentsUseCase {
    grabber: Box<dyn FrameGrabber>,
    image_writer: Box<dyn ImageWriter>,
    template_reader: Box<dyn ImageReader>,
    matcher: Box<dyn TemplateMatcher>,
    selector: KeywordSelector,
    triggers: TriggerIndex,
}

impl ExtractMomentsUseCase {
    pub fn new(
        grabber: Box<dyn FrameGrabber>,
        image_writer: Box<dyn ImageWriter>,
        template_reader: Box<dyn ImageReader>,
        matcher: Box<dyn TemplateMatcher>,
        selector: KeywordSelector,
        triggers: TriggerIndex,
    ) -> Self {
        Self {
            grabber,
            image_writer,
            template_reader,
            matcher,
            selector,
            triggers,
        }
    }

    /// Runs the full pipeline and returns the records it persisted.
    pub fn execute(
        &mut self,
        video: &Path,
        segments: &[Segment],
        output_dir: &Path,
    ) -> Result<Vec<MomentRecord>, Box<dyn std::error::Error>> {
        let selected = self.selector.select(segments);
        log::info!(
            "{} of {} transcript segments selected as key moments",
            selected.len(),
            segments.len()
        );

        let mut records = Vec::with_capacity(selected.len());
        for (index, segment) in selected.iter().enumerate() {
            let id = (index + 1) as u64;
            let timestamp = segment.midpoint();
            let raw_path = capture_path(output_dir, RAW_CAPTURE_DIR, id);
            let marked_path = capture_path(output_dir, MARKED_CAPTURE_DIR, id);

            let frame = self
                .grabber
                .grab(video, timestamp)
                .map_err(|e| format!("moment {id} at t={timestamp:.3}s: {e}"))?;
            self.image_writer
                .write(&raw_path, &frame)
                .map_err(|e| format!("moment {id}: writing {}: {e}", raw_path.display()))?;

            let bbox = self.try_highlight(id, segment, &frame, &marked_path);
            let marked_capture = if bbox.is_some() {
                marked_path
            } else {
                raw_path.clone()
            };

            records.push(MomentRecord {
                id,
                timestamp: round_to_millis(timestamp),
                text: segment.text.clone(),
                raw_capture: raw_path,
                marked_capture,
                bbox,
            });
        }

        let metadata_path = output_dir.join(METADATA_FILENAME);
        write_metadata(&metadata_path, &records)?;
        log::info!(
            "{} moment records written to {}",
            records.len(),
            metadata_path.display()
        );
        Ok(records)
    }

    /// Attempts to locate and outline the triggered element.
    ///
    /// Every failure mode here (no trigger, missing or unreadable
    /// template, score below threshold, marked-capture write error)
    /// is absorbed and reported as `None`.
    fn try_highlight(
        &self,
        id: u64,
        segment: &Segment,
        frame: &Frame,
        marked_path: &Path,
    ) -> Option<BoundingBox> {
        let template_path = self.triggers.template_for(&segment.text)?;
        if !template_path.exists() {
            log::warn!(
                "moment {id}: template {} not found, keeping raw capture",
                template_path.display()
            );
            return None;
        }

        let template = match self.template_reader.read(template_path) {
            Ok(t) => t,
            Err(e) => {
                log::warn!("moment {id}: {e}; keeping raw capture");
                return None;
            }
        };

        match self.matcher.locate(frame, &template) {
            MatchOutcome::Found { bbox, score } => {
                log::debug!(
                    "moment {id}: matched {} at ({}, {})-({}, {}) score {score:.3}",
                    template_path.display(),
                    bbox.x1,
                    bbox.y1,
                    bbox.x2,
                    bbox.y2
                );
                let mut marked = frame.clone();
                draw_outline(&mut marked, &bbox, OUTLINE_THICKNESS, OUTLINE_COLOR);
                match self.image_writer.write(marked_path, &marked) {
                    Ok(()) => Some(bbox),
                    Err(e) => {
                        log::warn!(
                            "moment {id}: writing {}: {e}; keeping raw capture",
                            marked_path.display()
                        );
                        None
                    }
                }
            }
            MatchOutcome::NotFound { best_score } => {
                log::debug!("moment {id}: no match (best score {best_score:.3})");
                None
            }
        }
    }
}

fn capture_path(output_dir: &Path, subdir: &str, id: u64) -> PathBuf {
    output_dir.join(subdir).join(format!("moment_{id:03}.png"))
}
