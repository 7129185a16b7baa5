use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

/// Draws a rectangle outline around a detected region, in place.
///
/// The outline bands lie inside the box and are clamped to the frame,
/// so boxes touching an edge stay visible instead of panicking.
pub fn draw_outline(frame: &mut Frame, bbox: &BoundingBox, thickness: u32, color: [u8; 3]) {
    let fw = frame.width() as i32;
    let fh = frame.height() as i32;
    let t = thickness as i32;

    let x1 = bbox.x1.clamp(0, fw);
    let y1 = bbox.y1.clamp(0, fh);
    let x2 = bbox.x2.clamp(0, fw);
    let y2 = bbox.y2.clamp(0, fh);
    if x1 >= x2 || y1 >= y2 {
        return;
    }

    let channels = (frame.channels() as usize).min(color.len());
    let mut px = frame.as_ndarray_mut();

    let mut paint = |x: i32, y: i32| {
        for (c, &value) in color.iter().enumerate().take(channels) {
            px[[y as usize, x as usize, c]] = value;
        }
    };

    // Horizontal bands
    for y in (y1..(y1 + t).min(y2)).chain((y2 - t).max(y1)..y2) {
        for x in x1..x2 {
            paint(x, y);
        }
    }
    // Vertical bands
    for x in (x1..(x1 + t).min(x2)).chain((x2 - t).max(x1)..x2) {
        for y in y1..y2 {
            paint(x, y);
        }
    }
}
