use ndarray::{s, Array2};

use crate::detection::domain::template_matcher::{MatchOutcome, TemplateMatcher};
use crate::shared::bounding_box::BoundingBox;
use crate::shared::frame::Frame;

/// Exhaustive translation search scored by zero-mean normalized
/// cross-correlation on grayscale pixels.
///
/// Scores lie in [-1, 1]; a location is accepted only when the best
/// score reaches the threshold. Per-window mean and variance come from
/// integral images so only the correlation term is recomputed per
/// location. Ties resolve to the first location in row-major order.
pub struct NccTemplateMatcher {
    threshold: f64,
}

impl NccTemplateMatcher {
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }
}

impl TemplateMatcher for NccTemplateMatcher {
    fn locate(&self, source: &Frame, template: &Frame) -> MatchOutcome {
        let src = to_gray(source);
        let tpl = to_gray(template);

        let (sh, sw) = src.dim();
        let (th, tw) = tpl.dim();
        if th == 0 || tw == 0 || th > sh || tw > sw {
            return MatchOutcome::NotFound { best_score: 0.0 };
        }

        let n = (th * tw) as f64;
        let tpl_mean = tpl.sum() / n;
        let tpl_centered = tpl.mapv(|v| v - tpl_mean);
        let tpl_energy: f64 = tpl_centered.iter().map(|v| v * v).sum();
        if tpl_energy <= f64::EPSILON {
            // A flat template correlates with nothing meaningfully.
            return MatchOutcome::NotFound { best_score: 0.0 };
        }

        let sums = integral(&src);
        let square_sums = integral(&src.mapv(|v| v * v));

        let mut best_score = f64::NEG_INFINITY;
        let mut best_at = (0usize, 0usize);

        for y in 0..=(sh - th) {
            for x in 0..=(sw - tw) {
                let sum = window_sum(&sums, y, x, th, tw);
                let square_sum = window_sum(&square_sums, y, x, th, tw);
                let window_energy = square_sum - sum * sum / n;

                let score = if window_energy <= f64::EPSILON {
                    0.0
                } else {
                    let window = src.slice(s![y..y + th, x..x + tw]);
                    // Sum of tpl_centered is zero, so the window mean
                    // drops out of the correlation term.
                    let dot: f64 = window
                        .iter()
                        .zip(tpl_centered.iter())
                        .map(|(w, t)| w * t)
                        .sum();
                    dot / (tpl_energy * window_energy).sqrt()
                };

                if score > best_score {
                    best_score = score;
                    best_at = (x, y);
                }
            }
        }

        if best_score >= self.threshold {
            let (x, y) = best_at;
            MatchOutcome::Found {
                bbox: BoundingBox::new(
                    x as i32,
                    y as i32,
                    (x + tw) as i32,
                    (y + th) as i32,
                ),
                score: best_score,
            }
        } else {
            MatchOutcome::NotFound {
                best_score: best_score.max(0.0),
            }
        }
    }
}

/// ITU-R BT.601 luma, one f64 per pixel.
fn to_gray(frame: &Frame) -> Array2<f64> {
    let h = frame.height() as usize;
    let w = frame.width() as usize;
    let channels = frame.channels() as usize;
    let data = frame.data();

    Array2::from_shape_fn((h, w), |(y, x)| {
        let i = (y * w + x) * channels;
        if channels >= 3 {
            0.299 * data[i] as f64 + 0.587 * data[i + 1] as f64 + 0.114 * data[i + 2] as f64
        } else {
            data[i] as f64
        }
    })
}

/// Zero-padded summed-area table: entry `(y, x)` holds the sum of the
/// rectangle `[0, y) x [0, x)`.
fn integral(src: &Array2<f64>) -> Array2<f64> {
    let (h, w) = src.dim();
    let mut table = Array2::zeros((h + 1, w + 1));
    for y in 0..h {
        let mut row_sum = 0.0;
        for x in 0..w {
            row_sum += src[[y, x]];
            table[[y + 1, x + 1]] = table[[y, x + 1]] + row_sum;
        }
    }
    table
}

fn window_sum(table: &Array2<f64>, y: usize, x: usize, h: usize, w: usize) -> f64 {
    table[[y + h, x + w]] - table[[y, x + w]] - table[[y + h, x]] + table[[y, x]]
}
