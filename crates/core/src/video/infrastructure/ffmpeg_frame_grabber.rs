use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::shared::frame::Frame;
use crate::video::domain::frame_grabber::FrameGrabber;

/// A frame capture failure. `VideoOpen`-class variants mean the input
/// itself is unusable; the rest mean no frame could be produced at the
/// requested position. All of them abort the pipeline run.
#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("ffmpeg initialization failed: {0}")]
    Init(#[source] ffmpeg_next::Error),
    #[error("failed to open video {path}: {source}")]
    VideoOpen {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("no video stream in {path}")]
    NoVideoStream { path: PathBuf },
    #[error("decoder setup failed for {path}: {source}")]
    DecoderSetup {
        path: PathBuf,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("frame conversion failed at t={timestamp:.3}s: {source}")]
    Convert {
        timestamp: f64,
        #[source]
        source: ffmpeg_next::Error,
    },
    #[error("no frame available at t={timestamp:.3}s")]
    FrameUnavailable { timestamp: f64 },
}

/// Seek-and-decode frame capture via ffmpeg-next (libavformat +
/// libavcodec).
///
/// Seeks backward to the nearest keyframe at or before the target, then
/// decodes forward and returns the first frame whose presentation time
/// reaches the target, converted to RGB24. The container and decoder
/// are opened per call and dropped before returning.
pub struct FfmpegFrameGrabber;

impl FfmpegFrameGrabber {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FfmpegFrameGrabber {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameGrabber for FfmpegFrameGrabber {
    fn grab(
        &mut self,
        video: &Path,
        timestamp: f64,
    ) -> Result<Frame, Box<dyn std::error::Error>> {
        Ok(capture(video, timestamp)?)
    }
}

fn capture(path: &Path, timestamp: f64) -> Result<Frame, CaptureError> {
    ffmpeg_next::init().map_err(CaptureError::Init)?;

    let mut ictx = ffmpeg_next::format::input(path).map_err(|e| CaptureError::VideoOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    let stream = ictx
        .streams()
        .best(ffmpeg_next::media::Type::Video)
        .ok_or_else(|| CaptureError::NoVideoStream {
            path: path.to_path_buf(),
        })?;
    let stream_index = stream.index();

    let time_base = stream.time_base();
    let tick_seconds = if time_base.denominator() != 0 {
        time_base.numerator() as f64 / time_base.denominator() as f64
    } else {
        0.0
    };

    let codec_ctx = ffmpeg_next::codec::context::Context::from_parameters(stream.parameters())
        .map_err(|e| CaptureError::DecoderSetup {
            path: path.to_path_buf(),
            source: e,
        })?;
    let mut decoder = codec_ctx
        .decoder()
        .video()
        .map_err(|e| CaptureError::DecoderSetup {
            path: path.to_path_buf(),
            source: e,
        })?;

    let width = decoder.width();
    let height = decoder.height();

    let mut scaler = ffmpeg_next::software::scaling::Context::get(
        decoder.format(),
        width,
        height,
        ffmpeg_next::format::Pixel::RGB24,
        width,
        height,
        ffmpeg_next::software::scaling::Flags::BILINEAR,
    )
    .map_err(|e| CaptureError::DecoderSetup {
        path: path.to_path_buf(),
        source: e,
    })?;

    // Land on the keyframe at or before the target so the decoder can
    // roll forward to the exact position.
    let target_av = (timestamp * ffmpeg_next::ffi::AV_TIME_BASE as f64) as i64;
    if ictx.seek(target_av, ..target_av).is_err() {
        return Err(CaptureError::FrameUnavailable { timestamp });
    }

    let reaches_target = |decoded: &ffmpeg_next::util::frame::video::Video| {
        match decoded.timestamp() {
            Some(ts) => ts as f64 * tick_seconds >= timestamp,
            // No usable timestamps: take what the decoder gives us.
            None => true,
        }
    };

    let mut decoded = ffmpeg_next::util::frame::video::Video::empty();
    for (stream, packet) in ictx.packets() {
        if stream.index() != stream_index {
            continue;
        }
        if decoder.send_packet(&packet).is_err() {
            continue;
        }
        while decoder.receive_frame(&mut decoded).is_ok() {
            if reaches_target(&decoded) {
                return convert(&decoded, &mut scaler, width, height, timestamp);
            }
        }
    }

    // Drain frames still buffered in the decoder
    let _ = decoder.send_eof();
    while decoder.receive_frame(&mut decoded).is_ok() {
        if reaches_target(&decoded) {
            return convert(&decoded, &mut scaler, width, height, timestamp);
        }
    }

    Err(CaptureError::FrameUnavailable { timestamp })
}

fn convert(
    decoded: &ffmpeg_next::util::frame::video::Video,
    scaler: &mut ffmpeg_next::software::scaling::Context,
    width: u32,
    height: u32,
    timestamp: f64,
) -> Result<Frame, CaptureError> {
    let mut rgb_frame = ffmpeg_next::util::frame::video::Video::empty();
    scaler
        .run(decoded, &mut rgb_frame)
        .map_err(|e| CaptureError::Convert { timestamp, source: e })?;
    Ok(Frame::new(
        extract_rgb_pixels(&rgb_frame, width, height),
        width,
        height,
        3,
    ))
}

/// Copies pixel data from an ffmpeg frame into a contiguous RGB buffer.
///
/// ffmpeg frames may have padding bytes at the end of each row
/// (stride > width*3); this strips the padding.
fn extract_rgb_pixels(
    rgb_frame: &ffmpeg_next::util::frame::video::Video,
    width: u32,
    height: u32,
) -> Vec<u8> {
    let stride = rgb_frame.stride(0);
    let data = rgb_frame.data(0);
    let w = width as usize;
    let h = height as usize;

    let mut pixels = Vec::with_capacity(w * h * 3);
    for row in 0..h {
        let row_start = row * stride;
        pixels.extend_from_slice(&data[row_start..row_start + w * 3]);
    }
    pixels
}
