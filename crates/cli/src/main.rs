use std::path::PathBuf;
use std::process;

use clap::Parser;

use keymoments_core::detection::domain::trigger_map::TriggerIndex;
use keymoments_core::detection::infrastructure::json_trigger_map::load_trigger_map;
use keymoments_core::detection::infrastructure::ncc_template_matcher::NccTemplateMatcher;
use keymoments_core::pipeline::extract_moments_use_case::ExtractMomentsUseCase;
use keymoments_core::shared::constants::{
    DEFAULT_KEYWORDS, DEFAULT_MATCH_THRESHOLD, METADATA_FILENAME,
};
use keymoments_core::transcript::domain::keyword_selector::KeywordSelector;
use keymoments_core::transcript::infrastructure::json_transcript::load_segments;
use keymoments_core::video::infrastructure::ffmpeg_frame_grabber::FfmpegFrameGrabber;
use keymoments_core::video::infrastructure::image_file_reader::ImageFileReader;
use keymoments_core::video::infrastructure::image_file_writer::ImageFileWriter;

/// Extracts key-moment captures from a screen recording and outlines
/// the UI element each moment refers to.
#[derive(Parser)]
#[command(name = "keymoments")]
struct Cli {
    /// Input screen-recording video.
    #[arg(long)]
    video: PathBuf,

    /// Transcript JSON with timed segments.
    #[arg(long)]
    transcript: PathBuf,

    /// JSON map of trigger word to template image path.
    #[arg(long)]
    trigger_map: PathBuf,

    /// Output directory for captures and metadata.
    #[arg(long)]
    output: PathBuf,

    /// Template match acceptance threshold (0.0-1.0).
    #[arg(long, default_value_t = DEFAULT_MATCH_THRESHOLD)]
    threshold: f64,

    /// Comma-separated keywords that mark a segment as noteworthy
    /// (overrides the built-in set).
    #[arg(long, value_delimiter = ',')]
    keywords: Option<Vec<String>>,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let segments = load_segments(&cli.transcript)?;
    let trigger_map = load_trigger_map(&cli.trigger_map)?;

    let keywords = cli
        .keywords
        .unwrap_or_else(|| DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect());
    let selector = KeywordSelector::new(&keywords)?;
    let triggers = TriggerIndex::new(&trigger_map)?;

    log::info!(
        "Processing {} with {} triggers, threshold {}",
        cli.video.display(),
        trigger_map.len(),
        cli.threshold
    );

    let mut use_case = ExtractMomentsUseCase::new(
        Box::new(FfmpegFrameGrabber::new()),
        Box::new(ImageFileWriter::new()),
        Box::new(ImageFileReader::new()),
        Box::new(NccTemplateMatcher::new(cli.threshold)),
        selector,
        triggers,
    );
    let records = use_case.execute(&cli.video, &segments, &cli.output)?;

    println!("Captures generated: {}", records.len());
    println!("Metadata: {}", cli.output.join(METADATA_FILENAME).display());
    Ok(())
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.video.exists() {
        return Err(format!("Video file not found: {}", cli.video.display()).into());
    }
    if !cli.transcript.exists() {
        return Err(format!("Transcript file not found: {}", cli.transcript.display()).into());
    }
    if !cli.trigger_map.exists() {
        return Err(format!(
            "Trigger map file not found: {}",
            cli.trigger_map.display()
        )
        .into());
    }
    if !(0.0..=1.0).contains(&cli.threshold) {
        return Err(format!(
            "Threshold must be between 0.0 and 1.0, got {}",
            cli.threshold
        )
        .into());
    }
    if let Some(keywords) = &cli.keywords {
        if keywords.iter().any(|k| k.trim().is_empty()) {
            return Err("Keywords must not be empty".into());
        }
    }
    Ok(())
}
