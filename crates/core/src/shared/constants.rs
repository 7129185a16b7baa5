/// Keywords that mark a transcript segment as a key moment when no
/// custom set is supplied.
pub const DEFAULT_KEYWORDS: &[&str] = &["icon", "button", "menu", "search", "client", "settings"];

/// Minimum correlation score for a template match to be accepted.
pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.7;

pub const RAW_CAPTURE_DIR: &str = "raw";
pub const MARKED_CAPTURE_DIR: &str = "marked";
pub const METADATA_FILENAME: &str = "moments.json";

/// Outline drawn around a detected element: 3 px, red.
pub const OUTLINE_THICKNESS: u32 = 3;
pub const OUTLINE_COLOR: [u8; 3] = [255, 0, 0];
