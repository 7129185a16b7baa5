pub mod json_transcript;
