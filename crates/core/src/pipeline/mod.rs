pub mod extract_moments_use_case;
pub mod metadata;
