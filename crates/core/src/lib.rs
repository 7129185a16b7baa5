pub mod detection;
pub mod pipeline;
pub mod shared;
pub mod transcript;
pub mod video;
