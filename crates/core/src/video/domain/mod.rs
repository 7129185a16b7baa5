pub mod frame_grabber;
pub mod image_reader;
pub mod image_writer;
