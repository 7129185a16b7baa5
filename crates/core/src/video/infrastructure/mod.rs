pub mod ffmpeg_frame_grabber;
pub mod image_file_reader;
pub mod image_file_writer;
