pub mod bounding_box;
pub mod constants;
pub mod frame;
pub mod json_document;
pub mod moment_record;
