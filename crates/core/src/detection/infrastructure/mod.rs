pub mod json_trigger_map;
pub mod ncc_template_matcher;
