pub mod outline;
pub mod template_matcher;
pub mod trigger_map;
