use std::path::Path;

use crate::detection::domain::trigger_map::TriggerMap;
use crate::shared::json_document::{self, MalformedInputError};

/// Trigger-map document shape:
///
/// ```json
/// {
///   "client": "templates/client_icon.png",
///   "search": "templates/search_icon.png"
/// }
/// ```
///
/// Entry order is significant and survives loading.
pub fn load_trigger_map(path: &Path) -> Result<TriggerMap, MalformedInputError> {
    json_document::load(path)
}
