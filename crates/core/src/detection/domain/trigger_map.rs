use std::fmt;
use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Trigger word/phrase → template image path, in document order.
///
/// Order matters: when several triggers match the same segment text,
/// the earliest entry wins. Loaded once per run, read-only afterward.
#[derive(Clone, Debug, PartialEq)]
pub struct TriggerMap {
    entries: Vec<(String, PathBuf)>,
}

impl TriggerMap {
    pub fn new(entries: Vec<(String, PathBuf)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, PathBuf)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// JSON objects deserialize through a map visitor so that entry order
// survives parsing; a plain map type would re-sort the keys.
impl<'de> Deserialize<'de> for TriggerMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct TriggerMapVisitor;

        impl<'de> Visitor<'de> for TriggerMapVisitor {
            type Value = TriggerMap;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of trigger word to template image path")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries: Vec<(String, PathBuf)> =
                    Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((trigger, template)) = map.next_entry::<String, PathBuf>()? {
                    if entries.iter().any(|(t, _)| t == &trigger) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate trigger '{trigger}'"
                        )));
                    }
                    entries.push((trigger, template));
                }
                Ok(TriggerMap { entries })
            }
        }

        deserializer.deserialize_map(TriggerMapVisitor)
    }
}

/// Precompiled whole-word matchers over a [`TriggerMap`].
///
/// Built once per pipeline invocation; lookup scans entries in map
/// order and the first trigger found in the text wins.
pub struct TriggerIndex {
    triggers: Vec<(Regex, PathBuf)>,
}

impl TriggerIndex {
    pub fn new(map: &TriggerMap) -> Result<Self, regex::Error> {
        let triggers = map
            .entries()
            .iter()
            .map(|(trigger, template)| {
                RegexBuilder::new(&format!(r"\b{}\b", regex::escape(trigger)))
                    .case_insensitive(true)
                    .build()
                    .map(|p| (p, template.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { triggers })
    }

    /// Template for the first trigger appearing in the text, if any.
    pub fn template_for(&self, text: &str) -> Option<&Path> {
        self.triggers
            .iter()
            .find(|(pattern, _)| pattern.is_match(text))
            .map(|(_, template)| template.as_path())
    }
}
