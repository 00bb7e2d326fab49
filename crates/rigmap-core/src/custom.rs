//! Dynamic custom bone entries.
//!
//! The fixed group schemas cannot anticipate every bone a rigger might need
//! (tails, props, accessories), so this is the one open extension point in the
//! mapping. Entries are an explicit identifier-to-name table rather than
//! injected attributes; a removed identifier stays registered with an empty
//! value so its slot can be reused later.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifiers that cannot be used for dynamic entries.
const RESERVED_IDENTIFIERS: [&str; 1] = ["name"];

/// Open-ended set of custom bone mappings, plus the legacy single-bone field.
///
/// The legacy `name` field predates the dynamic entries and stores a bone
/// name directly. Both surfaces are kept; they are validated and copied
/// independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomBones {
    /// Legacy single custom bone. Holds a bone name, not a label.
    pub name: String,
    entries: BTreeMap<String, String>,
}

impl CustomBones {
    /// Registers a dynamic entry, or updates it if the identifier is already
    /// registered. Returns `false` for empty or reserved identifiers.
    pub fn add_bone(&mut self, identifier: &str, bone_name: &str) -> bool {
        if identifier.is_empty() || RESERVED_IDENTIFIERS.contains(&identifier) {
            return false;
        }
        self.entries
            .insert(identifier.to_string(), bone_name.to_string());
        true
    }

    /// Clears the entry's value. The identifier stays registered for the life
    /// of the set. Returns whether the identifier was registered.
    pub fn remove_bone(&mut self, identifier: &str) -> bool {
        match self.entries.get_mut(identifier) {
            Some(value) => {
                value.clear();
                true
            }
            None => false,
        }
    }

    /// Value of a registered entry. Cleared entries report an empty string.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.entries.get(identifier).map(String::as_str)
    }

    /// All (identifier, bone name) pairs with a non-empty value.
    pub fn get_bones(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .filter(|(_, value)| !value.is_empty())
            .map(|(identifier, value)| (identifier.as_str(), value.as_str()))
            .collect()
    }

    /// Every registered entry, cleared ones included, for in-place rewriting.
    pub fn entries_mut(&mut self) -> impl Iterator<Item = (&str, &mut String)> {
        self.entries
            .iter_mut()
            .map(|(identifier, value)| (identifier.as_str(), value))
    }

    /// True if any entry is non-empty or the legacy field is set.
    pub fn has_settings(&self) -> bool {
        !self.name.is_empty() || self.entries.values().any(|value| !value.is_empty())
    }
}
