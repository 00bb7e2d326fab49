//! Bone-name validation against a target armature.
//!
//! Mapped names authored in a preset often lack the armature-wide namespace
//! prefix some rigs put on every bone (e.g. `Rig:Hips`). Validation is a pure
//! name-rewrite pass: each stored name is kept if it exists on the armature,
//! rewritten to its prefixed form if that exists, and cleared otherwise. It
//! never searches for alternative bones and is idempotent.

use std::collections::HashSet;

use crate::groups::BoneFields;
use crate::skeleton::{SkeletonMapping, GROUP_NAMES};

/// Separator between a namespace prefix and the bone name proper.
pub const DEFAULT_SEPARATOR: char = ':';

/// Derives the shared namespace prefix from the armature's first bone name:
/// everything up to and including the last `separator`, or empty when the
/// name carries no separator.
pub fn name_prefix(first_bone: &str, separator: char) -> String {
    match first_bone.rfind(separator) {
        Some(pos) => first_bone[..pos + separator.len_utf8()].to_string(),
        None => String::new(),
    }
}

/// Resolution of one stored bone name against the armature's bone set.
/// `None` means the name is left untouched.
fn resolve(current: &str, known: &HashSet<&str>, prefix: &str) -> Option<String> {
    if current.is_empty() || known.contains(current) {
        return None;
    }
    let with_prefix = format!("{prefix}{current}");
    if known.contains(with_prefix.as_str()) {
        Some(with_prefix)
    } else {
        Some(String::new())
    }
}

/// Rewrites every bone-role field in `settings` so that, afterwards, each is
/// either empty or the exact name of a bone in `bones`.
///
/// `bones` is the literal, ordered bone list of the target armature; the
/// prefix candidate is taken from its first entry. An empty list clears every
/// mapped name.
pub fn validate_mapping(settings: &mut SkeletonMapping, bones: &[String], separator: char) {
    let known: HashSet<&str> = bones.iter().map(String::as_str).collect();
    let prefix = bones
        .first()
        .map(|name| name_prefix(name, separator))
        .unwrap_or_default();

    for name in GROUP_NAMES {
        let Some(group) = settings.group_mut(name) else {
            continue;
        };
        for slot in group.slots() {
            let fixed = group.get(slot).and_then(|v| resolve(v, &known, &prefix));
            if let Some(fixed) = fixed {
                group.set(slot, &fixed);
            }
        }
    }

    // Legacy single custom bone.
    if let Some(fixed) = resolve(&settings.custom.name, &known, &prefix) {
        settings.custom.name = fixed;
    }

    // Dynamic custom bone entries.
    for (_, value) in settings.custom.entries_mut() {
        if let Some(fixed) = resolve(value, &known, &prefix) {
            *value = fixed;
        }
    }

    // Root bone.
    if let Some(fixed) = resolve(&settings.root, &known, &prefix) {
        settings.root = fixed;
    }

    for hand in [&mut settings.left_fingers, &mut settings.right_fingers] {
        for (_, finger) in hand.fingers_mut() {
            for slot in finger.slots() {
                let fixed = finger.get(slot).and_then(|v| resolve(v, &known, &prefix));
                if let Some(fixed) = fixed {
                    finger.set(slot, &fixed);
                }
            }
        }
    }
}
