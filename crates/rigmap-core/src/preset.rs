//! Preset files: enumeration, parsing, and application.
//!
//! A preset is a small declarative file describing the bone-name mapping for
//! one source rig. The format is inherited from the host scripting days: the
//! first two statements are host-context boilerplate, every later statement
//! assigns a literal bone name to a `skeleton.<group>.<slot>` path:
//!
//! ```text
//! import bpy
//! skeleton = bpy.context.object.data.retarget_settings
//! skeleton.spine.hips = 'Hips'
//! skeleton.left_fingers.thumb.a = 'Thumb1_L'
//! skeleton.custom.tail01 = 'Tail_01'
//! skeleton.face.super_copy = True
//! skeleton.root = 'Root'
//! ```
//!
//! The reader parses these assignments into key paths and applies them
//! through the explicit group tables; nothing is ever executed. Unknown paths
//! and malformed lines are skipped, never fatal.

use std::fs;
use std::io;
use std::path::Path;

use serde::Serialize;

use crate::error::PresetError;
use crate::groups::{BoneFields, HandGroup};
use crate::skeleton::SkeletonMapping;
use crate::validate::validate_mapping;

/// File extension required of preset files.
pub const PRESET_EXT: &str = ".py";

/// Identifier of the "none selected" sentinel entry.
pub const NO_PRESET: &str = "--";

/// Identifier of the "use current settings" sentinel entry.
pub const CURRENT_SETTINGS: &str = "--Current--";

/// One entry in the preset enumeration: identifier, display label,
/// description. The host UI consumes these as menu items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresetEntry {
    pub identifier: String,
    pub label: String,
    pub description: String,
}

impl PresetEntry {
    fn new(
        identifier: impl Into<String>,
        label: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            label: label.into(),
            description: description.into(),
        }
    }
}

/// Lists the available presets as ordered (identifier, label, description)
/// triples.
///
/// The first entry is always the "none selected" sentinel; with
/// `with_current` a "use current settings" sentinel follows. File-derived
/// entries come after, in directory listing order, filtered to the preset
/// extension, labels title-cased from the file stem. A missing or unreadable
/// directory yields the sentinels alone.
pub fn list_presets(dir: &Path, with_current: bool) -> Vec<PresetEntry> {
    let mut entries = vec![PresetEntry::new(NO_PRESET, "--", "None")];
    if with_current {
        entries.push(PresetEntry::new(
            CURRENT_SETTINGS,
            "-- Current Settings --",
            "Use bones set in the retarget settings",
        ));
    }

    if let Ok(listing) = fs::read_dir(dir) {
        for entry in listing.flatten() {
            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            let Some(stem) = name.strip_suffix(PRESET_EXT) else {
                continue;
            };
            entries.push(PresetEntry::new(name, title_case(stem), ""));
        }
    }

    entries
}

/// Title-cases a file stem for display: the first letter of every
/// alphanumeric word run is uppercased, the rest lowercased.
fn title_case(stem: &str) -> String {
    let mut out = String::with_capacity(stem.len());
    let mut word_start = true;
    for ch in stem.chars() {
        if ch.is_alphabetic() {
            if word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            word_start = false;
        } else {
            out.push(ch);
            word_start = true;
        }
    }
    out
}

/// Loads a preset in isolation, producing a fresh mapping.
///
/// Returns `Ok(None)` when `preset` does not name a loadable preset: empty
/// identifier, wrong extension, or no such file in `dir`. Absence is a
/// signal, not a failure. Nothing outside the returned mapping is touched.
pub fn load_preset(dir: &Path, preset: &str) -> Result<Option<SkeletonMapping>, PresetError> {
    let mut mapping = SkeletonMapping::default();
    Ok(load_preset_into(dir, preset, &mut mapping)?.then_some(mapping))
}

/// Loads a preset into a caller-supplied mapping. Returns whether a preset
/// file was found and applied.
pub fn load_preset_into(
    dir: &Path,
    preset: &str,
    settings: &mut SkeletonMapping,
) -> Result<bool, PresetError> {
    if preset.is_empty() || !preset.ends_with(PRESET_EXT) {
        return Ok(false);
    }
    let path = dir.join(preset);
    if !path.is_file() {
        return Ok(false);
    }
    let text = fs::read_to_string(&path)?;
    parse_into(&text, settings);
    Ok(true)
}

/// Applies a preset to the live settings of a target armature, then
/// validates the result against the armature's literal bone list. Returns
/// whether a preset was applied.
pub fn apply_preset(
    dir: &Path,
    preset: &str,
    settings: &mut SkeletonMapping,
    bones: &[String],
    separator: char,
) -> Result<bool, PresetError> {
    if !load_preset_into(dir, preset, settings)? {
        return Ok(false);
    }
    validate_mapping(settings, bones, separator);
    Ok(true)
}

/// Copies every bundled preset file into the retarget preset directory,
/// creating it as needed. Returns the number of files copied.
pub fn install_presets(bundled_dir: &Path, retarget_dir: &Path) -> io::Result<usize> {
    fs::create_dir_all(retarget_dir)?;
    let mut copied = 0;
    for entry in fs::read_dir(bundled_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        fs::copy(entry.path(), retarget_dir.join(entry.file_name()))?;
        copied += 1;
    }
    Ok(copied)
}

/// Parsed right-hand side of a preset assignment.
enum Value {
    Name(String),
    Flag(bool),
}

/// Parses preset statements into `settings`. The first two statements are
/// the host boilerplate (the import and the binding of `skeleton` to the
/// live settings object) and are stripped.
fn parse_into(text: &str, settings: &mut SkeletonMapping) {
    let mut statements = 0usize;
    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        statements += 1;
        if statements <= 2 {
            continue;
        }
        apply_line(line, settings);
    }
}

/// Parses one assignment statement and applies it. Anything that is not a
/// well-formed `skeleton.<path> = <value>` line is skipped.
fn apply_line(line: &str, settings: &mut SkeletonMapping) {
    let Some((lhs, rhs)) = line.split_once('=') else {
        return;
    };
    let Some(path) = lhs.trim().strip_prefix("skeleton.") else {
        return;
    };
    let Some(value) = parse_value(rhs.trim()) else {
        return;
    };
    apply_assignment(settings, path, &value);
}

/// Parses a quoted bone name or a boolean literal.
fn parse_value(raw: &str) -> Option<Value> {
    if raw == "True" {
        return Some(Value::Flag(true));
    }
    if raw == "False" {
        return Some(Value::Flag(false));
    }
    for quote in ['\'', '"'] {
        if let Some(inner) = raw.strip_prefix(quote).and_then(|r| r.strip_suffix(quote)) {
            if !inner.contains(quote) {
                return Some(Value::Name(inner.to_string()));
            }
        }
    }
    None
}

/// Routes a key path to the matching group/slot through the explicit tables.
/// Unknown paths are ignored.
fn apply_assignment(settings: &mut SkeletonMapping, path: &str, value: &Value) {
    let parts: Vec<&str> = path.split('.').collect();
    match (parts.as_slice(), value) {
        (["root"], Value::Name(v)) => settings.root.clone_from(v),
        (["face", "super_copy"], Value::Flag(v)) => settings.face.super_copy = *v,
        (["custom", "name"], Value::Name(v)) => settings.custom.name.clone_from(v),
        (["custom", identifier], Value::Name(v)) => {
            settings.custom.add_bone(identifier, v);
        }
        (["left_fingers", finger, slot], Value::Name(v)) => {
            set_finger(&mut settings.left_fingers, finger, slot, v);
        }
        (["right_fingers", finger, slot], Value::Name(v)) => {
            set_finger(&mut settings.right_fingers, finger, slot, v);
        }
        ([group, slot], Value::Name(v)) => {
            if let Some(group) = settings.group_mut(group) {
                group.set(slot, v);
            }
        }
        _ => {}
    }
}

fn set_finger(hand: &mut HandGroup, finger: &str, slot: &str, value: &str) {
    if let Some(finger) = hand.finger_mut(finger) {
        finger.set(slot, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const SAMPLE_PRESET: &str = "\
import bpy
skeleton = bpy.context.object.data.retarget_settings
skeleton.spine.hips = 'Hips'
skeleton.spine.head = 'Head'
skeleton.left_arm.shoulder = 'Shoulder_L'
skeleton.left_fingers.thumb.a = 'Thumb1_L'
skeleton.custom.tail01 = 'Tail_01'
skeleton.custom.name = 'Extra'
skeleton.face.super_copy = False
skeleton.root = 'Root'
";

    fn preset_dir(files: &[(&str, &str)]) -> TempDir {
        let dir = TempDir::new().unwrap();
        for (name, contents) in files {
            fs::write(dir.path().join(name), contents).unwrap();
        }
        dir
    }

    #[test]
    fn load_preset_populates_fresh_mapping() {
        let dir = preset_dir(&[("source_rig.py", SAMPLE_PRESET)]);
        let mapping = load_preset(dir.path(), "source_rig.py").unwrap().unwrap();

        assert_eq!(mapping.spine.hips, "Hips");
        assert_eq!(mapping.spine.head, "Head");
        assert_eq!(mapping.left_arm.shoulder, "Shoulder_L");
        assert_eq!(mapping.left_fingers.thumb.a, "Thumb1_L");
        assert_eq!(mapping.custom.get("tail01"), Some("Tail_01"));
        assert_eq!(mapping.custom.name, "Extra");
        assert!(!mapping.face.super_copy);
        assert_eq!(mapping.root, "Root");
    }

    #[test]
    fn absence_signals_not_errors() {
        let dir = preset_dir(&[("source_rig.py", SAMPLE_PRESET)]);
        // Empty identifier, wrong extension, missing file.
        assert!(load_preset(dir.path(), "").unwrap().is_none());
        assert!(load_preset(dir.path(), "source_rig.json").unwrap().is_none());
        assert!(load_preset(dir.path(), "missing.py").unwrap().is_none());
    }

    #[test]
    fn boilerplate_statements_are_stripped() {
        // The first two statements must not leak into the mapping even when
        // they happen to look like skeleton assignments.
        let text = "\
skeleton.spine.hips = 'FromBoilerplate'
skeleton.spine.head = 'AlsoBoilerplate'
skeleton.spine.neck = 'Neck'
";
        let dir = preset_dir(&[("odd.py", text)]);
        let mapping = load_preset(dir.path(), "odd.py").unwrap().unwrap();
        assert_eq!(mapping.spine.hips, "");
        assert_eq!(mapping.spine.head, "");
        assert_eq!(mapping.spine.neck, "Neck");
    }

    #[test]
    fn comments_and_blank_lines_are_not_statements() {
        let text = "\
# header comment
import bpy

skeleton = bpy.context.object.data.retarget_settings
# mapping starts here
skeleton.spine.hips = 'Hips'
";
        let dir = preset_dir(&[("commented.py", text)]);
        let mapping = load_preset(dir.path(), "commented.py").unwrap().unwrap();
        assert_eq!(mapping.spine.hips, "Hips");
    }

    #[test]
    fn malformed_lines_degrade_to_noops() {
        let text = "\
import bpy
skeleton = bpy.context.object.data.retarget_settings
skeleton.spine.hips = 'Hips'
skeleton.unknown_group.slot = 'X'
skeleton.spine.no_such_slot = 'Y'
not an assignment at all
skeleton.spine.neck = unquoted
skeleton.left_fingers.sixth.a = 'Z'
";
        let dir = preset_dir(&[("messy.py", text)]);
        let mapping = load_preset(dir.path(), "messy.py").unwrap().unwrap();
        assert_eq!(mapping.spine.hips, "Hips");
        assert_eq!(mapping.spine.neck, "");
    }

    #[test]
    fn double_quoted_names_accepted() {
        let text = "\
import bpy
skeleton = bpy.context.object.data.retarget_settings
skeleton.spine.hips = \"Hips\"
";
        let dir = preset_dir(&[("dq.py", text)]);
        let mapping = load_preset(dir.path(), "dq.py").unwrap().unwrap();
        assert_eq!(mapping.spine.hips, "Hips");
    }

    #[test]
    fn load_preset_into_existing_settings() {
        let dir = preset_dir(&[("source_rig.py", SAMPLE_PRESET)]);
        let mut settings = SkeletonMapping::default();
        settings.right_leg.foot = "Foot_R".to_string();

        assert!(load_preset_into(dir.path(), "source_rig.py", &mut settings).unwrap());
        // Preset slots are applied, unrelated slots survive.
        assert_eq!(settings.spine.hips, "Hips");
        assert_eq!(settings.right_leg.foot, "Foot_R");
    }

    #[test]
    fn apply_preset_validates_against_bone_list() {
        let dir = preset_dir(&[("source_rig.py", SAMPLE_PRESET)]);
        let mut settings = SkeletonMapping::default();
        let bones: Vec<String> = ["Rig:Hips", "Rig:Shoulder_L", "Rig:Root"]
            .iter()
            .map(|n| n.to_string())
            .collect();

        assert!(apply_preset(dir.path(), "source_rig.py", &mut settings, &bones, ':').unwrap());
        assert_eq!(settings.spine.hips, "Rig:Hips");
        assert_eq!(settings.left_arm.shoulder, "Rig:Shoulder_L");
        assert_eq!(settings.root, "Rig:Root");
        // Not on the armature: cleared.
        assert_eq!(settings.spine.head, "");
        assert_eq!(settings.left_fingers.thumb.a, "");
    }

    #[test]
    fn apply_preset_absence_is_a_noop() {
        let dir = preset_dir(&[]);
        let mut settings = SkeletonMapping::default();
        settings.spine.hips = "Keep".to_string();
        assert!(!apply_preset(dir.path(), "missing.py", &mut settings, &[], ':').unwrap());
        assert_eq!(settings.spine.hips, "Keep");
    }

    #[test]
    fn list_presets_sentinels_first() {
        let dir = preset_dir(&[("mixamo.py", ""), ("notes.txt", ""), ("rigify_meta.py", "")]);

        let entries = list_presets(dir.path(), false);
        assert_eq!(entries[0].identifier, NO_PRESET);
        assert_eq!(entries[0].description, "None");
        assert_eq!(entries.len(), 3);
        for entry in &entries[1..] {
            assert!(entry.identifier.ends_with(PRESET_EXT));
        }

        let with_current = list_presets(dir.path(), true);
        assert_eq!(with_current[0].identifier, NO_PRESET);
        assert_eq!(with_current[1].identifier, CURRENT_SETTINGS);
        assert_eq!(with_current.len(), 4);
    }

    #[test]
    fn list_presets_title_cases_labels() {
        let dir = preset_dir(&[("rigify_meta.py", "")]);
        let entries = list_presets(dir.path(), false);
        assert_eq!(entries[1].identifier, "rigify_meta.py");
        assert_eq!(entries[1].label, "Rigify_Meta");
        assert_eq!(entries[1].description, "");
    }

    #[test]
    fn list_presets_missing_dir_yields_sentinels() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        let entries = list_presets(&missing, true);
        assert_eq!(entries.len(), 2);
    }

    #[test]
    fn title_case_matches_display_rules() {
        assert_eq!(title_case("mixamo"), "Mixamo");
        assert_eq!(title_case("rigify_meta"), "Rigify_Meta");
        assert_eq!(title_case("unreal UE4"), "Unreal Ue4");
        assert_eq!(title_case("rig2test"), "Rig2Test");
    }

    #[test]
    fn install_presets_copies_bundled_files() {
        let bundled = preset_dir(&[("mixamo.py", SAMPLE_PRESET), ("daz.py", "")]);
        let target = TempDir::new().unwrap();
        let retarget_dir = target.path().join("armature").join("retarget");

        let copied = install_presets(bundled.path(), &retarget_dir).unwrap();
        assert_eq!(copied, 2);
        assert!(retarget_dir.join("mixamo.py").is_file());
        assert!(retarget_dir.join("daz.py").is_file());

        // Installing again overwrites in place.
        let copied = install_presets(bundled.path(), &retarget_dir).unwrap();
        assert_eq!(copied, 2);
    }

    #[test]
    fn isolated_load_touches_only_its_target() {
        let dir = preset_dir(&[("source_rig.py", SAMPLE_PRESET)]);
        let bystander = SkeletonMapping::default();
        let loaded = load_preset(dir.path(), "source_rig.py").unwrap().unwrap();
        assert!(loaded.has_settings());
        // No global state: an unrelated mapping is unaffected.
        assert_eq!(bystander, SkeletonMapping::default());
    }
}
