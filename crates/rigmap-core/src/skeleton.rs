//! The skeleton mapping aggregate.
//!
//! [`SkeletonMapping`] collects every bone group, the dynamic custom bones,
//! and the root bone field. The same type serves both lifecycles from the
//! host's point of view: the persisted per-armature settings (serialized via
//! serde, long-lived) and the transient preset form (built during a preset
//! load, copied into or out of the persisted form, then dropped).

use serde::{Deserialize, Serialize};

use crate::custom::CustomBones;
use crate::groups::{ArmGroup, BoneFields, FaceGroup, HandGroup, LegGroup, SpineGroup};

/// Fixed-schema group names, in validation order. Finger groups and the
/// custom set have their own shapes and are handled separately.
pub const GROUP_NAMES: [&str; 10] = [
    "spine",
    "left_arm",
    "left_arm_ik",
    "right_arm",
    "right_arm_ik",
    "right_leg",
    "right_leg_ik",
    "left_leg",
    "left_leg_ik",
    "face",
];

/// Complete bone-name mapping for one armature.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkeletonMapping {
    pub spine: SpineGroup,

    pub left_arm: ArmGroup,
    pub left_arm_ik: ArmGroup,
    pub right_arm: ArmGroup,
    pub right_arm_ik: ArmGroup,

    pub left_leg: LegGroup,
    pub left_leg_ik: LegGroup,
    pub right_leg: LegGroup,
    pub right_leg_ik: LegGroup,

    pub left_fingers: HandGroup,
    pub right_fingers: HandGroup,

    pub face: FaceGroup,
    pub custom: CustomBones,
    pub root: String,
}

impl SkeletonMapping {
    /// Looks up a fixed-schema group by name. The explicit table here
    /// replaces string-keyed attribute reflection.
    pub fn group(&self, name: &str) -> Option<&dyn BoneFields> {
        let group: &dyn BoneFields = match name {
            "spine" => &self.spine,
            "left_arm" => &self.left_arm,
            "left_arm_ik" => &self.left_arm_ik,
            "right_arm" => &self.right_arm,
            "right_arm_ik" => &self.right_arm_ik,
            "right_leg" => &self.right_leg,
            "right_leg_ik" => &self.right_leg_ik,
            "left_leg" => &self.left_leg,
            "left_leg_ik" => &self.left_leg_ik,
            "face" => &self.face,
            _ => return None,
        };
        Some(group)
    }

    /// Mutable variant of [`SkeletonMapping::group`].
    pub fn group_mut(&mut self, name: &str) -> Option<&mut dyn BoneFields> {
        let group: &mut dyn BoneFields = match name {
            "spine" => &mut self.spine,
            "left_arm" => &mut self.left_arm,
            "left_arm_ik" => &mut self.left_arm_ik,
            "right_arm" => &mut self.right_arm,
            "right_arm_ik" => &mut self.right_arm_ik,
            "right_leg" => &mut self.right_leg,
            "right_leg_ik" => &mut self.right_leg_ik,
            "left_leg" => &mut self.left_leg,
            "left_leg_ik" => &mut self.left_leg_ik,
            "face" => &mut self.face,
            _ => return None,
        };
        Some(group)
    }

    /// Deep-copies every bone-role field from `source`.
    ///
    /// Fixed groups copy slot by slot through their tables. Fingers copy in
    /// `(a, b, c, meta)` order with the legacy positional fallback. Custom
    /// bones copy the legacy field first, then every enumerated entry,
    /// registering destination identifiers as needed.
    pub fn copy_from(&mut self, source: &SkeletonMapping) {
        for name in GROUP_NAMES {
            let Some(src) = source.group(name) else {
                continue;
            };
            let Some(dst) = self.group_mut(name) else {
                continue;
            };
            for slot in src.slots() {
                if let Some(value) = src.get(slot) {
                    dst.set(slot, value);
                }
            }
        }
        self.face.super_copy = source.face.super_copy;

        self.custom.name.clone_from(&source.custom.name);
        for (identifier, bone_name) in source.custom.get_bones() {
            self.custom.add_bone(identifier, bone_name);
        }

        self.left_fingers.copy_from(&source.left_fingers);
        self.right_fingers.copy_from(&source.right_fingers);

        self.root.clone_from(&source.root);
    }

    /// True if any bone-role field anywhere in the mapping is non-empty.
    pub fn has_settings(&self) -> bool {
        if !self.root.is_empty() || self.custom.has_settings() {
            return true;
        }
        if self.left_fingers.has_settings() || self.right_fingers.has_settings() {
            return true;
        }
        GROUP_NAMES
            .iter()
            .filter_map(|name| self.group(name))
            .any(|group| group.has_settings())
    }

    /// Number of non-empty bone-role fields across the whole mapping.
    pub fn mapped_bone_count(&self) -> usize {
        let mut count: usize = GROUP_NAMES
            .iter()
            .filter_map(|name| self.group(name))
            .map(|group| {
                group
                    .slots()
                    .iter()
                    .filter(|slot| group.get(slot).is_some_and(|v| !v.is_empty()))
                    .count()
            })
            .sum();
        for hand in [&self.left_fingers, &self.right_fingers] {
            for (_, finger) in hand.fingers() {
                count += finger
                    .slots()
                    .iter()
                    .filter(|slot| finger.get(slot).is_some_and(|v| !v.is_empty()))
                    .count();
            }
        }
        count += self.custom.get_bones().len();
        if !self.custom.name.is_empty() {
            count += 1;
        }
        if !self.root.is_empty() {
            count += 1;
        }
        count
    }

    /// Resets the group labels consumed by retarget scripts.
    pub fn reset_group_labels(&mut self) {
        self.right_arm.name = "arm".to_string();
        self.left_arm.name = "arm".to_string();

        self.right_leg.name = "leg".to_string();
        self.left_leg.name = "leg".to_string();

        self.right_fingers.name = "fingers".to_string();
        self.left_fingers.name = "fingers".to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_mapping() -> SkeletonMapping {
        let mut mapping = SkeletonMapping::default();
        mapping.spine.hips = "Hips".to_string();
        mapping.spine.head = "Head".to_string();
        mapping.left_arm.shoulder = "Shoulder_L".to_string();
        mapping.left_arm.hand = "Hand_L".to_string();
        mapping.right_leg.foot = "Foot_R".to_string();
        mapping.left_fingers.thumb.a = "Thumb1_L".to_string();
        mapping.left_fingers.thumb.meta = "ThumbMeta_L".to_string();
        mapping.custom.name = "Extra".to_string();
        mapping.custom.add_bone("tail01", "Tail_01");
        mapping.root = "Root".to_string();
        mapping
    }

    #[test]
    fn group_table_covers_all_names() {
        let mapping = SkeletonMapping::default();
        for name in GROUP_NAMES {
            assert!(mapping.group(name).is_some(), "missing group {name}");
        }
        assert!(mapping.group("tail").is_none());
    }

    #[test]
    fn copy_from_reproduces_every_field() {
        let source = sample_mapping();
        let mut dest = SkeletonMapping::default();
        dest.copy_from(&source);
        assert_eq!(dest, source);
    }

    #[test]
    fn copy_from_registers_custom_identifiers() {
        let mut source = SkeletonMapping::default();
        source.custom.add_bone("prop", "Prop_R");
        let mut dest = SkeletonMapping::default();
        dest.copy_from(&source);
        assert_eq!(dest.custom.get("prop"), Some("Prop_R"));
    }

    #[test]
    fn copy_from_preserves_face_flag() {
        let mut source = SkeletonMapping::default();
        source.face.super_copy = false;
        let mut dest = SkeletonMapping::default();
        dest.copy_from(&source);
        assert!(!dest.face.super_copy);
    }

    #[test]
    fn has_settings_and_count() {
        assert!(!SkeletonMapping::default().has_settings());
        assert_eq!(SkeletonMapping::default().mapped_bone_count(), 0);

        let mapping = sample_mapping();
        assert!(mapping.has_settings());
        // 2 spine + 2 arm + 1 leg + 2 finger + 1 custom entry
        // + legacy custom + root
        assert_eq!(mapping.mapped_bone_count(), 10);
    }

    #[test]
    fn root_alone_counts_as_settings() {
        let mapping = SkeletonMapping {
            root: "Root".to_string(),
            ..Default::default()
        };
        assert!(mapping.has_settings());
    }

    #[test]
    fn reset_group_labels_sets_script_names() {
        let mut mapping = SkeletonMapping::default();
        mapping.reset_group_labels();
        assert_eq!(mapping.left_arm.name, "arm");
        assert_eq!(mapping.right_leg.name, "leg");
        assert_eq!(mapping.left_fingers.name, "fingers");
    }

    #[test]
    fn persisted_form_round_trips_through_json() {
        let mapping = sample_mapping();
        let json = serde_json::to_string_pretty(&mapping).unwrap();
        let back: SkeletonMapping = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mapping);
    }

    #[test]
    fn empty_json_object_is_a_default_mapping() {
        let mapping: SkeletonMapping = serde_json::from_str("{}").unwrap();
        assert_eq!(mapping, SkeletonMapping::default());
    }
}
