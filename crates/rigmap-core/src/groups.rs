//! Bone group schemas.
//!
//! Each group is a fixed-shape record whose fields are semantic bone-role
//! slots. Slot access goes through the [`BoneFields`] trait, which exposes an
//! explicit ordered slot table per variant instead of runtime reflection. The
//! `name` field on a group is a label, not a bone slot, and never appears in
//! slot iteration.

use serde::{Deserialize, Serialize};

/// Slot access for a fixed-schema bone group.
///
/// The slot table is defined per variant at compile time. `get` and `set`
/// return `None`/`false` for slot names outside the table, so callers probing
/// a group with a foreign slot name degrade to a no-op rather than failing.
pub trait BoneFields {
    /// Ordered bone-role slots for this group. Excludes the group label and
    /// any non-bone fields.
    fn slots(&self) -> &'static [&'static str];

    /// Returns the bone name stored in `slot`, or `None` for an unknown slot.
    fn get(&self, slot: &str) -> Option<&str>;

    /// Stores `value` in `slot`. Returns `false` for an unknown slot.
    fn set(&mut self, slot: &str, value: &str) -> bool;

    /// True if any slot holds a non-empty bone name.
    fn has_settings(&self) -> bool {
        self.slots()
            .iter()
            .any(|slot| self.get(slot).is_some_and(|v| !v.is_empty()))
    }
}

/// Spine chain from hips to head.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpineGroup {
    /// Group label, not a bone slot.
    pub name: String,
    pub head: String,
    pub neck: String,
    pub spine2: String,
    pub spine1: String,
    pub spine: String,
    pub hips: String,
}

impl BoneFields for SpineGroup {
    fn slots(&self) -> &'static [&'static str] {
        &["head", "neck", "spine2", "spine1", "spine", "hips"]
    }

    fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "head" => &self.head,
            "neck" => &self.neck,
            "spine2" => &self.spine2,
            "spine1" => &self.spine1,
            "spine" => &self.spine,
            "hips" => &self.hips,
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> bool {
        let field = match slot {
            "head" => &mut self.head,
            "neck" => &mut self.neck,
            "spine2" => &mut self.spine2,
            "spine1" => &mut self.spine1,
            "spine" => &mut self.spine,
            "hips" => &mut self.hips,
            _ => return false,
        };
        value.clone_into(field);
        true
    }
}

/// One arm, shoulder to hand, with upper and lower twist chains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmGroup {
    /// Group label, not a bone slot.
    pub name: String,
    pub shoulder: String,
    pub arm: String,
    pub arm_twist: String,
    pub arm_twist_02: String,
    pub forearm: String,
    pub forearm_twist: String,
    pub forearm_twist_02: String,
    pub hand: String,
}

impl BoneFields for ArmGroup {
    fn slots(&self) -> &'static [&'static str] {
        &[
            "shoulder",
            "arm",
            "arm_twist",
            "arm_twist_02",
            "forearm",
            "forearm_twist",
            "forearm_twist_02",
            "hand",
        ]
    }

    fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "shoulder" => &self.shoulder,
            "arm" => &self.arm,
            "arm_twist" => &self.arm_twist,
            "arm_twist_02" => &self.arm_twist_02,
            "forearm" => &self.forearm,
            "forearm_twist" => &self.forearm_twist,
            "forearm_twist_02" => &self.forearm_twist_02,
            "hand" => &self.hand,
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> bool {
        let field = match slot {
            "shoulder" => &mut self.shoulder,
            "arm" => &mut self.arm,
            "arm_twist" => &mut self.arm_twist,
            "arm_twist_02" => &mut self.arm_twist_02,
            "forearm" => &mut self.forearm,
            "forearm_twist" => &mut self.forearm_twist,
            "forearm_twist_02" => &mut self.forearm_twist_02,
            "hand" => &mut self.hand,
            _ => return false,
        };
        value.clone_into(field);
        true
    }
}

/// One leg, upper leg to toe, with twist chains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegGroup {
    /// Group label, not a bone slot.
    pub name: String,
    pub upleg: String,
    pub upleg_twist: String,
    pub leg: String,
    pub leg_twist: String,
    pub foot: String,
    pub toe: String,
}

impl BoneFields for LegGroup {
    fn slots(&self) -> &'static [&'static str] {
        &["upleg", "upleg_twist", "leg", "leg_twist", "foot", "toe"]
    }

    fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "upleg" => &self.upleg,
            "upleg_twist" => &self.upleg_twist,
            "leg" => &self.leg,
            "leg_twist" => &self.leg_twist,
            "foot" => &self.foot,
            "toe" => &self.toe,
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> bool {
        let field = match slot {
            "upleg" => &mut self.upleg,
            "upleg_twist" => &mut self.upleg_twist,
            "leg" => &mut self.leg,
            "leg_twist" => &mut self.leg_twist,
            "foot" => &mut self.foot,
            "toe" => &mut self.toe,
            _ => return false,
        };
        value.clone_into(field);
        true
    }
}

/// Minimal face rig: jaw, eyes, upper lids.
///
/// `super_copy` is a rigging flag, not a bone slot, so it stays out of the
/// slot table and is untouched by validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceGroup {
    pub jaw: String,
    pub left_eye: String,
    pub right_eye: String,
    pub left_uplid: String,
    pub right_uplid: String,
    pub super_copy: bool,
}

impl Default for FaceGroup {
    fn default() -> Self {
        Self {
            jaw: String::new(),
            left_eye: String::new(),
            right_eye: String::new(),
            left_uplid: String::new(),
            right_uplid: String::new(),
            super_copy: true,
        }
    }
}

impl BoneFields for FaceGroup {
    fn slots(&self) -> &'static [&'static str] {
        &["jaw", "left_eye", "right_eye", "left_uplid", "right_uplid"]
    }

    fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "jaw" => &self.jaw,
            "left_eye" => &self.left_eye,
            "right_eye" => &self.right_eye,
            "left_uplid" => &self.left_uplid,
            "right_uplid" => &self.right_uplid,
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> bool {
        let field = match slot {
            "jaw" => &mut self.jaw,
            "left_eye" => &mut self.left_eye,
            "right_eye" => &mut self.right_eye,
            "left_uplid" => &mut self.left_uplid,
            "right_uplid" => &mut self.right_uplid,
            _ => return false,
        };
        value.clone_into(field);
        true
    }
}

/// Source of finger bone names during a copy.
///
/// Newer data carries the four named slots (`meta`, `a`, `b`, `c`); legacy
/// data only carries a positional `(a, b, c)` triple. A copy prefers the
/// named lookup and falls back to the positional one, so a 4-slot destination
/// absorbs either shape without schema negotiation at the call site.
pub trait FingerSource {
    /// Named-slot lookup. `None` when the source lacks the slot.
    fn slot(&self, slot: &str) -> Option<&str>;

    /// Positional lookup in legacy `(a, b, c)` order.
    fn positional(&self, index: usize) -> Option<&str>;
}

/// One finger: metacarpal plus three phalanx slots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerGroup {
    pub meta: String,
    pub a: String,
    pub b: String,
    pub c: String,
}

impl FingerGroup {
    /// Copies every slot from `source`, named lookup first, positional
    /// fallback for legacy 3-slot sources. `meta` has no positional index,
    /// so a legacy source leaves the destination `meta` untouched.
    pub fn copy_from<S: FingerSource + ?Sized>(&mut self, source: &S) {
        for (slot, index) in [("a", 0), ("b", 1), ("c", 2), ("meta", 3)] {
            if let Some(value) = source.slot(slot).or_else(|| source.positional(index)) {
                self.set(slot, value);
            }
        }
    }
}

impl BoneFields for FingerGroup {
    fn slots(&self) -> &'static [&'static str] {
        &["meta", "a", "b", "c"]
    }

    fn get(&self, slot: &str) -> Option<&str> {
        let value = match slot {
            "meta" => &self.meta,
            "a" => &self.a,
            "b" => &self.b,
            "c" => &self.c,
            _ => return None,
        };
        Some(value)
    }

    fn set(&mut self, slot: &str, value: &str) -> bool {
        let field = match slot {
            "meta" => &mut self.meta,
            "a" => &mut self.a,
            "b" => &mut self.b,
            "c" => &mut self.c,
            _ => return false,
        };
        value.clone_into(field);
        true
    }
}

impl FingerSource for FingerGroup {
    fn slot(&self, slot: &str) -> Option<&str> {
        self.get(slot)
    }

    fn positional(&self, index: usize) -> Option<&str> {
        let value = match index {
            0 => &self.a,
            1 => &self.b,
            2 => &self.c,
            _ => return None,
        };
        Some(value)
    }
}

impl FingerSource for [String] {
    fn slot(&self, _slot: &str) -> Option<&str> {
        None
    }

    fn positional(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl FingerSource for [&str] {
    fn slot(&self, _slot: &str) -> Option<&str> {
        None
    }

    fn positional(&self, index: usize) -> Option<&str> {
        self.get(index).copied()
    }
}

/// Finger names in anatomical order.
pub const FINGER_NAMES: [&str; 5] = ["thumb", "index", "middle", "ring", "pinky"];

/// All five fingers of one hand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandGroup {
    /// Group label, not a bone slot.
    pub name: String,
    pub thumb: FingerGroup,
    pub index: FingerGroup,
    pub middle: FingerGroup,
    pub ring: FingerGroup,
    pub pinky: FingerGroup,
}

impl HandGroup {
    /// Fingers paired with their names, in [`FINGER_NAMES`] order.
    pub fn fingers(&self) -> [(&'static str, &FingerGroup); 5] {
        [
            ("thumb", &self.thumb),
            ("index", &self.index),
            ("middle", &self.middle),
            ("ring", &self.ring),
            ("pinky", &self.pinky),
        ]
    }

    /// Mutable variant of [`HandGroup::fingers`].
    pub fn fingers_mut(&mut self) -> [(&'static str, &mut FingerGroup); 5] {
        [
            ("thumb", &mut self.thumb),
            ("index", &mut self.index),
            ("middle", &mut self.middle),
            ("ring", &mut self.ring),
            ("pinky", &mut self.pinky),
        ]
    }

    /// Looks up a finger by name.
    pub fn finger_mut(&mut self, name: &str) -> Option<&mut FingerGroup> {
        let finger = match name {
            "thumb" => &mut self.thumb,
            "index" => &mut self.index,
            "middle" => &mut self.middle,
            "ring" => &mut self.ring,
            "pinky" => &mut self.pinky,
            _ => return None,
        };
        Some(finger)
    }

    /// Copies the label and every finger from `source`.
    pub fn copy_from(&mut self, source: &HandGroup) {
        self.name.clone_from(&source.name);
        for ((_, dst), (_, src)) in self.fingers_mut().into_iter().zip(source.fingers()) {
            dst.copy_from(src);
        }
    }

    /// True if any finger holds a non-empty bone name.
    pub fn has_settings(&self) -> bool {
        self.fingers().iter().any(|(_, finger)| finger.has_settings())
    }
}
