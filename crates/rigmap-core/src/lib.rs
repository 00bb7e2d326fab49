//! Rigmap Core Library
//!
//! This crate maps a source animation skeleton's bone names onto a
//! standardized "human" rig schema (spine, arms, legs, fingers, face, custom
//! bones) to support retargeting motion between differently-named armatures.
//!
//! # Overview
//!
//! - **Bone group schemas**: fixed-shape records of semantic bone-role slots,
//!   accessed through explicit per-variant slot tables ([`BoneFields`]).
//! - **Skeleton mapping**: the aggregate of all groups plus dynamic custom
//!   bones and the root field ([`SkeletonMapping`]), serving both as the
//!   persisted per-armature settings and as the transient preset form.
//! - **Preset loader**: parses declarative preset files into a mapping
//!   without executing anything ([`load_preset`], [`apply_preset`]).
//! - **Name validator**: rewrites every mapped name against the literal bone
//!   list of a target armature, with prefix-aware fallback
//!   ([`validate_mapping`]).
//!
//! # Example
//!
//! ```
//! use rigmap_core::{validate_mapping, SkeletonMapping, DEFAULT_SEPARATOR};
//!
//! let mut settings = SkeletonMapping::default();
//! settings.spine.hips = "Hips".to_string();
//! settings.spine.head = "Skull".to_string();
//!
//! // The armature namespaces every bone under "Rig:".
//! let bones: Vec<String> = vec!["Rig:Hips".to_string(), "Rig:Spine".to_string()];
//! validate_mapping(&mut settings, &bones, DEFAULT_SEPARATOR);
//!
//! assert_eq!(settings.spine.hips, "Rig:Hips"); // prefix reattached
//! assert_eq!(settings.spine.head, "");         // unresolvable, cleared
//! ```
//!
//! # Modules
//!
//! - [`groups`]: bone group schemas and slot access
//! - [`custom`]: dynamic custom bone entries
//! - [`skeleton`]: the skeleton mapping aggregate
//! - [`preset`]: preset enumeration, parsing, and application
//! - [`validate`]: bone-name validation and prefix resolution
//! - [`error`]: error types

pub mod custom;
pub mod error;
pub mod groups;
pub mod preset;
pub mod skeleton;
pub mod validate;

// Re-export commonly used types at the crate root
pub use custom::CustomBones;
pub use error::PresetError;
pub use groups::{
    ArmGroup, BoneFields, FaceGroup, FingerGroup, FingerSource, HandGroup, LegGroup, SpineGroup,
    FINGER_NAMES,
};
pub use preset::{
    apply_preset, install_presets, list_presets, load_preset, load_preset_into, PresetEntry,
    CURRENT_SETTINGS, NO_PRESET, PRESET_EXT,
};
pub use skeleton::{SkeletonMapping, GROUP_NAMES};
pub use validate::{name_prefix, validate_mapping, DEFAULT_SEPARATOR};
