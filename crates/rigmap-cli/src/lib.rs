//! Rigmap CLI library.
//!
//! This crate provides the command implementations for the rigmap binary:
//! preset enumeration, isolated preset inspection, preset application with
//! validation, and preset installation.

pub mod commands;
pub mod store;
