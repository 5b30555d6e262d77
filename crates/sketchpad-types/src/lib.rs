//! Foundation types and traits for sketchpad.
//!
//! This crate contains the platform-agnostic types shared by all sketchpad
//! crates: colors, pointer input events, the drawing backend trait,
//! configuration, and error types.

pub mod backend;
pub mod config;
pub mod error;
pub mod input;
