//! Scene configuration and asset handles.
//!
//! The manifest describes where every asset lives and how the rocks are
//! scattered; the handle resource tracks what has been requested from the
//! asset server.

/// Runtime scene manifest loaded from JSON, with constant-backed defaults.
pub mod scene_manifest;

/// Handles for every file the scene streams in.
pub mod scene_assets;
