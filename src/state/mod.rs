/// State management module
///
/// This module handles all application state, including:
/// - The edit session and its controller (edit.rs)
/// - Shared image data structures (data.rs)
/// - Display handle acquisition and release (handles.rs)
/// - The built-in prompt presets (presets.rs)

pub mod data;
pub mod edit;
pub mod handles;
pub mod presets;
