/// File input and output
///
/// This module handles:
/// - Picking, reading and validating uploaded images (upload.rs)
/// - Saving generated results to disk (download.rs)

pub mod download;
pub mod upload;
