/// User interface
///
/// - `landing.rs` - header, footer and the upload page
/// - `editor.rs` - the editor studio page
/// - `comparison.rs` - Split / Single / Slider layouts
/// - `slider.rs` - the drag-controlled reveal canvas

pub mod comparison;
pub mod editor;
pub mod landing;
pub mod slider;
