/// Sizebar Core — size aggregation and presentation.
///
/// This crate contains the whole sizing engine with no argument-parsing
/// or process concerns, so it can back other frontends.
///
/// # Modules
///
/// - [`model`] — Normalized scan roots, bucket maps, size formatting.
/// - [`scan`] — The aggregation walk, its streaming variant, and the error taxonomy.
/// - [`render`] — Presentation: entries, bars, emphasis styling, line assembly.
pub mod model;
pub mod render;
pub mod scan;
