//! Board image rendering and browsing: SVG boards, PNG rasterization,
//! the per-ply export pipeline, and the gallery cursor.

pub mod board_svg;
pub mod error;
pub mod export;
pub mod gallery;
pub mod raster;

pub use error::RenderError;
pub use export::{ExportSummary, MoveExporter};
pub use gallery::{GallerySession, GalleryView};
