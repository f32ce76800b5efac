use std::env;
use std::path::PathBuf;

use chess_render::MoveExporter;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Vector image output (one SVG per ply).
    pub svg_dir: PathBuf,
    /// Raster image output consumed by the gallery.
    pub png_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8000),
            svg_dir: env::var("SVG_DIR")
                .unwrap_or_else(|_| "chess_moves".to_string())
                .into(),
            png_dir: env::var("PNG_DIR")
                .unwrap_or_else(|_| "chess_moves_png".to_string())
                .into(),
        }
    }

    pub fn exporter(&self) -> MoveExporter {
        MoveExporter::new(&self.svg_dir, &self.png_dir)
    }
}
