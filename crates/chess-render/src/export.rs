//! Per-ply image export: replay the mainline, write one SVG per position,
//! then batch-rasterize the output directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chess_core::game_data::GameRecord;
use chess_core::replay::replay_mainline;
use serde::Serialize;

use crate::board_svg;
use crate::error::RenderError;
use crate::raster;

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub plies: usize,
    pub svg_count: usize,
    pub png_count: usize,
}

pub struct MoveExporter {
    svg_dir: PathBuf,
    png_dir: PathBuf,
}

impl MoveExporter {
    pub fn new(svg_dir: impl Into<PathBuf>, png_dir: impl Into<PathBuf>) -> Self {
        Self {
            svg_dir: svg_dir.into(),
            png_dir: png_dir.into(),
        }
    }

    /// Export one SVG per ply as `chess_move_<N>.svg` (N is the 1-based ply
    /// number), then convert every SVG in the output directory to PNG.
    ///
    /// Same-numbered files from a previous export are overwritten; stale
    /// higher-numbered files from a prior, longer game are left in place.
    /// `clear_output` is the explicit way to reset.
    pub fn export(&self, record: &GameRecord) -> Result<ExportSummary, RenderError> {
        fs::create_dir_all(&self.svg_dir)?;
        fs::create_dir_all(&self.png_dir)?;

        let positions = replay_mainline(&record.moves)?;
        for (idx, pos) in positions.iter().enumerate() {
            let ply = idx + 1;
            let svg = board_svg::render_board(pos);
            fs::write(self.svg_dir.join(format!("chess_move_{ply}.svg")), svg)?;
        }

        let png_count = self.batch_convert()?;
        tracing::info!(
            plies = positions.len(),
            png_count,
            "exported board images"
        );

        Ok(ExportSummary {
            plies: positions.len(),
            svg_count: positions.len(),
            png_count,
        })
    }

    /// Rasterize every `*.svg` in the SVG directory into the PNG directory
    /// under the same stem. Non-SVG files are skipped; the first conversion
    /// failure aborts.
    pub fn batch_convert(&self) -> Result<usize, RenderError> {
        let pattern = self.svg_dir.join("*.svg");
        let entries = glob::glob(&pattern.to_string_lossy())
            .map_err(|e| RenderError::Raster(e.to_string()))?;

        let mut count = 0;
        for entry in entries {
            let svg_path = entry.map_err(|e| RenderError::Io(e.into_error()))?;
            let svg = fs::read_to_string(&svg_path)?;
            let png_bytes = raster::svg_to_png(&svg)?;

            let stem = svg_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("image");
            fs::write(self.png_dir.join(format!("{stem}.png")), png_bytes)?;
            count += 1;
        }
        Ok(count)
    }

    /// Recursively delete both output directories. Destructive and
    /// irreversible; never invoked implicitly.
    pub fn clear_output(&self) -> io::Result<()> {
        for dir in [&self.svg_dir, &self.png_dir] {
            if dir.exists() {
                fs::remove_dir_all(dir)?;
            }
        }
        Ok(())
    }

    pub fn svg_dir(&self) -> &Path {
        &self.svg_dir
    }

    pub fn png_dir(&self) -> &Path {
        &self.png_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_core::pgn::parse_pgn;

    fn exporter(root: &Path) -> MoveExporter {
        MoveExporter::new(root.join("chess_moves"), root.join("chess_moves_png"))
    }

    #[test]
    fn test_export_writes_one_image_pair_per_ply() {
        let tmp = tempfile::tempdir().unwrap();
        let record = parse_pgn("1. e4 e5 2. Nf3 Nc6 3. Bb5").unwrap();

        let summary = exporter(tmp.path()).export(&record).unwrap();
        assert_eq!(summary.plies, 5);
        assert_eq!(summary.svg_count, 5);
        assert_eq!(summary.png_count, 5);

        for ply in 1..=5 {
            assert!(tmp
                .path()
                .join("chess_moves")
                .join(format!("chess_move_{ply}.svg"))
                .exists());
            assert!(tmp
                .path()
                .join("chess_moves_png")
                .join(format!("chess_move_{ply}.png"))
                .exists());
        }
    }

    #[test]
    fn test_export_leaves_stale_images_from_longer_game() {
        let tmp = tempfile::tempdir().unwrap();
        let exp = exporter(tmp.path());

        let long = parse_pgn("1. e4 e5 2. Nf3 Nc6").unwrap();
        exp.export(&long).unwrap();
        let short = parse_pgn("1. d4 d5").unwrap();
        let summary = exp.export(&short).unwrap();

        assert_eq!(summary.plies, 2);
        // Plies 3 and 4 from the first export remain until clear_output.
        assert!(tmp
            .path()
            .join("chess_moves")
            .join("chess_move_4.svg")
            .exists());
        assert_eq!(summary.png_count, 4);
    }

    #[test]
    fn test_batch_convert_skips_non_svg_files() {
        let tmp = tempfile::tempdir().unwrap();
        let exp = exporter(tmp.path());
        fs::create_dir_all(exp.svg_dir()).unwrap();
        fs::create_dir_all(exp.png_dir()).unwrap();
        fs::write(exp.svg_dir().join("notes.txt"), "not an image").unwrap();

        assert_eq!(exp.batch_convert().unwrap(), 0);
    }

    #[test]
    fn test_clear_output_removes_both_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let exp = exporter(tmp.path());
        let record = parse_pgn("1. e4 e5").unwrap();
        exp.export(&record).unwrap();

        exp.clear_output().unwrap();
        assert!(!exp.svg_dir().exists());
        assert!(!exp.png_dir().exists());

        // Clearing an already-clean workspace is fine.
        exp.clear_output().unwrap();
    }
}
