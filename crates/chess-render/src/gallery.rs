//! Gallery browsing: naturally-sorted image listing and a per-session
//! cursor with wraparound navigation.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Raster extensions the browser recognizes (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

/// Compare file names by the first embedded integer, so `chess_move_10.png`
/// sorts after `chess_move_2.png`. Names without a number fall back to
/// lexicographic order.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    match (embedded_number(a), embedded_number(b)) {
        (Some(x), Some(y)) if x != y => x.cmp(&y),
        _ => a.cmp(b),
    }
}

fn embedded_number(name: &str) -> Option<u64> {
    let digits: String = name
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

/// List the raster images in a directory in natural order. A missing or
/// unreadable directory yields an empty list; browsing nothing is a soft
/// no-data state, not an error.
pub fn list_images(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut paths: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    let ext = ext.to_ascii_lowercase();
                    IMAGE_EXTENSIONS.contains(&ext.as_str())
                })
                .unwrap_or(false)
        })
        .collect();

    paths.sort_by(|a, b| natural_cmp(&file_name(a), &file_name(b)));
    paths
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Explicit per-session browsing context. The cursor belongs to one
/// interactive session, is never persisted, and never touches the stored
/// images.
#[derive(Debug, Clone, Default)]
pub struct GallerySession {
    cursor: usize,
}

impl GallerySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn index(&self) -> usize {
        self.cursor
    }

    /// Keep the cursor in range after the underlying set changed size.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 || self.cursor >= len {
            self.cursor = 0;
        }
    }

    /// Move forward one image, wrapping at the end.
    pub fn advance(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + 1) % len;
        }
    }

    /// Move back one image, wrapping at the start.
    pub fn retreat(&mut self, len: usize) {
        if len > 0 {
            self.cursor = (self.cursor + len - 1) % len;
        }
    }
}

/// What "show current" displays: the image path plus a 1-based positional
/// caption.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryView {
    pub index: usize,
    pub total: usize,
    pub caption: String,
    pub path: PathBuf,
}

/// Build the current view, or `None` when there is nothing to show.
pub fn current_view(session: &GallerySession, images: &[PathBuf]) -> Option<GalleryView> {
    let path = images.get(session.index())?;
    Some(GalleryView {
        index: session.index(),
        total: images.len(),
        caption: format!("Image {}/{}", session.index() + 1, images.len()),
        path: path.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_cmp_orders_by_embedded_number() {
        let mut names = vec![
            "chess_move_10.png",
            "chess_move_2.png",
            "chess_move_1.png",
            "chess_move_21.png",
        ];
        names.sort_by(|a, b| natural_cmp(a, b));
        assert_eq!(
            names,
            vec![
                "chess_move_1.png",
                "chess_move_2.png",
                "chess_move_10.png",
                "chess_move_21.png",
            ]
        );
    }

    #[test]
    fn test_natural_cmp_falls_back_to_lexicographic() {
        assert_eq!(natural_cmp("alpha.png", "beta.png"), Ordering::Less);
        assert_eq!(natural_cmp("board.png", "board.png"), Ordering::Equal);
    }

    #[test]
    fn test_list_images_filters_and_sorts() {
        let tmp = tempfile::tempdir().unwrap();
        for name in [
            "chess_move_2.png",
            "chess_move_10.PNG",
            "chess_move_1.png",
            "chess_move_3.svg",
            "notes.txt",
        ] {
            fs::write(tmp.path().join(name), b"x").unwrap();
        }

        let images = list_images(tmp.path());
        let names: Vec<String> = images.iter().map(|p| file_name(p)).collect();
        assert_eq!(
            names,
            vec!["chess_move_1.png", "chess_move_2.png", "chess_move_10.PNG"]
        );
    }

    #[test]
    fn test_list_images_missing_directory_is_empty() {
        assert!(list_images(Path::new("/nonexistent/gallery")).is_empty());
    }

    #[test]
    fn test_advance_wraps_back_to_start_after_full_cycle() {
        let mut session = GallerySession::new();
        let len = 7;
        for _ in 0..len {
            session.advance(len);
        }
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_retreat_from_zero_wraps_to_last() {
        let mut session = GallerySession::new();
        session.retreat(5);
        assert_eq!(session.index(), 4);
    }

    #[test]
    fn test_navigation_on_empty_set_is_a_no_op() {
        let mut session = GallerySession::new();
        session.advance(0);
        session.retreat(0);
        assert_eq!(session.index(), 0);
        assert!(current_view(&session, &[]).is_none());
    }

    #[test]
    fn test_clamp_after_set_shrinks() {
        let mut session = GallerySession::new();
        for _ in 0..4 {
            session.advance(5);
        }
        assert_eq!(session.index(), 4);
        session.clamp(2);
        assert_eq!(session.index(), 0);
    }

    #[test]
    fn test_current_view_caption_is_one_based() {
        let images = vec![PathBuf::from("a_1.png"), PathBuf::from("a_2.png")];
        let mut session = GallerySession::new();
        session.advance(images.len());

        let view = current_view(&session, &images).unwrap();
        assert_eq!(view.caption, "Image 2/2");
        assert_eq!(view.index, 1);
        assert_eq!(view.total, 2);
        assert_eq!(view.path, PathBuf::from("a_2.png"));
    }
}
