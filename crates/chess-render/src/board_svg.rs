//! Board position → SVG markup.

use std::fmt::Write;

use shakmaty::{Chess, Color, File, Piece, Position, Rank, Role, Square};

const SQUARE: u32 = 45;
const MARGIN: u32 = 20;
const BOARD: u32 = SQUARE * 8;
const SIZE: u32 = BOARD + MARGIN * 2;

const LIGHT_FILL: &str = "#ffce9e";
const DARK_FILL: &str = "#d18b47";

/// Render a position as a self-contained SVG board, white at the bottom,
/// with rank and file labels in the margin. The markup is deterministic for
/// a given position.
pub fn render_board(pos: &Chess) -> String {
    let board = pos.board();
    let mut svg = String::with_capacity(8 * 1024);

    let _ = writeln!(
        svg,
        "<svg xmlns='http://www.w3.org/2000/svg' width='{SIZE}' height='{SIZE}' viewBox='0 0 {SIZE} {SIZE}'>"
    );
    let _ = writeln!(
        svg,
        "  <rect width='{SIZE}' height='{SIZE}' fill='#ffffff'/>"
    );

    for rank_idx in (0..8u32).rev() {
        for file_idx in 0..8u32 {
            let x = MARGIN + file_idx * SQUARE;
            let y = MARGIN + (7 - rank_idx) * SQUARE;
            let fill = if (file_idx + rank_idx) % 2 == 0 {
                DARK_FILL
            } else {
                LIGHT_FILL
            };
            let _ = writeln!(
                svg,
                "  <rect x='{x}' y='{y}' width='{SQUARE}' height='{SQUARE}' fill='{fill}'/>"
            );

            let square = Square::from_coords(File::new(file_idx), Rank::new(rank_idx));
            if let Some(piece) = board.piece_at(square) {
                let cx = x + SQUARE / 2;
                let cy = y + SQUARE / 2;
                let _ = writeln!(
                    svg,
                    "  <text x='{cx}' y='{cy}' font-size='34' text-anchor='middle' dominant-baseline='central'>{}</text>",
                    piece_glyph(piece)
                );
            }
        }
    }

    // Coordinate labels
    for file_idx in 0..8u32 {
        let x = MARGIN + file_idx * SQUARE + SQUARE / 2;
        let y = MARGIN + BOARD + MARGIN / 2;
        let _ = writeln!(
            svg,
            "  <text x='{x}' y='{y}' font-size='12' text-anchor='middle' dominant-baseline='central'>{}</text>",
            File::new(file_idx).char()
        );
    }
    for rank_idx in 0..8u32 {
        let x = MARGIN / 2;
        let y = MARGIN + (7 - rank_idx) * SQUARE + SQUARE / 2;
        let _ = writeln!(
            svg,
            "  <text x='{x}' y='{y}' font-size='12' text-anchor='middle' dominant-baseline='central'>{}</text>",
            Rank::new(rank_idx).char()
        );
    }

    svg.push_str("</svg>\n");
    svg
}

fn piece_glyph(piece: Piece) -> char {
    match (piece.color, piece.role) {
        (Color::White, Role::King) => '\u{2654}',
        (Color::White, Role::Queen) => '\u{2655}',
        (Color::White, Role::Rook) => '\u{2656}',
        (Color::White, Role::Bishop) => '\u{2657}',
        (Color::White, Role::Knight) => '\u{2658}',
        (Color::White, Role::Pawn) => '\u{2659}',
        (Color::Black, Role::King) => '\u{265A}',
        (Color::Black, Role::Queen) => '\u{265B}',
        (Color::Black, Role::Rook) => '\u{265C}',
        (Color::Black, Role::Bishop) => '\u{265D}',
        (Color::Black, Role::Knight) => '\u{265E}',
        (Color::Black, Role::Pawn) => '\u{265F}',
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_starting_position() {
        let svg = render_board(&Chess::default());
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        // 32 pieces on the board
        assert_eq!(svg.matches("font-size='34'").count(), 32);
        // 64 squares plus the background rect
        assert_eq!(svg.matches("<rect").count(), 65);
        assert!(svg.contains('\u{2654}'));
        assert!(svg.contains('\u{265A}'));
    }

    #[test]
    fn test_render_is_deterministic() {
        let a = render_board(&Chess::default());
        let b = render_board(&Chess::default());
        assert_eq!(a, b);
    }
}
