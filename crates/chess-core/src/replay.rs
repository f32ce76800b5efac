//! Mainline replay: SAN tokens applied to a board, one position per ply.

use shakmaty::{san::SanPlus, Chess, Position};

use crate::error::PgnError;

/// Replay SAN moves from the standard starting position and return the
/// position reached after each ply, in play order.
pub fn replay_mainline(moves: &[String]) -> Result<Vec<Chess>, PgnError> {
    let mut pos = Chess::default();
    let mut positions = Vec::with_capacity(moves.len());

    for (idx, token) in moves.iter().enumerate() {
        let ply = idx + 1;
        let san: SanPlus = token.parse().map_err(|_| PgnError::InvalidSan {
            ply,
            token: token.clone(),
        })?;
        let mv = san.san.to_move(&pos).map_err(|e| PgnError::IllegalMove {
            ply,
            token: token.clone(),
            reason: e.to_string(),
        })?;
        pos.play_unchecked(mv);
        positions.push(pos.clone());
    }

    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shakmaty::Color;

    fn moves(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_replay_scholars_mate() {
        let positions =
            replay_mainline(&moves(&["e4", "e5", "Qh5", "Nc6", "Bc4", "Nf6", "Qxf7#"])).unwrap();
        assert_eq!(positions.len(), 7);
        assert!(positions.last().unwrap().is_checkmate());
    }

    #[test]
    fn test_replay_alternates_side_to_move() {
        let positions = replay_mainline(&moves(&["e4", "e5", "Nf3"])).unwrap();
        assert_eq!(positions[0].turn(), Color::Black);
        assert_eq!(positions[1].turn(), Color::White);
        assert_eq!(positions[2].turn(), Color::Black);
    }

    #[test]
    fn test_replay_empty_mainline() {
        let positions = replay_mainline(&[]).unwrap();
        assert!(positions.is_empty());
    }

    #[test]
    fn test_replay_rejects_garbage_token() {
        let err = replay_mainline(&moves(&["e4", "not-a-move"])).unwrap_err();
        match err {
            PgnError::InvalidSan { ply, token } => {
                assert_eq!(ply, 2);
                assert_eq!(token, "not-a-move");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_replay_rejects_illegal_move() {
        // Qh5 is unreachable for white on move one.
        let err = replay_mainline(&moves(&["Qh5"])).unwrap_err();
        assert!(matches!(err, PgnError::IllegalMove { ply: 1, .. }));
    }
}
