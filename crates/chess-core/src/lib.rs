//! Core chess types: game records, PGN parsing, and mainline replay.

pub mod error;
pub mod game_data;
pub mod pgn;
pub mod replay;

pub use error::PgnError;
pub use game_data::{GameMetadata, GameRecord};
