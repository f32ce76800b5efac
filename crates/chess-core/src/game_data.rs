use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameMetadata {
    pub white: String,
    pub black: String,
    pub result: String, // "1-0", "0-1", "1/2-1/2", "*"
    pub date: Option<String>,
    pub event: Option<String>,
    pub site: Option<String>,
    pub time_control: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub metadata: GameMetadata,
    pub moves: Vec<String>, // SAN notation, mainline plies only
    pub pgn: String,
}

impl GameRecord {
    /// Number of half-moves (plies) in the mainline.
    pub fn ply_count(&self) -> usize {
        self.moves.len()
    }
}
