use thiserror::Error;

#[derive(Error, Debug)]
pub enum PgnError {
    #[error("Failed to read PGN: {0}")]
    Read(#[from] std::io::Error),

    #[error("No game found in transcript")]
    EmptyTranscript,

    #[error("Game has no mainline moves")]
    NoMoves,

    #[error("Invalid SAN '{token}' at ply {ply}")]
    InvalidSan { ply: usize, token: String },

    #[error("Illegal move '{token}' at ply {ply}: {reason}")]
    IllegalMove {
        ply: usize,
        token: String,
        reason: String,
    },
}
