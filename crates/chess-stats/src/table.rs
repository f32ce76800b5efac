//! Tabular input: one row per full move pair.

use std::io::Read;

use serde::Serialize;

use crate::error::StatsError;

#[derive(Debug, Clone, Serialize)]
pub struct MoveRow {
    pub white_move: String,
    pub black_move: String,
    pub white_time: String, // "H:M:S"
    pub black_time: String, // "H:M:S"
}

/// Load statistics rows from delimited input with a header row.
///
/// Required columns are located by name so extra columns are tolerated; a
/// missing column fails fast naming the absent column.
pub fn load_rows<R: Read>(input: R) -> Result<Vec<MoveRow>, StatsError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize, StatsError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| StatsError::MissingColumn(name.to_string()))
    };

    let white_move = column("white_move")?;
    let black_move = column("black_move")?;
    let white_time = column("white_time")?;
    let black_time = column("black_time")?;

    let mut rows = Vec::new();
    for record in rdr.records() {
        let record = record?;
        let field = |idx: usize| record.get(idx).unwrap_or("").to_string();
        rows.push(MoveRow {
            white_move: field(white_move),
            black_move: field(black_move),
            white_time: field(white_time),
            black_time: field(black_time),
        });
    }

    Ok(rows)
}
