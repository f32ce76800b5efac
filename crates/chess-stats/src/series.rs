//! Derived per-player series. All functions are pure over the loaded rows.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::clock::parse_clock;
use crate::error::StatsError;
use crate::table::MoveRow;

/// Notation characters marking a check or checkmate.
static CHECK_MARKER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[+#]").unwrap());

/// Notation character marking a capture.
const CAPTURE_MARKER: char = 'x';

/// A pair of per-player sequences, white first.
#[derive(Debug, Clone, Serialize)]
pub struct PlayerSeries<T> {
    pub white: Vec<T>,
    pub black: Vec<T>,
}

/// Seconds spent on each move, per player.
pub fn time_per_move(rows: &[MoveRow]) -> Result<PlayerSeries<u64>, StatsError> {
    let mut white = Vec::with_capacity(rows.len());
    let mut black = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        white.push(parse_clock(&row.white_time, idx + 1)?);
        black.push(parse_clock(&row.black_time, idx + 1)?);
    }
    Ok(PlayerSeries { white, black })
}

/// Running capture totals, seeded with 0 before move 1 so index 0 is the
/// pre-game baseline.
pub fn cumulative_captures(rows: &[MoveRow]) -> PlayerSeries<u64> {
    let mut white = Vec::with_capacity(rows.len() + 1);
    let mut black = Vec::with_capacity(rows.len() + 1);
    let (mut white_total, mut black_total) = (0u64, 0u64);

    white.push(0);
    black.push(0);
    for row in rows {
        white_total += row.white_move.matches(CAPTURE_MARKER).count() as u64;
        black_total += row.black_move.matches(CAPTURE_MARKER).count() as u64;
        white.push(white_total);
        black.push(black_total);
    }

    PlayerSeries { white, black }
}

/// Flatten rows into the alternating half-move sequence
/// (white, black, white, black, ...).
pub fn flatten_moves(rows: &[MoveRow]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| [row.white_move.clone(), row.black_move.clone()])
        .collect()
}

/// Heuristic accuracy curves over a flattened half-move sequence.
///
/// The sequence is split by parity into the two players' moves; for each
/// prefix of length i, accuracy is the share of moves so far carrying a
/// check or checkmate marker. This is a proxy metric, not a move-quality
/// evaluation. An empty sub-sequence yields an empty series.
pub fn accuracy_curves(moves: &[String]) -> PlayerSeries<f64> {
    let mut series = PlayerSeries {
        white: Vec::new(),
        black: Vec::new(),
    };
    let (mut white_hits, mut black_hits) = (0usize, 0usize);

    for (ply, mv) in moves.iter().enumerate() {
        let hit = CHECK_MARKER.is_match(mv);
        if ply % 2 == 0 {
            white_hits += usize::from(hit);
            series
                .white
                .push(white_hits as f64 / (series.white.len() + 1) as f64);
        } else {
            black_hits += usize::from(hit);
            series
                .black
                .push(black_hits as f64 / (series.black.len() + 1) as f64);
        }
    }

    series
}

/// First differences of per-move seconds. The first row has no prior row,
/// so its delta is a missing value, never zero.
pub fn time_deltas(rows: &[MoveRow]) -> Result<PlayerSeries<Option<i64>>, StatsError> {
    let seconds = time_per_move(rows)?;
    Ok(PlayerSeries {
        white: first_differences(&seconds.white),
        black: first_differences(&seconds.black),
    })
}

fn first_differences(values: &[u64]) -> Vec<Option<i64>> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            if i == 0 {
                None
            } else {
                Some(v as i64 - values[i - 1] as i64)
            }
        })
        .collect()
}

/// Arithmetic mean of all moves up to and including the current one,
/// in seconds.
pub fn running_average(rows: &[MoveRow]) -> Result<PlayerSeries<f64>, StatsError> {
    let seconds = time_per_move(rows)?;
    Ok(PlayerSeries {
        white: running_mean(&seconds.white),
        black: running_mean(&seconds.black),
    })
}

fn running_mean(values: &[u64]) -> Vec<f64> {
    let mut out = Vec::with_capacity(values.len());
    let mut sum = 0u64;
    for (i, &v) in values.iter().enumerate() {
        sum += v;
        out.push(sum as f64 / (i + 1) as f64);
    }
    out
}
