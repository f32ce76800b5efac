//! Elapsed-time parsing. Clock values are "H:M:S" strings with integer
//! components; hours are unbounded (correspondence clocks can exceed a day).

use crate::error::StatsError;

/// Parse an "H:M:S" clock string into total seconds.
///
/// Exactly three non-negative integer components are required; anything
/// else fails the whole analysis rather than degrading to zero.
pub fn parse_clock(value: &str, row: usize) -> Result<u64, StatsError> {
    let invalid = || StatsError::InvalidClock {
        value: value.to_string(),
        row,
    };

    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() != 3 {
        return Err(invalid());
    }

    let mut components = [0u64; 3];
    for (slot, part) in components.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *slot = part.parse().map_err(|_| invalid())?;
    }

    let [hours, minutes, seconds] = components;
    Ok(hours * 3600 + minutes * 60 + seconds)
}
