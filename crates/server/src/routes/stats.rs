use axum::{
    extract::Path,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value as JsonValue};

use chess_stats::{charts, series, table};

use crate::error::AppError;

/// POST /api/stats/series
///
/// Body is the raw CSV text. All five derived views are recomputed from
/// scratch on every call; nothing is cached or persisted.
pub async fn stats_series(body: String) -> Result<Json<JsonValue>, AppError> {
    let rows = table::load_rows(body.as_bytes())?;

    let time = series::time_per_move(&rows)?;
    let captures = series::cumulative_captures(&rows);
    let accuracy = series::accuracy_curves(&series::flatten_moves(&rows));
    let deltas = series::time_deltas(&rows)?;
    let averages = series::running_average(&rows)?;

    Ok(Json(json!({
        "rows": rows.len(),
        "table": rows,
        "timePerMove": { "white": time.white, "black": time.black },
        "cumulativeCaptures": { "white": captures.white, "black": captures.black },
        "accuracy": { "white": accuracy.white, "black": accuracy.black },
        "timeDeltas": { "white": deltas.white, "black": deltas.black },
        "runningAverage": { "white": averages.white, "black": averages.black },
    })))
}

/// POST /api/stats/chart/{kind}
///
/// Body is the raw CSV text; the response is the rendered SVG chart.
pub async fn stats_chart(Path(kind): Path<String>, body: String) -> Result<Response, AppError> {
    let rows = table::load_rows(body.as_bytes())?;

    let svg = match kind.as_str() {
        "time" => charts::time_chart(&rows)?,
        "captures" => charts::captures_chart(&rows)?,
        "accuracy" => charts::accuracy_chart(&rows)?,
        "time-delta" => charts::time_delta_chart(&rows)?,
        "avg-time" => charts::average_time_chart(&rows)?,
        other => {
            return Err(AppError::NotFound(format!("Unknown chart kind '{other}'")));
        }
    };

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
