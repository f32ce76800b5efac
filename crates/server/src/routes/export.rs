use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use chess_core::pgn;

use crate::config::Config;
use crate::error::AppError;

#[derive(Deserialize)]
pub struct ExportRequest {
    pub pgn: String,
}

/// POST /api/export
///
/// Parse the transcript, write one SVG per ply, then rasterize the output
/// directory. Parse failures come back as 400 with the parser's message.
pub async fn export_game(
    Extension(config): Extension<Config>,
    Json(req): Json<ExportRequest>,
) -> Result<Json<JsonValue>, AppError> {
    let record = pgn::parse_pgn(&req.pgn)?;
    let summary = config.exporter().export(&record)?;

    Ok(Json(json!({
        "white": record.metadata.white,
        "black": record.metadata.black,
        "result": record.metadata.result,
        "plies": summary.plies,
        "svgCount": summary.svg_count,
        "pngCount": summary.png_count,
        "svgDir": config.svg_dir,
        "pngDir": config.png_dir,
    })))
}

/// DELETE /api/export
///
/// Maintenance action: recursively delete both image directories.
pub async fn clear_exports(
    Extension(config): Extension<Config>,
) -> Result<Json<JsonValue>, AppError> {
    config
        .exporter()
        .clear_output()
        .map_err(|e| AppError::Internal(e.to_string()))?;
    tracing::info!("cleared exported image directories");
    Ok(Json(json!({ "cleared": true })))
}
