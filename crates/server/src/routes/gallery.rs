use std::fs;
use std::path::PathBuf;

use axum::{
    extract::Query,
    http::header,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value as JsonValue};

use chess_render::{gallery, raster, GallerySession};

use crate::config::Config;
use crate::error::AppError;
use crate::state::{Sessions, DEFAULT_SESSION};

/// Display bounding box for the browser view.
const THUMBNAIL_BOX: (u32, u32) = (500, 500);

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

#[derive(Deserialize)]
pub struct SessionBody {
    pub session_id: Option<String>,
}

/// GET /api/gallery
pub async fn current(
    Extension(config): Extension<Config>,
    Extension(sessions): Extension<Sessions>,
    Query(q): Query<SessionQuery>,
) -> Result<Json<JsonValue>, AppError> {
    let images = gallery::list_images(&config.png_dir);
    with_session(&sessions, session_key(&q.session_id), |session| {
        session.clamp(images.len());
        Ok(Json(view_payload(session, &images)))
    })
}

/// GET /api/gallery/image
///
/// The current image downsized to fit the display box. 404 when the set is
/// empty; the JSON view is the place that reports the soft no-data state.
pub async fn current_image(
    Extension(config): Extension<Config>,
    Extension(sessions): Extension<Sessions>,
    Query(q): Query<SessionQuery>,
) -> Result<Response, AppError> {
    let images = gallery::list_images(&config.png_dir);
    let view = with_session(&sessions, session_key(&q.session_id), |session| {
        session.clamp(images.len());
        Ok(gallery::current_view(session, &images))
    })?;

    let view = view.ok_or_else(|| AppError::NotFound("No images to display".to_string()))?;
    let bytes = fs::read(&view.path).map_err(|e| AppError::Internal(e.to_string()))?;
    let thumb = raster::downscale_png(&bytes, THUMBNAIL_BOX.0, THUMBNAIL_BOX.1)?;

    Ok(([(header::CONTENT_TYPE, "image/png")], thumb).into_response())
}

/// POST /api/gallery/next
pub async fn next(
    Extension(config): Extension<Config>,
    Extension(sessions): Extension<Sessions>,
    Json(body): Json<SessionBody>,
) -> Result<Json<JsonValue>, AppError> {
    step(&config, &sessions, session_key(&body.session_id), true)
}

/// POST /api/gallery/prev
pub async fn prev(
    Extension(config): Extension<Config>,
    Extension(sessions): Extension<Sessions>,
    Json(body): Json<SessionBody>,
) -> Result<Json<JsonValue>, AppError> {
    step(&config, &sessions, session_key(&body.session_id), false)
}

fn step(
    config: &Config,
    sessions: &Sessions,
    key: String,
    forward: bool,
) -> Result<Json<JsonValue>, AppError> {
    let images = gallery::list_images(&config.png_dir);
    with_session(sessions, key, |session| {
        session.clamp(images.len());
        if forward {
            session.advance(images.len());
        } else {
            session.retreat(images.len());
        }
        Ok(Json(view_payload(session, &images)))
    })
}

fn session_key(id: &Option<String>) -> String {
    id.clone().unwrap_or_else(|| DEFAULT_SESSION.to_string())
}

fn with_session<T>(
    sessions: &Sessions,
    key: String,
    f: impl FnOnce(&mut GallerySession) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut map = sessions
        .write()
        .map_err(|_| AppError::Internal("session store poisoned".to_string()))?;
    f(map.entry(key).or_default())
}

fn view_payload(session: &GallerySession, images: &[PathBuf]) -> JsonValue {
    match gallery::current_view(session, images) {
        Some(view) => json!({
            "caption": view.caption,
            "index": view.index,
            "total": view.total,
            "file": view.path.file_name().map(|n| n.to_string_lossy().into_owned()),
        }),
        None => json!({
            "total": 0,
            "detail": "No PNG images found. Export a game first.",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_key_defaults() {
        assert_eq!(session_key(&None), DEFAULT_SESSION);
        assert_eq!(session_key(&Some("abc".to_string())), "abc");
    }

    #[test]
    fn test_view_payload_empty_set_is_soft() {
        let payload = view_payload(&GallerySession::new(), &[]);
        assert_eq!(payload["total"], 0);
        assert!(payload["detail"].as_str().unwrap().contains("No PNG images"));
    }

    #[test]
    fn test_view_payload_caption() {
        let images = vec![PathBuf::from("chess_move_1.png")];
        let payload = view_payload(&GallerySession::new(), &images);
        assert_eq!(payload["caption"], "Image 1/1");
        assert_eq!(payload["file"], "chess_move_1.png");
    }
}
