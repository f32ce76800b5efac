use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Replay failed: {0}")]
    Replay(#[from] chess_core::PgnError),

    #[error("SVG parse error: {0}")]
    Svg(String),

    #[error("Raster error: {0}")]
    Raster(String),
}
