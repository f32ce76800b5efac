//! Vector → raster conversion and raster downscaling.

use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

use crate::error::RenderError;

/// Rasterize SVG markup to PNG bytes at the SVG's intrinsic size.
pub fn svg_to_png(svg: &str) -> Result<Vec<u8>, RenderError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_data(svg.as_bytes(), &options)
        .map_err(|e| RenderError::Svg(e.to_string()))?;

    let size = tree.size().to_int_size();
    let mut pixmap = Pixmap::new(size.width(), size.height())
        .ok_or_else(|| RenderError::Raster("pixmap allocation failed".to_string()))?;
    resvg::render(&tree, Transform::default(), &mut pixmap.as_mut());

    encode_rgba(size.width(), size.height(), pixmap.data())
}

/// Downscale PNG bytes to fit within the bounding box, preserving aspect
/// ratio. Images already inside the box are returned unchanged, never
/// upscaled.
pub fn downscale_png(bytes: &[u8], max_width: u32, max_height: u32) -> Result<Vec<u8>, RenderError> {
    let src = Pixmap::decode_png(bytes).map_err(|e| RenderError::Raster(e.to_string()))?;

    let scale = (max_width as f32 / src.width() as f32)
        .min(max_height as f32 / src.height() as f32)
        .min(1.0);
    if scale >= 1.0 {
        return Ok(bytes.to_vec());
    }

    let width = ((src.width() as f32 * scale).round() as u32).max(1);
    let height = ((src.height() as f32 * scale).round() as u32).max(1);
    let mut dst = Pixmap::new(width, height)
        .ok_or_else(|| RenderError::Raster("pixmap allocation failed".to_string()))?;

    let paint = PixmapPaint {
        quality: FilterQuality::Bilinear,
        ..PixmapPaint::default()
    };
    dst.draw_pixmap(
        0,
        0,
        src.as_ref(),
        &paint,
        Transform::from_scale(scale, scale),
        None,
    );

    encode_rgba(width, height, dst.data())
}

fn encode_rgba(width: u32, height: u32, data: &[u8]) -> Result<Vec<u8>, RenderError> {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| RenderError::Raster(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| RenderError::Raster(e.to_string()))?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probe_dimensions(png_bytes: &[u8]) -> (u32, u32) {
        let pixmap = Pixmap::decode_png(png_bytes).unwrap();
        (pixmap.width(), pixmap.height())
    }

    #[test]
    fn test_svg_to_png_renders_intrinsic_size() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='40' height='30'>\
                   <rect width='40' height='30' fill='#ff0000'/></svg>";
        let png_bytes = svg_to_png(svg).unwrap();
        assert_eq!(probe_dimensions(&png_bytes), (40, 30));
    }

    #[test]
    fn test_svg_to_png_rejects_invalid_markup() {
        assert!(matches!(
            svg_to_png("this is not svg"),
            Err(RenderError::Svg(_))
        ));
    }

    #[test]
    fn test_downscale_fits_bounding_box_preserving_aspect() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='400' height='200'>\
                   <rect width='400' height='200' fill='#00ff00'/></svg>";
        let png_bytes = svg_to_png(svg).unwrap();
        let thumb = downscale_png(&png_bytes, 100, 100).unwrap();
        assert_eq!(probe_dimensions(&thumb), (100, 50));
    }

    #[test]
    fn test_downscale_never_upscales() {
        let svg = "<svg xmlns='http://www.w3.org/2000/svg' width='40' height='30'>\
                   <rect width='40' height='30' fill='#0000ff'/></svg>";
        let png_bytes = svg_to_png(svg).unwrap();
        let same = downscale_png(&png_bytes, 500, 500).unwrap();
        assert_eq!(probe_dimensions(&same), (40, 30));
    }
}
