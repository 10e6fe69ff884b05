use once_cell::sync::Lazy;
use std::sync::Arc;

use crate::png::{pixmap_to_jpeg, pixmap_to_png, pixmap_to_webp};
use crate::{Error, FontOptions, OutputFormat, Result, Settings};

static SYSTEM_FONTS: Lazy<Arc<usvg::fontdb::Database>> = Lazy::new(|| {
    let mut fontdb = usvg::fontdb::Database::new();
    fontdb.load_system_fonts();
    log::debug!("loaded {} system font faces", fontdb.len());
    Arc::new(fontdb)
});

pub(crate) fn encode_svg(svg: &str, format: OutputFormat, settings: &Settings) -> Result<Vec<u8>> {
    match format {
        OutputFormat::Svg => Ok(svg.as_bytes().to_vec()),
        OutputFormat::Png => pixmap_to_png(&rasterize_svg(svg, &settings.font)?, &settings.png),
        OutputFormat::Jpeg => {
            pixmap_to_jpeg(&rasterize_svg(svg, &settings.font)?, settings.jpeg_quality)
        }
        OutputFormat::Webp => pixmap_to_webp(&rasterize_svg(svg, &settings.font)?),
    }
}

pub(crate) fn rasterize_svg(svg: &str, font: &FontOptions) -> Result<tiny_skia::Pixmap> {
    let mut opt = usvg::Options {
        font_family: font.family.clone(),
        fontdb: SYSTEM_FONTS.clone(),
        ..usvg::Options::default()
    };
    if let Some(file) = &font.file {
        match std::fs::read(file) {
            Ok(bytes) => opt.fontdb_mut().load_font_data(bytes),
            Err(err) => log::warn!("font file {file} unreadable, using system fonts: {err}"),
        }
    }

    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|err| Error::Render(format!("usvg parse: {err}")))?;
    let size = tree.size().to_int_size();
    let (width, height) = (size.width(), size.height());
    let mut pixmap = tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| Error::Render(format!("invalid pixmap size {width}x{height}")))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());
    Ok(pixmap)
}
