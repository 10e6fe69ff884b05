use base64::Engine;
use std::path::Path;

use crate::{parse_color, FontOptions, PlacedWord, Result};

const ASCENT_RATIO: f32 = 0.9;

pub(crate) fn build_svg(
    width: u32,
    height: u32,
    background: &str,
    words: &[PlacedWord],
    font_family: &str,
    font_css: Option<String>,
) -> String {
    let fill = parse_color(background)
        .map(|rgb| rgb.to_string())
        .unwrap_or_else(|| background.to_string());
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
        width, height, width, height
    ));
    if let Some(font_css) = font_css {
        svg.push_str(r#"<defs><style type="text/css">"#);
        svg.push_str(&font_css);
        svg.push_str("</style></defs>");
    }
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{}" height="{}" fill="{}"/>"#,
        width,
        height,
        escape_attr(&fill)
    ));
    svg.push_str(&format!(
        r#"<g font-family="{}">"#,
        escape_attr(font_family)
    ));
    for word in words {
        let size = word.font_size as f32;
        let ascent = size * ASCENT_RATIO;
        let (origin_x, origin_y, rotate, length) = if word.vertical {
            (
                word.x as f32 + ascent,
                (word.y + word.height) as f32,
                " rotate(-90)",
                word.height,
            )
        } else {
            (word.x as f32, word.y as f32 + ascent, "", word.width)
        };
        svg.push_str(&format!(
            r#"<text transform="translate({:.2} {:.2}){}" font-size="{}px" fill="{}" textLength="{}" lengthAdjust="spacingAndGlyphs" xml:space="preserve">{}</text>"#,
            origin_x,
            origin_y,
            rotate,
            word.font_size,
            word.color,
            length,
            escape_text(&word.word)
        ));
    }
    svg.push_str("</g></svg>");
    svg
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn escape_attr(text: &str) -> String {
    escape_text(text).replace('"', "&quot;")
}

/// Embeds the configured font file so SVG output renders without it installed.
pub(crate) fn svg_font_face_css(font: &FontOptions) -> Result<Option<String>> {
    let Some(font_file) = &font.file else {
        return Ok(None);
    };
    let bytes = std::fs::read(font_file)?;
    let ext = Path::new(font_file)
        .extension()
        .and_then(|v| v.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    let (format, mime) = match ext.as_str() {
        "otf" => ("opentype", "font/otf"),
        "woff2" => ("woff2", "font/woff2"),
        "woff" => ("woff", "font/woff"),
        _ => ("truetype", "font/ttf"),
    };
    let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
    Ok(Some(format!(
        "@font-face {{ font-family: '{}'; src: url(data:{};base64,{}) format('{}'); }}",
        escape_attr(&font.family),
        mime,
        encoded,
        format
    )))
}
