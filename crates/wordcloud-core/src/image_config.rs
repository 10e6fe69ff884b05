use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::{DEFAULT_BACKGROUND, DEFAULT_COLORMAP};

/// Everything a single "Generate" needs, assembled from validated fields.
///
/// Built fresh per submission and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageConfig {
    pub text: String,
    pub width: u32,
    pub height: u32,
    pub max_words: u32,
    pub background_color: String,
    pub colormap: String,
    pub stopwords: BTreeSet<String>,
    pub file_path: PathBuf,
}

/// Assembles an [`ImageConfig`] from values that already passed validation.
#[allow(clippy::too_many_arguments)]
pub fn build_image_config(
    text: String,
    width: u32,
    height: u32,
    max_words: u32,
    background_color: Option<&str>,
    colormap: Option<&str>,
    stopwords: Option<&str>,
    file_path: String,
) -> ImageConfig {
    let background_color = background_color
        .filter(|color| !color.is_empty())
        .unwrap_or(DEFAULT_BACKGROUND)
        .to_string();
    let colormap = colormap
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_COLORMAP)
        .to_string();
    ImageConfig {
        text,
        width,
        height,
        max_words,
        background_color,
        colormap,
        stopwords: stopwords.map(parse_stopwords).unwrap_or_default(),
        file_path: PathBuf::from(file_path),
    }
}

pub fn parse_stopwords(input: &str) -> BTreeSet<String> {
    input
        .split(',')
        .map(|part| part.trim())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_string())
        .collect()
}
