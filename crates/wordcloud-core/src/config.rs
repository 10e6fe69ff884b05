use serde::{Deserialize, Serialize};

use crate::{
    Error, Result, DEFAULT_FONT_STEP, DEFAULT_GLYPH_WIDTH_RATIO, DEFAULT_JPEG_QUALITY, DEFAULT_MARGIN,
    DEFAULT_MIN_FONT_SIZE, DEFAULT_PNG_OPT_LEVEL, DEFAULT_PREFER_HORIZONTAL,
    DEFAULT_RELATIVE_SCALING,
};

/// Rendering tunables the form does not expose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub layout: LayoutOptions,
    pub font: FontOptions,
    pub png: PngOptions,
    pub jpeg_quality: u8,
}

impl Settings {
    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents)
            .map_err(|err| Error::InvalidInput(format!("settings: {err}")))
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            layout: LayoutOptions::default(),
            font: FontOptions::default(),
            png: PngOptions::default(),
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    pub prefer_horizontal: f32,
    pub margin: u32,
    pub min_font_size: u32,
    pub max_font_size: Option<u32>,
    pub font_step: u32,
    pub relative_scaling: f32,
    pub glyph_width_ratio: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            prefer_horizontal: DEFAULT_PREFER_HORIZONTAL,
            margin: DEFAULT_MARGIN,
            min_font_size: DEFAULT_MIN_FONT_SIZE,
            max_font_size: None,
            font_step: DEFAULT_FONT_STEP,
            relative_scaling: DEFAULT_RELATIVE_SCALING,
            glyph_width_ratio: DEFAULT_GLYPH_WIDTH_RATIO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontOptions {
    pub family: String,
    pub file: Option<String>,
}

impl Default for FontOptions {
    fn default() -> Self {
        Self {
            family: "sans-serif".to_string(),
            file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PngOptions {
    pub optimize: bool,
    pub level: u8,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            optimize: true,
            level: DEFAULT_PNG_OPT_LEVEL,
        }
    }
}
