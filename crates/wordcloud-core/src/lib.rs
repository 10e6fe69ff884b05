const DEFAULT_SEED: u64 = 1;
const DEFAULT_BACKGROUND: &str = "black";
const DEFAULT_PREFER_HORIZONTAL: f32 = 0.9;
const DEFAULT_MARGIN: u32 = 2;
const DEFAULT_MIN_FONT_SIZE: u32 = 4;
const DEFAULT_FONT_STEP: u32 = 1;
const DEFAULT_RELATIVE_SCALING: f32 = 0.5;
const DEFAULT_GLYPH_WIDTH_RATIO: f32 = 0.6;
const DEFAULT_LINE_HEIGHT_RATIO: f32 = 1.15;
const DEFAULT_JPEG_QUALITY: u8 = 95;
const DEFAULT_WEBP_QUALITY: f32 = 90.0;
const DEFAULT_PNG_OPT_LEVEL: u8 = 2;
const MAX_PNG_OPT_LEVEL: u8 = 6;
const OCCUPANCY_CELL: u32 = 2;

mod color;
mod config;
mod form;
mod generate;
mod image_config;
mod layout;
mod occupancy;
mod palette;
mod png;
mod render;
mod svg;
mod types;
mod validate;
mod words;

pub use color::{parse_color, Rgb};
pub use config::{FontOptions, LayoutOptions, PngOptions, Settings};
pub use form::{
    Dialogs, FormController, FormFields, SubmitOutcome, COLOR_DIALOG_TITLE, ERROR_DIALOG_TITLE,
    SAVE_DIALOG_TITLE, SAVE_FILE_TYPES, SUCCESS_DIALOG_TITLE,
};
pub use generate::{GenerateParams, Generator, PlacedWord, WordCloud, WordCloudGenerator};
pub use image_config::{build_image_config, parse_stopwords, ImageConfig};
pub use palette::{palette, Palette, PaletteKind, COLORMAPS, DEFAULT_COLORMAP};
pub use types::{Error, OutputFormat, Result};
pub use validate::{
    validate_file_path, validate_height, validate_max_words, validate_text, validate_width,
    ValidationError, HEIGHT_RANGE, MAX_WORDS_RANGE, WIDTH_RANGE,
};
pub use words::{count_words, WordFrequency};

#[cfg(test)]
mod tests;
