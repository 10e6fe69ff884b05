use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;
use std::path::Path;

use crate::layout::{estimate_start_size, layout_words};
use crate::render::encode_svg;
use crate::svg::{build_svg, svg_font_face_css};
use crate::words::count_words;
use crate::{palette, Error, ImageConfig, OutputFormat, Result, Rgb, Settings, DEFAULT_SEED};

/// Inputs of one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateParams {
    pub width: u32,
    pub height: u32,
    pub random_state: u64,
    pub background_color: String,
    pub colormap: String,
    pub collocations: bool,
    pub max_words: u32,
    pub stopwords: BTreeSet<String>,
    pub text: String,
}

impl GenerateParams {
    /// Deterministic parameters for a form submission: fixed seed, no
    /// collocations.
    pub fn from_config(config: &ImageConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            random_state: DEFAULT_SEED,
            background_color: config.background_color.clone(),
            colormap: config.colormap.clone(),
            collocations: false,
            max_words: config.max_words,
            stopwords: config.stopwords.clone(),
            text: config.text.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub word: String,
    pub font_size: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub vertical: bool,
    pub color: Rgb,
}

/// A laid-out word cloud, ready to be encoded.
#[derive(Debug, Clone)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background_color: String,
    pub words: Vec<PlacedWord>,
    settings: Settings,
}

impl WordCloud {
    pub fn new(
        width: u32,
        height: u32,
        background_color: impl Into<String>,
        words: Vec<PlacedWord>,
        settings: Settings,
    ) -> Self {
        Self {
            width,
            height,
            background_color: background_color.into(),
            words,
            settings,
        }
    }

    pub fn to_svg(&self) -> Result<String> {
        let font_css = svg_font_face_css(&self.settings.font)?;
        Ok(build_svg(
            self.width,
            self.height,
            &self.background_color,
            &self.words,
            &self.settings.font.family,
            font_css,
        ))
    }

    pub fn to_bytes(&self, format: OutputFormat) -> Result<Vec<u8>> {
        encode_svg(&self.to_svg()?, format, &self.settings)
    }

    /// Writes the image, picking the format from the file extension.
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let format = OutputFormat::from_path(path).ok_or_else(|| {
            Error::InvalidInput(format!("unknown output format: {}", path.display()))
        })?;
        let bytes = self.to_bytes(format)?;
        std::fs::write(path, bytes)?;
        log::info!("wrote {} ({} words)", path.display(), self.words.len());
        Ok(())
    }
}

pub trait Generator {
    fn generate(&self, params: &GenerateParams) -> Result<WordCloud>;
}

#[derive(Debug, Clone, Default)]
pub struct WordCloudGenerator {
    settings: Settings,
}

impl WordCloudGenerator {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Generator for WordCloudGenerator {
    fn generate(&self, params: &GenerateParams) -> Result<WordCloud> {
        let palette = palette(&params.colormap).ok_or_else(|| {
            Error::InvalidInput(format!("unknown colormap: {}", params.colormap))
        })?;
        let words = count_words(
            &params.text,
            &params.stopwords,
            params.collocations,
            params.max_words as usize,
        );
        if words.is_empty() {
            return Err(Error::InvalidInput(
                "need at least one word to draw a word cloud".to_string(),
            ));
        }
        log::debug!(
            "{} distinct words, top {:?}",
            words.len(),
            words.first().map(|w| &w.word)
        );

        let layout = &self.settings.layout;
        let start_size = match layout.max_font_size {
            Some(size) => size,
            None => {
                let mut probe = StdRng::seed_from_u64(params.random_state);
                estimate_start_size(&words, params.width, params.height, layout, &mut probe)
                    .ok_or_else(|| {
                        Error::Render(
                            "no room to draw any word; the canvas is too small".to_string(),
                        )
                    })?
            }
        };

        let mut rng = StdRng::seed_from_u64(params.random_state);
        let placements = layout_words(
            &words,
            params.width,
            params.height,
            layout,
            start_size,
            &mut rng,
        );
        if placements.len() < words.len() {
            log::warn!(
                "placed {} of {} words; the rest did not fit",
                placements.len(),
                words.len()
            );
        }
        let placed = placements
            .into_iter()
            .map(|p| PlacedWord {
                color: palette.sample(rng.gen::<f32>()),
                word: p.word,
                font_size: p.font_size,
                x: p.x,
                y: p.y,
                width: p.width,
                height: p.height,
                vertical: p.vertical,
            })
            .collect();

        Ok(WordCloud::new(
            params.width,
            params.height,
            params.background_color.clone(),
            placed,
            self.settings.clone(),
        ))
    }
}
