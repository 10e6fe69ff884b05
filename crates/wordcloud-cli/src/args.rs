use clap::builder::PossibleValuesParser;
use clap::Parser;
use wordcloud_core::{parse_color, COLORMAPS};

#[derive(Parser, Debug)]
#[command(
    name = "wordcloud",
    about = "Generate word-cloud images from text.",
    version
)]
pub(crate) struct Args {
    /// Text file to read. Use "-" to read from stdin.
    pub(crate) input: Option<String>,

    /// Where to save the image (.png or .jpg; .jpeg/.webp/.svg also work).
    #[arg(short, long)]
    pub(crate) output: Option<String>,

    /// Image width in pixels (400-3000).
    #[arg(short = 'W', long)]
    pub(crate) width: Option<String>,

    /// Image height in pixels (200-1500).
    #[arg(short = 'H', long)]
    pub(crate) height: Option<String>,

    /// Maximum number of words to draw (200-400).
    #[arg(long = "max-words")]
    pub(crate) max_words: Option<String>,

    /// Background color (e.g. #171717 or "navy").
    #[arg(short = 'b', long, value_parser = parse_background)]
    pub(crate) background: Option<String>,

    /// Colormap used to color the words.
    #[arg(long, value_parser = PossibleValuesParser::new(COLORMAPS.iter().copied()))]
    pub(crate) colormap: Option<String>,

    /// Comma-separated words to leave out.
    #[arg(long)]
    pub(crate) stopwords: Option<String>,

    /// JSON settings file path ("base" or a custom file).
    #[arg(short, long)]
    pub(crate) config: Option<String>,

    /// Edit the form interactively before generating.
    #[arg(short, long)]
    pub(crate) interactive: bool,
}

fn parse_background(value: &str) -> Result<String, String> {
    match parse_color(value) {
        Some(_) => Ok(value.trim().to_string()),
        None => Err(format!("unrecognized color: {value}")),
    }
}
