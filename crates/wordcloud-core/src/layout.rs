use rand::Rng;

use crate::occupancy::OccupancyGrid;
use crate::words::WordFrequency;
use crate::{LayoutOptions, DEFAULT_LINE_HEIGHT_RATIO, OCCUPANCY_CELL};

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Placement {
    pub(crate) word: String,
    pub(crate) font_size: u32,
    pub(crate) x: u32,
    pub(crate) y: u32,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) vertical: bool,
}

/// Places words largest first; stops at the first word that cannot fit
/// even at the minimum font size.
pub(crate) fn layout_words<R: Rng>(
    words: &[WordFrequency],
    width: u32,
    height: u32,
    options: &LayoutOptions,
    start_font_size: u32,
    rng: &mut R,
) -> Vec<Placement> {
    let mut grid = OccupancyGrid::new(width, height, OCCUPANCY_CELL);
    let mut placed = Vec::new();
    let mut font_size = start_font_size;
    let mut last_weight = 1.0f32;
    let rs = options.relative_scaling;
    let min_font_size = options.min_font_size.max(1);
    let font_step = options.font_step.max(1);

    for entry in words {
        if entry.weight <= 0.0 {
            continue;
        }
        if rs != 0.0 {
            let scaled = (rs * (entry.weight / last_weight) + (1.0 - rs)) * font_size as f32;
            font_size = scaled.round().max(0.0) as u32;
        }
        let mut vertical = rng.gen::<f32>() >= options.prefer_horizontal;
        let mut tried_other_orientation = false;
        let mut position = None;
        while font_size >= min_font_size {
            let (w, h) = measure_word(&entry.word, font_size, vertical, options.glyph_width_ratio);
            position = grid.sample_position(w + options.margin, h + options.margin, rng);
            if position.is_some() {
                break;
            }
            if !tried_other_orientation && options.prefer_horizontal < 1.0 {
                vertical = !vertical;
                tried_other_orientation = true;
            } else {
                font_size = font_size.saturating_sub(font_step);
                vertical = false;
            }
        }
        let Some((px, py)) = position else {
            log::debug!(
                "no room left for {:?}; stopping after {} words",
                entry.word,
                placed.len()
            );
            break;
        };
        let (w, h) = measure_word(&entry.word, font_size, vertical, options.glyph_width_ratio);
        let half = options.margin / 2;
        grid.mark(px, py, w + options.margin, h + options.margin);
        placed.push(Placement {
            word: entry.word.clone(),
            font_size,
            x: px + half,
            y: py + half,
            width: w,
            height: h,
            vertical,
        });
        last_weight = entry.weight;
    }
    placed
}

/// First font size when no maximum is configured: the harmonic mean of the
/// sizes the two top words get when laid out alone at full height.
pub(crate) fn estimate_start_size<R: Rng>(
    words: &[WordFrequency],
    width: u32,
    height: u32,
    options: &LayoutOptions,
    rng: &mut R,
) -> Option<u32> {
    if words.len() == 1 {
        return Some(height);
    }
    let top = &words[..words.len().min(2)];
    let sizes: Vec<u32> = layout_words(top, width, height, options, height, rng)
        .iter()
        .map(|placed| placed.font_size)
        .collect();
    match sizes.as_slice() {
        [a, b, ..] => Some((2.0 * *a as f32 * *b as f32 / (*a + *b) as f32) as u32),
        [a] => Some(*a),
        [] => None,
    }
}

/// Box of `word` at `font_size`, as (width, height) on the canvas.
pub(crate) fn measure_word(word: &str, font_size: u32, vertical: bool, ratio: f32) -> (u32, u32) {
    let cells = unicode_width::UnicodeWidthStr::width(word).max(1);
    let along = (cells as f32 * font_size as f32 * ratio).round().max(1.0) as u32;
    let across = (font_size as f32 * DEFAULT_LINE_HEIGHT_RATIO).round().max(1.0) as u32;
    if vertical {
        (across, along)
    } else {
        (along, across)
    }
}
