use super::*;
use crate::layout::*;
use crate::occupancy::*;
use crate::palette::PALETTES;
use crate::png::*;
use crate::svg::*;
use crate::validate::file_stem;
use crate::words::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::collections::{BTreeSet, VecDeque};
use std::path::Path;
use tempfile::tempdir;

fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn quiet_settings() -> Settings {
    let mut settings = Settings::default();
    settings.png.optimize = false;
    settings
}

#[test]
fn width_bounds_are_inclusive() {
    assert!(validate_width("399").is_err());
    assert_eq!(validate_width("400").expect("min"), 400);
    assert_eq!(validate_width("3000").expect("max"), 3000);
    assert!(validate_width("3001").is_err());
}

#[test]
fn height_bounds_are_inclusive() {
    assert!(validate_height("199").is_err());
    assert_eq!(validate_height("200").expect("min"), 200);
    assert_eq!(validate_height("1500").expect("max"), 1500);
    assert!(validate_height("1501").is_err());
}

#[test]
fn max_words_bounds_are_inclusive() {
    assert!(validate_max_words("199").is_err());
    assert_eq!(validate_max_words("200").expect("min"), 200);
    assert_eq!(validate_max_words("400").expect("max"), 400);
    assert!(validate_max_words("401").is_err());
}

#[test]
fn numeric_fields_report_each_failure_kind() {
    let err = validate_width("").unwrap_err();
    assert!(err.message().contains("required"));
    let err = validate_height("abc").unwrap_err();
    assert!(err.message().contains("whole number"));
    let err = validate_max_words("0").unwrap_err();
    assert!(err.message().contains("positive"));
    let err = validate_width("-5").unwrap_err();
    assert!(err.message().contains("positive"));
    let err = validate_width("150").unwrap_err();
    assert!(err.message().contains("400"));
    assert!(err.message().contains("3000"));
}

#[test]
fn numeric_fields_accept_surrounding_whitespace() {
    assert_eq!(validate_width(" 500 ").expect("width"), 500);
}

#[test]
fn huge_numbers_are_out_of_range_not_panics() {
    assert!(validate_width("99999999999").is_err());
    assert!(validate_width("999999999999999999999999").is_err());
}

#[test]
fn text_must_not_be_blank() {
    for raw in ["", "   ", "\n", "\n\t  \n"] {
        assert!(validate_text(raw).is_err(), "{raw:?} should fail");
    }
    assert_eq!(validate_text(" hi \n").expect("text"), " hi \n");
}

#[test]
fn file_path_requires_a_named_file() {
    assert!(validate_file_path("").is_err());
    assert!(validate_file_path("out/ .png").is_err());
    assert!(validate_file_path("out/   ").is_err());
    assert!(validate_file_path("out/").is_err());
    assert!(validate_file_path(r"C:\pics\  .jpg").is_err());
    assert!(validate_file_path("cloud.png").is_ok());
    assert!(validate_file_path("/tmp/a/cloud.jpg").is_ok());
}

#[test]
fn file_stem_follows_leading_dot_rule() {
    assert_eq!(file_stem("dir/cloud.png"), "cloud");
    assert_eq!(file_stem("dir/a.b.png"), "a.b");
    assert_eq!(file_stem("dir/.png"), ".png");
    assert_eq!(file_stem("noext"), "noext");
    assert_eq!(file_stem("dir/"), "");
}

#[test]
fn stopwords_are_split_trimmed_and_deduplicated() {
    assert_eq!(parse_stopwords("a, b ,, c"), set(&["a", "b", "c"]));
    assert!(parse_stopwords("").is_empty());
    assert!(parse_stopwords(" , ,").is_empty());
    assert_eq!(parse_stopwords("The, the"), set(&["The", "the"]));
}

#[test]
fn build_image_config_applies_defaults() {
    let config = build_image_config(
        "hello".to_string(),
        400,
        200,
        200,
        None,
        None,
        None,
        "out.png".to_string(),
    );
    assert_eq!(config.background_color, "black");
    assert_eq!(config.colormap, "Accent");
    assert!(config.stopwords.is_empty());
    assert_eq!(config.file_path, Path::new("out.png"));

    let config = build_image_config(
        "hello".to_string(),
        800,
        600,
        300,
        Some("#ffffff"),
        Some("viridis"),
        Some("x, y"),
        "out.jpg".to_string(),
    );
    assert_eq!(config.background_color, "#ffffff");
    assert_eq!(config.colormap, "viridis");
    assert_eq!(config.stopwords, set(&["x", "y"]));
}

#[test]
fn colormap_list_matches_palettes() {
    assert_eq!(COLORMAPS[0], DEFAULT_COLORMAP);
    assert_eq!(COLORMAPS.len(), PALETTES.len());
    for (name, palette) in COLORMAPS.iter().zip(PALETTES) {
        assert_eq!(*name, palette.name);
    }
    let mut sorted = COLORMAPS.to_vec();
    sorted.sort();
    assert_eq!(sorted, COLORMAPS);
}

#[test]
fn listed_palette_picks_discrete_entries() {
    let accent = palette("Accent").expect("accent");
    assert_eq!(accent.kind, PaletteKind::Listed);
    assert_eq!(accent.sample(0.0), Rgb(0x7f, 0xc9, 0x7f));
    assert_eq!(accent.sample(0.99), Rgb(0x66, 0x66, 0x66));
    assert_eq!(accent.sample(1.0), Rgb(0x66, 0x66, 0x66));
}

#[test]
fn linear_palette_interpolates_stops() {
    let copper = palette("copper").expect("copper");
    assert_eq!(copper.sample(0.0), Rgb(0, 0, 0));
    assert_eq!(copper.sample(1.0), Rgb(0xff, 0xc7, 0x7f));
    assert_eq!(copper.sample(0.5), Rgb(0x80, 0x64, 0x40));
    assert!(palette("nope").is_none());
}

#[test]
fn parse_color_accepts_hex_and_names() {
    assert_eq!(parse_color("#fff"), Some(Rgb(255, 255, 255)));
    assert_eq!(parse_color("#1a2B3c"), Some(Rgb(0x1a, 0x2b, 0x3c)));
    assert_eq!(parse_color(" Black "), Some(Rgb(0, 0, 0)));
    assert_eq!(parse_color("#12"), None);
    assert_eq!(parse_color("#gggggg"), None);
    assert_eq!(parse_color("chartreuse-ish"), None);
    assert_eq!(Rgb(0x1a, 0x2b, 0x3c).to_string(), "#1a2b3c");
}

#[test]
fn tokenize_drops_possessives_digits_and_single_letters() {
    let tokens = tokenize("It's John's dog's 42 bones, a b c");
    assert_eq!(tokens, vec!["It", "John", "dog", "bones"]);
}

#[test]
fn count_words_normalizes_by_top_word() {
    let words = count_words("hello world hello", &BTreeSet::new(), false, 200);
    assert_eq!(words.len(), 2);
    assert_eq!(words[0].word, "hello");
    assert_eq!(words[0].count, 2);
    assert_eq!(words[0].weight, 1.0);
    assert_eq!(words[1].word, "world");
    assert_eq!(words[1].weight, 0.5);
}

#[test]
fn count_words_merges_case_and_plurals() {
    let words = count_words("Cat cat cat dogs dog dogs glass glass", &BTreeSet::new(), false, 10);
    let as_pairs: Vec<(&str, usize)> = words.iter().map(|w| (w.word.as_str(), w.count)).collect();
    assert_eq!(as_pairs, vec![("cat", 3), ("dog", 3), ("glass", 2)]);
}

#[test]
fn count_words_filters_stopwords_ignoring_case() {
    let words = count_words("the cat The THE", &set(&["The"]), false, 10);
    assert_eq!(words.len(), 1);
    assert_eq!(words[0].word, "cat");
}

#[test]
fn count_words_truncates_to_max_words() {
    let words = count_words("aa bb cc dd ee aa", &BTreeSet::new(), false, 3);
    assert_eq!(words.len(), 3);
    assert_eq!(words[0].word, "aa");
}

#[test]
fn count_words_finds_collocations_when_enabled() {
    let text = "new york is big, new york never sleeps";
    let with = count_words(text, &set(&["is"]), true, 20);
    assert_eq!(with[0].word, "new york");
    assert_eq!(with[0].count, 2);
    assert!(!with.iter().any(|w| w.word == "new"));

    let without = count_words(text, &set(&["is"]), false, 20);
    assert!(without.iter().all(|w| !w.word.contains(' ')));
}

#[test]
fn fold_tokens_prefers_most_common_spelling() {
    let folded = fold_tokens(&["Rust", "rust", "Rust"]);
    assert_eq!(folded, vec![("Rust".to_string(), 3)]);
}

#[test]
fn occupancy_samples_inside_free_space() {
    let mut grid = OccupancyGrid::new(100, 50, 2);
    let mut rng = StdRng::seed_from_u64(7);
    let (x, y) = grid.sample_position(40, 20, &mut rng).expect("position");
    assert!(x + 40 <= 100);
    assert!(y + 20 <= 50);
    assert!(grid.sample_position(101, 10, &mut rng).is_none());

    grid.mark(0, 0, 100, 50);
    assert!(grid.sample_position(2, 2, &mut rng).is_none());
}

#[test]
fn occupancy_marks_only_the_rectangle() {
    let mut grid = OccupancyGrid::new(20, 20, 1);
    grid.mark(5, 5, 5, 5);
    assert!(!grid.is_free(5, 5, 1, 1));
    assert!(!grid.is_free(0, 0, 6, 6));
    assert!(grid.is_free(0, 0, 5, 5));
    assert!(grid.is_free(10, 10, 10, 10));
}

#[test]
fn measure_word_swaps_axes_when_vertical() {
    let (w, h) = measure_word("hello", 20, false, 0.6);
    assert_eq!((w, h), (60, 23));
    assert_eq!(measure_word("hello", 20, true, 0.6), (23, 60));
}

#[test]
fn layout_is_deterministic_and_non_overlapping() {
    let text = "alpha beta gamma delta alpha beta alpha epsilon zeta eta theta iota kappa alpha";
    let words = count_words(text, &BTreeSet::new(), false, 200);
    let options = LayoutOptions::default();
    let run = || {
        let mut rng = StdRng::seed_from_u64(1);
        layout_words(&words, 400, 200, &options, 120, &mut rng)
    };
    let first = run();
    assert_eq!(first, run());
    assert!(!first.is_empty());
    for (i, a) in first.iter().enumerate() {
        assert!(a.x + a.width <= 400 && a.y + a.height <= 200, "{a:?}");
        for b in &first[i + 1..] {
            let disjoint = a.x + a.width <= b.x
                || b.x + b.width <= a.x
                || a.y + a.height <= b.y
                || b.y + b.height <= a.y;
            assert!(disjoint, "{a:?} overlaps {b:?}");
        }
    }
}

#[test]
fn layout_font_sizes_do_not_grow() {
    let words = count_words("one one one two two three", &BTreeSet::new(), false, 200);
    let mut rng = StdRng::seed_from_u64(1);
    let placed = layout_words(&words, 400, 200, &LayoutOptions::default(), 80, &mut rng);
    for pair in placed.windows(2) {
        assert!(pair[0].font_size >= pair[1].font_size);
    }
}

#[test]
fn estimate_start_size_uses_full_height_for_single_word() {
    let words = count_words("solo", &BTreeSet::new(), false, 200);
    let mut rng = StdRng::seed_from_u64(1);
    let size = estimate_start_size(&words, 400, 200, &LayoutOptions::default(), &mut rng);
    assert_eq!(size, Some(200));
}

#[test]
fn build_svg_renders_background_and_words() {
    let words = vec![
        PlacedWord {
            word: "a<b".to_string(),
            font_size: 20,
            x: 10,
            y: 10,
            width: 36,
            height: 23,
            vertical: false,
            color: Rgb(255, 0, 0),
        },
        PlacedWord {
            word: "up".to_string(),
            font_size: 10,
            x: 100,
            y: 50,
            width: 12,
            height: 12,
            vertical: true,
            color: Rgb(0, 0, 255),
        },
    ];
    let svg = build_svg(400, 200, "black", &words, "sans-serif", None);
    assert!(svg.contains(r#"width="400" height="200""#));
    assert!(svg.contains(r##"fill="#000000""##));
    assert!(svg.contains("a&lt;b"));
    assert!(svg.contains("#ff0000"));
    assert!(svg.contains("rotate(-90)"));
    assert!(svg.contains(r#"textLength="36""#));
    assert!(svg.ends_with("</g></svg>"));
}

#[test]
fn svg_font_face_embeds_font_file() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("Demo.ttf");
    std::fs::write(&path, b"font").expect("write");
    let font = FontOptions {
        family: "Demo".to_string(),
        file: Some(path.to_string_lossy().to_string()),
    };
    let css = svg_font_face_css(&font).expect("css").expect("some css");
    assert!(css.contains("font-family: 'Demo'"));
    assert!(css.contains("base64,Zm9udA=="));
    assert!(svg_font_face_css(&FontOptions::default())
        .expect("css")
        .is_none());
}

#[test]
fn premultiplied_to_rgb_drops_alpha() {
    let out = premultiplied_to_rgb(&[1, 2, 3, 255, 4, 5, 6, 128]);
    assert_eq!(out, vec![1, 2, 3, 4, 5, 6]);
    let out = unpremultiply_rgba(&[64, 0, 0, 128, 9, 9, 9, 0]);
    assert_eq!(out, vec![128, 0, 0, 128, 0, 0, 0, 0]);
}

#[test]
fn output_format_follows_extension() {
    assert_eq!(OutputFormat::from_path(Path::new("a.PNG")), Some(OutputFormat::Png));
    assert_eq!(OutputFormat::from_path(Path::new("a.jpg")), Some(OutputFormat::Jpeg));
    assert_eq!(OutputFormat::from_path(Path::new("a.jpeg")), Some(OutputFormat::Jpeg));
    assert_eq!(OutputFormat::from_path(Path::new("a.svg")), Some(OutputFormat::Svg));
    assert_eq!(OutputFormat::from_path(Path::new("a.webp")), Some(OutputFormat::Webp));
    assert_eq!(OutputFormat::from_path(Path::new("a.gif")), None);
    assert_eq!(OutputFormat::from_path(Path::new("noext")), None);
}

#[test]
fn settings_deserialize_partial_json() {
    let settings: Settings =
        Settings::from_json(r#"{"layout":{"margin":6},"jpeg_quality":80}"#).expect("parse");
    assert_eq!(settings.layout.margin, 6);
    assert_eq!(settings.layout.min_font_size, 4);
    assert_eq!(settings.jpeg_quality, 80);
    assert!(settings.png.optimize);
    assert_eq!(settings.font.family, "sans-serif");
}

fn sample_params() -> GenerateParams {
    GenerateParams {
        width: 400,
        height: 200,
        random_state: 1,
        background_color: "black".to_string(),
        colormap: "Accent".to_string(),
        collocations: false,
        max_words: 200,
        stopwords: BTreeSet::new(),
        text: "hello world hello rust clouds words hello world".to_string(),
    }
}

#[test]
fn generator_is_deterministic_for_a_seed() {
    let generator = WordCloudGenerator::new(quiet_settings());
    let a = generator.generate(&sample_params()).expect("generate");
    let b = generator.generate(&sample_params()).expect("generate");
    assert_eq!(a.words, b.words);
    assert_eq!(a.words[0].word, "hello");
    let accent = palette("Accent").expect("accent");
    for word in &a.words {
        assert!(accent.colors.contains(&word.color));
    }
}

#[test]
fn generator_rejects_unknown_colormap_and_empty_text() {
    let generator = WordCloudGenerator::default();
    let mut params = sample_params();
    params.colormap = "nope".to_string();
    assert!(matches!(
        generator.generate(&params),
        Err(Error::InvalidInput(_))
    ));

    let mut params = sample_params();
    params.text = "1 2 3 a".to_string();
    assert!(matches!(
        generator.generate(&params),
        Err(Error::InvalidInput(_))
    ));
}

#[test]
fn word_cloud_writes_svg_png_and_jpeg() {
    let dir = tempdir().expect("temp dir");
    let generator = WordCloudGenerator::new(quiet_settings());
    let cloud = generator.generate(&sample_params()).expect("generate");

    let svg_path = dir.path().join("cloud.svg");
    cloud.to_file(&svg_path).expect("svg");
    let svg = std::fs::read_to_string(&svg_path).expect("read svg");
    assert!(svg.starts_with("<svg"));

    let png_path = dir.path().join("cloud.png");
    cloud.to_file(&png_path).expect("png");
    let png = std::fs::read(&png_path).expect("read png");
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");

    let jpg_path = dir.path().join("cloud.jpg");
    cloud.to_file(&jpg_path).expect("jpg");
    let jpg = std::fs::read(&jpg_path).expect("read jpg");
    assert_eq!(&jpg[..2], &[0xFF, 0xD8]);

    let err = cloud.to_file(&dir.path().join("cloud.gif")).unwrap_err();
    assert!(err.to_string().contains("unknown output format"));
}

#[test]
fn rasterized_background_uses_configured_color() {
    let cloud = WordCloud::new(400, 200, "#ff0000", Vec::new(), quiet_settings());
    let svg = cloud.to_svg().expect("svg");
    let pixmap = crate::render::rasterize_svg(&svg, &FontOptions::default()).expect("raster");
    assert_eq!((pixmap.width(), pixmap.height()), (400, 200));
    assert_eq!(&pixmap.data()[..4], &[255, 0, 0, 255]);
}

#[derive(Default)]
struct FakeDialogs {
    colors: RefCell<VecDeque<Option<String>>>,
    paths: RefCell<VecDeque<String>>,
    errors: RefCell<Vec<(String, String)>>,
    infos: RefCell<Vec<(String, String)>>,
    file_types: RefCell<Vec<(String, String)>>,
}

impl Dialogs for FakeDialogs {
    fn pick_color(&self, _title: &str) -> Result<Option<String>> {
        Ok(self.colors.borrow_mut().pop_front().flatten())
    }

    fn pick_save_path(&self, _title: &str, file_types: &[(&str, &str)]) -> Result<String> {
        *self.file_types.borrow_mut() = file_types
            .iter()
            .map(|(label, ext)| (label.to_string(), ext.to_string()))
            .collect();
        Ok(self.paths.borrow_mut().pop_front().unwrap_or_default())
    }

    fn show_error(&self, title: &str, message: &str) {
        self.errors
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }

    fn show_info(&self, title: &str, message: &str) {
        self.infos
            .borrow_mut()
            .push((title.to_string(), message.to_string()));
    }
}

#[derive(Default)]
struct RecordingGenerator {
    calls: RefCell<Vec<GenerateParams>>,
    fail: bool,
}

impl Generator for RecordingGenerator {
    fn generate(&self, params: &GenerateParams) -> Result<WordCloud> {
        self.calls.borrow_mut().push(params.clone());
        if self.fail {
            return Err(Error::Render("boom".to_string()));
        }
        Ok(WordCloud::new(
            params.width,
            params.height,
            params.background_color.clone(),
            Vec::new(),
            quiet_settings(),
        ))
    }
}

#[test]
fn submit_generates_saves_and_clears_path() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("cloud.png");
    let dialogs = FakeDialogs::default();
    dialogs
        .paths
        .borrow_mut()
        .push_back(path.to_string_lossy().to_string());
    let generator = RecordingGenerator::default();
    let mut form = FormController::new(&dialogs, &generator);
    form.fields_mut().text = "hello world hello".to_string();
    form.choose_save_location().expect("save location");

    let config = form.read_config().expect("config");
    assert_eq!(config.background_color, "black");
    assert_eq!(config.colormap, "Accent");
    assert!(config.stopwords.is_empty());

    let outcome = form.submit().expect("submit");
    assert_eq!(outcome, SubmitOutcome::Saved(path.clone()));
    assert!(path.exists());
    assert!(form.fields().save_path.is_empty());
    assert_eq!(form.fields().text, "hello world hello");

    let calls = generator.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].random_state, 1);
    assert!(!calls[0].collocations);
    assert_eq!(calls[0].width, 400);
    assert_eq!(calls[0].height, 200);
    assert_eq!(calls[0].max_words, 200);

    let infos = dialogs.infos.borrow();
    assert_eq!(infos.len(), 1);
    assert_eq!(infos[0].0, "Success");
    assert!(infos[0].1.contains(&path.to_string_lossy().to_string()));
    assert!(dialogs.errors.borrow().is_empty());
    assert_eq!(
        *dialogs.file_types.borrow(),
        vec![
            ("PNG".to_string(), ".png".to_string()),
            ("JPEG".to_string(), ".jpg".to_string())
        ]
    );
}

#[test]
fn submit_rejects_out_of_range_width_without_generating() {
    let dialogs = FakeDialogs::default();
    let generator = RecordingGenerator::default();
    let fields = FormFields {
        text: "hello".to_string(),
        width: "150".to_string(),
        save_path: "cloud.png".to_string(),
        ..FormFields::default()
    };
    let mut form = FormController::with_fields(fields.clone(), &dialogs, &generator);

    let outcome = form.submit().expect("submit");
    let SubmitOutcome::Rejected(err) = outcome else {
        panic!("expected rejection");
    };
    assert!(err.message().contains("400") && err.message().contains("3000"));
    assert!(generator.calls.borrow().is_empty());
    assert_eq!(form.fields(), &fields);
    let errors = dialogs.errors.borrow();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].0, "error");
    assert_eq!(errors[0].1, err.message());
    assert!(!Path::new("cloud.png").exists());
}

#[test]
fn submit_requires_a_save_path_after_success() {
    let dir = tempdir().expect("temp dir");
    let path = dir.path().join("first.jpg");
    let dialogs = FakeDialogs::default();
    let generator = RecordingGenerator::default();
    let fields = FormFields {
        text: "some text here".to_string(),
        save_path: path.to_string_lossy().to_string(),
        ..FormFields::default()
    };
    let mut form = FormController::with_fields(fields, &dialogs, &generator);
    assert!(matches!(form.submit().expect("first"), SubmitOutcome::Saved(_)));
    assert!(matches!(
        form.submit().expect("second"),
        SubmitOutcome::Rejected(_)
    ));
    assert_eq!(generator.calls.borrow().len(), 1);
}

#[test]
fn choose_color_stores_pick_or_clears_on_cancel() {
    let dialogs = FakeDialogs::default();
    dialogs
        .colors
        .borrow_mut()
        .push_back(Some("#336699".to_string()));
    dialogs.colors.borrow_mut().push_back(None);
    let generator = RecordingGenerator::default();
    let mut form = FormController::new(&dialogs, &generator);

    form.choose_color().expect("pick");
    assert_eq!(form.fields().background.as_deref(), Some("#336699"));
    form.choose_color().expect("cancel");
    assert_eq!(form.fields().background, None);
}

#[test]
fn choose_save_location_cancel_leaves_empty_path() {
    let dialogs = FakeDialogs::default();
    let generator = RecordingGenerator::default();
    let fields = FormFields {
        save_path: "old.png".to_string(),
        ..FormFields::default()
    };
    let mut form = FormController::with_fields(fields, &dialogs, &generator);
    form.choose_save_location().expect("cancel");
    assert!(form.fields().save_path.is_empty());
}

#[test]
fn submit_passes_form_choices_to_generator() {
    let dir = tempdir().expect("temp dir");
    let dialogs = FakeDialogs::default();
    let generator = RecordingGenerator::default();
    let fields = FormFields {
        text: "words words".to_string(),
        width: "800".to_string(),
        height: "600".to_string(),
        max_words: "300".to_string(),
        background: Some("#ffffff".to_string()),
        colormap: Some("viridis".to_string()),
        stopwords: "the, and".to_string(),
        save_path: dir.path().join("c.svg").to_string_lossy().to_string(),
    };
    let mut form = FormController::with_fields(fields, &dialogs, &generator);
    form.submit().expect("submit");
    let calls = generator.calls.borrow();
    assert_eq!(calls[0].background_color, "#ffffff");
    assert_eq!(calls[0].colormap, "viridis");
    assert_eq!(calls[0].stopwords, set(&["and", "the"]));
    assert_eq!((calls[0].width, calls[0].height, calls[0].max_words), (800, 600, 300));
}

#[test]
fn generator_failure_propagates_and_keeps_path() {
    let dialogs = FakeDialogs::default();
    let generator = RecordingGenerator {
        fail: true,
        ..RecordingGenerator::default()
    };
    let fields = FormFields {
        text: "hello".to_string(),
        save_path: "cloud.png".to_string(),
        ..FormFields::default()
    };
    let mut form = FormController::with_fields(fields, &dialogs, &generator);
    assert!(form.submit().is_err());
    assert_eq!(form.fields().save_path, "cloud.png");
    assert!(dialogs.infos.borrow().is_empty());
}
