use std::path::PathBuf;

use crate::validate::{
    validate_file_path, validate_height, validate_max_words, validate_text, validate_width,
};
use crate::{build_image_config, GenerateParams, Generator, ImageConfig, Result, ValidationError};

pub const ERROR_DIALOG_TITLE: &str = "error";
pub const SUCCESS_DIALOG_TITLE: &str = "Success";
pub const COLOR_DIALOG_TITLE: &str = "Choose background color";
pub const SAVE_DIALOG_TITLE: &str = "Save word cloud as";
pub const SAVE_FILE_TYPES: &[(&str, &str)] = &[("PNG", ".png"), ("JPEG", ".jpg")];

/// Host-side dialogs the form delegates to.
pub trait Dialogs {
    /// Returns `None` when the user cancels.
    fn pick_color(&self, title: &str) -> Result<Option<String>>;
    /// Returns an empty string when the user cancels.
    fn pick_save_path(&self, title: &str, file_types: &[(&str, &str)]) -> Result<String>;
    fn show_error(&self, title: &str, message: &str);
    fn show_info(&self, title: &str, message: &str);
}

/// Raw field values as the user left them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFields {
    pub text: String,
    pub width: String,
    pub height: String,
    pub max_words: String,
    pub background: Option<String>,
    pub colormap: Option<String>,
    pub stopwords: String,
    pub save_path: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            text: String::new(),
            width: "400".to_string(),
            height: "200".to_string(),
            max_words: "200".to_string(),
            background: None,
            colormap: None,
            stopwords: String::new(),
            save_path: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(PathBuf),
    Rejected(ValidationError),
}

pub struct FormController<'a> {
    fields: FormFields,
    dialogs: &'a dyn Dialogs,
    generator: &'a dyn Generator,
}

impl<'a> FormController<'a> {
    pub fn new(dialogs: &'a dyn Dialogs, generator: &'a dyn Generator) -> Self {
        Self::with_fields(FormFields::default(), dialogs, generator)
    }

    pub fn with_fields(
        fields: FormFields,
        dialogs: &'a dyn Dialogs,
        generator: &'a dyn Generator,
    ) -> Self {
        Self {
            fields,
            dialogs,
            generator,
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    pub fn choose_color(&mut self) -> Result<()> {
        self.fields.background = self.dialogs.pick_color(COLOR_DIALOG_TITLE)?;
        Ok(())
    }

    pub fn choose_save_location(&mut self) -> Result<()> {
        self.fields.save_path = self
            .dialogs
            .pick_save_path(SAVE_DIALOG_TITLE, SAVE_FILE_TYPES)?;
        Ok(())
    }

    /// Validates every field and assembles the configuration.
    pub fn read_config(&self) -> std::result::Result<ImageConfig, ValidationError> {
        let fields = &self.fields;
        let text = validate_text(&fields.text)?;
        let width = validate_width(&fields.width)?;
        let height = validate_height(&fields.height)?;
        let max_words = validate_max_words(&fields.max_words)?;
        let file_path = validate_file_path(&fields.save_path)?;
        Ok(build_image_config(
            text,
            width,
            height,
            max_words,
            fields.background.as_deref(),
            fields.colormap.as_deref(),
            Some(fields.stopwords.as_str()),
            file_path,
        ))
    }

    /// Runs one "Generate" action.
    ///
    /// Validation failures are shown in the error dialog and returned as
    /// [`SubmitOutcome::Rejected`] with every field untouched. Generator and
    /// I/O failures are returned as errors.
    pub fn submit(&mut self) -> Result<SubmitOutcome> {
        log::debug!("validating form fields");
        let config = match self.read_config() {
            Ok(config) => config,
            Err(err) => {
                log::debug!("submission rejected: {err}");
                self.dialogs.show_error(ERROR_DIALOG_TITLE, err.message());
                return Ok(SubmitOutcome::Rejected(err));
            }
        };

        log::debug!(
            "generating {}x{} cloud with colormap {}",
            config.width,
            config.height,
            config.colormap
        );
        let params = GenerateParams::from_config(&config);
        let cloud = self.generator.generate(&params)?;
        cloud.to_file(&config.file_path)?;

        self.fields.save_path.clear();
        let message = format!("Word cloud saved to {}", config.file_path.display());
        self.dialogs.show_info(SUCCESS_DIALOG_TITLE, &message);
        Ok(SubmitOutcome::Saved(config.file_path))
    }
}
