use dialoguer::{Input, Select};
use std::error::Error;
use std::fs;
use wordcloud_core::{
    Dialogs, FormController, FormFields, COLORMAPS, DEFAULT_COLORMAP, ERROR_DIALOG_TITLE,
};

pub(crate) trait Prompter {
    fn select(&self, prompt: &str, items: &[&str], default: usize)
        -> Result<usize, Box<dyn Error>>;
    fn input_string(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, Box<dyn Error>>;
}

pub(crate) struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn select(
        &self,
        prompt: &str,
        items: &[&str],
        default: usize,
    ) -> Result<usize, Box<dyn Error>> {
        Ok(Select::new()
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()?)
    }

    fn input_string(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<String, Box<dyn Error>> {
        let mut input = Input::new().with_prompt(prompt).allow_empty(allow_empty);
        if let Some(value) = default {
            input = input.default(value.to_string());
        }
        Ok(input.interact_text()?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    EditText,
    LoadText,
    Width,
    Height,
    MaxWords,
    Background,
    Colormap,
    Stopwords,
    SaveLocation,
    Generate,
    Quit,
}

const ACTIONS: [Action; 11] = [
    Action::EditText,
    Action::LoadText,
    Action::Width,
    Action::Height,
    Action::MaxWords,
    Action::Background,
    Action::Colormap,
    Action::Stopwords,
    Action::SaveLocation,
    Action::Generate,
    Action::Quit,
];

fn action_label(action: Action, fields: &FormFields) -> String {
    let unset = "(not set)";
    match action {
        Action::EditText => format!("Text [{} chars]", fields.text.chars().count()),
        Action::LoadText => "Load text from file".to_string(),
        Action::Width => format!("Width [{}]", fields.width),
        Action::Height => format!("Height [{}]", fields.height),
        Action::MaxWords => format!("Max words [{}]", fields.max_words),
        Action::Background => format!(
            "Choose background color [{}]",
            fields.background.as_deref().unwrap_or(unset)
        ),
        Action::Colormap => format!(
            "Colormap [{}]",
            fields.colormap.as_deref().unwrap_or(unset)
        ),
        Action::Stopwords => format!("Stopwords [{}]", fields.stopwords),
        Action::SaveLocation => {
            let path = fields.save_path.as_str();
            format!(
                "Choose save location [{}]",
                if path.is_empty() { unset } else { path }
            )
        }
        Action::Generate => "Generate".to_string(),
        Action::Quit => "Quit".to_string(),
    }
}

/// Drives the form from a terminal menu until the user quits.
pub(crate) fn run_form(
    prompter: &dyn Prompter,
    dialogs: &dyn Dialogs,
    form: &mut FormController<'_>,
) -> Result<(), Box<dyn Error>> {
    let mut last = 0;
    loop {
        let labels: Vec<String> = ACTIONS
            .iter()
            .map(|action| action_label(*action, form.fields()))
            .collect();
        let items: Vec<&str> = labels.iter().map(String::as_str).collect();
        let choice = prompter.select("Word cloud", &items, last)?;
        let Some(action) = ACTIONS.get(choice).copied() else {
            return Err(format!("menu choice out of range: {choice}").into());
        };
        last = choice;
        log::debug!("menu action {action:?}");

        match action {
            Action::EditText => {
                let fields = form.fields_mut();
                fields.text = prompter.input_string("Text", Some(&fields.text), true)?;
            }
            Action::LoadText => {
                let path = prompter.input_string("Text file path", None, true)?;
                let path = path.trim();
                if path.is_empty() {
                    continue;
                }
                match fs::read_to_string(path) {
                    Ok(text) => form.fields_mut().text = text,
                    Err(err) => {
                        dialogs.show_error(ERROR_DIALOG_TITLE, &format!("reading {path}: {err}"))
                    }
                }
            }
            Action::Width => {
                let fields = form.fields_mut();
                fields.width = prompter.input_string("Width (400-3000)", Some(&fields.width), true)?;
            }
            Action::Height => {
                let fields = form.fields_mut();
                fields.height =
                    prompter.input_string("Height (200-1500)", Some(&fields.height), true)?;
            }
            Action::MaxWords => {
                let fields = form.fields_mut();
                fields.max_words =
                    prompter.input_string("Max words (200-400)", Some(&fields.max_words), true)?;
            }
            Action::Background => form.choose_color()?,
            Action::Colormap => {
                let current = form.fields().colormap.as_deref().unwrap_or(DEFAULT_COLORMAP);
                let default = COLORMAPS.iter().position(|name| *name == current).unwrap_or(0);
                let index = prompter.select("Colormap", COLORMAPS, default)?;
                form.fields_mut().colormap = COLORMAPS.get(index).map(|name| name.to_string());
            }
            Action::Stopwords => {
                let fields = form.fields_mut();
                fields.stopwords = prompter.input_string(
                    "Stopwords (comma-separated)",
                    Some(&fields.stopwords),
                    true,
                )?;
            }
            Action::SaveLocation => form.choose_save_location()?,
            Action::Generate => {
                if let Err(err) = form.submit() {
                    log::debug!("generation failed: {err}");
                    dialogs.show_error(ERROR_DIALOG_TITLE, &err.to_string());
                }
            }
            Action::Quit => return Ok(()),
        }
    }
}
