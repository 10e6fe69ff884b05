use crate::interactive::Prompter;
use std::error::Error as StdError;
use std::path::Path;
use wordcloud_core::{parse_color, Dialogs, Error, Result};

/// Terminal stand-ins for the color picker, save dialog and message boxes.
pub(crate) struct TerminalDialogs<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> TerminalDialogs<'a> {
    pub(crate) fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    fn ask(&self, prompt: &str) -> Result<String> {
        self.prompter
            .input_string(prompt, None, true)
            .map_err(prompt_error)
    }
}

fn prompt_error(err: Box<dyn StdError>) -> Error {
    Error::Io(std::io::Error::other(err.to_string()))
}

impl Dialogs for TerminalDialogs<'_> {
    fn pick_color(&self, title: &str) -> Result<Option<String>> {
        loop {
            let value = self.ask(&format!("{title} (name or #rrggbb, empty to cancel)"))?;
            let value = value.trim();
            if value.is_empty() {
                return Ok(None);
            }
            match parse_color(value) {
                Some(rgb) => return Ok(Some(rgb.to_string())),
                None => eprintln!("unrecognized color: {value}"),
            }
        }
    }

    fn pick_save_path(&self, title: &str, file_types: &[(&str, &str)]) -> Result<String> {
        let extensions: Vec<&str> = file_types.iter().map(|(_, ext)| *ext).collect();
        loop {
            let value = self.ask(&format!(
                "{title} ({}, empty to cancel)",
                extensions.join(" or ")
            ))?;
            let value = value.trim();
            if value.is_empty() {
                return Ok(String::new());
            }
            let Some(ext) = Path::new(value).extension().and_then(|ext| ext.to_str()) else {
                // Extension-less names get the first file type.
                let default = extensions.first().copied().unwrap_or_default();
                return Ok(format!("{value}{default}"));
            };
            let dotted = format!(".{}", ext.to_ascii_lowercase());
            if extensions.contains(&dotted.as_str()) {
                return Ok(value.to_string());
            }
            eprintln!("unsupported file type .{ext}; use {}", extensions.join(" or "));
        }
    }

    fn show_error(&self, title: &str, message: &str) {
        eprintln!("{title}: {message}");
    }

    fn show_info(&self, title: &str, message: &str) {
        println!("{title}: {message}");
    }
}
