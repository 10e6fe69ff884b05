use crate::args::Args;
use crate::config::load_settings;
use crate::dialogs::TerminalDialogs;
use crate::interactive::{run_form, DialoguerPrompter, Prompter};
use crate::io::{read_stdin_with, read_text_input};
use clap::Parser;
use std::error::Error;
use wordcloud_core::{FormController, FormFields, SubmitOutcome, WordCloudGenerator};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunStatus {
    Done,
    Rejected,
}

pub(crate) fn run() -> Result<RunStatus, Box<dyn Error>> {
    let args = Args::parse();
    run_with(
        args,
        atty::is(atty::Stream::Stdin),
        None,
        &DialoguerPrompter,
    )
}

pub(crate) fn run_with(
    args: Args,
    stdin_is_tty: bool,
    stdin_override: Option<&str>,
    prompter: &dyn Prompter,
) -> Result<RunStatus, Box<dyn Error>> {
    let settings = load_settings(args.config.as_deref())?;
    let generator = WordCloudGenerator::new(settings);
    let interactive = args.interactive || (stdin_is_tty && args.output.is_none());
    if interactive && !stdin_is_tty {
        return Err("interactive mode needs a terminal on stdin".into());
    }

    let mut fields = FormFields::default();
    match args.input.as_deref() {
        Some(input) => fields.text = read_text_input(input, stdin_override)?,
        None if !stdin_is_tty => fields.text = read_stdin_with(stdin_override)?,
        None => {}
    }
    apply_flags(&mut fields, &args);

    let dialogs = TerminalDialogs::new(prompter);
    let mut form = FormController::with_fields(fields, &dialogs, &generator);
    if interactive {
        run_form(prompter, &dialogs, &mut form)?;
        return Ok(RunStatus::Done);
    }

    match form.submit()? {
        SubmitOutcome::Saved(_) => Ok(RunStatus::Done),
        SubmitOutcome::Rejected(_) => Ok(RunStatus::Rejected),
    }
}

fn apply_flags(fields: &mut FormFields, args: &Args) {
    if let Some(output) = &args.output {
        fields.save_path = output.clone();
    }
    if let Some(width) = &args.width {
        fields.width = width.clone();
    }
    if let Some(height) = &args.height {
        fields.height = height.clone();
    }
    if let Some(max_words) = &args.max_words {
        fields.max_words = max_words.clone();
    }
    if args.background.is_some() {
        fields.background = args.background.clone();
    }
    if args.colormap.is_some() {
        fields.colormap = args.colormap.clone();
    }
    if let Some(stopwords) = &args.stopwords {
        fields.stopwords = stopwords.clone();
    }
}
