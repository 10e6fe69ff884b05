use std::fs;
use std::io::{self, Read};

/// Reads the text for the cloud from `input`, where "-" means stdin.
pub(crate) fn read_text_input(input: &str, stdin_override: Option<&str>) -> io::Result<String> {
    if input == "-" {
        return read_stdin_with(stdin_override);
    }
    fs::read_to_string(input)
        .map_err(|err| io::Error::new(err.kind(), format!("reading {input}: {err}")))
}

pub(crate) fn read_stdin() -> Result<String, io::Error> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

pub(crate) fn read_stdin_with(stdin_override: Option<&str>) -> Result<String, io::Error> {
    if let Some(value) = stdin_override {
        return Ok(value.to_string());
    }
    read_stdin()
}
