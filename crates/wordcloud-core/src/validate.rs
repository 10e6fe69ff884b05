use std::ops::RangeInclusive;

pub const WIDTH_RANGE: RangeInclusive<u32> = 400..=3000;
pub const HEIGHT_RANGE: RangeInclusive<u32> = 200..=1500;
pub const MAX_WORDS_RANGE: RangeInclusive<u32> = 200..=400;

/// A user-input error detected before any generation or file write.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub fn validate_text(raw: &str) -> Result<String, ValidationError> {
    if raw.trim().is_empty() {
        return Err(ValidationError::new("Please enter some text"));
    }
    Ok(raw.to_string())
}

pub fn validate_width(raw: &str) -> Result<u32, ValidationError> {
    validate_bounded("Width", raw, WIDTH_RANGE)
}

pub fn validate_height(raw: &str) -> Result<u32, ValidationError> {
    validate_bounded("Height", raw, HEIGHT_RANGE)
}

pub fn validate_max_words(raw: &str) -> Result<u32, ValidationError> {
    validate_bounded("Max words", raw, MAX_WORDS_RANGE)
}

/// Checks that a save path is present and names a file, not just an extension.
pub fn validate_file_path(raw: &str) -> Result<String, ValidationError> {
    if raw.is_empty() {
        return Err(ValidationError::new(
            "Please choose where to save the image",
        ));
    }
    if file_stem(raw).trim().is_empty() {
        return Err(ValidationError::new("File name cannot be blank"));
    }
    Ok(raw.to_string())
}

fn validate_bounded(
    label: &str,
    raw: &str,
    range: RangeInclusive<u32>,
) -> Result<u32, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::new(format!("{label} is required")));
    }
    let value = trimmed
        .parse::<i64>()
        .map_err(|_| ValidationError::new(format!("{label} must be a whole number")))?;
    if value <= 0 {
        return Err(ValidationError::new(format!(
            "{label} must be a positive number"
        )));
    }
    let out_of_range = || {
        ValidationError::new(format!(
            "{label} must be between {} and {} (got {value})",
            range.start(),
            range.end()
        ))
    };
    let value = u32::try_from(value).map_err(|_| out_of_range())?;
    if !range.contains(&value) {
        return Err(out_of_range());
    }
    Ok(value)
}

// Leading dots belong to the name, so ".png" has no extension.
pub(crate) fn file_stem(raw: &str) -> &str {
    let name = raw.rsplit(['/', '\\']).next().unwrap_or(raw);
    let leading = name.len() - name.trim_start_matches('.').len();
    match name[leading..].rfind('.') {
        Some(idx) => &name[..leading + idx],
        None => name,
    }
}
