use std::error::Error;
use std::fs;
use wordcloud_core::Settings;

const BASE_CONFIG: &str = include_str!("../configurations/base.json");

/// Loads renderer settings: the bundled `base` profile or a JSON file.
pub(crate) fn load_settings(config_arg: Option<&str>) -> Result<Settings, Box<dyn Error>> {
    let settings = match config_arg.unwrap_or("base") {
        "base" | "default" => Settings::from_json(BASE_CONFIG)?,
        path => {
            let contents = fs::read_to_string(path)
                .map_err(|err| format!("reading config {path}: {err}"))?;
            Settings::from_json(&contents)?
        }
    };
    log::debug!("settings loaded: {settings:?}");
    Ok(settings)
}
