/// Runtime options read from the canvas element's data attributes.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    /// URL of a JSON assembly manifest; `None` uses the built-in placeholder.
    pub model_url: Option<String>,
    pub log_level: log::Level,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            model_url: None,
            log_level: log::Level::Info,
        }
    }
}

impl PageConfig {
    pub fn from_attributes(model: Option<&str>, log_level: Option<&str>) -> Self {
        Self {
            model_url: model
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            log_level: parse_log_level(log_level),
        }
    }
}

/// Case-insensitive log level name; anything unrecognized is `Info`.
pub fn parse_log_level(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(log::Level::Info)
}
