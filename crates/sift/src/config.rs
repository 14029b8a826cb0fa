use serde::Deserialize;

/// Settings for shaping queries.
///
/// Deserializes with per-field defaults, so an application config file only
/// needs to list what it overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// chrono format used to parse `Date` filter values
    pub date_format: String,

    /// Page size used when a request asks for a page without a size
    pub default_page_size: u32,

    /// Escape character of generated LIKE patterns
    pub escape: char,
}

impl Config {
    /// Create a new Config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the date format. chrono parses `%m` and `%d` without requiring
    /// zero padding.
    pub fn date_format(mut self, date_format: impl Into<String>) -> Self {
        self.date_format = date_format.into();
        self
    }

    /// Set the default page size
    pub fn default_page_size(mut self, default_page_size: u32) -> Self {
        self.default_page_size = default_page_size;
        self
    }

    /// Set the LIKE escape character
    pub fn escape(mut self, escape: char) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            default_page_size: 10,
            escape: '\\',
        }
    }
}
