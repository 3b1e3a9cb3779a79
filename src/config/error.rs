use std::fmt;

#[derive(Debug)]
pub enum ConfigError {
    DateParse(chrono::ParseError),
    Io(std::io::Error),
    Json(serde_json::Error),
    UtcOffset,
    HourlyIncrement,
    Location(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::DateParse(e) => write!(f, "Failed to parse date: {}", e),
            ConfigError::Io(e) => write!(f, "I/O error: {}", e),
            ConfigError::Json(e) => write!(f, "Failed to parse JSON: {}", e),
            ConfigError::UtcOffset => {
                write!(f, "utc_offset_hours must be between -14 and 14")
            }
            ConfigError::HourlyIncrement => {
                write!(f, "hourly_increment should be one of 1, 2, 3, 4, 6, 8, 12")
            }
            ConfigError::Location(e) => write!(f, "Invalid location: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> ConfigError {
        ConfigError::Io(err)
    }
}

impl From<chrono::ParseError> for ConfigError {
    fn from(err: chrono::ParseError) -> ConfigError {
        ConfigError::DateParse(err)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> ConfigError {
        ConfigError::Json(err)
    }
}
