use chrono::{FixedOffset, NaiveDate};

use serde::Deserialize;
use serde::Deserializer;
use serde::de::Error;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::location::GeodeticLocation;
use crate::solar::Accuracy;

pub mod error;
pub use error::ConfigError;

/// Driver configuration: one calendar date, one observer location, one fixed
/// zone offset shared by every sample of the day.
#[derive(Debug, Clone)]
pub struct Config {
    date: NaiveDate,
    location: GeodeticLocation,
    utc_offset: FixedOffset,
    hourly_increment: u8,
    accuracy: Accuracy,
}

// This function deserializes a Config object from a deserializer, ensuring
// the date parses, the coordinates and UTC offset are in range, and the
// hourly increment divides the day evenly.
impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct ConfigHelper {
            date: String,
            latitude: f64,
            longitude: f64,
            utc_offset_hours: f64,
            hourly_increment: u8,
            accuracy: Option<Accuracy>,
        }

        // Deserialize into the helper struct
        let helper = ConfigHelper::deserialize(deserializer)?;

        // Parse date
        let date = NaiveDate::parse_from_str(&helper.date, "%Y-%m-%d")
            .map_err(|e| D::Error::custom(format!("Invalid date format: {}", e)))?;

        // Validate coordinates
        let location = GeodeticLocation::new(helper.latitude, helper.longitude)
            .map_err(|e| D::Error::custom(ConfigError::Location(e)))?;

        // Validate the zone offset
        if !(-14.0..=14.0).contains(&helper.utc_offset_hours) {
            return Err(D::Error::custom(ConfigError::UtcOffset));
        }
        let utc_offset = FixedOffset::east_opt((helper.utc_offset_hours * 3600.0) as i32)
            .ok_or_else(|| D::Error::custom(ConfigError::UtcOffset))?;

        // Validate hourly_increment
        let valid_increments = [1, 2, 3, 4, 6, 8, 12];
        if !valid_increments.contains(&helper.hourly_increment) {
            return Err(D::Error::custom(ConfigError::HourlyIncrement));
        }

        Ok(Config {
            date,
            location,
            utc_offset,
            hourly_increment: helper.hourly_increment,
            accuracy: helper.accuracy.unwrap_or_default(),
        })
    }
}

impl Config {
    pub fn new(
        date: NaiveDate,
        location: GeodeticLocation,
        utc_offset: FixedOffset,
        hourly_increment: u8,
        accuracy: Accuracy,
    ) -> Self {
        Self {
            date,
            location,
            utc_offset,
            hourly_increment,
            accuracy,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let config: Config = serde_json::from_reader(reader).map_err(ConfigError::from)?;

        Ok(config)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn location(&self) -> GeodeticLocation {
        self.location
    }

    pub fn utc_offset(&self) -> FixedOffset {
        self.utc_offset
    }

    pub fn hourly_increment(&self) -> u8 {
        self.hourly_increment
    }

    pub fn accuracy(&self) -> Accuracy {
        self.accuracy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("config.json");
        let mut file = File::create(&file_path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        (dir, file_path)
    }

    #[test]
    fn test_from_file() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2019-12-21",
        "latitude": 47.638165,
        "longitude": -122.389039,
        "utc_offset_hours": -8,
        "hourly_increment": 3,
        "accuracy": "refined"
    }
    "#,
        );

        let config = Config::from_file(file_path).unwrap();

        assert_eq!(
            config.date(),
            NaiveDate::from_ymd_opt(2019, 12, 21).expect("Invalid date")
        );
        assert_eq!(config.hourly_increment(), 3);
        assert_eq!(config.accuracy(), Accuracy::Refined);
        assert_eq!(config.utc_offset().local_minus_utc(), -8 * 3600);
        assert!((config.location().latitude - 47.638165).abs() < 1e-12);
    }

    #[test]
    fn test_accuracy_defaults_to_basic() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2019-12-21",
        "latitude": 47.638165,
        "longitude": -122.389039,
        "utc_offset_hours": -8,
        "hourly_increment": 1
    }
    "#,
        );

        let config = Config::from_file(file_path).unwrap();
        assert_eq!(config.accuracy(), Accuracy::Basic);
    }

    #[test]
    fn test_invalid_latitude_is_rejected() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2019-12-21",
        "latitude": 97.0,
        "longitude": 0.0,
        "utc_offset_hours": 0,
        "hourly_increment": 1
    }
    "#,
        );

        assert!(Config::from_file(file_path).is_err());
    }

    #[test]
    fn test_invalid_hourly_increment_is_rejected() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2019-12-21",
        "latitude": 0.0,
        "longitude": 0.0,
        "utc_offset_hours": 0,
        "hourly_increment": 5
    }
    "#,
        );

        assert!(Config::from_file(file_path).is_err());
    }

    #[test]
    fn test_out_of_range_utc_offset_is_rejected() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2019-12-21",
        "latitude": 0.0,
        "longitude": 0.0,
        "utc_offset_hours": 15,
        "hourly_increment": 1
    }
    "#,
        );

        assert!(Config::from_file(file_path).is_err());
    }

    #[test]
    fn test_half_hour_offset_is_accepted() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "2021-06-01",
        "latitude": 12.9716,
        "longitude": 77.5946,
        "utc_offset_hours": 5.5,
        "hourly_increment": 2
    }
    "#,
        );

        let config = Config::from_file(file_path).unwrap();
        assert_eq!(config.utc_offset().local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn test_invalid_date_is_rejected() {
        let (_dir, file_path) = write_config(
            r#"
    {
        "date": "21-12-2019",
        "latitude": 0.0,
        "longitude": 0.0,
        "utc_offset_hours": 0,
        "hourly_increment": 1
    }
    "#,
        );

        assert!(Config::from_file(file_path).is_err());
    }
}
