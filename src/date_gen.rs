use crate::config::Config;
use crate::solar::Moment;

pub struct MomentGenerator {
    config: Config,
}

impl MomentGenerator {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Produces the zoned sample moments for the configured calendar date,
    /// one per `hourly_increment` hours, all sharing the configured offset.
    pub fn generate_moment_series(&self) -> Vec<Moment> {
        let increment = self.config.hourly_increment() as u32;
        if increment == 0 {
            eprintln!("Error: hourly_increment must be greater than 0 to avoid division by zero.");
            return Vec::new();
        }

        let steps = 24 / increment;

        let mut moments = Vec::with_capacity(steps as usize);

        for step in 0..steps {
            let hour = step * increment;

            // hour stays below 24, so and_hms_opt always succeeds
            let Some(naive) = self.config.date().and_hms_opt(hour, 0, 0) else {
                continue;
            };

            if let Ok(moment) = Moment::from_local(naive, Some(self.config.utc_offset())) {
                moments.push(moment);
            }
        }

        moments
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::location::GeodeticLocation;
    use crate::solar::Accuracy;
    use chrono::{FixedOffset, NaiveDate, Timelike};

    fn create_test_config() -> Config {
        Config::new(
            NaiveDate::from_ymd_opt(2019, 12, 21).unwrap(),
            GeodeticLocation::new(47.638165, -122.389039).unwrap(),
            FixedOffset::west_opt(8 * 3600).unwrap(),
            6, // Every 6 hours
            Accuracy::Basic,
        )
    }

    #[test]
    fn test_generate_moment_series() {
        let config = create_test_config();
        let generator = MomentGenerator::new(config);
        let series = generator.generate_moment_series();

        // 4 time points per day (every 6 hours)
        assert_eq!(series.len(), 4);

        // Check local wall-clock hours
        assert_eq!(series[0].datetime().hour(), 0);
        assert_eq!(series[1].datetime().hour(), 6);
        assert_eq!(series[2].datetime().hour(), 12);
        assert_eq!(series[3].datetime().hour(), 18);

        // Every sample carries the configured offset
        for moment in &series {
            assert_eq!(moment.datetime().offset().local_minus_utc(), -8 * 3600);
        }
    }

    #[test]
    fn test_zero_increment_yields_empty_series() {
        // Config::new performs no validation, so a zero increment can reach
        // the generator through the library API; it must not divide by zero
        let config = Config::new(
            NaiveDate::from_ymd_opt(2019, 12, 21).unwrap(),
            GeodeticLocation::new(47.638165, -122.389039).unwrap(),
            FixedOffset::west_opt(8 * 3600).unwrap(),
            0,
            Accuracy::Basic,
        );
        let generator = MomentGenerator::new(config);

        assert!(generator.generate_moment_series().is_empty());
    }

    #[test]
    fn test_series_is_in_universal_time_under_the_hood() {
        let config = create_test_config();
        let generator = MomentGenerator::new(config);
        let series = generator.generate_moment_series();

        // Local midnight at UTC-8 is 08:00 UT
        assert!((series[0].utc_decimal_hour() - 8.0).abs() < 1e-12);
    }
}
