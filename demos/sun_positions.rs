use chrono::{FixedOffset, NaiveDate};
use helios::GeodeticLocation;
use helios::solar::{Accuracy, Moment, SolarPosition};

fn main() {
    // Shilshole Bay, Seattle, on the December solstice
    let location = match GeodeticLocation::new(47.638165, -122.389039) {
        Ok(location) => location,
        Err(e) => {
            eprintln!("Invalid location: {}", e);
            return;
        }
    };

    let Some(offset) = FixedOffset::west_opt(8 * 3600) else {
        eprintln!("Invalid UTC offset");
        return;
    };
    let Some(date) = NaiveDate::from_ymd_opt(2019, 12, 21) else {
        eprintln!("Invalid date");
        return;
    };

    for hour in 0..24 {
        let Some(naive) = date.and_hms_opt(hour, 0, 0) else {
            continue;
        };

        let moment = match Moment::from_local(naive, Some(offset)) {
            Ok(moment) => moment,
            Err(e) => {
                eprintln!("Failed to build moment: {}", e);
                return;
            }
        };

        match SolarPosition::calculate(moment, location, Accuracy::Basic) {
            Ok(position) => println!(
                "{}  Azimuth: {:7.2}°, Elevation: {:7.2}°, Declination: {:6.2}°",
                moment.datetime().format("%Y-%m-%d %H:%M %:z"),
                position.azimuth_deg,
                position.elevation_deg,
                position.declination_deg
            ),
            Err(e) => eprintln!("Calculation failed: {}", e),
        }
    }
}
