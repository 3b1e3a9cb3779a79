use chrono::{FixedOffset, NaiveDate};
use helios::GeodeticLocation;
use helios::solar::{Accuracy, Moment, SolarPosition};

// Prints the divergence between the low-order and higher-order ecliptic
// series over one day; expect arcseconds to arcminutes.
fn main() {
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

    println!("{:<20} {:>10} {:>10} {:>12}", "local time", "basic el", "refined el", "diff (arcmin)");

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

        let basic = SolarPosition::calculate(moment, location, Accuracy::Basic);
        let refined = SolarPosition::calculate(moment, location, Accuracy::Refined);

        match (basic, refined) {
            (Ok(basic), Ok(refined)) => {
                let diff_arcmin = (basic.elevation_deg - refined.elevation_deg).abs() * 60.0;
                println!(
                    "{:<20} {:>10.4} {:>10.4} {:>12.3}",
                    moment.datetime().format("%Y-%m-%d %H:%M"),
                    basic.elevation_deg,
                    refined.elevation_deg,
                    diff_arcmin
                );
            }
            (Err(e), _) | (_, Err(e)) => eprintln!("Calculation failed: {}", e),
        }
    }
}
