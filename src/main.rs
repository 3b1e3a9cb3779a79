use helios::config::Config;
use helios::date_gen::MomentGenerator;
use helios::solar::SolarPosition;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "./data/config/solar_config.json".to_string());

    let config = Config::from_file(&config_path)?;

    println!(
        "Solar positions for {} at ({:.6}, {:.6})",
        config.date(),
        config.location().latitude,
        config.location().longitude
    );

    let generator = MomentGenerator::new(config.clone());

    let mut positions = Vec::new();
    for moment in generator.generate_moment_series() {
        let position = SolarPosition::calculate(moment, config.location(), config.accuracy())?;
        positions.push((moment, position));
    }

    for (moment, position) in &positions {
        println!(
            "{}  azimuth {:7.2}°  elevation {:7.2}°{}",
            moment.datetime().format("%Y-%m-%d %H:%M %:z"),
            position.azimuth_deg,
            position.elevation_deg,
            if position.is_sun_up() {
                ""
            } else {
                "  (below horizon)"
            }
        );
    }

    if let Some((moment, position)) = positions
        .iter()
        .max_by(|a, b| a.1.elevation_deg.total_cmp(&b.1.elevation_deg))
    {
        println!(
            "Highest sample: {:.2}° elevation at {} local time",
            position.elevation_deg,
            moment.datetime().format("%H:%M")
        );
    }

    Ok(())
}
