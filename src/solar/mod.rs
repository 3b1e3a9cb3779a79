//! Solar position calculation module
//!
//! Computes the apparent position of the sun (azimuth and elevation) from a
//! zoned moment and an observer location, following the Astronomical
//! Almanac's method as described by Michalsky, with an optional higher-order
//! (Meeus) refinement of the ecliptic stage.
//!
//! The transform chain is Julian Day -> ecliptic -> equatorial -> horizontal
//! coordinates. Internal angle storage is radians; degrees appear only in
//! the published formula constants and at the public input/output boundary.

use serde::Deserialize;
use std::f64::consts::PI;

pub mod error;
pub mod time;

pub use error::SolarError;
pub use time::Moment;

use crate::location::GeodeticLocation;

/// Refinement level of the ecliptic-position stage.
///
/// Both levels share the epoch conversion, the equatorial transform and the
/// horizontal quadrant correction; they differ only in the series used for
/// the sun's ecliptic longitude and the obliquity. They agree within a few
/// arcminutes over the supported date range.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum Accuracy {
    /// Low-order Michalsky form, linear in days since J2000.0
    #[default]
    #[serde(rename(deserialize = "basic"))]
    Basic,
    /// Higher-order Meeus form using the century fraction T = d/36525
    #[serde(rename(deserialize = "refined"))]
    Refined,
}

/// Sun position along the ecliptic. The ecliptic latitude is treated as
/// exactly zero (the sun is taken to lie in the ecliptic plane).
#[derive(Debug, Clone, Copy)]
pub struct EclipticPosition {
    pub mean_longitude_deg: f64,
    pub mean_anomaly_deg: f64,
    /// Ecliptic longitude of the sun, radians
    pub ecliptic_longitude: f64,
    /// Obliquity of the ecliptic, radians
    pub obliquity: f64,
}

/// Sun position in equatorial coordinates.
#[derive(Debug, Clone, Copy)]
pub struct EquatorialPosition {
    /// Right ascension, radians, normalized to [0, 2*pi)
    pub right_ascension: f64,
    /// Declination, radians, in [-pi/2, pi/2]
    pub declination: f64,
}

/// Result struct containing the horizontal coordinates together with the
/// intermediate quantities of the calculation, so callers can inspect the
/// chain without the core ever printing anything.
#[derive(Debug, Clone)]
pub struct SolarPosition {
    /// Azimuth in degrees, [0, 360), measured clockwise from north
    pub azimuth_deg: f64,
    /// Elevation above the horizon in degrees, [-90, 90]
    pub elevation_deg: f64,
    pub declination_deg: f64,
    pub right_ascension_deg: f64,
    pub hour_angle_deg: f64,
    pub mean_longitude_deg: f64,
    pub mean_anomaly_deg: f64,
    pub ecliptic_longitude_deg: f64,
}

impl SolarPosition {
    /// Calculate the solar position for a zoned moment and an observer
    /// location.
    ///
    /// # Arguments
    /// * `moment` - zoned timestamp of the observation
    /// * `location` - observer latitude/longitude, east-positive longitude
    /// * `accuracy` - refinement level of the ecliptic stage
    ///
    /// # Errors
    /// Returns `SolarError::Domain` if a trigonometric argument falls
    /// outside its domain by more than round-off (round-off itself is
    /// clamped).
    pub fn calculate(
        moment: Moment,
        location: GeodeticLocation,
        accuracy: Accuracy,
    ) -> Result<Self, SolarError> {
        let d = moment.j2000_offset();

        let ecliptic = ecliptic_position(d, accuracy);
        let equatorial = equatorial_position(&ecliptic);

        let sidereal = local_sidereal_angle(d, moment.utc_decimal_hour(), location.longitude);
        let hour_angle = hour_angle(sidereal, equatorial.right_ascension);

        let latitude = location.latitude.to_radians();
        let (azimuth, elevation) = horizontal_position(&equatorial, hour_angle, latitude)?;

        Ok(SolarPosition {
            azimuth_deg: normalize_360(azimuth.to_degrees()),
            elevation_deg: elevation.to_degrees(),
            declination_deg: equatorial.declination.to_degrees(),
            right_ascension_deg: equatorial.right_ascension.to_degrees(),
            hour_angle_deg: hour_angle.to_degrees(),
            mean_longitude_deg: ecliptic.mean_longitude_deg,
            mean_anomaly_deg: ecliptic.mean_anomaly_deg,
            ecliptic_longitude_deg: ecliptic.ecliptic_longitude.to_degrees(),
        })
    }

    /// Convenience method that returns only the azimuth and elevation angles
    pub fn azimuth_elevation(&self) -> (f64, f64) {
        (self.azimuth_deg, self.elevation_deg)
    }

    /// Convenience function returning only (azimuth, elevation) at the
    /// default accuracy
    pub fn simple(moment: Moment, location: GeodeticLocation) -> Result<(f64, f64), SolarError> {
        let position = Self::calculate(moment, location, Accuracy::Basic)?;
        Ok(position.azimuth_elevation())
    }

    pub fn is_sun_up(&self) -> bool {
        self.elevation_deg > 0.0
    }
}

/// Maps any angle in degrees to [0, 360). The explicit add-360 step covers
/// the negative result Rust's `%` gives for negative inputs.
pub fn normalize_360(degrees: f64) -> f64 {
    let normalized = degrees % 360.0;
    if normalized < 0.0 { normalized + 360.0 } else { normalized }
}

/// Maps an hour-angle-like quantity to [0, 24).
fn normalize_24(hours: f64) -> f64 {
    let normalized = hours % 24.0;
    if normalized < 0.0 { normalized + 24.0 } else { normalized }
}

/// Ecliptic position of the sun `d` days (fractional) after J2000.0.
fn ecliptic_position(d: f64, accuracy: Accuracy) -> EclipticPosition {
    match accuracy {
        Accuracy::Basic => {
            let mean_longitude = normalize_360(280.460 + 0.985_647_4 * d);
            let mean_anomaly = normalize_360(357.528 + 0.985_600_3 * d);

            let g = mean_anomaly.to_radians();
            let ecliptic_longitude =
                normalize_360(mean_longitude + 1.915 * g.sin() + 0.020 * (2.0 * g).sin())
                    .to_radians();

            let obliquity = (23.439 - 0.000_000_4 * d).to_radians();

            EclipticPosition {
                mean_longitude_deg: mean_longitude,
                mean_anomaly_deg: mean_anomaly,
                ecliptic_longitude,
                obliquity,
            }
        }
        Accuracy::Refined => {
            let t = d / 36_525.0;

            let mean_anomaly = normalize_360(
                357.529_10 + 35_999.050_30 * t - 0.000_155_9 * t * t - 0.000_000_48 * t * t * t,
            );
            let mean_longitude =
                normalize_360(280.466_45 + 36_000.769_83 * t + 0.000_303_2 * t * t);

            // Equation of the solar center; the true ecliptic longitude is
            // the mean longitude plus the center term.
            let m = mean_anomaly.to_radians();
            let center = (1.914_6 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
                + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
                + 0.000_29 * (3.0 * m).sin();

            let ecliptic_longitude = normalize_360(mean_longitude + center).to_radians();

            // Obliquity series in arcseconds, 23 deg 26' 21.448" at J2000.0
            let drift_arcsec = 46.815_0 * t + 0.000_59 * t * t - 0.001_813 * t * t * t;
            let obliquity =
                (23.0 + 26.0 / 60.0 + 21.448 / 3600.0 - drift_arcsec / 3600.0).to_radians();

            EclipticPosition {
                mean_longitude_deg: mean_longitude,
                mean_anomaly_deg: mean_anomaly,
                ecliptic_longitude,
                obliquity,
            }
        }
    }
}

/// Equatorial coordinates from the ecliptic position. Shared by both
/// accuracy levels.
fn equatorial_position(ecliptic: &EclipticPosition) -> EquatorialPosition {
    let lambda = ecliptic.ecliptic_longitude;
    let epsilon = ecliptic.obliquity;

    // Two-argument arctangent keeps the quadrant correct without any manual
    // sign patching.
    let mut right_ascension = (epsilon.cos() * lambda.sin()).atan2(lambda.cos());
    if right_ascension < 0.0 {
        right_ascension += 2.0 * PI;
    }

    let declination = (epsilon.sin() * lambda.sin()).asin();

    EquatorialPosition {
        right_ascension,
        declination,
    }
}

/// Local mean sidereal time as an angle in radians. East-positive longitude
/// adds sidereal hours; the 24-hour wrap happens before the conversion to an
/// angle to avoid a discontinuity.
fn local_sidereal_angle(d: f64, utc_decimal_hour: f64, longitude_deg: f64) -> f64 {
    let greenwich_hours = normalize_24(6.697_375 + 0.065_709_824_2 * d + utc_decimal_hour);
    let local_hours = normalize_24(greenwich_hours + longitude_deg / 15.0);

    (local_hours * 15.0).to_radians()
}

/// Hour angle of the sun, folded into (-pi, pi]. With both inputs in
/// [0, 2*pi) a single correction step is enough.
fn hour_angle(local_sidereal: f64, right_ascension: f64) -> f64 {
    let mut hour_angle = local_sidereal - right_ascension;

    if hour_angle < -PI {
        hour_angle += 2.0 * PI;
    }
    if hour_angle > PI {
        hour_angle -= 2.0 * PI;
    }

    hour_angle
}

/// Treat elevations this close to +/-90 degrees as zenith/nadir, where the
/// azimuth is undefined.
const ZENITH_COS_EPSILON: f64 = 1e-6;

/// Horizontal coordinates (azimuth, elevation) in radians from the
/// equatorial position, hour angle and observer latitude (radians).
fn horizontal_position(
    equatorial: &EquatorialPosition,
    hour_angle: f64,
    latitude: f64,
) -> Result<(f64, f64), SolarError> {
    let declination = equatorial.declination;

    let elevation = clamped_asin(
        declination.sin() * latitude.sin()
            + declination.cos() * latitude.cos() * hour_angle.cos(),
        "elevation",
    )?;

    // Sun at zenith or nadir: the azimuth division is undefined, return the
    // 0.0 sentinel instead of dividing by zero.
    if elevation.cos().abs() < ZENITH_COS_EPSILON {
        return Ok((0.0, elevation));
    }

    let azimuth = clamped_asin(
        -declination.cos() * hour_angle.sin() / elevation.cos(),
        "azimuth",
    )?;

    // asin alone is ambiguous over a full circle; the declination test picks
    // the quadrant.
    let azimuth = if declination.sin() - elevation.sin() * latitude.sin() >= 0.0 {
        if azimuth.sin() < 0.0 {
            azimuth + 2.0 * PI
        } else {
            azimuth
        }
    } else {
        PI - azimuth
    };

    Ok((azimuth, elevation))
}

/// Tolerance for asin arguments pushed past +/-1 by floating round-off.
const ASIN_ROUNDOFF: f64 = 1e-6;

/// asin that clamps round-off excursions past +/-1 and reports anything
/// larger as a domain error instead of letting a NaN propagate.
fn clamped_asin(value: f64, context: &'static str) -> Result<f64, SolarError> {
    if value.abs() <= 1.0 + ASIN_ROUNDOFF {
        Ok(value.clamp(-1.0, 1.0).asin())
    } else {
        Err(SolarError::Domain { value, context })
    }
}
