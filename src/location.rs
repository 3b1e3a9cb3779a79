use serde::Deserialize;

/// Observer position on the Earth's surface, east-positive longitude.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GeodeticLocation {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeodeticLocation {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, String> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err("Latitude must be between -90 and 90".to_string());
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err("Longitude must be between -180 and 180".to_string());
        }

        Ok(GeodeticLocation {
            latitude,
            longitude,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::location::GeodeticLocation;

    #[test]
    fn test_location_coords_are_within_ranges() {
        // Test valid coordinates
        let valid_location = GeodeticLocation::new(47.638165, -122.389039);
        assert!(valid_location.is_ok());

        // Poles and the antimeridian are inclusive bounds
        assert!(GeodeticLocation::new(90.0, 180.0).is_ok());
        assert!(GeodeticLocation::new(-90.0, -180.0).is_ok());

        // Test latitude out of range
        assert!(GeodeticLocation::new(-100.0, 0.0).is_err());
        assert!(GeodeticLocation::new(100.0, 0.0).is_err());

        // Test longitude out of range
        assert!(GeodeticLocation::new(0.0, -200.0).is_err());
        assert!(GeodeticLocation::new(0.0, 200.0).is_err());

        // NaN never satisfies a range check
        assert!(GeodeticLocation::new(f64::NAN, 0.0).is_err());
        assert!(GeodeticLocation::new(0.0, f64::NAN).is_err());
    }
}
