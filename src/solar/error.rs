use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SolarError {
    /// The input moment carries no time-zone offset, so it cannot be
    /// converted to universal time.
    MissingTimeZone,
    /// A trigonometric argument fell outside its numeric domain by more than
    /// floating-point round-off.
    Domain { value: f64, context: &'static str },
}

impl fmt::Display for SolarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolarError::MissingTimeZone => {
                write!(
                    f,
                    "moment is missing time zone information; cannot convert to universal time"
                )
            }
            SolarError::Domain { value, context } => {
                write!(f, "value {} is outside the numeric domain for {}", value, context)
            }
        }
    }
}

impl std::error::Error for SolarError {}
