//! Time and epoch conversion for the solar position calculation.
//!
//! Every downstream formula is tabulated against universal time, so the
//! conversions here always go through the UTC view of the input moment.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, TimeZone, Timelike};

use crate::solar::error::SolarError;

/// Julian Day of the J2000.0 reference epoch (2000-01-01 12:00 UT).
pub const JD_J2000: f64 = 2_451_545.0;

/// Days between the Julian Day origin and 0001-01-01 of the proleptic
/// Gregorian calendar (the day count chrono's `num_days_from_ce` starts at).
const JD_RATA_DIE_OFFSET: f64 = 1_721_424.5;

/// Converts a calendar datetime to a Julian Day value, including the
/// fractional day from the time of day. Seconds precision only; sub-second
/// fractions are not modeled.
pub fn julian_day(datetime: NaiveDateTime) -> f64 {
    let whole_days = datetime.num_days_from_ce() as f64;
    let second_of_day =
        (datetime.hour() * 3600 + datetime.minute() * 60 + datetime.second()) as f64;

    whole_days + second_of_day / 86_400.0 + JD_RATA_DIE_OFFSET
}

/// A calendar timestamp with a mandatory time-zone offset.
///
/// A moment without zone information cannot be unambiguously mapped to
/// universal time, so construction rejects it before any arithmetic runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment(DateTime<FixedOffset>);

impl Moment {
    /// Builds a moment from a local civil datetime and its UTC offset.
    ///
    /// Fails with `SolarError::MissingTimeZone` when no offset is supplied.
    pub fn from_local(
        datetime: NaiveDateTime,
        offset: Option<FixedOffset>,
    ) -> Result<Self, SolarError> {
        let offset = offset.ok_or(SolarError::MissingTimeZone)?;
        let utc = datetime - offset;

        Ok(Moment(DateTime::from_naive_utc_and_offset(utc, offset)))
    }

    pub fn datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Julian Day of the moment converted to universal time.
    pub fn julian_day_utc(&self) -> f64 {
        julian_day(self.0.naive_utc())
    }

    /// Day count (with fractional part) since the J2000.0 epoch, in
    /// universal time.
    pub fn j2000_offset(&self) -> f64 {
        self.julian_day_utc() - JD_J2000
    }

    /// Decimal hour of day of the UTC view of the moment, needed standalone
    /// for the sidereal time formula.
    pub fn utc_decimal_hour(&self) -> f64 {
        let utc = self.0.naive_utc();

        utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Moment {
    fn from(datetime: DateTime<Tz>) -> Self {
        Moment(datetime.fixed_offset())
    }
}
