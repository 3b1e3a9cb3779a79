//! Solar position calculations: time and observer location in, azimuth and
//! elevation out.

pub mod config;
pub mod date_gen;
pub mod location;
pub mod solar;

pub use location::GeodeticLocation;
pub use solar::{Accuracy, Moment, SolarError, SolarPosition};
