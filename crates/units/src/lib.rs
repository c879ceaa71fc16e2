pub mod angular_velocity;
pub mod length;
pub mod mass;
pub mod time;

#[cfg(test)]
mod time_test;

pub use angular_velocity::AngularVelocity;
pub use length::{AU_TO_M, Length};
pub use mass::{EARTH_MASS_KG, Mass, SOLAR_MASS_KG};
pub use time::{SECONDS_PER_DAY, SECONDS_PER_YEAR, Time};
