#![warn(missing_docs)]
//! Types and functions for computing dew points and frost points from the
//! Rankine-Kirchhoff approximations.
//!
//! Given an ambient temperature and exactly one relative humidity
//! interpretation, the saturation vapor pressure curves over liquid water and
//! over ice are inverted in closed form through the Lambert-W function,
//! yielding the dew point, the frost point, or the maximum of both. The
//! formulas follow:
//!
//! > Romps, D. M., 2021: Accurate expressions for the dewpoint and frost
//! > point derived from the Rankine-Kirchhoff approximations. *J. Atmos.
//! > Sci.*, **78**, 2113-2116.
//!
//! Every function here is pure: no state, no I/O, safe to call from any
//! number of threads.
//!
//! # Examples
//!
//! ```
//! use dewpoint_analysis::{dew_point, RelativeHumidity};
//! use metfor::{HectoPascal, Kelvin};
//!
//! // 15 C air at 50% relative humidity.
//! let Kelvin(td) = dew_point(
//!     Kelvin(288.15),
//!     HectoPascal(1013.25),
//!     RelativeHumidity::Ambient(0.5),
//! )
//! .unwrap();
//!
//! assert!(td > 277.8 && td < 277.9);
//! ```

//
// API
//
pub use crate::{
    dew_point::{dew_point, frost_point, saturation_point, SaturationPoint},
    error::{DewPointError, Result},
    humidity::{Humidity, RelativeHumidity},
    vapor_pressure::{saturation_vapor_pressure_ice, saturation_vapor_pressure_liquid_water},
};

pub mod constants;

mod dew_point;
mod error;
mod humidity;
mod lambert_w;
mod vapor_pressure;
