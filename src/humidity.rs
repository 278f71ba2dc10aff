//! Relative humidity inputs and their normalization into a vapor pressure.

use crate::{
    constants::TRIPLE_POINT_T,
    error::{DewPointError, Result},
    vapor_pressure::{validate_temperature, Phase},
};
use metfor::{HectoPascal, Kelvin, Quantity};
use optional::Optioned;

/// A single relative humidity value tagged with its reference phase.
///
/// The solver requires exactly one interpretation, and the enum makes
/// supplying more or fewer than one impossible at the type level. Callers
/// holding the classic trio of maybe-missing fields can go through
/// [`RelativeHumidity::from_optional`] instead.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RelativeHumidity {
    /// Interpreted with respect to liquid water above the triple point and
    /// with respect to ice at or below it.
    Ambient(f64),
    /// With respect to liquid water at any temperature.
    OverLiquid(f64),
    /// With respect to ice at any temperature.
    OverIce(f64),
}

impl RelativeHumidity {
    /// Build from the classic trio of maybe-missing humidity fields.
    ///
    /// Exactly one of `rh`, `rhl`, and `rhs` must be present, anything else
    /// fails with `InvalidHumiditySpecification`.
    pub fn from_optional(
        rh: Optioned<f64>,
        rhl: Optioned<f64>,
        rhs: Optioned<f64>,
    ) -> Result<Self> {
        let supplied = [rh, rhl, rhs].iter().filter(|v| v.is_some()).count();
        if supplied != 1 {
            return Err(DewPointError::InvalidHumiditySpecification);
        }

        if rh.is_some() {
            Ok(RelativeHumidity::Ambient(rh.unpack()))
        } else if rhl.is_some() {
            Ok(RelativeHumidity::OverLiquid(rhl.unpack()))
        } else {
            Ok(RelativeHumidity::OverIce(rhs.unpack()))
        }
    }

    /// The bare fraction, whatever the reference phase.
    pub fn fraction(self) -> f64 {
        match self {
            RelativeHumidity::Ambient(x)
            | RelativeHumidity::OverLiquid(x)
            | RelativeHumidity::OverIce(x) => x,
        }
    }
}

/// A humidity normalized against both saturation curves.
///
/// Whichever interpretation was supplied, the other two fractions and the
/// vapor pressure are derived from it, so downstream inversions can pick
/// whatever reference they need.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Humidity {
    /// Relative humidity in the phase-ambiguous sense, liquid-referenced
    /// above the triple point and ice-referenced at or below it.
    pub ambient: f64,
    /// Relative humidity with respect to liquid water.
    pub over_liquid: f64,
    /// Relative humidity with respect to ice.
    pub over_ice: f64,
    /// Partial pressure of water vapor.
    pub vapor_pressure: HectoPascal,
}

impl Humidity {
    /// Normalize a tagged humidity at the given temperature.
    ///
    /// Fails with `InvalidInput` when the temperature is not finite and
    /// positive or the fraction is outside `[0, 1]`.
    pub fn new(t: Kelvin, rh: RelativeHumidity) -> Result<Self> {
        validate_temperature(t)?;

        let fraction = rh.fraction();
        if !fraction.is_finite() || fraction < 0.0 || fraction > 1.0 {
            return Err(DewPointError::InvalidInput(
                "relative humidity must be a fraction in [0, 1]",
            ));
        }

        let pv_star_liquid = Phase::Liquid.saturation_vapor_pressure(t.unpack());
        let pv_star_ice = Phase::Ice.saturation_vapor_pressure(t.unpack());
        let above_triple_point = t > TRIPLE_POINT_T;

        // Pa
        let pv = match rh {
            RelativeHumidity::Ambient(x) => {
                if above_triple_point {
                    x * pv_star_liquid
                } else {
                    x * pv_star_ice
                }
            }
            RelativeHumidity::OverLiquid(x) => x * pv_star_liquid,
            RelativeHumidity::OverIce(x) => x * pv_star_ice,
        };

        let over_liquid = pv / pv_star_liquid;
        let over_ice = pv / pv_star_ice;
        let ambient = if above_triple_point {
            over_liquid
        } else {
            over_ice
        };

        Ok(Humidity {
            ambient,
            over_liquid,
            over_ice,
            vapor_pressure: HectoPascal(pv / 100.0),
        })
    }
}
