//! Saturation vapor pressure over liquid water and over ice.
//!
//! Both curves are the Rankine-Kirchhoff closed form from Romps, D. M., 2021:
//! "Accurate expressions for the dewpoint and frost point derived from the
//! Rankine-Kirchhoff approximations", J. Atmos. Sci., 78, 2113-2116: a
//! power-law prefactor in `T/Ttrip` times an exponential in the latent energy
//! referenced to the triple point. The two phases share the same shape and
//! differ only in their latent energy and condensate heat capacity, so one
//! parameterized routine serves both.

use crate::{
    constants::{
        CP_VAPOR, CV_ICE, CV_LIQUID, CV_VAPOR, FUSION_E, R_VAPOR, TRIPLE_POINT_P, TRIPLE_POINT_T,
        VAPORIZATION_E,
    },
    error::{DewPointError, Result},
};
use metfor::{HectoPascal, Kelvin, Quantity};

/// A condensed phase of water, carrying the coefficients that distinguish its
/// saturation curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Liquid,
    Ice,
}

impl Phase {
    // Difference in specific internal energy between vapor and this
    // condensate at the triple point (J/kg).
    fn latent_energy(self) -> f64 {
        match self {
            Phase::Liquid => VAPORIZATION_E,
            Phase::Ice => VAPORIZATION_E + FUSION_E,
        }
    }

    // Isochoric specific heat of the condensate (J/kg/K).
    fn condensate_cv(self) -> f64 {
        match self {
            Phase::Liquid => CV_LIQUID,
            Phase::Ice => CV_ICE,
        }
    }

    /// Exponent of the power-law prefactor, `(cpv - cvx) / Rv`.
    pub(crate) fn power_law_exponent(self) -> f64 {
        (CP_VAPOR - self.condensate_cv()) / R_VAPOR
    }

    /// Latent energy referenced to absolute zero,
    /// `E0 - (cvv - cvx) * Ttrip` (J/kg).
    pub(crate) fn latent_energy_at_zero(self) -> f64 {
        self.latent_energy() - (CV_VAPOR - self.condensate_cv()) * TRIPLE_POINT_T.unpack()
    }

    /// Saturation vapor pressure over this phase in Pa, temperature in K.
    ///
    /// The caller is responsible for validating the temperature.
    pub(crate) fn saturation_vapor_pressure(self, t: f64) -> f64 {
        let t_trip = TRIPLE_POINT_T.unpack();

        TRIPLE_POINT_P
            * (t / t_trip).powf(self.power_law_exponent())
            * (self.latent_energy_at_zero() / R_VAPOR * (1.0 / t_trip - 1.0 / t)).exp()
    }
}

/// The saturation vapor pressure over liquid water.
#[inline]
pub fn saturation_vapor_pressure_liquid_water(t: Kelvin) -> Result<HectoPascal> {
    validate_temperature(t)?;
    Ok(HectoPascal(
        Phase::Liquid.saturation_vapor_pressure(t.unpack()) / 100.0,
    ))
}

/// The saturation vapor pressure over ice.
#[inline]
pub fn saturation_vapor_pressure_ice(t: Kelvin) -> Result<HectoPascal> {
    validate_temperature(t)?;
    Ok(HectoPascal(
        Phase::Ice.saturation_vapor_pressure(t.unpack()) / 100.0,
    ))
}

pub(crate) fn validate_temperature(t: Kelvin) -> Result<()> {
    let Kelvin(t) = t;

    if t.is_finite() && t > 0.0 {
        Ok(())
    } else {
        Err(DewPointError::InvalidInput(
            "temperature must be finite and positive",
        ))
    }
}
