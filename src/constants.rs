//! Physical constants used by the saturation vapor pressure curves and their
//! inversions.
//!
//! These are the values from Romps (2021) and are deliberately not
//! configurable; the saturation curves, the dew point, and the frost point
//! must all be evaluated against the same thermodynamic reference state.

use metfor::Kelvin;

/// Triple-point temperature of water (K).
pub const TRIPLE_POINT_T: Kelvin = Kelvin(273.16);

/// Triple-point pressure of water (Pa).
pub const TRIPLE_POINT_P: f64 = 611.65;

/// Difference in specific internal energy between water vapor and liquid
/// water at the triple point (J/kg).
pub const VAPORIZATION_E: f64 = 2.374_0e6;

/// Difference in specific internal energy between liquid water and ice at
/// the triple point (J/kg).
pub const FUSION_E: f64 = 0.333_7e6;

/// Specific gas constant of dry air (J/kg/K).
pub const R_DRY_AIR: f64 = 287.04;

/// Specific gas constant of water vapor (J/kg/K).
pub const R_VAPOR: f64 = 461.0;

/// Isochoric specific heat of dry air (J/kg/K).
pub const CV_DRY_AIR: f64 = 719.0;

/// Isochoric specific heat of water vapor (J/kg/K).
pub const CV_VAPOR: f64 = 1418.0;

/// Isochoric specific heat of liquid water (J/kg/K).
pub const CV_LIQUID: f64 = 4119.0;

/// Isochoric specific heat of ice (J/kg/K).
pub const CV_ICE: f64 = 1861.0;

/// Isobaric specific heat of dry air (J/kg/K).
pub const CP_DRY_AIR: f64 = CV_DRY_AIR + R_DRY_AIR;

/// Isobaric specific heat of water vapor (J/kg/K).
pub const CP_VAPOR: f64 = CV_VAPOR + R_VAPOR;
