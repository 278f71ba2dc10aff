//! Dew point and frost point by closed-form inversion of the saturation
//! curves.

use crate::{
    constants::R_VAPOR,
    error::{DewPointError, Result},
    humidity::{Humidity, RelativeHumidity},
    lambert_w::{lambert_w, lambert_w0_of_ln},
    vapor_pressure::Phase,
};
use metfor::{HectoPascal, Kelvin};
use num_complex::Complex64;
use strum_macros::EnumIter;

/// Which saturation point to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum SaturationPoint {
    /// The dew point, from the liquid water curve.
    DewPoint,
    /// The frost point, from the ice curve.
    FrostPoint,
    /// The maximum of the dew point and the frost point.
    MaxDewFrost,
}

impl SaturationPoint {
    /// Translate the classic pair of request flags.
    ///
    /// The flags are mutually exclusive. Setting both fails with
    /// `InvalidOutputModeSpecification` rather than letting one of them win.
    pub fn from_flags(frost_point: bool, max_dew_frost: bool) -> Result<Self> {
        match (frost_point, max_dew_frost) {
            (true, true) => Err(DewPointError::InvalidOutputModeSpecification),
            (true, false) => Ok(SaturationPoint::FrostPoint),
            (false, true) => Ok(SaturationPoint::MaxDewFrost),
            (false, false) => Ok(SaturationPoint::DewPoint),
        }
    }
}

/// The dew point.
///
/// `_pressure` is accepted for interface parity with callers that track
/// pressure per grid cell; the Rankine-Kirchhoff inversion depends on
/// temperature alone.
#[inline]
pub fn dew_point(t: Kelvin, _pressure: HectoPascal, rh: RelativeHumidity) -> Result<Kelvin> {
    let humidity = Humidity::new(t, rh)?;
    Ok(dew_point_from_humidity(t, &humidity))
}

/// The frost point.
///
/// `_pressure` is accepted for interface parity with callers that track
/// pressure per grid cell; the Rankine-Kirchhoff inversion depends on
/// temperature alone.
#[inline]
pub fn frost_point(t: Kelvin, _pressure: HectoPascal, rh: RelativeHumidity) -> Result<Kelvin> {
    let humidity = Humidity::new(t, rh)?;
    Ok(frost_point_from_humidity(t, &humidity))
}

/// The requested saturation point, from a single normalization of the
/// humidity input.
#[inline]
pub fn saturation_point(
    t: Kelvin,
    _pressure: HectoPascal,
    rh: RelativeHumidity,
    which: SaturationPoint,
) -> Result<Kelvin> {
    let humidity = Humidity::new(t, rh)?;

    match which {
        SaturationPoint::DewPoint => Ok(dew_point_from_humidity(t, &humidity)),
        SaturationPoint::FrostPoint => Ok(frost_point_from_humidity(t, &humidity)),
        SaturationPoint::MaxDewFrost => {
            let Kelvin(td) = dew_point_from_humidity(t, &humidity);
            let Kelvin(tf) = frost_point_from_humidity(t, &humidity);
            Ok(Kelvin(td.max(tf)))
        }
    }
}

// Coefficients of the rescaled saturation equation pv = pvstar(Tx). With
// a = -(cpv - cvx)/Rv and c = -L0/(a Rv T), the unknown appears as
// W(ratio^(1/a) * c * exp(c)) and Tx = T * c / W.
fn curve_coefficients(phase: Phase, t: f64) -> (f64, f64) {
    let a = -phase.power_law_exponent();
    let b = -phase.latent_energy_at_zero() / (R_VAPOR * t);
    (a, b / a)
}

fn dew_point_from_humidity(t: Kelvin, humidity: &Humidity) -> Kelvin {
    let Kelvin(t) = t;
    let ratio = humidity.over_liquid;

    // Perfectly dry air has no finite dew point. Take the 0 K limit directly
    // instead of driving the kernel to its pole.
    if ratio == 0.0 {
        return Kelvin(0.0);
    }

    let (a, c) = curve_coefficients(Phase::Liquid, t);
    let arg = ratio.powf(1.0 / a) * c * c.exp();

    Kelvin(t * c / lambert_w(Complex64::from(arg), -1).re)
}

fn frost_point_from_humidity(t: Kelvin, humidity: &Humidity) -> Kelvin {
    let Kelvin(t) = t;
    let ratio = humidity.over_ice;

    if ratio == 0.0 {
        return Kelvin(0.0);
    }

    let (a, c) = curve_coefficients(Phase::Ice, t);

    // The logarithm of the principal-branch argument. For cold or dry air the
    // argument itself overflows exp, so the comparison against the overflow
    // threshold of the floating type decides which evaluation is usable.
    let ln_arg = ratio.ln() / a + c.ln() + c;

    let w = if ln_arg < f64::MAX.ln() {
        lambert_w(Complex64::from(ratio.powf(1.0 / a) * c * c.exp()), 0).re
    } else {
        lambert_w0_of_ln(ln_arg)
    };

    Kelvin(t * c / w)
}

#[cfg(test)]
mod test {
    use super::*;
    use float_cmp::approx_eq;

    const SFC: HectoPascal = HectoPascal(1013.25);

    #[test]
    fn saturated_air_condenses_at_the_ambient_temperature() {
        for &t in &[230.0, 260.0, 273.16, 288.15, 310.0] {
            let Kelvin(td) = dew_point(
                Kelvin(t),
                SFC,
                RelativeHumidity::OverLiquid(1.0),
            )
            .unwrap();
            assert!(approx_eq!(f64, td, t, epsilon = 1e-9), "td = {} at {}", td, t);

            let Kelvin(tf) = frost_point(
                Kelvin(t),
                SFC,
                RelativeHumidity::OverIce(1.0),
            )
            .unwrap();
            assert!(approx_eq!(f64, tf, t, epsilon = 1e-9), "tf = {} at {}", tf, t);
        }
    }

    #[test]
    fn subsaturated_air_condenses_below_the_ambient_temperature() {
        for &t in &[250.0, 280.0, 300.0] {
            for &x in &[0.2, 0.5, 0.8, 0.99] {
                let Kelvin(td) =
                    dew_point(Kelvin(t), SFC, RelativeHumidity::OverLiquid(x)).unwrap();
                assert!(td < t);
                assert!(td > 0.0);

                let Kelvin(tf) =
                    frost_point(Kelvin(t), SFC, RelativeHumidity::OverIce(x)).unwrap();
                assert!(tf < t);
                assert!(tf > 0.0);
            }
        }
    }

    #[test]
    fn zero_humidity_yields_the_zero_kelvin_sentinel() {
        for &t in &[230.0, 273.16, 310.0] {
            let Kelvin(tf) = frost_point(Kelvin(t), SFC, RelativeHumidity::OverIce(0.0)).unwrap();
            assert_eq!(tf, 0.0);

            let Kelvin(tf) = frost_point(Kelvin(t), SFC, RelativeHumidity::Ambient(0.0)).unwrap();
            assert_eq!(tf, 0.0);

            let Kelvin(td) = dew_point(Kelvin(t), SFC, RelativeHumidity::OverLiquid(0.0)).unwrap();
            assert_eq!(td, 0.0);
        }
    }

    #[test]
    fn flag_translation() {
        assert_eq!(
            SaturationPoint::from_flags(false, false),
            Ok(SaturationPoint::DewPoint)
        );
        assert_eq!(
            SaturationPoint::from_flags(true, false),
            Ok(SaturationPoint::FrostPoint)
        );
        assert_eq!(
            SaturationPoint::from_flags(false, true),
            Ok(SaturationPoint::MaxDewFrost)
        );
        assert_eq!(
            SaturationPoint::from_flags(true, true),
            Err(DewPointError::InvalidOutputModeSpecification)
        );
    }

    #[test]
    fn asymptotic_regime_stays_finite_and_consistent() {
        // Cold, very dry air pushes the principal-branch argument past the
        // exp overflow threshold; the series evaluation takes over.
        let t = Kelvin(250.0);
        let Kelvin(tf) = frost_point(t, SFC, RelativeHumidity::OverIce(0.01)).unwrap();

        assert!(tf.is_finite());
        assert!(tf > 0.0 && tf < 250.0);

        // The round-trip law holds across the branch switch.
        let HectoPascal(pv_star_tf) =
            crate::vapor_pressure::saturation_vapor_pressure_ice(Kelvin(tf)).unwrap();
        let HectoPascal(pv_star_t) =
            crate::vapor_pressure::saturation_vapor_pressure_ice(t).unwrap();
        assert!(
            approx_eq!(
                f64,
                pv_star_tf,
                0.01 * pv_star_t,
                epsilon = 1e-6 * 0.01 * pv_star_t
            ),
            "pvstars(tf) = {}, expected {}",
            pv_star_tf,
            0.01 * pv_star_t
        );
    }
}
