//! A Lambert-W kernel for inverting the saturation curves.
//!
//! The dew point needs the lower real branch (index -1) and the frost point
//! the principal branch (index 0). Both are evaluated on the complex plane
//! with a branch index, and callers take the real part. For arguments so
//! large that forming them would overflow `exp`, the principal branch is also
//! available as an asymptotic series in the logarithm of the argument.

use num_complex::Complex64;
use std::f64::consts::{E, PI};

const MAX_ITERATIONS: usize = 50;

// Branch point shared by branches 0 and -1.
const BRANCH_POINT: f64 = -1.0 / E;

/// Evaluate the Lambert-W function on branch 0 or -1.
///
/// Halley iteration from a branch-aware starting point, converging to
/// machine precision in a handful of steps. Branches other than 0 and -1 are
/// not supported.
pub(crate) fn lambert_w(z: Complex64, branch: i32) -> Complex64 {
    debug_assert!(branch == 0 || branch == -1, "unsupported branch index");

    if z.re == 0.0 && z.im == 0.0 {
        return if branch == 0 {
            Complex64::new(0.0, 0.0)
        } else {
            Complex64::new(f64::NEG_INFINITY, 0.0)
        };
    }

    let mut w = initial_guess(z, branch);

    for _ in 0..MAX_ITERATIONS {
        let e_w = w.exp();
        let f = w * e_w - z;

        if f.norm() <= 2.0 * f64::EPSILON * z.norm() {
            break;
        }

        let w_plus_1 = w + 1.0;
        let denom = e_w * w_plus_1 - (w + 2.0) * f / (2.0 * w_plus_1);
        if !(denom.norm() > 0.0) {
            // Singular at the branch point, where the guess is already exact.
            break;
        }

        let delta = f / denom;
        w -= delta;

        if delta.norm() <= 2.0 * f64::EPSILON * w.norm() {
            break;
        }
    }

    w
}

fn initial_guess(z: Complex64, branch: i32) -> Complex64 {
    // Close to the branch point at -1/e both branches follow a square-root
    // series in p = sqrt(2(ez + 1)), with opposite signs of p.
    if (z - BRANCH_POINT).norm() < 0.05 {
        let p = (2.0 * (E * z + 1.0)).sqrt();
        let p = if branch == 0 { p } else { -p };
        return -1.0 + p - p * p / 3.0 + 11.0 / 72.0 * p * p * p;
    }

    if branch == 0 {
        if z.im == 0.0 && z.re >= 0.0 {
            // Winitzki's approximation, good over the whole positive axis and
            // immune to overflow since it works in ln(1 + z).
            let l = (1.0 + z.re).ln();
            Complex64::new(l * (1.0 - (1.0 + l).ln() / (2.0 + l)), 0.0)
        } else {
            log_guess(z, 0)
        }
    } else if z.im == 0.0 && z.re < 0.0 {
        // On (-1/e, 0) the lower real branch behaves like
        // ln(-z) - ln(-ln(-z)).
        let l = (-z.re).ln();
        Complex64::new(l - (-l).ln(), 0.0)
    } else {
        log_guess(z, -1)
    }
}

// The asymptotic starting point L1 - ln(L1) on the sheet selected by the
// branch index.
fn log_guess(z: Complex64, branch: i32) -> Complex64 {
    let l1 = z.ln() + Complex64::new(0.0, 2.0 * PI * f64::from(branch));
    l1 - l1.ln()
}

/// The fourth-order iterated-logarithm expansion of `W0(exp(ln_z))`.
///
/// Takes the logarithm of the argument, so it stays finite where `exp(ln_z)`
/// itself would overflow. Only accurate for large `ln_z`; the solver switches
/// to it at the `exp` overflow threshold of the floating type.
pub(crate) fn lambert_w0_of_ln(ln_z: f64) -> f64 {
    let l1 = ln_z;
    let l2 = l1.ln();

    l1 - l2
        + l2 / l1
        + l2 * (l2 - 2.0) / (2.0 * l1 * l1)
        + l2 * (6.0 - 9.0 * l2 + 2.0 * l2 * l2) / (6.0 * l1.powi(3))
        + l2 * (-12.0 + 36.0 * l2 - 22.0 * l2 * l2 + 3.0 * l2.powi(3)) / (12.0 * l1.powi(4))
}
