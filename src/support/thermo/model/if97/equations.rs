//! The IAPWS-IF97 equation set.
//!
//! Every function in these modules maps plain `f64` values in IF97 native
//! units: pressure in MPa, temperature in K, specific enthalpy and internal
//! energy in kJ/kg, specific entropy in kJ/(kg·K), specific volume in m³/kg,
//! and density in kg/m³.
//!
//! None of the functions check their domain.
//! Inputs are classified by [`super::region`] before any equation runs.

pub(crate) mod boundary;
pub(crate) mod region1;
pub(crate) mod region2;
pub(crate) mod region3;
pub(crate) mod region4;
pub(crate) mod region5;

/// Specific gas constant of water in kJ/(kg·K).
pub(crate) const R: f64 = 0.461_526;

/// Critical temperature in K.
pub(crate) const T_CRIT: f64 = 647.096;

/// Critical pressure in MPa.
pub(crate) const P_CRIT: f64 = 22.064;

/// Critical density in kg/m³.
pub(crate) const RHO_CRIT: f64 = 322.0;

/// Critical specific entropy in kJ/(kg·K).
pub(crate) const S_CRIT: f64 = 4.412_021_482_234_76;

/// Lowest temperature covered by regions 1, 2 and 4.
pub(crate) const T_MIN: f64 = 273.15;

/// Isotherm separating region 1 from region 3.
pub(crate) const T_13: f64 = 623.15;

/// Highest temperature on the B23 boundary.
pub(crate) const T_23_MAX: f64 = 863.15;

/// Highest temperature covered by region 2.
pub(crate) const T_MAX: f64 = 1073.15;

/// Highest temperature covered by region 5.
pub(crate) const T5_MAX: f64 = 2273.15;

/// Highest pressure covered by regions 1, 2 and 3.
pub(crate) const P_MAX: f64 = 100.0;

/// Highest pressure covered by region 5.
pub(crate) const P5_MAX: f64 = 50.0;

/// A term of an IF97 polynomial: exponents `I` and `J` with coefficient `n`.
pub(crate) type Term = (i32, i32, f64);

/// Evaluates `Σ n · xᴵ · yᴶ` over a coefficient table.
pub(crate) fn polynomial(terms: &[Term], x: f64, y: f64) -> f64 {
    terms.iter().map(|&(i, j, n)| n * x.powi(i) * y.powi(j)).sum()
}

/// Dimensionless Gibbs free energy and its first derivatives.
///
/// Regions 1, 2 and 5 share the same property relations once
/// `γ`, `∂γ/∂π`, and `∂γ/∂τ` are known at a reduced state `(π, τ)`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Gibbs {
    pub(crate) pi: f64,
    pub(crate) tau: f64,
    pub(crate) gamma: f64,
    pub(crate) gamma_pi: f64,
    pub(crate) gamma_tau: f64,
}

impl Gibbs {
    pub(crate) fn specific_volume(&self, p: f64, t: f64) -> f64 {
        R * t * self.pi * self.gamma_pi / (p * 1000.0)
    }

    pub(crate) fn internal_energy(&self, t: f64) -> f64 {
        R * t * (self.tau * self.gamma_tau - self.pi * self.gamma_pi)
    }

    pub(crate) fn enthalpy(&self, t: f64) -> f64 {
        R * t * self.tau * self.gamma_tau
    }

    pub(crate) fn entropy(&self) -> f64 {
        R * (self.tau * self.gamma_tau - self.gamma)
    }
}

/// Bisection steps allowed before the midpoint is returned as is.
const MAX_BISECTIONS: usize = 200;

/// Finds where a monotonic `f` crosses zero between `from` and `to`.
///
/// The bounds may be given in either order.
/// Without a sign change the search collapses onto `to`.
pub(crate) fn bisect(mut from: f64, mut to: f64, f: impl Fn(f64) -> f64) -> f64 {
    let from_negative = f(from) < 0.0;

    for _ in 0..MAX_BISECTIONS {
        let mid = 0.5 * (from + to);
        let f_mid = f(mid);
        if f_mid == 0.0 {
            return mid;
        }
        if (f_mid < 0.0) == from_negative {
            from = mid;
        } else {
            to = mid;
        }
        if (to - from).abs() <= 1e-13 * (from.abs() + to.abs()) {
            break;
        }
    }

    0.5 * (from + to)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn polynomial_sums_every_term() {
        let terms: [Term; 3] = [(0, 0, 1.0), (1, 0, 2.0), (2, -1, 3.0)];
        assert_relative_eq!(polynomial(&terms, 2.0, 4.0), 1.0 + 4.0 + 3.0);
    }

    #[test]
    fn bisect_finds_roots_of_increasing_and_decreasing_functions() {
        assert_relative_eq!(bisect(0.0, 4.0, |x| x * x - 2.0), 2.0_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(bisect(0.0, 4.0, |x| 2.0 - x * x), 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn bisect_without_crossing_collapses_to_second_bound() {
        assert_relative_eq!(bisect(0.0, 1.0, |x| x + 1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(bisect(1.0, 0.0, |x| x - 2.0), 0.0, epsilon = 1e-12);
    }
}
