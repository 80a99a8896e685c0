//! Region 5: high-temperature vapor above 1073.15 K, up to 50 MPa.

use super::{Gibbs, Term};

/// Reducing temperature in K.
const T_STAR: f64 = 1000.0;

const IDEAL: [(i32, f64); 6] = [
    (0, -13.179_983_674_201),
    (1, 6.854_084_163_443_4),
    (-3, -0.024_805_148_933_466),
    (-2, 0.369_015_349_803_33),
    (-1, -3.116_131_821_392_5),
    (2, -0.329_616_265_389_17),
];

const RESIDUAL: [Term; 6] = [
    (1, 1, 1.573_640_485_525_9e-3),
    (1, 2, 9.015_376_167_394_4e-4),
    (1, 3, -5.027_007_767_764_8e-3),
    (2, 3, 2.244_003_740_948_5e-6),
    (2, 9, -4.116_327_545_347_1e-6),
    (3, 7, 3.791_945_482_295_5e-8),
];

fn gibbs(p: f64, t: f64) -> Gibbs {
    let pi = p;
    let tau = T_STAR / t;

    let mut gamma = pi.ln();
    let mut gamma_pi = 1.0 / pi;
    let mut gamma_tau = 0.0;
    for &(j, n) in &IDEAL {
        gamma += n * tau.powi(j);
        gamma_tau += n * f64::from(j) * tau.powi(j - 1);
    }
    for &(i, j, n) in &RESIDUAL {
        gamma += n * pi.powi(i) * tau.powi(j);
        gamma_pi += n * f64::from(i) * pi.powi(i - 1) * tau.powi(j);
        gamma_tau += n * pi.powi(i) * f64::from(j) * tau.powi(j - 1);
    }

    Gibbs {
        pi,
        tau,
        gamma,
        gamma_pi,
        gamma_tau,
    }
}

pub(crate) fn v_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).specific_volume(p, t)
}

pub(crate) fn u_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).internal_energy(t)
}

pub(crate) fn h_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).enthalpy(t)
}

pub(crate) fn s_pt(p: f64, t: f64) -> f64 {
    gibbs(p, t).entropy()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn forward_properties_match_verification_table() {
        let cases = [
            (0.5, 1500.0, 1.384_550_90, 4_527.493_10, 5_219.768_55, 9.654_088_75),
            (30.0, 1500.0, 0.023_076_129_9, 4_474.951_24, 5_167.235_14, 7.729_701_33),
            (30.0, 2000.0, 0.031_138_521_9, 5_637.070_38, 6_571.226_04, 8.536_405_23),
        ];

        for (p, t, v, u, h, s) in cases {
            assert_relative_eq!(v_pt(p, t), v, max_relative = 1e-8);
            assert_relative_eq!(u_pt(p, t), u, max_relative = 1e-8);
            assert_relative_eq!(h_pt(p, t), h, max_relative = 1e-8);
            assert_relative_eq!(s_pt(p, t), s, max_relative = 1e-8);
        }
    }
}
