//! Auxiliary curves separating regions and backward-equation subregions.

use super::{P_MAX, T_13, T_MIN, Term, bisect, polynomial, region1, region2, region4};

/// B23 coefficients, pressure in MPa and temperature in K.
const B23: [f64; 5] = [
    348.051_856_289_69,
    -1.167_185_987_997_5,
    1.019_297_003_932_6e-3,
    572.544_598_627_46,
    13.918_839_778_87,
];

/// Pressure on the region 2/3 boundary at temperature `t`.
pub(crate) fn b23_p(t: f64) -> f64 {
    B23[0] + B23[1] * t + B23[2] * t * t
}

/// Temperature on the region 2/3 boundary at pressure `p`.
pub(crate) fn b23_t(p: f64) -> f64 {
    B23[3] + ((p - B23[4]) / B23[2]).sqrt()
}

/// Pressure on the B2bc curve separating subregions 2b and 2c.
pub(crate) fn b2bc_p(h: f64) -> f64 {
    905.842_785_147_23 - 0.679_557_863_992_41 * h + 1.280_900_273_013_6e-4 * h * h
}

/// Enthalpy on the 2a/2b boundary of the `p(h, s)` equations.
pub(crate) fn h2ab_s(s: f64) -> f64 {
    -3_498.980_834_321_39 + 2_575.607_169_058_76 * s - 421.073_558_227_969 * s.powi(2)
        + 27.634_906_379_994_4 * s.powi(3)
}

/// Enthalpy on the B3ab curve separating subregions 3a and 3b.
pub(crate) fn b3ab_h(p: f64) -> f64 {
    2_014.640_042_068_75 + 3.746_965_501_369_83 * p - 2.199_219_010_541_87e-2 * p.powi(2)
        + 8.751_316_860_099_5e-5 * p.powi(3)
}

const P_SAT_3: [Term; 14] = [
    (0, 0, 0.600_073_641_753_024),
    (1, 1, -9.362_036_548_498_57),
    (1, 3, 24.659_079_859_414_7),
    (1, 4, -107.014_222_858_224),
    (1, 36, -91_582_131_580_576.8),
    (5, 3, -8_623.320_117_006_62),
    (7, 0, -23.583_734_474_003_2),
    (8, 24, 2.523_049_693_841_28e17),
    (14, 16, -3.897_187_719_977_19e18),
    (20, 16, -3.337_757_136_452_96e22),
    (22, 3, 35_649_946_963.632_8),
    (24, 18, -1.485_475_447_206_41e26),
    (28, 8, 3.306_115_148_387_98e18),
    (36, 24, 8.136_412_944_678_29e37),
];

/// Saturated-liquid enthalpy at 623.15 K.
const H_SAT_LIQUID_13: f64 = 1_670.858_218;

/// Saturated-vapor enthalpy at 623.15 K.
const H_SAT_VAPOR_13: f64 = 2_563.592_004;

/// Enthalpy at the critical point.
const H_CRIT: f64 = 2_087.546_845;

/// Saturation pressure along the region 3 part of the dome, from enthalpy.
pub(crate) fn p_sat3_h(h: f64) -> f64 {
    let eta = h / 2600.0;
    22.0 * polynomial(&P_SAT_3, eta - 1.02, eta - 0.608)
}

/// Saturated-liquid enthalpy in region 3 at pressure `p`.
pub(crate) fn h_sat3_liquid(p: f64) -> f64 {
    bisect(H_SAT_LIQUID_13, H_CRIT, |h| p_sat3_h(h) - p)
}

/// Saturated-vapor enthalpy in region 3 at pressure `p`.
pub(crate) fn h_sat3_vapor(p: f64) -> f64 {
    bisect(H_SAT_VAPOR_13, H_CRIT, |h| p_sat3_h(h) - p)
}

/// Enthalpy on the 623.15 K isotherm of region 1 at entropy `s`.
///
/// This is the B13 line as it appears in the `(h, s)` plane.
pub(crate) fn b13_h_s(s: f64) -> f64 {
    let p = bisect(region4::p_sat(T_13), P_MAX, |p| region1::s_pt(p, T_13) - s);
    region1::h_pt(p, T_13)
}

/// Enthalpy on the B23 curve at entropy `s`.
pub(crate) fn b23_h_s(s: f64) -> f64 {
    let p = bisect(b23_p(T_13), P_MAX, |p| region2::s_pt(p, b23_t(p)) - s);
    region2::h_pt(p, b23_t(p))
}

/// Pressure where entropy along the 273.15 K liquid isotherm peaks.
const P_PEAK_S_T_MIN: f64 = 19.0;

/// Enthalpy on the 273.15 K isotherm of region 1 at entropy `s`.
///
/// Only the branch above [`P_PEAK_S_T_MIN`] is searched, which is the one
/// bounding states with entropy below the saturated liquid at 273.15 K.
pub(crate) fn t_min_liquid_h_s(s: f64) -> f64 {
    let p = bisect(P_MAX, P_PEAK_S_T_MIN, |p| region1::s_pt(p, T_MIN) - s);
    region1::h_pt(p, T_MIN)
}

/// Enthalpy on the 273.15 K isotherm of region 2 at entropy `s`.
///
/// The search runs in `ln p` since entropy grows without bound as the
/// pressure falls.
pub(crate) fn t_min_vapor_h_s(s: f64) -> f64 {
    let ln_p = bisect(region4::p_sat(T_MIN).ln(), LN_P_FLOOR, |ln_p| {
        region2::s_pt(ln_p.exp(), T_MIN) - s
    });
    region2::h_pt(ln_p.exp(), T_MIN)
}

/// Lowest pressure searched along the 273.15 K vapor isotherm.
const LN_P_FLOOR: f64 = -30.0;
