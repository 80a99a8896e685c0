//! Region 4: the saturation curve and the two-phase mixtures beneath it.
//!
//! Up to 623.15 K the saturated phases are evaluated with the region 1 and
//! region 2 equations.
//! Above that the dome lies in region 3, where the saturated enthalpies come
//! from inverting the region 3 saturation-pressure equation and the densities
//! from the backward `v(p, h)` equation.

use super::{S_CRIT, T_13, T_CRIT, T_MIN, bisect, boundary, region1, region2, region3};

const N: [f64; 10] = [
    1_167.052_145_276_7,
    -724_213.167_032_06,
    -17.073_846_940_092,
    12_020.824_702_47,
    -3_232_555.032_233_3,
    14.915_108_613_53,
    -4_823.265_736_159_1,
    405_113.405_420_57,
    -0.238_555_575_678_49,
    650.175_348_447_98,
];

/// Saturation pressure at temperature `t`.
pub(crate) fn p_sat(t: f64) -> f64 {
    let theta = t + N[8] / (t - N[9]);
    let a = theta * theta + N[0] * theta + N[1];
    let b = N[2] * theta * theta + N[3] * theta + N[4];
    let c = N[5] * theta * theta + N[6] * theta + N[7];
    (2.0 * c / (-b + (b * b - 4.0 * a * c).sqrt())).powi(4)
}

/// Saturation temperature at pressure `p`.
pub(crate) fn t_sat(p: f64) -> f64 {
    let beta = p.powf(0.25);
    let e = beta * beta + N[2] * beta + N[5];
    let f = N[0] * beta * beta + N[3] * beta + N[6];
    let g = N[1] * beta * beta + N[4] * beta + N[7];
    let d = 2.0 * g / (-f - (f * f - 4.0 * e * g).sqrt());
    (N[9] + d - ((N[9] + d).powi(2) - 4.0 * (N[8] + N[9] * d)).sqrt()) / 2.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Liquid,
    Vapor,
}

/// Properties of one saturated phase.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Saturated {
    pub(crate) v: f64,
    pub(crate) u: f64,
    pub(crate) h: f64,
    pub(crate) s: f64,
}

/// Evaluates the saturated `phase` at temperature `t`.
pub(crate) fn saturated(t: f64, phase: Phase) -> Saturated {
    let p = p_sat(t);

    if t <= T_13 {
        return match phase {
            Phase::Liquid => Saturated {
                v: region1::v_pt(p, t),
                u: region1::u_pt(p, t),
                h: region1::h_pt(p, t),
                s: region1::s_pt(p, t),
            },
            Phase::Vapor => Saturated {
                v: region2::v_pt(p, t),
                u: region2::u_pt(p, t),
                h: region2::h_pt(p, t),
                s: region2::s_pt(p, t),
            },
        };
    }

    let h = match phase {
        Phase::Liquid => boundary::h_sat3_liquid(p),
        Phase::Vapor => boundary::h_sat3_vapor(p),
    };
    let v = region3::v_ph(p, h);
    let rho = 1.0 / v;
    Saturated {
        v,
        u: region3::u_rho_t(rho, t),
        h: region3::h_rho_t(rho, t),
        s: region3::s_rho_t(rho, t),
    }
}

fn mix(t: f64, x: f64, property: fn(&Saturated) -> f64) -> f64 {
    let liquid = property(&saturated(t, Phase::Liquid));
    let vapor = property(&saturated(t, Phase::Vapor));
    liquid + x * (vapor - liquid)
}

fn quality(t: f64, value: f64, property: fn(&Saturated) -> f64) -> f64 {
    let liquid = property(&saturated(t, Phase::Liquid));
    let vapor = property(&saturated(t, Phase::Vapor));
    (value - liquid) / (vapor - liquid)
}

pub(crate) fn v_tx(t: f64, x: f64) -> f64 {
    mix(t, x, |sat| sat.v)
}

pub(crate) fn u_tx(t: f64, x: f64) -> f64 {
    mix(t, x, |sat| sat.u)
}

pub(crate) fn h_tx(t: f64, x: f64) -> f64 {
    mix(t, x, |sat| sat.h)
}

pub(crate) fn s_tx(t: f64, x: f64) -> f64 {
    mix(t, x, |sat| sat.s)
}

/// Vapor quality of a mixture at `t` with enthalpy `h`.
pub(crate) fn x_th(t: f64, h: f64) -> f64 {
    quality(t, h, |sat| sat.h)
}

/// Vapor quality of a mixture at `t` with entropy `s`.
pub(crate) fn x_ts(t: f64, s: f64) -> f64 {
    quality(t, s, |sat| sat.s)
}

/// The saturation line bounding the dome at entropy `s`.
fn dome_edge(s: f64) -> Phase {
    if s <= S_CRIT {
        Phase::Liquid
    } else {
        Phase::Vapor
    }
}

/// Temperature where the dome edge reaches entropy `s`.
fn edge_temperature(s: f64) -> f64 {
    let phase = dome_edge(s);
    bisect(T_MIN, T_CRIT, |t| saturated(t, phase).s - s)
}

/// Enthalpy on the dome edge at entropy `s`.
///
/// This is the saturated-liquid line below the critical entropy and the
/// saturated-vapor line above it.
pub(crate) fn h_sat_s(s: f64) -> f64 {
    saturated(edge_temperature(s), dome_edge(s)).h
}

/// Saturation temperature of the mixture with enthalpy `h` and entropy `s`.
///
/// The search is capped where the dome edge crosses `s`, since beyond it the
/// tie lines extrapolate.
pub(crate) fn t_hs(h: f64, s: f64) -> f64 {
    bisect(T_MIN, edge_temperature(s), |t| {
        let liquid = saturated(t, Phase::Liquid);
        let vapor = saturated(t, Phase::Vapor);
        let x = (h - liquid.h) / (vapor.h - liquid.h);
        liquid.s + x * (vapor.s - liquid.s) - s
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn saturation_pressure_matches_verification_table() {
        assert_relative_eq!(p_sat(300.0), 0.003_536_589_41, max_relative = 1e-8);
        assert_relative_eq!(p_sat(500.0), 2.638_897_76, max_relative = 1e-8);
        assert_relative_eq!(p_sat(600.0), 12.344_314_6, max_relative = 1e-8);
    }

    #[test]
    fn saturation_temperature_matches_verification_table() {
        assert_relative_eq!(t_sat(0.1), 372.755_919, max_relative = 1e-8);
        assert_relative_eq!(t_sat(1.0), 453.035_632, max_relative = 1e-8);
        assert_relative_eq!(t_sat(10.0), 584.149_488, max_relative = 1e-8);
    }

    #[test]
    fn saturated_phases_meet_the_single_phase_regions() {
        let t = 450.0;
        let p = p_sat(t);
        assert_relative_eq!(h_tx(t, 0.0), region1::h_pt(p, t));
        assert_relative_eq!(h_tx(t, 1.0), region2::h_pt(p, t));
        assert_relative_eq!(s_tx(t, 1.0), region2::s_pt(p, t));
    }

    #[test]
    fn saturated_phases_are_continuous_at_the_region_3_edge() {
        for phase in [Phase::Liquid, Phase::Vapor] {
            let below = saturated(T_13, phase);
            let above = saturated(T_13 + 0.01, phase);
            assert_relative_eq!(below.h, above.h, max_relative = 1e-3);
            assert_relative_eq!(below.s, above.s, max_relative = 1e-3);
        }
    }

    #[test]
    fn quality_inverts_mixing() {
        for (t, x) in [(300.0, 0.25), (500.0, 0.6), (640.0, 0.4)] {
            assert_relative_eq!(x_th(t, h_tx(t, x)), x, max_relative = 1e-9);
            assert_relative_eq!(x_ts(t, s_tx(t, x)), x, max_relative = 1e-9);
        }
    }

    #[test]
    fn mixture_temperature_from_enthalpy_and_entropy() {
        for (t, x) in [(300.0, 0.01), (300.0, 0.99), (500.0, 0.3), (623.15, 0.5), (646.9, 0.5)] {
            let h = h_tx(t, x);
            let s = s_tx(t, x);
            assert_relative_eq!(t_hs(h, s), t, max_relative = 1e-9);
        }
    }

    #[test]
    fn dome_edge_enthalpy_follows_the_saturation_lines() {
        let liquid = saturated(400.0, Phase::Liquid);
        assert_relative_eq!(h_sat_s(liquid.s), liquid.h, max_relative = 1e-9);

        let vapor = saturated(400.0, Phase::Vapor);
        assert_relative_eq!(h_sat_s(vapor.s), vapor.h, max_relative = 1e-9);
    }
}
