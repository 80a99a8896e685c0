//! Classification of property pairs into IAPWS-IF97 regions.

use std::fmt;

use tracing::trace;

use super::equations::{
    P_CRIT, P_MAX, P5_MAX, T_13, T_23_MAX, T_CRIT, T_MAX, T_MIN, T5_MAX, boundary, region1,
    region2, region3,
    region4::{self, Phase},
};

/// An IAPWS-IF97 region.
///
/// A `Region` always names a valid part of the formulation.
/// Pairs outside every region are reported by the resolver as `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Compressed liquid up to 623.15 K.
    R1,
    /// Superheated and supercritical vapor up to 1073.15 K.
    R2,
    /// Near-critical fluid between the B13 isotherm and the B23 curve.
    R3,
    /// Two-phase mixtures on the saturation curve.
    R4,
    /// High-temperature vapor from 1073.15 K to 2273.15 K.
    R5,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let number = match self {
            Region::R1 => 1,
            Region::R2 => 2,
            Region::R3 => 3,
            Region::R4 => 4,
            Region::R5 => 5,
        };
        write!(f, "region {number}")
    }
}

/// The property pairs a state can be resolved from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputPair {
    PressureTemperature,
    TemperatureQuality,
    PressureQuality,
    PressureEnthalpy,
    PressureEntropy,
    EnthalpyEntropy,
    DensityTemperature,
}

impl fmt::Display for InputPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pair = match self {
            InputPair::PressureTemperature => "(p, T)",
            InputPair::TemperatureQuality => "(T, x)",
            InputPair::PressureQuality => "(p, x)",
            InputPair::PressureEnthalpy => "(p, h)",
            InputPair::PressureEntropy => "(p, s)",
            InputPair::EnthalpyEntropy => "(h, s)",
            InputPair::DensityTemperature => "(rho, T)",
        };
        f.write_str(pair)
    }
}

/// Classifies the pair `(a, b)` of the given kind into a region.
///
/// Values are in IF97 native units, in the order the kind names them.
/// Returns `None` if the pair lies outside every region for that kind,
/// including when either value is not finite.
pub(crate) fn resolve(kind: InputPair, a: f64, b: f64) -> Option<Region> {
    let region = if a.is_finite() && b.is_finite() {
        match kind {
            InputPair::PressureTemperature => resolve_pt(a, b),
            InputPair::TemperatureQuality => resolve_tx(a, b),
            InputPair::PressureQuality => resolve_px(a, b),
            InputPair::PressureEnthalpy => resolve_ph(a, b),
            InputPair::PressureEntropy => resolve_ps(a, b),
            InputPair::EnthalpyEntropy => resolve_hs(a, b),
            InputPair::DensityTemperature => resolve_rho_t(a, b),
        }
    } else {
        None
    };

    trace!(%kind, a, b, ?region, "resolved IF97 region");
    region
}

fn is_quality(x: f64) -> bool {
    (0.0..=1.0).contains(&x)
}

/// Pressures covered by regions 1 to 3.
fn is_pressure(p: f64) -> bool {
    p > 0.0 && p <= P_MAX
}

fn resolve_pt(p: f64, t: f64) -> Option<Region> {
    if p <= 0.0 || t < T_MIN {
        return None;
    }

    if t <= T_13 {
        if p > P_MAX {
            return None;
        }
        let p_sat = region4::p_sat(t);
        return Some(if p > p_sat {
            Region::R1
        } else if p < p_sat {
            Region::R2
        } else {
            Region::R4
        });
    }

    if t <= T_23_MAX {
        if p > P_MAX {
            return None;
        }
        if p <= boundary::b23_p(t) {
            return Some(Region::R2);
        }
        if t < T_CRIT && p == region4::p_sat(t) {
            return Some(Region::R4);
        }
        return Some(Region::R3);
    }

    if t <= T_MAX {
        return (p <= P_MAX).then_some(Region::R2);
    }

    if t <= T5_MAX {
        return (p <= P5_MAX).then_some(Region::R5);
    }

    None
}

fn resolve_tx(t: f64, x: f64) -> Option<Region> {
    ((T_MIN..=T_CRIT).contains(&t) && is_quality(x)).then_some(Region::R4)
}

fn resolve_px(p: f64, x: f64) -> Option<Region> {
    ((region4::p_sat(T_MIN)..=P_CRIT).contains(&p) && is_quality(x)).then_some(Region::R4)
}

fn resolve_ph(p: f64, h: f64) -> Option<Region> {
    if !is_pressure(p) {
        return None;
    }

    // Below the triple-point pressure only vapor exists.
    if p < region4::p_sat(T_MIN) {
        let vapor = region2::h_pt(p, T_MIN)..=region2::h_pt(p, T_MAX);
        return vapor.contains(&h).then_some(Region::R2);
    }

    if h < region1::h_pt(p, T_MIN) || h > region2::h_pt(p, T_MAX) {
        return None;
    }

    if p <= region4::p_sat(T_13) {
        let t_sat = region4::t_sat(p);
        return Some(if h < region1::h_pt(p, t_sat) {
            Region::R1
        } else if h <= region2::h_pt(p, t_sat) {
            Region::R4
        } else {
            Region::R2
        });
    }

    Some(if h <= region1::h_pt(p, T_13) {
        Region::R1
    } else if h >= region2::h_pt(p, boundary::b23_t(p)) {
        Region::R2
    } else if p < boundary::p_sat3_h(h) {
        Region::R4
    } else {
        Region::R3
    })
}

fn resolve_ps(p: f64, s: f64) -> Option<Region> {
    if !is_pressure(p) {
        return None;
    }

    if p < region4::p_sat(T_MIN) {
        let vapor = region2::s_pt(p, T_MIN)..=region2::s_pt(p, T_MAX);
        return vapor.contains(&s).then_some(Region::R2);
    }

    if s < region1::s_pt(p, T_MIN) || s > region2::s_pt(p, T_MAX) {
        return None;
    }

    if p <= region4::p_sat(T_13) {
        let t_sat = region4::t_sat(p);
        return Some(if s < region1::s_pt(p, t_sat) {
            Region::R1
        } else if s <= region2::s_pt(p, t_sat) {
            Region::R4
        } else {
            Region::R2
        });
    }

    if s <= region1::s_pt(p, T_13) {
        return Some(Region::R1);
    }
    if s >= region2::s_pt(p, boundary::b23_t(p)) {
        return Some(Region::R2);
    }

    if p < P_CRIT {
        let t_sat = region4::t_sat(p);
        let dome = region4::saturated(t_sat, Phase::Liquid).s
            ..=region4::saturated(t_sat, Phase::Vapor).s;
        if dome.contains(&s) {
            return Some(Region::R4);
        }
    }

    Some(Region::R3)
}

fn resolve_hs(h: f64, s: f64) -> Option<Region> {
    if s < region1::s_pt(P_MAX, T_MIN) {
        return None;
    }

    let liquid_min = region4::saturated(T_MIN, Phase::Liquid);
    let vapor_min = region4::saturated(T_MIN, Phase::Vapor);

    let h_min = if s < liquid_min.s {
        boundary::t_min_liquid_h_s(s)
    } else if s <= vapor_min.s {
        // The triple line is a straight tie line at 273.15 K.
        liquid_min.h + T_MIN * (s - liquid_min.s)
    } else {
        boundary::t_min_vapor_h_s(s)
    };
    if h < h_min {
        return None;
    }

    if (liquid_min.s..=vapor_min.s).contains(&s) && h <= region4::h_sat_s(s) {
        return Some(Region::R4);
    }

    let liquid_13 = region4::saturated(T_13, Phase::Liquid).s;
    let vapor_13 = region4::saturated(T_13, Phase::Vapor).s;

    let (region, p) = if s <= liquid_13 {
        if s >= region1::s_pt(P_MAX, T_13) && h > boundary::b13_h_s(s) {
            (Region::R3, region3::p_hs(h, s))
        } else {
            (Region::R1, region1::p_hs(h, s))
        }
    } else if s >= vapor_13
        || (s >= region2::s_pt(P_MAX, T_23_MAX) && h > boundary::b23_h_s(s))
    {
        (Region::R2, region2::p_hs(h, s))
    } else {
        (Region::R3, region3::p_hs(h, s))
    };

    if !is_pressure(p) {
        return None;
    }
    if region == Region::R2 && region2::t_ps(p, s) > T_MAX {
        return None;
    }

    Some(region)
}

fn resolve_rho_t(rho: f64, t: f64) -> Option<Region> {
    if rho <= 0.0 || !(T_13..=T_23_MAX).contains(&t) {
        return None;
    }

    let p = region3::p_rho_t(rho, t);
    if p < boundary::b23_p(t) || p > P_MAX {
        return None;
    }

    if t < T_CRIT {
        let liquid = 1.0 / region4::saturated(t, Phase::Liquid).v;
        let vapor = 1.0 / region4::saturated(t, Phase::Vapor).v;
        if rho > vapor && rho < liquid {
            return None;
        }
    }

    Some(Region::R3)
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    use super::InputPair::*;

    #[test]
    fn pressure_temperature() {
        let cases = [
            ((3.0, 300.0), Some(Region::R1)),
            ((0.0035, 300.0), Some(Region::R2)),
            ((50.0, 650.0), Some(Region::R3)),
            ((16.0, 700.0), Some(Region::R2)),
            ((30.0, 900.0), Some(Region::R2)),
            ((8.0, 1500.0), Some(Region::R5)),
            ((60.0, 1500.0), None),
            ((101.0, 300.0), None),
            ((1.0, 2300.0), None),
            ((1.0, 270.0), None),
            ((0.0, 300.0), None),
        ];

        for ((p, t), expected) in cases {
            assert_eq!(resolve(PressureTemperature, p, t), expected, "p={p}, T={t}");
        }
    }

    #[test]
    fn pressure_temperature_on_the_saturation_curve() {
        let t = 300.0;
        let p = region4::p_sat(t);
        assert_eq!(resolve(PressureTemperature, p, t), Some(Region::R4));
    }

    #[test]
    fn non_finite_inputs_are_out_of_range() {
        for kind in [
            PressureTemperature,
            TemperatureQuality,
            PressureQuality,
            PressureEnthalpy,
            PressureEntropy,
            EnthalpyEntropy,
            DensityTemperature,
        ] {
            assert_eq!(resolve(kind, f64::NAN, 1.0), None);
            assert_eq!(resolve(kind, 1.0, f64::INFINITY), None);
        }
    }

    #[test]
    fn quality_pairs() {
        assert_eq!(resolve(TemperatureQuality, 300.0, 0.5), Some(Region::R4));
        assert_eq!(resolve(TemperatureQuality, T_CRIT, 1.0), Some(Region::R4));
        assert_eq!(resolve(TemperatureQuality, 700.0, 0.5), None);
        assert_eq!(resolve(TemperatureQuality, 300.0, 1.5), None);

        assert_eq!(resolve(PressureQuality, 1.0, 0.0), Some(Region::R4));
        assert_eq!(resolve(PressureQuality, 25.0, 0.5), None);
        assert_eq!(resolve(PressureQuality, 1.0e-4, 0.5), None);
        assert_eq!(resolve(PressureQuality, 1.0, -0.1), None);
    }

    #[test]
    fn pressure_enthalpy() {
        let cases = [
            ((3.0, 500.0), Some(Region::R1)),
            ((3.0, 2000.0), Some(Region::R4)),
            ((0.001, 3000.0), Some(Region::R2)),
            ((0.0005, 2600.0), Some(Region::R2)),
            ((20.0, 1700.0), Some(Region::R3)),
            ((20.0, 2500.0), Some(Region::R3)),
            ((19.0, 2000.0), Some(Region::R4)),
            ((30.0, 3000.0), Some(Region::R2)),
            ((1.0, -50.0), None),
            ((1.0, 100_000.0), None),
            ((120.0, 2000.0), None),
        ];

        for ((p, h), expected) in cases {
            assert_eq!(resolve(PressureEnthalpy, p, h), expected, "p={p}, h={h}");
        }
    }

    #[test]
    fn pressure_entropy() {
        let cases = [
            ((3.0, 0.5), Some(Region::R1)),
            ((3.0, 4.0), Some(Region::R4)),
            ((0.1, 7.5), Some(Region::R2)),
            ((0.0001, 10.0), Some(Region::R2)),
            ((20.0, 5.0), Some(Region::R3)),
            ((100.0, 4.0), Some(Region::R3)),
            ((19.0, 4.4), Some(Region::R4)),
            ((1.0, 20.0), None),
        ];

        for ((p, s), expected) in cases {
            assert_eq!(resolve(PressureEntropy, p, s), expected, "p={p}, s={s}");
        }
    }

    #[test]
    fn enthalpy_entropy() {
        let liquid = (region1::h_pt(3.0, 300.0), region1::s_pt(3.0, 300.0));
        let vapor = (region2::h_pt(0.0035, 300.0), region2::s_pt(0.0035, 300.0));
        let dense = (region2::h_pt(30.0, 700.0), region2::s_pt(30.0, 700.0));
        let critical = (region3::h_rho_t(500.0, 650.0), region3::s_rho_t(500.0, 650.0));
        let wet = (region4::h_tx(500.0, 0.3), region4::s_tx(500.0, 0.3));

        assert_eq!(resolve(EnthalpyEntropy, liquid.0, liquid.1), Some(Region::R1));
        assert_eq!(resolve(EnthalpyEntropy, vapor.0, vapor.1), Some(Region::R2));
        assert_eq!(resolve(EnthalpyEntropy, dense.0, dense.1), Some(Region::R2));
        assert_eq!(resolve(EnthalpyEntropy, critical.0, critical.1), Some(Region::R3));
        assert_eq!(resolve(EnthalpyEntropy, wet.0, wet.1), Some(Region::R4));
        assert_eq!(resolve(EnthalpyEntropy, 1700.0, 3.8), Some(Region::R3));
        assert_eq!(resolve(EnthalpyEntropy, 2800.0, 5.8), Some(Region::R2));

        // Below the triple line and beyond 100 MPa.
        assert_eq!(resolve(EnthalpyEntropy, -10.0, 0.5), None);
        assert_eq!(resolve(EnthalpyEntropy, 4200.0, 6.0), None);
    }

    #[test]
    fn density_temperature() {
        assert_eq!(resolve(DensityTemperature, 500.0, 650.0), Some(Region::R3));
        assert_eq!(resolve(DensityTemperature, 200.0, 650.0), Some(Region::R3));
        assert_eq!(resolve(DensityTemperature, 500.0, 750.0), Some(Region::R3));

        // Inside the dome at 630 K, below B23, and outside the temperature band.
        assert_eq!(resolve(DensityTemperature, 300.0, 630.0), None);
        assert_eq!(resolve(DensityTemperature, 50.0, 700.0), None);
        assert_eq!(resolve(DensityTemperature, 500.0, 600.0), None);
        assert_eq!(resolve(DensityTemperature, -1.0, 650.0), None);
    }

    proptest! {
        #[test]
        fn saturation_curve_separates_liquid_from_vapor(
            t in T_MIN..T_13,
            factor in 1.001_f64..1.5,
        ) {
            let p_sat = region4::p_sat(t);
            prop_assert_eq!(resolve(PressureTemperature, p_sat * factor, t), Some(Region::R1));
            prop_assert_eq!(resolve(PressureTemperature, p_sat / factor, t), Some(Region::R2));
        }

        #[test]
        fn b23_separates_region_3_from_region_2(
            t in (T_13 + 0.01)..T_23_MAX,
            offset in 0.01_f64..1.0,
        ) {
            let p_b23 = boundary::b23_p(t);
            prop_assert_eq!(resolve(PressureTemperature, p_b23 - offset, t), Some(Region::R2));
            let above = resolve(PressureTemperature, (p_b23 + offset).min(P_MAX), t);
            prop_assert!(matches!(above, Some(Region::R3 | Region::R4)));
        }

        #[test]
        fn quality_outside_unit_interval_is_rejected(
            t in T_MIN..T_CRIT,
            x in prop_oneof![-10.0_f64..-1e-9, (1.0_f64 + 1e-9)..10.0],
        ) {
            prop_assert_eq!(resolve(TemperatureQuality, t, x), None);
        }
    }
}
