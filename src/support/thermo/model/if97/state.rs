use tracing::debug;

use crate::support::thermo::PropertyError;

use super::{
    equations::{T_CRIT, T_MIN, region1, region2, region3, region4},
    region::{InputPair, Region, resolve},
};

/// A water or steam state in one IAPWS-IF97 region.
///
/// A state stores its region and two canonical coordinates whose meaning
/// depends on that region:
///
/// - Regions 1, 2 and 5: pressure (MPa) and temperature (K)
/// - Region 3: density (kg/m³) and temperature (K)
/// - Region 4: temperature (K) and vapor quality
///
/// States are immutable and can only be built through the [`If97`] model,
/// so every `State` lies inside the formulation.
/// Properties are recomputed from the coordinates on every query.
///
/// [`If97`]: super::If97
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    region: Region,
    a: f64,
    b: f64,
}

impl State {
    fn new(region: Region, a: f64, b: f64) -> Self {
        Self { region, a, b }
    }

    /// Returns the region this state lies in.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Returns the two canonical coordinates in IF97 native units.
    pub(crate) fn coordinates(&self) -> (f64, f64) {
        (self.a, self.b)
    }

    /// A two-phase state at saturation temperature `t`.
    ///
    /// Temperatures from a saturation equation may overshoot the ends of the
    /// curve by rounding, so they are clamped onto it.
    fn mixture(t: f64, x: f64) -> Self {
        Self::new(Region::R4, t.clamp(T_MIN, T_CRIT), x)
    }

    pub(crate) fn from_pt(p: f64, t: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::PressureTemperature;
        match resolve(kind, p, t) {
            Some(region @ (Region::R1 | Region::R2 | Region::R5)) => Ok(Self::new(region, p, t)),
            Some(region) => Err(unsupported(kind, p, t, region)),
            None => Err(out_of_range(kind, p, t)),
        }
    }

    pub(crate) fn from_tx(t: f64, x: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::TemperatureQuality;
        resolve(kind, t, x).ok_or_else(|| out_of_range(kind, t, x))?;
        Ok(Self::mixture(t, x))
    }

    pub(crate) fn from_px(p: f64, x: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::PressureQuality;
        resolve(kind, p, x).ok_or_else(|| out_of_range(kind, p, x))?;
        Ok(Self::mixture(region4::t_sat(p), x))
    }

    pub(crate) fn from_ph(p: f64, h: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::PressureEnthalpy;
        match resolve(kind, p, h).ok_or_else(|| out_of_range(kind, p, h))? {
            Region::R1 => Ok(Self::new(Region::R1, p, region1::t_ph(p, h))),
            Region::R2 => Ok(Self::new(Region::R2, p, region2::t_ph(p, h))),
            Region::R3 => Ok(Self::new(
                Region::R3,
                1.0 / region3::v_ph(p, h),
                region3::t_ph(p, h),
            )),
            Region::R4 => {
                let t = region4::t_sat(p);
                Ok(Self::mixture(t, region4::x_th(t, h).clamp(0.0, 1.0)))
            }
            Region::R5 => Err(unsupported(kind, p, h, Region::R5)),
        }
    }

    pub(crate) fn from_ps(p: f64, s: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::PressureEntropy;
        match resolve(kind, p, s).ok_or_else(|| out_of_range(kind, p, s))? {
            Region::R1 => Ok(Self::new(Region::R1, p, region1::t_ps(p, s))),
            Region::R2 => Ok(Self::new(Region::R2, p, region2::t_ps(p, s))),
            Region::R3 => Ok(Self::new(
                Region::R3,
                1.0 / region3::v_ps(p, s),
                region3::t_ps(p, s),
            )),
            Region::R4 => {
                let t = region4::t_sat(p);
                Ok(Self::mixture(t, region4::x_ts(t, s).clamp(0.0, 1.0)))
            }
            Region::R5 => Err(unsupported(kind, p, s, Region::R5)),
        }
    }

    /// Builds a state from enthalpy and entropy in two stages.
    ///
    /// See [`HsReduction`] for the first stage.
    ///
    /// Chaining two backward equations makes this path looser than the
    /// single-hop pairs. Temperature agrees with the forward state to about
    /// 1e-4 relative. Pressure agrees to about 1e-4 in region 2 and 1e-3 in
    /// region 3. In region 1 the `p(h, s)` equation is only good to a few
    /// pascals, so below about 1 MPa the relative pressure error reaches 1e-2.
    pub(crate) fn from_hs(h: f64, s: f64) -> Result<Self, PropertyError> {
        match HsReduction::new(h, s)? {
            HsReduction::Saturated { t } => {
                Ok(Self::mixture(t, region4::x_th(t, h).clamp(0.0, 1.0)))
            }
            HsReduction::SinglePhase { p } => Self::from_ps(p, s),
        }
    }

    pub(crate) fn from_rho_t(rho: f64, t: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::DensityTemperature;
        match resolve(kind, rho, t) {
            Some(Region::R3) => Ok(Self::new(Region::R3, rho, t)),
            _ => {
                let context = format!("{kind} = ({rho}, {t}) is only supported in region 3");
                debug!(%context, "rejected IF97 state");
                Err(PropertyError::Unsupported { context })
            }
        }
    }
}

/// The first stage of building a state from enthalpy and entropy.
///
/// No backward equation goes straight from `(h, s)` to a state's canonical
/// coordinates, so the pair is first reduced to a coordinate that continues
/// along a single-hop path.
#[derive(Debug, Clone, Copy, PartialEq)]
enum HsReduction {
    /// A two-phase mixture at this saturation temperature.
    Saturated { t: f64 },
    /// A single-phase state at this pressure, continued along `(p, s)`.
    SinglePhase { p: f64 },
}

impl HsReduction {
    fn new(h: f64, s: f64) -> Result<Self, PropertyError> {
        let kind = InputPair::EnthalpyEntropy;
        match resolve(kind, h, s).ok_or_else(|| out_of_range(kind, h, s))? {
            Region::R1 => Ok(Self::SinglePhase {
                p: region1::p_hs(h, s),
            }),
            Region::R2 => Ok(Self::SinglePhase {
                p: region2::p_hs(h, s),
            }),
            Region::R3 => Ok(Self::SinglePhase {
                p: region3::p_hs(h, s),
            }),
            Region::R4 => Ok(Self::Saturated {
                t: region4::t_hs(h, s),
            }),
            Region::R5 => Err(unsupported(kind, h, s, Region::R5)),
        }
    }
}

fn out_of_range(kind: InputPair, a: f64, b: f64) -> PropertyError {
    let context = format!("{kind} = ({a}, {b}) is outside every IF97 region");
    debug!(%context, "rejected IF97 state");
    PropertyError::OutOfRange { context }
}

fn unsupported(kind: InputPair, a: f64, b: f64, region: Region) -> PropertyError {
    let context = format!("{kind} = ({a}, {b}) lies in {region}, which {kind} cannot build");
    debug!(%context, "rejected IF97 state");
    PropertyError::Unsupported { context }
}
