//! IAPWS-IF97 water and steam property model.
//!
//! `If97` implements the IAPWS Industrial Formulation 1997 for the
//! thermodynamic properties of water and steam.
//!
//! # Coverage
//!
//! - Region 1: compressed liquid, 273.15 K to 623.15 K, up to 100 MPa
//! - Region 2: vapor up to 1073.15 K, bounded above by the B23 curve
//! - Region 3: the near-critical fluid between 623.15 K and the B23 curve
//! - Region 4: liquid-vapor mixtures on the saturation curve
//! - Region 5: vapor from 1073.15 K to 2273.15 K, up to 50 MPa
//!
//! Region 5 uses the 2007 revision of its residual part.
//!
//! # States
//!
//! A [`State`] stores its [`Region`] and the two coordinates native to that
//! region. Every property is recomputed from those coordinates when queried,
//! so states are small `Copy` values that can be shared freely.
//!
//! Not every input pair reaches every region. Pressure and temperature cannot
//! build a region 3 or region 4 state, and density and temperature only build
//! region 3 states. Such inputs fail with [`PropertyError::Unsupported`], while
//! inputs outside the formulation fail with [`PropertyError::OutOfRange`].
//!
//! # Example
//!
//! ```
//! use twine_steam::support::thermo::{
//!     capability::{HasEnthalpy, StateFrom},
//!     model::if97::{If97, Region},
//! };
//! use uom::si::{
//!     available_energy::kilojoule_per_kilogram,
//!     f64::{Pressure, ThermodynamicTemperature},
//!     pressure::megapascal,
//!     thermodynamic_temperature::kelvin,
//! };
//!
//! let state = If97
//!     .state_from((
//!         Pressure::new::<megapascal>(3.0),
//!         ThermodynamicTemperature::new::<kelvin>(300.0),
//!     ))
//!     .unwrap();
//!
//! assert_eq!(state.region(), Region::R1);
//!
//! let h = If97.enthalpy(&state).unwrap();
//! assert!((h.get::<kilojoule_per_kilogram>() - 115.331_273).abs() < 1e-5);
//! ```

mod dispatch;
mod equations;
mod region;
mod state;

use uom::si::{
    available_energy::kilojoule_per_kilogram,
    f64::{MassDensity, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature},
    mass_density::kilogram_per_cubic_meter,
    pressure::megapascal,
    ratio::ratio,
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    specific_volume::cubic_meter_per_kilogram,
    thermodynamic_temperature::kelvin,
};

use crate::support::thermo::{
    PropertyError,
    capability::{
        HasDensity, HasEnthalpy, HasEntropy, HasInternalEnergy, HasPressure, HasQuality,
        HasSpecificVolume, HasTemperature, StateFrom, ThermoModel,
    },
};
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

use dispatch::{Property, get};

pub use region::Region;
pub use state::State;

/// The IAPWS-IF97 model for water and steam.
///
/// The model carries no data. All of its equations are fixed by the
/// formulation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct If97;

impl ThermoModel for If97 {
    type State = State;
}

impl HasPressure for If97 {
    fn pressure(&self, state: &State) -> Result<Pressure, PropertyError> {
        let p = get(state, Property::Pressure)?;
        Ok(Pressure::new::<megapascal>(p))
    }
}

impl HasTemperature for If97 {
    fn temperature(&self, state: &State) -> Result<ThermodynamicTemperature, PropertyError> {
        let t = get(state, Property::Temperature)?;
        Ok(ThermodynamicTemperature::new::<kelvin>(t))
    }
}

impl HasQuality for If97 {
    /// Returns 0 for compressed liquid and 1 for vapor.
    ///
    /// Near-critical states have no quality and yield
    /// [`PropertyError::Unsupported`].
    fn quality(&self, state: &State) -> Result<Ratio, PropertyError> {
        let x = get(state, Property::Quality)?;
        Ok(Ratio::new::<ratio>(x))
    }
}

impl HasDensity for If97 {
    fn density(&self, state: &State) -> Result<MassDensity, PropertyError> {
        let rho = get(state, Property::Density)?;
        Ok(MassDensity::new::<kilogram_per_cubic_meter>(rho))
    }
}

impl HasSpecificVolume for If97 {
    fn specific_volume(&self, state: &State) -> Result<SpecificVolume, PropertyError> {
        let v = get(state, Property::SpecificVolume)?;
        Ok(SpecificVolume::new::<cubic_meter_per_kilogram>(v))
    }
}

impl HasInternalEnergy for If97 {
    fn internal_energy(&self, state: &State) -> Result<SpecificInternalEnergy, PropertyError> {
        let u = get(state, Property::InternalEnergy)?;
        Ok(SpecificInternalEnergy::new::<kilojoule_per_kilogram>(u))
    }
}

impl HasEnthalpy for If97 {
    fn enthalpy(&self, state: &State) -> Result<SpecificEnthalpy, PropertyError> {
        let h = get(state, Property::Enthalpy)?;
        Ok(SpecificEnthalpy::new::<kilojoule_per_kilogram>(h))
    }
}

impl HasEntropy for If97 {
    fn entropy(&self, state: &State) -> Result<SpecificEntropy, PropertyError> {
        let s = get(state, Property::Entropy)?;
        Ok(SpecificEntropy::new::<kilojoule_per_kilogram_kelvin>(s))
    }
}

impl StateFrom<(Pressure, ThermodynamicTemperature)> for If97 {
    type Error = PropertyError;

    /// Builds a region 1, 2 or 5 state.
    fn state_from(
        &self,
        (pressure, temperature): (Pressure, ThermodynamicTemperature),
    ) -> Result<State, Self::Error> {
        State::from_pt(pressure.get::<megapascal>(), temperature.get::<kelvin>())
    }
}

impl StateFrom<(ThermodynamicTemperature, Ratio)> for If97 {
    type Error = PropertyError;

    /// Builds a saturated mixture from its temperature and vapor quality.
    fn state_from(
        &self,
        (temperature, quality): (ThermodynamicTemperature, Ratio),
    ) -> Result<State, Self::Error> {
        State::from_tx(temperature.get::<kelvin>(), quality.get::<ratio>())
    }
}

impl StateFrom<(Pressure, Ratio)> for If97 {
    type Error = PropertyError;

    /// Builds a saturated mixture from its pressure and vapor quality.
    fn state_from(&self, (pressure, quality): (Pressure, Ratio)) -> Result<State, Self::Error> {
        State::from_px(pressure.get::<megapascal>(), quality.get::<ratio>())
    }
}

impl StateFrom<(Pressure, SpecificEnthalpy)> for If97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (pressure, enthalpy): (Pressure, SpecificEnthalpy),
    ) -> Result<State, Self::Error> {
        State::from_ph(
            pressure.get::<megapascal>(),
            enthalpy.get::<kilojoule_per_kilogram>(),
        )
    }
}

impl StateFrom<(Pressure, SpecificEntropy)> for If97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (pressure, entropy): (Pressure, SpecificEntropy),
    ) -> Result<State, Self::Error> {
        State::from_ps(
            pressure.get::<megapascal>(),
            entropy.get::<kilojoule_per_kilogram_kelvin>(),
        )
    }
}

impl StateFrom<(SpecificEnthalpy, SpecificEntropy)> for If97 {
    type Error = PropertyError;

    fn state_from(
        &self,
        (enthalpy, entropy): (SpecificEnthalpy, SpecificEntropy),
    ) -> Result<State, Self::Error> {
        State::from_hs(
            enthalpy.get::<kilojoule_per_kilogram>(),
            entropy.get::<kilojoule_per_kilogram_kelvin>(),
        )
    }
}

impl StateFrom<(MassDensity, ThermodynamicTemperature)> for If97 {
    type Error = PropertyError;

    /// Builds a region 3 state.
    fn state_from(
        &self,
        (density, temperature): (MassDensity, ThermodynamicTemperature),
    ) -> Result<State, Self::Error> {
        State::from_rho_t(
            density.get::<kilogram_per_cubic_meter>(),
            temperature.get::<kelvin>(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::joule_per_kilogram, pressure::pascal,
        specific_heat_capacity::joule_per_kilogram_kelvin,
    };

    fn pt(p: f64, t: f64) -> (Pressure, ThermodynamicTemperature) {
        (
            Pressure::new::<megapascal>(p),
            ThermodynamicTemperature::new::<kelvin>(t),
        )
    }

    #[test]
    fn properties_are_reported_in_si_units() -> Result<(), PropertyError> {
        let state = If97.state_from(pt(3.0, 300.0))?;

        assert_relative_eq!(If97.pressure(&state)?.get::<pascal>(), 3e6);
        assert_relative_eq!(
            If97.enthalpy(&state)?.get::<joule_per_kilogram>(),
            115_331.273,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            If97.entropy(&state)?.get::<joule_per_kilogram_kelvin>(),
            392.294_792,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            If97.specific_volume(&state)?.get::<cubic_meter_per_kilogram>(),
            1.002_151_68e-3,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn density_and_specific_volume_agree() -> Result<(), PropertyError> {
        let state = If97.state_from(pt(0.0035, 700.0))?;

        let rho = If97.density(&state)?.get::<kilogram_per_cubic_meter>();
        let v = If97.specific_volume(&state)?.get::<cubic_meter_per_kilogram>();
        assert_relative_eq!(rho * v, 1.0, max_relative = 1e-12);
        assert_relative_eq!(v, 92.301_589_8, max_relative = 1e-8);
        Ok(())
    }

    #[test]
    fn enthalpy_input_reaches_the_near_critical_region() -> Result<(), PropertyError> {
        let state = If97.state_from((
            Pressure::new::<megapascal>(20.0),
            SpecificEnthalpy::new::<kilojoule_per_kilogram>(1_700.0),
        ))?;

        assert_eq!(state.region(), Region::R3);
        assert_relative_eq!(
            If97.temperature(&state)?.get::<kelvin>(),
            629.308_389_2,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            If97.specific_volume(&state)?.get::<cubic_meter_per_kilogram>(),
            1.749_903_962e-3,
            max_relative = 1e-8
        );
        assert!(matches!(
            If97.quality(&state),
            Err(PropertyError::Unsupported { .. })
        ));
        Ok(())
    }

    #[test]
    fn saturated_states_from_temperature_and_pressure_agree() -> Result<(), PropertyError> {
        let x = Ratio::new::<ratio>(0.3);
        let by_temperature = If97.state_from((ThermodynamicTemperature::new::<kelvin>(450.0), x))?;
        let pressure = If97.pressure(&by_temperature)?;
        let by_pressure = If97.state_from((pressure, x))?;

        assert_eq!(by_pressure.region(), Region::R4);
        assert_relative_eq!(
            If97.temperature(&by_pressure)?.get::<kelvin>(),
            450.0,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            If97.enthalpy(&by_pressure)?.get::<kilojoule_per_kilogram>(),
            If97.enthalpy(&by_temperature)?.get::<kilojoule_per_kilogram>(),
            max_relative = 1e-8
        );
        assert_relative_eq!(If97.quality(&by_pressure)?.get::<ratio>(), 0.3);
        Ok(())
    }

    #[test]
    fn density_input_only_builds_near_critical_states() {
        let input = (
            MassDensity::new::<kilogram_per_cubic_meter>(1_000.0),
            ThermodynamicTemperature::new::<kelvin>(300.0),
        );
        assert!(matches!(
            If97.state_from(input),
            Err(PropertyError::Unsupported { .. })
        ));
    }

    #[test]
    fn pressure_above_the_formulation_is_out_of_range() {
        assert!(matches!(
            If97.state_from(pt(150.0, 500.0)),
            Err(PropertyError::OutOfRange { .. })
        ));
    }

    #[test]
    fn enthalpy_entropy_round_trip() -> Result<(), PropertyError> {
        let state = If97.state_from(pt(10.0, 700.0))?;
        let h = If97.enthalpy(&state)?;
        let s = If97.entropy(&state)?;

        let round_trip = If97.state_from((h, s))?;
        assert_eq!(round_trip.region(), Region::R2);
        assert_relative_eq!(
            If97.pressure(&round_trip)?.get::<megapascal>(),
            10.0,
            max_relative = 1e-4
        );
        assert_relative_eq!(
            If97.temperature(&round_trip)?.get::<kelvin>(),
            700.0,
            max_relative = 1e-4
        );
        Ok(())
    }
}
