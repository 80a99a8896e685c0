use uom::si::f64::{MassDensity, Pressure, Ratio, SpecificVolume, ThermodynamicTemperature};

use crate::support::thermo::PropertyError;
use crate::support::units::{SpecificEnthalpy, SpecificEntropy, SpecificInternalEnergy};

use super::ThermoModel;

pub trait HasPressure: ThermoModel {
    /// Returns the pressure for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the pressure cannot be calculated.
    fn pressure(&self, state: &Self::State) -> Result<Pressure, PropertyError>;
}

pub trait HasTemperature: ThermoModel {
    /// Returns the temperature for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the temperature cannot be calculated.
    fn temperature(&self, state: &Self::State) -> Result<ThermodynamicTemperature, PropertyError>;
}

pub trait HasQuality: ThermoModel {
    /// Returns the vapor mass fraction for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the quality is not defined for the state.
    fn quality(&self, state: &Self::State) -> Result<Ratio, PropertyError>;
}

pub trait HasDensity: ThermoModel {
    /// Returns the density for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the density cannot be calculated.
    fn density(&self, state: &Self::State) -> Result<MassDensity, PropertyError>;
}

pub trait HasSpecificVolume: ThermoModel {
    /// Returns the specific volume for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the specific volume cannot be calculated.
    fn specific_volume(&self, state: &Self::State) -> Result<SpecificVolume, PropertyError>;
}

pub trait HasInternalEnergy: ThermoModel {
    /// Returns the specific internal energy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the internal energy cannot be calculated.
    fn internal_energy(&self, state: &Self::State)
    -> Result<SpecificInternalEnergy, PropertyError>;
}

pub trait HasEnthalpy: ThermoModel {
    /// Returns the specific enthalpy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the enthalpy cannot be calculated.
    fn enthalpy(&self, state: &Self::State) -> Result<SpecificEnthalpy, PropertyError>;
}

pub trait HasEntropy: ThermoModel {
    /// Returns the specific entropy for the given state.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] if the entropy cannot be calculated.
    fn entropy(&self, state: &Self::State) -> Result<SpecificEntropy, PropertyError>;
}
