use super::ThermoModel;

/// Capability for constructing a state from a typed input.
///
/// `StateFrom<Input>` expresses, at compile time, which combinations of
/// inputs a model can use to construct a state.
/// If a model does not implement `StateFrom<Input>`, then that input is simply
/// not supported.
///
/// Implementing an input pair does not mean every value of it is accepted.
/// A model may still reject values outside its range, or values that fall in
/// a part of its domain the pair cannot reach, through [`Self::Error`].
///
/// ## Common input patterns
///
/// Inputs are represented as plain Rust tuples of [`uom`] quantities:
/// - `(Pressure, ThermodynamicTemperature)` (pressure + temperature)
/// - `(Pressure, SpecificEnthalpy)` (pressure + enthalpy)
/// - `(Pressure, SpecificEntropy)` (pressure + entropy)
/// - `(ThermodynamicTemperature, Ratio)` (saturation temperature + quality)
pub trait StateFrom<Input>: ThermoModel {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Create a thermodynamic state from the provided input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the state cannot be created from `input`.
    fn state_from(&self, input: Input) -> Result<Self::State, Self::Error>;
}
