//! Steam expander model.
//!
//! [`Expander`] takes an IF97 inlet state and an outlet pressure, and
//! produces the outlet state and the specific work extracted.
//! The computational core is in the internal `core` module.

mod core;

use twine_core::Model;
use uom::si::{
    f64::{Pressure, Ratio},
    pressure::megapascal,
};

use crate::support::{
    constraint::{Constrained, Constraint, StrictlyPositive, UnitInterval},
    thermo::{
        PropertyError,
        capability::HasEnthalpy,
        model::if97::{If97, State},
    },
    units::SpecificEnthalpy,
};

/// An adiabatic steam expander with a fixed isentropic efficiency.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Expander {
    efficiency: Constrained<Ratio, UnitInterval>,
}

/// Inlet conditions for an [`Expander`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpanderInput {
    pub inlet: State,
    pub outlet_pressure: Pressure,
}

/// Result of an [`Expander`] call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExpanderOutput {
    pub outlet: State,
    /// Specific work extracted, `h_in − h_out`.
    pub work: SpecificEnthalpy,
}

impl Expander {
    /// Creates an expander with the given isentropic efficiency.
    #[must_use]
    pub fn new(efficiency: Constrained<Ratio, UnitInterval>) -> Self {
        Self { efficiency }
    }

    /// Creates an ideal expander with unit efficiency.
    #[must_use]
    pub fn isentropic() -> Self {
        Self::new(UnitInterval::one())
    }

    /// Returns the isentropic efficiency.
    #[must_use]
    pub fn efficiency(&self) -> Ratio {
        self.efficiency.into_inner()
    }
}

impl Default for Expander {
    fn default() -> Self {
        Self::isentropic()
    }
}

impl Model for Expander {
    type Input = ExpanderInput;
    type Output = ExpanderOutput;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let ExpanderInput {
            inlet,
            outlet_pressure,
        } = *input;

        StrictlyPositive::check(&outlet_pressure.get::<megapascal>()).map_err(|error| {
            PropertyError::OutOfRange {
                context: format!("expander outlet pressure {outlet_pressure:?}: {error}"),
            }
        })?;

        let outlet = core::expand_with_efficiency(&inlet, outlet_pressure, self.efficiency())?;
        let work = If97.enthalpy(&inlet)? - If97.enthalpy(&outlet)?;

        Ok(ExpanderOutput { outlet, work })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        available_energy::kilojoule_per_kilogram, f64::ThermodynamicTemperature, ratio::ratio,
        thermodynamic_temperature::kelvin,
    };

    use crate::support::thermo::capability::StateFrom;

    fn input(p_in: f64, t_in: f64, p_out: f64) -> Result<ExpanderInput, PropertyError> {
        let inlet = If97.state_from((
            Pressure::new::<megapascal>(p_in),
            ThermodynamicTemperature::new::<kelvin>(t_in),
        ))?;
        Ok(ExpanderInput {
            inlet,
            outlet_pressure: Pressure::new::<megapascal>(p_out),
        })
    }

    #[test]
    fn work_is_the_enthalpy_drop() -> Result<(), PropertyError> {
        let input = input(10.0, 800.0, 1.0)?;
        let output = Expander::default().call(&input)?;

        let h_in = If97.enthalpy(&input.inlet)?;
        let h_out = If97.enthalpy(&output.outlet)?;
        assert_relative_eq!(
            output.work.get::<kilojoule_per_kilogram>(),
            (h_in - h_out).get::<kilojoule_per_kilogram>()
        );
        assert!(output.work.get::<kilojoule_per_kilogram>() > 0.0);
        Ok(())
    }

    #[test]
    fn lower_efficiency_extracts_less_work() -> Result<(), PropertyError> {
        let input = input(10.0, 800.0, 1.0)?;

        let ideal = Expander::isentropic().call(&input)?;
        let efficiency = UnitInterval::new(Ratio::new::<ratio>(0.85))
            .map_err(|error| PropertyError::OutOfRange {
                context: error.to_string(),
            })?;
        let real = Expander::new(efficiency).call(&input)?;

        assert_relative_eq!(
            real.work.get::<kilojoule_per_kilogram>(),
            0.85 * ideal.work.get::<kilojoule_per_kilogram>(),
            max_relative = 1e-4
        );
        Ok(())
    }

    #[test]
    fn non_positive_outlet_pressure_is_rejected() -> Result<(), PropertyError> {
        let input = input(10.0, 800.0, 0.0)?;
        assert!(matches!(
            Expander::default().call(&input),
            Err(PropertyError::OutOfRange { .. })
        ));
        Ok(())
    }
}
