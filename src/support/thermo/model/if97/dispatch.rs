//! Property evaluation through per-region equation tables.

use crate::support::thermo::PropertyError;

use super::{
    equations::{region1, region2, region3, region4, region5},
    region::Region,
    state::State,
};

/// A property that can be queried from a [`State`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Property {
    Pressure,
    Temperature,
    Quality,
    SpecificVolume,
    Density,
    InternalEnergy,
    Enthalpy,
    Entropy,
}

type Equation = fn(f64, f64) -> f64;

/// The equations evaluating each property from one region's coordinates.
///
/// `quality` is `None` where vapor quality is not defined.
#[derive(Clone, Copy)]
struct RegionEquations {
    pressure: Equation,
    temperature: Equation,
    quality: Option<Equation>,
    specific_volume: Equation,
    density: Equation,
    internal_energy: Equation,
    enthalpy: Equation,
    entropy: Equation,
}

fn first(a: f64, _: f64) -> f64 {
    a
}

fn second(_: f64, b: f64) -> f64 {
    b
}

fn liquid(_: f64, _: f64) -> f64 {
    0.0
}

fn vapor(_: f64, _: f64) -> f64 {
    1.0
}

fn reciprocal_first(a: f64, _: f64) -> f64 {
    1.0 / a
}

const REGION_1: RegionEquations = RegionEquations {
    pressure: first,
    temperature: second,
    quality: Some(liquid),
    specific_volume: region1::v_pt,
    density: |p, t| 1.0 / region1::v_pt(p, t),
    internal_energy: region1::u_pt,
    enthalpy: region1::h_pt,
    entropy: region1::s_pt,
};

const REGION_2: RegionEquations = RegionEquations {
    pressure: first,
    temperature: second,
    quality: Some(vapor),
    specific_volume: region2::v_pt,
    density: |p, t| 1.0 / region2::v_pt(p, t),
    internal_energy: region2::u_pt,
    enthalpy: region2::h_pt,
    entropy: region2::s_pt,
};

const REGION_3: RegionEquations = RegionEquations {
    pressure: region3::p_rho_t,
    temperature: second,
    quality: None,
    specific_volume: reciprocal_first,
    density: first,
    internal_energy: region3::u_rho_t,
    enthalpy: region3::h_rho_t,
    entropy: region3::s_rho_t,
};

const REGION_4: RegionEquations = RegionEquations {
    pressure: |t, _| region4::p_sat(t),
    temperature: first,
    quality: Some(second),
    specific_volume: region4::v_tx,
    density: |t, x| 1.0 / region4::v_tx(t, x),
    internal_energy: region4::u_tx,
    enthalpy: region4::h_tx,
    entropy: region4::s_tx,
};

const REGION_5: RegionEquations = RegionEquations {
    pressure: first,
    temperature: second,
    quality: Some(vapor),
    specific_volume: region5::v_pt,
    density: |p, t| 1.0 / region5::v_pt(p, t),
    internal_energy: region5::u_pt,
    enthalpy: region5::h_pt,
    entropy: region5::s_pt,
};

fn equations(region: Region) -> RegionEquations {
    match region {
        Region::R1 => REGION_1,
        Region::R2 => REGION_2,
        Region::R3 => REGION_3,
        Region::R4 => REGION_4,
        Region::R5 => REGION_5,
    }
}

/// Evaluates `property` at `state` in IF97 native units.
///
/// # Errors
///
/// Returns [`PropertyError::Unsupported`] for the vapor quality of a
/// region 3 state.
pub(crate) fn get(state: &State, property: Property) -> Result<f64, PropertyError> {
    let region = state.region();
    let table = equations(region);

    let equation = match property {
        Property::Pressure => table.pressure,
        Property::Temperature => table.temperature,
        Property::Quality => table.quality.ok_or_else(|| PropertyError::Unsupported {
            context: format!("vapor quality is not defined in {region}"),
        })?,
        Property::SpecificVolume => table.specific_volume,
        Property::Density => table.density,
        Property::InternalEnergy => table.internal_energy,
        Property::Enthalpy => table.enthalpy,
        Property::Entropy => table.entropy,
    };

    let (a, b) = state.coordinates();
    Ok(equation(a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn compressed_liquid_reference_state() -> Result<(), PropertyError> {
        let state = State::from_pt(3.0, 300.0)?;

        assert_relative_eq!(get(&state, Property::Pressure)?, 3.0);
        assert_relative_eq!(get(&state, Property::Temperature)?, 300.0);
        assert_relative_eq!(get(&state, Property::Quality)?, 0.0);
        assert_relative_eq!(
            get(&state, Property::SpecificVolume)?,
            1.002_151_68e-3,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            get(&state, Property::Density)?,
            1.0 / 1.002_151_68e-3,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            get(&state, Property::Enthalpy)?,
            115.331_273,
            max_relative = 1e-8
        );
        assert_relative_eq!(
            get(&state, Property::Entropy)?,
            0.392_294_792,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn near_critical_pressure_comes_from_density() -> Result<(), PropertyError> {
        let state = State::from_rho_t(500.0, 650.0)?;

        assert_relative_eq!(
            get(&state, Property::Pressure)?,
            25.583_701_8,
            max_relative = 1e-8
        );
        assert_relative_eq!(get(&state, Property::Density)?, 500.0);
        assert_relative_eq!(get(&state, Property::SpecificVolume)?, 1.0 / 500.0);
        assert_relative_eq!(
            get(&state, Property::InternalEnergy)?,
            1_812.262_79,
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn quality_is_unsupported_near_the_critical_point() -> Result<(), PropertyError> {
        let state = State::from_rho_t(500.0, 650.0)?;
        assert!(matches!(
            get(&state, Property::Quality),
            Err(PropertyError::Unsupported { .. })
        ));
        Ok(())
    }

    #[test]
    fn saturated_vapor_pressure() -> Result<(), PropertyError> {
        let state = State::from_tx(300.0, 1.0)?;

        assert_relative_eq!(
            get(&state, Property::Pressure)?,
            3.536_589_41e-3,
            max_relative = 1e-8
        );
        assert_relative_eq!(get(&state, Property::Quality)?, 1.0);
        assert_relative_eq!(
            get(&state, Property::Enthalpy)?,
            region2::h_pt(3.536_589_41e-3, 300.0),
            max_relative = 1e-8
        );
        Ok(())
    }

    #[test]
    fn mixture_properties_are_linear_in_quality() -> Result<(), PropertyError> {
        let t = 450.0;
        let liquid = State::from_tx(t, 0.0)?;
        let vapor = State::from_tx(t, 1.0)?;
        let mixture = State::from_tx(t, 0.4)?;

        for property in [
            Property::SpecificVolume,
            Property::InternalEnergy,
            Property::Enthalpy,
            Property::Entropy,
        ] {
            let expected = 0.6 * get(&liquid, property)? + 0.4 * get(&vapor, property)?;
            assert_relative_eq!(get(&mixture, property)?, expected, max_relative = 1e-12);
        }
        Ok(())
    }

    #[test]
    fn high_temperature_vapor() -> Result<(), PropertyError> {
        let state = State::from_pt(30.0, 2000.0)?;

        assert_relative_eq!(get(&state, Property::Quality)?, 1.0);
        assert_relative_eq!(
            get(&state, Property::Enthalpy)?,
            6_571.226_04,
            max_relative = 1e-8
        );
        Ok(())
    }
}
