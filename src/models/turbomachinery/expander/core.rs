//! Expansion of an IF97 state to a lower pressure.

use uom::si::f64::{Pressure, Ratio};

use crate::support::thermo::{
    PropertyError,
    capability::{HasEnthalpy, HasEntropy, StateFrom},
    model::if97::{If97, Region, State},
};

/// Expands `inlet` at constant entropy to `p_out`.
///
/// # Errors
///
/// Returns [`PropertyError::Unsupported`] if `inlet` is a region 5 state, and
/// propagates any error from building the outlet state.
pub(crate) fn expand(inlet: &State, p_out: Pressure) -> Result<State, PropertyError> {
    if inlet.region() == Region::R5 {
        return Err(PropertyError::Unsupported {
            context: format!("expansion from {}", Region::R5),
        });
    }

    let s_in = If97.entropy(inlet)?;
    If97.state_from((p_out, s_in))
}

/// Expands `inlet` to `p_out` with isentropic efficiency `eta`.
///
/// The outlet enthalpy is `h_in − η·(h_in − h_s)`, where `h_s` is the
/// enthalpy of the constant-entropy outlet. `eta` is not bounded here, so
/// values outside `[0, 1]` extrapolate.
///
/// # Errors
///
/// Returns the errors of [`expand`], and any error from building the outlet
/// state at the corrected enthalpy.
pub(crate) fn expand_with_efficiency(
    inlet: &State,
    p_out: Pressure,
    eta: Ratio,
) -> Result<State, PropertyError> {
    let ideal = expand(inlet, p_out)?;

    let h_in = If97.enthalpy(inlet)?;
    let h_ideal = If97.enthalpy(&ideal)?;
    let h_out = h_in - (h_in - h_ideal) * eta;

    If97.state_from((p_out, h_out))
}
