use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P2, Z0},
};

/// Specific enthalpy, stored in J/kg.
///
/// Shares its dimension with [`uom::si::f64::AvailableEnergy`], so the
/// `available_energy` units (such as `kilojoule_per_kilogram`) apply.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Specific entropy, stored in J/(kg·K).
///
/// Shares its dimension with [`uom::si::f64::SpecificHeatCapacity`].
pub type SpecificEntropy = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

/// Specific internal energy, stored in J/kg.
pub type SpecificInternalEnergy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
