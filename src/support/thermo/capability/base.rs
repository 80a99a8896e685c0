/// A thermodynamic property model.
///
/// A model owns the representation of its states. Which inputs can build a
/// state is expressed through [`StateFrom`](super::StateFrom), and which
/// properties can be read back through the `Has*` capability traits.
pub trait ThermoModel {
    type State;
}
