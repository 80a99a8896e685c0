//! Water and steam property modeling for the Twine framework.
//!
//! Models expose what they can do through the traits in [`capability`]:
//! [`StateFrom`](capability::StateFrom) for the input pairs a state can be
//! built from, and one `Has*` trait per property that can be queried.

mod error;

pub mod capability;
pub mod model;

pub use error::PropertyError;
