//! Turbomachinery models for water and steam.

pub mod expander;

pub use expander::{Expander, ExpanderInput, ExpanderOutput};
