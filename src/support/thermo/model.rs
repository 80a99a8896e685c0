//! Thermodynamic property models.

pub mod if97;

pub use if97::If97;
