//! # Twine Steam
//!
//! IAPWS-IF97 water and steam properties, and steam models built on them,
//! for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: Domain-specific [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models, including the
//!   [`If97`](support::thermo::model::If97) property model.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.
//!
//! Utility code starts in a model's internal `core` module, and moves to
//! [`support`] once more than one model needs it.
//! Model-specific utility code remains private.

pub mod models;
pub mod support;
