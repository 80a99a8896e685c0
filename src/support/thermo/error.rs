use thiserror::Error;

/// Errors that may occur when constructing states or evaluating properties.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// The inputs lie outside every region covered by the model.
    ///
    /// For example, a pressure above 100 MPa or a temperature below 273.15 K.
    #[error("out of range: {context}")]
    OutOfRange { context: String },

    /// The inputs identify a valid state, but this entry point or property
    /// does not support it.
    ///
    /// For example, the vapor quality of a near-critical state.
    #[error("unsupported: {context}")]
    Unsupported { context: String },
}
