//! Mesh error types.

/// Errors raised when shape parameters cannot describe a sphere.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MeshError {
    /// A parameter lies outside its valid domain.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// What the value must satisfy.
        reason: &'static str,
    },
}
