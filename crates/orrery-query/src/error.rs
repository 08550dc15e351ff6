//! Query error types.

/// Errors raised for inputs that cannot produce meaningful geometry.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum QueryError {
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
