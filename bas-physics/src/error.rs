use std::fmt;

/// Errors from the checked entry points.
///
/// The per-frame update never fails; these only come out of construction and config loading.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// A size component was negative, or a position/size component wasn't finite.
    InvalidEntityConfiguration { reason: &'static str },
    /// The physics config couldn't be parsed or failed validation.
    Config(String),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhysicsError::InvalidEntityConfiguration { reason } => {
                write!(f, "invalid entity configuration: {}", reason)
            }
            PhysicsError::Config(msg) => write!(f, "invalid physics config: {}", msg),
        }
    }
}

impl std::error::Error for PhysicsError {}

impl From<serde_json::Error> for PhysicsError {
    fn from(err: serde_json::Error) -> Self {
        PhysicsError::Config(err.to_string())
    }
}
