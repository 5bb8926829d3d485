mod resolver;

pub use resolver::PhotoResolver;

/// Result of a single photo resolution. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    Generated(String),
    /// The provider failed or returned nothing; use the fallback.
    Unavailable,
    /// No provider credential is provisioned.
    NotConfigured,
}

impl GenerationOutcome {
    pub fn url(&self) -> Option<&str> {
        match self {
            GenerationOutcome::Generated(url) => Some(url),
            _ => None,
        }
    }
}
