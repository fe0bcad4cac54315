use thiserror::Error;

/// Failures surfaced by the persistence layer. Parse failures on load are
/// handled by falling back to defaults and never reach this enum.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage write failed for key `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("could not serialize value for key `{key}`: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;
