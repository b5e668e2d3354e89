//! Error types for the Pokédex

use thiserror::Error;

/// Main error type for catalog operations
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure (connect, timeout, reading the body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("Endpoint returned status {0}")]
    Status(u16),

    /// The GraphQL response carried one or more errors
    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The GraphQL response had neither data nor errors
    #[error("Response contained no data for {0}")]
    MissingData(&'static str),

    /// A detail lookup was requested without an id or a name
    #[error("Detail lookup needs an id or a name")]
    MissingDetailKey,

    /// Response body was not a GraphQL envelope of the expected shape
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type alias using PokedexError
pub type PokedexResult<T> = Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PokedexError::Status(502);
        assert_eq!(format!("{}", err), "Endpoint returned status 502");
    }

    #[test]
    fn test_graphql_errors_are_joined() {
        let err = PokedexError::GraphQl(vec!["first".into(), "second".into()]);
        assert_eq!(err.to_string(), "GraphQL error: first; second");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: PokedexError = serde_err.into();
        assert!(matches!(err, PokedexError::Serialization(_)));
    }
}
