#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required parameter: {0:?}")]
    MissingParameter(&'static str),
    #[error("no value provided for path placeholder {0:?}")]
    UnresolvedPlaceholder(String),
    #[error("path placeholder {name:?} can't be {value:?}")]
    InvalidPathValue { name: String, value: String },
    #[error("invalid endpoint {endpoint:?}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
    #[error("endpoint {0:?} must be a base address without query or fragment")]
    UnsupportedEndpoint(String),
    #[error("unable to parse request address")]
    InvalidAddress(#[source] url::ParseError),
}

pub type Result<T> = std::result::Result<T, Error>;
