use reqwest::StatusCode;
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Providers
-------------------------------------------------------------------------------------------------*/

/// The remote API a request was addressed to. Carried in every request error so a failed run
/// identifies which provider rejected it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Provider {
    DigitalOcean,
    AwsIpRanges,
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provider::DigitalOcean => write!(f, "DigitalOcean"),
            Provider::AwsIpRanges => write!(f, "AWS IP Ranges"),
        }
    }
}

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Error type used throughout the crate. None of these are recovered locally: every variant
/// propagates to the caller and aborts the remaining synchronization stages.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A provider responded with a non-success HTTP status. The response body is retained for
    /// diagnosis.
    #[error("{provider} returned HTTP {status}: {body}")]
    Remote {
        provider: Provider,
        status: StatusCode,
        body: String,
    },

    /// A network-level failure (DNS, connection, timeout) before a response was received.
    #[error("{provider} request failed: {source}")]
    Transport {
        provider: Provider,
        source: reqwest::Error,
    },

    /// A provider response body that does not parse as the expected JSON document.
    #[error("{provider} returned invalid JSON: {source}")]
    InvalidJson {
        provider: Provider,
        source: serde_json::Error,
    },

    /// A required configuration value was not supplied via the environment or the builder.
    #[error("required configuration value `{variable}` is not set")]
    MissingConfig { variable: &'static str },

    /// The IP ranges feed contained no prefixes for the requested service. Pushing an empty
    /// allow-list would close the firewall, so the run aborts instead.
    #[error("the AWS IP Ranges feed contains no prefixes for service {service:?}")]
    EmptyPrefixList { service: String },

    /// Failed to write the applied prefixes to a CSV file.
    #[error("failed to write CSV file {path:?}: {source}")]
    Csv { path: PathBuf, source: csv::Error },
}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
