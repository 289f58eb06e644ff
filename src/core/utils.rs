use crate::core::errors::{Error, Provider, Result};
use log::{info, warn};
use std::env;
use std::time;

/*-------------------------------------------------------------------------------------------------
  Utilities
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Environment Variable Configuration
--------------------------------------------------------------------------------------*/

/// Get and parse an environment variable value or return a default value.
pub(crate) fn get_env_var<T: std::str::FromStr>(env_var: &str, default: T) -> T {
    env::var(env_var)
        .ok()
        .and_then(|value| {
            value
                .parse::<T>()
                .inspect(|_| info!("Using {}: {}", env_var, value))
                .inspect_err(|_| warn!("Invalid {}: {}", env_var, value))
                .ok()
        })
        .unwrap_or(default)
}

/// Get a non-empty environment variable value.
pub(crate) fn get_env_string(env_var: &str) -> Option<String> {
    env::var(env_var).ok().filter(|value| !value.is_empty())
}

/*--------------------------------------------------------------------------------------
  HTTP Client Construction
--------------------------------------------------------------------------------------*/

/// Build a blocking HTTP client with the configured request timeout.
pub(crate) fn http_client(
    timeout: u64,
    provider: Provider,
) -> Result<reqwest::blocking::Client> {
    reqwest::blocking::Client::builder()
        .timeout(time::Duration::from_secs(timeout))
        .build()
        .map_err(|source| Error::Transport { provider, source })
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
