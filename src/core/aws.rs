use crate::core::errors::{Error, Provider, Result};
use crate::core::ranges::IpRanges;
use crate::core::utils;
use log::info;

/*-------------------------------------------------------------------------------------------------
  Ranges Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [RangesClient] struct.
///
/// ```
/// let client = firewallsync::RangesClientBuilder::default()
///     .url("https://ip-ranges.amazonaws.com/ip-ranges.json")
///     .timeout(10)
///     .build();
/// ```
///
/// The [RangesClientBuilder::new] method sources initial configuration values from environment
/// variables when set; [RangesClientBuilder::default] ignores the environment.
#[derive(Debug, Clone)]
pub struct RangesClientBuilder {
    url: String,
    timeout: u64,
}

impl Default for RangesClientBuilder {
    fn default() -> Self {
        Self {
            url: "https://ip-ranges.amazonaws.com/ip-ranges.json".to_string(),
            timeout: 30, // seconds
        }
    }
}

impl RangesClientBuilder {
    /// Create a new [RangesClientBuilder], reading initial configuration values from the
    /// `FIREWALLSYNC_RANGES_URL` and `FIREWALLSYNC_TIMEOUT` environment variables when set.
    pub fn new() -> Self {
        let default = RangesClientBuilder::default();

        Self {
            url: utils::get_env_var("FIREWALLSYNC_RANGES_URL", default.url),
            timeout: utils::get_env_var("FIREWALLSYNC_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the URL of the AWS IP Ranges feed; defaults to
    /// `https://ip-ranges.amazonaws.com/ip-ranges.json`.
    pub fn url(&mut self, url: &str) -> &mut Self {
        self.url = url.to_string();
        self
    }

    /// Set the HTTP request timeout (in seconds); defaults to `30` seconds.
    pub fn timeout(&mut self, timeout: u64) -> &mut Self {
        self.timeout = timeout;
        self
    }

    /*-------------------------------------------------------------------------
      Build Method
    -------------------------------------------------------------------------*/

    pub fn build(&self) -> Result<RangesClient> {
        Ok(RangesClient {
            url: self.url.clone(),
            timeout: self.timeout,
            http: utils::http_client(self.timeout, Provider::AwsIpRanges)?,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Ranges Client
-------------------------------------------------------------------------------------------------*/

/// A client that retrieves the AWS IP Ranges feed. Every call downloads the full feed from the
/// URL: there is no cache, no conditional request, and no retry, so a synchronization run always
/// works from the feed's current contents.
#[derive(Debug, Clone)]
pub struct RangesClient {
    url: String,
    timeout: u64,
    http: reqwest::blocking::Client,
}

impl RangesClient {
    /// Create a [RangesClient] with environment-sourced configuration. Equivalent to
    /// `RangesClientBuilder::new().build()`.
    pub fn new() -> Result<Self> {
        RangesClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// The URL the AWS IP Ranges feed is retrieved from.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The HTTP request timeout, in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Get Ranges
    -------------------------------------------------------------------------*/

    /// Download and parse the AWS IP Ranges feed.
    pub fn get_ranges(&self) -> Result<IpRanges> {
        let json = self.get_json()?;
        IpRanges::from_json(&json)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn get_json(&self) -> Result<String> {
        info!("GET {}", self.url);

        let response = self.http.get(&self.url).send().map_err(transport)?;
        let status = response.status();
        let body = response.text().map_err(transport)?;

        if !status.is_success() {
            return Err(Error::Remote {
                provider: Provider::AwsIpRanges,
                status,
                body,
            });
        }

        Ok(body)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn transport(source: reqwest::Error) -> Error {
    Error::Transport {
        provider: Provider::AwsIpRanges,
        source,
    }
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
