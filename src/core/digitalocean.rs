use crate::core::errors::{Error, Provider, Result};
use crate::core::firewall::{Firewall, FirewallEnvelope, FirewallUpdate};
use crate::core::utils;
use log::info;

/*-------------------------------------------------------------------------------------------------
  Firewall Client Builder
-------------------------------------------------------------------------------------------------*/

/// A builder for the [FirewallClient] struct.
///
/// ```
/// let client = firewallsync::FirewallClientBuilder::default()
///     .token("do-api-token")
///     .firewall_id("fb6045f1-cf1d-4ca3-bfac-18832663025b")
///     .timeout(10)
///     .build();
/// ```
///
/// The [FirewallClientBuilder::new] method sources initial configuration values from environment
/// variables when set; [FirewallClientBuilder::default] ignores the environment. The API token
/// and firewall id have no defaults: [FirewallClientBuilder::build] fails when either is
/// missing, so every constructed client carries its full configuration explicitly.
#[derive(Debug, Clone)]
pub struct FirewallClientBuilder {
    api_url: String,
    token: Option<String>,
    firewall_id: Option<String>,
    timeout: u64,
}

impl Default for FirewallClientBuilder {
    fn default() -> Self {
        Self {
            api_url: "https://api.digitalocean.com/v2/firewalls".to_string(),
            token: None,
            firewall_id: None,
            timeout: 30, // seconds
        }
    }
}

impl FirewallClientBuilder {
    /// Create a new [FirewallClientBuilder], reading initial configuration values from
    /// environment variables when set:
    ///
    /// - `DIGITALOCEAN_TOKEN`
    /// - `DIGITALOCEAN_FIREWALL_ID`
    /// - `FIREWALLSYNC_API_URL`
    /// - `FIREWALLSYNC_TIMEOUT`
    pub fn new() -> Self {
        let default = FirewallClientBuilder::default();

        Self {
            api_url: utils::get_env_var("FIREWALLSYNC_API_URL", default.api_url),
            token: utils::get_env_string("DIGITALOCEAN_TOKEN"),
            firewall_id: utils::get_env_string("DIGITALOCEAN_FIREWALL_ID"),
            timeout: utils::get_env_var("FIREWALLSYNC_TIMEOUT", default.timeout),
        }
    }

    /*-------------------------------------------------------------------------
      Setters
    -------------------------------------------------------------------------*/

    /// Set the base URL of the DigitalOcean firewalls API; defaults to
    /// `https://api.digitalocean.com/v2/firewalls`.
    pub fn api_url(&mut self, api_url: &str) -> &mut Self {
        self.api_url = api_url.to_string();
        self
    }

    /// Set the DigitalOcean API token used for bearer-token authorization.
    pub fn token(&mut self, token: &str) -> &mut Self {
        self.token = Some(token.to_string());
        self
    }

    /// Set the id of the firewall to synchronize.
    pub fn firewall_id(&mut self, firewall_id: &str) -> &mut Self {
        self.firewall_id = Some(firewall_id.to_string());
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

    pub fn build(&self) -> Result<FirewallClient> {
        let token = self.token.clone().ok_or(Error::MissingConfig {
            variable: "DIGITALOCEAN_TOKEN",
        })?;
        let firewall_id = self.firewall_id.clone().ok_or(Error::MissingConfig {
            variable: "DIGITALOCEAN_FIREWALL_ID",
        })?;

        Ok(FirewallClient {
            api_url: self.api_url.clone(),
            token,
            firewall_id,
            timeout: self.timeout,
            http: utils::http_client(self.timeout, Provider::DigitalOcean)?,
        })
    }
}

/*-------------------------------------------------------------------------------------------------
  Firewall Client
-------------------------------------------------------------------------------------------------*/

/// A client for one DigitalOcean firewall: fetches the current rule document and pushes the
/// updated document back. Both operations are authenticated with the configured bearer token.
#[derive(Debug, Clone)]
pub struct FirewallClient {
    api_url: String,
    token: String,
    firewall_id: String,
    timeout: u64,
    http: reqwest::blocking::Client,
}

impl FirewallClient {
    /// Create a [FirewallClient] with environment-sourced configuration. Equivalent to
    /// `FirewallClientBuilder::new().build()`.
    pub fn new() -> Result<Self> {
        FirewallClientBuilder::new().build()
    }

    /*-------------------------------------------------------------------------
      Getters
    -------------------------------------------------------------------------*/

    /// The base URL of the DigitalOcean firewalls API.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// The id of the firewall this client operates on.
    pub fn firewall_id(&self) -> &str {
        &self.firewall_id
    }

    /// The HTTP request timeout, in seconds.
    pub fn timeout(&self) -> u64 {
        self.timeout
    }

    /*-------------------------------------------------------------------------
      Firewall Operations
    -------------------------------------------------------------------------*/

    /// Fetch the firewall's current rule document.
    pub fn get_firewall(&self) -> Result<Firewall> {
        let url = self.firewall_url();
        info!("GET {url}");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(transport)?;

        parse_firewall(read_response(response)?)
    }

    /// Push an updated rule document back to the provider. Returns the provider's
    /// acknowledgement: the firewall document as stored.
    pub fn put_firewall(&self, update: &FirewallUpdate) -> Result<Firewall> {
        let url = self.firewall_url();
        info!("PUT {url}");

        let response = self
            .http
            .put(&url)
            .bearer_auth(&self.token)
            .json(update)
            .send()
            .map_err(transport)?;

        parse_firewall(read_response(response)?)
    }

    /*-------------------------------------------------------------------------
      Private Methods
    -------------------------------------------------------------------------*/

    fn firewall_url(&self) -> String {
        format!("{}/{}", self.api_url, self.firewall_id)
    }
}

/*-------------------------------------------------------------------------------------------------
  Helper Functions
-------------------------------------------------------------------------------------------------*/

fn transport(source: reqwest::Error) -> Error {
    Error::Transport {
        provider: Provider::DigitalOcean,
        source,
    }
}

/// Read a response body, mapping a non-success status to a remote error carrying the body.
fn read_response(response: reqwest::blocking::Response) -> Result<String> {
    let status = response.status();
    let body = response.text().map_err(transport)?;

    if !status.is_success() {
        return Err(Error::Remote {
            provider: Provider::DigitalOcean,
            status,
            body,
        });
    }

    Ok(body)
}

fn parse_firewall(body: String) -> Result<Firewall> {
    let envelope: FirewallEnvelope =
        serde_json::from_str(&body).map_err(|source| Error::InvalidJson {
            provider: Provider::DigitalOcean,
            source,
        })?;
    Ok(envelope.firewall)
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::log_error;
    use crate::core::firewall::tests::{test_firewall, TEST_FIREWALL_JSON};
    use httpmock::prelude::*;
    use std::env;
    use test_log::test;

    /*----------------------------------------------------------------------------------
      Test Helper Functions
    ----------------------------------------------------------------------------------*/

    fn test_client(server: &MockServer) -> FirewallClient {
        FirewallClientBuilder::default()
            .api_url(&server.url("/v2/firewalls"))
            .token("test-token")
            .firewall_id("fb6045f1-cf1d-4ca3-bfac-18832663025b")
            .build()
            .unwrap()
    }

    /*----------------------------------------------------------------------------------
      Test Builder Configuration
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_builder_requires_a_token() {
        let error = FirewallClientBuilder::default()
            .firewall_id("fb6045f1")
            .build()
            .unwrap_err();

        assert!(matches!(
            error,
            Error::MissingConfig {
                variable: "DIGITALOCEAN_TOKEN"
            }
        ));
    }

    #[test]
    fn test_builder_requires_a_firewall_id() {
        let error = FirewallClientBuilder::default()
            .token("test-token")
            .build()
            .unwrap_err();

        assert!(matches!(
            error,
            Error::MissingConfig {
                variable: "DIGITALOCEAN_FIREWALL_ID"
            }
        ));
    }

    #[test]
    fn test_builder_setters() {
        let client = FirewallClientBuilder::default()
            .api_url("https://example.com/v2/firewalls")
            .token("test-token")
            .firewall_id("fb6045f1")
            .timeout(5)
            .build()
            .unwrap();

        assert_eq!(client.api_url(), "https://example.com/v2/firewalls");
        assert_eq!(client.firewall_id(), "fb6045f1");
        assert_eq!(client.timeout(), 5);
    }

    /// ENV_VAR: DIGITALOCEAN_TOKEN
    /// ENV_VAR: DIGITALOCEAN_FIREWALL_ID
    #[test]
    fn test_builder_environment_variable_configuration() {
        let stored_env_vars = [
            ("DIGITALOCEAN_TOKEN", env::var("DIGITALOCEAN_TOKEN")),
            (
                "DIGITALOCEAN_FIREWALL_ID",
                env::var("DIGITALOCEAN_FIREWALL_ID"),
            ),
        ];

        unsafe {
            env::set_var("DIGITALOCEAN_TOKEN", "env-token");
            env::set_var("DIGITALOCEAN_FIREWALL_ID", "env-firewall-id");
        }

        let builder = FirewallClientBuilder::new();
        assert_eq!(builder.token.as_deref(), Some("env-token"));
        assert_eq!(builder.firewall_id.as_deref(), Some("env-firewall-id"));

        for (env_var, value) in stored_env_vars {
            match value {
                Ok(value) => unsafe { env::set_var(env_var, value) },
                Err(_) => unsafe { env::remove_var(env_var) },
            }
        }
    }

    /*----------------------------------------------------------------------------------
      Test Firewall Operations
    ----------------------------------------------------------------------------------*/

    #[test]
    fn test_get_firewall() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v2/firewalls/fb6045f1-cf1d-4ca3-bfac-18832663025b")
                .header("authorization", "Bearer test-token");
            then.status(200)
                .header("content-type", "application/json")
                .body(TEST_FIREWALL_JSON);
        });

        let client = test_client(&server);
        let firewall = client.get_firewall().inspect_err(log_error).unwrap();

        assert_eq!(firewall.name, "public-web");
        assert_eq!(firewall.inbound_rules.len(), 2);
        mock.assert();
    }

    #[test]
    fn test_get_firewall_non_success_status_is_a_remote_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/v2/firewalls/fb6045f1-cf1d-4ca3-bfac-18832663025b");
            then.status(403).body(r#"{"id":"forbidden"}"#);
        });

        let client = test_client(&server);
        let error = client.get_firewall().unwrap_err();

        match error {
            Error::Remote {
                provider,
                status,
                body,
            } => {
                assert_eq!(provider, Provider::DigitalOcean);
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, r#"{"id":"forbidden"}"#);
            }
            other => panic!("expected a remote error, got: {other}"),
        }
    }

    #[test]
    fn test_put_firewall_sends_the_stripped_document() {
        let update = test_firewall().into_update();

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/v2/firewalls/fb6045f1-cf1d-4ca3-bfac-18832663025b")
                .header("authorization", "Bearer test-token")
                .header("content-type", "application/json")
                .json_body(serde_json::to_value(&update).unwrap());
            then.status(200)
                .header("content-type", "application/json")
                .body(TEST_FIREWALL_JSON);
        });

        let client = test_client(&server);
        let acknowledgement = client.put_firewall(&update).inspect_err(log_error).unwrap();

        assert_eq!(acknowledgement.name, "public-web");
        assert_eq!(acknowledgement.status.as_deref(), Some("succeeded"));
        mock.assert();
    }

    #[test]
    fn test_get_firewall_unparsable_body_is_an_invalid_json_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/v2/firewalls/fb6045f1-cf1d-4ca3-bfac-18832663025b");
            then.status(200).body("<html>not json</html>");
        });

        let client = test_client(&server);
        let error = client.get_firewall().unwrap_err();

        assert!(matches!(
            error,
            Error::InvalidJson {
                provider: Provider::DigitalOcean,
                ..
            }
        ));
    }
}
