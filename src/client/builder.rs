use crate::client::{Client, ClientConfig};
use crate::exec::RetryPolicy;
use crate::resolver::Endpoint;
use crate::webc::WebClient;

/// Builder for [`Client`]. All settings have working defaults.
#[derive(Debug, Default)]
pub struct ClientBuilder {
	config: ClientConfig,
	web_client: Option<WebClient>,
}

/// Chainable Setters
impl ClientBuilder {
	#[must_use]
	pub fn with_model(mut self, model: impl Into<std::sync::Arc<str>>) -> Self {
		self.config.model = crate::ModelIden::new(model);
		self
	}

	#[must_use]
	pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
		self.config.endpoint = endpoint;
		self
	}

	#[must_use]
	pub const fn with_retry_policy(mut self, retry_policy: RetryPolicy) -> Self {
		self.config.retry_policy = retry_policy;
		self
	}

	/// Mostly for custom timeouts/proxies via a preconfigured `reqwest::Client`.
	#[must_use]
	pub fn with_web_client(mut self, web_client: WebClient) -> Self {
		self.web_client = Some(web_client);
		self
	}
}

/// Build
impl ClientBuilder {
	#[must_use]
	pub fn build(self) -> Client {
		Client::from_parts(self.config, self.web_client.unwrap_or_default())
	}
}
