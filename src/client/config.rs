use crate::adapter::gemini;
use crate::client::ServiceTarget;
use crate::exec::RetryPolicy;
use crate::resolver::{AuthData, Endpoint};
use crate::ModelIden;

/// The generation model used when the builder does not override it.
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash-image";

/// Client-level configuration: target model, endpoint, and the retry ceiling
/// applied to every invocation. Credentials are deliberately NOT part of the
/// config; they are presented per call.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub model: ModelIden,
	pub endpoint: Endpoint,
	pub retry_policy: RetryPolicy,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			model: ModelIden::new(DEFAULT_MODEL),
			endpoint: Endpoint::from_static(gemini::DEFAULT_BASE_URL),
			retry_policy: RetryPolicy::default(),
		}
	}
}

impl ClientConfig {
	/// The target for one invocation, pairing this config with a fresh credential.
	#[must_use]
	pub fn service_target(&self, auth: AuthData) -> ServiceTarget {
		ServiceTarget {
			endpoint: self.endpoint.clone(),
			auth,
			model: self.model.clone(),
		}
	}
}
