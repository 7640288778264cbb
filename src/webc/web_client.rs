use crate::adapter::WebRequestData;
use crate::webc::{Error, Result, WebResponse};
use std::time::Duration;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Thin wrapper over `reqwest::Client` for the single `generateContent`-style POST.
#[derive(Debug, Clone)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

impl Default for WebClient {
	fn default() -> Self {
		Self {
			reqwest_client: reqwest::Client::builder()
				.timeout(DEFAULT_TIMEOUT)
				.build()
				.unwrap_or_default(),
		}
	}
}

/// Constructors
impl WebClient {
	#[must_use]
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		Self { reqwest_client }
	}
}

/// Web methods
impl WebClient {
	/// POST the payload and return the parsed JSON body.
	/// Non-2xx statuses become `Error::ResponseFailedStatus` with the body text preserved.
	pub async fn do_post(&self, request_data: &WebRequestData) -> Result<WebResponse> {
		let WebRequestData { url, headers, payload } = request_data;

		let mut reqwest_builder = self.reqwest_client.post(url).json(payload);
		for (name, value) in headers {
			reqwest_builder = reqwest_builder.header(name, value);
		}

		let response = reqwest_builder.send().await?;

		let status = response.status();
		if !status.is_success() {
			let body = response.text().await.unwrap_or_default();
			return Err(Error::ResponseFailedStatus { status, body });
		}

		let body = response.json::<serde_json::Value>().await?;
		Ok(WebResponse { status, body })
	}
}
