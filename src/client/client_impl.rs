use crate::client::{ClientBuilder, ClientConfig};
use crate::exec;
use crate::r#gen::{GenOptions, GeneratedImage, ImageAsset};
use crate::webc::WebClient;
use crate::Result;
use std::sync::Arc;

/// The `fitgen` client. Cheap to clone; all state is behind an `Arc`.
///
/// Each exec call is one full invocation: it runs to a terminal success or
/// failure (including retries) before returning, and nothing is shared between
/// invocations except the underlying HTTP connection pool.
#[derive(Debug, Clone, Default)]
pub struct Client {
	inner: Arc<ClientInner>,
}

#[derive(Debug, Default)]
struct ClientInner {
	config: ClientConfig,
	web_client: WebClient,
}

/// Constructors
impl Client {
	#[must_use]
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	pub(crate) fn from_parts(config: ClientConfig, web_client: WebClient) -> Self {
		Self {
			inner: Arc::new(ClientInner { config, web_client }),
		}
	}
}

/// Getters
impl Client {
	#[must_use]
	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}
}

/// Exec
impl Client {
	/// Generate one composite image of `model_image`'s person wearing/presenting
	/// `product_image`'s product, posed per `instruction` (blank instruction
	/// falls back to a neutral studio pose).
	///
	/// Returns a `data:image/png;base64,..` artifact, or the terminal error of
	/// the invocation. Fails with `Error::MissingApiKey` before any network
	/// call when `api_key` is blank.
	pub async fn exec_generate_composite(
		&self,
		model_image: &ImageAsset,
		product_image: &ImageAsset,
		instruction: &str,
		options: Option<&GenOptions>,
		api_key: &str,
	) -> Result<GeneratedImage> {
		exec::generate_composite(
			&self.inner.web_client,
			&self.inner.config,
			model_image,
			product_image,
			instruction,
			options,
			api_key,
		)
		.await
	}

	/// Apply a free-text edit `instruction` to an existing `image`.
	/// Same credential precondition as [`Self::exec_generate_composite`];
	/// callers must not pass a blank instruction.
	pub async fn exec_edit_image(
		&self,
		image: &ImageAsset,
		instruction: &str,
		options: Option<&GenOptions>,
		api_key: &str,
	) -> Result<GeneratedImage> {
		exec::edit_image(&self.inner.web_client, &self.inner.config, image, instruction, options, api_key).await
	}
}
