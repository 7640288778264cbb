//! The two inbound operations, generic over the [`Transport`] so tests can run
//! them against a fake endpoint. [`crate::Client`] wraps these with its own
//! `WebClient`.

use crate::adapter::gemini;
use crate::client::ClientConfig;
use crate::exec::{Transport, invoke};
use crate::r#gen::{GenOptions, GeneratedImage, ImageAsset};
use crate::resolver::AuthData;
use crate::Result;

/// Composite generation: model photo + product photo + pose/scene instruction
/// produce one composite image.
///
/// A blank `instruction` is substituted with the default neutral pose. A blank
/// `api_key` fails with `Error::MissingApiKey` before any network call.
pub async fn generate_composite(
	transport: &impl Transport,
	config: &ClientConfig,
	model_image: &ImageAsset,
	product_image: &ImageAsset,
	instruction: &str,
	options: Option<&GenOptions>,
	api_key: &str,
) -> Result<GeneratedImage> {
	let target = config.service_target(AuthData::from_key(api_key));
	let request_data = gemini::to_composite_request_data(&target, model_image, product_image, instruction, options)?;
	invoke(transport, &target.model, &request_data, config.retry_policy).await
}

/// Refinement edit: one existing image + a free-text edit instruction produce
/// one edited image. Callers must not pass a blank instruction.
pub async fn edit_image(
	transport: &impl Transport,
	config: &ClientConfig,
	image: &ImageAsset,
	instruction: &str,
	options: Option<&GenOptions>,
	api_key: &str,
) -> Result<GeneratedImage> {
	let target = config.service_target(AuthData::from_key(api_key));
	let request_data = gemini::to_edit_request_data(&target, image, instruction, options)?;
	invoke(transport, &target.model, &request_data, config.retry_policy).await
}
