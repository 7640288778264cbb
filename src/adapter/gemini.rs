//! The request builder and response extraction for the Gemini-style
//! `generateContent` endpoint.
//!
//! Building is a pure transformation: an ordered [`ContentPart`] sequence plus
//! the per-call [`GenOptions`] become one `WebRequestData`. Extraction is the
//! mirror: the first inline-image part of the response's candidate envelope
//! becomes one [`GeneratedImage`].

use crate::adapter::WebRequestData;
use crate::r#gen::{ContentPart, GenOptions, GeneratedImage, ImageAsset};
use crate::{Error, ModelIden, Result, ServiceTarget};
use serde_json::{Value, json};
use value_ext::JsonValueExt;

/// Endpoint base for the hosted generation API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";

/// Substituted when the caller passes a blank pose/scene instruction.
pub const DEFAULT_POSE_INSTRUCTION: &str = "natural studio pose";

/// Label texts; each must precede the image it describes (wire contract).
pub const MODEL_IMAGE_LABEL: &str = "Model image (the person):";
pub const PRODUCT_IMAGE_LABEL: &str = "Product image (the item to wear):";

/// Fixed fidelity directive appended to every composite command.
pub const FIDELITY_DIRECTIVE: &str = "Render the product exactly as shown, without altering its \
	shape, colors, materials, or markings, and keep the model's identity unchanged.";

/// Role and fidelity rules for composite generation: the product's appearance
/// is authoritative, the model's identity comes from the first image, the pose
/// follows the free-text instruction.
pub const COMPOSITE_SYSTEM_INSTRUCTION: &str = "\
You are a virtual try-on compositor for an e-commerce studio. \
You receive a photo of a model and a photo of a product, and you produce one \
photorealistic image of that model wearing or presenting that product. \
The product image is authoritative: never redesign, recolor, or restyle the product. \
Preserve the identity, face, and body of the person from the model image. \
Pose, framing, and scene follow the user's instruction.";

// region:    --- Parts Builders

/// The ordered parts for one composite-generation request:
/// model label, model image, product label, product image, trailing command.
pub fn composite_parts(model_image: &ImageAsset, product_image: &ImageAsset, instruction: &str) -> Vec<ContentPart> {
	let instruction = if instruction.trim().is_empty() {
		DEFAULT_POSE_INSTRUCTION
	} else {
		instruction
	};

	vec![
		ContentPart::from_text(MODEL_IMAGE_LABEL),
		ContentPart::from_image(model_image.clone()),
		ContentPart::from_text(PRODUCT_IMAGE_LABEL),
		ContentPart::from_image(product_image.clone()),
		ContentPart::from_text(format!(
			"Create a photorealistic composite of the model wearing the product. \
			Pose and scene: {instruction}. {FIDELITY_DIRECTIVE}"
		)),
	]
}

/// The ordered parts for one refinement-edit request: the image, then the
/// edit instruction. Callers must not pass a blank instruction (not enforced
/// here; the builder stays a pure transformation).
pub fn edit_parts(image: &ImageAsset, instruction: &str) -> Vec<ContentPart> {
	vec![
		ContentPart::from_image(image.clone()),
		ContentPart::from_text(instruction),
	]
}

// endregion: --- Parts Builders

// region:    --- Request Data

pub fn to_composite_request_data(
	target: &ServiceTarget,
	model_image: &ImageAsset,
	product_image: &ImageAsset,
	instruction: &str,
	options: Option<&GenOptions>,
) -> Result<WebRequestData> {
	let parts = composite_parts(model_image, product_image, instruction);
	to_web_request_data(target, parts, Some(COMPOSITE_SYSTEM_INSTRUCTION), options)
}

pub fn to_edit_request_data(
	target: &ServiceTarget,
	image: &ImageAsset,
	instruction: &str,
	options: Option<&GenOptions>,
) -> Result<WebRequestData> {
	let parts = edit_parts(image, instruction);
	to_web_request_data(target, parts, None, options)
}

/// Assemble the final URL and JSON payload for one `generateContent` call.
///
/// Note: This endpoint takes the API key in the URL (`?key=...`), so the
/// credential is resolved here and the headers stay empty.
pub fn to_web_request_data(
	target: &ServiceTarget,
	parts: Vec<ContentPart>,
	system_instruction: Option<&str>,
	options: Option<&GenOptions>,
) -> Result<WebRequestData> {
	let api_key = target.auth.key_value()?;

	let base_url = target.endpoint.base_url();
	let model_name = &target.model.model_name;
	let url = format!("{base_url}models/{model_name}:generateContent?key={api_key}");

	// -- Contents
	let parts_json: Vec<Value> = parts.iter().map(part_to_json).collect();
	let mut payload = json!({
		"contents": [{"role": "user", "parts": parts_json}],
	});

	// -- System instruction (no role; v1beta accepts bare parts)
	if let Some(system) = system_instruction {
		payload.x_insert(
			"systemInstruction",
			json!({
				"parts": [ { "text": system } ]
			}),
		)?;
	}

	// -- Generation config
	payload.x_insert("/generationConfig/responseModalities", json!(["IMAGE", "TEXT"]))?;
	if let Some(aspect_ratio) = options.and_then(|o| o.aspect_ratio) {
		payload.x_insert("/generationConfig/imageConfig/aspectRatio", aspect_ratio.as_str())?;
	}
	if let Some(image_size) = options.and_then(|o| o.image_size) {
		payload.x_insert("/generationConfig/imageConfig/imageSize", image_size.as_str())?;
	}

	tracing::trace!(
		target: "fitgen_gemini",
		"generateContent payload: {}",
		serde_json::to_string(&redacted(&payload)).unwrap_or_else(|e| format!("failed to serialize payload: {e}"))
	);

	let headers = vec![];

	Ok(WebRequestData { url, headers, payload })
}

fn part_to_json(part: &ContentPart) -> Value {
	match part {
		ContentPart::Text(text) => json!({"text": text}),
		ContentPart::Image(asset) => json!({
			"inline_data": {
				"mime_type": &asset.content_type,
				"data": &asset.data
			}
		}),
	}
}

/// Payload clone with inline image data blanked, for trace logging.
fn redacted(payload: &Value) -> Value {
	let mut redacted = payload.clone();
	if let Some(contents) = redacted.get_mut("contents").and_then(Value::as_array_mut) {
		for content in contents {
			if let Some(parts) = content.get_mut("parts").and_then(Value::as_array_mut) {
				for part in parts {
					if let Some(inline_data) = part.get_mut("inline_data").and_then(Value::as_object_mut) {
						inline_data.insert("data".to_string(), Value::String("<redacted>".to_string()));
					}
				}
			}
		}
	}
	redacted
}

// endregion: --- Request Data

// region:    --- Response Extraction

/// Extract exactly one image artifact from a `generateContent` response body.
///
/// Scans the candidates' ordered parts for the first one carrying inline image
/// data, ignoring any accompanying text commentary. A body with a top-level
/// `error` object becomes `Error::RemoteService` (code and message preserved
/// verbatim); a structurally valid body without any image-bearing part becomes
/// `Error::NoImageInResponse`.
pub fn to_gen_response(model_iden: &ModelIden, web_response: crate::webc::WebResponse) -> Result<GeneratedImage> {
	let mut body = web_response.body;

	if body.get("error").is_some() {
		let code: Option<i64> = body.x_get("/error/code").ok();
		let message: String = body.x_get("/error/message").unwrap_or_default();
		return Err(Error::RemoteService {
			model_iden: model_iden.clone(),
			code,
			message,
		});
	}

	let Ok(candidates) = body.x_take::<Vec<Value>>("/candidates") else {
		// Structurally valid response, just nothing generated.
		return Err(Error::NoImageInResponse {
			model_iden: model_iden.clone(),
		});
	};

	for mut candidate_json in candidates {
		let Ok(parts) = candidate_json.x_take::<Vec<Value>>("/content/parts") else {
			continue;
		};
		for mut part_json in parts {
			// The service emits camelCase; accept snake_case as well.
			let inline_data = part_json
				.x_take::<Value>("inlineData")
				.or_else(|_| part_json.x_take::<Value>("inline_data"));
			if let Ok(mut inline_data) = inline_data {
				let content_type = inline_data
					.x_take::<String>("mimeType")
					.or_else(|_| inline_data.x_take::<String>("mime_type"))?;
				let data = inline_data.x_take::<String>("data")?;
				return Ok(GeneratedImage::from_inline(content_type, &data));
			}
		}
	}

	Err(Error::NoImageInResponse {
		model_iden: model_iden.clone(),
	})
}

// endregion: --- Response Extraction
