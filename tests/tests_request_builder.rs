//! Tests for the request builder: part ordering, default instruction,
//! generation config placement, and response extraction.

mod support;

use fitgen::adapter::gemini;
use fitgen::r#gen::{AspectRatio, ContentPart, GenOptions, ImageAsset, ImageSize};
use fitgen::resolver::AuthData;
use fitgen::webc::WebResponse;
use fitgen::{ClientConfig, Error, ModelIden, ServiceTarget};
use support::{Result, TEST_API_KEY, inline_image_body};

// --- Helpers ---

fn model_asset() -> ImageAsset {
	ImageAsset::new("image/jpeg", "bW9kZWw=")
}

fn product_asset() -> ImageAsset {
	ImageAsset::new("image/png", "cHJvZHVjdA==")
}

fn test_target() -> ServiceTarget {
	ClientConfig::default().service_target(AuthData::from_key(TEST_API_KEY))
}

fn test_model_iden() -> ModelIden {
	ModelIden::new("gemini-2.5-flash-image")
}

fn ok_response(body: serde_json::Value) -> WebResponse {
	WebResponse {
		status: reqwest::StatusCode::OK,
		body,
	}
}

// --- Parts Ordering ---

#[test]
fn test_composite_parts_ordering() -> Result<()> {
	// -- Exec
	let parts = gemini::composite_parts(&model_asset(), &product_asset(), "leaning on a railing");

	// -- Check
	assert_eq!(parts.len(), 5, "composite request must have exactly 5 parts");
	assert_eq!(parts[0].text_as_str(), Some(gemini::MODEL_IMAGE_LABEL));
	assert!(parts[1].is_image(), "model image must follow its label");
	assert_eq!(parts[2].text_as_str(), Some(gemini::PRODUCT_IMAGE_LABEL));
	assert!(parts[3].is_image(), "product image must follow its label");

	let ContentPart::Image(model_part) = &parts[1] else {
		unreachable!()
	};
	assert_eq!(model_part.content_type, "image/jpeg");
	let ContentPart::Image(product_part) = &parts[3] else {
		unreachable!()
	};
	assert_eq!(product_part.content_type, "image/png");

	let command = parts[4].text_as_str().ok_or("trailing part must be text")?;
	assert!(command.contains("leaning on a railing"), "instruction must appear verbatim");
	assert!(command.contains(gemini::FIDELITY_DIRECTIVE), "fidelity directive must be appended");

	Ok(())
}

#[test]
fn test_composite_blank_instruction_uses_default() -> Result<()> {
	for instruction in ["", "   ", "\n\t"] {
		let parts = gemini::composite_parts(&model_asset(), &product_asset(), instruction);
		let command = parts[4].text_as_str().ok_or("trailing part must be text")?;
		assert!(
			command.contains(gemini::DEFAULT_POSE_INSTRUCTION),
			"blank instruction {instruction:?} must fall back to the default pose"
		);
	}

	Ok(())
}

#[test]
fn test_edit_parts_ordering() -> Result<()> {
	// -- Exec
	let parts = gemini::edit_parts(&model_asset(), "warmer lighting");

	// -- Check
	assert_eq!(parts.len(), 2);
	assert!(parts[0].is_image(), "edit request starts with the image");
	assert_eq!(parts[1].text_as_str(), Some("warmer lighting"));

	Ok(())
}

// --- Request Data ---

#[test]
fn test_composite_request_data_payload() -> Result<()> {
	// -- Setup & Fixtures
	let options = GenOptions::default()
		.with_aspect_ratio(AspectRatio::Portrait9x16)
		.with_image_size(ImageSize::Size2K);

	// -- Exec
	let request_data = gemini::to_composite_request_data(
		&test_target(),
		&model_asset(),
		&product_asset(),
		"sitting on a stool",
		Some(&options),
	)?;

	// -- Check
	assert!(
		request_data.url.contains("models/gemini-2.5-flash-image:generateContent"),
		"url was: {}",
		request_data.url
	);
	assert!(request_data.url.ends_with(&format!("?key={TEST_API_KEY}")));

	let payload = &request_data.payload;
	assert_eq!(
		payload.pointer("/contents/0/parts/0/text").and_then(|v| v.as_str()),
		Some(gemini::MODEL_IMAGE_LABEL)
	);
	assert_eq!(
		payload
			.pointer("/contents/0/parts/1/inline_data/mime_type")
			.and_then(|v| v.as_str()),
		Some("image/jpeg")
	);
	assert_eq!(
		payload
			.pointer("/systemInstruction/parts/0/text")
			.and_then(|v| v.as_str()),
		Some(gemini::COMPOSITE_SYSTEM_INSTRUCTION)
	);
	assert_eq!(
		payload
			.pointer("/generationConfig/imageConfig/aspectRatio")
			.and_then(|v| v.as_str()),
		Some("9:16")
	);
	assert_eq!(
		payload
			.pointer("/generationConfig/imageConfig/imageSize")
			.and_then(|v| v.as_str()),
		Some("2K")
	);
	let modalities = payload
		.pointer("/generationConfig/responseModalities")
		.and_then(|v| v.as_array())
		.ok_or("responseModalities must be an array")?;
	assert!(modalities.iter().any(|m| m.as_str() == Some("IMAGE")));

	Ok(())
}

#[test]
fn test_edit_request_data_has_no_system_instruction() -> Result<()> {
	// -- Exec
	let request_data = gemini::to_edit_request_data(&test_target(), &model_asset(), "remove the background", None)?;

	// -- Check
	let payload = &request_data.payload;
	assert!(payload.get("systemInstruction").is_none(), "edit requests carry no system instruction");
	assert!(
		payload.pointer("/contents/0/parts/0/inline_data").is_some(),
		"edit request starts with the image part"
	);
	assert_eq!(
		payload.pointer("/contents/0/parts/1/text").and_then(|v| v.as_str()),
		Some("remove the background")
	);
	assert!(payload.pointer("/generationConfig/imageConfig").is_none());

	Ok(())
}

#[test]
fn test_blank_api_key_fails_before_building() {
	for key in ["", "   ", "\t\n "] {
		let target = ClientConfig::default().service_target(AuthData::from_key(key));
		let res = gemini::to_composite_request_data(&target, &model_asset(), &product_asset(), "pose", None);
		assert!(
			matches!(res, Err(Error::MissingApiKey)),
			"blank key {key:?} must fail with MissingApiKey"
		);
	}
}

#[test]
fn test_api_key_is_trimmed() -> Result<()> {
	let target = ClientConfig::default().service_target(AuthData::from_key("  key-with-spaces \n"));
	let request_data = gemini::to_composite_request_data(&target, &model_asset(), &product_asset(), "pose", None)?;
	assert!(request_data.url.ends_with("?key=key-with-spaces"));

	Ok(())
}

// --- Response Extraction ---

#[test]
fn test_extract_rewraps_as_png() -> Result<()> {
	// The contract: the artifact is always PNG-typed, whatever the service declared.
	let response = ok_response(inline_image_body("image/webp", "aW1hZ2U="));

	// -- Exec
	let image = gemini::to_gen_response(&test_model_iden(), response)?;

	// -- Check
	assert!(image.data_uri.starts_with("data:image/png;base64,"));
	assert_eq!(image.base64_payload(), "aW1hZ2U=");
	assert_eq!(image.declared_content_type, "image/webp");

	Ok(())
}

#[test]
fn test_extract_takes_first_inline_part() -> Result<()> {
	let body = serde_json::json!({
		"candidates": [{
			"content": {
				"parts": [
					{"text": "some commentary"},
					{"inlineData": {"mimeType": "image/png", "data": "Zmlyc3Q="}},
					{"inlineData": {"mimeType": "image/png", "data": "c2Vjb25k"}}
				]
			}
		}]
	});

	// -- Exec
	let image = gemini::to_gen_response(&test_model_iden(), ok_response(body))?;

	// -- Check
	assert_eq!(image.base64_payload(), "Zmlyc3Q=");

	Ok(())
}

#[test]
fn test_extract_no_image_part() {
	let body = support::text_only_body();
	let res = gemini::to_gen_response(&test_model_iden(), ok_response(body));
	assert!(matches!(res, Err(Error::NoImageInResponse { .. })));
}

#[test]
fn test_extract_remote_error_preserved() {
	let body = support::remote_error_body(429, "Resource has been exhausted");
	let res = gemini::to_gen_response(&test_model_iden(), ok_response(body));
	match res {
		Err(Error::RemoteService { code, message, .. }) => {
			assert_eq!(code, Some(429));
			assert_eq!(message, "Resource has been exhausted");
		}
		other => panic!("expected RemoteService error, got {other:?}"),
	}
}
