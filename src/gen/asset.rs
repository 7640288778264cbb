use base64::Engine;
use base64::engine::general_purpose::STANDARD as B64;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// An opaque image payload plus its media-type tag, as produced by the caller
/// from a user-selected file. Immutable once constructed; the payload is kept
/// base64-encoded, ready for the inline-data wire format.
///
/// No validation of the image content happens here; malformed bytes are the
/// remote service's concern.
#[derive(Clone, Serialize, Deserialize)]
pub struct ImageAsset {
	/// Media type, e.g. `image/png`, `image/jpeg`.
	pub content_type: String,
	/// Base64-encoded image bytes.
	pub data: Arc<str>,
}

/// Constructors
impl ImageAsset {
	/// From already base64-encoded data.
	pub fn new(content_type: impl Into<String>, data: impl Into<Arc<str>>) -> Self {
		Self {
			content_type: content_type.into(),
			data: data.into(),
		}
	}

	/// From raw image bytes (encodes to base64).
	pub fn from_bytes(content_type: impl Into<String>, bytes: &[u8]) -> Self {
		Self {
			content_type: content_type.into(),
			data: B64.encode(bytes).into(),
		}
	}
}

// Note: Manual Debug, as the base64 payload can be megabytes.
impl std::fmt::Debug for ImageAsset {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("ImageAsset")
			.field("content_type", &self.content_type)
			.field("data", &format!("<{} base64 chars>", self.data.len()))
			.finish()
	}
}
