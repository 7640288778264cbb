use serde::{Deserialize, Serialize};
use std::sync::Arc;

const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// The single output artifact of a successful invocation.
///
/// The data URI is always PNG-typed (`data:image/png;base64,..`) regardless of
/// the media type the service declared for the inline part - this matches the
/// observed service behavior and is part of the crate's contract. The declared
/// type is kept alongside for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
	/// Self-describing `data:image/png;base64,<payload>` URI.
	pub data_uri: Arc<str>,

	/// The media type the service declared for the inline part (e.g. `image/png`).
	pub declared_content_type: String,
}

/// Constructors
impl GeneratedImage {
	/// From the inline part of a response: the declared media type and the
	/// base64 payload.
	pub fn from_inline(declared_content_type: impl Into<String>, b64_data: &str) -> Self {
		Self {
			data_uri: format!("{PNG_DATA_URI_PREFIX}{b64_data}").into(),
			declared_content_type: declared_content_type.into(),
		}
	}
}

/// Getters
impl GeneratedImage {
	/// The base64 payload, without the data-URI prefix.
	#[must_use]
	pub fn base64_payload(&self) -> &str {
		self.data_uri.strip_prefix(PNG_DATA_URI_PREFIX).unwrap_or(&self.data_uri)
	}
}
