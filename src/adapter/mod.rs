// region:    --- Modules

pub mod gemini;

// endregion: --- Modules

// region:    --- WebRequestData

/// The fully assembled outbound request: final URL (credential included),
/// headers, and JSON payload. Produced by the request builder, consumed by the
/// transport.
#[derive(Debug, Clone)]
pub struct WebRequestData {
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub payload: serde_json::Value,
}

// endregion: --- WebRequestData
