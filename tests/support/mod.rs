//! Some support utilities for the tests
//! Note: Must be imported in each test file

#![allow(unused)] // For test support

use fitgen::adapter::WebRequestData;
use fitgen::exec::Transport;
use fitgen::webc;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::Mutex;
use tokio::time::Instant;

pub type Result<T> = core::result::Result<T, Box<dyn std::error::Error>>;

pub const TEST_API_KEY: &str = "test-api-key";

// region:    --- Response Bodies

/// A `generateContent` body whose first candidate carries one inline image part
/// (preceded by a text commentary part, which extraction must skip).
pub fn inline_image_body(mime_type: &str, b64_data: &str) -> Value {
	json!({
		"candidates": [{
			"content": {
				"parts": [
					{"text": "Here is your image."},
					{"inlineData": {"mimeType": mime_type, "data": b64_data}}
				]
			}
		}]
	})
}

/// A structurally valid body with zero inline-image parts.
pub fn text_only_body() -> Value {
	json!({
		"candidates": [{
			"content": {
				"parts": [{"text": "I cannot generate that image right now."}]
			}
		}]
	})
}

/// A 200 body carrying a top-level service error object.
pub fn remote_error_body(code: i64, message: &str) -> Value {
	json!({
		"error": {"code": code, "message": message, "status": "UNKNOWN"}
	})
}

// endregion: --- Response Bodies

// region:    --- FakeTransport

/// One scripted reply of the fake endpoint.
#[derive(Debug, Clone)]
pub enum FakeReply {
	/// 200 with the given JSON body.
	Json(Value),
	/// Non-2xx status with the given body text.
	Status(u16, &'static str),
}

/// A scripted stand-in for the remote endpoint. Records the (virtual) instant
/// of each call so backoff timing can be asserted under a paused tokio clock.
#[derive(Debug, Default)]
pub struct FakeTransport {
	replies: Mutex<VecDeque<FakeReply>>,
	call_instants: Mutex<Vec<Instant>>,
}

impl FakeTransport {
	pub fn new(replies: impl IntoIterator<Item = FakeReply>) -> Self {
		Self {
			replies: Mutex::new(replies.into_iter().collect()),
			call_instants: Mutex::new(Vec::new()),
		}
	}

	pub fn call_count(&self) -> usize {
		self.call_instants.lock().unwrap().len()
	}

	pub fn call_instants(&self) -> Vec<Instant> {
		self.call_instants.lock().unwrap().clone()
	}
}

impl Transport for FakeTransport {
	async fn submit(&self, _request_data: &WebRequestData) -> webc::Result<webc::WebResponse> {
		self.call_instants.lock().unwrap().push(Instant::now());
		let reply = self
			.replies
			.lock()
			.unwrap()
			.pop_front()
			.expect("FakeTransport received more calls than scripted replies");

		match reply {
			FakeReply::Json(body) => Ok(webc::WebResponse {
				status: reqwest::StatusCode::OK,
				body,
			}),
			FakeReply::Status(code, body) => Err(webc::Error::ResponseFailedStatus {
				status: reqwest::StatusCode::from_u16(code).expect("valid status code"),
				body: body.to_string(),
			}),
		}
	}
}

// endregion: --- FakeTransport
