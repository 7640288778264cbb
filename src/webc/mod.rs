//! The `webc` module owns the wire framing of the one outbound RPC this crate
//! performs: POSTing a JSON payload and getting a JSON body back.
//! Everything above it deals only in [`WebResponse`] / [`Error`].

// region:    --- Modules

mod error;
mod web_client;

pub use error::{Error, Result};
pub use web_client::*;

// endregion: --- Modules

/// A successful (2xx) response: status plus the parsed JSON body.
#[derive(Debug)]
pub struct WebResponse {
	pub status: reqwest::StatusCode,
	pub body: serde_json::Value,
}
