use crate::{Error, Result};
use std::sync::Arc;

/// The API credential for one invocation, presented as a bearer-style key string.
///
/// The key is only trimmed; no format validation is performed before use
/// (an invalid key is the remote service's concern).
#[derive(Clone, serde::Serialize, serde::Deserialize)]
pub struct AuthData {
	key: Arc<str>,
}

/// Constructors
impl AuthData {
	pub fn from_key(key: impl Into<Arc<str>>) -> Self {
		Self { key: key.into() }
	}
}

/// Getters
impl AuthData {
	/// Returns the trimmed key value, or `Error::MissingApiKey` when it is blank.
	pub fn key_value(&self) -> Result<&str> {
		let key = self.key.trim();
		if key.is_empty() {
			Err(Error::MissingApiKey)
		} else {
			Ok(key)
		}
	}
}

// Note: Manual Debug so the key never lands in logs or error chains.
impl std::fmt::Debug for AuthData {
	fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		fmt.debug_struct("AuthData").field("key", &"<redacted>").finish()
	}
}
