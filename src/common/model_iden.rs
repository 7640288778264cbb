use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The identifier of the remote model a request is addressed to.
/// Designed to be efficiently clonable, and carried in errors so the caller
/// can tell which model a failure came from.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct ModelIden {
	pub model_name: Arc<str>,
}

/// Constructors
impl ModelIden {
	pub fn new(model_name: impl Into<Arc<str>>) -> Self {
		Self {
			model_name: model_name.into(),
		}
	}
}

impl core::fmt::Display for ModelIden {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{}", self.model_name)
	}
}
