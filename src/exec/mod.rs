//! The `exec` module is the resilient invoker: it submits one assembled request
//! over a [`Transport`], classifies failures as retryable or fatal, applies
//! bounded exponential backoff between attempts, and extracts exactly one
//! image artifact from a successful response.
//!
//! One invocation is strictly sequential: a single in-flight request at a time,
//! and the backoff is a plain suspension point. No state is shared across
//! invocations.

// region:    --- Modules

mod invoker;
mod ops;
mod retry_policy;

// -- Flatten
pub use invoker::*;
pub use ops::*;
pub use retry_policy::*;

// endregion: --- Modules

use crate::adapter::WebRequestData;
use crate::webc;

/// Capability seam to the remote endpoint, injected per call so tests can
/// substitute a fake without any shared global state. The crate's
/// [`webc::WebClient`](crate::webc::WebClient) is the production implementation.
pub trait Transport: Sync {
	fn submit(
		&self,
		request_data: &WebRequestData,
	) -> impl Future<Output = webc::Result<webc::WebResponse>> + Send;
}

impl Transport for webc::WebClient {
	async fn submit(&self, request_data: &WebRequestData) -> webc::Result<webc::WebResponse> {
		self.do_post(request_data).await
	}
}
