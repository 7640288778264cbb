use crate::adapter::WebRequestData;
use crate::adapter::gemini;
use crate::exec::{RetryPolicy, Transport};
use crate::r#gen::GeneratedImage;
use crate::webc;
use crate::{Error, ModelIden, Result};
use std::time::Duration;

/// Substrings of a service error message that mark it as transient.
/// Case-sensitive, by design of the upstream service's wording; this is an
/// approximation, which is why it lives behind [`classify_failure`] only.
const TRANSIENT_MESSAGE_MARKERS: &[&str] = &["overloaded", "Internal error"];

// region:    --- Failure Classification

/// Whether a failed attempt may be retried.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum FailureClass {
	Retryable,
	Fatal,
}

/// Classify one failed attempt.
///
/// Retryable iff the error signals server overload or a transient internal
/// fault: HTTP status or service error code 500/503, or an error message
/// containing one of the known transient markers. The "no image in response"
/// condition is also retryable, since it may be a transient model refusal
/// rather than a hard one.
///
/// Everything else (auth, malformed request, quota, ...) is fatal and must
/// surface immediately with its original detail intact.
pub fn classify_failure(error: &Error) -> FailureClass {
	match error {
		Error::NoImageInResponse { .. } => FailureClass::Retryable,
		Error::RemoteService { code, message, .. } => {
			if matches!(code, Some(500 | 503)) || has_transient_marker(message) {
				FailureClass::Retryable
			} else {
				FailureClass::Fatal
			}
		}
		Error::WebModelCall { webc_error, .. } => match webc_error {
			webc::Error::ResponseFailedStatus { status, body } => {
				if matches!(status.as_u16(), 500 | 503) || has_transient_marker(body) {
					FailureClass::Retryable
				} else {
					FailureClass::Fatal
				}
			}
			webc::Error::Reqwest(reqwest_error) => {
				if has_transient_marker(&reqwest_error.to_string()) {
					FailureClass::Retryable
				} else {
					FailureClass::Fatal
				}
			}
		},
		_ => FailureClass::Fatal,
	}
}

fn has_transient_marker(message: &str) -> bool {
	TRANSIENT_MESSAGE_MARKERS.iter().any(|marker| message.contains(marker))
}

// endregion: --- Failure Classification

// region:    --- Invoke

/// The retry state machine. One invocation walks
/// `Attempting -> (BackingOff -> Attempting)* -> Ok | Err`.
#[derive(Debug)]
enum InvokeState {
	Attempting { attempt: u32 },
	BackingOff { attempt: u32, delay: Duration },
}

/// Submit one assembled request and return exactly one [`GeneratedImage`],
/// retrying transient failures with exponential backoff (2s, 4s, 8s, ...).
///
/// - Success on any attempt returns immediately.
/// - A fatal failure, or a retryable failure on the last permitted attempt,
///   propagates the most recent error unmodified.
pub async fn invoke(
	transport: &impl Transport,
	model_iden: &ModelIden,
	request_data: &WebRequestData,
	policy: RetryPolicy,
) -> Result<GeneratedImage> {
	let max_attempts = policy.max_attempts.max(1);
	let mut state = InvokeState::Attempting { attempt: 0 };

	loop {
		state = match state {
			InvokeState::Attempting { attempt } => {
				let error = match attempt_once(transport, model_iden, request_data).await {
					Ok(image) => {
						tracing::debug!(target: "fitgen_exec", model = %model_iden, attempt, "generation succeeded");
						return Ok(image);
					}
					Err(error) => error,
				};

				let exhausted = attempt + 1 >= max_attempts;
				match classify_failure(&error) {
					FailureClass::Fatal => {
						tracing::debug!(target: "fitgen_exec", model = %model_iden, attempt, %error, "fatal failure");
						return Err(error);
					}
					FailureClass::Retryable if exhausted => {
						tracing::debug!(target: "fitgen_exec", model = %model_iden, attempt, %error, "attempts exhausted");
						return Err(error);
					}
					FailureClass::Retryable => {
						let delay = RetryPolicy::backoff_delay(attempt);
						tracing::warn!(
							target: "fitgen_exec",
							model = %model_iden,
							attempt,
							delay_secs = delay.as_secs(),
							%error,
							"transient failure, backing off"
						);
						InvokeState::BackingOff { attempt, delay }
					}
				}
			}
			InvokeState::BackingOff { attempt, delay } => {
				tokio::time::sleep(delay).await;
				InvokeState::Attempting { attempt: attempt + 1 }
			}
		};
	}
}

/// One remote round-trip: submit, then extract the image.
async fn attempt_once(
	transport: &impl Transport,
	model_iden: &ModelIden,
	request_data: &WebRequestData,
) -> Result<GeneratedImage> {
	let web_response = transport.submit(request_data).await.map_err(|webc_error| Error::WebModelCall {
		model_iden: model_iden.clone(),
		webc_error,
	})?;

	gemini::to_gen_response(model_iden, web_response)
}

// endregion: --- Invoke
