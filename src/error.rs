use crate::ModelIden;
use crate::webc;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Main `fitgen` error type.
#[derive(Debug, From)]
pub enum Error {
	/// No API key was provided (or it was blank after trimming).
	/// Raised before any network call is made.
	MissingApiKey,

	/// A structurally valid response came back without any inline-image part.
	/// The invoker treats this as retryable, as it may be a transient model refusal.
	NoImageInResponse { model_iden: ModelIden },

	/// The service answered with a top-level `error` object in the response body.
	/// `code` and `message` are preserved verbatim for the caller (and for the
	/// retry classification).
	RemoteService {
		model_iden: ModelIden,
		code: Option<i64>,
		message: String,
	},

	/// Transport-level failure (connect error, non-2xx status, body decode).
	WebModelCall {
		model_iden: ModelIden,
		webc_error: webc::Error,
	},

	// -- Modules
	#[from]
	JsonValueExt(value_ext::JsonValueExtError),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
