use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;

/// Transport-level error. Kept separate from the crate error so the wire layer
/// stays self-contained; the caller wraps it into `crate::Error::WebModelCall`.
#[derive(Debug, From)]
pub enum Error {
	/// The service answered with a non-2xx status. The raw body text is kept
	/// so the failure classification can inspect the service error message.
	ResponseFailedStatus {
		status: reqwest::StatusCode,
		body: String,
	},

	#[from]
	Reqwest(reqwest::Error),
}

// region:    --- Error Boilerplate

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}

// endregion: --- Error Boilerplate
