//! The resolver module holds the two per-call capabilities a request is addressed
//! with: the service [`Endpoint`] and the [`AuthData`] credential.
//!
//! Credentials are supplied fresh on every invocation and are never cached
//! anywhere in this crate.

// region:    --- Modules

mod auth_data;
mod endpoint;

// -- Flatten
pub use auth_data::*;
pub use endpoint::*;

// endregion: --- Modules
