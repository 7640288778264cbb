//! `fitgen` is a client library for virtual try-on image compositing on top of
//! Gemini-style `generateContent` image models.
//!
//! Two operations are exposed through the [`Client`]:
//!
//! - [`Client::exec_generate_composite`] - a "model" photo plus a "product" photo plus a
//!   pose/scene instruction produce one composite image.
//! - [`Client::exec_edit_image`] - an existing image plus a free-text edit instruction
//!   produce one refined image.
//!
//! Both return exactly one [`gen::GeneratedImage`] (a `data:image/png;base64,..` data URI)
//! or one terminal [`Error`]. Transient service faults (overload, internal errors) are
//! retried with bounded exponential backoff; see the [`exec`] module.
//!
//! The API key is presented fresh on every call and never cached by the client.

// region:    --- Modules

mod client;
mod common;
mod error;

pub mod adapter;
pub mod exec;
pub mod r#gen;
pub mod resolver;
pub mod webc;

// -- Flatten
pub use client::*;
pub use common::*;
pub use error::{Error, Result};

// endregion: --- Modules
