//! The `gen` module contains the data model of one generation call: the input
//! [`ImageAsset`]s and [`ContentPart`] sequence, the per-call [`GenOptions`],
//! and the single [`GeneratedImage`] output artifact.

// region:    --- Modules

mod asset;
mod gen_options;
mod gen_response;
mod part;

// -- Flatten
pub use asset::*;
pub use gen_options::*;
pub use gen_response::*;
pub use part::*;

// endregion: --- Modules
