// region:    --- Modules

mod builder;
mod client_impl;
mod config;
mod service_target;

// -- Flatten
pub use builder::*;
pub use client_impl::*;
pub use config::*;
pub use service_target::*;

// endregion: --- Modules
