// region:    --- Modules

mod model_iden;

// -- Flatten
pub use model_iden::*;

// endregion: --- Modules
