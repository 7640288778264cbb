use crate::r#gen::ImageAsset;
use serde::{Deserialize, Serialize};

/// One element of the ordered request body: a text fragment or an image.
///
/// Order is semantically significant - a label text must precede the image it
/// describes, which is why builders return a `Vec<ContentPart>` rather than a
/// set of named fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ContentPart {
	Text(String),
	Image(ImageAsset),
}

/// Convenience constructors
impl ContentPart {
	pub fn from_text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	pub fn from_image(asset: ImageAsset) -> Self {
		Self::Image(asset)
	}
}

/// Getters
impl ContentPart {
	/// Returns the text if this part is a `Text` part.
	pub fn text_as_str(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			Self::Image(_) => None,
		}
	}

	pub fn is_image(&self) -> bool {
		matches!(self, Self::Image(_))
	}
}
