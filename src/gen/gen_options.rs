//! `GenOptions` carries the per-call output configuration (aspect ratio and
//! resolution tier). It is a value object: supplied fresh by the caller on each
//! invocation, never mutated by the pipeline.

use serde::{Deserialize, Serialize};

/// Per-call generation configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenOptions {
	/// Output aspect ratio. When absent, the service default applies.
	pub aspect_ratio: Option<AspectRatio>,

	/// Output resolution tier. When absent, the service default applies.
	pub image_size: Option<ImageSize>,
}

/// Chainable Setters
impl GenOptions {
	#[must_use]
	pub const fn with_aspect_ratio(mut self, aspect_ratio: AspectRatio) -> Self {
		self.aspect_ratio = Some(aspect_ratio);
		self
	}

	#[must_use]
	pub const fn with_image_size(mut self, image_size: ImageSize) -> Self {
		self.image_size = Some(image_size);
		self
	}
}

// region:    --- AspectRatio

/// The output aspect ratios the generation endpoint accepts.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum AspectRatio {
	#[serde(rename = "1:1")]
	Square,
	#[serde(rename = "3:4")]
	Portrait3x4,
	#[serde(rename = "4:3")]
	Landscape4x3,
	#[serde(rename = "9:16")]
	Portrait9x16,
	#[serde(rename = "16:9")]
	Landscape16x9,
}

impl AspectRatio {
	/// The wire string, e.g. `"9:16"`.
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Square => "1:1",
			Self::Portrait3x4 => "3:4",
			Self::Landscape4x3 => "4:3",
			Self::Portrait9x16 => "9:16",
			Self::Landscape16x9 => "16:9",
		}
	}
}

impl core::fmt::Display for AspectRatio {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{}", self.as_str())
	}
}

// endregion: --- AspectRatio

// region:    --- ImageSize

/// The output resolution tier.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum ImageSize {
	#[serde(rename = "1K")]
	Size1K,
	#[serde(rename = "2K")]
	Size2K,
}

impl ImageSize {
	#[must_use]
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Size1K => "1K",
			Self::Size2K => "2K",
		}
	}
}

impl core::fmt::Display for ImageSize {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::fmt::Result {
		write!(fmt, "{}", self.as_str())
	}
}

// endregion: --- ImageSize
