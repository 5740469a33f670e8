//! Parsed animation definitions and their text serialization.

use std::{fmt, io, path::Path};

use serde::{Serialize, Serializer};

use crate::{
	file::AnimatError,
	geometry::Rect,
	sheet::SpritesheetRegistry,
	sprite::{Sprite, TextureHandle},
	text::TextView,
};

use super::{constants, parse_config::ParseConfig, parser::Parser};

fn serialize_texture_name<S: Serializer>(texture: &TextureHandle, serializer: S) -> Result<S::Ok, S::Error> {
	serializer.serialize_str(texture.name())
}

/// A frame animation as declared in a definition file.
///
/// All frames are cut from the one spritesheet named by the `sprite` key.
///
/// # Examples
///
/// ```
/// use animat_types::{file::animat::AnimatDescriptor, geometry::Rect, sheet::SpritesheetRegistry};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut sheets = SpritesheetRegistry::new();
/// sheets.register("spark1-sheet.png", 96, 32);
///
/// let source = "\
/// sprite = spark1-sheet.png
/// count = 1
/// duration = 80
/// frames.0.x = 32
/// frames.0.y = 0
/// frames.0.w = 32
/// frames.0.h = 32
/// ";
/// let descriptor = AnimatDescriptor::parse("spark.txt", source.as_bytes(), &sheets)?;
/// assert_eq!(descriptor.frames(), [Rect::new(32, 0, 32, 32)]);
///
/// // Dumping produces text the parser accepts again.
/// let again = AnimatDescriptor::parse("dump", descriptor.to_string().as_bytes(), &sheets)?;
/// assert_eq!(again, descriptor);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimatDescriptor {
	#[serde(rename = "sprite", serialize_with = "serialize_texture_name")]
	texture: TextureHandle,
	duration_ms: u32,
	frames: Vec<Rect>,
}

impl AnimatDescriptor {
	/// Creates a descriptor from already validated parts.
	///
	/// # Arguments
	/// * `texture` - Spritesheet every frame is cut from
	/// * `duration_ms` - Milliseconds per frame
	/// * `frames` - Source rectangles, one per frame
	pub fn from_parts(texture: TextureHandle, duration_ms: u32, frames: Vec<Rect>) -> Self {
		Self {
			texture,
			duration_ms,
			frames,
		}
	}

	/// Slices a horizontal strip spritesheet into equal-width frames.
	///
	/// Each frame is `texture.width() / frame_count` pixels wide and spans the
	/// full texture height.
	///
	/// # Errors
	/// Returns [`AnimatError::EmptyAnimation`] if `frame_count` is zero.
	pub fn from_horizontal_strip(
		texture: TextureHandle,
		frame_count: u32,
		duration_ms: u32,
	) -> Result<Self, AnimatError> {
		if frame_count == 0 {
			return Err(AnimatError::EmptyAnimation);
		}

		let sprite_w = texture.width() / frame_count;
		let sprite_h = texture.height();
		let frames = (0..frame_count).map(|i| Rect::new(i * sprite_w, 0, sprite_w, sprite_h)).collect();

		Ok(Self::from_parts(texture, duration_ms, frames))
	}

	/// Parses a definition with the default [`ParseConfig`].
	///
	/// # Arguments
	/// * `label` - Name used in diagnostics, usually the file path
	/// * `source` - Complete definition text
	/// * `registry` - Spritesheets the `sprite` key may refer to
	///
	/// # Errors
	/// Returns [`AnimatError::Parse`] for malformed text and
	/// [`AnimatError::UnknownSpritesheet`] for an unregistered sheet.
	pub fn parse(label: &str, source: &[u8], registry: &SpritesheetRegistry) -> Result<Self, AnimatError> {
		Self::parse_with_config(label, source, registry, &ParseConfig::default())
	}

	/// Parses a definition with a custom [`ParseConfig`].
	pub fn parse_with_config(
		label: &str,
		source: &[u8],
		registry: &SpritesheetRegistry,
		config: &ParseConfig,
	) -> Result<Self, AnimatError> {
		Parser::new(label, TextView::new(source), registry, *config).parse()
	}

	/// Reads and parses a definition file with the default [`ParseConfig`].
	///
	/// Diagnostics are labelled with the file path.
	pub fn open(path: impl AsRef<Path>, registry: &SpritesheetRegistry) -> Result<Self, AnimatError> {
		Self::open_with_config(path, registry, &ParseConfig::default())
	}

	/// Reads and parses a definition file with a custom [`ParseConfig`].
	pub fn open_with_config(
		path: impl AsRef<Path>,
		registry: &SpritesheetRegistry,
		config: &ParseConfig,
	) -> Result<Self, AnimatError> {
		let path = path.as_ref();
		let source = std::fs::read(path).map_err(|e| AnimatError::io(path, e))?;
		Self::parse_with_config(&path.display().to_string(), &source, registry, config)
	}

	/// Writes the definition to a file in the text format.
	pub fn save(&self, path: impl AsRef<Path>) -> Result<(), AnimatError> {
		let path = path.as_ref();
		std::fs::write(path, self.to_string()).map_err(|e| AnimatError::io(path, e))
	}

	/// Writes the definition in the text format.
	pub fn dump<W: io::Write>(&self, writer: &mut W) -> io::Result<()> {
		write!(writer, "{self}")
	}

	/// Spritesheet the frames are cut from.
	pub fn texture(&self) -> &TextureHandle {
		&self.texture
	}

	/// Number of frames.
	pub fn frame_count(&self) -> usize {
		self.frames.len()
	}

	/// Seconds each frame is shown.
	#[allow(clippy::cast_precision_loss)]
	pub fn frame_duration(&self) -> f32 {
		self.duration_ms as f32 / constants::MILLIS_PER_SECOND
	}

	/// Milliseconds each frame is shown, as written in the file.
	pub fn duration_ms(&self) -> u32 {
		self.duration_ms
	}

	/// Source rectangles in frame order.
	pub fn frames(&self) -> &[Rect] {
		&self.frames
	}

	/// Builds one sprite per frame, all sharing the descriptor's texture.
	pub fn sprites(&self) -> Vec<Sprite> {
		self.frames.iter().map(|&src| Sprite::new(TextureHandle::clone(&self.texture), src)).collect()
	}
}

impl fmt::Display for AnimatDescriptor {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "{} = {}", constants::KEY_SPRITE, self.texture.name())?;
		writeln!(f, "{} = {}", constants::KEY_COUNT, self.frames.len())?;
		writeln!(f, "{} = {}", constants::KEY_DURATION, self.duration_ms())?;
		writeln!(f)?;
		for (i, frame) in self.frames.iter().enumerate() {
			let values = [frame.x, frame.y, frame.w, frame.h];
			for (field, value) in constants::FRAME_FIELDS.iter().zip(values) {
				writeln!(f, "{}.{}.{} = {}", constants::KEY_FRAMES, i, field, value)?;
			}
		}
		Ok(())
	}
}
