//! Rectangle and vector types shared by sprites and playback.

use serde::{Deserialize, Serialize};

/// Integer rectangle in texture space (a sprite's source rectangle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
	/// Left edge in pixels
	pub x: u32,
	/// Top edge in pixels
	pub y: u32,
	/// Width in pixels
	pub w: u32,
	/// Height in pixels
	pub h: u32,
}

impl Rect {
	/// Creates a new rectangle.
	pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}
}

impl std::fmt::Display for Rect {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {}, {}×{})", self.x, self.y, self.w, self.h)
	}
}

/// Floating-point rectangle in screen space (a destination rectangle).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RectF {
	/// Left edge
	pub x: f32,
	/// Top edge
	pub y: f32,
	/// Width
	pub w: f32,
	/// Height
	pub h: f32,
}

impl RectF {
	/// Creates a new rectangle.
	pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
		Self {
			x,
			y,
			w,
			h,
		}
	}

	/// Rectangle of size `w`×`h` whose bottom-centre sits where the bottom-centre
	/// of a `base`-sized box centred on `pos` would be.
	pub(crate) fn bottom_anchored(pos: Vec2f, base: RectF, w: f32, h: f32) -> Self {
		Self::new(pos.x - w * 0.5, pos.y + base.h * 0.5 - h, w, h)
	}
}

#[allow(clippy::cast_precision_loss)]
impl From<Rect> for RectF {
	fn from(rect: Rect) -> Self {
		Self::new(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
	}
}

/// 2D vector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2f {
	/// X component
	pub x: f32,
	/// Y component
	pub y: f32,
}

impl Vec2f {
	/// Creates a new vector.
	pub const fn new(x: f32, y: f32) -> Self {
		Self {
			x,
			y,
		}
	}
}

/// Mirroring applied when a sprite is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Flip {
	/// Draw as-is
	#[default]
	None,
	/// Mirror left to right
	Horizontal,
	/// Mirror top to bottom
	Vertical,
	/// Mirror on both axes
	Both,
}
