//! Sprites, shared texture handles and the rendering seam.
//!
//! Decoding images and talking to the GPU happen outside this crate. A
//! [`Texture`] only records what the animation code needs to know about a
//! decoded image (its registry name and size), and a [`Renderer`] receives
//! the final copy calls.

use std::sync::Arc;

use crate::geometry::{Flip, Rect, RectF, Vec2f};

/// Metadata of a decoded image owned by the rendering backend.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Texture {
	name: String,
	width: u32,
	height: u32,
}

impl Texture {
	/// Creates texture metadata.
	pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
		Self {
			name: name.into(),
			width,
			height,
		}
	}

	/// Name the texture is registered under.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Width in pixels.
	pub fn width(&self) -> u32 {
		self.width
	}

	/// Height in pixels.
	pub fn height(&self) -> u32 {
		self.height
	}

	/// Rectangle covering the whole image.
	pub fn bounds(&self) -> Rect {
		Rect::new(0, 0, self.width, self.height)
	}
}

/// Shared, read-only reference to a texture.
pub type TextureHandle = Arc<Texture>;

/// Sub-rectangle of a texture.
///
/// Any number of sprites may share one [`TextureHandle`] (a spritesheet);
/// none of them owns the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
	/// Source rectangle in texture space
	pub src: Rect,
	/// Texture the rectangle is cut from
	pub texture: TextureHandle,
}

impl Sprite {
	/// Creates a sprite from a texture region.
	pub fn new(texture: TextureHandle, src: Rect) -> Self {
		Self {
			src,
			texture,
		}
	}

	/// Sprite covering the whole texture.
	pub fn from_texture(texture: TextureHandle) -> Self {
		Self {
			src: texture.bounds(),
			texture,
		}
	}

	/// Destination rectangle of the sprite's own size centred on `pos`.
	#[allow(clippy::cast_precision_loss)]
	pub fn centered_rect(&self, pos: Vec2f) -> RectF {
		let w = self.src.w as f32;
		let h = self.src.h as f32;
		RectF::new(pos.x - w * 0.5, pos.y - h * 0.5, w, h)
	}
}

/// Backend that copies texture regions to the screen.
pub trait Renderer {
	/// Error reported by the backend.
	type Error;

	/// Copies `src` of `texture` into `dst`, mirrored according to `flip`.
	fn copy(&mut self, texture: &Texture, src: Rect, dst: RectF, flip: Flip) -> Result<(), Self::Error>;
}

/// Draws `sprite` into `dst`.
pub fn render_sprite<R: Renderer + ?Sized>(
	renderer: &mut R,
	sprite: &Sprite,
	dst: RectF,
	flip: Flip,
) -> Result<(), R::Error> {
	renderer.copy(&sprite.texture, sprite.src, dst, flip)
}

/// Draws `sprite` at its own size centred on `pos`.
pub fn render_sprite_at<R: Renderer + ?Sized>(
	renderer: &mut R,
	sprite: &Sprite,
	pos: Vec2f,
	flip: Flip,
) -> Result<(), R::Error> {
	render_sprite(renderer, sprite, sprite.centered_rect(pos), flip)
}
